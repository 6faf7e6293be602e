//! Where a form goes after a successful submit.
use std::fmt;

use url::Url;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route(String);

impl Route {
    /// Detail page of a stored post.
    pub fn post_detail(post_id: &str) -> Self {
        Self(format!("/posts/post/{post_id}"))
    }

    pub fn path(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

pub trait Navigator {
    fn navigate(&mut self, route: &Route);
}

/// Prints the client URL of the route to stdout.
#[derive(Debug, Clone)]
pub struct ConsoleNavigator {
    client_base_url: Url,
}

impl ConsoleNavigator {
    pub fn new(client_base_url: Url) -> Self {
        Self { client_base_url }
    }

    /// Client URL of `route`, kept below any path prefix of the client base url.
    pub fn url_for(&self, route: &Route) -> String {
        let mut url = self.client_base_url.clone();
        match url.path_segments_mut() {
            Ok(mut segments) => {
                segments
                    .pop_if_empty()
                    .extend(route.path().trim_start_matches('/').split('/'));
            }
            Err(_) => return route.to_string(),
        }
        url.to_string()
    }
}

impl Navigator for ConsoleNavigator {
    fn navigate(&mut self, route: &Route) {
        let url = self.url_for(route);
        tracing::info!(%url, "navigating");
        println!("{url}");
    }
}
