//! `reqwest`-backed implementation of [`PostApi`].
use std::sync::Arc;

use async_trait::async_trait;
use reqwest::cookie::Jar;
use reqwest::multipart::{Form, Part};
use url::Url;

use crate::api::client::PostApi;
use crate::api::dto::{CreatePostRequest, PostResponse, UpdatePostRequest};
use crate::api::error::{ApiError, ApiResult};
use crate::forms::SelectedFile;

// Cookie the backend reads the session from.
const SESSION_COOKIE: &str = "token";

/// HTTP client for the blog backend.
///
/// Requests carry the session cookie, so create/update calls are sent with credentials.
#[derive(Clone, Debug)]
pub struct HttpPostApi {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpPostApi {
    pub fn new(base_url: Url, session_token: Option<&str>) -> ApiResult<Self> {
        if base_url.cannot_be_a_base() {
            return Err(ApiError::InvalidBaseUrl(base_url.to_string()));
        }

        let jar = Arc::new(Jar::default());
        if let Some(token) = session_token {
            jar.add_cookie_str(&format!("{SESSION_COOKIE}={token}; Path=/"), &base_url);
        }

        let client = reqwest::Client::builder()
            .user_agent(concat!("post-editor/", env!("CARGO_PKG_VERSION")))
            .cookie_provider(jar)
            .build()?;

        Ok(Self { client, base_url })
    }

    /// Appends `segments` to the base url, keeping any path prefix it carries.
    /// Each segment is percent-encoded, so ids cannot add path levels or a query.
    fn url<'a>(&self, segments: impl IntoIterator<Item = &'a str>) -> ApiResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidBaseUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}

async fn ensure_success(resp: reqwest::Response) -> ApiResult<reqwest::Response> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let body = resp.text().await.unwrap_or_default();
    Err(ApiError::Status {
        status: status.as_u16(),
        body,
    })
}

#[async_trait]
impl PostApi for HttpPostApi {
    async fn upload(&self, filename: &str, file: &SelectedFile) -> ApiResult<()> {
        let part = Part::bytes(file.bytes.clone())
            .file_name(file.name.clone())
            .mime_str(file.mime().essence_str())?;
        // `img` must precede `file`; the backend names the stored file while streaming it.
        let form = Form::new()
            .text("img", filename.to_string())
            .part("file", part);

        tracing::debug!(filename, size = file.bytes.len(), "uploading image");
        let resp = self
            .client
            .post(self.url(["api", "upload"])?)
            .multipart(form)
            .send()
            .await?;
        ensure_success(resp).await?;
        Ok(())
    }

    async fn create_post(&self, req: &CreatePostRequest) -> ApiResult<PostResponse> {
        tracing::debug!(title = %req.title, photos = req.photos.len(), "creating post");
        let resp = self
            .client
            .post(self.url(["api", "posts", "create"])?)
            .json(req)
            .send()
            .await?;
        Ok(ensure_success(resp).await?.json().await?)
    }

    async fn get_post(&self, post_id: &str) -> ApiResult<PostResponse> {
        let resp = self
            .client
            .get(self.url(["api", "posts", post_id])?)
            .send()
            .await?;
        Ok(ensure_success(resp).await?.json().await?)
    }

    async fn update_post(
        &self,
        post_id: &str,
        req: &UpdatePostRequest,
    ) -> ApiResult<PostResponse> {
        tracing::debug!(post_id, photo = ?req.photo, "updating post");
        let resp = self
            .client
            .put(self.url(["api", "posts", post_id])?)
            .json(req)
            .send()
            .await?;
        Ok(ensure_success(resp).await?.json().await?)
    }
}
