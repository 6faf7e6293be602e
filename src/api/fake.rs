//! In-memory [`PostApi`] that records calls, for service tests.
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::Barrier;

use crate::api::client::PostApi;
use crate::api::dto::{CreatePostRequest, PostResponse, UpdatePostRequest};
use crate::api::error::{ApiError, ApiResult};
use crate::forms::SelectedFile;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Upload { filename: String },
    Create(CreatePostRequest),
    Get(String),
    Update(String, UpdatePostRequest),
}

#[derive(Debug, Default)]
struct Inner {
    calls: Vec<Call>,
    // uploads of files whose original name contains one of these fail
    failing_uploads: Vec<String>,
    fail_persist: bool,
    stored: Option<PostResponse>,
    // every upload waits here until all participants have arrived
    upload_barrier: Option<Arc<Barrier>>,
}

#[derive(Clone, Debug, Default)]
pub struct FakeApi {
    inner: Arc<Mutex<Inner>>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_uploads_of(self, name: &str) -> Self {
        self.inner
            .lock()
            .unwrap()
            .failing_uploads
            .push(name.to_string());
        self
    }

    pub fn fail_persist(self) -> Self {
        self.inner.lock().unwrap().fail_persist = true;
        self
    }

    pub fn with_stored(self, post: PostResponse) -> Self {
        self.inner.lock().unwrap().stored = Some(post);
        self
    }

    /// Makes each upload block until `n` uploads are in flight at once.
    pub fn hold_uploads_until(self, n: usize) -> Self {
        self.inner.lock().unwrap().upload_barrier = Some(Arc::new(Barrier::new(n)));
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.inner.lock().unwrap().calls.clone()
    }

    fn server_error() -> ApiError {
        ApiError::Status {
            status: 500,
            body: "boom".to_string(),
        }
    }

    fn echo(id: &str, title: &str) -> PostResponse {
        PostResponse {
            id: id.to_string(),
            title: title.to_string(),
            desc: String::new(),
            photo: None,
            categories: Vec::new(),
        }
    }
}

#[async_trait]
impl PostApi for FakeApi {
    async fn upload(&self, filename: &str, file: &SelectedFile) -> ApiResult<()> {
        let barrier = self.inner.lock().unwrap().upload_barrier.clone();
        match barrier {
            Some(barrier) => {
                barrier.wait().await;
            }
            // yield so concurrent uploads interleave
            None => tokio::task::yield_now().await,
        }
        let mut inner = self.inner.lock().unwrap();
        inner.calls.push(Call::Upload {
            filename: filename.to_string(),
        });
        if inner
            .failing_uploads
            .iter()
            .any(|bad| file.name.contains(bad.as_str()))
        {
            return Err(Self::server_error());
        }
        Ok(())
    }

    async fn create_post(&self, req: &CreatePostRequest) -> ApiResult<PostResponse> {
        let mut inner = self.inner.lock().unwrap();
        inner.calls.push(Call::Create(req.clone()));
        if inner.fail_persist {
            return Err(Self::server_error());
        }
        Ok(Self::echo("created-1", &req.title))
    }

    async fn get_post(&self, post_id: &str) -> ApiResult<PostResponse> {
        let mut inner = self.inner.lock().unwrap();
        inner.calls.push(Call::Get(post_id.to_string()));
        inner.stored.clone().ok_or(ApiError::Status {
            status: 404,
            body: "not found".to_string(),
        })
    }

    async fn update_post(
        &self,
        post_id: &str,
        req: &UpdatePostRequest,
    ) -> ApiResult<PostResponse> {
        let mut inner = self.inner.lock().unwrap();
        inner
            .calls
            .push(Call::Update(post_id.to_string(), req.clone()));
        if inner.fail_persist {
            return Err(Self::server_error());
        }
        Ok(Self::echo(post_id, &req.title))
    }
}
