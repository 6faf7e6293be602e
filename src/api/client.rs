//! Backend interface used by the submit flows.
use async_trait::async_trait;

use crate::api::dto::{CreatePostRequest, PostResponse, UpdatePostRequest};
use crate::api::error::ApiResult;
use crate::forms::SelectedFile;

/// The subset of the blog backend the post forms talk to.
///
/// Implementations must be cheap to clone (typically `Arc<...>` inside).
#[async_trait]
pub trait PostApi: Clone + Send + Sync + 'static {
    // Stores `file` under the client-generated `filename`.
    async fn upload(&self, filename: &str, file: &SelectedFile) -> ApiResult<()>;

    async fn create_post(&self, req: &CreatePostRequest) -> ApiResult<PostResponse>;

    async fn get_post(&self, post_id: &str) -> ApiResult<PostResponse>;

    async fn update_post(
        &self,
        post_id: &str,
        req: &UpdatePostRequest,
    ) -> ApiResult<PostResponse>;
}
