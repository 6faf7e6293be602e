//! Submit flow of the post forms: validate, upload, persist, navigate.
//!
//! Nothing reaches the network while a form has validation errors. A failed persist call
//! is logged and leaves the form as it was; images already uploaded for that attempt stay
//! on the backend.
use crate::api::dto::{CreatePostRequest, PostResponse, UpdatePostRequest};
use crate::api::{ApiError, ApiResult, PostApi};
use crate::forms::{CreateForm, CurrentUser, EditForm, ValidationErrors};
use crate::services::navigation::{Navigator, Route};
use crate::services::upload;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitPhase {
    Idle,
    Validating,
    Uploading,
    Persisting,
    Navigated,
}

#[derive(Debug)]
pub enum SubmitOutcome {
    /// Errors to show next to the fields. No request was sent.
    Invalid(ValidationErrors),
    Navigated(Route),
    /// Persisting failed. The user stays on the form and may submit again.
    Failed(ApiError),
}

pub struct SubmitController<A, N> {
    api: A,
    navigator: N,
    user: CurrentUser,
    phase: SubmitPhase,
}

impl<A: PostApi, N: Navigator> SubmitController<A, N> {
    pub fn new(api: A, navigator: N, user: CurrentUser) -> Self {
        Self {
            api,
            navigator,
            user,
            phase: SubmitPhase::Idle,
        }
    }

    pub fn phase(&self) -> SubmitPhase {
        self.phase
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    /// Fetches a stored post and builds the edit form from it.
    pub async fn load_edit_form(&self, post_id: &str) -> ApiResult<EditForm> {
        let post = self.api.get_post(post_id).await.inspect_err(|e| {
            tracing::error!(post_id, error = %e, "failed to fetch post");
        })?;
        Ok(EditForm::hydrate(post_id, post))
    }

    pub async fn submit_create(&mut self, form: &mut CreateForm) -> SubmitOutcome {
        self.phase = SubmitPhase::Validating;
        if !form.validate() {
            return self.reject(form.errors().clone());
        }

        let mut photos = Vec::new();
        if !form.files().is_empty() {
            self.phase = SubmitPhase::Uploading;
            let results = upload::upload_all(&self.api, form.files()).await;
            photos = upload::successful(results);
            tracing::info!(
                selected = form.files().len(),
                uploaded = photos.len(),
                "images uploaded"
            );
        }

        let draft = form.draft();
        let req = CreatePostRequest {
            title: draft.title.clone(),
            desc: draft.desc.clone(),
            username: self.user.username.clone(),
            user_id: self.user.user_id.clone(),
            categories: draft.categories.clone(),
            photos,
        };

        self.phase = SubmitPhase::Persisting;
        let result = self.api.create_post(&req).await;
        self.finish(result)
    }

    pub async fn submit_edit(&mut self, form: &mut EditForm) -> SubmitOutcome {
        self.phase = SubmitPhase::Validating;
        if !form.validate() {
            return self.reject(form.errors().clone());
        }

        let mut photo = form.photo().map(str::to_string);
        if let Some(file) = form.file() {
            self.phase = SubmitPhase::Uploading;
            match upload::upload_one(&self.api, file).await {
                Some(filename) => photo = Some(filename),
                None => tracing::warn!(
                    post_id = form.post_id(),
                    "keeping the existing photo after a failed upload"
                ),
            }
        }

        let draft = form.draft();
        let req = UpdatePostRequest {
            title: draft.title.clone(),
            desc: draft.desc.clone(),
            username: self.user.username.clone(),
            user_id: self.user.user_id.clone(),
            categories: draft.categories.clone(),
            photo,
        };

        self.phase = SubmitPhase::Persisting;
        let result = self.api.update_post(form.post_id(), &req).await;
        self.finish(result)
    }

    fn reject(&mut self, errors: ValidationErrors) -> SubmitOutcome {
        tracing::info!(%errors, "form is invalid");
        self.phase = SubmitPhase::Idle;
        SubmitOutcome::Invalid(errors)
    }

    fn finish(&mut self, result: ApiResult<PostResponse>) -> SubmitOutcome {
        match result {
            Ok(post) => {
                let route = Route::post_detail(&post.id);
                self.navigator.navigate(&route);
                self.phase = SubmitPhase::Navigated;
                SubmitOutcome::Navigated(route)
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to save post");
                self.phase = SubmitPhase::Idle;
                SubmitOutcome::Failed(e)
            }
        }
    }
}
