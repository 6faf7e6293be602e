//! State of the "update a post" form, hydrated from the stored post.
use crate::api::dto::PostResponse;
use crate::forms::categories;
use crate::forms::draft::{FlowKind, PostDraft, SelectedFile};
use crate::forms::validate::{ValidationErrors, validate};

#[derive(Debug)]
pub struct EditForm {
    post_id: String,
    draft: PostDraft,
    category_input: String,
    // photo identifier already stored with the post
    photo: Option<String>,
    file: Option<SelectedFile>,
    errors: ValidationErrors,
}

impl EditForm {
    /// An empty form for `post_id`, used before (or instead of) hydration.
    pub fn new(post_id: impl Into<String>) -> Self {
        Self {
            post_id: post_id.into(),
            draft: PostDraft::default(),
            category_input: String::new(),
            photo: None,
            file: None,
            errors: ValidationErrors::default(),
        }
    }

    /// Fills the form from a fetched post.
    pub fn hydrate(post_id: impl Into<String>, post: PostResponse) -> Self {
        let mut form = Self::new(post_id);
        form.draft = PostDraft {
            title: post.title,
            desc: post.desc,
            categories: post.categories,
        };
        form.photo = post.photo.filter(|p| !p.is_empty());
        form
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.draft.title = title.into();
    }

    pub fn set_desc(&mut self, desc: impl Into<String>) {
        self.draft.desc = desc.into();
    }

    pub fn set_category_input(&mut self, input: impl Into<String>) {
        self.category_input = input.into();
    }

    pub fn add_category(&mut self) -> bool {
        let added = categories::add(&mut self.draft.categories, &self.category_input);
        if added {
            self.category_input.clear();
        }
        added
    }

    pub fn remove_category(&mut self, index: usize) {
        categories::remove_at(&mut self.draft.categories, index);
    }

    pub fn select_file(&mut self, file: Option<SelectedFile>) {
        self.file = file;
    }

    pub fn validate(&mut self) -> bool {
        self.errors = validate(&self.draft, FlowKind::Edit);
        self.errors.is_empty()
    }

    pub fn post_id(&self) -> &str {
        &self.post_id
    }

    pub fn draft(&self) -> &PostDraft {
        &self.draft
    }

    pub fn category_input(&self) -> &str {
        &self.category_input
    }

    pub fn photo(&self) -> Option<&str> {
        self.photo.as_deref()
    }

    pub fn file(&self) -> Option<&SelectedFile> {
        self.file.as_ref()
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }
}
