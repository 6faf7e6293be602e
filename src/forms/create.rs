//! State of the "create a post" form.
use base64::{Engine as _, engine::general_purpose::STANDARD};

use crate::forms::categories;
use crate::forms::draft::{FlowKind, PostDraft, SelectedFile};
use crate::forms::validate::{ValidationErrors, validate};

#[derive(Debug, Default)]
pub struct CreateForm {
    draft: PostDraft,
    category_input: String,
    files: Vec<SelectedFile>,
    // data URLs, index-aligned with `files`
    previews: Vec<String>,
    errors: ValidationErrors,
}

impl CreateForm {
    pub fn new() -> Self {
        Self::default()
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

    /// Moves the pending category input into the list and clears the input.
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

    /// Replaces the selection and rebuilds the previews.
    pub fn select_files(&mut self, files: Vec<SelectedFile>) {
        self.previews = files.iter().map(preview_data_url).collect();
        self.files = files;
    }

    /// Drops one selected image and its preview.
    pub fn remove_image(&mut self, index: usize) {
        if index < self.files.len() {
            self.files.remove(index);
            self.previews.remove(index);
        }
    }

    /// Runs validation and keeps the result for display. Returns true when valid.
    pub fn validate(&mut self) -> bool {
        self.errors = validate(&self.draft, FlowKind::Create);
        self.errors.is_empty()
    }

    pub fn draft(&self) -> &PostDraft {
        &self.draft
    }

    pub fn category_input(&self) -> &str {
        &self.category_input
    }

    pub fn files(&self) -> &[SelectedFile] {
        &self.files
    }

    pub fn previews(&self) -> &[String] {
        &self.previews
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }
}

pub fn preview_data_url(file: &SelectedFile) -> String {
    format!("data:{};base64,{}", file.mime(), STANDARD.encode(&file.bytes))
}
