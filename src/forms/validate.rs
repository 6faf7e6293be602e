//! Client-side validation of a post draft.
//!
//! The result maps each failing field to a single message. The rules for one field are
//! checked in order (empty, too short, too long) and the first failure wins.
use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::forms::draft::{FlowKind, PostDraft};

pub const TITLE_MIN: usize = 5;
pub const TITLE_MAX: usize = 100;
pub const DESC_MIN: usize = 20;
pub const DESC_MAX: usize = 2000;
pub const CATEGORIES_MAX: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKey {
    Title,
    Desc,
    Cats,
}

impl FieldKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKey::Title => "title",
            FieldKey::Desc => "desc",
            FieldKey::Cats => "cats",
        }
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<FieldKey, String>);

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: FieldKey) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldKey, &str)> {
        self.0.iter().map(|(k, v)| (*k, v.as_str()))
    }

    fn set(&mut self, field: FieldKey, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in self.iter() {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{field}: {message}")?;
            first = false;
        }
        Ok(())
    }
}

/// Checks every field of `draft` and collects one message per failing field.
pub fn validate(draft: &PostDraft, flow: FlowKind) -> ValidationErrors {
    let mut errors = ValidationErrors::default();

    if let Some(message) = check_title(&draft.title, flow) {
        errors.set(FieldKey::Title, message);
    }
    if let Some(message) = check_desc(&draft.desc, flow) {
        errors.set(FieldKey::Desc, message);
    }
    if let Some(message) = check_categories(&draft.categories, flow) {
        errors.set(FieldKey::Cats, message);
    }

    errors
}

fn check_title(title: &str, flow: FlowKind) -> Option<&'static str> {
    let len = trimmed_len(title);
    if len == 0 {
        Some(match flow {
            FlowKind::Create => "Title is required",
            FlowKind::Edit => "Title cannot be empty",
        })
    } else if len < TITLE_MIN {
        Some("Title must be at least 5 characters long")
    } else if len > TITLE_MAX {
        Some("Title cannot exceed 100 characters")
    } else {
        None
    }
}

fn check_desc(desc: &str, flow: FlowKind) -> Option<&'static str> {
    let len = trimmed_len(desc);
    if len == 0 {
        Some(match flow {
            FlowKind::Create => "Description is required",
            FlowKind::Edit => "Description cannot be empty",
        })
    } else if len < DESC_MIN {
        Some("Description must be at least 20 characters long")
    } else if len > DESC_MAX {
        Some("Description cannot exceed 2000 characters")
    } else {
        None
    }
}

fn check_categories(categories: &[String], flow: FlowKind) -> Option<&'static str> {
    if categories.is_empty() {
        Some("At least one category is required")
    } else if flow == FlowKind::Edit && categories.len() > CATEGORIES_MAX {
        Some("Maximum 5 categories allowed")
    } else {
        None
    }
}

fn trimmed_len(s: &str) -> usize {
    s.trim().chars().count()
}
