/*
 * Responsibility
 * - コマンドライン引数の定義 (create / edit)
 * - 引数をフォームへの入力操作に変換する (画面でのタイピング・クリックに相当)
 */
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::forms::{CreateForm, EditForm};

/// Create or update a blog post from the command line.
#[derive(Parser, Debug)]
#[command(name = "post-editor", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write a new post
    Create(CreateArgs),
    /// Update an existing post
    Edit(EditArgs),
}

#[derive(Args, Debug)]
pub struct CreateArgs {
    #[arg(long, default_value = "")]
    pub title: String,

    #[arg(long, default_value = "")]
    pub desc: String,

    /// Category to attach; repeat for several
    #[arg(long = "category", value_name = "NAME")]
    pub categories: Vec<String>,

    /// Image to upload with the post; repeat for several
    #[arg(long = "image", value_name = "FILE")]
    pub images: Vec<PathBuf>,
}

impl CreateArgs {
    pub fn fill(&self, form: &mut CreateForm) {
        form.set_title(self.title.as_str());
        form.set_desc(self.desc.as_str());
        for category in &self.categories {
            form.set_category_input(category.as_str());
            if !form.add_category() {
                tracing::warn!(category = %category, "ignoring blank category");
            }
        }
    }
}

#[derive(Args, Debug)]
pub struct EditArgs {
    pub post_id: String,

    #[arg(long)]
    pub title: Option<String>,

    #[arg(long)]
    pub desc: Option<String>,

    /// Drop the stored categories from this index on (applied before --category)
    #[arg(long, value_name = "INDEX")]
    pub remove_category_at: Option<usize>,

    /// Category to add; repeat for several
    #[arg(long = "category", value_name = "NAME")]
    pub categories: Vec<String>,

    /// Replacement image
    #[arg(long, value_name = "FILE")]
    pub image: Option<PathBuf>,
}

impl EditArgs {
    pub fn fill(&self, form: &mut EditForm) {
        if let Some(title) = &self.title {
            form.set_title(title.as_str());
        }
        if let Some(desc) = &self.desc {
            form.set_desc(desc.as_str());
        }
        if let Some(index) = self.remove_category_at {
            form.remove_category(index);
        }
        for category in &self.categories {
            form.set_category_input(category.as_str());
            if !form.add_category() {
                tracing::warn!(category = %category, "ignoring blank category");
            }
        }
    }
}
