/*
 * Responsibility
 * - フォーム (作成 / 編集) の状態と入力検証
 * - ネットワークには触れない (services 側の責務)
 */
pub mod categories;
pub mod create;
pub mod draft;
pub mod edit;
pub mod validate;

pub use create::CreateForm;
pub use draft::{CurrentUser, FlowKind, PostDraft, SelectedFile};
pub use edit::EditForm;
pub use validate::{FieldKey, ValidationErrors, validate};
