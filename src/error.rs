/*
 * Responsibility
 * - アプリ共通の AppError 定義 (CLI の終了理由)
 * - config / api / io / validation のエラーを統一的に変換
 */
use thiserror::Error;

use crate::api::ApiError;
use crate::config::ConfigError;
use crate::forms::ValidationErrors;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("form is invalid: {0}")]
    Invalid(ValidationErrors),
    #[error("post was not saved")]
    SubmitFailed,
}
