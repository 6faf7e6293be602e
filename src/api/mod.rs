/*
 * Responsibility
 * - ブログ backend の REST API を呼ぶ client
 * - 上位 (services) は PostApi trait だけを見る (HTTP 実装の差し替えを局所化)
 */
pub mod client;
pub mod dto;
pub mod error;
pub mod http;

#[cfg(test)]
pub mod fake;

pub use client::PostApi;
pub use error::{ApiError, ApiResult};
pub use http::HttpPostApi;
