/*
 * Responsibility
 * - 投稿フォーム (作成 / 編集) のロジックを library として公開
 * - UI 側 (CLI やその他のフロントエンド) はここを通して使う
 */
pub mod api;
pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod forms;
pub mod services;
pub mod state;
