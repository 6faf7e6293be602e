/*
 * Responsibility
 * - Posts API の request/response DTO
 * - JSON のキー名は backend に合わせる (userId, _id)
 */
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreatePostRequest {
    pub title: String,
    pub desc: String,
    pub username: String,
    #[serde(rename = "userId")]
    pub user_id: String,
    pub categories: Vec<String>,
    pub photos: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpdatePostRequest {
    pub title: String,
    pub desc: String,
    pub username: String,
    #[serde(rename = "userId")]
    pub user_id: String,
    pub categories: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PostResponse {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub desc: String,
    #[serde(default)]
    pub photo: Option<String>,
    #[serde(default)]
    pub categories: Vec<String>,
}
