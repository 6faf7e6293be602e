//! Uploads the images picked in a form.
//!
//! Every file is uploaded independently and the batch always runs to completion: one
//! failed upload never cancels or fails its siblings.
use chrono::Utc;
use futures::future::join_all;

use crate::api::PostApi;
use crate::forms::SelectedFile;

/// Identifier the image is stored under: Unix time in milliseconds followed by the
/// original name. Avoids collisions between users, not guessing.
pub fn upload_filename(now_millis: i64, original_name: &str) -> String {
    format!("{now_millis}{original_name}")
}

/// Uploads one file. A failure is logged and reported as `None`.
pub async fn upload_one<A: PostApi>(api: &A, file: &SelectedFile) -> Option<String> {
    let filename = upload_filename(Utc::now().timestamp_millis(), &file.name);
    match api.upload(&filename, file).await {
        Ok(()) => {
            tracing::debug!(%filename, "image uploaded");
            Some(filename)
        }
        Err(e) => {
            tracing::error!(%filename, error = %e, "image upload failed");
            None
        }
    }
}

/// Uploads all files concurrently and waits for every one of them to settle.
/// The result is index-aligned with `files`.
pub async fn upload_all<A: PostApi>(api: &A, files: &[SelectedFile]) -> Vec<Option<String>> {
    join_all(files.iter().map(|file| upload_one(api, file))).await
}

/// Keeps the identifiers of the uploads that succeeded, in selection order.
pub fn successful(results: Vec<Option<String>>) -> Vec<String> {
    results.into_iter().flatten().collect()
}
