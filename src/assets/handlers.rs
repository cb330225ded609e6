/**
 * Asset Upload Handler
 *
 * Handles POST /api/assets multipart uploads. Files land in the configured
 * upload directory with a timestamp-prefixed name (so repeated uploads of
 * the same file never collide) and a metadata row is recorded.
 *
 * The route is unauthenticated, matching the rest of the asset pipeline
 * (files are also served statically from /uploads).
 */

use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::Json,
};
use chrono::Utc;
use serde::Serialize;

use crate::assets::store::{create_asset, Asset};
use crate::error::ApiError;
use crate::server::state::AppState;

/// Upload response
#[derive(Serialize, Debug)]
pub struct UploadResponse {
    pub message: String,
    pub asset: Asset,
}

/// Upload an asset file
///
/// # Errors
///
/// * `400 Bad Request` - If no file field is present
/// * `500 Internal Server Error` - If writing the file or recording the
///   metadata fails
pub async fn upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<UploadResponse>), ApiError> {
    // Take the first field carrying a file name
    let mut file: Option<(String, axum::body::Bytes)> = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|_| ApiError::validation("Malformed multipart body"))?
    {
        if let Some(file_name) = field.file_name().map(str::to_owned) {
            let bytes = field
                .bytes()
                .await
                .map_err(|_| ApiError::validation("Malformed multipart body"))?;
            file = Some((file_name, bytes));
            break;
        }
    }

    let (file_name, bytes) = file.ok_or_else(|| ApiError::validation("No file uploaded"))?;

    let stored_name = format!("{}-{}", Utc::now().timestamp_millis(), file_name);
    let path = state.upload_dir.join(&stored_name);

    tokio::fs::create_dir_all(&state.upload_dir).await?;
    tokio::fs::write(&path, &bytes).await?;

    let asset = create_asset(&state.db_pool, &file_name, &path.to_string_lossy()).await?;

    tracing::info!("Asset uploaded: {} -> {}", asset.name, asset.path);

    Ok((
        StatusCode::CREATED,
        Json(UploadResponse {
            message: "Asset uploaded".to_string(),
            asset,
        }),
    ))
}
