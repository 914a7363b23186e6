//! Intake handlers (sample input and declarations upload)

use axum::{extract::Multipart, Json};
use serde::Serialize;

use crate::{AppError, MAX_UPLOAD_SIZE};
use coverwise_core::intake::acknowledge_upload;
use coverwise_core::AnalysisInput;

/// Response for a declarations page upload
#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub file_name: String,
    pub size: usize,
    /// Always false: values are not extracted from the document
    pub extracted: bool,
    pub input: AnalysisInput,
}

/// GET /api/sample - Sample manual-entry input
pub async fn get_sample() -> Json<AnalysisInput> {
    Json(AnalysisInput::sample())
}

/// POST /api/upload - Accept a declarations page
///
/// The document is read and discarded; the response carries the sample
/// input for the form to start from.
pub async fn upload_declarations(
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, AppError> {
    let mut upload: Option<(String, usize)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::bad_request(&format!("Failed to read form field: {}", e)))?
    {
        if field.name() != Some("file") {
            continue;
        }
        let file_name = field.file_name().unwrap_or("declarations").to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|_| AppError::bad_request("Failed to read file data"))?;

        if bytes.len() > MAX_UPLOAD_SIZE {
            return Err(AppError::bad_request(&format!(
                "File too large. Maximum size is {} MB",
                MAX_UPLOAD_SIZE / 1024 / 1024
            )));
        }
        upload = Some((file_name, bytes.len()));
    }

    let (file_name, size) = upload.ok_or_else(|| AppError::bad_request("No file provided"))?;
    let input = acknowledge_upload(&file_name, size as u64);

    Ok(Json(UploadResponse {
        file_name,
        size,
        extracted: false,
        input,
    }))
}
