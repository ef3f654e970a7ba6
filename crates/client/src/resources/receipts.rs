//! Receipt upload and OCR.

use expensa_core::receipt::{OcrFields, ReceiptScan, ReceiptUpload};
use expensa_shared::{AppError, AppResult};
use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use tracing::info;

use crate::client::ApiClient;

const ENDPOINT: &str = "/upload-ricevuta";

/// The upload endpoint answers without the `data` wrapper.
#[derive(Debug, Deserialize)]
struct UploadResponse {
    success: bool,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    image_url: Option<String>,
    #[serde(default)]
    ocr_data: OcrFields,
}

impl ApiClient {
    /// Stores the image and runs OCR on it.
    pub async fn upload_receipt(&self, upload: &ReceiptUpload) -> AppResult<ReceiptScan> {
        let part = Part::bytes(upload.bytes().to_vec())
            .file_name(upload.file_name().to_string())
            .mime_str(upload.content_type())
            .map_err(|e| AppError::Internal(format!("invalid content type: {e}")))?;
        let form = Form::new().part("image", part);

        let request = self.request(reqwest::Method::POST, ENDPOINT).multipart(form);
        let response: UploadResponse = self.send_json(request, "POST", ENDPOINT).await?;

        if !response.success {
            return Err(AppError::Api(
                response.error.unwrap_or_else(|| "upload failed".to_string()),
            ));
        }
        let image_url = response
            .image_url
            .ok_or_else(|| AppError::Decode(format!("{ENDPOINT}: missing image_url")))?;

        info!(
            file = upload.file_name(),
            recognized = !response.ocr_data.is_empty(),
            "receipt scanned"
        );

        Ok(ReceiptScan {
            image_url,
            ocr_data: response.ocr_data,
        })
    }
}
