//! Spreadsheet export.

use bytes::Bytes;
use expensa_core::export::ExportRequest;
use expensa_shared::AppResult;

use crate::client::ApiClient;

const ENDPOINT: &str = "/export/excel";

impl ApiClient {
    /// Asks the API for a workbook and returns its bytes.
    pub async fn export(&self, export: &ExportRequest) -> AppResult<Bytes> {
        let request = self.request(reqwest::Method::POST, ENDPOINT).json(export);
        self.download(request, "POST", ENDPOINT).await
    }
}
