//! Pre-aggregated statistics.

use expensa_core::dashboard::{MonthlyTotals, ServerDashboardStats};
use expensa_shared::AppResult;
use serde::Serialize;

use crate::client::ApiClient;

#[derive(Serialize)]
struct YearQuery {
    #[serde(rename = "anno")]
    year: i32,
}

impl ApiClient {
    /// Current-month figures computed by the API.
    pub async fn dashboard_stats(&self) -> AppResult<ServerDashboardStats> {
        self.get("/stats/dashboard").await
    }

    /// Twelve monthly rows for `year`.
    pub async fn monthly_stats(&self, year: i32) -> AppResult<Vec<MonthlyTotals>> {
        self.get_with_query("/stats/mensili", &YearQuery { year })
            .await
    }
}
