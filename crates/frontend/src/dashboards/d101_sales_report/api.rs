use contracts::dashboards::d101_sales_report::{ReportQuery, ReportRow};

use crate::shared::api_utils::{get_json, query_path};
use crate::shared::error::FetchError;

/// `GET /reports/graph?resId=..[&from=..&to=..]`
pub async fn get_report_rows(query: ReportQuery) -> Result<Vec<ReportRow>, FetchError> {
    if query.restaurant_id.trim().is_empty() {
        return Err(FetchError::MissingParameter("resId"));
    }
    get_json(&query_path("/reports/graph", &query)?).await
}
