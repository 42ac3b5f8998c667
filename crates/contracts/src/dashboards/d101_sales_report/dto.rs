use serde::{Deserialize, Deserializer, Serialize};

/// Query of `GET /reports/graph`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReportQuery {
    #[serde(rename = "resId")]
    pub restaurant_id: String,
    /// Inclusive start date in format "YYYY-MM-DD"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    /// Inclusive end date in format "YYYY-MM-DD"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
}

impl ReportQuery {
    pub fn for_restaurant(restaurant_id: impl Into<String>) -> Self {
        Self {
            restaurant_id: restaurant_id.into(),
            from: None,
            to: None,
        }
    }

    pub fn with_range(mut self, from: Option<String>, to: Option<String>) -> Self {
        self.from = from.filter(|s| !s.trim().is_empty());
        self.to = to.filter(|s| !s.trim().is_empty());
        self
    }
}

/// One reporting period as delivered by the backend.
///
/// Amounts are never negative; a row carrying one is rejected as a whole.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportRow {
    /// Period label, e.g. "Jan" or "2024-01"
    #[serde(alias = "month", alias = "name")]
    pub period: String,
    #[serde(default, deserialize_with = "non_negative")]
    pub earning: f64,
    #[serde(default, deserialize_with = "non_negative")]
    pub due: f64,
    #[serde(default)]
    pub quantity: u64,
}

fn non_negative<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = f64::deserialize(deserializer)?;
    if !value.is_finite() || value < 0.0 {
        return Err(serde::de::Error::custom(format!(
            "expected an amount >= 0, got {}",
            value
        )));
    }
    Ok(value)
}

/// Totals over a sequence of report rows
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ReportSummary {
    pub total_earning: f64,
    pub total_due: f64,
    pub total_quantity: u64,
}

impl ReportSummary {
    /// Reduces `rows` into totals. Always recomputed from the full sequence.
    pub fn from_rows(rows: &[ReportRow]) -> Self {
        rows.iter().fold(Self::default(), |acc, row| Self {
            total_earning: acc.total_earning + row.earning,
            total_due: acc.total_due + row.due,
            total_quantity: acc.total_quantity + row.quantity,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(period: &str, earning: f64, due: f64, quantity: u64) -> ReportRow {
        ReportRow {
            period: period.to_string(),
            earning,
            due,
            quantity,
        }
    }

    #[test]
    fn test_empty_rows_give_zero_totals() {
        assert_eq!(ReportSummary::from_rows(&[]), ReportSummary::default());
    }

    #[test]
    fn test_two_month_scenario() {
        let rows = vec![row("Jan", 650.0, 0.0, 5), row("Feb", 800.0, 100.0, 8)];
        let summary = ReportSummary::from_rows(&rows);
        assert_eq!(summary.total_earning, 1450.0);
        assert_eq!(summary.total_due, 100.0);
        assert_eq!(summary.total_quantity, 13);
    }

    #[test]
    fn test_totals_equal_field_sums() {
        let rows: Vec<ReportRow> = (1..=12)
            .map(|m| row(&format!("M{}", m), m as f64 * 125.0, (m % 3) as f64 * 10.0, m))
            .collect();
        let summary = ReportSummary::from_rows(&rows);
        assert_eq!(summary.total_earning, rows.iter().map(|r| r.earning).sum::<f64>());
        assert_eq!(summary.total_due, rows.iter().map(|r| r.due).sum::<f64>());
        assert_eq!(summary.total_quantity, rows.iter().map(|r| r.quantity).sum::<u64>());
    }

    #[test]
    fn test_row_accepts_month_label() {
        let row: ReportRow =
            serde_json::from_str(r#"{"month":"Mar","earning":120.5,"due":0,"quantity":2}"#).unwrap();
        assert_eq!(row.period, "Mar");
        assert_eq!(row.quantity, 2);
    }

    #[test]
    fn test_row_rejects_negative_amounts() {
        let earning = serde_json::from_str::<ReportRow>(r#"{"period":"Jan","earning":-5,"due":0}"#);
        assert!(earning.is_err());
        let due = serde_json::from_str::<ReportRow>(r#"{"period":"Jan","earning":5,"due":-0.5}"#);
        assert!(due.is_err());

        let zero: ReportRow = serde_json::from_str(r#"{"period":"Jan","earning":0}"#).unwrap();
        assert_eq!(zero.due, 0.0);
    }

    #[test]
    fn test_query_drops_blank_range() {
        let q = ReportQuery::for_restaurant("r1").with_range(Some("".into()), Some("2024-02-29".into()));
        assert_eq!(q.from, None);
        assert_eq!(q.to.as_deref(), Some("2024-02-29"));
    }
}
