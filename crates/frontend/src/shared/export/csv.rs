//! CSV export of tabular data
use super::download::download_bytes;
use crate::shared::error::ExportError;

/// Types that can be written as one CSV row
pub trait CsvExportable {
    /// Column headers
    fn headers() -> Vec<&'static str>;

    /// Cell values in header order
    fn to_csv_row(&self) -> Vec<String>;
}

/// Builds the CSV text. `;`-separated with a UTF-8 BOM so spreadsheet apps
/// pick up the encoding.
pub fn to_csv<T: CsvExportable>(data: &[T]) -> Result<String, ExportError> {
    if data.is_empty() {
        return Err(ExportError::NotFound);
    }

    let mut csv_content = String::new();
    csv_content.push('\u{FEFF}');

    csv_content.push_str(&T::headers().join(";"));
    csv_content.push('\n');

    for item in data {
        let escaped_row: Vec<String> = item
            .to_csv_row()
            .iter()
            .map(|cell| escape_csv_cell(cell))
            .collect();
        csv_content.push_str(&escaped_row.join(";"));
        csv_content.push('\n');
    }

    Ok(csv_content)
}

/// Builds the CSV and starts the browser download
pub fn export_to_csv<T: CsvExportable>(data: &[T], filename: &str) -> Result<(), ExportError> {
    let content = to_csv(data)?;
    download_bytes(content.as_bytes(), filename, "text/csv;charset=utf-8;")
}

/// Quotes a cell holding the separator, quotes or line breaks
fn escape_csv_cell(cell: &str) -> String {
    if cell.contains(';') || cell.contains('"') || cell.contains('\n') || cell.contains('\r') {
        let escaped = cell.replace('"', "\"\"");
        format!("\"{}\"", escaped)
    } else {
        cell.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Line(&'static str, u32);

    impl CsvExportable for Line {
        fn headers() -> Vec<&'static str> {
            vec!["Name", "Qty"]
        }

        fn to_csv_row(&self) -> Vec<String> {
            vec![self.0.to_string(), self.1.to_string()]
        }
    }

    #[test]
    fn test_csv_layout() {
        let csv = to_csv(&[Line("Jan", 5), Line("Feb", 8)]).unwrap();
        assert_eq!(csv, "\u{FEFF}Name;Qty\nJan;5\nFeb;8\n");
    }

    #[test]
    fn test_cells_are_escaped() {
        let csv = to_csv(&[Line("Tea; \"masala\"", 1)]).unwrap();
        assert!(csv.contains("\"Tea; \"\"masala\"\"\";1"));
    }

    #[test]
    fn test_empty_data_is_not_found() {
        assert_eq!(to_csv::<Line>(&[]), Err(ExportError::NotFound));
    }
}
