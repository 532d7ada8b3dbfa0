//! Table export to a single-sheet xlsx workbook.

use std::path::{Path, PathBuf};

use rust_xlsxwriter::{Workbook, XlsxError};

const SHEET_NAME: &str = "表格数据";
const DEFAULT_FILE_NAME: &str = "list";

/// Write `rows` verbatim, in order, to `<name or "list">.xlsx` inside
/// `dir`. No header inference, no styling. Returns the written path.
pub fn export_data(
    rows: &[Vec<String>],
    name: Option<&str>,
    dir: &Path,
) -> Result<PathBuf, XlsxError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;

    for (r, row) in rows.iter().enumerate() {
        for (c, cell) in row.iter().enumerate() {
            worksheet.write_string(r as u32, c as u16, cell.as_str())?;
        }
    }

    let base = match name {
        Some(n) if !n.is_empty() => n,
        _ => DEFAULT_FILE_NAME,
    };
    let path = dir.join(format!("{}.xlsx", base));
    workbook.save(&path)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows() -> Vec<Vec<String>> {
        vec![
            vec!["a".to_string(), "b".to_string()],
            vec!["c".to_string(), "d".to_string()],
        ]
    }

    #[test]
    fn test_named_export() {
        let dir = tempfile::tempdir().unwrap();
        let path = export_data(&rows(), Some("report"), dir.path()).unwrap();
        assert_eq!(path.file_name().unwrap(), "report.xlsx");

        // xlsx is a zip container; check the magic and that something was
        // actually written.
        let bytes = std::fs::read(&path).unwrap();
        assert!(bytes.len() > 4);
        assert_eq!(&bytes[..4], b"PK\x03\x04");
    }

    #[test]
    fn test_default_file_name() {
        let dir = tempfile::tempdir().unwrap();
        let path = export_data(&rows(), None, dir.path()).unwrap();
        assert_eq!(path.file_name().unwrap(), "list.xlsx");

        let path = export_data(&rows(), Some(""), dir.path()).unwrap();
        assert_eq!(path.file_name().unwrap(), "list.xlsx");
    }

    #[test]
    fn test_empty_rows_still_produce_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = export_data(&[], Some("empty"), dir.path()).unwrap();
        assert!(path.exists());
    }
}
