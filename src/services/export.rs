//! Tabular file rendering for report downloads.
use rust_xlsxwriter::{Format, Workbook};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DownloadFormat {
    Csv,
    Xlsx,
}

impl DownloadFormat {
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Xlsx => "xlsx",
        }
    }

    pub const fn content_type(self) -> &'static str {
        match self {
            Self::Csv => "text/csv; charset=utf-8",
            Self::Xlsx => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
        }
    }
}

impl TryFrom<&str> for DownloadFormat {
    type Error = DownloadError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_ascii_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "xlsx" => Ok(Self::Xlsx),
            other => Err(DownloadError::InvalidFormat(other.to_string())),
        }
    }
}

/// A rendered file ready to be sent as an attachment.
#[derive(Debug, Clone)]
pub struct DownloadFile {
    pub file_name: String,
    pub content_type: &'static str,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Error)]
pub enum DownloadError {
    #[error("invalid download format: {0}")]
    InvalidFormat(String),
    #[error("failed to render csv")]
    CsvRender,
    #[error("failed to render xlsx")]
    XlsxRender,
}

/// Renders `headers` followed by `rows` as `{base_name}.{ext}`.
pub fn render_download_file(
    base_name: &str,
    format: DownloadFormat,
    headers: &[&str],
    rows: &[Vec<String>],
) -> Result<DownloadFile, DownloadError> {
    let bytes = match format {
        DownloadFormat::Csv => render_csv(headers, rows)?,
        DownloadFormat::Xlsx => render_xlsx(headers, rows)?,
    };

    Ok(DownloadFile {
        file_name: format!("{base_name}.{}", format.extension()),
        content_type: format.content_type(),
        bytes,
    })
}

fn render_csv(headers: &[&str], rows: &[Vec<String>]) -> Result<Vec<u8>, DownloadError> {
    let mut writer = csv::Writer::from_writer(vec![]);
    writer
        .write_record(headers)
        .map_err(|_| DownloadError::CsvRender)?;
    for row in rows {
        writer
            .write_record(row.iter().map(|cell| escape_csv_cell(cell)))
            .map_err(|_| DownloadError::CsvRender)?;
    }
    writer.into_inner().map_err(|_| DownloadError::CsvRender)
}

fn render_xlsx(headers: &[&str], rows: &[Vec<String>]) -> Result<Vec<u8>, DownloadError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    let bold = Format::new().set_bold();

    for (col, header) in headers.iter().enumerate() {
        worksheet
            .write_string_with_format(0, col as u16, *header, &bold)
            .map_err(|_| DownloadError::XlsxRender)?;
    }
    for (row_idx, row) in rows.iter().enumerate() {
        for (col, cell) in row.iter().enumerate() {
            worksheet
                .write_string(row_idx as u32 + 1, col as u16, cell)
                .map_err(|_| DownloadError::XlsxRender)?;
        }
    }
    worksheet.autofit();

    workbook
        .save_to_buffer()
        .map_err(|_| DownloadError::XlsxRender)
}

/// Neutralizes cells a spreadsheet would evaluate as a formula.
fn escape_csv_cell(value: &str) -> String {
    match value.chars().next() {
        Some('=' | '+' | '-' | '@') => format!("'{value}"),
        _ => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn csv_export_escapes_formula_prefixed_cells() {
        let file = render_download_file(
            "report",
            DownloadFormat::Csv,
            &["Local", "Câmera"],
            &[vec!["=HYPERLINK(\"x\")".to_string(), "@cam".to_string()]],
        )
        .expect("csv render should succeed");

        let output = String::from_utf8(file.bytes).expect("csv output should be utf-8");
        assert!(output.starts_with("Local,Câmera\n"));
        assert!(output.contains("'=HYPERLINK"));
        assert!(output.contains("'@cam"));
    }

    #[test]
    fn file_name_carries_extension() {
        let file = render_download_file("report-all-2026-10-15", DownloadFormat::Xlsx, &["a"], &[])
            .expect("xlsx render should succeed");

        assert_eq!(file.file_name, "report-all-2026-10-15.xlsx");
        assert!(file.content_type.contains("spreadsheetml"));
        // xlsx is a zip archive
        assert_eq!(&file.bytes[..2], b"PK");
    }

    #[test]
    fn unknown_format_is_rejected() {
        assert!(matches!(
            DownloadFormat::try_from("pdf"),
            Err(DownloadError::InvalidFormat(_))
        ));
        assert_eq!(DownloadFormat::try_from(" CSV ").unwrap(), DownloadFormat::Csv);
    }
}
