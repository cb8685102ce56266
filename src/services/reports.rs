use chrono::NaiveDateTime;
use serde::Serialize;

use crate::domain::occurrence::Occurrence;
use crate::domain::period::{ReportPeriod, filter_by_period};
use crate::domain::stats::{CameraStats, OccurrenceStats};
use crate::repository::{CameraListQuery, CameraReader, OccurrenceListQuery, OccurrenceReader};
use crate::services::export::{DownloadFile, DownloadFormat, render_download_file};

use super::{ServiceError, ServiceResult, repository_failure};

const REPORT_HEADERS: [&str; 7] = [
    "Data", "Horário", "Local", "Câmera", "Tipo", "Status", "Operador",
];

/// Occurrences of one period together with the figures printed above them.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub period: ReportPeriod,
    pub period_label: &'static str,
    pub generated_at: NaiveDateTime,
    pub stats: OccurrenceStats,
    pub cameras: CameraStats,
    pub occurrences: Vec<Occurrence>,
}

/// Builds the report for `period` relative to the local date of `now`.
pub fn build_report<R>(period: ReportPeriod, repo: &R, now: NaiveDateTime) -> ServiceResult<Report>
where
    R: CameraReader + OccurrenceReader,
{
    let occurrences = repo
        .list_occurrences(&OccurrenceListQuery::default())
        .map_err(|e| repository_failure("list occurrences", e))?;
    let cameras = repo
        .list_cameras(CameraListQuery::default())
        .map_err(|e| repository_failure("list cameras", e))?;

    let occurrences = filter_by_period(occurrences, period, now.date());

    Ok(Report {
        period,
        period_label: period.label(),
        generated_at: now,
        stats: OccurrenceStats::from_occurrences(&occurrences),
        cameras: CameraStats::from_cameras(&cameras),
        occurrences,
    })
}

/// Renders the report for `period` as a downloadable table.
pub fn download_report<R>(
    period: ReportPeriod,
    format: DownloadFormat,
    repo: &R,
    now: NaiveDateTime,
) -> ServiceResult<DownloadFile>
where
    R: CameraReader + OccurrenceReader,
{
    let report = build_report(period, repo, now)?;
    let rows: Vec<Vec<String>> = report.occurrences.iter().map(report_row).collect();
    let base_name = format!("report-{}-{}", period, now.format("%Y-%m-%d"));

    render_download_file(&base_name, format, &REPORT_HEADERS, &rows).map_err(|e| {
        log::error!("Failed to render report download: {e}");
        ServiceError::Internal
    })
}

fn report_row(occurrence: &Occurrence) -> Vec<String> {
    vec![
        occurrence.occurrence_date.format("%d/%m/%Y").to_string(),
        format!(
            "{} - {}",
            occurrence.start_time.format("%H:%M"),
            occurrence.end_time.format("%H:%M")
        ),
        occurrence.location.to_string(),
        occurrence.camera.to_string(),
        occurrence.occurrence_type.label().to_string(),
        occurrence.classification.label().to_string(),
        occurrence.operator.label().to_string(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::occurrence::fixtures::{at, occurrence};
    use crate::domain::types::{Classification, OccurrenceType};
    use crate::repository::test::TestRepository;
    use chrono::NaiveDate;

    fn dated(location: &str, y: i32, m: u32, d: u32) -> Occurrence {
        let mut item = occurrence(location, OccurrenceType::Accident);
        item.occurrence_date = NaiveDate::from_ymd_opt(y, m, d).unwrap();
        item
    }

    fn noon(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    fn repo() -> TestRepository {
        let mut closed = dated("today", 2026, 10, 15);
        closed.classification = Classification::Closed;
        TestRepository::new(
            vec![],
            vec![
                closed,
                dated("last week", 2026, 10, 9),
                dated("last month", 2026, 9, 20),
            ],
        )
    }

    #[test]
    fn report_counts_only_the_period() {
        let report = build_report(ReportPeriod::Week, &repo(), noon(2026, 10, 15)).unwrap();

        assert_eq!(report.occurrences.len(), 2);
        assert_eq!(report.stats.total, 2);
        assert_eq!(report.stats.resolved, 1);
        assert_eq!(report.stats.rate, 50);
        assert_eq!(report.period_label, "Última Semana");
    }

    #[test]
    fn all_period_keeps_everything() {
        let report = build_report(ReportPeriod::All, &repo(), at(0)).unwrap();
        assert_eq!(report.occurrences.len(), 3);
    }

    #[test]
    fn csv_download_lists_filtered_rows() {
        let file = download_report(
            ReportPeriod::Today,
            DownloadFormat::Csv,
            &repo(),
            noon(2026, 10, 15),
        )
        .unwrap();

        assert_eq!(file.file_name, "report-today-2026-10-15.csv");
        let output = String::from_utf8(file.bytes).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[1],
            "15/10/2026,08:00 - 08:30,today,NVR1-CAM01,Acidente,Encerrada,Wagner"
        );
    }
}
