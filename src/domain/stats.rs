//! Summary figures derived from the live registry and log.
//!
//! Nothing here is persisted or cached: every value is recomputed from the
//! slice handed in, so the figures always reflect the latest mutation.

use serde::Serialize;

use crate::domain::camera::Camera;
use crate::domain::occurrence::Occurrence;
use crate::domain::types::{CameraStatus, Classification, OccurrenceType, RecorderNumber};

/// Camera health counts.
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
pub struct CameraStats {
    pub total: usize,
    pub online: usize,
    pub offline: usize,
    pub defective: usize,
}

impl CameraStats {
    pub fn from_cameras<'a, I>(cameras: I) -> Self
    where
        I: IntoIterator<Item = &'a Camera>,
    {
        cameras
            .into_iter()
            .fold(Self::default(), |mut stats, camera| {
                stats.total += 1;
                match camera.status {
                    CameraStatus::Online => stats.online += 1,
                    CameraStatus::Offline => stats.offline += 1,
                    CameraStatus::Defective => stats.defective += 1,
                }
                stats
            })
    }
}

/// Occurrence resolution counts.
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
pub struct OccurrenceStats {
    pub total: usize,
    pub resolved: usize,
    pub pending: usize,
    /// Percentage of closed occurrences, rounded half-up; `0` when empty.
    pub rate: u32,
}

impl OccurrenceStats {
    pub fn from_occurrences<'a, I>(occurrences: I) -> Self
    where
        I: IntoIterator<Item = &'a Occurrence>,
    {
        let (total, resolved) =
            occurrences
                .into_iter()
                .fold((0usize, 0usize), |(total, resolved), occurrence| {
                    let closed = occurrence.classification == Classification::Closed;
                    (total + 1, resolved + usize::from(closed))
                });

        Self {
            total,
            resolved,
            pending: total - resolved,
            rate: resolution_rate(resolved, total),
        }
    }
}

/// `round(100 * resolved / total)` with halves rounded up, in integer math.
pub fn resolution_rate(resolved: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    let (resolved, total) = (resolved as u64, total as u64);
    ((200 * resolved + total) / (2 * total)) as u32
}

/// Number of occurrences of one incident category.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct TypeCount {
    #[serde(rename = "type")]
    pub occurrence_type: OccurrenceType,
    pub label: &'static str,
    pub count: usize,
}

/// Occurrence counts for all twelve categories, zero entries included, in
/// declaration order.
pub fn type_breakdown<'a, I>(occurrences: I) -> Vec<TypeCount>
where
    I: IntoIterator<Item = &'a Occurrence>,
{
    let mut counts = [0usize; OccurrenceType::ALL.len()];
    for occurrence in occurrences {
        if let Some(index) = OccurrenceType::ALL
            .iter()
            .position(|t| *t == occurrence.occurrence_type)
        {
            counts[index] += 1;
        }
    }

    OccurrenceType::ALL
        .iter()
        .zip(counts)
        .map(|(occurrence_type, count)| TypeCount {
            occurrence_type: *occurrence_type,
            label: occurrence_type.label(),
            count,
        })
        .collect()
}

/// Number of occurrences per classification.
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationBreakdown {
    pub in_progress: usize,
    pub closed: usize,
}

impl ClassificationBreakdown {
    pub fn from_occurrences<'a, I>(occurrences: I) -> Self
    where
        I: IntoIterator<Item = &'a Occurrence>,
    {
        occurrences
            .into_iter()
            .fold(Self::default(), |mut breakdown, occurrence| {
                match occurrence.classification {
                    Classification::InProgress => breakdown.in_progress += 1,
                    Classification::Closed => breakdown.closed += 1,
                }
                breakdown
            })
    }
}

/// Camera health of a single recorder.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct RecorderSummary {
    pub recorder: RecorderNumber,
    #[serde(flatten)]
    pub stats: CameraStats,
}

/// Per-recorder stats for all nine recorders, including ones with no rows.
pub fn recorder_summaries(cameras: &[Camera]) -> Vec<RecorderSummary> {
    RecorderNumber::all()
        .map(|recorder| RecorderSummary {
            recorder,
            stats: CameraStats::from_cameras(cameras.iter().filter(|c| c.recorder == recorder)),
        })
        .collect()
}

/// Everything the operations dashboard shows.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    pub occurrences: OccurrenceStats,
    pub cameras: CameraStats,
    pub by_type: Vec<TypeCount>,
    pub by_classification: ClassificationBreakdown,
}

impl Dashboard {
    pub fn compute(cameras: &[Camera], occurrences: &[Occurrence]) -> Self {
        Self {
            occurrences: OccurrenceStats::from_occurrences(occurrences),
            cameras: CameraStats::from_cameras(cameras),
            by_type: type_breakdown(occurrences),
            by_classification: ClassificationBreakdown::from_occurrences(occurrences),
        }
    }
}
