//! Canonical timeline assembly.

use serde::Serialize;
use tracing::warn;

use crate::config::ProjectionCalibration;
use crate::effects::ImmediateEffects;
use crate::exposure::ExposureSet;
use crate::projection::{ProjectionBasis, TimelineSnapshot, project_from_basis};
use crate::time::Checkpoint;

/// Snapshots at the seven canonical checkpoints.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Timeline {
    pub t0: TimelineSnapshot,
    pub t1_hour: TimelineSnapshot,
    pub t24_hours: TimelineSnapshot,
    pub t1_week: TimelineSnapshot,
    pub t1_month: TimelineSnapshot,
    pub t1_year: TimelineSnapshot,
    pub t10_years: TimelineSnapshot,
}

impl Timeline {
    pub fn get(&self, checkpoint: Checkpoint) -> &TimelineSnapshot {
        match checkpoint {
            Checkpoint::T0 => &self.t0,
            Checkpoint::T1Hour => &self.t1_hour,
            Checkpoint::T24Hours => &self.t24_hours,
            Checkpoint::T1Week => &self.t1_week,
            Checkpoint::T1Month => &self.t1_month,
            Checkpoint::T1Year => &self.t1_year,
            Checkpoint::T10Years => &self.t10_years,
        }
    }

    /// Checkpoints with their snapshots, in chronological order.
    pub fn iter(&self) -> impl Iterator<Item = (Checkpoint, &TimelineSnapshot)> {
        Checkpoint::ALL.into_iter().map(move |c| (c, self.get(c)))
    }
}

/// Build the timeline with the default calibration.
pub fn build_timeline(effects: &ImmediateEffects, exposure: &ExposureSet) -> Timeline {
    build_timeline_with(effects, exposure, &ProjectionCalibration::default())
}

/// Evaluate the projector at every canonical checkpoint.
///
/// Each snapshot equals `project_at_with` at the checkpoint's offset.
pub fn build_timeline_with(
    effects: &ImmediateEffects,
    exposure: &ExposureSet,
    cal: &ProjectionCalibration,
) -> Timeline {
    let basis = ProjectionBasis::derive(effects, exposure, cal);
    let at = |c: Checkpoint| project_from_basis(effects, &basis, c.offset_years(), cal);

    Timeline {
        t0: at(Checkpoint::T0),
        t1_hour: at(Checkpoint::T1Hour),
        t24_hours: at(Checkpoint::T24Hours),
        t1_week: at(Checkpoint::T1Week),
        t1_month: at(Checkpoint::T1Month),
        t1_year: at(Checkpoint::T1Year),
        t10_years: at(Checkpoint::T10Years),
    }
}

/// Evaluate the projector on `steps` evenly spaced offsets from `start` to
/// `end` inclusive, for scrubbing or plotting.
///
/// Fewer than two steps yields the single snapshot at `start`.
pub fn sample_series(
    effects: &ImmediateEffects,
    exposure: &ExposureSet,
    start: f64,
    end: f64,
    steps: usize,
    cal: &ProjectionCalibration,
) -> Vec<TimelineSnapshot> {
    let basis = ProjectionBasis::derive(effects, exposure, cal);
    if steps < 2 {
        if steps == 0 {
            warn!("sample_series called with zero steps, returning the start offset");
        }
        return vec![project_from_basis(effects, &basis, start, cal)];
    }

    let span = end - start;
    let last = (steps - 1) as f64;
    (0..steps)
        .map(|i| {
            let t = if i + 1 == steps { end } else { start + span * i as f64 / last };
            project_from_basis(effects, &basis, t, cal)
        })
        .collect()
}
