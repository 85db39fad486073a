//! The post-impact time axis.
//!
//! Offsets are in years relative to the impact instant. Negative offsets are
//! the approach phase. The axis is divided into narrative bands and carries
//! the seven canonical checkpoints materialised by the timeline.

use serde::Serialize;
use tracing::warn;

use crate::types::{DAYS_PER_YEAR, HOURS_PER_YEAR, MONTHS_PER_YEAR, WEEKS_PER_YEAR};

/// Earliest supported offset (years).
pub const MIN_OFFSET_YEARS: f64 = -0.5;

/// Latest supported offset (years).
pub const MAX_OFFSET_YEARS: f64 = 50.0;

/// Clamp an offset into the supported domain. NaN maps to the impact instant.
pub fn clamp_offset(time_years: f64) -> f64 {
    if time_years.is_nan() {
        warn!("time offset is NaN, substituting the impact instant");
        return 0.0;
    }
    if !(MIN_OFFSET_YEARS..=MAX_OFFSET_YEARS).contains(&time_years) {
        let clamped = time_years.clamp(MIN_OFFSET_YEARS, MAX_OFFSET_YEARS);
        warn!(time_years, clamped, "time offset outside supported range, clamping");
        return clamped;
    }
    time_years
}

/// The canonical timeline checkpoints.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Checkpoint {
    /// Pre-impact baseline.
    T0,
    T1Hour,
    T24Hours,
    T1Week,
    T1Month,
    T1Year,
    T10Years,
}

impl Checkpoint {
    /// All checkpoints in chronological order
    pub const ALL: [Checkpoint; 7] = [
        Checkpoint::T0,
        Checkpoint::T1Hour,
        Checkpoint::T24Hours,
        Checkpoint::T1Week,
        Checkpoint::T1Month,
        Checkpoint::T1Year,
        Checkpoint::T10Years,
    ];

    /// Offset from impact (years).
    pub fn offset_years(self) -> f64 {
        match self {
            Checkpoint::T0 => MIN_OFFSET_YEARS,
            Checkpoint::T1Hour => 1.0 / HOURS_PER_YEAR,
            Checkpoint::T24Hours => 1.0 / DAYS_PER_YEAR,
            Checkpoint::T1Week => 1.0 / WEEKS_PER_YEAR,
            Checkpoint::T1Month => 1.0 / MONTHS_PER_YEAR,
            Checkpoint::T1Year => 1.0,
            Checkpoint::T10Years => 10.0,
        }
    }

    /// Short label shown on the scrubber.
    pub fn label(self) -> &'static str {
        match self {
            Checkpoint::T0 => "t0",
            Checkpoint::T1Hour => "t+1h",
            Checkpoint::T24Hours => "t+24h",
            Checkpoint::T1Week => "t+1w",
            Checkpoint::T1Month => "t+1mo",
            Checkpoint::T1Year => "t+1y",
            Checkpoint::T10Years => "t+10y",
        }
    }

    /// The checkpoint sitting exactly at `time_years`, if any.
    pub fn at_offset(time_years: f64) -> Option<Checkpoint> {
        Checkpoint::ALL
            .into_iter()
            .find(|c| c.offset_years() == time_years)
    }
}

/// Label for an arbitrary offset: the checkpoint label when it matches one,
/// otherwise the offset itself.
pub fn offset_label(time_years: f64) -> String {
    if let Some(checkpoint) = Checkpoint::at_offset(time_years) {
        return checkpoint.label().to_string();
    }
    if time_years == 0.0 {
        return "impact".to_string();
    }
    let abs = time_years.abs();
    let sign = if time_years < 0.0 { '-' } else { '+' };
    if abs < 1.0 / DAYS_PER_YEAR {
        format!("t{sign}{:.1}h", abs * HOURS_PER_YEAR)
    } else if abs < 1.0 / MONTHS_PER_YEAR {
        format!("t{sign}{:.1}d", abs * DAYS_PER_YEAR)
    } else if abs < 1.0 {
        format!("t{sign}{:.1}mo", abs * MONTHS_PER_YEAR)
    } else {
        format!("t{sign}{abs:.1}y")
    }
}

/// Narrative band an offset falls into.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum TimeBand {
    Approach,
    Impact,
    FirstHours,
    FirstDay,
    Weeks,
    Months,
    Year,
    Decade,
}

impl TimeBand {
    /// Band for a (clamped) offset. Upper bounds are inclusive so each
    /// post-impact checkpoint lands in its namesake band.
    pub fn of(time_years: f64) -> TimeBand {
        if time_years < 0.0 {
            TimeBand::Approach
        } else if time_years == 0.0 {
            TimeBand::Impact
        } else if time_years <= 6.0 / HOURS_PER_YEAR {
            TimeBand::FirstHours
        } else if time_years <= 2.0 / DAYS_PER_YEAR {
            TimeBand::FirstDay
        } else if time_years <= 3.0 / WEEKS_PER_YEAR {
            TimeBand::Weeks
        } else if time_years <= 0.5 {
            TimeBand::Months
        } else if time_years <= 2.0 {
            TimeBand::Year
        } else {
            TimeBand::Decade
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            TimeBand::Approach => "approach",
            TimeBand::Impact => "impact",
            TimeBand::FirstHours => "first hours",
            TimeBand::FirstDay => "first day",
            TimeBand::Weeks => "weeks",
            TimeBand::Months => "months",
            TimeBand::Year => "year",
            TimeBand::Decade => "decade",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checkpoints_chronological() {
        let offsets: Vec<f64> = Checkpoint::ALL.iter().map(|c| c.offset_years()).collect();
        assert!(offsets.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_checkpoints_land_in_namesake_bands() {
        assert_eq!(TimeBand::of(Checkpoint::T0.offset_years()), TimeBand::Approach);
        assert_eq!(TimeBand::of(Checkpoint::T1Hour.offset_years()), TimeBand::FirstHours);
        assert_eq!(TimeBand::of(Checkpoint::T24Hours.offset_years()), TimeBand::FirstDay);
        assert_eq!(TimeBand::of(Checkpoint::T1Week.offset_years()), TimeBand::Weeks);
        assert_eq!(TimeBand::of(Checkpoint::T1Month.offset_years()), TimeBand::Months);
        assert_eq!(TimeBand::of(Checkpoint::T1Year.offset_years()), TimeBand::Year);
        assert_eq!(TimeBand::of(Checkpoint::T10Years.offset_years()), TimeBand::Decade);
        assert_eq!(TimeBand::of(0.0), TimeBand::Impact);
    }

    #[test]
    fn test_clamp_offset() {
        assert_eq!(clamp_offset(-3.0), MIN_OFFSET_YEARS);
        assert_eq!(clamp_offset(120.0), MAX_OFFSET_YEARS);
        assert_eq!(clamp_offset(f64::NAN), 0.0);
        assert_eq!(clamp_offset(2.5), 2.5);
    }

    #[test]
    fn test_offset_labels() {
        assert_eq!(offset_label(1.0), "t+1y");
        assert_eq!(offset_label(-0.5), "t0");
        assert_eq!(offset_label(0.0), "impact");
        assert_eq!(offset_label(3.26), "t+3.3y");
        assert_eq!(offset_label(3.0 / HOURS_PER_YEAR), "t+3.0h");
        assert_eq!(offset_label(-0.25), "t-3.0mo");
    }
}
