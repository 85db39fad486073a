//! Human-readable descriptions of a projected moment.

use crate::effects::ImmediateEffects;
use crate::time::TimeBand;

use super::TimelineSnapshot;

/// Compact human form of a head count: "1.2 billion", "340 thousand".
pub fn format_count(count: f64) -> String {
    let count = count.max(0.0);
    if count >= 1e9 {
        format!("{:.1} billion", count / 1e9)
    } else if count >= 1e6 {
        format!("{:.1} million", count / 1e6)
    } else if count >= 1e4 {
        format!("{:.0} thousand", count / 1e3)
    } else {
        format!("{count:.0}")
    }
}

/// Compact human form of a yield in megatons.
pub fn format_yield(megatons: f64) -> String {
    if megatons >= 1e6 {
        format!("{:.1} million megatons", megatons / 1e6)
    } else if megatons >= 1.0 {
        format!("{megatons:.0} megatons")
    } else {
        format!("{:.0} kilotons", megatons * 1000.0)
    }
}

/// Describe the snapshot's moment, in the voice of its time band.
pub fn describe(effects: &ImmediateEffects, snapshot: &TimelineSnapshot) -> String {
    let dead = format_count(snapshot.casualties);
    let displaced = format_count(snapshot.displaced);
    let cooling = -snapshot.temperature_anomaly;

    let mut text = match snapshot.band {
        TimeBand::Approach => format!(
            "The asteroid is inbound toward {:.2}°, {:.2}°. Life continues as normal.",
            effects.site.lat, effects.site.lng
        ),
        TimeBand::Impact => format!(
            "Impact. {} of energy are released, carving a {:.1} km crater. {dead} people are killed instantly.",
            format_yield(effects.tnt_equivalent),
            effects.crater.diameter / 1000.0
        ),
        TimeBand::FirstHours => format!(
            "The blast wave has levelled buildings out to {:.0} km and fires burn up to {:.0} km away. {dead} dead.",
            effects.airblast_radius.psi5, effects.thermal_radius
        ),
        TimeBand::FirstDay => format!(
            "Rescue efforts begin amid collapsed infrastructure. {dead} dead, {displaced} people fleeing the region."
        ),
        TimeBand::Weeks => format!(
            "Dust spreads through the stratosphere and global temperatures have dropped {cooling:.1} °C. {displaced} people are displaced."
        ),
        TimeBand::Months => format!(
            "Harvests fail under darkened skies; food production has fallen to {:.0}% of normal. {displaced} remain displaced.",
            snapshot.food_production_index
        ),
        TimeBand::Year => format!(
            "The world is {cooling:.1} °C colder than before the impact. Food production stands at {:.0}% and {displaced} people have not returned home.",
            snapshot.food_production_index
        ),
        TimeBand::Decade => format!(
            "Recovery is under way. {:.0}% of the region is habitable again and food production is back at {:.0}%. {dead} lives were lost in total.",
            snapshot.habitable_area_fraction, snapshot.food_production_index
        ),
    };

    let early = matches!(
        snapshot.band,
        TimeBand::Impact | TimeBand::FirstHours | TimeBand::FirstDay
    );
    if let (Some(tsunami), true) = (effects.tsunami, early) {
        text.push_str(&format!(
            " Tsunami waves up to {:.0} m strike {:.0} km of coastline.",
            tsunami.max_wave_height, tsunami.affected_coastline_length
        ));
    }

    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0.0), "0");
        assert_eq!(format_count(9_500.0), "9500");
        assert_eq!(format_count(340_000.0), "340 thousand");
        assert_eq!(format_count(2_500_000.0), "2.5 million");
        assert_eq!(format_count(1.2e9), "1.2 billion");
        assert_eq!(format_count(-3.0), "0");
    }

    #[test]
    fn test_format_yield() {
        assert_eq!(format_yield(0.5), "500 kilotons");
        assert_eq!(format_yield(75_000.0), "75000 megatons");
        assert_eq!(format_yield(7.5e7), "75.0 million megatons");
    }
}
