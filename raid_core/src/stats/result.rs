//! StatsResult - Metrics derived from one snapshot of counters

use serde::{Deserialize, Serialize};

/// Canonical raid lengths used for per-raid projections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RaidDuration {
    #[serde(rename = "20")]
    Twenty,
    #[serde(rename = "25")]
    TwentyFive,
    #[serde(rename = "30")]
    Thirty,
}

impl RaidDuration {
    pub fn all() -> &'static [RaidDuration] {
        &[RaidDuration::Twenty, RaidDuration::TwentyFive, RaidDuration::Thirty]
    }

    pub fn minutes(&self) -> f64 {
        match self {
            RaidDuration::Twenty => 20.0,
            RaidDuration::TwentyFive => 25.0,
            RaidDuration::Thirty => 30.0,
        }
    }
}

/// Result of deriving metrics from a [`crate::StatsInput`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResult {
    /// Damage dealt over damage taken (0 when nothing was taken)
    pub dmg_ratio: f64,
    /// Damage dealt per kill
    pub avg_dmg_per_kill: f64,
    /// Deaths inferred from damage taken, whole number
    pub estimated_deaths: f64,
    /// Kills over estimated deaths, or raw kills when no deaths are estimated
    pub kd: f64,
    pub per_hour: PerHour,
    pub per_raid: PerRaid,
}

/// Counters normalised to one hour of play
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerHour {
    pub downed: f64,
    pub kills: f64,
    pub dmg_dealt: f64,
    pub dmg_taken: f64,
    pub estimated_deaths: f64,
}

/// Counters averaged over one raid of a given length
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RaidBreakdown {
    pub downed: f64,
    pub kills: f64,
    pub dmg_dealt: f64,
    pub dmg_taken: f64,
}

/// Per-raid breakdowns keyed by raid length
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PerRaid {
    #[serde(rename = "20")]
    pub min20: RaidBreakdown,
    #[serde(rename = "25")]
    pub min25: RaidBreakdown,
    #[serde(rename = "30")]
    pub min30: RaidBreakdown,
}

impl PerRaid {
    pub fn get(&self, duration: RaidDuration) -> &RaidBreakdown {
        match duration {
            RaidDuration::Twenty => &self.min20,
            RaidDuration::TwentyFive => &self.min25,
            RaidDuration::Thirty => &self.min30,
        }
    }
}

impl StatsResult {
    /// Breakdown for one raid length
    pub fn raid(&self, duration: RaidDuration) -> &RaidBreakdown {
        self.per_raid.get(duration)
    }

    /// Whether no deaths were estimated, making `kd` the raw kill count
    pub fn is_deathless(&self) -> bool {
        self.estimated_deaths <= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn breakdown(v: f64) -> RaidBreakdown {
        RaidBreakdown {
            downed: v,
            kills: v,
            dmg_dealt: v,
            dmg_taken: v,
        }
    }

    #[test]
    fn test_raid_minutes() {
        let minutes: Vec<f64> = RaidDuration::all().iter().map(|d| d.minutes()).collect();
        assert_eq!(minutes, vec![20.0, 25.0, 30.0]);
    }

    #[test]
    fn test_per_raid_lookup() {
        let per_raid = PerRaid {
            min20: breakdown(1.0),
            min25: breakdown(2.0),
            min30: breakdown(3.0),
        };
        assert!((per_raid.get(RaidDuration::TwentyFive).kills - 2.0).abs() < f64::EPSILON);
        assert!((per_raid.get(RaidDuration::Thirty).dmg_taken - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_per_raid_json_keys() {
        let per_raid = PerRaid {
            min20: breakdown(1.0),
            min25: breakdown(2.0),
            min30: breakdown(3.0),
        };
        let json = serde_json::to_value(per_raid).unwrap();
        assert!(json.get("20").is_some());
        assert!(json.get("25").is_some());
        assert!(json["30"].get("dmgDealt").is_some());
    }
}
