//! Stats engine - Derive performance metrics from raw counters
//!
//! The game exposes kills, knockdowns and damage but no death counter, so
//! deaths are estimated: the average damage it takes to finish one opponent,
//! applied to the total damage received.

mod result;

pub use result::{PerHour, PerRaid, RaidBreakdown, RaidDuration, StatsResult};

use crate::format::round_half_up;
use crate::types::StatsInput;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Minutes per hour of play
pub const MINUTES_PER_HOUR: f64 = 60.0;

/// Outcome of [`compute_stats`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", content = "result", rename_all = "snake_case")]
pub enum StatsOutcome {
    /// Metrics could be derived
    Ready(StatsResult),
    /// Kills or hours are missing; prompt for more data
    Insufficient,
}

impl StatsOutcome {
    pub fn result(&self) -> Option<&StatsResult> {
        match self {
            StatsOutcome::Ready(result) => Some(result),
            StatsOutcome::Insufficient => None,
        }
    }

    pub fn into_result(self) -> Option<StatsResult> {
        match self {
            StatsOutcome::Ready(result) => Some(result),
            StatsOutcome::Insufficient => None,
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, StatsOutcome::Ready(_))
    }
}

/// Derive the full metrics set from one snapshot of counters
///
/// Requires `kills > 0` and `hours > 0`; otherwise returns
/// [`StatsOutcome::Insufficient`]. Negative counters are treated as zero.
/// Divisions are left unsanitised: NaN or infinity can only come from
/// pathological input and are rendered as `0` by the formatter.
pub fn compute_stats(input: &StatsInput) -> StatsOutcome {
    let StatsInput {
        downed,
        kills,
        dmg_dealt,
        dmg_taken,
        hours,
    } = input.clamped();

    if kills <= 0.0 || hours <= 0.0 {
        debug!(kills, hours, "insufficient data for stats");
        return StatsOutcome::Insufficient;
    }

    let dmg_ratio = if dmg_taken > 0.0 { dmg_dealt / dmg_taken } else { 0.0 };
    let avg_dmg_per_kill = dmg_dealt / kills;
    let estimated_deaths = if avg_dmg_per_kill > 0.0 {
        round_half_up(dmg_taken / avg_dmg_per_kill)
    } else {
        0.0
    };
    let kd = if estimated_deaths > 0.0 {
        kills / estimated_deaths
    } else {
        kills
    };

    let per_hour = PerHour {
        downed: downed / hours,
        kills: kills / hours,
        dmg_dealt: dmg_dealt / hours,
        dmg_taken: dmg_taken / hours,
        estimated_deaths: estimated_deaths / hours,
    };

    let total_minutes = hours * MINUTES_PER_HOUR;
    let per_raid_of = |duration: RaidDuration| {
        // Fractional raid count gives a smooth average
        let raids = total_minutes / duration.minutes();
        RaidBreakdown {
            downed: downed / raids,
            kills: kills / raids,
            dmg_dealt: dmg_dealt / raids,
            dmg_taken: dmg_taken / raids,
        }
    };

    StatsOutcome::Ready(StatsResult {
        dmg_ratio,
        avg_dmg_per_kill,
        estimated_deaths,
        kd,
        per_hour,
        per_raid: PerRaid {
            min20: per_raid_of(RaidDuration::Twenty),
            min25: per_raid_of(RaidDuration::TwentyFive),
            min30: per_raid_of(RaidDuration::Thirty),
        },
    })
}
