//! raid_core - Stats derivation engine for raid combat counters
//!
//! This library provides:
//! - Input parsing: free text with `k`/`m` shorthand to numbers
//! - Stats engine: raw counters to damage ratio, estimated deaths, K/D,
//!   per-hour and per-raid projections
//! - Formatting: compact (`1.5M`) and fixed-decimal display text
//! - Share codec: counters to and from a share-link query string

pub mod config;
pub mod format;
pub mod locale;
pub mod parse;
pub mod prelude;
pub mod share;
pub mod stats;
pub mod types;

// Re-export core types for convenience
pub use config::{CalculatorConfig, ConfigError};
pub use format::{format_compact, format_decimal, format_fixed};
pub use locale::Language;
pub use parse::parse_numeric_entry;
pub use share::{decode, decode_link, encode, share_text, share_url};
pub use stats::{compute_stats, PerHour, PerRaid, RaidBreakdown, RaidDuration, StatsOutcome, StatsResult};
pub use types::{PartialInput, RawEntries, StatField, StatsInput};
