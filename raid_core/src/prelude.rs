//! Prelude module for convenient imports
//!
//! ```rust
//! use raid_core::prelude::*;
//! ```

// Core types
pub use crate::types::{PartialInput, RawEntries, StatField, StatsInput};
pub use crate::locale::Language;

// Engine
pub use crate::stats::{compute_stats, RaidDuration, StatsOutcome, StatsResult};

// Text in and out
pub use crate::format::{format_compact, format_fixed};
pub use crate::parse::parse_numeric_entry;

// Sharing
pub use crate::share::{decode, encode, share_text, share_url};
