//! Core value types: raw counters, verbatim entries and partial snapshots

use crate::format::number_to_string;
use crate::parse::parse_numeric_entry;
use serde::{Deserialize, Serialize};

/// One of the five counters a player submits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StatField {
    Downed,
    Kills,
    DmgDealt,
    DmgTaken,
    Hours,
}

impl StatField {
    /// All fields in share-link order
    pub fn all() -> &'static [StatField] {
        &[
            StatField::Downed,
            StatField::Kills,
            StatField::DmgDealt,
            StatField::DmgTaken,
            StatField::Hours,
        ]
    }

    /// Query-string key for this field
    pub fn key(&self) -> &'static str {
        match self {
            StatField::Downed => "downed",
            StatField::Kills => "kills",
            StatField::DmgDealt => "dmgDealt",
            StatField::DmgTaken => "dmgTaken",
            StatField::Hours => "hours",
        }
    }

    /// Look up a field by its query-string key
    pub fn from_key(key: &str) -> Option<StatField> {
        StatField::all().iter().copied().find(|f| f.key() == key)
    }

    /// Whether `k`/`m` shorthand makes sense for this field.
    /// Play time is entered in plain hours.
    pub fn accepts_shorthand(&self) -> bool {
        !matches!(self, StatField::Hours)
    }

    pub fn next(&self) -> StatField {
        let all = StatField::all();
        let idx = all.iter().position(|f| f == self).unwrap_or(0);
        all[(idx + 1) % all.len()]
    }

    pub fn prev(&self) -> StatField {
        let all = StatField::all();
        let idx = all.iter().position(|f| f == self).unwrap_or(0);
        all[(idx + all.len() - 1) % all.len()]
    }
}

/// Raw counters for one snapshot of a player's profile
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsInput {
    pub downed: f64,
    pub kills: f64,
    pub dmg_dealt: f64,
    pub dmg_taken: f64,
    pub hours: f64,
}

impl StatsInput {
    pub fn new(downed: f64, kills: f64, dmg_dealt: f64, dmg_taken: f64, hours: f64) -> Self {
        StatsInput {
            downed,
            kills,
            dmg_dealt,
            dmg_taken,
            hours,
        }
    }

    /// Value of a single field
    pub fn get(&self, field: StatField) -> f64 {
        match field {
            StatField::Downed => self.downed,
            StatField::Kills => self.kills,
            StatField::DmgDealt => self.dmg_dealt,
            StatField::DmgTaken => self.dmg_taken,
            StatField::Hours => self.hours,
        }
    }

    /// Copy with negative and NaN counters replaced by zero
    pub fn clamped(&self) -> StatsInput {
        let clamp = |v: f64| if v > 0.0 { v } else { 0.0 };
        StatsInput {
            downed: clamp(self.downed),
            kills: clamp(self.kills),
            dmg_dealt: clamp(self.dmg_dealt),
            dmg_taken: clamp(self.dmg_taken),
            hours: clamp(self.hours),
        }
    }
}

/// The five text entries exactly as typed
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawEntries {
    pub downed: String,
    pub kills: String,
    pub dmg_dealt: String,
    pub dmg_taken: String,
    pub hours: String,
}

impl RawEntries {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: StatField) -> &str {
        match field {
            StatField::Downed => &self.downed,
            StatField::Kills => &self.kills,
            StatField::DmgDealt => &self.dmg_dealt,
            StatField::DmgTaken => &self.dmg_taken,
            StatField::Hours => &self.hours,
        }
    }

    pub fn get_mut(&mut self, field: StatField) -> &mut String {
        match field {
            StatField::Downed => &mut self.downed,
            StatField::Kills => &mut self.kills,
            StatField::DmgDealt => &mut self.dmg_dealt,
            StatField::DmgTaken => &mut self.dmg_taken,
            StatField::Hours => &mut self.hours,
        }
    }

    /// Run every entry through the numeric parser
    pub fn parse(&self) -> StatsInput {
        StatsInput {
            downed: parse_numeric_entry(&self.downed),
            kills: parse_numeric_entry(&self.kills),
            dmg_dealt: parse_numeric_entry(&self.dmg_dealt),
            dmg_taken: parse_numeric_entry(&self.dmg_taken),
            hours: parse_numeric_entry(&self.hours),
        }
    }

    pub fn is_blank(&self) -> bool {
        StatField::all().iter().all(|f| self.get(*f).trim().is_empty())
    }
}

/// A snapshot where any field may be missing, e.g. decoded from a share link
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartialInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub downed: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kills: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dmg_dealt: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dmg_taken: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hours: Option<f64>,
}

impl PartialInput {
    pub fn get(&self, field: StatField) -> Option<f64> {
        match field {
            StatField::Downed => self.downed,
            StatField::Kills => self.kills,
            StatField::DmgDealt => self.dmg_dealt,
            StatField::DmgTaken => self.dmg_taken,
            StatField::Hours => self.hours,
        }
    }

    pub fn set(&mut self, field: StatField, value: Option<f64>) {
        match field {
            StatField::Downed => self.downed = value,
            StatField::Kills => self.kills = value,
            StatField::DmgDealt => self.dmg_dealt = value,
            StatField::DmgTaken => self.dmg_taken = value,
            StatField::Hours => self.hours = value,
        }
    }

    /// True when no field was provided
    pub fn is_empty(&self) -> bool {
        StatField::all().iter().all(|f| self.get(*f).is_none())
    }

    /// Absent fields become zero
    pub fn to_input(&self) -> StatsInput {
        StatsInput {
            downed: self.downed.unwrap_or(0.0),
            kills: self.kills.unwrap_or(0.0),
            dmg_dealt: self.dmg_dealt.unwrap_or(0.0),
            dmg_taken: self.dmg_taken.unwrap_or(0.0),
            hours: self.hours.unwrap_or(0.0),
        }
    }

    /// Text entries for pre-filling a form; absent fields stay empty
    pub fn to_entries(&self) -> RawEntries {
        let mut entries = RawEntries::new();
        for field in StatField::all() {
            if let Some(value) = self.get(*field) {
                *entries.get_mut(*field) = number_to_string(value);
            }
        }
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_keys_in_order() {
        let keys: Vec<&str> = StatField::all().iter().map(|f| f.key()).collect();
        assert_eq!(keys, vec!["downed", "kills", "dmgDealt", "dmgTaken", "hours"]);
        assert_eq!(StatField::from_key("dmgTaken"), Some(StatField::DmgTaken));
        assert_eq!(StatField::from_key("deaths"), None);
    }

    #[test]
    fn test_field_cycle_wraps() {
        assert_eq!(StatField::Hours.next(), StatField::Downed);
        assert_eq!(StatField::Downed.prev(), StatField::Hours);
    }

    #[test]
    fn test_only_hours_rejects_shorthand() {
        assert!(StatField::DmgDealt.accepts_shorthand());
        assert!(!StatField::Hours.accepts_shorthand());
    }

    #[test]
    fn test_entries_parse() {
        let entries = RawEntries {
            downed: "10".to_string(),
            kills: "1,200".to_string(),
            dmg_dealt: "1.5m".to_string(),
            dmg_taken: "500K".to_string(),
            hours: "".to_string(),
        };
        let input = entries.parse();
        assert!((input.downed - 10.0).abs() < f64::EPSILON);
        assert!((input.kills - 1200.0).abs() < f64::EPSILON);
        assert!((input.dmg_dealt - 1_500_000.0).abs() < f64::EPSILON);
        assert!((input.dmg_taken - 500_000.0).abs() < f64::EPSILON);
        assert_eq!(input.hours, 0.0);
    }

    #[test]
    fn test_clamped_zeroes_negatives() {
        let input = StatsInput::new(-1.0, 5.0, f64::NAN, -0.5, 2.0).clamped();
        assert_eq!(input, StatsInput::new(0.0, 5.0, 0.0, 0.0, 2.0));
    }

    #[test]
    fn test_partial_to_entries() {
        let partial = PartialInput {
            kills: Some(100.0),
            hours: Some(12.5),
            ..Default::default()
        };
        let entries = partial.to_entries();
        assert_eq!(entries.kills, "100");
        assert_eq!(entries.hours, "12.5");
        assert!(entries.downed.is_empty());
        assert!(!partial.is_empty());
        assert!(PartialInput::default().is_empty());
    }
}
