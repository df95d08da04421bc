//! Non-interactive JSON output

use raid_core::{
    compute_stats, share_text, share_url, Language, RawEntries, StatsInput, StatsOutcome,
};
use serde::Serialize;

/// Everything the interactive UI would show, in machine-readable form
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub language: Language,
    pub entries: RawEntries,
    pub input: StatsInput,
    pub outcome: StatsOutcome,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub share_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub share_text: Option<String>,
}

pub fn build_report(entries: RawEntries, origin: &str, language: Language) -> Report {
    let input = entries.parse();
    let outcome = compute_stats(&input);

    let (url, text) = match outcome.result() {
        Some(result) => {
            let url = share_url(origin, language, &input);
            let text = share_text(language, result, &url);
            (Some(url), Some(text))
        }
        None => (None, None),
    };

    Report {
        language,
        entries,
        input,
        outcome,
        share_url: url,
        share_text: text,
    }
}
