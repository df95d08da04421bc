//! Localised share sentence

use crate::format::to_fixed;
use crate::locale::Language;
use crate::stats::StatsResult;

/// One-line summary for pasting into chat, ending with the share link
pub fn share_text(language: Language, result: &StatsResult, url: &str) -> String {
    let kd = to_fixed(result.kd, 2);
    let ratio = to_fixed(result.dmg_ratio, 1);

    match language {
        Language::Ru => format!(
            "Мои статы в ARC Raiders: K/D {}, соотношение урона {}x — {}",
            kd, ratio, url
        ),
        Language::Uk => format!(
            "Мої стати в ARC Raiders: K/D {}, співвідношення урону {}x — {}",
            kd, ratio, url
        ),
        Language::En => format!(
            "My ARC Raiders stats: K/D {}, damage ratio {}x — {}",
            kd, ratio, url
        ),
    }
}
