//! Glyphs available in egui's bundled emoji font.

use crate::domain::Tier;

pub const VIEW_DASHBOARD: &str = "📊";
pub const VIEW_PROFILE: &str = "👤";
pub const ACTION_BACK: &str = "⬅";
pub const ACTION_REFRESH: &str = "🔄";
pub const ACTION_PRACTICE: &str = "💬";

pub const TIER_POSITIVE: &str = "✔";
pub const TIER_CAUTION: &str = "⚠";
pub const TIER_NEGATIVE: &str = "✖";

pub fn tier_icon(tier: Tier) -> &'static str {
    match tier {
        Tier::Positive => TIER_POSITIVE,
        Tier::Caution => TIER_CAUTION,
        Tier::Negative => TIER_NEGATIVE,
    }
}
