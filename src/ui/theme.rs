//! Theme definitions for ReportCard
//!
//! Semantic color names on top of the Catppuccin Mocha palette. Score tiers map
//! to colors through [`Theme::tier_color`] only.

use catppuccin_egui::MOCHA;
use eframe::egui;

use crate::domain::Tier;

#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub bg_primary: egui::Color32,
    pub bg_secondary: egui::Color32,
    pub bg_card: egui::Color32,
    pub bg_muted: egui::Color32,

    pub text_primary: egui::Color32,
    pub text_secondary: egui::Color32,
    pub text_muted: egui::Color32,
    pub text_disabled: egui::Color32,

    pub brand: egui::Color32,
    pub brand_fg: egui::Color32,

    pub success: egui::Color32,
    pub warning: egui::Color32,
    pub destructive: egui::Color32,

    pub border: egui::Color32,
}

impl Theme {
    pub fn mocha() -> Self {
        Self {
            bg_primary: MOCHA.base,
            bg_secondary: MOCHA.mantle,
            bg_card: MOCHA.mantle,
            bg_muted: MOCHA.surface0,

            text_primary: egui::Color32::from_rgb(230, 233, 239),
            text_secondary: egui::Color32::from_rgb(186, 194, 222),
            text_muted: MOCHA.subtext0,
            text_disabled: MOCHA.overlay1,

            brand: MOCHA.mauve,
            brand_fg: MOCHA.base,

            success: MOCHA.green,
            warning: MOCHA.yellow,
            destructive: MOCHA.red,

            border: MOCHA.surface1,
        }
    }

    pub fn current() -> Self {
        Self::mocha()
    }

    /// Color for a score tier. Badge and progress bar both read it from here.
    pub fn tier_color(&self, tier: Tier) -> egui::Color32 {
        match tier {
            Tier::Positive => self.success,
            Tier::Caution => self.warning,
            Tier::Negative => self.destructive,
        }
    }
}

pub fn current_theme() -> Theme {
    Theme::current()
}
