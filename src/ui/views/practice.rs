use eframe::egui;

use crate::domain::PRACTICE_PATH;
use crate::ui::app::{Action, NavigationAction, ReportCardApp};
use crate::ui::theme::current_theme;
use crate::ui::{icons, spacing, typography};

use super::page_frame;

pub const PRACTICE_TITLE: &str = "Practice dialogue";
pub const PRACTICE_TEXT: &str =
    "Start a conversation to practice. A report card appears on your dashboard when you finish.";

impl ReportCardApp {
    pub fn ui_practice(&mut self, ui: &mut egui::Ui) {
        let theme = current_theme();
        let mut back = false;

        page_frame().show(ui, |ui| {
            back = ui.button(format!("{} Back", icons::ACTION_BACK)).clicked();
            ui.add_space(spacing::SPACING_LG);

            ui.horizontal(|ui| {
                ui.label(typography::h1(icons::ACTION_PRACTICE));
                ui.label(typography::h1(PRACTICE_TITLE).color(theme.text_primary));
            });
            ui.label(typography::small(PRACTICE_PATH).color(theme.text_muted));
            ui.add_space(spacing::SPACING_MD);
            ui.label(typography::label(PRACTICE_TEXT).color(theme.text_secondary));
        });

        if back {
            self.dispatch(Action::Navigation(NavigationAction::Back));
        }
    }
}
