use eframe::egui;

use crate::domain::SessionId;
use crate::ui::app::{Action, NavigationAction, ReportCardApp};
use crate::ui::components::badge::badge;
use crate::ui::components::report_card::{SCORE_SUFFIX, card_heading};
use crate::ui::theme::current_theme;
use crate::ui::{icons, spacing, typography};

use super::page_frame;

pub const NOT_FOUND_TEXT: &str = "Report not found";

impl ReportCardApp {
    pub fn ui_report_detail(&mut self, ui: &mut egui::Ui, session_id: &SessionId) {
        let theme = current_theme();
        let mut back = false;

        page_frame().show(ui, |ui| {
            back = ui.button(format!("{} Back", icons::ACTION_BACK)).clicked();
            ui.add_space(spacing::SPACING_LG);

            let Some((ordinal, report)) = self.state.find_report(session_id) else {
                ui.label(typography::h2(NOT_FOUND_TEXT).color(theme.text_primary));
                ui.label(typography::small(session_id.as_str()).color(theme.text_muted));
                return;
            };

            let tier = report.tier();
            let color = theme.tier_color(tier);

            ui.horizontal(|ui| {
                ui.label(typography::h1(card_heading(ordinal)).color(theme.text_primary));
                badge(ui, &format!("{} {}", icons::tier_icon(tier), tier.label()), color);
            });
            ui.label(typography::small(session_id.as_str()).color(theme.text_muted));
            ui.add_space(spacing::SPACING_MD);

            ui.horizontal(|ui| {
                ui.spacing_mut().item_spacing.x = 2.0;
                ui.label(typography::h1(report.score().to_string()).color(theme.text_primary));
                ui.label(typography::label(SCORE_SUFFIX).color(theme.text_muted));
            });
            ui.add(
                egui::ProgressBar::new(report.progress())
                    .fill(color)
                    .desired_height(8.0),
            );
            ui.add_space(spacing::SPACING_LG);

            ui.label(typography::bold_label("Feedback").color(theme.text_primary));
            ui.add_space(spacing::SPACING_XS);
            ui.label(typography::label(report.feedback_text()).color(theme.text_secondary));
        });

        if back {
            self.dispatch(Action::Navigation(NavigationAction::Back));
        }
    }
}
