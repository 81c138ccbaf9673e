use eframe::egui;

use crate::domain::{Route, SessionId};
use crate::ui::app::{Action, NavigationAction, ReportCardApp, ReportsAction};
use crate::ui::components::report_collection;
use crate::ui::components::status::error_banner;
use crate::ui::theme::current_theme;
use crate::ui::{icons, spacing, typography};

use super::page_frame;

pub const DASHBOARD_TITLE: &str = "Your reports";
pub const REFRESH_LABEL: &str = "Refresh";
pub const REPORTS_ERROR_TITLE: &str = "Reports unavailable";

impl ReportCardApp {
    pub fn ui_dashboard(&mut self, ui: &mut egui::Ui) {
        let theme = current_theme();
        let mut actions = Vec::new();

        page_frame().show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(typography::h1(DASHBOARD_TITLE).color(theme.text_primary));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let refresh = ui.add_enabled(
                        !self.state.reports.loading,
                        egui::Button::new(format!("{} {REFRESH_LABEL}", icons::ACTION_REFRESH)),
                    );
                    if refresh.clicked() {
                        actions.push(Action::Reports(ReportsAction::Refresh));
                    }
                });
            });
            ui.add_space(spacing::SPACING_LG);

            if let Some(err) = &self.state.reports.error {
                if error_banner(ui, REPORTS_ERROR_TITLE, err, true) {
                    actions.push(Action::Reports(ReportsAction::Refresh));
                }
                ui.add_space(spacing::SPACING_LG);
            }

            let mut selected = Vec::new();
            let mut routes = Vec::new();
            report_collection::report_collection(
                ui,
                &self.state.reports.items,
                self.state.reports.loading,
                &mut |id: &SessionId| selected.push(id.clone()),
                &mut |route: Route| routes.push(route),
            );
            actions.extend(
                selected
                    .into_iter()
                    .map(|id| Action::Reports(ReportsAction::Select(id))),
            );
            actions.extend(
                routes
                    .into_iter()
                    .map(|route| Action::Navigation(NavigationAction::NavigateTo(route))),
            );
        });

        for action in actions {
            self.dispatch(action);
        }
    }
}
