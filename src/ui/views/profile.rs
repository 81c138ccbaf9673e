use eframe::egui;

use crate::domain::ProfileState;
use crate::ui::app::{Action, ProfileAction, ReportCardApp};
use crate::ui::components::status::{busy_indicator, error_banner};
use crate::ui::theme::current_theme;
use crate::ui::{spacing, typography};

use super::page_frame;

pub const PROFILE_LOADING_TEXT: &str = "Loading profile…";
pub const PROFILE_ERROR_TITLE: &str = "Profile unavailable";

pub fn member_since_line(date: &str) -> String {
    format!("Member since {date}")
}

impl ReportCardApp {
    pub fn ui_profile(&mut self, ui: &mut egui::Ui) {
        let theme = current_theme();
        let mut retry = false;

        page_frame().show(ui, |ui| match &self.state.profile.state {
            ProfileState::Idle => {}
            ProfileState::Loading => busy_indicator(ui, PROFILE_LOADING_TEXT),
            ProfileState::Loaded(profile) => {
                ui.label(typography::h1("Profile").color(theme.text_primary));
                ui.add_space(spacing::SPACING_LG);
                ui.label(typography::bold_label(profile.email.as_str()).color(theme.text_primary));
                ui.add_space(spacing::SPACING_XS);
                ui.label(
                    typography::label(member_since_line(&profile.member_since()))
                        .color(theme.text_muted),
                );
            }
            ProfileState::Failed(message) => {
                retry = error_banner(ui, PROFILE_ERROR_TITLE, message, true);
            }
        });

        if retry {
            self.dispatch(Action::Profile(ProfileAction::Load));
        }
    }
}
