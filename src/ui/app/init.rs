use std::sync::Arc;

use eframe::egui;
use tokio::sync::mpsc;

use crate::application::reports::ReportSource;
use crate::domain::ApiError;
use crate::infra::api::{HttpApi, ProfileApi};
use crate::infra::app_config::AppConfig;
use crate::infra::auth::{AuthClient, StaticTokenAuth};

use super::ReportCardApp;
use super::state::AppState;
use super::store::{Action, ProfileAction, ReportsAction};

const ACTION_CHANNEL_CAPACITY: usize = 32;

/// Capabilities the app talks to. Swapped for fakes in tests.
#[derive(Clone)]
pub struct AppServices {
    pub auth: Arc<dyn AuthClient>,
    pub profile_api: Arc<dyn ProfileApi>,
    pub report_source: ReportSource,
}

impl AppServices {
    pub fn from_config(config: &AppConfig) -> Result<Self, ApiError> {
        let auth: Arc<dyn AuthClient> = Arc::new(StaticTokenAuth::new(config.access_token.clone()));
        let api = Arc::new(HttpApi::new(config.api_base_url.clone())?);
        log::info!("backend at {}", api.base_url());

        let report_source = match &config.reports_file {
            Some(path) => ReportSource::File(path.clone()),
            None => ReportSource::Api {
                auth: auth.clone(),
                api: api.clone(),
            },
        };

        Ok(Self {
            auth,
            profile_api: api,
            report_source,
        })
    }
}

impl ReportCardApp {
    pub fn new(services: AppServices) -> Self {
        let (action_tx, action_rx) = mpsc::channel(ACTION_CHANNEL_CAPACITY);
        let signed_in = services.auth.is_authenticated();
        log::info!(
            "starting signed {} with reports from {:?}",
            if signed_in { "in" } else { "out" },
            services.report_source
        );

        Self {
            state: AppState::new(signed_in),
            auth: services.auth,
            profile_api: services.profile_api,
            report_source: services.report_source,
            action_tx,
            action_rx,
            skip_runtime: false,
        }
    }

    pub fn new_egui(cc: &eframe::CreationContext<'_>, services: AppServices) -> Self {
        catppuccin_egui::set_theme(&cc.egui_ctx, catppuccin_egui::MOCHA);
        cc.egui_ctx.style_mut(|style| {
            style.spacing.item_spacing = egui::vec2(8.0, 6.0);
        });

        let mut app = Self::new(services);
        app.start();
        app
    }

    /// Kicks off the initial reports load and, when signed in, the profile fetch.
    pub fn start(&mut self) {
        self.dispatch(Action::Reports(ReportsAction::Refresh));
        self.dispatch(Action::Profile(ProfileAction::Load));
    }

    #[cfg(test)]
    pub fn new_for_test() -> Self {
        let mut app = Self::new(super::tests::fixtures::signed_in_services());
        app.skip_runtime = true;
        app
    }
}
