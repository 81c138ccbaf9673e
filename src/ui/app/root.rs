//! Root egui app struct.

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::application::reports::ReportSource;
use crate::infra::api::ProfileApi;
use crate::infra::auth::AuthClient;

use super::state::AppState;

/// Root egui application for ReportCard.
pub struct ReportCardApp {
    pub state: AppState,

    pub auth: Arc<dyn AuthClient>,
    pub profile_api: Arc<dyn ProfileApi>,
    pub report_source: ReportSource,

    pub action_tx: mpsc::Sender<crate::ui::app::Action>,
    pub action_rx: mpsc::Receiver<crate::ui::app::Action>,

    pub skip_runtime: bool,
}
