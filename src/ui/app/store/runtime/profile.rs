use super::super::super::ReportCardApp;
use super::super::action::{Action, AsyncAction};
use crate::application::profile::load_profile;

pub fn fetch_profile(app: &mut ReportCardApp, generation: u64) {
    let auth = app.auth.clone();
    let api = app.profile_api.clone();
    let action_tx = app.action_tx.clone();

    tokio::spawn(async move {
        let state = load_profile(auth.as_ref(), api.as_ref()).await;
        let _ = action_tx
            .send(Action::Async(AsyncAction::ProfileLoaded { generation, state }))
            .await;
    });
}
