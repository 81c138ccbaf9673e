use super::super::super::ReportCardApp;
use super::super::action::{Action, AsyncAction};

pub fn load_reports(app: &mut ReportCardApp, generation: u64) {
    let source = app.report_source.clone();
    let action_tx = app.action_tx.clone();

    tokio::spawn(async move {
        let result = match source.load().await {
            Ok(reports) => {
                log::debug!("loaded {} reports from {source:?}", reports.len());
                Ok(reports)
            }
            Err(err) => {
                log::warn!("Failed to load reports: {err}");
                Err(err.to_string())
            }
        };

        let _ = action_tx
            .send(Action::Async(AsyncAction::ReportsLoaded { generation, result }))
            .await;
    });
}
