use super::super::super::state::AppState;
use super::super::action::AsyncAction;
use super::super::command::Command;
use crate::domain::ReportSummary;
use std::collections::HashSet;

pub fn reduce(state: &mut AppState, action: AsyncAction) -> Vec<Command> {
    match action {
        AsyncAction::ReportsLoaded { generation, result } => {
            let reports = &mut state.reports;
            if generation != reports.generation {
                log::debug!(
                    "dropping stale reports result (got {generation}, want {})",
                    reports.generation
                );
                return Vec::new();
            }
            reports.loading = false;
            match result {
                Ok(items) => {
                    warn_on_duplicate_ids(&items);
                    reports.items = items;
                    reports.error = None;
                }
                Err(err) => {
                    reports.items.clear();
                    reports.error = Some(err);
                }
            }
            Vec::new()
        }
        AsyncAction::ProfileLoaded {
            generation,
            state: loaded,
        } => {
            if generation != state.profile.generation {
                log::debug!(
                    "dropping stale profile result (got {generation}, want {})",
                    state.profile.generation
                );
                return Vec::new();
            }
            state.profile.state = loaded;
            Vec::new()
        }
    }
}

/// Detail routes are keyed by session id, so repeated ids all open the first report.
fn warn_on_duplicate_ids(items: &[ReportSummary]) {
    let mut seen = HashSet::new();
    for report in items {
        if !seen.insert(&report.session_id) {
            log::warn!("duplicate session id {} in reports", report.session_id);
        }
    }
}
