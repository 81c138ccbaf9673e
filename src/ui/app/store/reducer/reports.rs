use super::super::super::state::AppState;
use super::super::action::ReportsAction;
use super::super::command::Command;
use super::navigation::navigate_to;
use crate::domain::Route;

pub fn reduce(state: &mut AppState, action: ReportsAction) -> Vec<Command> {
    match action {
        ReportsAction::Refresh => request_reports(state),
        ReportsAction::Select(session_id) => navigate_to(state, Route::ReportDetail(session_id)),
    }
}

/// Starts a load unless one is already outstanding.
pub fn request_reports(state: &mut AppState) -> Vec<Command> {
    let reports = &mut state.reports;
    if reports.loading {
        return Vec::new();
    }
    reports.loading = true;
    reports.error = None;
    reports.generation += 1;
    vec![Command::LoadReports {
        generation: reports.generation,
    }]
}
