use crate::domain::{ProfileState, ReportCollection, Route, SessionId};

#[derive(Debug)]
pub enum Action {
    Navigation(NavigationAction),
    Reports(ReportsAction),
    Profile(ProfileAction),
    Async(AsyncAction),
}

#[derive(Debug)]
pub enum NavigationAction {
    NavigateTo(Route),
    Back,
}

#[derive(Debug)]
pub enum ReportsAction {
    Refresh,
    /// A card was activated.
    Select(SessionId),
}

#[derive(Debug)]
pub enum ProfileAction {
    Load,
}

#[derive(Debug)]
pub enum AsyncAction {
    ReportsLoaded {
        generation: u64,
        result: Result<ReportCollection, String>,
    },
    ProfileLoaded {
        generation: u64,
        state: ProfileState,
    },
}
