use crate::domain::{ProfileState, ReportCollection, ReportSummary, Route, SessionId};

/// Which header tab is highlighted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppView {
    #[default]
    Dashboard,
    Profile,
}

impl AppView {
    pub fn route(self) -> Route {
        match self {
            AppView::Dashboard => Route::Dashboard,
            AppView::Profile => Route::Profile,
        }
    }
}

#[derive(Debug, Default)]
pub struct UiState {
    pub route: Route,
    /// Routes to return to with Back, most recent last.
    pub back_stack: Vec<Route>,
}

impl UiState {
    pub fn current_view(&self) -> AppView {
        match self.route {
            Route::Profile => AppView::Profile,
            _ => AppView::Dashboard,
        }
    }
}

/// Report collection plus the loading flag handed to the collection view.
#[derive(Debug, Default)]
pub struct ReportsState {
    pub items: ReportCollection,
    pub loading: bool,
    pub error: Option<String>,
    /// Bumped for every request; results tagged with an older value are dropped.
    pub generation: u64,
}

#[derive(Debug, Default)]
pub struct ProfileSlice {
    pub state: ProfileState,
    pub generation: u64,
}

/// All app state in one struct.
#[derive(Debug, Default)]
pub struct AppState {
    pub ui: UiState,
    pub reports: ReportsState,
    pub profile: ProfileSlice,
    pub signed_in: bool,
}

impl AppState {
    pub fn new(signed_in: bool) -> Self {
        Self {
            signed_in,
            ..Default::default()
        }
    }

    /// Position and report for a detail route. Session ids are assumed unique;
    /// when the backend repeats one, the first occurrence wins.
    pub fn find_report(&self, session_id: &SessionId) -> Option<(usize, &ReportSummary)> {
        self.reports
            .items
            .iter()
            .enumerate()
            .find(|(_, report)| &report.session_id == session_id)
    }
}
