//! egui application shell: state, store, and the routed views.

mod header;
mod init;
mod polling;
mod root;
pub mod state;
pub mod store;
mod update;

#[cfg(test)]
pub(crate) mod tests;

pub use header::APP_TITLE;
pub use init::AppServices;
pub use root::ReportCardApp;
pub use state::{AppState, AppView};
pub use store::{Action, AsyncAction, Command, NavigationAction, ProfileAction, ReportsAction};
