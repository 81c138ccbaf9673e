//! Reducer-style state updates + side-effect commands.

mod action;
mod command;
mod reducer;
mod runtime;

pub use action::{Action, AsyncAction, NavigationAction, ProfileAction, ReportsAction};
pub use command::Command;

use super::ReportCardApp;

impl ReportCardApp {
    pub fn dispatch(&mut self, action: Action) {
        let commands = reducer::reduce(&mut self.state, action);
        if self.skip_runtime {
            return;
        }
        for command in commands {
            runtime::run(self, command);
        }
    }
}
