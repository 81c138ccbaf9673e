pub mod async_handler;
pub mod navigation;
pub mod profile;
pub mod reports;

use super::super::state::AppState;
use super::action::Action;
use super::command::Command;

pub fn reduce(state: &mut AppState, action: Action) -> Vec<Command> {
    match action {
        Action::Navigation(action) => navigation::reduce(state, action),
        Action::Reports(action) => reports::reduce(state, action),
        Action::Profile(action) => profile::reduce(state, action),
        Action::Async(action) => async_handler::reduce(state, action),
    }
}
