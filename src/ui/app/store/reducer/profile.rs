use super::super::super::state::AppState;
use super::super::action::ProfileAction;
use super::super::command::Command;
use crate::domain::ProfileState;

pub fn reduce(state: &mut AppState, action: ProfileAction) -> Vec<Command> {
    match action {
        ProfileAction::Load => request_profile(state),
    }
}

/// Starts a profile fetch for a signed-in user, at most one at a time.
pub fn request_profile(state: &mut AppState) -> Vec<Command> {
    if !state.signed_in {
        state.profile.state = ProfileState::Idle;
        return Vec::new();
    }
    if state.profile.state.is_loading() {
        return Vec::new();
    }
    state.profile.state = ProfileState::Loading;
    state.profile.generation += 1;
    vec![Command::FetchProfile {
        generation: state.profile.generation,
    }]
}
