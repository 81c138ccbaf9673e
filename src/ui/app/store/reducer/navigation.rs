use super::super::super::state::{AppState, ProfileSlice};
use super::super::action::NavigationAction;
use super::super::command::Command;
use super::profile::request_profile;
use crate::domain::{ProfileState, Route};

pub fn reduce(state: &mut AppState, action: NavigationAction) -> Vec<Command> {
    match action {
        NavigationAction::NavigateTo(route) => navigate_to(state, route),
        NavigationAction::Back => {
            state.ui.route = state.ui.back_stack.pop().unwrap_or_default();
            Vec::new()
        }
    }
}

pub fn navigate_to(state: &mut AppState, route: Route) -> Vec<Command> {
    if state.ui.route == route {
        return Vec::new();
    }
    log::debug!("navigate {} -> {}", state.ui.route.path(), route.path());

    let previous = std::mem::replace(&mut state.ui.route, route.clone());
    state.ui.back_stack.push(previous);

    if route == Route::Profile && needs_profile(&state.profile, state.signed_in) {
        return request_profile(state);
    }
    Vec::new()
}

fn needs_profile(profile: &ProfileSlice, signed_in: bool) -> bool {
    signed_in && matches!(profile.state, ProfileState::Idle)
}
