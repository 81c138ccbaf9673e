use super::SessionId;

/// Entry point for dialogue practice; where the empty dashboard sends users.
pub const PRACTICE_PATH: &str = "/dialogue";

/// Navigable destinations inside the app.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Dashboard,
    Profile,
    Practice,
    ReportDetail(SessionId),
}

impl Route {
    pub fn path(&self) -> String {
        match self {
            Route::Dashboard => "/dashboard".to_string(),
            Route::Profile => "/profile".to_string(),
            Route::Practice => PRACTICE_PATH.to_string(),
            Route::ReportDetail(id) => format!("/reports/{id}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_are_stable() {
        assert_eq!(Route::Dashboard.path(), "/dashboard");
        assert_eq!(Route::Profile.path(), "/profile");
        assert_eq!(Route::Practice.path(), "/dialogue");
        assert_eq!(
            Route::ReportDetail(SessionId::new("abc")).path(),
            "/reports/abc"
        );
    }
}
