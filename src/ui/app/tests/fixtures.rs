use std::sync::Arc;

use async_trait::async_trait;
use chrono::{TimeZone, Utc};

use crate::application::reports::ReportSource;
use crate::domain::{ApiError, ProfilePayload, ReportCollection, ReportSummary};
use crate::infra::api::{ProfileApi, ReportsApi};
use crate::infra::auth::StaticTokenAuth;
use crate::ui::app::AppServices;

pub const TEST_TOKEN: &str = "test-token";
pub const TEST_EMAIL: &str = "ada@example.com";

pub fn mock_profile() -> ProfilePayload {
    ProfilePayload {
        email: TEST_EMAIL.to_string(),
        created_at: Utc.with_ymd_and_hms(2024, 3, 4, 12, 0, 0).unwrap(),
    }
}

pub fn mock_reports() -> ReportCollection {
    vec![
        ReportSummary::new("session-a", Some(85)).with_feedback("Clear and confident."),
        ReportSummary::new("session-b", Some(50)),
        ReportSummary::new("session-c", Some(10)).with_feedback("Try to answer in full sentences."),
    ]
}

/// Profile endpoint stand-in. `None` answers with a 500.
pub struct FakeProfileApi(pub Option<ProfilePayload>);

#[async_trait]
impl ProfileApi for FakeProfileApi {
    async fn fetch_profile(&self, token: &str) -> Result<ProfilePayload, ApiError> {
        assert_eq!(token, TEST_TOKEN);
        self.0.clone().ok_or(ApiError::Status { status: 500 })
    }
}

pub struct FakeReportsApi(pub ReportCollection);

#[async_trait]
impl ReportsApi for FakeReportsApi {
    async fn fetch_reports(&self, token: &str) -> Result<ReportCollection, ApiError> {
        assert_eq!(token, TEST_TOKEN);
        Ok(self.0.clone())
    }
}

pub fn services_with(
    token: Option<&str>,
    profile: Option<ProfilePayload>,
    reports: ReportCollection,
) -> AppServices {
    let auth = Arc::new(StaticTokenAuth::new(token.map(str::to_string)));
    AppServices {
        auth: auth.clone(),
        profile_api: Arc::new(FakeProfileApi(profile)),
        report_source: ReportSource::Api {
            auth,
            api: Arc::new(FakeReportsApi(reports)),
        },
    }
}

pub fn signed_in_services() -> AppServices {
    services_with(Some(TEST_TOKEN), Some(mock_profile()), mock_reports())
}

pub fn signed_out_services() -> AppServices {
    services_with(None, Some(mock_profile()), mock_reports())
}
