use chrono::{DateTime, Local, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Profile of the signed-in user as returned by the private API endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfilePayload {
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl ProfilePayload {
    /// Account creation date, converted to the local time zone. Month names are
    /// always English, e.g. `March 4, 2024`.
    pub fn member_since(&self) -> String {
        format_date_in(&self.created_at, &Local)
    }
}

pub fn format_date_in<Tz: TimeZone>(at: &DateTime<Utc>, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    at.with_timezone(tz).format("%B %-d, %Y").to_string()
}

/// Lifecycle of the profile fetch.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ProfileState {
    /// Not signed in; nothing is fetched or shown.
    #[default]
    Idle,
    Loading,
    Loaded(ProfilePayload),
    Failed(String),
}

impl ProfileState {
    pub fn profile(&self) -> Option<&ProfilePayload> {
        match self {
            ProfileState::Loaded(profile) => Some(profile),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ProfileState::Loading)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    #[test]
    fn decodes_created_at() {
        let json = r#"{"email":"ada@example.com","createdAt":"2024-03-04T10:00:00Z"}"#;
        let profile: ProfilePayload = serde_json::from_str(json).unwrap();
        assert_eq!(profile.email, "ada@example.com");
        assert_eq!(
            profile.created_at,
            Utc.with_ymd_and_hms(2024, 3, 4, 10, 0, 0).unwrap()
        );
    }

    #[test]
    fn date_follows_time_zone() {
        let at = Utc.with_ymd_and_hms(2024, 3, 4, 23, 30, 0).unwrap();
        assert_eq!(format_date_in(&at, &Utc), "March 4, 2024");

        let tokyo = FixedOffset::east_opt(9 * 3600).unwrap();
        assert_eq!(format_date_in(&at, &tokyo), "March 5, 2024");
    }

    #[test]
    fn only_loaded_state_exposes_profile() {
        assert!(ProfileState::Idle.profile().is_none());
        assert!(ProfileState::Failed("x".into()).profile().is_none());
        assert!(ProfileState::Loading.is_loading());
    }
}
