use crate::domain::{ProfileError, ProfilePayload, ProfileState};
use crate::infra::api::ProfileApi;
use crate::infra::auth::AuthClient;

/// Fetches the profile for the signed-in user.
///
/// Returns `Ok(None)` when nobody is signed in; the API is not called then.
pub async fn fetch_profile(
    auth: &dyn AuthClient,
    api: &dyn ProfileApi,
) -> Result<Option<ProfilePayload>, ProfileError> {
    if !auth.is_authenticated() {
        return Ok(None);
    }
    let token = auth.get_token().await?;
    let profile = api.fetch_profile(&token).await?;
    Ok(Some(profile))
}

/// Like [`fetch_profile`], folded into the state the profile view renders.
pub async fn load_profile(auth: &dyn AuthClient, api: &dyn ProfileApi) -> ProfileState {
    match fetch_profile(auth, api).await {
        Ok(Some(profile)) => {
            log::info!("Loaded profile for {}", profile.email);
            ProfileState::Loaded(profile)
        }
        Ok(None) => ProfileState::Idle,
        Err(err) => {
            log::warn!("Profile unavailable: {err}");
            ProfileState::Failed(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ApiError, AuthError};
    use async_trait::async_trait;
    use chrono::{TimeZone, Utc};
    use std::sync::Mutex;

    struct FakeAuth {
        signed_in: bool,
        token: Result<&'static str, &'static str>,
    }

    #[async_trait]
    impl AuthClient for FakeAuth {
        fn is_authenticated(&self) -> bool {
            self.signed_in
        }

        async fn get_token(&self) -> Result<String, AuthError> {
            self.token
                .map(str::to_string)
                .map_err(|e| AuthError::TokenUnavailable(e.to_string()))
        }
    }

    #[derive(Default)]
    struct FakeApi {
        status: Option<u16>,
        seen_tokens: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl ProfileApi for FakeApi {
        async fn fetch_profile(&self, token: &str) -> Result<ProfilePayload, ApiError> {
            self.seen_tokens.lock().unwrap().push(token.to_string());
            if let Some(status) = self.status {
                return Err(ApiError::Status { status });
            }
            Ok(ProfilePayload {
                email: "ada@example.com".into(),
                created_at: Utc.with_ymd_and_hms(2024, 3, 4, 10, 0, 0).unwrap(),
            })
        }
    }

    #[tokio::test]
    async fn signed_out_skips_the_api() {
        let auth = FakeAuth {
            signed_in: false,
            token: Ok("tok"),
        };
        let api = FakeApi::default();

        assert_eq!(load_profile(&auth, &api).await, ProfileState::Idle);
        assert!(api.seen_tokens.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn signed_in_loads_with_token() {
        let auth = FakeAuth {
            signed_in: true,
            token: Ok("tok"),
        };
        let api = FakeApi::default();

        let state = load_profile(&auth, &api).await;
        assert_eq!(state.profile().unwrap().email, "ada@example.com");
        assert_eq!(*api.seen_tokens.lock().unwrap(), vec!["tok".to_string()]);
    }

    #[tokio::test]
    async fn token_failure_is_reported() {
        let auth = FakeAuth {
            signed_in: true,
            token: Err("expired"),
        };
        let api = FakeApi::default();

        let state = load_profile(&auth, &api).await;
        assert!(matches!(state, ProfileState::Failed(ref msg) if msg.contains("expired")));
        assert!(api.seen_tokens.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn http_failure_is_reported() {
        let auth = FakeAuth {
            signed_in: true,
            token: Ok("tok"),
        };
        let api = FakeApi {
            status: Some(500),
            ..Default::default()
        };

        let state = load_profile(&auth, &api).await;
        assert!(matches!(state, ProfileState::Failed(ref msg) if msg.contains("500")));
    }
}
