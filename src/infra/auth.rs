//! Identity provider capability.

use async_trait::async_trait;

use crate::domain::AuthError;

/// Source of the signed-in state and bearer tokens.
#[async_trait]
pub trait AuthClient: Send + Sync {
    fn is_authenticated(&self) -> bool;

    async fn get_token(&self) -> Result<String, AuthError>;
}

/// Hands out a token configured up front (config file, env, or CLI flag).
#[derive(Debug, Clone, Default)]
pub struct StaticTokenAuth {
    token: Option<String>,
}

impl StaticTokenAuth {
    pub fn new(token: Option<String>) -> Self {
        let token = token.filter(|t| !t.trim().is_empty());
        Self { token }
    }
}

#[async_trait]
impl AuthClient for StaticTokenAuth {
    fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    async fn get_token(&self) -> Result<String, AuthError> {
        self.token.clone().ok_or(AuthError::NotAuthenticated)
    }
}
