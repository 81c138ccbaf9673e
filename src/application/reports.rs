use std::path::PathBuf;
use std::sync::Arc;

use crate::domain::{AuthError, ReportCollection, ReportSourceError};
use crate::infra::api::ReportsApi;
use crate::infra::auth::AuthClient;

/// Where the dashboard gets its reports from.
#[derive(Clone)]
pub enum ReportSource {
    Api {
        auth: Arc<dyn AuthClient>,
        api: Arc<dyn ReportsApi>,
    },
    File(PathBuf),
}

impl std::fmt::Debug for ReportSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportSource::Api { .. } => f.write_str("ReportSource::Api"),
            ReportSource::File(path) => write!(f, "ReportSource::File({})", path.display()),
        }
    }
}

impl ReportSource {
    pub async fn load(&self) -> Result<ReportCollection, ReportSourceError> {
        match self {
            ReportSource::Api { auth, api } => {
                if !auth.is_authenticated() {
                    return Err(AuthError::NotAuthenticated.into());
                }
                let token = auth.get_token().await?;
                Ok(api.fetch_reports(&token).await?)
            }
            ReportSource::File(path) => load_reports_file(path).await,
        }
    }
}

pub async fn load_reports_file(path: &std::path::Path) -> Result<ReportCollection, ReportSourceError> {
    let display = path.display().to_string();
    let contents = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| ReportSourceError::Io {
            path: display.clone(),
            source,
        })?;
    serde_json::from_str(&contents).map_err(|source| ReportSourceError::Parse {
        path: display,
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ApiError, ReportSummary};
    use crate::infra::auth::StaticTokenAuth;
    use async_trait::async_trait;
    use tempfile::tempdir;

    struct FixedReports(ReportCollection);

    #[async_trait]
    impl ReportsApi for FixedReports {
        async fn fetch_reports(&self, token: &str) -> Result<ReportCollection, ApiError> {
            assert_eq!(token, "tok");
            Ok(self.0.clone())
        }
    }

    #[tokio::test]
    async fn api_source_requires_sign_in() {
        let source = ReportSource::Api {
            auth: Arc::new(StaticTokenAuth::new(None)),
            api: Arc::new(FixedReports(vec![])),
        };
        assert!(matches!(
            source.load().await,
            Err(ReportSourceError::Auth(AuthError::NotAuthenticated))
        ));
    }

    #[tokio::test]
    async fn api_source_keeps_server_order() {
        let reports = vec![
            ReportSummary::new("z", Some(20)),
            ReportSummary::new("a", Some(90)),
        ];
        let source = ReportSource::Api {
            auth: Arc::new(StaticTokenAuth::new(Some("tok".into()))),
            api: Arc::new(FixedReports(reports.clone())),
        };
        assert_eq!(source.load().await.unwrap(), reports);
    }

    #[tokio::test]
    async fn file_source_reads_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("reports.json");
        std::fs::write(
            &path,
            r#"[{"sessionId":"a","totalScore":85,"feedback":"Clear and concise"}]"#,
        )
        .unwrap();

        let reports = ReportSource::File(path).load().await.unwrap();
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].feedback_text(), "Clear and concise");
    }

    #[tokio::test]
    async fn file_source_reports_bad_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("reports.json");
        std::fs::write(&path, "{not json").unwrap();

        let err = ReportSource::File(path).load().await.unwrap_err();
        assert!(matches!(err, ReportSourceError::Parse { .. }));
    }

    #[tokio::test]
    async fn file_source_reports_missing_file() {
        let dir = tempdir().unwrap();
        let err = ReportSource::File(dir.path().join("absent.json"))
            .load()
            .await
            .unwrap_err();
        assert!(matches!(err, ReportSourceError::Io { .. }));
    }
}
