use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Deserialize;

use super::{BaseProjectRegistry, ProjectInfo};

/// HTTP client for the external project registry
///
/// The registry is the authoritative source for which project names exist;
/// this client only ever reads from it.
pub struct HttpProjectRegistry {
    base_url: String,
    bearer_token: Option<String>,
    client: reqwest::Client,
}

/// Registry list response: `{"data": [{"name": ...}, ...]}`
#[derive(Debug, Deserialize)]
struct ListProjectsResponse {
    data: Vec<ProjectInfo>,
}

impl HttpProjectRegistry {
    /// Create a new registry client
    pub fn new(base_url: String, bearer_token: Option<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(10))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            bearer_token,
            client,
        })
    }
}

#[async_trait]
impl BaseProjectRegistry for HttpProjectRegistry {
    async fn list_projects(&self) -> Result<Vec<ProjectInfo>> {
        let url = format!("{}/projects", self.base_url);

        let mut request = self.client.get(&url);
        if let Some(token) = &self.bearer_token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .context("Project registry request failed")?
            .error_for_status()
            .context("Project registry returned an error status")?;

        let body: ListProjectsResponse = response
            .json()
            .await
            .context("Failed to parse project registry response")?;

        Ok(body.data)
    }
}
