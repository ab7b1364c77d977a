use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};

use super::RosterSource;
use crate::config::Config;
use crate::error::{RosterError, RosterResult};
use crate::logging::{log_debug, log_error};
use crate::models::remote::{decode_members, decode_teams};
use crate::models::{Member, Team};

/// HTTP reader for the two read-only roster collections.
pub struct RosterClient {
    client: reqwest::Client,
    teams_url: String,
    members_url: String,
}

impl RosterClient {
    pub fn new(teams_url: impl Into<String>, members_url: impl Into<String>) -> RosterResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .user_agent(concat!("roster-cli/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            teams_url: teams_url.into(),
            members_url: members_url.into(),
        })
    }

    pub fn from_config(config: &Config) -> RosterResult<Self> {
        Self::new(config.teams_url.clone(), config.members_url.clone())
    }

    pub fn teams_url(&self) -> &str {
        &self.teams_url
    }

    pub fn members_url(&self) -> &str {
        &self.members_url
    }

    /// GET the whole collection at `url` and return the raw body.
    async fn get_collection(&self, url: &str) -> RosterResult<String> {
        log_debug(&format!("GET {}", url));

        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_else(|_| "Unknown error".to_string());
            let message = format!("GET {} failed with status {}: {}", url, status, error_text);
            log_error(&message);
            return Err(RosterError::ApiError(message));
        }

        Ok(response.text().await?)
    }
}

#[async_trait]
impl RosterSource for RosterClient {
    async fn fetch_teams(&self) -> RosterResult<Vec<Team>> {
        let body = self.get_collection(&self.teams_url).await?;
        let teams = decode_teams(&body)?;
        log_debug(&format!("Decoded {} teams", teams.len()));
        Ok(teams)
    }

    async fn fetch_members(&self) -> RosterResult<Vec<Member>> {
        let body = self.get_collection(&self.members_url).await?;
        let members = decode_members(&body)?;
        log_debug(&format!("Decoded {} members", members.len()));
        Ok(members)
    }
}
