//! Blocking HTTP client for the ProKnow renaming rules endpoints.

use reqwest::blocking::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

use crate::proknow::renaming::error::{Result, SyncError};
use crate::proknow::renaming::io::credentials::Credentials;
use crate::proknow::renaming::model::Rule;

const RULES_ROUTE: &str = "/renaming/rules";

/// Operations the synchroniser needs from the rule store.
pub trait RulesService {
    /// Returns every rule currently stored.
    fn fetch_rules(&self) -> Result<Vec<Rule>>;

    /// Replaces the whole rule collection with `rules`.
    fn replace_rules(&self, rules: &[Rule]) -> Result<()>;
}

/// HTTP client for a single ProKnow organization.
pub struct ProKnowClient {
    client: Client,
    api_url: String,
    credentials: Credentials,
}

impl ProKnowClient {
    /// Create a client for the organization at `base_url`, e.g.
    /// `https://example.proknow.com`.
    pub fn new(base_url: &str, credentials: Credentials) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self::with_client(client, base_url, credentials))
    }

    /// Create a client reusing an existing [`reqwest::blocking::Client`].
    pub fn with_client(client: Client, base_url: &str, credentials: Credentials) -> Self {
        Self {
            client,
            api_url: api_url(base_url),
            credentials,
        }
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        request.basic_auth(&self.credentials.id, Some(&self.credentials.secret))
    }

    /// Returns the response unchanged on success, or an [`SyncError::Api`]
    /// carrying the status and body otherwise.
    fn ensure_success(response: Response) -> Result<Response> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(SyncError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    fn parse_response<T: DeserializeOwned>(response: Response) -> Result<T> {
        let response = Self::ensure_success(response)?;
        Ok(response.json::<T>()?)
    }
}

impl RulesService for ProKnowClient {
    #[instrument(level = "debug", skip_all, fields(api = %self.api_url))]
    fn fetch_rules(&self) -> Result<Vec<Rule>> {
        let response = self
            .authorized(self.client.get(format!("{}{RULES_ROUTE}", self.api_url)))
            .send()?;
        let rules: Vec<Rule> = Self::parse_response(response)?;
        debug!(rule_count = rules.len(), "fetched renaming rules");
        Ok(rules)
    }

    #[instrument(level = "debug", skip_all, fields(api = %self.api_url, rule_count = rules.len()))]
    fn replace_rules(&self, rules: &[Rule]) -> Result<()> {
        let response = self
            .authorized(self.client.put(format!("{}{RULES_ROUTE}", self.api_url)))
            .json(rules)
            .send()?;
        Self::ensure_success(response)?;
        Ok(())
    }
}

fn api_url(base_url: &str) -> String {
    format!("{}/api", base_url.trim_end_matches('/'))
}
