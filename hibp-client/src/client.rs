use std::time::Duration;

use reqwest::{StatusCode, Url};

use crate::{model::BreachEntry, Config, Error};

/// Header carrying the subscription key on every request.
pub const API_KEY_HEADER: &str = "hibp-api-key";

/// User agent sent when none is configured.
pub const DEFAULT_USER_AGENT: &str = "Osint Cyber";

/// Per-request timeout applied when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Breach API client.
///
/// Cheap to clone, the underlying connection pool is shared between clones.
#[derive(Clone)]
pub struct Client {
    http: reqwest::Client,
    config: Config,
    api_key: String,
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Client {
    /// Creates a new [`ClientBuilder`]
    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }

    /// Fetches every breach the given account appears in, with full breach detail.
    ///
    /// # Returns
    /// - `Ok(Vec<BreachEntry>)` - Breaches reported for the account, possibly empty
    /// - `Err(Error::NotFound)` - The account has no known breaches
    /// - `Err(Error::Upstream)` - Any other non-success status, with the raw body
    /// - `Err(Error::Transport)` - The request could not be completed
    /// - `Err(Error::Decode)` - The response body was not a list of breaches
    pub async fn breached_account(&self, account: &str) -> Result<Vec<BreachEntry>, Error> {
        let url = self.breached_account_url(account)?;

        tracing::debug!(%url, "Requesting breached account");

        let response = self
            .http
            .get(url)
            .header(API_KEY_HEADER, &self.api_key)
            .send()
            .await
            .map_err(Error::Transport)?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(Error::NotFound);
        }

        let body = response.text().await.map_err(Error::Transport)?;

        if !status.is_success() {
            return Err(Error::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        serde_json::from_str(&body).map_err(Error::Decode)
    }

    fn breached_account_url(&self, account: &str) -> Result<Url, Error> {
        let mut url = self.config.base_url.clone();

        url.path_segments_mut()
            .map_err(|_| Error::InvalidUrl(self.config.base_url.to_string()))?
            .pop_if_empty()
            .push("breachedaccount")
            .push(account);

        url.query_pairs_mut()
            .append_pair("truncateResponse", "false");

        Ok(url)
    }
}

/// Builder for [`Client`], created with [`Client::builder`].
pub struct ClientBuilder {
    config: Option<Config>,
    api_key: Option<String>,
    user_agent: String,
    timeout: Duration,
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self {
            config: None,
            api_key: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ClientBuilder {
    /// Sets the endpoint configuration
    pub fn config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    pub fn api_key(mut self, api_key: &str) -> Self {
        self.api_key = Some(api_key.to_string());
        self
    }

    pub fn user_agent(mut self, user_agent: &str) -> Self {
        self.user_agent = user_agent.to_string();
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Builds the client, failing without an API key
    pub fn build(self) -> Result<Client, Error> {
        let api_key = self
            .api_key
            .filter(|key| !key.is_empty())
            .ok_or(Error::MissingApiKey)?;

        let config = match self.config {
            Some(config) => config,
            None => Config::builder().build()?,
        };

        let http = reqwest::Client::builder()
            .user_agent(self.user_agent)
            .timeout(self.timeout)
            .build()
            .map_err(Error::Build)?;

        Ok(Client {
            http,
            config,
            api_key,
        })
    }
}
