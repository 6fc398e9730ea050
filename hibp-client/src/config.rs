use reqwest::Url;

use crate::Error;

/// Base URL of the public Have I Been Pwned v3 API.
pub const DEFAULT_BASE_URL: &str = "https://haveibeenpwned.com/api/v3";

/// Endpoint configuration for the breach API.
#[derive(Clone, Debug)]
pub struct Config {
    pub(crate) base_url: Url,
}

impl Config {
    /// Creates a new [`ConfigBuilder`] pointing at [`DEFAULT_BASE_URL`]
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// API base URL every endpoint path is appended to
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }
}

/// Builder for [`Config`].
pub struct ConfigBuilder {
    base_url: String,
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl ConfigBuilder {
    /// Overrides the API base URL, used to point the client at a mock server in tests
    pub fn base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.to_string();
        self
    }

    /// Parses the base URL
    pub fn build(self) -> Result<Config, Error> {
        let base_url = Url::parse(&self.base_url)
            .map_err(|e| Error::InvalidUrl(format!("{}: {}", self.base_url, e)))?;

        if base_url.cannot_be_a_base() {
            return Err(Error::InvalidUrl(self.base_url));
        }

        Ok(Config { base_url })
    }
}
