//! Public client surface + builder.

use std::env;
use std::time::Duration;

use reqwest::Client;
use url::Url;

use crate::core::IgError;

/// Default desktop UA to avoid trivial bot blocking.
pub(crate) const USER_AGENT: &str = concat!(
    "Mozilla/5.0 (X11; Linux x86_64) ",
    "AppleWebKit/537.36 (KHTML, like Gecko) ",
    "Chrome/122.0.0.0 Safari/537.36"
);

/// Apify `run-sync` endpoint for the instagram-scraper actor task.
pub(crate) const DEFAULT_BASE_RUN_SYNC: &str =
    "https://api.apify.com/v2/actor-tasks/chatty_coaster~instagram-scraper-task/run-sync";

/// Environment variable consulted when no token is set on the builder.
pub(crate) const TOKEN_ENV_VAR: &str = "APIFY_TOKEN";

#[derive(Debug, Clone)]
pub struct IgClient {
    http: Client,
    base_run_sync: Url,
    token: String,
}

impl IgClient {
    /// Create a new builder.
    pub fn builder() -> IgClientBuilder {
        IgClientBuilder::default()
    }

    /* -------- internal getters used by other modules -------- */

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }

    /// The `run-sync` endpoint with the API token appended as a query pair.
    pub(crate) fn run_sync_url(&self) -> Url {
        let mut url = self.base_run_sync.clone();
        url.query_pairs_mut().append_pair("token", &self.token);
        url
    }
}

/* ----------------------- Builder ----------------------- */

#[derive(Default)]
pub struct IgClientBuilder {
    user_agent: Option<String>,
    base_run_sync: Option<Url>,
    token: Option<String>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
}

impl IgClientBuilder {
    /// Override the User-Agent.
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Override the actor-task `run-sync` base URL (e.g. a mock server in tests).
    #[must_use]
    pub fn base_run_sync(mut self, url: Url) -> Self {
        self.base_run_sync = Some(url);
        self
    }

    /// Set the Apify API token. When unset, `build` falls back to the
    /// `APIFY_TOKEN` environment variable.
    #[must_use]
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set a global request timeout (overall). Default: none.
    #[must_use]
    pub fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    #[must_use]
    pub fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// Returns `IgError::Auth` when no token is configured (neither on the
    /// builder nor via `APIFY_TOKEN`), or `IgError::Http` if the underlying
    /// HTTP client cannot be constructed.
    pub fn build(self) -> Result<IgClient, IgError> {
        let base_run_sync = match self.base_run_sync {
            Some(u) => u,
            None => Url::parse(DEFAULT_BASE_RUN_SYNC)?,
        };

        let token = match self.token {
            Some(t) => t,
            None => env::var(TOKEN_ENV_VAR).map_err(|_| {
                IgError::Auth(format!(
                    "no Apify token: set one on the builder or export {TOKEN_ENV_VAR}"
                ))
            })?,
        };

        let mut httpb = reqwest::Client::builder()
            .user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT));

        if let Some(t) = self.timeout {
            httpb = httpb.timeout(t);
        }
        if let Some(ct) = self.connect_timeout {
            httpb = httpb.connect_timeout(ct);
        }

        let http = httpb.build()?;

        Ok(IgClient {
            http,
            base_run_sync,
            token,
        })
    }
}
