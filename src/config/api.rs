use crate::{modules::post::post_dtos::PostId, shared::exceptions::exception::ClientError};
use std::env;

/// Base URL used when `POSTS_API_URL` is not set.
pub const DEFAULT_API_URL: &str = "http://localhost:3000/api";

/// # Api Config
///
/// ## Fields
///
/// * `base_url` - Root of the posts API, without trailing slash (e.g. `http://localhost:3000/api`)
///
/// ## Purpose
///
/// Holds the location of the backend and builds the resource URLs the client talks to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    /// Builds a config from an explicit base URL.
    ///
    /// Trailing slashes are stripped. Only `http` and `https` URLs are accepted.
    ///
    /// ## Example
    ///
    /// ```rust
    /// use post_wall::config::api::ApiConfig;
    ///
    /// let config = ApiConfig::new("http://localhost:3000/api/").unwrap();
    /// assert_eq!(config.posts_url(), "http://localhost:3000/api/posts");
    /// ```
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let trimmed = base_url.trim().trim_end_matches('/');

        let url = match reqwest::Url::parse(trimmed) {
            Ok(url) => url,
            Err(e) => {
                return Err(ClientError::Config(format!(
                    "invalid API URL `{trimmed}`: {e}"
                )))
            }
        };
        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(ClientError::Config(format!(
                "unsupported scheme `{}` in API URL `{trimmed}`",
                url.scheme()
            )));
        }

        Ok(Self {
            base_url: trimmed.to_string(),
        })
    }

    /// Reads `POSTS_API_URL`, falling back to [`DEFAULT_API_URL`].
    ///
    /// Call `dotenv::dotenv()` first if the value may live in a `.env` file.
    pub fn from_env() -> Result<Self, ClientError> {
        let base_url = env::var("POSTS_API_URL").unwrap_or(DEFAULT_API_URL.into());
        Self::new(&base_url)
    }

    pub fn posts_url(&self) -> String {
        format!("{}/posts", self.base_url)
    }

    pub fn post_url(&self, id: PostId) -> String {
        format!("{}/posts/{}", self.base_url, id)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
        }
    }
}
