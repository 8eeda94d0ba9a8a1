use super::post_dtos::{CreatePostDTO, ListPostsDTO, PostDTO, PostId};
use crate::{config::api::ApiConfig, shared::exceptions::exception::ClientError};
use async_trait::async_trait;
use log::{debug, warn};
use reqwest::{Client, Method, RequestBuilder};

/// # Posts Api
///
/// Port used by the store and the form to reach the backend.
///
/// ## Functions:
///
/// list_posts () -> every post, in backend order
///
/// create_post (input) -> the created post, with its server-assigned id
///
/// delete_post (id) -> nothing on success
///
/// Every call is issued once: no retries, no client-side timeout.
#[async_trait]
pub trait PostsApi: Send + Sync {
    async fn list_posts(&self) -> Result<Vec<PostDTO>, ClientError>;

    async fn create_post(&self, input: &CreatePostDTO) -> Result<PostDTO, ClientError>;

    async fn delete_post(&self, id: PostId) -> Result<(), ClientError>;
}

/// HTTP implementation of [`PostsApi`] on top of `reqwest`.
#[derive(Clone, Debug)]
pub struct PostClient {
    http: Client,
    config: ApiConfig,
}

impl PostClient {
    /// # Example
    ///
    /// ```rust
    /// use post_wall::config::api::ApiConfig;
    /// use post_wall::modules::post::post_client::PostClient;
    ///
    /// let client = PostClient::new(ApiConfig::default()).unwrap();
    /// assert_eq!(client.config().posts_url(), "http://localhost:3000/api/posts");
    /// ```
    pub fn new(config: ApiConfig) -> Result<Self, ClientError> {
        let http = match Client::builder().build() {
            Ok(http) => http,
            Err(e) => return Err(ClientError::Config(e.to_string())),
        };

        Ok(Self::with_http(config, http))
    }

    /// Uses a caller-built `reqwest::Client` (proxies, TLS roots, default headers).
    pub fn with_http(config: ApiConfig, http: Client) -> Self {
        Self { http, config }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Sends the request and returns the raw body of a 2xx response.
    async fn send(
        &self,
        method: Method,
        url: String,
        request: RequestBuilder,
    ) -> Result<Vec<u8>, ClientError> {
        debug!("{} {}", method, url);

        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                warn!("{} {} failed: {}", method, url, e);
                return Err(ClientError::Network(e));
            }
        };

        let status = response.status();
        if !status.is_success() {
            warn!("{} {} answered {}", method, url, status);
            return Err(ClientError::Http(status));
        }

        match response.bytes().await {
            Ok(bytes) => Ok(bytes.to_vec()),
            Err(e) => {
                warn!("{} {} body could not be read: {}", method, url, e);
                Err(ClientError::Network(e))
            }
        }
    }
}

#[async_trait]
impl PostsApi for PostClient {
    async fn list_posts(&self) -> Result<Vec<PostDTO>, ClientError> {
        let url = self.config.posts_url();
        let request = self.http.get(&url);
        let body = self.send(Method::GET, url, request).await?;

        let envelope: ListPostsDTO = serde_json::from_slice(&body)?;
        Ok(envelope.posts)
    }

    async fn create_post(&self, input: &CreatePostDTO) -> Result<PostDTO, ClientError> {
        let url = self.config.posts_url();
        let request = self.http.post(&url).json(input);
        let body = self.send(Method::POST, url, request).await?;

        let post: PostDTO = serde_json::from_slice(&body)?;
        Ok(post)
    }

    async fn delete_post(&self, id: PostId) -> Result<(), ClientError> {
        let url = self.config.post_url(id);
        let request = self.http.delete(&url);
        self.send(Method::DELETE, url, request).await?;

        Ok(())
    }
}
