//! # Wish Client
//!
//! Thin HTTP client for the wish server.
//!
//! Every call downgrades failures to a safe default so the board can treat any failure as a
//! no-op without branching on error kinds:
//!
//! | Call | Success | Failure |
//! |---|---|---|
//! | [`WishApi::get_wishes`] | list, oldest first | empty list |
//! | [`WishApi::add_wish`] | `Some(CreatedWish)` | `None` |
//! | [`WishApi::delete_wish`] | `true` | `false` |
//!
//! Failures are logged here and go no further. Nothing is retried.
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use thiserror::Error;
use tracing::error;
use wishes::{CreatedWish, ErrorBody, Message, NewWish, Wish};

pub const DEFAULT_API_URL: &str = "http://localhost:3001/api";

/// The board's only view of the server.
#[async_trait(?Send)]
pub trait WishApi {
    async fn get_wishes(&self) -> Vec<Wish>;

    async fn add_wish(&self, content: &str) -> Option<CreatedWish>;

    async fn delete_wish(&self, id: i64) -> bool;
}

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Server answered {status}: {message}")]
    Status { status: StatusCode, message: String },
}

pub struct WishClient {
    http: Client,
    base_url: String,
}

impl WishClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ClientError> {
        let http = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn fetch_wishes(&self) -> Result<Vec<Wish>, ClientError> {
        let response = self
            .http
            .get(format!("{}/wishes", self.base_url))
            .send()
            .await?;

        Ok(check(response).await?.json().await?)
    }

    async fn post_wish(&self, content: &str) -> Result<CreatedWish, ClientError> {
        let response = self
            .http
            .post(format!("{}/wishes", self.base_url))
            .json(&NewWish::new(content))
            .send()
            .await?;

        Ok(check(response).await?.json().await?)
    }

    async fn remove_wish(&self, id: i64) -> Result<Message, ClientError> {
        let response = self
            .http
            .delete(format!("{}/wishes/{id}", self.base_url))
            .send()
            .await?;

        Ok(check(response).await?.json().await?)
    }
}

#[async_trait(?Send)]
impl WishApi for WishClient {
    async fn get_wishes(&self) -> Vec<Wish> {
        self.fetch_wishes().await.unwrap_or_else(|e| {
            error!("Failed to fetch wishes: {e}");
            Vec::new()
        })
    }

    async fn add_wish(&self, content: &str) -> Option<CreatedWish> {
        self.post_wish(content)
            .await
            .map_err(|e| error!("Failed to add wish: {e}"))
            .ok()
    }

    async fn delete_wish(&self, id: i64) -> bool {
        self.remove_wish(id)
            .await
            .map_err(|e| error!("Failed to delete wish {id}: {e}"))
            .is_ok()
    }
}

async fn check(response: Response) -> Result<Response, ClientError> {
    let status = response.status();

    if status.is_success() {
        return Ok(response);
    }

    let message = match response.json::<ErrorBody>().await {
        Ok(body) => body.error,
        Err(_) => status
            .canonical_reason()
            .unwrap_or("unknown error")
            .to_string(),
    };

    Err(ClientError::Status { status, message })
}
