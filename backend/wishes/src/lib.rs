//! # Wishes
//!
//! Payloads shared between the wish server and the board client.
//!
//! ## Wire Format
//!
//! JSON over HTTP.
//!
//! - `GET /api/wishes` answers with a list of [`Wish`], oldest first
//! - `POST /api/wishes` takes a [`NewWish`] and answers with a [`CreatedWish`]
//! - `DELETE /api/wishes/{id}` answers with a [`Message`]
//! - Any failure answers with an [`ErrorBody`]
//!
//! ## Notes
//! - `created_at` comes straight from the `CURRENT_TIMESTAMP` column default, which has no zone,
//!   so it stays a [`NaiveDateTime`] all the way to the client.
//! - The `sqlx` feature lets the server decode rows directly into [`Wish`].
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A stored wish, as listed by the server.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Wish {
    pub id: i64,
    pub content: String,
    pub created_at: NaiveDateTime,
}

/// Body of a create request. `content` stays optional so a missing field can be told apart from
/// a malformed body.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct NewWish {
    #[serde(default)]
    pub content: Option<String>,
}

impl NewWish {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CreatedWish {
    pub id: i64,
    pub content: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub message: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ErrorBody {
    pub error: String,
}
