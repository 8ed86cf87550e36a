//! # Wish Board
//!
//! Client side of the wish board.
//!
//! ## Overall Structure
//!
//! - [`client`]: talks to the wish server, turns every failure into a harmless default
//! - [`controller`]: the board itself, an ordered list of entries unique by id
//! - [`terminal`]: renders the board in a terminal for the `board` binary
//!
//! The controller only knows about the [`client::WishApi`] and [`controller::BoardView`] traits,
//! so any other render target can drive the same board.
//!
//! ## Usage
//!
//! List the board.
//! ```sh
//! cargo run -p board -- list
//! ```
//!
//! Add a wish.
//! ```sh
//! cargo run -p board -- add Happy Birthday!
//! ```
//!
//! Remove a wish without the prompt.
//! ```sh
//! cargo run -p board -- remove 3 --yes
//! ```
//!
//! Keep the board open.
//! ```sh
//! cargo run -p board -- interactive
//! ```
pub mod client;
pub mod controller;
pub mod terminal;

pub use client::{DEFAULT_API_URL, WishApi, WishClient};
pub use controller::{BoardView, WishBoard, WishEntry};
