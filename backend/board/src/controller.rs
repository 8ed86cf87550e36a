//! # Wish Board Controller
//!
//! Keeps the rendered board in line with the server.
//!
//! ## Flow
//! - [`WishBoard::load`] runs once at startup and fully replaces whatever is rendered
//! - [`WishBoard::submit`] appends the created wish, the board is not reloaded
//! - [`WishBoard::remove`] asks for confirmation, then drops the entry once the server agrees
//!
//! ## Notes
//! - Entries are unique by id, a second render of the same id is ignored
//! - Order is the server's order on load, then arrival order for local additions until the
//!   next load
//! - The controller never sees errors, only whether a call worked
use tracing::{debug, warn};
use wishes::{CreatedWish, Wish};

use crate::client::WishApi;

pub const DELETE_PROMPT: &str = "Delete this wish?";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WishEntry {
    pub id: i64,
    pub content: String,
}

impl From<Wish> for WishEntry {
    fn from(wish: Wish) -> Self {
        Self {
            id: wish.id,
            content: wish.content,
        }
    }
}

impl From<CreatedWish> for WishEntry {
    fn from(wish: CreatedWish) -> Self {
        Self {
            id: wish.id,
            content: wish.content,
        }
    }
}

/// Render target for the board. Effects like the exit animation or confetti are up to the
/// implementation.
pub trait BoardView {
    fn set_loading(&mut self, loading: bool);

    /// Drops everything rendered and renders `entries` in order.
    fn replace_all(&mut self, entries: &[WishEntry]);

    fn append(&mut self, entry: &WishEntry);

    /// Removes the entry for `id` with an exit animation.
    fn remove(&mut self, id: i64);

    fn clear_input(&mut self);

    fn celebrate(&mut self);

    fn confirm(&mut self, prompt: &str) -> bool;
}

pub struct WishBoard<A, V> {
    api: A,
    view: V,
    entries: Vec<WishEntry>,
}

impl<A: WishApi, V: BoardView> WishBoard<A, V> {
    pub fn new(api: A, view: V) -> Self {
        Self {
            api,
            view,
            entries: Vec::new(),
        }
    }

    pub fn entries(&self) -> &[WishEntry] {
        &self.entries
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub async fn load(&mut self) {
        self.view.set_loading(true);

        let wishes = self.api.get_wishes().await;

        self.view.set_loading(false);

        self.entries.clear();
        for wish in wishes {
            self.insert(wish.into());
        }

        self.view.replace_all(&self.entries);
    }

    /// Returns whether a new entry was rendered.
    pub async fn submit(&mut self, content: &str) -> bool {
        let content = content.trim();

        if content.is_empty() {
            return false;
        }

        let rendered = match self.api.add_wish(content).await {
            Some(created) => {
                if self.insert(created.into()) {
                    let entry = &self.entries[self.entries.len() - 1];
                    self.view.append(entry);

                    true
                } else {
                    false
                }
            }
            None => {
                warn!("Error saving wish, board left unchanged");
                false
            }
        };

        self.view.clear_input();
        self.view.celebrate();

        rendered
    }

    /// Returns whether the entry was removed.
    pub async fn remove(&mut self, id: i64) -> bool {
        if !self.view.confirm(DELETE_PROMPT) {
            return false;
        }

        if !self.api.delete_wish(id).await {
            warn!("Wish {id} was not deleted, keeping it on the board");
            return false;
        }

        self.entries.retain(|entry| entry.id != id);
        self.view.remove(id);

        true
    }

    fn insert(&mut self, entry: WishEntry) -> bool {
        if self.entries.iter().any(|existing| existing.id == entry.id) {
            debug!("Wish {} already on the board", entry.id);
            return false;
        }

        self.entries.push(entry);

        true
    }
}
