use std::time::Duration;

use board::{BoardView, WishApi, WishBoard, WishClient, WishEntry};
use server::{config::Config, router, state::State};
use tempfile::TempDir;
use tokio::net::TcpListener;

async fn spawn_server(dir: &TempDir, ready: bool) -> String {
    let config = Config {
        port: 0,
        database_url: format!("sqlite://{}", dir.path().join("wishes.db").display()),
        max_connections: 2,
        acquire_timeout_ms: 1000,
    };

    let state = State::new(config);
    if ready {
        state.store.initialize(&state.config).await.unwrap();
    }

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, router(state)).await.unwrap();
    });

    format!("http://{address}/api")
}

fn client(base_url: &str) -> WishClient {
    WishClient::new(base_url, Duration::from_secs(5)).unwrap()
}

#[derive(Default)]
struct ListView {
    rendered: Vec<WishEntry>,
    celebrations: usize,
}

impl BoardView for ListView {
    fn set_loading(&mut self, _loading: bool) {}

    fn replace_all(&mut self, entries: &[WishEntry]) {
        self.rendered = entries.to_vec();
    }

    fn append(&mut self, entry: &WishEntry) {
        self.rendered.push(entry.clone());
    }

    fn remove(&mut self, id: i64) {
        self.rendered.retain(|entry| entry.id != id);
    }

    fn clear_input(&mut self) {}

    fn celebrate(&mut self) {
        self.celebrations += 1;
    }

    fn confirm(&mut self, _prompt: &str) -> bool {
        true
    }
}

#[tokio::test]
async fn client_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let client = client(&spawn_server(&dir, true).await);

    assert!(client.get_wishes().await.is_empty());

    let first = client.add_wish("one").await.unwrap();
    let second = client.add_wish("two").await.unwrap();
    assert_eq!(first.content, "one");

    let listed: Vec<i64> = client.get_wishes().await.iter().map(|w| w.id).collect();
    assert_eq!(listed, [first.id, second.id]);

    assert!(client.delete_wish(first.id).await);
    assert!(client.delete_wish(first.id).await);

    let listed: Vec<i64> = client.get_wishes().await.iter().map(|w| w.id).collect();
    assert_eq!(listed, [second.id]);
}

#[tokio::test]
async fn client_rejected_wish_is_none() {
    let dir = tempfile::tempdir().unwrap();
    let client = client(&spawn_server(&dir, true).await);

    assert!(client.add_wish("   ").await.is_none());
    assert!(client.get_wishes().await.is_empty());
}

#[tokio::test]
async fn client_server_not_ready() {
    let dir = tempfile::tempdir().unwrap();
    let client = client(&spawn_server(&dir, false).await);

    assert!(client.get_wishes().await.is_empty());
    assert!(client.add_wish("hi").await.is_none());
    assert!(!client.delete_wish(1).await);
}

#[tokio::test]
async fn client_server_unreachable() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();
    drop(listener);

    let client = client(&format!("http://{address}/api"));

    assert!(client.get_wishes().await.is_empty());
    assert!(client.add_wish("hi").await.is_none());
    assert!(!client.delete_wish(1).await);
}

#[tokio::test]
async fn board_against_server() {
    let dir = tempfile::tempdir().unwrap();
    let base_url = spawn_server(&dir, true).await;
    let mut board = WishBoard::new(client(&base_url), ListView::default());

    board.load().await;
    assert!(board.entries().is_empty());

    assert!(board.submit("Happy Birthday!").await);
    assert_eq!(board.entries().len(), 1);
    assert_eq!(board.entries()[0].content, "Happy Birthday!");
    assert_eq!(board.view().rendered, board.entries());
    assert_eq!(board.view().celebrations, 1);

    let stored = client(&base_url).get_wishes().await;
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].content, "Happy Birthday!");

    board.load().await;
    assert_eq!(board.entries().len(), 1);

    let id = board.entries()[0].id;
    assert!(board.remove(id).await);
    assert!(board.entries().is_empty());
    assert!(board.view().rendered.is_empty());
    assert!(client(&base_url).get_wishes().await.is_empty());
}

#[tokio::test]
async fn board_load_while_offline() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();
    drop(listener);

    let mut board = WishBoard::new(client(&format!("http://{address}/api")), ListView::default());

    board.load().await;

    assert!(board.entries().is_empty());
    assert!(board.view().rendered.is_empty());
}
