//! End-to-end tests against a real listener.

use futures::StreamExt;
use pl_live::catalog::FixtureCatalog;
use pl_live::config::ServerConfig;
use pl_live::live::MatchState;
use pl_live::server::{self, state::AppState};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio_tungstenite::{connect_async, tungstenite::Message};

async fn start_server() -> (SocketAddr, Arc<AppState>) {
    let config = ServerConfig {
        tick_interval: Duration::from_millis(50),
        seed: Some(2024),
        ..ServerConfig::default()
    };
    let state = Arc::new(AppState::new(
        Arc::new(FixtureCatalog::premier_league()),
        config,
    ));

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let server_state = Arc::clone(&state);
    tokio::spawn(async move {
        server::serve(listener, server_state, std::future::pending())
            .await
            .unwrap();
    });

    (addr, state)
}

async fn next_state<S>(stream: &mut S) -> MatchState
where
    S: futures::Stream<Item = Result<Message, tokio_tungstenite::tungstenite::Error>> + Unpin,
{
    loop {
        match stream.next().await.unwrap().unwrap() {
            Message::Text(text) => return serde_json::from_str(&text).unwrap(),
            _ => continue,
        }
    }
}

async fn wait_for_active(state: &AppState, expected: usize) {
    tokio::time::timeout(Duration::from_secs(5), async {
        while state.active_connections() != expected {
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
    })
    .await
    .expect("active connection count did not settle");
}

#[tokio::test]
async fn test_first_message_is_pl_001_after_one_tick() {
    let (addr, _state) = start_server().await;
    let (mut socket, _) = connect_async(format!("ws://{}/ws/live", addr))
        .await
        .unwrap();

    let first = next_state(&mut socket).await;
    assert_eq!(first.id, "pl-001");
    assert_eq!(first.home, "Manchester City");
    assert!((2..=7).contains(&first.minute));
    assert!(first.score_home <= 1);
    assert!(first.score_away <= 1);
}

#[tokio::test]
async fn test_rounds_arrive_in_catalog_order() {
    let (addr, _state) = start_server().await;
    let (mut socket, _) = connect_async(format!("ws://{}/ws/live", addr))
        .await
        .unwrap();

    let mut previous: Option<MatchState> = None;
    for round in 0..3 {
        for id in ["pl-001", "pl-002", "pl-003"] {
            let state = next_state(&mut socket).await;
            assert_eq!(state.id, id, "round {}", round);

            if id == "pl-001" {
                if let Some(prev) = &previous {
                    assert!(state.minute >= prev.minute);
                    assert!(state.xg_home >= prev.xg_home);
                }
                previous = Some(state);
            }
        }
    }
}

#[tokio::test]
async fn test_disconnect_releases_connection() {
    let (addr, state) = start_server().await;
    let (mut socket, _) = connect_async(format!("ws://{}/ws/live", addr))
        .await
        .unwrap();

    next_state(&mut socket).await;
    assert_eq!(state.active_connections(), 1);

    socket.close(None).await.unwrap();
    drop(socket);

    wait_for_active(&state, 0).await;
}

#[tokio::test]
async fn test_connections_are_independent() {
    let (addr, state) = start_server().await;
    let url = format!("ws://{}/ws/live", addr);

    let (mut first, _) = connect_async(url.as_str()).await.unwrap();
    let (mut second, _) = connect_async(url.as_str()).await.unwrap();

    next_state(&mut first).await;
    next_state(&mut second).await;
    wait_for_active(&state, 2).await;

    drop(first);
    wait_for_active(&state, 1).await;

    // The remaining connection keeps streaming
    let state_msg = next_state(&mut second).await;
    assert!(state_msg.id.starts_with("pl-"));
}
