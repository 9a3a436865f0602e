//! rapport Terminal Client
//!
//! Line-oriented front-end for the chat client: renders the conversation
//! by following the message store, reads input from stdin, and hands each
//! submission to the client. The backend must be running separately.

use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use rapport_backend::{HttpBackend, HttpBackendConfig};
use rapport_core::{ChatClient, ChatConfig, ChatTurn, Composer, KeyEvent, Sender, Session};

fn render(turn: &ChatTurn) {
    match turn.sender {
        Sender::User => println!("vous ▸ {}", turn.text),
        Sender::Bot => println!("bot  ▸ {}", turn.text),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load environment
    dotenvy::dotenv().ok();

    let config = ChatConfig::from_env();
    let backend_config = HttpBackendConfig::from_env();
    tracing::info!(endpoint = %backend_config.endpoint(), "using chat backend");

    let backend = Arc::new(HttpBackend::from_config(backend_config));
    let client = ChatClient::new(backend, config.clone());

    let mut session = Session::new(&config);
    tracing::info!(session = %session.id(), "session started");

    // Render the seeded greeting, then follow appends from the store.
    for turn in session.store().turns() {
        render(turn);
    }
    let mut turns = session.store().subscribe();
    tokio::spawn(async move {
        while let Ok(turn) = turns.recv().await {
            render(&turn);
        }
    });

    // Each stdin line is the buffered text plus an Enter keypress.
    let mut composer = Composer::new();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        composer.insert_str(&line);
        if let Some(text) = composer.handle_key(KeyEvent::enter()) {
            client.send(session.store_mut(), &text).await;
        }
    }

    tracing::info!(turns = session.turn_count(), "session ended");
    Ok(())
}
