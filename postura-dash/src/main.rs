use anyhow::Result;
use chrono::Local;
use postura_chat::RelayClient;
use postura_dash::presenter::Presenter;
use postura_link::{LinkEvent, LinkState, SensorLink};
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};

/// Fixed local endpoints of the sensor service and the assistant relay.
const SENSOR_ENDPOINT: &str = "ws://localhost:8000/ws";
const CHAT_ENDPOINT: &str = "http://localhost:5000/api/chat";

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_writer(std::io::stderr)
        .init();

    println!("=== Postura ===");
    println!("{}", Local::now().format("%A, %B %-d"));
    println!();

    let (link, mut events) = SensorLink::connect(SENSOR_ENDPOINT);
    let relay = RelayClient::new(CHAT_ENDPOINT);
    let presenter = Presenter::new();

    // Link events become log lines; none of them are fatal to the dashboard.
    tokio::spawn(async move {
        while let Some(event) = events.recv().await {
            match event {
                LinkEvent::Connected(endpoint) => {
                    info!("🔗 Live tracking connected: {}", endpoint)
                }
                LinkEvent::Disconnected => info!("🔗 Live tracking ended"),
                LinkEvent::Error(e) => warn!("⚠️ Sensor link: {}", e),
            }
        }
    });

    let mut readings = link.readings();
    let mut state = link.state();

    // Draw the default card before the first frame arrives.
    presenter.render(&readings.borrow(), *state.borrow());
    presenter.chat_line(postura_chat::GREETING);

    let stdin = BufReader::new(tokio::io::stdin());
    let mut lines = stdin.lines();
    let mut stdin_open = true;

    // The watch channels err out once the link task is gone; after that the
    // card keeps showing the last published reading.
    let mut readings_live = true;
    let mut state_live = true;

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                info!("Shutting down");
                link.disconnect().await;
                let _ = tokio::time::timeout(
                    Duration::from_secs(2),
                    state.wait_for(|s| *s == LinkState::Closed),
                )
                .await;
                break;
            }

            changed = readings.changed(), if readings_live => match changed {
                Ok(()) => {
                    let reading = *readings.borrow_and_update();
                    presenter.render(&reading, *state.borrow());
                }
                Err(_) => readings_live = false,
            },

            changed = state.changed(), if state_live => match changed {
                Ok(()) => {
                    let reading = *readings.borrow();
                    presenter.render(&reading, *state.borrow_and_update());
                }
                Err(_) => state_live = false,
            },

            // Lines typed into the dashboard go to the assistant relay.
            line = lines.next_line(), if stdin_open => match line {
                Ok(Some(line)) => {
                    let message = line.trim();
                    if !message.is_empty() {
                        let reply = relay.send_or_fallback(message).await;
                        presenter.chat_line(&reply);
                    }
                }
                Ok(None) => stdin_open = false,
                Err(e) => {
                    warn!("stdin error: {}", e);
                    stdin_open = false;
                }
            },
        }
    }

    info!("Postura shut down cleanly");
    Ok(())
}
