//! # Postura Link
//!
//! The Sensor Link. Owns the single live WebSocket connection to the
//! posture service, decodes each inbound frame and publishes the latest
//! reading for the dashboard to draw.
//!
//! One attempt, no auto-reconnect: a dropped connection settles in
//! [`LinkState::Closed`] and the last published reading stays current.

pub mod frame;

pub use frame::{FrameError, decode_frame};

use futures::{SinkExt, StreamExt};
use postura_core::PostureReading;
use thiserror::Error;
use tokio::sync::{mpsc, watch};
use tokio_tungstenite::connect_async;
use tokio_tungstenite::tungstenite::Message;
use tracing::{info, warn};

/// Lifecycle of the sensor connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkState {
    Idle,
    Connecting,
    Open,
    Closed,
}

/// What can go wrong on the link.
///
/// All of these stay contained here; presenters only ever observe the
/// closed state and the last good reading.
#[derive(Debug, Clone, Error)]
pub enum LinkError {
    #[error("connection open failure: {0}")]
    OpenFailure(String),
    #[error("transport error: {0}")]
    Transport(String),
}

/// Events from the Sensor Link. None of these are fatal to the host UI.
#[derive(Debug, Clone)]
pub enum LinkEvent {
    Connected(String),
    Disconnected,
    Error(LinkError),
}

/// Commands sent to the link task.
enum LinkCommand {
    Disconnect,
}

/// Handle to the live sensor connection.
///
/// Dropping the handle closes the connection: the link task treats a dead
/// command channel the same as an explicit disconnect, so the socket is
/// released on every deactivation path.
pub struct SensorLink {
    cmd_tx: mpsc::Sender<LinkCommand>,
    readings: watch::Receiver<PostureReading>,
    state: watch::Receiver<LinkState>,
}

impl std::fmt::Debug for SensorLink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SensorLink")
            .field("state", &*self.state.borrow())
            .finish()
    }
}

impl SensorLink {
    /// Open the link to `endpoint` in a background task.
    ///
    /// Returns immediately; an open failure is reported through the event
    /// channel, never to the caller. The readings slot starts at the
    /// default reading so the dashboard has something to draw before the
    /// first frame arrives.
    pub fn connect(endpoint: &str) -> (Self, mpsc::Receiver<LinkEvent>) {
        let (event_tx, event_rx) = mpsc::channel(64);
        let (cmd_tx, cmd_rx) = mpsc::channel(8);
        let (reading_tx, readings) = watch::channel(PostureReading::default());
        let (state_tx, state) = watch::channel(LinkState::Idle);

        let endpoint = endpoint.to_string();
        tokio::spawn(run_link(endpoint, reading_tx, state_tx, event_tx, cmd_rx));

        (
            Self {
                cmd_tx,
                readings,
                state,
            },
            event_rx,
        )
    }

    /// Latest-reading subscription for presenters.
    ///
    /// The slot always holds exactly one current reading; each publish
    /// replaces it atomically.
    pub fn readings(&self) -> watch::Receiver<PostureReading> {
        self.readings.clone()
    }

    /// Connection state subscription (drives the live indicator).
    pub fn state(&self) -> watch::Receiver<LinkState> {
        self.state.clone()
    }

    /// Ask the link task to close the connection.
    ///
    /// Frames already buffered in the transport are not processed once the
    /// request is in.
    pub async fn disconnect(&self) {
        let _ = self.cmd_tx.send(LinkCommand::Disconnect).await;
    }
}

/// The connection task. Single attempt, processes frames strictly in
/// arrival order, closes the socket on every exit path.
async fn run_link(
    endpoint: String,
    reading_tx: watch::Sender<PostureReading>,
    state_tx: watch::Sender<LinkState>,
    event_tx: mpsc::Sender<LinkEvent>,
    mut cmd_rx: mpsc::Receiver<LinkCommand>,
) {
    let _ = state_tx.send(LinkState::Connecting);

    let ws = match connect_async(endpoint.as_str()).await {
        Ok((ws, _)) => ws,
        Err(e) => {
            warn!("Sensor link open failed: {}", e);
            let _ = state_tx.send(LinkState::Closed);
            let _ = event_tx
                .send(LinkEvent::Error(LinkError::OpenFailure(e.to_string())))
                .await;
            return;
        }
    };

    info!("Sensor link open: {}", endpoint);
    let _ = state_tx.send(LinkState::Open);
    let _ = event_tx.send(LinkEvent::Connected(endpoint)).await;

    let (mut sink, mut stream) = ws.split();

    loop {
        tokio::select! {
            // A disconnect request outruns frames already buffered on the
            // socket.
            biased;

            cmd = cmd_rx.recv() => match cmd {
                Some(LinkCommand::Disconnect) | None => {
                    let _ = sink.send(Message::Close(None)).await;
                    break;
                }
            },

            msg = stream.next() => match msg {
                Some(Ok(Message::Text(text))) => {
                    match frame::decode_frame(text.as_str()) {
                        Ok(reading) => {
                            // Replaces the previous reading; watchers see
                            // the new value before the next frame is read.
                            let _ = reading_tx.send(reading);
                        }
                        Err(e) => warn!("Dropping frame: {}", e),
                    }
                }
                Some(Ok(Message::Close(_))) => {
                    info!("Sensor service closed the link");
                    break;
                }
                Some(Ok(_)) => {} // ping/pong/binary carry no readings
                Some(Err(e)) => {
                    warn!("Sensor link transport error: {}", e);
                    let _ = event_tx
                        .send(LinkEvent::Error(LinkError::Transport(e.to_string())))
                        .await;
                    break;
                }
                None => break,
            },
        }
    }

    let _ = state_tx.send(LinkState::Closed);
    let _ = event_tx.send(LinkEvent::Disconnected).await;
}
