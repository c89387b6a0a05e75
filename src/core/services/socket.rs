//! Board notification socket on top of `leptos_use::use_websocket`.
//!
//! Frames are JSON text decoded through the protocol types. Moves made
//! while the socket is down wait in an [`Outbox`] and go out on the next
//! open.

use std::collections::VecDeque;

use codee::string::FromToStringCodec;
use leptos::prelude::*;
use leptos_use::core::ConnectionReadyState;
use leptos_use::{use_websocket_with_options, UseWebSocketOptions, UseWebSocketReturn};

use crate::core::config::BoardConfig;
use crate::core::protocol::{ClientMessage, ServerMessage};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionState {
    Connecting,
    Open,
    Closed,
}

impl ConnectionState {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConnectionState::Connecting => "connecting",
            ConnectionState::Open => "live",
            ConnectionState::Closed => "offline",
        }
    }
}

impl From<ConnectionReadyState> for ConnectionState {
    fn from(state: ConnectionReadyState) -> Self {
        match state {
            ConnectionReadyState::Connecting => ConnectionState::Connecting,
            ConnectionReadyState::Open => ConnectionState::Open,
            ConnectionReadyState::Closing | ConnectionReadyState::Closed => ConnectionState::Closed,
        }
    }
}

/// Encoded frames waiting for the socket to open, oldest first.
#[derive(Debug, Default)]
pub struct Outbox {
    pending: VecDeque<String>,
}

impl Outbox {
    /// Hands the frame back when it can go out now. Otherwise it is queued
    /// behind anything already waiting.
    pub fn submit(&mut self, frame: String, open: bool) -> Option<String> {
        if open && self.pending.is_empty() {
            Some(frame)
        } else {
            self.pending.push_back(frame);
            None
        }
    }

    pub fn drain(&mut self) -> Vec<String> {
        self.pending.drain(..).collect()
    }
}

pub struct BoardSocket {
    pub connection: Signal<ConnectionState>,
    pub send: Callback<ClientMessage>,
}

/// Opens the board socket for the current component. The connection is
/// closed when the owning component is disposed.
pub fn use_board_socket<F>(on_message: F) -> BoardSocket
where
    F: Fn(ServerMessage) + Send + Sync + 'static,
{
    let config = use_context::<BoardConfig>().unwrap_or_default();
    let outbox = StoredValue::new(Outbox::default());

    let UseWebSocketReturn {
        ready_state,
        send: transmit,
        ..
    } = use_websocket_with_options::<String, String, FromToStringCodec, _, _>(
        &config.socket_url,
        UseWebSocketOptions::default()
            .immediate(true)
            .reconnect_limit(config.reconnect_limit())
            .reconnect_interval(config.reconnect_interval_ms)
            .on_message(move |frame: &String| match ServerMessage::from_json(frame) {
                Ok(message) => on_message(message),
                Err(e) => {
                    web_sys::console::error_1(&format!("Dropping socket frame: {}", e).into());
                }
            })
            .on_error(|error| {
                web_sys::console::error_1(&format!("WebSocket error: {:?}", error).into());
            }),
    );

    let flush = transmit.clone();
    Effect::new(move |_| {
        if ready_state.get() != ConnectionReadyState::Open {
            return;
        }
        let queued = outbox.try_update_value(|o| o.drain()).unwrap_or_default();
        if !queued.is_empty() {
            web_sys::console::log_1(&format!("Flushing {} queued messages", queued.len()).into());
        }
        for frame in queued {
            flush(&frame);
        }
    });

    let send = Callback::new(move |message: ClientMessage| {
        let frame = match message.to_json() {
            Ok(frame) => frame,
            Err(e) => {
                web_sys::console::error_1(&format!("Failed to encode {:?}: {}", message, e).into());
                return;
            }
        };
        let open = ready_state.get_untracked() == ConnectionReadyState::Open;
        if let Some(frame) = outbox.try_update_value(|o| o.submit(frame, open)).flatten() {
            transmit(&frame);
        }
    });

    BoardSocket {
        connection: Signal::derive(move || ConnectionState::from(ready_state.get())),
        send,
    }
}
