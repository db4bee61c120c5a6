use serde::{Deserialize, Serialize};

use crate::wire::{WireGameState, WirePlayer, WireSquare};

/// Inbound commands, tagged by `"type"`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Command {
    Join { id: String },
    Leave { id: String },
    MakeMove { id: String, from: WireSquare, to: WireSquare },
    ResetGame { id: String },
    SetOption { name: String, value: Option<String> },
    GetState,
    Quit,
}

/// Outbound events, tagged by `"type"`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Event {
    GameState { state: WireGameState },
    PlayerAssigned { player: WirePlayer },
    PlayerCount { count: usize },
    InvalidMove { message: String },
    OptionSet { name: String, applied: bool },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Audience {
    /// Only the connection that sent the command
    Requester,
    /// Every connection
    All,
}

/// An event and its recipients.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outbound {
    pub to: Audience,
    #[serde(flatten)]
    pub event: Event,
}

impl Outbound {
    #[must_use]
    pub fn requester(event: Event) -> Self {
        Outbound {
            to: Audience::Requester,
            event,
        }
    }

    #[must_use]
    pub fn all(event: Event) -> Self {
        Outbound {
            to: Audience::All,
            event,
        }
    }
}
