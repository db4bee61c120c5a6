//! Seat assignment for connected players.

use chrono::{DateTime, Utc};

use crate::board::Color;

/// A connected player and the side they were given.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayerInfo {
    pub id: String,
    pub color: Color,
    pub joined_at: DateTime<Utc>,
}

/// Connected players in join order.
///
/// Sides alternate with the number of players already present: an even
/// count seats White, an odd count seats Black. Nothing stops two players
/// sharing a side once more than two are connected.
#[derive(Clone, Debug, Default)]
pub struct PlayerRegistry {
    players: Vec<PlayerInfo>,
}

impl PlayerRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seat `id`. Joining twice returns the existing seat.
    pub fn join(&mut self, id: &str) -> PlayerInfo {
        if let Some(existing) = self.get(id) {
            return existing.clone();
        }
        let color = if self.players.len() % 2 == 0 {
            Color::White
        } else {
            Color::Black
        };
        let info = PlayerInfo {
            id: id.to_string(),
            color,
            joined_at: Utc::now(),
        };
        self.players.push(info.clone());
        log::info!("Player connected: {id} as {color} (total players: {})", self.count());
        info
    }

    pub fn leave(&mut self, id: &str) -> Option<PlayerInfo> {
        let idx = self.players.iter().position(|p| p.id == id)?;
        let info = self.players.remove(idx);
        log::info!("Player disconnected: {id} (total players: {})", self.count());
        Some(info)
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&PlayerInfo> {
        self.players.iter().find(|p| p.id == id)
    }

    #[must_use]
    pub fn color_of(&self, id: &str) -> Option<Color> {
        self.get(id).map(|p| p.color)
    }

    #[must_use]
    pub fn count(&self) -> usize {
        self.players.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PlayerInfo> {
        self.players.iter()
    }
}
