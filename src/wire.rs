//! JSON shape of the game state exchanged with clients.
//!
//! The layout is fixed by existing clients:
//!
//! ```json
//! {
//!   "board": [["r","n","b","q","k","b","n","r"], ...],
//!   "currentPlayer": "white",
//!   "gameOver": false,
//!   "winner": null,
//!   "moveHistory": [{"from": {"row": 6, "col": 4}, "to": {"row": 4, "col": 4},
//!                    "piece": "P", "capturedPiece": ".", "player": "white",
//!                    "timestamp": "2024-05-01T12:00:00.000Z"}],
//!   "capturedPieces": {"white": [], "black": []}
//! }
//! ```
//!
//! Board cells and captured pieces use the piece letter in the piece's own
//! case (uppercase White); `.` marks an empty square or "nothing captured".

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::board::notation::{cell_from_char, cell_to_char};
use crate::board::{Board, Cell, Color, NotationError, Piece, Square};
use crate::rules::Outcome;
use crate::session::{CapturedPieces, GameState, MoveRecord, PlayerInfo};

/// Timestamps as RFC 3339 with millisecond precision and a `Z` suffix.
mod js_timestamp {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(ts: &DateTime<Utc>, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&ts.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<DateTime<Utc>, D::Error> {
        let text = String::deserialize(d)?;
        DateTime::parse_from_rfc3339(&text)
            .map(|ts| ts.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}

/// A square as sent by clients. Coordinates are signed so that malformed
/// input survives decoding and is rejected by the rules instead.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireSquare {
    pub row: i64,
    pub col: i64,
}

impl WireSquare {
    /// Convert to a board square. Negative coordinates map to a square far
    /// off the board, which every rule check rejects.
    #[must_use]
    pub fn to_square(self) -> Square {
        let coord = |v: i64| usize::try_from(v).unwrap_or(usize::MAX);
        Square(coord(self.row), coord(self.col))
    }
}

impl From<Square> for WireSquare {
    fn from(sq: Square) -> Self {
        WireSquare {
            row: sq.0 as i64,
            col: sq.1 as i64,
        }
    }
}

impl TryFrom<WireSquare> for Square {
    type Error = NotationError;

    fn try_from(sq: WireSquare) -> Result<Self, Self::Error> {
        Ok(Square::try_from((sq.row, sq.col))?)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WireWinner {
    White,
    Black,
    Draw,
}

impl From<Outcome> for WireWinner {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Winner(Color::White) => WireWinner::White,
            Outcome::Winner(Color::Black) => WireWinner::Black,
            Outcome::Draw => WireWinner::Draw,
        }
    }
}

impl From<WireWinner> for Outcome {
    fn from(winner: WireWinner) -> Self {
        match winner {
            WireWinner::White => Outcome::Winner(Color::White),
            WireWinner::Black => Outcome::Winner(Color::Black),
            WireWinner::Draw => Outcome::Draw,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireMoveRecord {
    pub from: WireSquare,
    pub to: WireSquare,
    pub piece: String,
    pub captured_piece: String,
    pub player: Color,
    #[serde(with = "js_timestamp")]
    pub timestamp: DateTime<Utc>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireCapturedPieces {
    pub white: Vec<String>,
    pub black: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireGameState {
    pub board: Vec<Vec<String>>,
    pub current_player: Color,
    pub game_over: bool,
    pub winner: Option<WireWinner>,
    pub move_history: Vec<WireMoveRecord>,
    pub captured_pieces: WireCapturedPieces,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WirePlayer {
    pub id: String,
    pub color: Color,
    #[serde(with = "js_timestamp")]
    pub joined_at: DateTime<Utc>,
}

impl From<&PlayerInfo> for WirePlayer {
    fn from(info: &PlayerInfo) -> Self {
        WirePlayer {
            id: info.id.clone(),
            color: info.color,
            joined_at: info.joined_at,
        }
    }
}

fn encode_cell(cell: Cell) -> String {
    cell_to_char(cell).to_string()
}

fn decode_cell(text: &str) -> Result<Cell, NotationError> {
    let invalid = || NotationError::InvalidPiece {
        found: text.to_string(),
    };
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => cell_from_char(c).ok_or_else(invalid),
        _ => Err(invalid()),
    }
}

fn decode_piece_letter(text: &str) -> Result<Piece, NotationError> {
    match decode_cell(text)? {
        Some((_, piece)) => Ok(piece),
        None => Err(NotationError::InvalidPiece {
            found: text.to_string(),
        }),
    }
}

fn decode_letters(letters: &[String]) -> Result<Vec<Piece>, NotationError> {
    letters.iter().map(|l| decode_piece_letter(l)).collect()
}

impl From<&MoveRecord> for WireMoveRecord {
    fn from(record: &MoveRecord) -> Self {
        WireMoveRecord {
            from: record.from.into(),
            to: record.to.into(),
            piece: encode_cell(Some(record.piece)),
            captured_piece: encode_cell(record.captured),
            player: record.player,
            timestamp: record.timestamp,
        }
    }
}

impl TryFrom<&WireMoveRecord> for MoveRecord {
    type Error = NotationError;

    fn try_from(wire: &WireMoveRecord) -> Result<Self, Self::Error> {
        let piece = decode_cell(&wire.piece)?.ok_or_else(|| NotationError::InvalidPiece {
            found: wire.piece.clone(),
        })?;
        Ok(MoveRecord {
            from: wire.from.try_into()?,
            to: wire.to.try_into()?,
            piece,
            captured: decode_cell(&wire.captured_piece)?,
            player: wire.player,
            timestamp: wire.timestamp,
        })
    }
}

impl From<&GameState> for WireGameState {
    fn from(state: &GameState) -> Self {
        let board: Vec<Vec<String>> = state
            .board
            .to_grid()
            .iter()
            .map(|row| row.iter().map(char::to_string).collect())
            .collect();
        // Captured pieces belong to the capturer's opponent, so they take its case.
        let captured = |capturer: Color| -> Vec<String> {
            state
                .captured_pieces
                .by(capturer)
                .iter()
                .map(|p| p.to_colored_char(capturer.opponent()).to_string())
                .collect()
        };
        WireGameState {
            board,
            current_player: state.current_turn,
            game_over: state.game_over,
            winner: state.winner.map(WireWinner::from),
            move_history: state.move_history.iter().map(WireMoveRecord::from).collect(),
            captured_pieces: WireCapturedPieces {
                white: captured(Color::White),
                black: captured(Color::Black),
            },
        }
    }
}

impl TryFrom<&WireGameState> for GameState {
    type Error = NotationError;

    fn try_from(wire: &WireGameState) -> Result<Self, Self::Error> {
        Ok(GameState {
            board: Board::try_from_cells(&wire.board)?,
            current_turn: wire.current_player,
            game_over: wire.game_over,
            winner: wire.winner.map(Outcome::from),
            move_history: wire
                .move_history
                .iter()
                .map(MoveRecord::try_from)
                .collect::<Result<_, _>>()?,
            captured_pieces: CapturedPieces {
                white: decode_letters(&wire.captured_pieces.white)?,
                black: decode_letters(&wire.captured_pieces.black)?,
            },
        })
    }
}

/// Error decoding a game state from JSON.
#[derive(Debug)]
pub enum WireError {
    /// Not valid JSON, or not the expected shape
    Json(serde_json::Error),
    /// Well-formed JSON with invalid board or piece contents
    Notation(NotationError),
}

impl fmt::Display for WireError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WireError::Json(err) => write!(f, "Malformed game state: {err}"),
            WireError::Notation(err) => write!(f, "Invalid game state: {err}"),
        }
    }
}

impl std::error::Error for WireError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            WireError::Json(err) => Some(err),
            WireError::Notation(err) => Some(err),
        }
    }
}

impl From<serde_json::Error> for WireError {
    fn from(err: serde_json::Error) -> Self {
        WireError::Json(err)
    }
}

impl From<NotationError> for WireError {
    fn from(err: NotationError) -> Self {
        WireError::Notation(err)
    }
}

/// Serialize a game state to its JSON wire form.
pub fn to_json(state: &GameState) -> serde_json::Result<String> {
    serde_json::to_string(&WireGameState::from(state))
}

/// Parse a game state from its JSON wire form.
pub fn from_json(json: &str) -> Result<GameState, WireError> {
    let wire: WireGameState = serde_json::from_str(json)?;
    Ok(GameState::try_from(&wire)?)
}
