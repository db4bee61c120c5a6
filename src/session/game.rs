//! Authoritative game state and the session that mutates it.

use chrono::{DateTime, Utc};

use super::error::MoveRejection;
use super::options::SessionOptions;
use crate::board::{Board, Cell, Color, Piece, Square};
use crate::rules::{check_move, detect_terminal_state, Outcome};

/// Piece kinds taken by each side, in capture order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CapturedPieces {
    /// Pieces White has captured (all Black)
    pub white: Vec<Piece>,
    /// Pieces Black has captured (all White)
    pub black: Vec<Piece>,
}

impl CapturedPieces {
    /// Pieces captured by `capturer`.
    #[must_use]
    pub fn by(&self, capturer: Color) -> &[Piece] {
        match capturer {
            Color::White => &self.white,
            Color::Black => &self.black,
        }
    }

    pub(crate) fn by_mut(&mut self, capturer: Color) -> &mut Vec<Piece> {
        match capturer {
            Color::White => &mut self.white,
            Color::Black => &mut self.black,
        }
    }
}

/// One accepted move. Never modified after it is appended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveRecord {
    pub from: Square,
    pub to: Square,
    /// The piece that moved
    pub piece: (Color, Piece),
    /// What stood on `to` before the move
    pub captured: Cell,
    pub player: Color,
    pub timestamp: DateTime<Utc>,
}

/// Coarse phase of a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    InProgress { turn: Color },
    Over(Outcome),
}

/// Snapshot of a whole game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    pub board: Board,
    pub current_turn: Color,
    pub game_over: bool,
    pub winner: Option<Outcome>,
    pub move_history: Vec<MoveRecord>,
    pub captured_pieces: CapturedPieces,
}

impl GameState {
    /// Standard starting position, White to move.
    #[must_use]
    pub fn new() -> Self {
        GameState {
            board: Board::new(),
            current_turn: Color::White,
            game_over: false,
            winner: None,
            move_history: Vec::new(),
            captured_pieces: CapturedPieces::default(),
        }
    }

    /// A game in progress from an arbitrary position.
    #[must_use]
    pub fn from_position(board: Board, current_turn: Color) -> Self {
        GameState {
            board,
            current_turn,
            ..GameState::new()
        }
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        match (self.game_over, self.winner) {
            (true, Some(outcome)) => Phase::Over(outcome),
            // A finished game always records an outcome; treat a missing one as a draw.
            (true, None) => Phase::Over(Outcome::Draw),
            (false, _) => Phase::InProgress {
                turn: self.current_turn,
            },
        }
    }

    /// The most recent accepted move.
    #[must_use]
    pub fn last_move(&self) -> Option<&MoveRecord> {
        self.move_history.last()
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

/// Owner of the one authoritative `GameState`.
///
/// Every proposal is fully validated before anything is written, so a
/// rejected proposal leaves the state exactly as it was. Callers that share
/// a session between threads go through [`super::SessionHandle`].
#[derive(Clone, Debug, Default)]
pub struct GameSession {
    state: GameState,
    options: SessionOptions,
}

impl GameSession {
    #[must_use]
    pub fn new(options: SessionOptions) -> Self {
        GameSession {
            state: GameState::new(),
            options,
        }
    }

    /// Resume from an existing state, e.g. a custom position.
    #[must_use]
    pub fn from_state(state: GameState, options: SessionOptions) -> Self {
        GameSession { state, options }
    }

    #[inline]
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Change one option by name, returning the updated options when the
    /// name and value were accepted.
    pub fn set_option(&mut self, name: &str, value: Option<&str>) -> Option<&SessionOptions> {
        if self.options.apply_option(name, value) {
            log::info!("Option set: {name} = {}", value.unwrap_or("true"));
            Some(&self.options)
        } else {
            None
        }
    }

    /// Try to move the piece on `from` to `to` on behalf of `requester`.
    ///
    /// On success the move is applied, recorded and the turn passes to the
    /// other side unless the move ended the game.
    pub fn propose_move(
        &mut self,
        requester: Color,
        from: Square,
        to: Square,
    ) -> Result<&GameState, MoveRejection> {
        if let Err(rejection) = self.validate(requester, from, to) {
            log::debug!("rejected {requester} {from}->{to}: {rejection:?}");
            return Err(rejection);
        }
        self.apply(from, to);
        Ok(&self.state)
    }

    fn validate(&self, requester: Color, from: Square, to: Square) -> Result<(), MoveRejection> {
        if self.state.game_over && self.options.reject_after_game_over {
            return Err(MoveRejection::GameOver);
        }
        if requester != self.state.current_turn {
            return Err(MoveRejection::NotYourTurn);
        }
        check_move(&self.state.board, self.state.current_turn, from, to)?;
        Ok(())
    }

    /// Apply a move that has already passed `validate`.
    fn apply(&mut self, from: Square, to: Square) {
        let mover = self.state.current_turn;
        let Some(piece) = self.state.board.piece_at(from) else {
            return;
        };

        let captured = self.state.board.relocate(from, to);
        if let Some((_, taken)) = captured {
            self.state.captured_pieces.by_mut(mover).push(taken);
        }

        self.state.move_history.push(MoveRecord {
            from,
            to,
            piece,
            captured,
            player: mover,
            timestamp: Utc::now(),
        });
        log::info!("Move made: {} from {from} to {to}", piece.1.to_colored_char(piece.0));

        let terminal = detect_terminal_state(&self.state.board, mover);
        if let Some(outcome) = terminal.outcome() {
            self.state.game_over = true;
            self.state.winner = Some(outcome);
            log::info!("Game over: {outcome}");
        } else {
            self.state.current_turn = mover.opponent();
        }
    }

    /// Throw away the current game and start a fresh one.
    pub fn reset(&mut self) -> &GameState {
        self.state = GameState::new();
        log::info!("Game reset");
        &self.state
    }
}
