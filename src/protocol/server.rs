use std::io::{self, BufRead, Write};

use super::{Command, CommandResult, Event, Outbound, Protocol};
use crate::session::{MoveRejection, PlayerRegistry, SessionHandle};
use crate::wire::{WireGameState, WirePlayer, WireSquare};

/// Message sent when a move command cannot be processed at all.
const PROCESSING_ERROR: &str = "Error processing move";

/// Serves one session to any number of players over JSON lines.
pub struct SessionServer {
    session: SessionHandle,
    players: PlayerRegistry,
}

impl SessionServer {
    #[must_use]
    pub fn new(session: SessionHandle) -> Self {
        SessionServer {
            session,
            players: PlayerRegistry::new(),
        }
    }

    #[must_use]
    pub fn session(&self) -> &SessionHandle {
        &self.session
    }

    #[must_use]
    pub fn players(&self) -> &PlayerRegistry {
        &self.players
    }

    fn state_event(&self) -> Event {
        Event::GameState {
            state: WireGameState::from(&self.session.snapshot()),
        }
    }

    /// Apply one parsed command.
    pub fn handle(&mut self, command: Command) -> CommandResult {
        let events = match command {
            Command::Join { id } => {
                let info = self.players.join(&id);
                vec![
                    Outbound::requester(self.state_event()),
                    Outbound::requester(Event::PlayerAssigned {
                        player: WirePlayer::from(&info),
                    }),
                    Outbound::all(Event::PlayerCount {
                        count: self.players.count(),
                    }),
                ]
            }
            Command::Leave { id } => {
                if self.players.leave(&id).is_none() {
                    return CommandResult::Ok(Vec::new());
                }
                vec![Outbound::all(Event::PlayerCount {
                    count: self.players.count(),
                })]
            }
            Command::MakeMove { id, from, to } => vec![self.make_move(&id, from, to)],
            Command::ResetGame { id } => {
                let state = self.session.reset();
                log::info!("Game reset by player: {id}");
                vec![Outbound::all(Event::GameState {
                    state: WireGameState::from(&state),
                })]
            }
            Command::SetOption { name, value } => {
                let applied = match self.session.set_option(&name, value.as_deref()) {
                    Some(options) => {
                        log::set_max_level(options.log_level);
                        true
                    }
                    None => {
                        log::warn!("rejected option {name:?} = {value:?}");
                        false
                    }
                };
                vec![Outbound::requester(Event::OptionSet { name, applied })]
            }
            Command::GetState => vec![Outbound::requester(self.state_event())],
            Command::Quit => return CommandResult::Quit,
        };
        CommandResult::Ok(events)
    }

    fn make_move(&mut self, id: &str, from: WireSquare, to: WireSquare) -> Outbound {
        // Unseated ids never match the side to move.
        let Some(color) = self.players.color_of(id) else {
            return reject(MoveRejection::NotYourTurn);
        };
        match self
            .session
            .propose_move(color, from.to_square(), to.to_square())
        {
            Ok(state) => Outbound::all(Event::GameState {
                state: WireGameState::from(&state),
            }),
            Err(rejection) => reject(rejection),
        }
    }
}

fn reject(rejection: MoveRejection) -> Outbound {
    Outbound::requester(Event::InvalidMove {
        message: rejection.to_string(),
    })
}

impl Protocol for SessionServer {
    fn process_command(&mut self, line: &str) -> CommandResult {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return CommandResult::Ok(Vec::new());
        }
        match serde_json::from_str::<Command>(trimmed) {
            Ok(command) => self.handle(command),
            Err(err) => {
                log::warn!("unparseable command {trimmed:?}: {err}");
                // A move that fails to decode is still answered, like any
                // other rejected move.
                let is_move = serde_json::from_str::<serde_json::Value>(trimmed)
                    .is_ok_and(|value| value["type"] == "makeMove");
                if is_move {
                    CommandResult::Ok(vec![Outbound::requester(Event::InvalidMove {
                        message: PROCESSING_ERROR.to_string(),
                    })])
                } else {
                    CommandResult::Unknown(trimmed.to_string())
                }
            }
        }
    }

    fn name(&self) -> &'static str {
        "json-lines"
    }

    fn run(&mut self) {
        let stdin = io::stdin();
        let stdout = io::stdout();
        log::info!("{} session server ready", self.name());

        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            let events = match self.process_command(&line) {
                CommandResult::Ok(events) => events,
                CommandResult::Quit => break,
                CommandResult::Unknown(text) => {
                    log::debug!("ignoring unknown command: {text}");
                    continue;
                }
            };

            let mut out = stdout.lock();
            for event in &events {
                match serde_json::to_string(event) {
                    Ok(json) => {
                        if writeln!(out, "{json}").is_err() {
                            return;
                        }
                    }
                    Err(err) => log::error!("failed to encode event: {err}"),
                }
            }
            if out.flush().is_err() {
                return;
            }
        }
    }
}
