use chess_session::protocol::{Protocol, SessionServer};
use chess_session::session::OPTIONS_ENV_VAR;
use chess_session::{SessionHandle, SessionOptions};

fn main() {
    let (options, env_error) = match SessionOptions::from_env() {
        Ok(options) => (options, None),
        Err(err) => (SessionOptions::default(), Some(err)),
    };
    // Stdout carries protocol events, so log lines go to stderr.
    if let Err(err) = env_logger::Builder::new()
        .filter_level(options.log_level)
        .target(env_logger::Target::Stderr)
        .try_init()
    {
        eprintln!("logger already installed: {err}");
    }
    if let Some(err) = env_error {
        log::warn!("ignoring {OPTIONS_ENV_VAR}: {err}");
    }

    let mut server = SessionServer::new(SessionHandle::with_options(options));
    server.run();
}
