mod handlers;
pub mod parse;

use clap::Parser;
pub use parse::Cli;
use tracing::warn;

use crate::{core::error::GraphError, telemetry::init_default_tracing};

pub fn run() -> Result<(), GraphError> {
    let cli = parse::Cli::parse();
    if !init_default_tracing(cli.debug.then_some("debug")) && cli.debug {
        // reaches a subscriber only if the host installed one
        warn!("tracing subscriber unavailable; --debug has no effect");
    }
    match cli.cmd {
        parse::Command::Render(a) => handlers::render(a),
        parse::Command::Compose(a) => handlers::compose(a),
        parse::Command::Symbols => {
            handlers::symbols();
            Ok(())
        }
        parse::Command::Examples => {
            handlers::examples();
            Ok(())
        }
    }
}
