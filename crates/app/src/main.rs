//! Mercatus storefront shell

use std::{fmt, io, process::ExitCode};

use mercatus_app::{
    config::Config, context::AppContext, observability::init_subscriber, shell::Shell,
};
use tokio::io::BufReader;
use tracing::error;

#[tokio::main]
pub async fn main() -> ExitCode {
    let config = match Config::load() {
        Ok(config) => config,
        Err(error) => error.exit(),
    };

    if let Err(error) = init_subscriber(&config.logging) {
        report(format_args!("failed to initialise logging: {error}"));

        return ExitCode::FAILURE;
    }

    let ctx = match AppContext::from_config(&config) {
        Ok(ctx) => ctx,
        Err(error) => {
            error!(error = ?error, "failed to start storefront");

            return ExitCode::FAILURE;
        }
    };

    let mut shell = Shell::new(ctx);

    match shell
        .run(BufReader::new(tokio::io::stdin()), &mut io::stdout())
        .await
    {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            error!(%error, "shell terminated");

            ExitCode::FAILURE
        }
    }
}

#[expect(
    clippy::print_stderr,
    reason = "the subscriber failed to install, so there is nowhere else to log"
)]
fn report(message: impl fmt::Display) {
    eprintln!("{message}");
}
