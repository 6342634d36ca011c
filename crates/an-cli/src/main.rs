//! al-nakhwa - Al Nakhwa storefront CLI
//!
//! # Examples
//!
//! ```bash
//! # Sign in (any non-empty credentials)
//! al-nakhwa sign-in --email amina@example.com --password secret
//!
//! # Sign up and verify in one go
//! al-nakhwa sign-up --email a@b.com --password pw --name Alice --otp 123456
//!
//! # Check a guarded route, with messages in Urdu
//! al-nakhwa visit /checkout --urdu --pretty
//! ```

use an_cli::Cli;

use std::process::ExitCode;

use clap::Parser;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let runner = match an_cli::bootstrap(cli.urdu) {
        Ok(runner) => runner,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let result = runner
        .execute(cli.command)
        .await
        .and_then(|value| an_cli::render(&value, cli.pretty));

    match result {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::debug!("{e}");
            eprintln!("Error: {}", e.localized(runner.locale()));
            ExitCode::FAILURE
        }
    }
}
