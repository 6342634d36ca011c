use crate::commands::Commands;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "al-nakhwa")]
#[command(about = "Al Nakhwa storefront session and locale tool")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Show messages in Urdu
    #[arg(long, global = true)]
    pub urdu: bool,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,
}
