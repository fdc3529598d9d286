use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser, Debug)]
#[command(author, version, about = "League scheduling and standings backend")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "kebab-case")]
pub enum Command {
    /// Start the backend server
    Serve {
        /// Port number (optional, defaults to 3000)
        #[arg(short, long, default_value_t = 3000)]
        port: u16,
    },
    /// Recreate the league database from JSON seed files
    Init {
        /// Player roster (array of {id, displayName})
        #[arg(long, default_value = "data/players.json")]
        players: PathBuf,
        /// Pairings (array of matches)
        #[arg(long, default_value = "data/matches.json")]
        matches: PathBuf,
    },
    /// Print the current leaderboard
    Standings,
    /// Write a player's matches as an iCal document
    ExportIcal {
        /// Player id
        #[arg(long)]
        player: String,
        /// Output file, stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print the calendar feed token of a player
    FeedToken {
        /// Player id
        #[arg(long)]
        player: String,
    },
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}
