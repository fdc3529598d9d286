use anyhow::Result;

use league_scheduler::cli::Command;
use league_scheduler::{
    handle_completions, handle_export_ical, handle_feed_token, handle_init, handle_serve,
    handle_standings, interpret,
};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let command = interpret();
    execute_command(&command)
}

fn execute_command(command: &Command) -> Result<()> {
    match command {
        Command::Serve { port } => handle_serve(*port),
        Command::Init { players, matches } => handle_init(players, matches),
        Command::Standings => handle_standings(),
        Command::ExportIcal { player, output } => handle_export_ical(player, output.as_deref()),
        Command::FeedToken { player } => handle_feed_token(player),
        Command::Completions { shell } => handle_completions(*shell),
    }
}
