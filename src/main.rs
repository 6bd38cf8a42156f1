use std::path::PathBuf;

use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use spotcsv::{api, cli, config, warning};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Run the HTTP export service
    Serve(ServeOptions),

    /// Export a single playlist as CSV
    Export(ExportOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct ServeOptions {
    /// Address to bind, overrides SERVER_ADDRESS (e.g. 0.0.0.0:8080)
    #[clap(long)]
    addr: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct ExportOptions {
    /// Public Spotify playlist URL
    #[clap(long)]
    url: String,

    /// File to write, stdout when omitted.
    /// A bare --output writes spotify-playlist.csv
    #[clap(long, short, value_name = "PATH", num_args = 0..=1, default_missing_value = api::DOWNLOAD_FILENAME)]
    output: Option<PathBuf>,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // completions must not depend on a valid environment
    let command = match cli.command {
        Command::Completions(opt) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout());
            return;
        }
        command => command,
    };

    if let Err(e) = config::load_env().await {
        warning!("Cannot load .env file. Err: {}", e);
    }
    let config = config::Config::from_env();

    match command {
        Command::Serve(opt) => cli::serve(config, opt.addr).await,
        Command::Export(opt) => cli::export(config, opt.url, opt.output).await,
        Command::Completions(_) => {}
    }
}
