use std::path::PathBuf;

use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use tunequeue::{cli, config, warning};

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
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Serve the queue to selection surfaces and the playback engine
    Serve,

    /// Print the queue built from a selection file
    Queue(QueueOptions),

    /// Fetch and print the default playlist
    Default,

    /// Store the listener session
    Session(SessionOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct QueueOptions {
    /// JSON file holding a playlist, a track or a list of track descriptors
    file: PathBuf,

    /// Position of the track playback starts with
    #[clap(long, default_value_t = 0)]
    start: usize,
}

#[derive(Parser, Debug, Clone)]
pub struct SessionOptions {
    #[clap(long)]
    user_id: String,

    /// Access token sent as bearer to the music backend
    #[clap(long)]
    token: String,

    /// Lifetime of the token in seconds, 0 for no expiry
    #[clap(long, default_value_t = 0)]
    expires_in: u64,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    env_logger::init();

    if let Err(e) = config::load_env().await {
        warning!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    match cli.command {
        Command::Serve => cli::serve().await,
        Command::Queue(opt) => cli::queue(opt.file, opt.start).await,
        Command::Default => cli::default_playlist().await,
        Command::Session(opt) => cli::session(opt.user_id, opt.token, opt.expires_in).await,
        Command::Completions(opt) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
