use std::net::SocketAddr;

use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use ouracli::{cli, config, error, warning};

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
    /// Fetch and print your Oura personal info
    Profile(ProfileOptions),

    /// Run the web front end
    Serve(ServeOptions),

    /// Open the page for creating a Personal Access Token
    Token,

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct ProfileOptions {
    /// Personal Access Token (defaults to OURA_PAT)
    #[clap(long)]
    pub token: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct ServeOptions {
    /// Address to bind (defaults to SERVER_ADDRESS or 127.0.0.1:3000)
    #[clap(long)]
    pub addr: Option<SocketAddr>,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        warning!("Cannot load .env file. Err: {}", e);
    }

    let cli = Cli::parse();

    if let Command::Completions(opt) = &cli.command {
        let mut cmd = Cli::command_for_update();
        let name = cmd.get_name().to_string();
        generate(opt.shell, &mut cmd, name, &mut std::io::stdout());
        return;
    }

    let settings = match config::Settings::from_env() {
        Ok(s) => s,
        Err(e) => error!("Invalid configuration. Err: {}", e),
    };

    match cli.command {
        Command::Profile(opt) => cli::profile(&settings, opt.token).await,
        Command::Serve(opt) => cli::serve(settings, opt.addr).await,
        Command::Token => cli::token(),
        Command::Completions(_) => {}
    }
}
