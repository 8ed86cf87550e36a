use std::time::Duration;

use anyhow::Result;
use board::{
    DEFAULT_API_URL, WishBoard, WishClient,
    terminal::{Action, TerminalView, parse_action},
};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    #[arg(long, env = "WISH_API_URL", default_value = DEFAULT_API_URL)]
    api_url: String,

    #[arg(long, env = "WISH_TIMEOUT_MS", default_value_t = 5000)]
    timeout_ms: u64,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the board
    List,

    /// Add a wish
    Add {
        #[arg(required = true)]
        words: Vec<String>,
    },

    /// Remove a wish by id
    Remove {
        id: i64,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Keep the board open and read wishes from stdin
    Interactive,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let client = WishClient::new(&args.api_url, Duration::from_millis(args.timeout_ms))?;
    info!("Using wish server at {}", client.base_url());

    let auto_confirm = matches!(args.command, Command::Remove { yes: true, .. });
    let mut board = WishBoard::new(client, TerminalView::stdio(auto_confirm));

    board.load().await;

    match args.command {
        Command::List => {}
        Command::Add { words } => {
            board.submit(&words.join(" ")).await;
        }
        Command::Remove { id, .. } => {
            board.remove(id).await;
        }
        Command::Interactive => interactive(&mut board).await?,
    }

    Ok(())
}

async fn interactive(
    board: &mut WishBoard<WishClient, TerminalView<std::io::StdinLock<'static>, std::io::Stdout>>,
) -> Result<()> {
    println!("Type a wish and press Enter. /rm <id> deletes, /list reprints, /quit leaves.");

    while let Some(line) = board.view_mut().read_line()? {
        match parse_action(&line) {
            Action::Submit(content) => {
                board.submit(&content).await;
            }
            Action::Remove(id) => {
                board.remove(id).await;
            }
            Action::List => board.view_mut().print_board(),
            Action::Quit => break,
            Action::Unknown(command) => println!("Unknown command: {command}"),
        }
    }

    Ok(())
}
