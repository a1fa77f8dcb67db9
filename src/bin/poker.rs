use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use poker_showdown::showdown::HandRequest;
use poker_showdown::tui::{app::AppState, controller};
use ratatui::prelude::*;
use std::fs;
use std::io::{self, IsTerminal, Read, Stdout};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Duration;

#[derive(Debug, Parser)]
#[clap(version, about)]
struct Cli {
    #[clap(subcommand)]
    command: Option<Command>,
    /// Default name for the first player.
    #[clap(long, default_value = "Player 1")]
    player1: String,
    /// Default name for the second player.
    #[clap(long, default_value = "Player 2")]
    player2: String,
    /// Seed for randomized hands.
    #[clap(long)]
    seed: Option<u64>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Evaluate a JSON hand request and print the verdict as JSON.
    Eval(EvalArgs),
}

#[derive(Debug, Args)]
struct EvalArgs {
    /// Request file, or `-` for stdin.
    #[clap(default_value = "-")]
    input: PathBuf,
    /// Indent the output.
    #[clap(long)]
    pretty: bool,
}

fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    crossterm::execute!(
        stdout,
        crossterm::terminal::EnterAlternateScreen,
        crossterm::event::EnableMouseCapture
    )?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

fn restore_terminal(mut terminal: Terminal<CrosstermBackend<Stdout>>) -> io::Result<()> {
    disable_raw_mode()?;
    crossterm::execute!(
        terminal.backend_mut(),
        crossterm::event::DisableMouseCapture,
        crossterm::terminal::LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;
    Ok(())
}

fn run_tui(cli: Cli) -> anyhow::Result<ExitCode> {
    if !io::stdout().is_terminal() {
        println!(
            "poker-showdown TUI requires a real terminal (TTY).\n\
             Use `poker-showdown eval [FILE]` for JSON input. Version: {}",
            poker_showdown::VERSION
        );
        return Ok(ExitCode::SUCCESS);
    }
    let seed = cli.seed.unwrap_or_else(rand::random);
    let mut app = AppState::new(cli.player1, cli.player2, seed);
    let mut terminal = setup_terminal().context("failed to set up terminal")?;
    let tick_rate = Duration::from_millis(250);

    let res = controller::run(&mut terminal, &mut app, tick_rate);

    // Always attempt to restore terminal
    restore_terminal(terminal).context("failed to restore terminal")?;
    res?;
    Ok(ExitCode::SUCCESS)
}

fn read_input(path: &Path) -> anyhow::Result<String> {
    if path.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf).context("failed to read stdin")?;
        Ok(buf)
    } else {
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
    }
}

fn run_eval(args: EvalArgs) -> anyhow::Result<ExitCode> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Warn)
        .format_target(false)
        .parse_default_env()
        .init();

    let body = read_input(&args.input)?;
    match HandRequest::from_json(&body).and_then(|request| request.evaluate()) {
        Ok(verdict) => {
            let out = if args.pretty {
                serde_json::to_string_pretty(&verdict)?
            } else {
                serde_json::to_string(&verdict)?
            };
            println!("{out}");
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            eprintln!("Error: {}", err.public_message());
            Ok(ExitCode::from(err.fault().exit_code()))
        }
    }
}

fn main() -> anyhow::Result<ExitCode> {
    let mut cli = Cli::parse();
    match cli.command.take() {
        Some(Command::Eval(args)) => run_eval(args),
        None => run_tui(cli),
    }
}
