use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use pocketcalc::calculator::{Calculator, parse_keys};
use pocketcalc::config::Config;
use pocketcalc::ui::{Command, Outcome, Renderer, Scale, Session, ThemeMode, ViewportScale};

#[derive(Parser, Debug)]
#[command(name = "pocketcalc", version, about = "A pocket calculator for the terminal")]
struct Cli {
    /// Keys to press, e.g. `1 + 2 =` or `12+3=`. Starts an interactive session when omitted.
    #[arg(allow_hyphen_values = true, trailing_var_arg = true)]
    keys: Vec<String>,

    /// Do not record completed operations
    #[arg(long)]
    no_history: bool,

    /// Colour theme (overrides the config file)
    #[arg(long, value_enum)]
    theme: Option<ThemeMode>,

    /// Plain output without ANSI colours
    #[arg(long)]
    no_color: bool,

    /// Path to config.toml
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the final state as JSON (batch mode only)
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let config = Config::load(cli.config.as_deref()).context("failed to load configuration")?;
    let calculator = Calculator::with_history(config.history && !cli.no_history);
    let renderer = Renderer::new(
        cli.theme.unwrap_or(config.theme),
        ViewportScale::from_env(config.width),
        config.color && !cli.no_color,
    );
    let mut session = Session::new(calculator, renderer);

    if cli.keys.is_empty() {
        run_interactive(&mut session)
    } else {
        run_batch(&mut session, &cli.keys.join(" "), cli.json)
    }
}

fn run_batch<S: Scale>(session: &mut Session<S>, line: &str, json: bool) -> Result<()> {
    let keys = parse_keys(line).with_context(|| format!("cannot read keys {:?}", line))?;
    session.execute(Command::Keys(keys))?;

    if json {
        let snapshot = session.calculator().snapshot();
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    } else {
        println!("{}", session.render());
    }
    Ok(())
}

fn run_interactive<S: Scale>(session: &mut Session<S>) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    println!("{}", session.render());
    loop {
        write!(stdout, "> ")?;
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        if line.trim().is_empty() {
            continue;
        }

        match session.handle_line(&line) {
            Ok(Outcome::Render(screen)) => println!("{}", screen),
            Ok(Outcome::Message(message)) => println!("{}", message),
            Ok(Outcome::Quit) => break,
            Err(e) => eprintln!("error: {}", e),
        }
    }
    Ok(())
}
