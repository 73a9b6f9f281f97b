use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};

use personform::config::Config;
use personform::genderize::GenderizeClient;
use personform::logging::init_tracing;
use personform::person::{GenderSelection, PersonRepository};
use personform::store::{FileStore, KeyValueStore, MemoryStore};
use personform::ui::form::FormField;
use personform::ui::{App, NavOutcome, Route};

/// Personal data form with profile and BMI screens.
#[derive(Debug, Parser)]
#[command(name = "personform", version)]
struct Cli {
    /// Path to config.toml (default: platform config dir).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Keep the record in memory only; nothing is written to disk.
    #[arg(long)]
    ephemeral: bool,
}

const HELP: &str = "\
commands:
  name|surname|age|height|weight <text>   edit a field (empty text clears it)
  gender male|female|other                pick gender
  save                                    validate and save
  profile                                 open profile screen
  bmi                                     open BMI screen
  back                                    return to previous screen
  show                                    redraw current screen
  help | quit";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("failed to load configuration")?;

    let store: Arc<dyn KeyValueStore> = if cli.ephemeral {
        Arc::new(MemoryStore::new(&config.store.namespace))
    } else {
        let dir = config.store.resolved_dir();
        Arc::new(
            FileStore::open(&dir, &config.store.namespace)
                .with_context(|| format!("failed to open store in {}", dir.display()))?,
        )
    };
    tracing::info!(namespace = %store.namespace(), ephemeral = cli.ephemeral, "Session started");

    let mut app = App::new(
        PersonRepository::new(store),
        GenderizeClient::new(&config.genderize),
    );

    print_screen(&app);
    println!("{}", HELP);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                if !handle_command(&mut app, &line) {
                    break;
                }
            }
            _ = app.next_profile_update() => {
                if matches!(app.route(), Route::Profile { .. }) {
                    print_screen(&app);
                }
            }
        }
    }

    tracing::info!("Session ended");
    Ok(())
}

/// Returns false when the session should end.
fn handle_command(app: &mut App, line: &str) -> bool {
    let (command, arg) = split_command(line);

    let on_home = *app.route() == Route::Home;
    match command {
        "" => {}
        "quit" | "exit" => return false,
        "help" => println!("{}", HELP),
        "show" => print_screen(app),
        "back" => {
            if app.back() {
                print_screen(app);
            }
        }
        _ if !on_home => println!("(wróć do formularza: back)"),
        "gender" => match GenderSelection::parse(arg.trim()) {
            Some(gender) => {
                app.select_gender(gender);
                print_screen(app);
            }
            None => println!("gender: male|female|other"),
        },
        "save" => {
            app.save();
            print_notice(app);
        }
        "profile" | "bmi" => {
            let outcome = if command == "profile" {
                app.open_profile()
            } else {
                app.open_bmi()
            };
            match outcome {
                NavOutcome::Opened => print_screen(app),
                NavOutcome::SaveRequired => print_notice(app),
                NavOutcome::Disabled => println!("(wypełnij wszystkie pola)"),
            }
        }
        other => match FormField::parse(other) {
            Some(field) => {
                app.edit(field, arg);
                print_screen(app);
            }
            None => println!("unknown command '{}', try help", other),
        },
    }
    true
}

/// Split off the command word. The argument is everything after the first
/// space, untouched, so field values keep their own whitespace.
fn split_command(line: &str) -> (&str, &str) {
    let line = line.strip_suffix('\r').unwrap_or(line).trim_start();
    match line.split_once(' ') {
        Some((command, arg)) => (command, arg),
        None => (line.trim_end(), ""),
    }
}

fn print_notice(app: &mut App) {
    if let Some(notice) = app.take_notice() {
        println!(">> {}", notice.message());
    }
}

fn print_screen(app: &App) {
    println!();
    for line in app.render() {
        println!("{}", line);
    }
}
