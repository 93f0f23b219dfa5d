mod app;
mod config;
mod engine;
mod keys;
mod logging;
mod models;
mod picker;
mod source;
mod ui;

use anyhow::Result;
use app::App;
use clap::Parser;
use config::AppConfig;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use engine::WordSequence;
use models::Wpm;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::Path;
use std::process::ExitCode;
use std::time::{Duration, Instant};

/// Poll interval while no word is scheduled.
const IDLE_POLL: Duration = Duration::from_millis(250);

#[derive(Parser, Debug)]
#[command(name = "skim")]
#[command(version)]
#[command(about = "A terminal speed reader that flashes one word at a time", long_about = None)]
struct Cli {
    /// File path or http(s) URL to read. Piped stdin takes precedence
    source: Option<String>,

    /// Reading speed in words per minute (clamped to 50-1000)
    #[arg(long, allow_negative_numbers = true)]
    wpm: Option<i64>,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    // dropped on every return path so buffered log lines reach the file
    let _log_guard = logging::init();

    let app_config = AppConfig::load().unwrap_or_else(|e| {
        eprintln!(
            "Warning: Failed to load config, using defaults. Error: {}",
            e
        );
        AppConfig::default()
    });

    let wpm = cli.wpm.map(Wpm::clamped).unwrap_or_else(|| app_config.reader.wpm());

    let words = match initial_words(source::stdin_is_piped(), cli.source.as_deref()) {
        Ok(words) => words,
        Err(err) => {
            tracing::error!(target: "source", error = %format!("{err:#}"), "startup load failed");
            eprintln!("{:#}", err);
            return Ok(ExitCode::FAILURE);
        }
    };
    tracing::info!(
        target: "runtime",
        words = words.as_ref().map_or(0, WordSequence::len),
        %wpm,
        "starting"
    );

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(words, wpm, app_config.theme);

    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(target: "runtime", error = %format!("{err:#}"), "event loop failed");
        println!("Error: {:?}", err);
    }

    Ok(ExitCode::SUCCESS)
}

/// Piped stdin wins over the argument; no source at all means start in the
/// file picker.
fn initial_words(stdin_piped: bool, arg: Option<&str>) -> Result<Option<WordSequence>> {
    if stdin_piped {
        return Ok(Some(source::read_stdin()?));
    }
    let Some(arg) = arg else {
        return Ok(None);
    };
    let words = if source::is_url(arg) {
        println!("Fetching content from URL: {}", arg);
        source::fetch_url(arg)?
    } else {
        source::read_file(Path::new(arg))?
    };
    Ok(Some(words))
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    let size = terminal.size()?;
    app.resize(size.width, size.height);

    loop {
        terminal.draw(|f| ui::render(f, app))?;

        let timeout = app.clock.time_until(Instant::now()).unwrap_or(IDLE_POLL);
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    app.on_key(key, Instant::now());
                }
                Event::Resize(w, h) => {
                    app.resize(w, h);
                }
                _ => {}
            }
        }

        let now = Instant::now();
        if app.clock.fire(now) {
            app.on_tick(now);
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
