use std::io::stdout;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use color_eyre::Result;
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event};
use crossterm::execute;
use ratatui::DefaultTerminal;

use searchdeck::api::SearchClient;
use searchdeck::app::App;
use searchdeck::browser::SystemBrowser;
use searchdeck::config::load_config;
use searchdeck::error::SearchDeckError;
use searchdeck::logging;
use searchdeck::page::Location;
use searchdeck::worker::{WorkerHandle, spawn_worker};

/// How long to wait for terminal input before checking for responses
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Terminal search front-end with live autocomplete
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Open the results page for this query
    query: Option<String>,

    /// Base URL of the search backend (overrides the config file)
    #[arg(long, value_name = "URL")]
    server: Option<String>,

    /// Config file to use instead of ~/.config/searchdeck/config.toml
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Write logs to this file
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;

    let args = Args::parse();

    if let Some(path) = logging::log_path(args.log_file.as_deref())
        && let Err(e) = logging::init_logging(&path)
    {
        // Only a log file the user asked for is worth failing over
        if args.log_file.is_some() {
            return Err(e.into());
        }
    }

    // Everything that can fail on bad input is checked before raw mode
    let mut config = load_config(args.config.as_deref())?;
    if let Some(server) = args.server {
        config.server.base_url = server;
    }
    let client = SearchClient::new(&config.server.base_url).map_err(|e| {
        SearchDeckError::InvalidServerUrl {
            url: config.server.base_url.clone(),
            message: e.to_string(),
        }
    })?;
    log::info!("Using search backend {}", client.base_url());

    let worker = spawn_worker(client)?;

    let location = match &args.query {
        Some(query) => Location::search(query),
        None => Location::home(),
    };
    let app = App::new(
        config,
        worker.requests.clone(),
        Box::new(SystemBrowser),
        location,
        args.query.as_deref(),
    );

    // Initialize terminal (handles raw mode, alternate screen, etc.)
    let terminal = ratatui::init();
    let result = match execute!(stdout(), EnableMouseCapture) {
        Ok(()) => run(terminal, app, &worker),
        Err(e) => Err(e.into()),
    };

    // Restore terminal (automatic cleanup)
    if let Err(e) = execute!(stdout(), DisableMouseCapture) {
        log::warn!("Failed to disable mouse capture: {}", e);
    }
    ratatui::restore();
    worker.shutdown();

    result
}

fn run(mut terminal: DefaultTerminal, mut app: App, worker: &WorkerHandle) -> Result<()> {
    loop {
        // Render the UI
        terminal.draw(|frame| app.render(frame))?;

        // Handle events
        if event::poll(POLL_INTERVAL)? {
            match event::read()? {
                Event::Key(key) => app.handle_key_event(key),
                Event::Mouse(mouse) => app.handle_mouse_event(mouse),
                _ => {}
            }
        }

        // Apply whatever the fetch worker finished meanwhile
        while let Ok(response) = worker.responses.try_recv() {
            app.apply_response(response);
        }

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
