// calctty: a keypad calculator for the terminal

use std::io;
use std::path::PathBuf;

use clap::Parser;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

use calctty::config::Config;
use calctty::controller::Controller;
use calctty::ui::App;
use calctty::{headless, logging};

#[derive(Parser)]
#[command(name = "calctty")]
#[command(author, version, about = "A keypad calculator with a memory register")]
struct Cli {
    /// Config file to use instead of the default location
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Press these keys without opening the UI, e.g. "12+3=" or "4 M+"
    #[arg(short, long, value_name = "SEQ")]
    keys: Option<String>,

    /// With --keys, print the result and session state as JSON
    #[arg(long, requires = "keys")]
    json: bool,

    /// Log filter, e.g. "debug" or "calctty=trace"
    #[arg(long, value_name = "FILTER")]
    log_level: Option<String>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = Config::load(cli.config.as_deref())?;
    // A broken log file should not stop the calculator
    match logging::init(&config.logging, cli.log_level.as_deref()) {
        Ok(log_path) => tracing::info!(log = %log_path.display(), "calctty starting"),
        Err(e) => eprintln!("Warning: logging disabled: {}", e),
    }

    if let Some(keys) = &cli.keys {
        let report = headless::run(keys, config.input.max_length)?;
        if cli.json {
            println!("{}", report.to_json()?);
        } else {
            println!("{}", report.rendered.display);
        }
        return Ok(());
    }

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let controller = Controller::new(config.input.max_length);
    let mut app = App::new(controller, config.ui.title.clone());
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = %err, "event loop failed");
        eprintln!("Error: {:?}", err);
    }

    tracing::info!("calctty exiting");
    Ok(())
}
