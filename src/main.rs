use clap::Parser;
use color_eyre::Result;
use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{
    DisableBracketedPaste, DisableFocusChange, DisableMouseCapture, EnableBracketedPaste,
    EnableFocusChange, EnableMouseCapture,
};
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use std::io::stdout;

mod app;
mod config;
mod dropdown;
mod error;
mod help;
mod input;
mod layout;
mod navigation;
mod notification;
mod search;
#[cfg(test)]
mod test_utils;
mod theme;
mod widgets;

use app::App;
use search::HttpSearchSource;

/// Type-ahead search over places and car listings
#[derive(Parser, Debug)]
#[command(
    version,
    about = "Interactive type-ahead search over places and car listings"
)]
struct Args {
    /// Backend base URL (overrides [api].base_url from the config file)
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,
}

fn main() -> Result<()> {
    // Writes to /tmp/typeahead-debug.log at DEBUG level
    #[cfg(debug_assertions)]
    {
        use std::io::Write;

        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/typeahead-debug.log")?;

        env_logger::Builder::new()
            .filter_level(log::LevelFilter::Debug)
            .target(env_logger::Target::Pipe(Box::new(log_file)))
            .format(|buf, record| {
                use std::time::SystemTime;
                let datetime: chrono::DateTime<chrono::Local> = SystemTime::now().into();
                writeln!(
                    buf,
                    "[{}] [{}] {}",
                    datetime.format("%Y-%m-%dT%H:%M:%S%.3f"),
                    record.level(),
                    record.args()
                )
            })
            .init();

        log::debug!("=== TYPEAHEAD DEBUG SESSION STARTED ===");
    }

    color_eyre::install()?;

    let args = Args::parse();

    let config_result = config::load_config();
    let mut api = config_result.config.api.clone();
    if let Some(base_url) = args.base_url {
        api.base_url = base_url;
    }

    // Bad URLs fail before the terminal is taken over
    let source = HttpSearchSource::from_config(&api)?;

    let terminal = init_terminal()?;
    let app = App::new(source);

    let result = run(terminal, app, config_result.warning);

    restore_terminal()?;

    let app = result?;
    handle_output(&app)?;

    Ok(())
}

/// Initialize terminal with raw mode, alternate screen, mouse capture,
/// focus reporting and bracketed paste
fn init_terminal() -> Result<DefaultTerminal> {
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = leave_screen();
        let _ = disable_raw_mode();
        hook(info);
    }));

    enable_raw_mode()?;

    // If any subsequent operations fail, ensure raw mode is disabled
    if let Err(e) = execute!(
        stdout(),
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableFocusChange,
        EnableBracketedPaste
    ) {
        let _ = disable_raw_mode();
        return Err(e.into());
    }

    match ratatui::Terminal::new(ratatui::backend::CrosstermBackend::new(stdout())) {
        Ok(terminal) => Ok(terminal),
        Err(e) => {
            let _ = leave_screen();
            let _ = disable_raw_mode();
            Err(e.into())
        }
    }
}

fn leave_screen() -> std::io::Result<()> {
    execute!(
        stdout(),
        DisableBracketedPaste,
        DisableFocusChange,
        DisableMouseCapture,
        LeaveAlternateScreen
    )
}

/// Restore terminal to normal state
fn restore_terminal() -> Result<()> {
    let _ = leave_screen();
    disable_raw_mode()?;
    Ok(())
}

fn run(mut terminal: DefaultTerminal, mut app: App, warning: Option<String>) -> Result<App> {
    if let Some(warning) = warning {
        app.notification.show_warning(&warning);
    }

    loop {
        if app.should_render() {
            terminal.draw(|frame| app.render(frame))?;
            app.clear_dirty();
        }

        app.handle_events()?;

        if app.should_quit() {
            break;
        }
    }

    app.search.shutdown();
    Ok(app)
}

/// Print the routes committed during the session, one JSON object per line
fn handle_output(app: &App) -> Result<()> {
    for route in app.routes() {
        println!("{}", serde_json::to_string(route)?);
    }
    Ok(())
}
