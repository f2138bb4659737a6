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
use std::path::{Path, PathBuf};

use autosuggest::App;
use autosuggest::config::{self, Config, ConfigResult};
use autosuggest::error::AutosuggestError;
use autosuggest::input::WordListLoader;

/// Text input with live suggestions from a word list
#[derive(Parser, Debug)]
#[command(
    version,
    about = "Text input with live, keyboard- and mouse-navigable suggestions"
)]
struct Args {
    /// Newline-separated word list (if not provided, reads from stdin)
    wordlist: Option<PathBuf>,

    /// Most suggestions returned for one query
    #[arg(long)]
    limit: Option<usize>,

    /// Highlight the first suggestion whenever the list opens
    #[arg(long)]
    open_selects_first: bool,
}

fn main() -> Result<()> {
    // Writes to /tmp/autosuggest-debug.log at DEBUG level
    #[cfg(debug_assertions)]
    {
        use std::io::Write;

        if let Ok(log_file) = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/autosuggest-debug.log")
        {
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
        }

        log::debug!("=== AUTOSUGGEST DEBUG SESSION STARTED ===");
    }

    color_eyre::install()?;

    // Load config early to avoid defaults during app initialization
    let mut config_result = config::load_config();

    let args = Args::parse();
    apply_args(&args, &mut config_result.config);

    if let Some(path) = &args.wordlist {
        validate_wordlist_path(path)?;
    }

    let terminal = init_terminal()?;

    // Deferred loading keeps the UI responsive on large files or slow pipes
    let loader = match args.wordlist {
        Some(path) => WordListLoader::spawn_load(path),
        None => WordListLoader::spawn_load_stdin(),
    };

    let app = App::new_with_word_list(loader, &config_result.config);
    let result = run(terminal, app, config_result);

    restore_terminal()?;
    let app = result?;

    // Output after terminal restore to prevent corruption
    if let Some(value) = app.output() {
        println!("{}", value);
    }

    #[cfg(debug_assertions)]
    log::debug!("=== AUTOSUGGEST DEBUG SESSION ENDED ===");

    Ok(())
}

/// CLI flags override the config file
fn apply_args(args: &Args, config: &mut Config) {
    if let Some(limit) = args.limit {
        config.loader.limit = limit;
    }
    if args.open_selects_first {
        config.suggestions.open_selects_first = true;
    }
}

/// Fail before touching the terminal when the word list cannot be opened
fn validate_wordlist_path(path: &Path) -> Result<(), AutosuggestError> {
    if !path.is_file() {
        return Err(AutosuggestError::Io(format!(
            "Cannot read word list {}: not a file",
            path.display()
        )));
    }
    Ok(())
}

/// Initialize terminal with raw mode, alternate screen, mouse capture, focus
/// reporting and bracketed paste
fn init_terminal() -> Result<DefaultTerminal> {
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = execute!(
            stdout(),
            DisableBracketedPaste,
            DisableFocusChange,
            DisableMouseCapture,
            LeaveAlternateScreen
        );
        let _ = disable_raw_mode();
        hook(info);
    }));

    enable_raw_mode()?;

    // If any subsequent operations fail, ensure raw mode is disabled
    if let Err(e) = execute!(
        stdout(),
        EnterAlternateScreen,
        EnableBracketedPaste,
        EnableFocusChange,
        EnableMouseCapture
    ) {
        let _ = disable_raw_mode();
        return Err(e.into());
    }

    match ratatui::Terminal::new(ratatui::backend::CrosstermBackend::new(stdout())) {
        Ok(terminal) => Ok(terminal),
        Err(e) => {
            let _ = restore_terminal();
            Err(e.into())
        }
    }
}

/// Restore terminal to normal state
fn restore_terminal() -> Result<()> {
    let _ = execute!(
        stdout(),
        DisableBracketedPaste,
        DisableFocusChange,
        DisableMouseCapture,
        LeaveAlternateScreen
    );
    disable_raw_mode()?;
    Ok(())
}

fn run(mut terminal: DefaultTerminal, mut app: App, config_result: ConfigResult) -> Result<App> {
    if let Some(warning) = config_result.warning {
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

    Ok(app)
}
