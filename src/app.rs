use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::events::terminal::Handler as TerminalEventHandler;
use crate::logger::{CustomLogger, LogBuffer};
use crate::state::State;
use crate::store::TaskStore;
use crate::ui::Theme;
use crate::utils::datetime;
use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::*;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{stdout, Stdout};

type CrosstermTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Oversees event processing, state management, and terminal output.
///
/// Owns the task store and the view session; both live on the main thread.
///
pub struct App {
    store: TaskStore,
    state: State,
}

impl App {
    /// Start a new application according to the given configuration. Returns
    /// the result of the application execution.
    ///
    pub fn start(config: Config) -> Result<()> {
        let log_buffer = LogBuffer::new();
        init_logger(&config, log_buffer.clone())?;

        info!("Starting application...");
        if let Some(path) = config.file_path() {
            debug!("Using configuration file {}.", path.display());
        }
        let theme = config.theme().unwrap_or_else(|e| {
            warn!(
                "{}, falling back to the default theme (available: {}).",
                e,
                Theme::available_themes().join(", ")
            );
            Theme::default()
        });
        debug!("Using theme {}.", theme.name);
        let mut app = App {
            store: TaskStore::new(),
            state: State::new(&config, theme, log_buffer),
        };
        app.start_ui()?;

        info!("Exiting application...");
        Ok(())
    }

    /// Begin the terminal event poll on a separate thread before starting the
    /// render loop on the main thread. The terminal is restored even when the
    /// loop fails.
    ///
    fn start_ui(&mut self) -> Result<()> {
        debug!("Starting user interface on main thread...");
        let mut stdout = stdout();
        execute!(stdout, EnterAlternateScreen)?;
        enable_raw_mode()?;

        let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        terminal.hide_cursor()?;

        let result = self.run(&mut terminal);

        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    fn run(&mut self, terminal: &mut CrosstermTerminal) -> Result<()> {
        let terminal_event_handler = TerminalEventHandler::new();
        loop {
            self.state.set_now(datetime::now());
            terminal.draw(|frame| crate::ui::render(frame, &self.state, &self.store))?;
            if !terminal_event_handler.handle_next(&mut self.state, &mut self.store)? {
                debug!("Received application exit request.");
                break;
            }
        }
        Ok(())
    }
}

/// Install the buffer-backed logger at the configured level.
///
fn init_logger(config: &Config, log_buffer: LogBuffer) -> AppResult<()> {
    let level = config.level_filter();
    log::set_boxed_logger(Box::new(CustomLogger::with_buffer(log_buffer)))
        .map_err(|e| AppError::Logger(e.to_string()))?;
    log::set_max_level(*level.as_ref().unwrap_or(&LevelFilter::Info));
    if let Err(e) = level {
        warn!("{}, logging at info level.", e);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logger_installs_global_logger_once() {
        let buffer = LogBuffer::new();
        let mut config = Config::new();
        config.log_level = "loud".to_string();

        init_logger(&config, buffer.clone()).unwrap();
        info!("logger installed");
        let entries = buffer.entries();
        assert!(entries
            .iter()
            .any(|entry| entry.contains("'loud' is not a log level")));
        assert!(entries.iter().any(|entry| entry.contains("logger installed")));
        assert_eq!(log::max_level(), LevelFilter::Info);

        assert!(matches!(
            init_logger(&Config::new(), LogBuffer::new()),
            Err(AppError::Logger(_))
        ));
    }
}
