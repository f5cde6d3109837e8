use std::io::{self, Stdout};
use std::panic;

use crossterm::{
    ExecutableCommand,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::{debug, warn};

pub type TerminalBackend = CrosstermBackend<Stdout>;
pub type AppTerminal = Terminal<TerminalBackend>;

pub fn init() -> io::Result<AppTerminal> {
    setup_panic_hook();
    enable_raw_mode()?;
    io::stdout().execute(EnterAlternateScreen)?;
    debug!("entered alternate screen");
    Terminal::new(CrosstermBackend::new(io::stdout()))
}

pub fn restore() -> io::Result<()> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    debug!("left alternate screen");
    Ok(())
}

/// Run `f` on a freshly initialised terminal and restore it afterwards,
/// whatever `f` returns.
pub fn with_terminal<T, E, F>(f: F) -> Result<T, E>
where
    F: FnOnce(AppTerminal) -> Result<T, E>,
    E: From<io::Error>,
{
    let terminal = init()?;
    let result = f(terminal);
    settle(result, restore())
}

/// Combine the outcome of a terminal session with the restore step. An error
/// from the session wins over a failed restore, which is only logged then.
fn settle<T, E: From<io::Error>>(result: Result<T, E>, restored: io::Result<()>) -> Result<T, E> {
    match (result, restored) {
        (result, Ok(())) => result,
        (Err(err), Err(restore_err)) => {
            warn!(error = %restore_err, "failed to restore terminal");
            Err(err)
        }
        (Ok(_), Err(restore_err)) => Err(restore_err.into()),
    }
}

fn setup_panic_hook() {
    let previous_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = io::stdout().execute(LeaveAlternateScreen);
        previous_hook(panic_info);
    }));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn restore_failed() -> io::Result<()> {
        Err(io::Error::other("restore failed"))
    }

    #[test]
    fn session_error_wins_over_restore_error() {
        let result: Result<(), io::Error> = settle(Err(io::Error::other("draw failed")), restore_failed());
        assert_eq!(result.unwrap_err().to_string(), "draw failed");
    }

    #[test]
    fn restore_error_surfaces_after_success() {
        let result = settle::<_, io::Error>(Ok(7), restore_failed());
        assert_eq!(result.unwrap_err().to_string(), "restore failed");
        assert_eq!(settle::<_, io::Error>(Ok(7), Ok(())).unwrap(), 7);
    }
}
