//! # ohio-quiz
//!
//! A terminal geography quiz: is this pair of Ohio towns closer together
//! than this pair of places abroad?
//!
//! ## Usage
//!
//! ```rust,no_run
//! use ohio_quiz::{Quiz, QuizError, QuizOptions};
//!
//! fn main() -> Result<(), QuizError> {
//!     // Load the comparison records and sample a quiz from them
//!     let quiz = Quiz::from_json("pairs_close.json", QuizOptions::default())?;
//!
//!     // Run the quiz in the terminal
//!     quiz.run()?;
//!
//!     Ok(())
//! }
//! ```
//!
//! The scoring core ([`QuizSession`], [`sampler`]) does not depend on the
//! terminal; anything implementing [`Presenter`] can drive an [`App`].

mod app;
mod data;
pub mod geo;
mod models;
mod presenter;
pub mod sampler;
mod session;
pub mod shuffle;
pub mod terminal;
pub mod ui;

use std::io;
use std::path::Path;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use thiserror::Error;

pub use app::{App, Flow, QuizEvent};
pub use data::{DEFAULT_PAIRS_PATH, LoadError, load_records_from_json};
pub use models::{
    AnswerOutcome, AppState, ChoiceError, ComparisonRecord, Location, LocationPair, Score, Side,
};
pub use presenter::{CompleteView, Presenter, QuestionView, ResultView};
pub use sampler::SampleError;
pub use session::{Advance, DEFAULT_QUIZ_LENGTH, QuizOptions, QuizSession, SessionError};
pub use ui::TerminalPresenter;

/// Error type for quiz operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuizError {
    #[error("failed to load records: {0}")]
    Load(#[from] LoadError),
    #[error(transparent)]
    Sample(#[from] SampleError),
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error(transparent)]
    Choice(#[from] ChoiceError),
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// A quiz instance that can be run in the terminal.
pub struct Quiz {
    session: QuizSession,
}

impl Quiz {
    /// Create a quiz from already loaded records.
    pub fn new(records: Vec<ComparisonRecord>, options: QuizOptions) -> Result<Self, QuizError> {
        Ok(Self {
            session: QuizSession::new(records, options)?,
        })
    }

    /// Load a quiz from a JSON file of comparison records.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use ohio_quiz::{Quiz, QuizOptions};
    ///
    /// let options = QuizOptions { count: 5, ..QuizOptions::default() };
    /// let quiz = Quiz::from_json("pairs_close.json", options).expect("Failed to load quiz");
    /// ```
    pub fn from_json<P: AsRef<Path>>(path: P, options: QuizOptions) -> Result<Self, QuizError> {
        let records = load_records_from_json(path)?;
        Self::new(records, options)
    }

    /// Run the quiz in the terminal.
    ///
    /// This will take over the terminal, display the quiz UI, and return
    /// when the user quits.
    pub fn run(self) -> Result<(), QuizError> {
        terminal::with_terminal(|term| -> Result<(), QuizError> {
            let mut app = App::new(self.session, TerminalPresenter::new(term));
            run_event_loop(&mut app)
        })
    }

    pub fn session(&self) -> &QuizSession {
        &self.session
    }
}

/// Headline for the screen shown when a quiz cannot start.
pub fn failure_headline(error: &QuizError) -> &'static str {
    match error {
        QuizError::Load(_) => "CANNOT LOAD DATA",
        QuizError::Sample(_) | QuizError::Session(_) => "CANNOT BUILD QUIZ",
        _ => "CANNOT START QUIZ",
    }
}

/// Show why the quiz could not start until the user quits.
pub fn show_startup_failure(error: &QuizError) -> Result<(), QuizError> {
    let headline = failure_headline(error);
    let message = error.to_string();
    terminal::with_terminal(|term| -> Result<(), QuizError> {
        let mut presenter = TerminalPresenter::new(term);
        loop {
            presenter.render_startup_failure(headline, &message)?;
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press
                    && matches!(key.code, KeyCode::Char('q' | 'Q') | KeyCode::Esc | KeyCode::Enter)
                {
                    return Ok(());
                }
            }
        }
    })
}

fn run_event_loop(app: &mut App<TerminalPresenter<terminal::TerminalBackend>>) -> Result<(), QuizError> {
    app.render()?;

    loop {
        let quiz_event = match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => map_key(app.state, key.code),
            Event::Resize(..) => Some(QuizEvent::Redraw),
            _ => None,
        };

        if let Some(quiz_event) = quiz_event {
            if app.handle(quiz_event)? == Flow::Exit {
                break;
            }
        }
    }

    Ok(())
}

/// Translate a key press into a quiz event for the current view.
pub fn map_key(state: AppState, key: KeyCode) -> Option<QuizEvent> {
    match key {
        KeyCode::Char('q') | KeyCode::Char('Q') => return Some(QuizEvent::Quit),
        KeyCode::Char('r') | KeyCode::Char('R') => return Some(QuizEvent::Reset),
        _ => {}
    }

    match state {
        AppState::Question => map_question_key(key),
        AppState::Answered => map_answered_key(key),
        AppState::Complete => map_complete_key(key),
    }
}

fn map_question_key(key: KeyCode) -> Option<QuizEvent> {
    match key {
        KeyCode::Char('o') | KeyCode::Char('1') | KeyCode::Left => Some(QuizEvent::Choose(Side::Ohio)),
        KeyCode::Char('a') | KeyCode::Char('2') | KeyCode::Right => {
            Some(QuizEvent::Choose(Side::Abroad))
        }
        KeyCode::Up | KeyCode::Down | KeyCode::Tab => Some(QuizEvent::ToggleChoice),
        KeyCode::Enter | KeyCode::Char('c') | KeyCode::Char(' ') => Some(QuizEvent::Check),
        _ => None,
    }
}

fn map_answered_key(key: KeyCode) -> Option<QuizEvent> {
    match key {
        KeyCode::Enter | KeyCode::Char('n') | KeyCode::Char(' ') => Some(QuizEvent::Next),
        _ => None,
    }
}

fn map_complete_key(key: KeyCode) -> Option<QuizEvent> {
    match key {
        KeyCode::Down | KeyCode::Char('j') => Some(QuizEvent::ScrollDown),
        KeyCode::Up | KeyCode::Char('k') => Some(QuizEvent::ScrollUp),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quit_and_reset_work_everywhere() {
        for state in [AppState::Question, AppState::Answered, AppState::Complete] {
            assert_eq!(map_key(state, KeyCode::Char('q')), Some(QuizEvent::Quit));
            assert_eq!(map_key(state, KeyCode::Char('r')), Some(QuizEvent::Reset));
        }
    }

    #[test]
    fn headline_names_the_failing_step() {
        let missing = LoadError::Empty {
            path: "pairs_close.json".into(),
        };
        assert_eq!(failure_headline(&missing.into()), "CANNOT LOAD DATA");

        let short = SampleError::Insufficient {
            requested: 10,
            available: 4,
        };
        assert_eq!(failure_headline(&short.into()), "CANNOT BUILD QUIZ");
        assert_eq!(
            failure_headline(&SessionError::from(SampleError::NoRecords).into()),
            "CANNOT BUILD QUIZ"
        );
    }

    #[test]
    fn enter_depends_on_the_view() {
        assert_eq!(map_key(AppState::Question, KeyCode::Enter), Some(QuizEvent::Check));
        assert_eq!(map_key(AppState::Answered, KeyCode::Enter), Some(QuizEvent::Next));
        assert_eq!(map_key(AppState::Complete, KeyCode::Enter), None);
    }

    #[test]
    fn choices_only_while_asking() {
        assert_eq!(
            map_key(AppState::Question, KeyCode::Char('a')),
            Some(QuizEvent::Choose(Side::Abroad))
        );
        assert_eq!(map_key(AppState::Answered, KeyCode::Char('a')), None);
        assert_eq!(map_key(AppState::Complete, KeyCode::Char('j')), Some(QuizEvent::ScrollDown));
    }
}
