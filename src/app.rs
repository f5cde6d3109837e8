use tracing::warn;

use crate::QuizError;
use crate::models::{AnswerOutcome, AppState, ChoiceError, Side};
use crate::presenter::{CompleteView, Presenter, QuestionView, ResultView};
use crate::session::{Advance, QuizSession, SessionError};

/// Something the player did. Handlers receive the event explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizEvent {
    Choose(Side),
    ToggleChoice,
    Check,
    Next,
    Reset,
    ScrollUp,
    ScrollDown,
    Redraw,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

pub struct App<P> {
    pub state: AppState,
    session: QuizSession,
    presenter: P,
    selected: Option<Side>,
    last_answer: Option<(Side, AnswerOutcome)>,
    notice: Option<String>,
    result_scroll: usize,
}

impl<P: Presenter> App<P> {
    pub fn new(session: QuizSession, presenter: P) -> Self {
        let state = if session.is_complete() {
            AppState::Complete
        } else {
            AppState::Question
        };

        Self {
            state,
            session,
            presenter,
            selected: None,
            last_answer: None,
            notice: None,
            result_scroll: 0,
        }
    }

    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    #[cfg(test)]
    fn selected(&self) -> Option<Side> {
        self.selected
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    #[cfg(test)]
    fn result_scroll(&self) -> usize {
        self.result_scroll
    }

    pub fn handle(&mut self, event: QuizEvent) -> Result<Flow, QuizError> {
        match event {
            QuizEvent::Quit => return Ok(Flow::Exit),
            QuizEvent::Choose(side) => self.choose(side),
            QuizEvent::ToggleChoice => {
                let side = self.selected.map_or(Side::Ohio, Side::other);
                self.choose(side);
            }
            QuizEvent::Check => match self.check() {
                Ok(_) => {}
                Err(QuizError::Choice(err)) => {
                    warn!(%err, "blocked submission");
                    self.notice = Some(format!("{err}: choose the closer pair first"));
                }
                Err(QuizError::Session(err @ SessionError::AlreadyAnswered { .. })) => {
                    warn!(%err, "ignored repeated submission");
                }
                Err(err) => return Err(err),
            },
            QuizEvent::Next => self.next(),
            QuizEvent::Reset => {
                if let Err(err) = self.restart() {
                    warn!(%err, "restart failed");
                    self.notice = Some(format!("cannot restart: {err}"));
                }
            }
            QuizEvent::ScrollUp => self.scroll_results_up(),
            QuizEvent::ScrollDown => self.scroll_results_down(),
            QuizEvent::Redraw => {}
        }

        self.render()?;
        Ok(Flow::Continue)
    }

    pub fn choose(&mut self, side: Side) {
        if self.state == AppState::Question {
            self.selected = Some(side);
            self.notice = None;
        }
    }

    /// Score the current selection.
    ///
    /// Nothing is recorded when no pair is selected.
    pub fn check(&mut self) -> Result<AnswerOutcome, QuizError> {
        if self.state != AppState::Question {
            return Err(SessionError::AlreadyAnswered {
                index: self.session.current_index(),
            }
            .into());
        }

        let choice = self.selected.ok_or(ChoiceError::Missing)?;
        let outcome = self.session.submit_answer(choice)?;

        self.last_answer = Some((choice, outcome));
        self.notice = None;
        self.state = AppState::Answered;
        Ok(outcome)
    }

    pub fn next(&mut self) {
        if self.state != AppState::Answered {
            return;
        }

        self.selected = None;
        self.last_answer = None;
        self.state = match self.session.advance() {
            Advance::Next => AppState::Question,
            Advance::Complete => {
                self.result_scroll = 0;
                AppState::Complete
            }
        };
    }

    /// Re-sample and zero the score. Allowed from any state.
    pub fn restart(&mut self) -> Result<(), QuizError> {
        self.session.reset()?;

        self.selected = None;
        self.last_answer = None;
        self.notice = None;
        self.result_scroll = 0;
        self.state = if self.session.is_complete() {
            AppState::Complete
        } else {
            AppState::Question
        };
        Ok(())
    }

    pub fn scroll_results_down(&mut self) {
        if self.state == AppState::Complete {
            let max_scroll = self.session.len().saturating_sub(1);
            self.result_scroll = (self.result_scroll + 1).min(max_scroll);
        }
    }

    pub fn scroll_results_up(&mut self) {
        if self.state == AppState::Complete {
            self.result_scroll = self.result_scroll.saturating_sub(1);
        }
    }

    /// Hand the current view to the presenter.
    pub fn render(&mut self) -> Result<(), QuizError> {
        let score = self.session.score();
        let number = self.session.current_number();
        let notice = self.notice.as_deref();

        match (self.state, self.session.current_record(), self.last_answer) {
            (AppState::Question, Some(record), _) => {
                self.presenter.render_question(&QuestionView {
                    record,
                    number,
                    score,
                    selected: self.selected,
                    notice,
                })?;
            }
            (AppState::Answered, Some(record), Some((chosen, outcome))) => {
                self.presenter.render_result(&ResultView {
                    record,
                    number,
                    score,
                    chosen,
                    outcome,
                    has_next: self.session.current_index() + 1 < self.session.len(),
                    notice,
                })?;
            }
            _ => {
                self.presenter.render_complete(&CompleteView {
                    score,
                    history: self.session.history().collect(),
                    scroll: self.result_scroll,
                    notice,
                })?;
            }
        }
        Ok(())
    }
}
