//! The seam between the quiz core and whatever draws it.
//!
//! The controller builds one of the view structs below after every event and
//! hands it to a [`Presenter`]. The terminal front end lives in `ui`; tests use
//! a recording presenter instead.

use std::io;

use crate::models::{AnswerOutcome, ComparisonRecord, Score, Side};

/// A record waiting for an answer.
#[derive(Debug, Clone, Copy)]
pub struct QuestionView<'a> {
    pub record: &'a ComparisonRecord,
    pub number: usize,
    pub score: Score,
    pub selected: Option<Side>,
    pub notice: Option<&'a str>,
}

/// A record that has just been checked.
#[derive(Debug, Clone, Copy)]
pub struct ResultView<'a> {
    pub record: &'a ComparisonRecord,
    pub number: usize,
    pub score: Score,
    pub chosen: Side,
    pub outcome: AnswerOutcome,
    /// More records remain after this one.
    pub has_next: bool,
    pub notice: Option<&'a str>,
}

/// The end-of-quiz summary.
#[derive(Debug, Clone)]
pub struct CompleteView<'a> {
    pub score: Score,
    pub history: Vec<(&'a ComparisonRecord, Option<Side>)>,
    pub scroll: usize,
    pub notice: Option<&'a str>,
}

pub trait Presenter {
    fn render_question(&mut self, view: &QuestionView<'_>) -> io::Result<()>;

    fn render_result(&mut self, view: &ResultView<'_>) -> io::Result<()>;

    fn render_complete(&mut self, view: &CompleteView<'_>) -> io::Result<()>;
}
