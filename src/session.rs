//! Quiz session state and scoring.
//!
//! A [`QuizSession`] owns the full record set, the records sampled for the
//! current play-through and one answer slot per sampled record. Score
//! counters are derived from the answer slots, so a record can never be
//! counted twice.

use rand::SeedableRng;
use rand::rngs::StdRng;
use thiserror::Error;
use tracing::{debug, info};

use crate::models::{AnswerOutcome, ComparisonRecord, Score, Side};
use crate::sampler::{self, DEFAULT_RETRY_BUDGET, SampleError};

pub const DEFAULT_QUIZ_LENGTH: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum SessionError {
    #[error("record {index} has already been answered")]
    AlreadyAnswered { index: usize },
    #[error("the quiz is complete")]
    Complete,
    #[error(transparent)]
    Sample(#[from] SampleError),
}

/// Knobs for building a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizOptions {
    /// Questions per play-through.
    pub count: usize,
    /// Rejected draws and restarts the sampler may spend before searching.
    pub retry_budget: usize,
    /// Fixed seed for reproducible sampling.
    pub seed: Option<u64>,
}

impl Default for QuizOptions {
    fn default() -> Self {
        Self {
            count: DEFAULT_QUIZ_LENGTH,
            retry_budget: DEFAULT_RETRY_BUDGET,
            seed: None,
        }
    }
}

/// What happened when moving past the current record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    Next,
    Complete,
}

pub struct QuizSession {
    all_records: Vec<ComparisonRecord>,
    sampled: Vec<ComparisonRecord>,
    answers: Vec<Option<Side>>,
    current_index: usize,
    options: QuizOptions,
    rng: StdRng,
}

impl QuizSession {
    pub fn new(all_records: Vec<ComparisonRecord>, options: QuizOptions) -> Result<Self, SessionError> {
        let rng = match options.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self::with_rng(all_records, options, rng)
    }

    pub fn with_rng(
        all_records: Vec<ComparisonRecord>,
        options: QuizOptions,
        rng: StdRng,
    ) -> Result<Self, SessionError> {
        let mut session = Self {
            all_records,
            sampled: Vec::new(),
            answers: Vec::new(),
            current_index: 0,
            options,
            rng,
        };
        session.reset()?;
        Ok(session)
    }

    /// Zero the score and sample a fresh set of records.
    ///
    /// Allowed at any point, including in the middle of a quiz. On failure the
    /// previous state is left untouched.
    pub fn reset(&mut self) -> Result<(), SampleError> {
        let sampled = sampler::sample(
            &self.all_records,
            self.options.count,
            self.options.retry_budget,
            &mut self.rng,
        )?;

        info!(questions = sampled.len(), "sampled new quiz");
        self.answers = vec![None; sampled.len()];
        self.sampled = sampled;
        self.current_index = 0;
        Ok(())
    }

    #[cfg(test)]
    pub(crate) fn options_mut(&mut self) -> &mut QuizOptions {
        &mut self.options
    }

    pub fn current_record(&self) -> Option<&ComparisonRecord> {
        self.sampled.get(self.current_index)
    }

    /// Score `choice` against the current record.
    ///
    /// Each record accepts one answer; a second submission is rejected rather
    /// than counted again.
    pub fn submit_answer(&mut self, choice: Side) -> Result<AnswerOutcome, SessionError> {
        let index = self.current_index;
        let record = self.sampled.get(index).ok_or(SessionError::Complete)?;
        if self.answers[index].is_some() {
            return Err(SessionError::AlreadyAnswered { index });
        }

        let correct_side = record.correct_side();
        let outcome = AnswerOutcome {
            correct: choice == correct_side,
            correct_side,
        };
        self.answers[index] = Some(choice);

        info!(
            question = index + 1,
            choice = %choice,
            correct = outcome.correct,
            "answer checked"
        );
        Ok(outcome)
    }

    pub fn advance(&mut self) -> Advance {
        if self.current_index < self.sampled.len() {
            self.current_index += 1;
        }
        debug!(index = self.current_index, "advanced");

        if self.is_complete() {
            Advance::Complete
        } else {
            Advance::Next
        }
    }

    pub fn is_complete(&self) -> bool {
        self.current_index >= self.sampled.len()
    }

    /// Whether the current record already has an answer.
    pub fn is_answered(&self) -> bool {
        self.answers
            .get(self.current_index)
            .is_some_and(|answer| answer.is_some())
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// One-based number of the current question, capped at the quiz length.
    pub fn current_number(&self) -> usize {
        (self.current_index + 1).min(self.sampled.len())
    }

    pub fn len(&self) -> usize {
        self.sampled.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sampled.is_empty()
    }

    pub fn sampled(&self) -> &[ComparisonRecord] {
        &self.sampled
    }

    pub fn attempted_count(&self) -> usize {
        self.answers.iter().filter(|answer| answer.is_some()).count()
    }

    pub fn correct_count(&self) -> usize {
        self.history()
            .filter(|(record, answer)| *answer == Some(record.correct_side()))
            .count()
    }

    pub fn score(&self) -> Score {
        Score {
            correct: self.correct_count(),
            attempted: self.attempted_count(),
            total: self.sampled.len(),
        }
    }

    /// Sampled records paired with the answer given for each, in quiz order.
    pub fn history(&self) -> impl Iterator<Item = (&ComparisonRecord, Option<Side>)> + '_ {
        self.sampled.iter().zip(self.answers.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::models::{Location, LocationPair};

    fn pair(a: &str, b: &str, distance: f64) -> LocationPair {
        LocationPair {
            locations: [
                Location::new(a, 40.0, -83.0),
                Location::new(b, 40.5, -82.5),
            ],
            distance,
        }
    }

    fn record(first: &str, second: &str, ohio: f64, abroad: f64) -> ComparisonRecord {
        ComparisonRecord {
            ohio: pair(first, second, ohio),
            abroad: pair("Osaka", "Kyoto", abroad),
            ratio: ohio / abroad,
        }
    }

    fn records(count: usize) -> Vec<ComparisonRecord> {
        (0..count)
            .map(|i| {
                let ohio = if i % 2 == 0 { 50.0 } else { 150.0 };
                record(&format!("North {i}"), &format!("South {i}"), ohio, 100.0)
            })
            .collect()
    }

    fn session(records: Vec<ComparisonRecord>, count: usize, seed: u64) -> QuizSession {
        let options = QuizOptions {
            count,
            seed: Some(seed),
            ..QuizOptions::default()
        };
        QuizSession::new(records, options).unwrap()
    }

    #[test]
    fn half_ratio_scores_ohio_as_correct() {
        let mut quiz = session(vec![record("Lima", "Findlay", 50.0, 100.0)], 1, 0);

        let outcome = quiz.submit_answer(Side::Ohio).unwrap();
        assert_eq!(
            outcome,
            AnswerOutcome {
                correct: true,
                correct_side: Side::Ohio
            }
        );

        let mut quiz = session(vec![record("Lima", "Findlay", 50.0, 100.0)], 1, 0);
        let outcome = quiz.submit_answer(Side::Abroad).unwrap();
        assert_eq!(
            outcome,
            AnswerOutcome {
                correct: false,
                correct_side: Side::Ohio
            }
        );
    }

    #[test]
    fn equal_distances_go_to_abroad() {
        let mut quiz = session(vec![record("Lima", "Findlay", 100.0, 100.0)], 1, 0);
        let outcome = quiz.submit_answer(Side::Abroad).unwrap();
        assert!(outcome.correct);
        assert_eq!(outcome.correct_side, Side::Abroad);
    }

    #[test]
    fn playing_through_counts_every_answer_once() {
        let mut quiz = session(records(12), 6, 42);
        let mut expected_correct = 0;

        while let Some(record) = quiz.current_record() {
            let truth = record.correct_side();
            let choice = if quiz.current_index() % 3 == 0 {
                truth.other()
            } else {
                truth
            };
            if choice == truth {
                expected_correct += 1;
            }

            quiz.submit_answer(choice).unwrap();
            quiz.advance();
        }

        assert!(quiz.is_complete());
        assert_eq!(quiz.current_index(), quiz.len());
        assert_eq!(quiz.attempted_count(), 6);
        assert_eq!(quiz.correct_count(), expected_correct);
        assert_eq!(quiz.score().remaining(), 0);
    }

    #[test]
    fn second_submission_is_rejected() {
        let mut quiz = session(records(4), 2, 1);

        quiz.submit_answer(Side::Ohio).unwrap();
        assert_eq!(
            quiz.submit_answer(Side::Abroad),
            Err(SessionError::AlreadyAnswered { index: 0 })
        );
        assert_eq!(quiz.attempted_count(), 1);
        assert!(quiz.is_answered());
    }

    #[test]
    fn advance_stops_at_the_end() {
        let mut quiz = session(records(4), 2, 3);

        assert_eq!(quiz.advance(), Advance::Next);
        assert_eq!(quiz.advance(), Advance::Complete);
        assert_eq!(quiz.advance(), Advance::Complete);
        assert_eq!(quiz.current_index(), 2);
        assert!(quiz.current_record().is_none());
        assert_eq!(quiz.submit_answer(Side::Ohio), Err(SessionError::Complete));
    }

    #[test]
    fn reset_zeroes_score_and_resamples() {
        let mut quiz = session(records(30), 5, 8);
        let first: Vec<_> = quiz.sampled().to_vec();

        quiz.submit_answer(Side::Ohio).unwrap();
        quiz.advance();
        quiz.submit_answer(Side::Abroad).unwrap();

        let mut changed = false;
        for _ in 0..5 {
            quiz.reset().unwrap();
            assert_eq!(quiz.correct_count(), 0);
            assert_eq!(quiz.attempted_count(), 0);
            assert_eq!(quiz.current_index(), 0);
            assert_eq!(quiz.len(), 5);
            changed |= quiz.sampled() != first.as_slice();
        }
        assert!(changed);
    }

    #[test]
    fn sampled_records_never_share_ohio_names() {
        let mut all = records(10);
        all.push(record("North 0", "Elsewhere", 10.0, 100.0));
        all.push(record("Elsewhere", "South 3", 10.0, 100.0));
        let quiz = session(all, 10, 17);

        let mut seen = HashSet::new();
        for record in quiz.sampled() {
            for name in record.ohio_names() {
                assert!(seen.insert(name));
            }
        }
    }

    #[test]
    fn failed_reset_keeps_previous_quiz() {
        let mut quiz = session(records(3), 3, 5);
        quiz.submit_answer(Side::Ohio).unwrap();
        quiz.options.count = 5;

        assert!(quiz.reset().is_err());
        assert_eq!(quiz.len(), 3);
        assert_eq!(quiz.attempted_count(), 1);
    }

    #[test]
    fn too_long_quiz_fails_to_start() {
        let options = QuizOptions {
            count: 4,
            seed: Some(0),
            ..QuizOptions::default()
        };
        let result = QuizSession::new(records(3), options);
        assert!(matches!(
            result,
            Err(SessionError::Sample(SampleError::Insufficient {
                requested: 4,
                ..
            }))
        ));
    }
}
