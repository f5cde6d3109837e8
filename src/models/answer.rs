use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Which pair the player believes is closer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Ohio,
    Abroad,
}

impl Side {
    pub fn as_str(self) -> &'static str {
        match self {
            Side::Ohio => "ohio",
            Side::Abroad => "abroad",
        }
    }

    pub fn other(self) -> Self {
        match self {
            Side::Ohio => Side::Abroad,
            Side::Abroad => Side::Ohio,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Side {
    type Err = ChoiceError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "ohio" => Ok(Side::Ohio),
            "abroad" => Ok(Side::Abroad),
            "" => Err(ChoiceError::Missing),
            other => Err(ChoiceError::Unknown(other.to_string())),
        }
    }
}

/// A submission that cannot be scored.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ChoiceError {
    #[error("no pair selected")]
    Missing,
    #[error("unknown choice `{0}`, expected `ohio` or `abroad`")]
    Unknown(String),
}

/// Result of scoring one submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerOutcome {
    pub correct: bool,
    pub correct_side: Side,
}

/// Running score of a quiz session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Score {
    pub correct: usize,
    pub attempted: usize,
    pub total: usize,
}

impl Score {
    pub fn remaining(&self) -> usize {
        self.total.saturating_sub(self.attempted)
    }

    pub fn percentage(&self) -> f64 {
        if self.total > 0 {
            (self.correct as f64 / self.total as f64) * 100.0
        } else {
            0.0
        }
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} of {} correct. ({} left)",
            self.correct,
            self.attempted,
            self.remaining()
        )
    }
}
