mod answer;
mod record;

pub use answer::{AnswerOutcome, ChoiceError, Score, Side};
pub use record::{ComparisonRecord, Location, LocationPair};

/// Which view the controller is currently showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    /// Waiting for the player to pick a pair and check it.
    Question,
    /// The current record has been checked; distances are revealed.
    Answered,
    /// Every sampled record has been answered.
    Complete,
}
