//! Picks the records for one quiz so that no Ohio location repeats.

use std::collections::HashSet;

use rand::Rng;
use thiserror::Error;
use tracing::{debug, warn};

use crate::models::ComparisonRecord;
use crate::shuffle::shuffle;

pub const DEFAULT_RETRY_BUDGET: usize = 1000;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum SampleError {
    #[error("there are no records to sample from")]
    NoRecords,
    #[error(
        "cannot build a quiz of {requested} questions without repeating an Ohio location; \
         only {available} found"
    )]
    Insufficient { requested: usize, available: usize },
}

/// Draws `target_count` records whose Ohio location names are pairwise disjoint.
///
/// Records are drawn uniformly at random and kept when neither Ohio name has
/// been used yet. Each rejected draw spends one unit of `retry_budget`, and so
/// does starting over after a pass runs into a dead end where no remaining
/// record fits. Once the budget is gone a depth-first search over a shuffled
/// ordering settles the question, so sampling fails only when no disjoint
/// set of `target_count` records exists.
pub fn sample<R: Rng + ?Sized>(
    records: &[ComparisonRecord],
    target_count: usize,
    retry_budget: usize,
    rng: &mut R,
) -> Result<Vec<ComparisonRecord>, SampleError> {
    if records.is_empty() {
        return Err(SampleError::NoRecords);
    }
    if target_count == 0 {
        return Ok(Vec::new());
    }
    if target_count > records.len() {
        warn!(requested = target_count, records = records.len(), "not enough records for quiz");
        return Err(SampleError::Insufficient {
            requested: target_count,
            available: records.len(),
        });
    }

    let mut picker = Picker::new(records, target_count);
    let mut spent = 0;
    let mut passes = 0;

    while spent < retry_budget {
        passes += 1;
        picker.clear();

        while !picker.is_full() && spent < retry_budget {
            let index = rng.random_range(0..records.len());
            if picker.try_accept(index) {
                continue;
            }
            spent += 1;
            if !picker.has_candidate() {
                break;
            }
        }

        if picker.is_full() {
            debug!(passes, spent, "random draw phase filled the quiz");
            return Ok(picker.into_records());
        }
        spent += 1;
    }

    debug!(passes, spent, best = picker.best, "retry budget spent, searching");

    let mut order: Vec<usize> = (0..records.len()).collect();
    shuffle(&mut order, rng);
    picker.clear();

    if picker.search(&order, 0) {
        return Ok(picker.into_records());
    }

    warn!(
        requested = target_count,
        available = picker.best,
        "ran out of disjoint records"
    );
    Err(SampleError::Insufficient {
        requested: target_count,
        available: picker.best,
    })
}

struct Picker<'a> {
    records: &'a [ComparisonRecord],
    target_count: usize,
    chosen: Vec<usize>,
    used_names: HashSet<&'a str>,
    /// Largest disjoint selection seen so far.
    best: usize,
}

impl<'a> Picker<'a> {
    fn new(records: &'a [ComparisonRecord], target_count: usize) -> Self {
        Self {
            records,
            target_count,
            chosen: Vec::with_capacity(target_count),
            used_names: HashSet::new(),
            best: 0,
        }
    }

    fn is_full(&self) -> bool {
        self.chosen.len() >= self.target_count
    }

    fn clear(&mut self) {
        self.chosen.clear();
        self.used_names.clear();
    }

    fn fits(&self, index: usize) -> bool {
        self.records[index]
            .ohio_names()
            .iter()
            .all(|name| !self.used_names.contains(name))
    }

    fn has_candidate(&self) -> bool {
        (0..self.records.len()).any(|index| self.fits(index))
    }

    fn try_accept(&mut self, index: usize) -> bool {
        if !self.fits(index) {
            return false;
        }

        let records = self.records;
        self.used_names.extend(records[index].ohio_names());
        self.chosen.push(index);
        self.best = self.best.max(self.chosen.len());
        true
    }

    fn undo(&mut self) {
        let records = self.records;
        if let Some(index) = self.chosen.pop() {
            for name in records[index].ohio_names() {
                self.used_names.remove(name);
            }
        }
    }

    /// Extend the current selection from `order[start..]`, backtracking on
    /// dead ends. Leaves a full selection in place on success.
    fn search(&mut self, order: &[usize], start: usize) -> bool {
        if self.is_full() {
            return true;
        }

        let needed = self.target_count - self.chosen.len();
        for position in start..order.len() {
            if order.len() - position < needed {
                break;
            }
            if self.try_accept(order[position]) {
                if self.search(order, position + 1) {
                    return true;
                }
                self.undo();
            }
        }
        false
    }

    fn into_records(self) -> Vec<ComparisonRecord> {
        self.chosen
            .into_iter()
            .map(|index| self.records[index].clone())
            .collect()
    }
}
