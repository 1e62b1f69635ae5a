use serde::{Deserialize, Serialize};

use crate::{
    event::{StepEvent, StepKind},
    strategy::{Machine, Strategy},
};

/// Running totals for a sort in progress.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    pub events: usize,
    pub comparisons: usize,
    pub mutations: usize,
}

impl RunSummary {
    fn record(&mut self, kind: &StepKind) {
        self.events += 1;
        match kind {
            StepKind::Compare(_) => self.comparisons += 1,
            StepKind::Mutate(_) => self.mutations += 1,
        }
    }
}

/// A single in-progress sort over a caller-provided array.
///
/// The run borrows the array exclusively until it is dropped, so nothing
/// else can observe or mutate the data mid-sort. Work happens only inside
/// [`SortRun::next_step`]: each call advances the algorithm to its next
/// observable step, applies any mutation, and hands back the event with a
/// snapshot borrowed from the live array. The stream is finite and fused —
/// after the array is fully sorted every further call returns `None` — and
/// a run abandoned part-way simply leaves the array in the intermediate
/// state of its last consumed event.
#[derive(Debug)]
pub struct SortRun<'a, T> {
    strategy: Strategy,
    data: &'a mut [T],
    machine: Machine<T>,
    summary: RunSummary,
}

impl<'a, T: Ord + Clone> SortRun<'a, T> {
    pub fn new(strategy: Strategy, data: &'a mut [T]) -> Self {
        let machine = Machine::new(strategy, data.len());
        Self {
            strategy,
            data,
            machine,
            summary: RunSummary::default(),
        }
    }

    /// The strategy driving this run.
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Read-only view of the working array in its current state.
    pub fn data(&self) -> &[T] {
        self.data
    }

    /// Totals accumulated over the events pulled so far.
    pub fn summary(&self) -> RunSummary {
        self.summary
    }

    /// Advances the sort by one observable step.
    ///
    /// Returns `None` once the algorithm has run to completion, at which
    /// point the array is sorted ascending.
    pub fn next_step(&mut self) -> Option<StepEvent<'_, T>> {
        let kind = self.machine.step(self.data)?;
        self.summary.record(&kind);
        Some(StepEvent {
            snapshot: self.data,
            kind,
        })
    }

    /// Drains the remaining events without observing them and returns the
    /// final totals.
    pub fn run_to_end(&mut self) -> RunSummary {
        while self.next_step().is_some() {}
        self.summary
    }
}
