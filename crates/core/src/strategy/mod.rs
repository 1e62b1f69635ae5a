use std::{fmt, mem, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    event::{Indices, StepKind},
    Result, SortVizError,
};

/// Identifier for one of the six registered sorting algorithms.
///
/// The enum doubles as the strategy registry: [`Strategy::ALL`] enumerates
/// the entries and [`Strategy::from_name`] resolves the identifier a caller
/// supplies on the command line or in a config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    Bubble,
    Insertion,
    Selection,
    Merge,
    Quick,
    Heap,
}

impl Strategy {
    /// Every registered strategy, in menu order.
    pub const ALL: [Strategy; 6] = [
        Strategy::Bubble,
        Strategy::Insertion,
        Strategy::Selection,
        Strategy::Merge,
        Strategy::Quick,
        Strategy::Heap,
    ];

    /// Stable lowercase identifier used for lookup and display.
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::Bubble => "bubble",
            Strategy::Insertion => "insertion",
            Strategy::Selection => "selection",
            Strategy::Merge => "merge",
            Strategy::Quick => "quick",
            Strategy::Heap => "heap",
        }
    }

    /// Resolves a strategy from its identifier, case-insensitively.
    pub fn from_name(name: &str) -> Result<Self> {
        let lowered = name.to_ascii_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|strategy| strategy.name() == lowered)
            .ok_or_else(|| SortVizError::UnknownStrategy(name.to_string()))
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = SortVizError;

    fn from_str(value: &str) -> Result<Self> {
        Self::from_name(value)
    }
}

/// Dispatcher over the per-algorithm step machines.
///
/// Every machine advances by exactly one observable step per call: it either
/// returns the comparison it is about to decide on, or applies a single
/// mutation and returns it, or reports exhaustion with `None`. Once a
/// machine has returned `None` it keeps returning `None`.
#[derive(Debug)]
pub(crate) enum Machine<T> {
    Bubble(BubbleSort),
    Insertion(InsertionSort<T>),
    Selection(SelectionSort),
    Merge(MergeSort<T>),
    Quick(QuickSort),
    Heap(HeapSort),
}

impl<T: Ord + Clone> Machine<T> {
    pub(crate) fn new(strategy: Strategy, len: usize) -> Self {
        match strategy {
            Strategy::Bubble => Self::Bubble(BubbleSort::new()),
            Strategy::Insertion => Self::Insertion(InsertionSort::new()),
            Strategy::Selection => Self::Selection(SelectionSort::new()),
            Strategy::Merge => Self::Merge(MergeSort::new(len)),
            Strategy::Quick => Self::Quick(QuickSort::new(len)),
            Strategy::Heap => Self::Heap(HeapSort::new(len)),
        }
    }

    pub(crate) fn step(&mut self, data: &mut [T]) -> Option<StepKind> {
        match self {
            Self::Bubble(machine) => machine.step(data),
            Self::Insertion(machine) => machine.step(data),
            Self::Selection(machine) => machine.step(data),
            Self::Merge(machine) => machine.step(data),
            Self::Quick(machine) => machine.step(data),
            Self::Heap(machine) => machine.step(data),
        }
    }
}

/// Bubble sort: pass `pass` bubbles the largest unsorted value to the back
/// of `data[..len - pass]`, one adjacent comparison at a time.
#[derive(Debug)]
pub(crate) struct BubbleSort {
    pass: usize,
    cursor: usize,
    judging: bool,
}

impl BubbleSort {
    fn new() -> Self {
        Self {
            pass: 0,
            cursor: 0,
            judging: false,
        }
    }

    fn step<T: Ord>(&mut self, data: &mut [T]) -> Option<StepKind> {
        let n = data.len();
        loop {
            if self.judging {
                // The comparison for (cursor, cursor + 1) was emitted on the
                // previous pull; decide it now.
                self.judging = false;
                let j = self.cursor;
                self.cursor += 1;
                if data[j] > data[j + 1] {
                    data.swap(j, j + 1);
                    return Some(StepKind::Mutate(Indices::pair(j, j + 1)));
                }
            } else {
                while self.pass < n && self.cursor + 1 >= n - self.pass {
                    self.pass += 1;
                    self.cursor = 0;
                }
                if self.pass >= n {
                    return None;
                }
                self.judging = true;
                return Some(StepKind::Compare(Indices::pair(self.cursor, self.cursor + 1)));
            }
        }
    }
}

/// Insertion sort. The key for the current pass travels with the state so a
/// suspended shift chain can resume exactly where it left off.
#[derive(Debug)]
pub(crate) struct InsertionSort<T> {
    outer: usize,
    cursor: isize,
    state: InsertionState<T>,
}

#[derive(Debug)]
enum InsertionState<T> {
    NextKey,
    Probe { key: T },
    Shift { key: T },
    Done,
}

impl<T: Ord + Clone> InsertionSort<T> {
    fn new() -> Self {
        Self {
            outer: 1,
            cursor: 0,
            state: InsertionState::NextKey,
        }
    }

    fn step(&mut self, data: &mut [T]) -> Option<StepKind> {
        loop {
            match mem::replace(&mut self.state, InsertionState::Done) {
                InsertionState::NextKey => {
                    if self.outer >= data.len() {
                        return None;
                    }
                    self.cursor = self.outer as isize - 1;
                    self.state = InsertionState::Probe {
                        key: data[self.outer].clone(),
                    };
                }
                InsertionState::Probe { key } => {
                    let j = self.cursor;
                    if j >= 0 && data[j as usize] > key {
                        self.state = InsertionState::Shift { key };
                        return Some(StepKind::Compare(Indices::pair(
                            j as usize,
                            j as usize + 1,
                        )));
                    }
                    // Probes that fail the test are silent; the key placement
                    // is always reported, even when nothing was shifted.
                    let slot = (j + 1) as usize;
                    data[slot] = key;
                    self.outer += 1;
                    self.state = InsertionState::NextKey;
                    return Some(StepKind::Mutate(Indices::one(slot)));
                }
                InsertionState::Shift { key } => {
                    // The shift reports the slot the value vacated, which is
                    // where the key is now headed.
                    let j = self.cursor as usize;
                    data[j + 1] = data[j].clone();
                    self.cursor -= 1;
                    self.state = InsertionState::Probe { key };
                    return Some(StepKind::Mutate(Indices::one(j)));
                }
                InsertionState::Done => return None,
            }
        }
    }
}

/// Selection sort. The running minimum updates silently; only the probe and
/// the end-of-pass swap are observable.
#[derive(Debug)]
pub(crate) struct SelectionSort {
    pass: usize,
    cursor: usize,
    min_index: usize,
    judging: bool,
}

impl SelectionSort {
    fn new() -> Self {
        Self {
            pass: 0,
            cursor: 1,
            min_index: 0,
            judging: false,
        }
    }

    fn step<T: Ord>(&mut self, data: &mut [T]) -> Option<StepKind> {
        let n = data.len();
        loop {
            if self.judging {
                self.judging = false;
                if data[self.cursor] < data[self.min_index] {
                    self.min_index = self.cursor;
                }
                self.cursor += 1;
            } else if self.cursor < n {
                self.judging = true;
                return Some(StepKind::Compare(Indices::pair(self.cursor, self.min_index)));
            } else {
                if self.pass >= n {
                    return None;
                }
                let emitted = if self.min_index != self.pass {
                    data.swap(self.pass, self.min_index);
                    Some(StepKind::Mutate(Indices::pair(self.pass, self.min_index)))
                } else {
                    None
                };
                self.pass += 1;
                self.min_index = self.pass;
                self.cursor = self.pass + 1;
                if emitted.is_some() {
                    return emitted;
                }
            }
        }
    }
}

/// Merge sort as an explicit recursion stack. `Split` frames replay the
/// divide phase (left half fully drained before the right, both before the
/// parent's merge); `Merge` frames hold the copied halves and emit one
/// placement per pull.
#[derive(Debug)]
pub(crate) struct MergeSort<T> {
    stack: Vec<MergeFrame<T>>,
}

#[derive(Debug)]
enum MergeFrame<T> {
    Split {
        start: usize,
        end: usize,
        stage: SplitStage,
    },
    Merge {
        end: usize,
        left: Vec<T>,
        right: Vec<T>,
        left_at: usize,
        right_at: usize,
        out: usize,
    },
}

#[derive(Debug, Clone, Copy)]
enum SplitStage {
    Enter,
    LeftSorted,
    RightSorted,
}

impl<T: Ord + Clone> MergeSort<T> {
    fn new(len: usize) -> Self {
        Self {
            stack: vec![MergeFrame::Split {
                start: 0,
                end: len,
                stage: SplitStage::Enter,
            }],
        }
    }

    fn step(&mut self, data: &mut [T]) -> Option<StepKind> {
        loop {
            match self.stack.pop()? {
                MergeFrame::Split { start, end, stage } => {
                    if end - start <= 1 {
                        continue;
                    }
                    let mid = (start + end) / 2;
                    match stage {
                        SplitStage::Enter => {
                            self.stack.push(MergeFrame::Split {
                                start,
                                end,
                                stage: SplitStage::LeftSorted,
                            });
                            self.stack.push(MergeFrame::Split {
                                start,
                                end: mid,
                                stage: SplitStage::Enter,
                            });
                        }
                        SplitStage::LeftSorted => {
                            self.stack.push(MergeFrame::Split {
                                start,
                                end,
                                stage: SplitStage::RightSorted,
                            });
                            self.stack.push(MergeFrame::Split {
                                start: mid,
                                end,
                                stage: SplitStage::Enter,
                            });
                        }
                        SplitStage::RightSorted => {
                            self.stack.push(MergeFrame::Merge {
                                end,
                                left: data[start..mid].to_vec(),
                                right: data[mid..end].to_vec(),
                                left_at: 0,
                                right_at: 0,
                                out: start,
                            });
                        }
                    }
                }
                MergeFrame::Merge {
                    end,
                    left,
                    right,
                    mut left_at,
                    mut right_at,
                    out,
                } => {
                    if out >= end {
                        continue;
                    }
                    // Stable merge: the left element wins ties.
                    let take_left = right_at >= right.len()
                        || (left_at < left.len() && left[left_at] <= right[right_at]);
                    if take_left {
                        data[out] = left[left_at].clone();
                        left_at += 1;
                    } else {
                        data[out] = right[right_at].clone();
                        right_at += 1;
                    }
                    self.stack.push(MergeFrame::Merge {
                        end,
                        left,
                        right,
                        left_at,
                        right_at,
                        out: out + 1,
                    });
                    return Some(StepKind::Mutate(Indices::one(out)));
                }
            }
        }
    }
}

/// Quick sort with Lomuto partitioning, pivot at the high end of the range.
/// Sub-ranges wait on a stack with the left range on top so recursion order
/// matches the classic formulation.
#[derive(Debug)]
pub(crate) struct QuickSort {
    pending: Vec<(isize, isize)>,
    active: Option<Partition>,
}

#[derive(Debug, Clone, Copy)]
struct Partition {
    low: isize,
    high: isize,
    boundary: isize,
    cursor: isize,
    judging: bool,
}

impl QuickSort {
    fn new(len: usize) -> Self {
        Self {
            pending: vec![(0, len as isize - 1)],
            active: None,
        }
    }

    fn step<T: Ord>(&mut self, data: &mut [T]) -> Option<StepKind> {
        loop {
            match self.active.as_mut() {
                None => {
                    let (low, high) = self.pending.pop()?;
                    if low < high {
                        self.active = Some(Partition {
                            low,
                            high,
                            boundary: low,
                            cursor: low,
                            judging: false,
                        });
                    }
                }
                Some(part) => {
                    if part.judging {
                        part.judging = false;
                        let j = part.cursor as usize;
                        let pivot = part.high as usize;
                        part.cursor += 1;
                        // The pivot slot is stationary during the scan, so
                        // comparing against it in place is exact.
                        if data[j] < data[pivot] {
                            let below = part.boundary as usize;
                            data.swap(below, j);
                            part.boundary += 1;
                            return Some(StepKind::Mutate(Indices::pair(below, j)));
                        }
                    } else if part.cursor < part.high {
                        part.judging = true;
                        return Some(StepKind::Compare(Indices::pair(
                            part.cursor as usize,
                            part.high as usize,
                        )));
                    } else {
                        let done = *part;
                        self.active = None;
                        data.swap(done.boundary as usize, done.high as usize);
                        self.pending.push((done.boundary + 1, done.high));
                        self.pending.push((done.low, done.boundary - 1));
                        return Some(StepKind::Mutate(Indices::pair(
                            done.boundary as usize,
                            done.high as usize,
                        )));
                    }
                }
            }
        }
    }
}

/// Heap sort: max-heap build by sift-down, then repeated extraction of the
/// root. Only swaps are observable; sift-down comparisons stay silent.
#[derive(Debug)]
pub(crate) struct HeapSort {
    state: HeapState,
}

#[derive(Debug, Clone, Copy)]
enum HeapState {
    Build { index: isize },
    BuildSift { index: isize, node: usize },
    ExtractSwap { last: usize },
    ExtractSift { last: usize, node: usize },
    Done,
}

impl HeapSort {
    fn new(len: usize) -> Self {
        let state = if len < 2 {
            HeapState::Done
        } else {
            HeapState::Build {
                index: len as isize / 2 - 1,
            }
        };
        Self { state }
    }

    fn step<T: Ord>(&mut self, data: &mut [T]) -> Option<StepKind> {
        loop {
            match self.state {
                HeapState::Build { index } => {
                    if index < 0 {
                        self.state = HeapState::ExtractSwap {
                            last: data.len() - 1,
                        };
                    } else {
                        self.state = HeapState::BuildSift {
                            index,
                            node: index as usize,
                        };
                    }
                }
                HeapState::BuildSift { index, node } => {
                    match sift_once(data, data.len(), node) {
                        Some(child) => {
                            self.state = HeapState::BuildSift { index, node: child };
                            return Some(StepKind::Mutate(Indices::pair(node, child)));
                        }
                        None => self.state = HeapState::Build { index: index - 1 },
                    }
                }
                HeapState::ExtractSwap { last } => {
                    data.swap(last, 0);
                    self.state = HeapState::ExtractSift { last, node: 0 };
                    return Some(StepKind::Mutate(Indices::pair(last, 0)));
                }
                HeapState::ExtractSift { last, node } => match sift_once(data, last, node) {
                    Some(child) => {
                        self.state = HeapState::ExtractSift { last, node: child };
                        return Some(StepKind::Mutate(Indices::pair(node, child)));
                    }
                    None => {
                        if last <= 1 {
                            self.state = HeapState::Done;
                        } else {
                            self.state = HeapState::ExtractSwap { last: last - 1 };
                        }
                    }
                },
                HeapState::Done => return None,
            }
        }
    }
}

/// One round of max-heap sift-down over `data[..limit]`. Performs at most a
/// single swap and returns the child index the walk moves to, or `None` when
/// the node already dominates its children.
fn sift_once<T: Ord>(data: &mut [T], limit: usize, node: usize) -> Option<usize> {
    let mut largest = node;
    let left = 2 * node + 1;
    let right = 2 * node + 2;
    if left < limit && data[left] > data[largest] {
        largest = left;
    }
    if right < limit && data[right] > data[largest] {
        largest = right;
    }
    if largest == node {
        return None;
    }
    data.swap(node, largest);
    Some(largest)
}

#[cfg(test)]
mod tests {
    use std::cmp::Ordering;

    use super::*;

    fn drain<T: Ord + Clone>(strategy: Strategy, data: &mut [T]) -> Vec<StepKind> {
        let mut machine = Machine::new(strategy, data.len());
        let mut kinds = Vec::new();
        while let Some(kind) = machine.step(data) {
            kinds.push(kind);
        }
        kinds
    }

    fn comparisons(kinds: &[StepKind]) -> usize {
        kinds.iter().filter(|kind| kind.is_compare()).count()
    }

    fn mutations(kinds: &[StepKind]) -> usize {
        kinds.iter().filter(|kind| kind.is_mutate()).count()
    }

    #[test]
    fn every_strategy_sorts_ascending() {
        for strategy in Strategy::ALL {
            let mut data = vec![5, 3, 8, 1, 9, 2, 7, 4, 6, 0];
            drain(strategy, &mut data);
            assert_eq!(
                data,
                vec![0, 1, 2, 3, 4, 5, 6, 7, 8, 9],
                "{strategy} left the array unsorted"
            );
        }
    }

    #[test]
    fn empty_and_singleton_arrays_emit_no_events() {
        for strategy in Strategy::ALL {
            let mut empty: Vec<u32> = Vec::new();
            assert!(drain(strategy, &mut empty).is_empty());

            let mut single = vec![7_u32];
            assert!(drain(strategy, &mut single).is_empty());
            assert_eq!(single, vec![7]);
        }
    }

    #[test]
    fn two_runs_emit_identical_sequences() {
        for strategy in Strategy::ALL {
            let input = vec![9, 4, 6, 2, 8, 1, 3, 7, 5];
            let mut first = input.clone();
            let mut second = input.clone();
            assert_eq!(
                drain(strategy, &mut first),
                drain(strategy, &mut second),
                "{strategy} was not deterministic"
            );
            assert_eq!(first, second);
        }
    }

    #[test]
    fn emitted_indices_stay_in_bounds() {
        for strategy in Strategy::ALL {
            let mut data = vec![4, 1, 3, 9, 7, 2, 8, 5, 6];
            let len = data.len();
            for kind in drain(strategy, &mut data) {
                let indices = match kind {
                    StepKind::Compare(indices) => indices,
                    StepKind::Mutate(indices) => indices,
                };
                assert!(!indices.is_empty(), "{strategy} emitted an empty event");
                for index in indices.iter() {
                    assert!(index < len, "{strategy} emitted out-of-bounds index {index}");
                }
            }
        }
    }

    #[test]
    fn bubble_matches_documented_scenario() {
        let mut data = vec![3, 1, 2];
        let mut machine: Machine<i32> = Machine::new(Strategy::Bubble, data.len());

        let expected = [
            (StepKind::Compare(Indices::pair(0, 1)), vec![3, 1, 2]),
            (StepKind::Mutate(Indices::pair(0, 1)), vec![1, 3, 2]),
            (StepKind::Compare(Indices::pair(1, 2)), vec![1, 3, 2]),
            (StepKind::Mutate(Indices::pair(1, 2)), vec![1, 2, 3]),
            (StepKind::Compare(Indices::pair(0, 1)), vec![1, 2, 3]),
        ];
        for (kind, snapshot) in &expected {
            assert_eq!(machine.step(&mut data), Some(*kind));
            assert_eq!(&data, snapshot);
        }
        assert_eq!(machine.step(&mut data), None);
        assert_eq!(machine.step(&mut data), None);
    }

    #[test]
    fn bubble_reversed_input_compares_every_pair() {
        let mut data: Vec<u32> = (1..=6).rev().collect();
        let kinds = drain(Strategy::Bubble, &mut data);
        // n(n-1)/2 comparisons, each one forcing a swap.
        assert_eq!(comparisons(&kinds), 15);
        assert_eq!(mutations(&kinds), 15);
        assert_eq!(data, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn insertion_shift_reports_the_vacated_slot() {
        let mut data = vec![2, 1];
        let mut machine: Machine<i32> = Machine::new(Strategy::Insertion, data.len());

        assert_eq!(
            machine.step(&mut data),
            Some(StepKind::Compare(Indices::pair(0, 1)))
        );
        assert_eq!(data, vec![2, 1]);

        // The shift duplicates 2 into the back slot and reports index 0,
        // where the key is headed.
        assert_eq!(
            machine.step(&mut data),
            Some(StepKind::Mutate(Indices::one(0)))
        );
        assert_eq!(data, vec![2, 2]);

        assert_eq!(
            machine.step(&mut data),
            Some(StepKind::Mutate(Indices::one(0)))
        );
        assert_eq!(data, vec![1, 2]);

        assert_eq!(machine.step(&mut data), None);
    }

    #[test]
    fn insertion_places_keys_without_probing_sorted_input() {
        let mut data = vec![1, 2, 3];
        let kinds = drain(Strategy::Insertion, &mut data);
        assert_eq!(
            kinds,
            vec![
                StepKind::Mutate(Indices::one(1)),
                StepKind::Mutate(Indices::one(2)),
            ]
        );
    }

    #[test]
    fn selection_probes_sorted_input_without_swapping() {
        let mut data = vec![1, 2, 3, 4];
        let kinds = drain(Strategy::Selection, &mut data);
        assert_eq!(comparisons(&kinds), 6);
        assert_eq!(mutations(&kinds), 0);
        assert_eq!(data, vec![1, 2, 3, 4]);
    }

    #[test]
    fn selection_compares_against_the_running_minimum() {
        let mut data = vec![3, 1, 2];
        let kinds = drain(Strategy::Selection, &mut data);
        assert_eq!(
            kinds,
            vec![
                StepKind::Compare(Indices::pair(1, 0)),
                StepKind::Compare(Indices::pair(2, 1)),
                StepKind::Mutate(Indices::pair(0, 1)),
                StepKind::Compare(Indices::pair(2, 1)),
                StepKind::Mutate(Indices::pair(1, 2)),
            ]
        );
        assert_eq!(data, vec![1, 2, 3]);
    }

    #[test]
    fn merge_emits_one_placement_per_output_slot() {
        let mut data = vec![4, 3, 2, 1];
        let kinds = drain(Strategy::Merge, &mut data);
        // Two leaf merges of width two plus the final merge of width four.
        assert_eq!(kinds.len(), 8);
        assert!(kinds.iter().all(StepKind::is_mutate));
        assert_eq!(data, vec![1, 2, 3, 4]);
    }

    #[test]
    fn merge_drains_children_before_the_parent() {
        let mut data = vec![3, 1, 2];
        let kinds = drain(Strategy::Merge, &mut data);
        assert_eq!(
            kinds,
            vec![
                StepKind::Mutate(Indices::one(1)),
                StepKind::Mutate(Indices::one(2)),
                StepKind::Mutate(Indices::one(0)),
                StepKind::Mutate(Indices::one(1)),
                StepKind::Mutate(Indices::one(2)),
            ]
        );
        assert_eq!(data, vec![1, 2, 3]);
    }

    /// Orders by key alone so equal keys stay distinguishable by id.
    #[derive(Debug, Clone, PartialEq, Eq)]
    struct Tagged {
        key: u32,
        id: u32,
    }

    impl PartialOrd for Tagged {
        fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
            Some(self.cmp(other))
        }
    }

    impl Ord for Tagged {
        fn cmp(&self, other: &Self) -> Ordering {
            self.key.cmp(&other.key)
        }
    }

    #[test]
    fn merge_preserves_the_order_of_equal_keys() {
        let tag = |key, id| Tagged { key, id };
        let mut data = vec![tag(2, 0), tag(1, 0), tag(2, 1), tag(1, 1), tag(1, 2)];
        drain(Strategy::Merge, &mut data);
        assert_eq!(
            data,
            vec![tag(1, 0), tag(1, 1), tag(1, 2), tag(2, 0), tag(2, 1)]
        );
    }

    #[test]
    fn quick_matches_documented_scenario() {
        let mut data = vec![2, 1];
        let mut machine: Machine<i32> = Machine::new(Strategy::Quick, data.len());

        // Pivot is 1 at index 1; the lone probe fails, then the pivot swaps
        // into place.
        assert_eq!(
            machine.step(&mut data),
            Some(StepKind::Compare(Indices::pair(0, 1)))
        );
        assert_eq!(data, vec![2, 1]);
        assert_eq!(
            machine.step(&mut data),
            Some(StepKind::Mutate(Indices::pair(0, 1)))
        );
        assert_eq!(data, vec![1, 2]);
        assert_eq!(machine.step(&mut data), None);
    }

    #[test]
    fn quick_recurses_left_range_first() {
        let mut data = vec![3, 1, 2];
        let kinds = drain(Strategy::Quick, &mut data);
        assert_eq!(
            kinds,
            vec![
                StepKind::Compare(Indices::pair(0, 2)),
                StepKind::Compare(Indices::pair(1, 2)),
                StepKind::Mutate(Indices::pair(0, 1)),
                StepKind::Mutate(Indices::pair(1, 2)),
            ]
        );
        assert_eq!(data, vec![1, 2, 3]);
    }

    #[test]
    fn heap_emits_mutations_only() {
        let mut data = vec![5, 3, 8, 1, 9, 2, 7];
        let kinds = drain(Strategy::Heap, &mut data);
        assert!(kinds.iter().all(StepKind::is_mutate));
        assert_eq!(data, vec![1, 2, 3, 5, 7, 8, 9]);
    }

    #[test]
    fn heap_matches_documented_small_run() {
        let mut data = vec![1, 2];
        let mut machine: Machine<i32> = Machine::new(Strategy::Heap, data.len());

        // Build swaps the root with its larger child, extraction swaps it
        // straight back.
        assert_eq!(
            machine.step(&mut data),
            Some(StepKind::Mutate(Indices::pair(0, 1)))
        );
        assert_eq!(data, vec![2, 1]);
        assert_eq!(
            machine.step(&mut data),
            Some(StepKind::Mutate(Indices::pair(1, 0)))
        );
        assert_eq!(data, vec![1, 2]);
        assert_eq!(machine.step(&mut data), None);
    }

    #[test]
    fn strategy_names_round_trip() {
        for strategy in Strategy::ALL {
            assert_eq!(Strategy::from_name(strategy.name()).unwrap(), strategy);
            assert_eq!(strategy.name().parse::<Strategy>().unwrap(), strategy);
        }
        assert_eq!(Strategy::from_name("QUICK").unwrap(), Strategy::Quick);

        let err = Strategy::from_name("bogo").unwrap_err();
        assert!(format!("{err}").contains("bogo"));
    }
}
