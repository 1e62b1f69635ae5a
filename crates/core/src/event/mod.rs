use std::fmt;

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Set of at most two array indices touched by a single step.
///
/// Comparisons probe two positions, swaps touch two, shifts and merge
/// placements touch one. A pair built from two equal indices collapses to a
/// single entry so the type behaves as a set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Indices {
    slots: [usize; 2],
    len: u8,
}

impl Indices {
    /// The empty set.
    pub const fn none() -> Self {
        Self {
            slots: [0; 2],
            len: 0,
        }
    }

    /// A single index.
    pub const fn one(index: usize) -> Self {
        Self {
            slots: [index, 0],
            len: 1,
        }
    }

    /// Two indices; equal values collapse to [`Indices::one`].
    pub const fn pair(a: usize, b: usize) -> Self {
        if a == b {
            Self::one(a)
        } else {
            Self {
                slots: [a, b],
                len: 2,
            }
        }
    }

    pub fn len(&self) -> usize {
        self.len as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn contains(&self, index: usize) -> bool {
        self.as_slice().contains(&index)
    }

    /// The stored indices in emission order.
    pub fn as_slice(&self) -> &[usize] {
        &self.slots[..self.len as usize]
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.as_slice().iter().copied()
    }
}

impl fmt::Display for Indices {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (position, index) in self.iter().enumerate() {
            if position > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{index}")?;
        }
        write!(f, "]")
    }
}

impl Serialize for Indices {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.as_slice())
    }
}

impl<'de> Deserialize<'de> for Indices {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Vec::<usize>::deserialize(deserializer)?;
        match raw.as_slice() {
            [] => Ok(Self::none()),
            [a] => Ok(Self::one(*a)),
            [a, b] => Ok(Self::pair(*a, *b)),
            _ => Err(DeError::invalid_length(raw.len(), &"at most two indices")),
        }
    }
}

/// What a single observable step did to the working array.
///
/// A step is either a comparison probe or a mutation, never both, so the
/// alternative is modelled as an enum rather than as two index sets that
/// must be checked for mutual exclusion at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StepKind {
    /// Two positions are being compared; the array did not change.
    Compare(Indices),
    /// Values changed (or were confirmed in final position) at the carried
    /// indices; the change has already been applied to the array.
    Mutate(Indices),
}

impl StepKind {
    /// Indices under comparison; empty for mutation steps.
    pub fn comparing(&self) -> Indices {
        match self {
            Self::Compare(indices) => *indices,
            Self::Mutate(_) => Indices::none(),
        }
    }

    /// Indices whose values changed; empty for comparison steps.
    pub fn modified(&self) -> Indices {
        match self {
            Self::Compare(_) => Indices::none(),
            Self::Mutate(indices) => *indices,
        }
    }

    pub fn is_compare(&self) -> bool {
        matches!(self, Self::Compare(_))
    }

    pub fn is_mutate(&self) -> bool {
        matches!(self, Self::Mutate(_))
    }
}

/// A single event pulled from a sort run.
///
/// The snapshot borrows the caller's own backing storage, so it always
/// reflects the live array: mutations for this step have already been
/// applied by the time the event is observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StepEvent<'a, T> {
    pub snapshot: &'a [T],
    pub kind: StepKind,
}

impl<T> StepEvent<'_, T> {
    pub fn comparing(&self) -> Indices {
        self.kind.comparing()
    }

    pub fn modified(&self) -> Indices {
        self.kind.modified()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pair_collapses_equal_indices() {
        let set = Indices::pair(4, 4);
        assert_eq!(set.len(), 1);
        assert_eq!(set.as_slice(), &[4]);

        let set = Indices::pair(1, 3);
        assert_eq!(set.len(), 2);
        assert!(set.contains(1));
        assert!(set.contains(3));
        assert!(!set.contains(2));
    }

    #[test]
    fn kinds_expose_exclusive_index_sets() {
        let compare = StepKind::Compare(Indices::pair(0, 1));
        assert!(compare.is_compare());
        assert_eq!(compare.comparing().as_slice(), &[0, 1]);
        assert!(compare.modified().is_empty());

        let mutate = StepKind::Mutate(Indices::one(2));
        assert!(mutate.is_mutate());
        assert!(mutate.comparing().is_empty());
        assert_eq!(mutate.modified().as_slice(), &[2]);
    }

    #[test]
    fn indices_serialize_as_plain_lists() {
        let json = serde_json::to_string(&Indices::pair(2, 5)).unwrap();
        assert_eq!(json, "[2,5]");

        let parsed: Indices = serde_json::from_str("[7]").unwrap();
        assert_eq!(parsed, Indices::one(7));

        let empty: Indices = serde_json::from_str("[]").unwrap();
        assert!(empty.is_empty());

        assert!(serde_json::from_str::<Indices>("[1,2,3]").is_err());
    }

    #[test]
    fn step_kind_round_trips_through_json() {
        let kind = StepKind::Mutate(Indices::pair(3, 0));
        let json = serde_json::to_string(&kind).unwrap();
        let back: StepKind = serde_json::from_str(&json).unwrap();
        assert_eq!(kind, back);
    }
}
