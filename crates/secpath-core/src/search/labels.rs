use serde::Serialize;

/// Path length accumulated during a search
pub type Distance = u64;

/// Sentinel for a label that has not been reached yet
pub const UNREACHED: Distance = Distance::MAX;

/// Which of the two per-node labels an entry or update pertains to
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Rank {
    /// Shortest distance (d1)
    Primary,
    /// Strictly-second-shortest distance (d2)
    Secondary,
}

impl Rank {
    pub const ALL: [Rank; 2] = [Rank::Primary, Rank::Secondary];

    pub(crate) fn index(self) -> usize {
        match self {
            Rank::Primary => 0,
            Rank::Secondary => 1,
        }
    }
}

/// Shortest and second-shortest distance for one node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct LabelPair {
    pub shortest: Option<Distance>,
    pub second_shortest: Option<Distance>,
}

/// Per-node d1/d2 labels, indexed by graph slot.
///
/// Invariant: `d1 <= d2` for every node, and `d1 < d2` once both are reached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceLabels {
    d: [Vec<Distance>; 2],
}

impl DistanceLabels {
    pub fn new(node_count: usize) -> Self {
        Self {
            d: [vec![UNREACHED; node_count], vec![UNREACHED; node_count]],
        }
    }

    pub fn len(&self) -> usize {
        self.d[0].len()
    }

    pub fn is_empty(&self) -> bool {
        self.d[0].is_empty()
    }

    /// Raw label value; `UNREACHED` when the label is infinite
    pub fn get(&self, slot: usize, rank: Rank) -> Distance {
        self.d[rank.index()][slot]
    }

    pub(crate) fn set(&mut self, slot: usize, rank: Rank, value: Distance) {
        self.d[rank.index()][slot] = value;
    }

    pub fn pair(&self, slot: usize) -> LabelPair {
        LabelPair {
            shortest: finite(self.get(slot, Rank::Primary)),
            second_shortest: finite(self.get(slot, Rank::Secondary)),
        }
    }

    /// Check the ordering invariant for every node
    pub fn holds_invariant(&self) -> bool {
        self.d[0].iter().zip(&self.d[1]).all(|(&d1, &d2)| {
            if d2 == UNREACHED {
                true
            } else {
                d1 < d2
            }
        })
    }
}

/// Map the unreached sentinel to `None`
pub fn finite(value: Distance) -> Option<Distance> {
    (value != UNREACHED).then_some(value)
}
