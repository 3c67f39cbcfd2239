use crate::search::frontier::{Frontier, FrontierEntry};
use crate::search::labels::{Distance, DistanceLabels, Rank, UNREACHED};
use crate::search::stats::Counters;

/// Which rule fired when relaxing one edge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relaxation {
    /// The candidate became the new d1. `demoted` is the old d1 when it was
    /// finite and moved down into d2.
    ImprovedPrimary { demoted: Option<Distance> },
    /// The candidate fell strictly between d1 and d2 and became the new d2
    ImprovedSecondary,
    /// The candidate equals d1 or is not below d2
    Unchanged,
}

/// Schedule an entry, counting it only if the frontier queued it
fn schedule<F: Frontier>(frontier: &mut F, counters: &mut Counters, entry: FrontierEntry) {
    if frontier.push(entry) {
        counters.pushes += 1;
    }
}

/// Offer `candidate` as a path length to `slot` and apply the first
/// matching rule:
///
/// 1. `candidate < d1`: old d1 drops into d2, candidate becomes d1.
/// 2. `d1 < candidate < d2`: candidate becomes d2.
/// 3. otherwise nothing changes.
///
/// Every changed label is scheduled on the frontier at its new value.
pub fn relax<F: Frontier>(
    labels: &mut DistanceLabels,
    frontier: &mut F,
    counters: &mut Counters,
    slot: usize,
    candidate: Distance,
) -> Relaxation {
    counters.edge_relaxations += 1;

    let d1 = labels.get(slot, Rank::Primary);
    let d2 = labels.get(slot, Rank::Secondary);

    if candidate < d1 {
        let demoted = (d1 != UNREACHED && d1 < d2).then_some(d1);

        labels.set(slot, Rank::Primary, candidate);
        counters.d1_updates += 1;
        schedule(
            frontier,
            counters,
            FrontierEntry::new(candidate, slot, Rank::Primary),
        );

        if let Some(old) = demoted {
            labels.set(slot, Rank::Secondary, old);
            counters.d2_updates += 1;
            schedule(
                frontier,
                counters,
                FrontierEntry::new(old, slot, Rank::Secondary),
            );
        }

        Relaxation::ImprovedPrimary { demoted }
    } else if d1 < candidate && candidate < d2 {
        labels.set(slot, Rank::Secondary, candidate);
        counters.d2_updates += 1;
        schedule(
            frontier,
            counters,
            FrontierEntry::new(candidate, slot, Rank::Secondary),
        );

        Relaxation::ImprovedSecondary
    } else {
        Relaxation::Unchanged
    }
}
