//! Best-first A* search over an arbitrary node type, in the manner of
//! [pathfinding's astar function](https://docs.rs/pathfinding/latest/pathfinding/directed/astar/index.html),
//! with fully deterministic pop order and an optional bound on the number of expansions.
use fxhash::FxBuildHasher;
use indexmap::map::Entry::{Occupied, Vacant};
use indexmap::IndexMap;
use log::{debug, warn};
use num_traits::{SaturatingAdd, Zero};
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::hash::Hash;

use crate::error::SearchError;

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

struct SmallestCostHolder<K> {
    estimated_cost: K,
    cost: K,
    index: usize,
    sequence: usize,
}

impl<K: PartialEq> Eq for SmallestCostHolder<K> {}

impl<K: PartialEq> PartialEq for SmallestCostHolder<K> {
    fn eq(&self, other: &Self) -> bool {
        self.estimated_cost.eq(&other.estimated_cost)
            && self.cost.eq(&other.cost)
            && self.sequence == other.sequence
    }
}

impl<K: Ord> PartialOrd for SmallestCostHolder<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: Ord> Ord for SmallestCostHolder<K> {
    /// The max-heap pops the smallest estimated cost first. Ties go to the largest cost so far
    /// (the node closest to the goal), then to the entry pushed first.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .estimated_cost
            .cmp(&self.estimated_cost)
            .then_with(|| self.cost.cmp(&other.cost))
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

fn reverse_path<N, C>(parents: &FxIndexMap<N, (usize, C)>, start: usize) -> Vec<N>
where
    N: Eq + Hash + Clone,
{
    let mut i = start;
    let mut path: Vec<N> = std::iter::from_fn(|| {
        parents.get_index(i).map(|(node, &(parent, _))| {
            i = parent;
            node.clone()
        })
    })
    .collect();
    path.reverse();
    path
}

/// Records `cost` for `node` reached from `parent` unless a cost at least as good is already
/// known. On improvement returns the node's index and its heuristic value.
fn relax<N, C, FH>(
    parents: &mut FxIndexMap<N, (usize, C)>,
    node: N,
    parent: usize,
    cost: C,
    heuristic: &mut FH,
) -> Option<(usize, C)>
where
    N: Eq + Hash,
    C: Ord + Copy,
    FH: FnMut(&N) -> C,
{
    match parents.entry(node) {
        Vacant(e) => {
            let improved = (e.index(), heuristic(e.key()));
            e.insert((parent, cost));
            Some(improved)
        }
        Occupied(mut e) if cost < e.get().1 => {
            e.insert((parent, cost));
            Some((e.index(), heuristic(e.key())))
        }
        Occupied(_) => None,
    }
}

/// Runs A* from `start` until a node satisfying `success` is popped.
///
/// Returns the path including both ends together with its cost, `Ok(None)` once the frontier is
/// exhausted, or [SearchError::SearchBudgetExceeded] if more than `max_expansions` nodes would
/// have to be expanded.
///
/// Costs and priorities are summed with saturation, so huge heuristic values order last instead
/// of overflowing.
pub fn astar<N, C, FN, IN, FH, FS>(
    start: &N,
    mut successors: FN,
    mut heuristic: FH,
    mut success: FS,
    max_expansions: Option<usize>,
) -> Result<Option<(Vec<N>, C)>, SearchError>
where
    N: Eq + Hash + Clone,
    C: Zero + Ord + Copy + SaturatingAdd,
    FN: FnMut(&N) -> IN,
    IN: IntoIterator<Item = (N, C)>,
    FH: FnMut(&N) -> C,
    FS: FnMut(&N) -> bool,
{
    let mut to_see = BinaryHeap::new();
    let mut sequence = 0;
    to_see.push(SmallestCostHolder {
        estimated_cost: Zero::zero(),
        cost: Zero::zero(),
        index: 0,
        sequence,
    });
    let mut parents: FxIndexMap<N, (usize, C)> = FxIndexMap::default();
    parents.insert(start.clone(), (usize::MAX, Zero::zero()));
    let mut expansions = 0;
    while let Some(SmallestCostHolder { cost, index, .. }) = to_see.pop() {
        let successors = {
            let Some((node, &(_, c))) = parents.get_index(index) else {
                continue;
            };
            if success(node) {
                debug!(
                    "Goal popped after {} expansions, {} nodes discovered",
                    expansions,
                    parents.len()
                );
                let path = reverse_path(&parents, index);
                return Ok(Some((path, cost)));
            }
            // A node is pushed again whenever a cheaper way to it is found; only the
            // entry carrying the best known cost is expanded.
            if cost > c {
                continue;
            }
            if max_expansions.is_some_and(|max| expansions >= max) {
                warn!("Expansion budget of {} exhausted", expansions);
                return Err(SearchError::SearchBudgetExceeded { expansions });
            }
            expansions += 1;
            successors(node)
        };
        for (successor, move_cost) in successors {
            let new_cost = cost.saturating_add(&move_cost);
            let Some((n, h)) = relax(&mut parents, successor, index, new_cost, &mut heuristic)
            else {
                continue;
            };
            sequence += 1;
            to_see.push(SmallestCostHolder {
                estimated_cost: new_cost.saturating_add(&h),
                cost: new_cost,
                index: n,
                sequence,
            });
        }
    }
    debug!(
        "Frontier exhausted after {} expansions, {} nodes discovered",
        expansions,
        parents.len()
    );
    Ok(None)
}
