//! Generic search cores over any hashable node type. The maze solvers bind these to
//! [Coordinate](crate::coordinate::Coordinate)s, but nothing here knows about grids.
//!
//! Both searches record every pop into [SearchOutcome::visited] and stop as soon as a node
//! satisfying `success` is popped. The returned path runs from the first node after `start` up to
//! and including the goal; the start itself is left out.
use fxhash::{FxBuildHasher, FxHashMap, FxHashSet};
use indexmap::map::Entry::{Occupied, Vacant};
use indexmap::IndexMap;
use log::debug;
use num_traits::Zero;

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::hash::Hash;

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

/// What a search produced: the path if the goal was reached, and the nodes in the order they were
/// taken off the frontier.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchOutcome<N> {
    pub path: Option<Vec<N>>,
    pub visited: Vec<N>,
}

impl<N> SearchOutcome<N> {
    pub fn is_solved(&self) -> bool {
        self.path.is_some()
    }

    /// Number of steps on the path, if there is one.
    pub fn path_len(&self) -> Option<usize> {
        self.path.as_ref().map(Vec::len)
    }
}

/// Walks parent links back from `goal` until a node without parent, then reverses. The node
/// without parent (the start) is not part of the result.
fn reverse_path<N, F>(goal: N, mut parent: F) -> Vec<N>
where
    F: FnMut(&N) -> Option<N>,
{
    let mut current = goal;
    let mut path: Vec<N> = std::iter::from_fn(|| {
        let next = parent(&current)?;
        Some(std::mem::replace(&mut current, next))
    })
    .collect();
    path.reverse();
    path
}

/// Depth-first search with a LIFO frontier.
///
/// `successors` must yield neighbours in priority order; they are pushed in reverse so that the
/// first one is popped first. Nodes may sit on the stack several times. Duplicates are discarded
/// when popped, so each node is recorded in `visited` at most once. A node's parent is the last
/// node that pushed it.
pub fn dfs<N, FN, IN, FS>(start: &N, mut successors: FN, mut success: FS) -> SearchOutcome<N>
where
    N: Eq + Hash + Clone,
    FN: FnMut(&N) -> IN,
    IN: IntoIterator<Item = N>,
    FS: FnMut(&N) -> bool,
{
    let mut stack = vec![start.clone()];
    let mut parents: FxHashMap<N, N> = FxHashMap::default();
    let mut finalized: FxHashSet<N> = FxHashSet::default();
    let mut visited = Vec::new();

    while let Some(node) = stack.pop() {
        if !finalized.insert(node.clone()) {
            continue;
        }
        visited.push(node.clone());

        if success(&node) {
            debug!("DFS reached goal after {} pops", visited.len());
            let path = reverse_path(node, |n| parents.get(n).cloned());
            return SearchOutcome {
                path: Some(path),
                visited,
            };
        }

        let mut next: Vec<N> = successors(&node)
            .into_iter()
            .filter(|n| !finalized.contains(n))
            .collect();
        next.reverse();
        for n in next {
            parents.insert(n.clone(), node.clone());
            stack.push(n);
        }
    }
    debug!("DFS exhausted the frontier after {} pops", visited.len());
    SearchOutcome {
        path: None,
        visited,
    }
}

struct SmallestCostHolder<K> {
    estimated_cost: K,
    cost: K,
    index: usize,
}

impl<K: PartialEq> Eq for SmallestCostHolder<K> {}

impl<K: PartialEq> PartialEq for SmallestCostHolder<K> {
    fn eq(&self, other: &Self) -> bool {
        self.estimated_cost.eq(&other.estimated_cost) && self.cost.eq(&other.cost)
    }
}

impl<K: Ord> PartialOrd for SmallestCostHolder<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: Ord> Ord for SmallestCostHolder<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        // First orders per estimated cost, then creates subordering
        // based on cost, favoring exploration of smallest cost nodes first
        match other.estimated_cost.cmp(&self.estimated_cost) {
            Ordering::Equal => self.cost.cmp(&other.cost),
            s => s,
        }
    }
}

/// A* with a binary heap ordered by ascending `g + h`.
///
/// Every pop is appended to `visited`, including stale heap entries for nodes that were later
/// reached more cheaply, so a node can appear more than once. Expansion always uses the best
/// known cost of the popped node. A successor is (re)parented only when the new cost is strictly
/// lower than the recorded one.
pub fn astar<N, C, FN, IN, FH, FS>(
    start: &N,
    mut successors: FN,
    mut heuristic: FH,
    mut success: FS,
) -> SearchOutcome<N>
where
    N: Eq + Hash + Clone,
    C: Zero + Ord + Copy,
    FN: FnMut(&N) -> IN,
    IN: IntoIterator<Item = (N, C)>,
    FH: FnMut(&N) -> C,
    FS: FnMut(&N) -> bool,
{
    let mut to_see = BinaryHeap::new();
    to_see.push(SmallestCostHolder {
        estimated_cost: Zero::zero(),
        cost: Zero::zero(),
        index: 0,
    });
    // Node -> (parent index, best known cost). The start has no parent.
    let mut parents: FxIndexMap<N, (usize, C)> = FxIndexMap::default();
    parents.insert(start.clone(), (usize::MAX, Zero::zero()));
    let mut visited = Vec::new();

    while let Some(SmallestCostHolder { index, .. }) = to_see.pop() {
        let Some((node, &(_, cost))) = parents.get_index(index) else {
            continue;
        };
        let node = node.clone();
        visited.push(node.clone());

        if success(&node) {
            debug!("A* reached goal after {} pops", visited.len());
            let path: Vec<N> = reverse_path(index, |&i| {
                parents
                    .get_index(i)
                    .map(|(_, &(p, _))| p)
                    .filter(|&p| p != usize::MAX)
            })
            .into_iter()
            .filter_map(|i| parents.get_index(i).map(|(n, _)| n.clone()))
            .collect();
            return SearchOutcome {
                path: Some(path),
                visited,
            };
        }

        for (successor, move_cost) in successors(&node) {
            let new_cost = cost + move_cost;
            let h; // heuristic(&successor)
            let n; // index for successor
            match parents.entry(successor) {
                Vacant(e) => {
                    h = heuristic(e.key());
                    n = e.index();
                    e.insert((index, new_cost));
                }
                Occupied(mut e) => {
                    if e.get().1 > new_cost {
                        h = heuristic(e.key());
                        n = e.index();
                        e.insert((index, new_cost));
                    } else {
                        continue;
                    }
                }
            }

            to_see.push(SmallestCostHolder {
                estimated_cost: new_cost + h,
                cost: new_cost,
                index: n,
            });
        }
    }
    debug!("A* exhausted the frontier after {} pops", visited.len());
    SearchOutcome {
        path: None,
        visited,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Line graph 0 - 1 - ... - 9.
    fn line_successors(n: &i32) -> Vec<i32> {
        [n + 1, n - 1]
            .into_iter()
            .filter(|x| (0..10).contains(x))
            .collect()
    }

    #[test]
    fn reverse_path_excludes_root() {
        let parents: FxHashMap<i32, i32> = [(3, 2), (2, 1), (1, 0)].into_iter().collect();
        assert_eq!(reverse_path(3, |n| parents.get(n).copied()), vec![1, 2, 3]);
        assert_eq!(reverse_path(0, |n| parents.get(n).copied()), Vec::<i32>::new());
    }

    #[test]
    fn dfs_on_line() {
        let outcome = dfs(&0, line_successors, |&n| n == 4);
        assert_eq!(outcome.path, Some(vec![1, 2, 3, 4]));
        assert_eq!(outcome.visited, vec![0, 1, 2, 3, 4]);
    }

    /// The first successor is explored first.
    #[test]
    fn dfs_priority_order() {
        // 0 -> {1, 2}, 1 -> {3}, 2 -> {3}
        let graph = |n: &u8| match *n {
            0 => vec![1, 2],
            1 | 2 => vec![3],
            _ => vec![],
        };
        let outcome = dfs(&0, graph, |&n| n == 3);
        assert_eq!(outcome.visited, vec![0, 1, 3]);
        assert_eq!(outcome.path, Some(vec![1, 3]));
    }

    /// A node pushed twice is recorded once.
    #[test]
    fn dfs_discards_duplicates_on_pop() {
        // 0 -> {1, 2}, 1 -> {}, 2 -> {1}
        let graph = |n: &u8| match *n {
            0 => vec![2, 1],
            2 => vec![1],
            _ => vec![],
        };
        let outcome = dfs(&0, graph, |_| false);
        assert_eq!(outcome.path, None);
        assert_eq!(outcome.visited, vec![0, 2, 1]);
    }

    #[test]
    fn dfs_start_is_goal() {
        let outcome = dfs(&5, line_successors, |&n| n == 5);
        assert_eq!(outcome.path, Some(vec![]));
        assert_eq!(outcome.visited, vec![5]);
    }

    #[test]
    fn astar_on_line() {
        let outcome = astar(
            &0,
            |n| line_successors(n).into_iter().map(|x| (x, 1)),
            |&n| (7 - n).abs(),
            |&n| n == 7,
        );
        assert_eq!(outcome.path, Some((1..=7).collect::<Vec<_>>()));
        assert_eq!(outcome.visited, (0..=7).collect::<Vec<_>>());
        assert_eq!(outcome.path_len(), Some(7));
    }

    /// The cheaper of two routes is taken even if the expensive one is discovered first.
    #[test]
    fn astar_prefers_cheaper_route() {
        // 0 -(1)-> 1 -(10)-> 3, 0 -(2)-> 2 -(2)-> 3
        let graph = |n: &u8| match *n {
            0 => vec![(1, 1), (2, 2)],
            1 => vec![(3, 10)],
            2 => vec![(3, 2)],
            _ => vec![],
        };
        let outcome = astar(&0, graph, |_| 0u32, |&n| n == 3);
        assert_eq!(outcome.path, Some(vec![2, 3]));
    }

    /// Stale heap entries are popped and recorded again.
    #[test]
    fn astar_records_every_pop() {
        // 3 is first reached through 1 at cost 10, then through 2 at cost 4.
        let graph = |n: &u8| match *n {
            0 => vec![(1, 1), (2, 2)],
            1 => vec![(3, 9)],
            2 => vec![(3, 2)],
            _ => vec![],
        };
        let outcome = astar(&0, graph, |_| 0u32, |_| false);
        assert!(!outcome.is_solved());
        assert_eq!(outcome.visited, vec![0, 1, 2, 3, 3]);
    }

    #[test]
    fn astar_unreachable_goal() {
        let outcome = astar(
            &0,
            |n| line_successors(n).into_iter().map(|x| (x, 1)),
            |_| 0,
            |&n| n == 42,
        );
        assert_eq!(outcome.path, None);
        assert_eq!(outcome.visited.len(), 10);
    }
}
