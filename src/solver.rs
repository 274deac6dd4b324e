//! A* best-first search over puzzle boards.
//!
//! The frontier is a binary heap ordered by `f = cost + heuristic(board)`.
//! Duplicate frontier entries for the same board are allowed and filtered
//! out lazily at pop time against the table of already-finalized costs,
//! instead of being removed or re-prioritized in place. A board is finalized
//! the first time it is popped with a cost no worse than any earlier
//! finalization, and later stale entries for it are discarded.

use crate::engine::Board;
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};
use std::rc::Rc;

/// One node of the search tree: a board, the cost accumulated to reach it,
/// and the node it was expanded from.
///
/// Parent links always point backward toward the initial node, so they form
/// a tree. A node can be alive both in the frontier and behind the parent
/// links of its descendants, hence the shared `Rc` ownership.
struct SearchNode {
    board: Board,
    cost: u32,
    parent: Option<Rc<SearchNode>>,
}

/// A frontier entry carrying the node's priority score.
///
/// `BinaryHeap` is a max-heap, so the comparison is reversed to pop the
/// smallest `f` first. Ties on `f` break toward the lower accumulated cost.
struct FrontierEntry {
    f: u32,
    node: Rc<SearchNode>,
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierEntry {}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .f
            .cmp(&self.f)
            .then_with(|| other.node.cost.cmp(&self.node.cost))
    }
}

/// Represents a solution found by the solver.
#[derive(Clone, Debug)]
pub struct Solution {
    /// Sequence of boards from the initial configuration to the goal.
    pub path: Vec<Board>,
    /// Total cost of the moves along `path`.
    pub cost: u32,
    /// Number of nodes popped from the frontier and expanded.
    pub expanded_nodes: u32,
    /// Number of entries still queued when the goal was popped.
    pub frontier_len: usize,
    /// Total number of nodes pushed onto the frontier over the whole run.
    pub total_pushed: u32,
}

/// Searches for a minimum-cost move sequence from `initial` to any goal
/// board, guided by `heuristic`.
///
/// The search is optimal whenever the heuristic never overestimates the
/// true remaining cost. A heuristic that does overestimate is not detected;
/// the search still terminates (the state space is finite) but may return a
/// costlier path.
///
/// # Arguments
/// * `initial`: the starting board.
/// * `heuristic`: estimator of remaining cost, e.g. one of the functions in
///   [`crate::heuristics`].
///
/// # Returns
/// * `Some(Solution)` once a goal board is popped from the frontier.
/// * `None` if the frontier empties first. This is a defined outcome, not
///   an error.
///
/// # Examples
///
/// ```
/// use tileswap_solver::engine::Board;
/// use tileswap_solver::heuristics::misplaced_pairs;
/// use tileswap_solver::solver::solve_astar;
///
/// let solution = solve_astar(Board::standard(), misplaced_pairs).unwrap();
/// assert_eq!(solution.cost, 58);
/// assert!(solution.path.last().unwrap().is_goal());
/// ```
pub fn solve_astar<F>(initial: Board, heuristic: F) -> Option<Solution>
where
    F: Fn(&Board) -> u32,
{
    let mut frontier = BinaryHeap::new();
    let root = Rc::new(SearchNode {
        board: initial,
        cost: 0,
        parent: None,
    });
    frontier.push(FrontierEntry {
        f: heuristic(&initial),
        node: root,
    });

    // Lowest cost at which each board has been finalized so far.
    let mut finalized: HashMap<Board, u32> = HashMap::new();
    let mut total_pushed: u32 = 1;
    let mut expanded_nodes: u32 = 0;

    while let Some(FrontierEntry { node, .. }) = frontier.pop() {
        // Stale duplicate left behind by lazy deletion.
        if let Some(&best) = finalized.get(&node.board) {
            if best <= node.cost {
                continue;
            }
        }
        finalized.insert(node.board, node.cost);
        expanded_nodes += 1;

        if node.board.is_goal() {
            return Some(Solution {
                path: reconstruct_path(&node),
                cost: node.cost,
                expanded_nodes,
                frontier_len: frontier.len(),
                total_pushed,
            });
        }

        for (board, move_cost) in node.board.neighbors() {
            let successor = Rc::new(SearchNode {
                board,
                cost: node.cost + move_cost,
                parent: Some(Rc::clone(&node)),
            });
            let f = successor.cost + heuristic(&successor.board);
            frontier.push(FrontierEntry { f, node: successor });
            total_pushed += 1;
        }
    }

    None
}

/// Walks the parent links from the goal node back to the initial node and
/// reverses the result.
fn reconstruct_path(goal: &Rc<SearchNode>) -> Vec<Board> {
    let mut path = Vec::new();
    let mut current = Some(goal);
    while let Some(node) = current {
        path.push(node.board);
        current = node.parent.as_ref();
    }
    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::heuristics::{manhattan_distance, misplaced_pairs};
    use crate::utils::board_from_str;

    /// Distinct boards with 5 white, 5 black and 1 blank cell.
    const STATE_SPACE: u32 = 2772;

    fn assert_path_is_legal(path: &[Board]) {
        for pair in path.windows(2) {
            let step_is_move = pair[0]
                .neighbors()
                .iter()
                .any(|&(board, _)| board == pair[1]);
            assert!(step_is_move, "{} -> {} is not a legal move", pair[0], pair[1]);
        }
    }

    fn path_cost(path: &[Board]) -> u32 {
        path.windows(2)
            .map(|pair| {
                pair[0]
                    .neighbors()
                    .iter()
                    .find(|&&(board, _)| board == pair[1])
                    .map(|&(_, cost)| cost)
                    .expect("path steps are legal moves")
            })
            .sum()
    }

    #[test]
    fn test_search_on_goal_board_is_trivial() {
        let goal = board_from_str("BBBBB_WWWWW").unwrap();
        let solution = solve_astar(goal, misplaced_pairs).unwrap();
        assert_eq!(solution.path, vec![goal]);
        assert_eq!(solution.cost, 0);
        assert_eq!(solution.expanded_nodes, 1);
        assert_eq!(solution.total_pushed, 1);
        assert_eq!(solution.frontier_len, 0);
    }

    #[test]
    fn test_standard_board_solves_at_cost_58() {
        let solution = solve_astar(Board::standard(), misplaced_pairs).unwrap();
        assert_eq!(solution.cost, 58);
        assert_eq!(solution.path.first(), Some(&Board::standard()));
        assert!(solution.path.last().unwrap().is_goal());
        assert_path_is_legal(&solution.path);
        assert_eq!(path_cost(&solution.path), solution.cost);
    }

    #[test]
    fn test_both_heuristics_reach_equal_cost() {
        let with_h1 = solve_astar(Board::standard(), misplaced_pairs).unwrap();
        let with_h2 = solve_astar(Board::standard(), manhattan_distance).unwrap();
        assert_eq!(with_h1.cost, with_h2.cost);
        assert!(with_h2.path.last().unwrap().is_goal());
        assert_path_is_legal(&with_h2.path);
        assert_eq!(path_cost(&with_h2.path), with_h2.cost);
    }

    #[test]
    fn test_expansion_stays_within_state_space() {
        // misplaced_pairs never loses more than a move's cost per move, so
        // no board is ever finalized twice and the expansion count is
        // bounded by the number of distinct boards.
        let solution = solve_astar(Board::standard(), misplaced_pairs).unwrap();
        assert!(solution.expanded_nodes <= STATE_SPACE);
        assert!(solution.total_pushed >= solution.expanded_nodes);
    }

    #[test]
    fn test_scrambled_boards_are_solved() {
        for seed in 0..5 {
            let initial = Board::new_scrambled_with_seed(seed, 30);
            let solution = solve_astar(initial, misplaced_pairs)
                .unwrap_or_else(|| panic!("seed {} produced an unsolvable board", seed));
            assert_eq!(solution.path.first(), Some(&initial));
            assert!(solution.path.last().unwrap().is_goal());
            assert_path_is_legal(&solution.path);
            assert_eq!(path_cost(&solution.path), solution.cost);
            // An estimate that never overshoots is a lower bound on the
            // real cost.
            assert!(solution.cost >= misplaced_pairs(&initial));
        }
    }

    #[test]
    fn test_custom_heuristic_can_be_supplied() {
        // The zero heuristic degrades A* to uniform-cost search, which is
        // still optimal.
        let uniform = solve_astar(Board::standard(), |_| 0).unwrap();
        assert_eq!(uniform.cost, 58);
        assert!(uniform.path.last().unwrap().is_goal());
    }
}
