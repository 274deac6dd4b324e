use std::collections::HashMap;
use tileswap_solver::engine::Board;
use tileswap_solver::heuristics::{manhattan_distance, misplaced_pairs};
use tileswap_solver::solver::solve_astar;

const NUM_RANDOM_BOARDS_FOR_EVALUATION: usize = 20;
const START_SEED: u64 = 0;
const SCRAMBLE_MOVES: u32 = 40;

type HeuristicFn = fn(&Board) -> u32;

fn main() {
    let heuristics: Vec<(&str, HeuristicFn)> = vec![
        ("misplaced_pairs", misplaced_pairs),
        ("manhattan_distance", manhattan_distance),
    ];

    let mut all_expanded: HashMap<String, Vec<u32>> = HashMap::new();
    for (name, _) in &heuristics {
        all_expanded.insert(name.to_string(), Vec::new());
    }

    println!(
        "Evaluating {} heuristics on {} scrambled boards...",
        heuristics.len(),
        NUM_RANDOM_BOARDS_FOR_EVALUATION
    );

    for board_idx in 0..NUM_RANDOM_BOARDS_FOR_EVALUATION {
        let current_seed = START_SEED + board_idx as u64;
        let initial_board = Board::new_scrambled_with_seed(current_seed, SCRAMBLE_MOVES);

        println!(
            "\nBoard {} (Seed: {}): {}",
            board_idx, current_seed, initial_board
        );

        for (heuristic_name, heuristic_fn) in &heuristics {
            match solve_astar(initial_board, heuristic_fn) {
                Some(solution) => {
                    println!(
                        "  Heuristic: {:<20} Cost: {:<4} Expanded: {:<6} Pushed: {}",
                        heuristic_name, solution.cost, solution.expanded_nodes, solution.total_pushed
                    );
                    all_expanded
                        .get_mut(*heuristic_name)
                        .unwrap()
                        .push(solution.expanded_nodes);
                }
                None => {
                    eprintln!(
                        "Warning: heuristic {} found no solution for board {} (Seed: {}). Scrambled boards are always reachable, so this points at a bug.",
                        heuristic_name, board_idx, current_seed
                    );
                }
            }
        }
    }

    println!("\n--- Evaluation Complete ---");
    println!("Boards evaluated: {}", NUM_RANDOM_BOARDS_FOR_EVALUATION);
    println!("\n--- Average Expanded Nodes ---");

    let mut sorted_averages: Vec<(&str, f64)> = Vec::new();
    for (heuristic_name, counts) in &all_expanded {
        if counts.is_empty() {
            println!("Heuristic {}: no results recorded.", heuristic_name);
            continue;
        }
        let total: u32 = counts.iter().sum();
        let average = total as f64 / counts.len() as f64;
        sorted_averages.push((heuristic_name.as_str(), average));
    }

    // Fewest expansions first; the better-informed heuristic wins.
    sorted_averages.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));

    for (heuristic_name, average) in sorted_averages {
        println!("Heuristic {:<20}: Average Expanded = {:.2}", heuristic_name, average);
    }
}
