use clap::{Parser, ValueEnum};
use tileswap_solver::engine::Board;
use tileswap_solver::heuristics::{manhattan_distance, misplaced_pairs};
use tileswap_solver::solver::solve_astar;
use tileswap_solver::utils::board_from_str;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum HeuristicChoice {
    /// Count of white-before-black tile pairs
    MisplacedPairs,
    /// Grid Manhattan distance against the standard layout
    ManhattanDistance,
}

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Heuristic used to guide the search
    #[clap(short = 'H', long, value_enum, default_value_t = HeuristicChoice::MisplacedPairs)]
    heuristic: HeuristicChoice,

    /// Scramble the standard board with this many random moves instead of
    /// reading a board argument
    #[clap(short, long, conflicts_with = "board")]
    scramble: Option<u32>,

    /// Seed for the scramble
    #[clap(long, default_value_t = 0)]
    seed: u64,

    /// Board as 11 tile characters, e.g. WWWWW_BBBBB (defaults to the
    /// standard board)
    board: Option<String>,
}

fn main() {
    let args = Args::parse();

    let initial = match (&args.board, args.scramble) {
        (Some(s), _) => board_from_str(s).unwrap_or_else(|e| {
            eprintln!("Invalid board '{}': {}", s, e);
            std::process::exit(1);
        }),
        (None, Some(moves)) => Board::new_scrambled_with_seed(args.seed, moves),
        (None, None) => Board::standard(),
    };

    println!("Initial board: {}", initial);
    println!("Searching with {:?}...\n", args.heuristic);

    let solution = match args.heuristic {
        HeuristicChoice::MisplacedPairs => solve_astar(initial, misplaced_pairs),
        HeuristicChoice::ManhattanDistance => solve_astar(initial, manhattan_distance),
    };

    match solution {
        Some(solution) => {
            println!("=== Solution Found ===");
            println!("Optimal solution sequence:");
            let mut so_far = 0;
            for (i, board) in solution.path.iter().enumerate() {
                if i > 0 {
                    so_far += solution.path[i - 1]
                        .neighbors()
                        .into_iter()
                        .find(|&(b, _)| b == *board)
                        .map(|(_, cost)| cost)
                        .unwrap_or(0);
                }
                println!("    {} (Cost: {})", board, so_far);
            }
            println!("Optimal cost: {}", solution.cost);
            println!("Expanded nodes: {}", solution.expanded_nodes);
            println!("Frontier size at goal: {}", solution.frontier_len);
            println!("Total nodes added to frontier: {}", solution.total_pushed);
        }
        None => {
            println!("No solution found.");
        }
    }
}
