use std::io::{self, Write};
use tileswap_solver::engine::{Game, MOVE_OFFSETS};

fn main() {
    let mut game = Game::new();
    println!("Welcome to the tile-swap puzzle!");
    println!("Move every black tile left of every white tile.");

    loop {
        println!("---------------------");
        println!("Steps: {}, Cost: {}", game.steps(), game.cost());
        println!("{}", game.board());

        if game.is_solved() {
            println!();
            println!("---------------------");
            println!("Solved!");
            println!("Total cost: {}", game.cost());
            println!("Total steps: {}", game.steps());
            println!("---------------------");
            break;
        }

        print!("Enter a blank offset ({:?}), 'u' to undo, 'q' to quit: ", MOVE_OFFSETS);
        io::stdout().flush().unwrap();

        let mut input = String::new();
        if io::stdin().read_line(&mut input).is_err() {
            println!("Error reading input. Please try again.");
            continue;
        }

        let trimmed_input = input.trim();

        if trimmed_input == "q" {
            println!("Thanks for playing!");
            break;
        }

        if trimmed_input == "u" {
            if game.undo_last_move() {
                println!("Move undone.");
            } else {
                println!("Cannot undo further (no moves made yet).");
            }
            continue;
        }

        match trimmed_input.parse::<isize>() {
            Ok(offset) if MOVE_OFFSETS.contains(&offset) => {
                if game.process_move(offset) {
                    println!("Move processed.");
                } else {
                    println!(
                        "Invalid move: offset {} leaves the board or has nothing to jump over.",
                        offset
                    );
                }
            }
            Ok(offset) => {
                println!("Offset {} is not a legal displacement {:?}.", offset, MOVE_OFFSETS);
            }
            Err(_) => {
                println!("Invalid input: enter an offset like '2' or '-3', 'u', or 'q'.");
            }
        }
    }
}
