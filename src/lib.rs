//! # Tile-Swap Solver Library
//!
//! This library provides the board model for the linear tile-swap puzzle
//! (an 11-cell row of five white tiles, five black tiles and one blank) and
//! an A* solver that finds a minimum-cost move sequence to a goal board,
//! guided by a pluggable heuristic.
//!
//! The blank moves by swapping with another tile: one cell away for cost 1,
//! or jumping over a single tile two or three cells away for cost 2 or 3.
//! A board is solved once every black tile sits left of every white tile,
//! wherever the blank ends up.
//!
//! It is used by three binaries:
//! - `play`: interactive play-through via the command line.
//! - `solve`: takes a board (literal or seeded scramble) and a heuristic,
//!   then prints the optimal move sequence and search statistics.
//! - `heuristic_evaluator`: compares both heuristics over a batch of
//!   scrambled boards.
//!
//! ## Modules
//! - `engine`: board representation (`Board`), tile types (`Tile`), legal
//!   moves, the goal test, and the interactive `Game` wrapper.
//! - `heuristics`: the two remaining-cost estimators the solver ships with.
//! - `solver`: the A* search engine and its `Solution` statistics.
//! - `utils`: parsing board configurations from strings.

pub mod engine;
pub mod heuristics;
pub mod solver;
pub mod utils;
