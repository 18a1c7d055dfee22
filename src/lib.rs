//! **mazes** generates random perfect mazes on a thick walled grid and finds a route through
//! them from the entrance to the exit.
//!
//! ```
//! use mazes::maze::Maze;
//! use mazes::units::{Height, Width};
//!
//! let mut maze = Maze::new(Width(21), Height(11)).unwrap();
//! maze.generate().unwrap();
//! let route = maze.solve_from_entrance().unwrap();
//! assert!(route.is_some());
//! print!("{}", maze.grid());
//! ```

#![recursion_limit = "1024"] // error_chain! expands deeply

pub mod cells;
pub mod errors;
pub mod generators;
pub mod grid;
pub mod grid_displays;
pub mod maze;
pub mod pathing;
pub mod units;
