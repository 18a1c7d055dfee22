//! Error types for grid access, maze generation and solving.
//!
//! Other modules `use errors::*;` to get the `Error`, `ErrorKind`, `ResultExt` and `Result`
//! types that `error_chain!` creates.

use error_chain::error_chain;

error_chain! {

    errors {
        CoordinateOutOfRange(x: u32, y: u32, width: usize, height: usize) {
            description("grid coordinate out of range")
            display("coordinate ({}, {}) is outside the {}x{} grid", x, y, width, height)
        }
        EvenDimensions(width: usize, height: usize) {
            description("maze grid dimensions must be odd")
            display("maze grid dimensions must be odd, got {}x{}", width, height)
        }
        GridTooSmall(width: usize, height: usize) {
            description("maze grid too small")
            display("a {}x{} grid has no room for both an entrance and an exit", width, height)
        }
        NoEntrance {
            description("no entrance cell")
            display("the grid has no entrance cell, generate the maze first")
        }
    }
}
