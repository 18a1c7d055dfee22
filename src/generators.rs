use error_chain::bail;
use log::{debug, info};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::cells::{Cartesian2DCoordinate, CellState, CoordinateSmallVec, CLOCKWISE_FROM_NORTH};
use crate::errors::*;
use crate::grid::Grid;
use crate::units::{Height, Width};

/// The room cell carving starts from, which becomes the entrance.
pub const ENTRANCE: Cartesian2DCoordinate = Cartesian2DCoordinate { x: 1, y: 1 };

/// Where the exit goes on a grid of the given size: the bottom right room cell.
pub fn exit_coordinate(width: Width, height: Height) -> Cartesian2DCoordinate {
    Cartesian2DCoordinate::new(width.0.saturating_sub(2) as u32,
                               height.0.saturating_sub(2) as u32)
}

/// Check a grid can hold a thick wall maze: odd on both axes, with at least one interior row
/// and column, and separate cells for the entrance and the exit.
pub fn validate_dimensions(width: Width, height: Height) -> Result<()> {
    if !width.is_odd() || !height.is_odd() {
        bail!(ErrorKind::EvenDimensions(width.0, height.0));
    }
    if width.0 < 3 || height.0 < 3 || (width.0 == 3 && height.0 == 3) {
        bail!(ErrorKind::GridTooSmall(width.0, height.0));
    }
    Ok(())
}

/// Carves perfect mazes with the recursive backtracker algorithm, iteratively with an explicit
/// stack so that large grids cannot overflow the call stack.
///
/// The generator owns its random source. By default it is seeded from the OS once, at
/// construction; seed it explicitly when the same maze must be produced again.
#[derive(Debug)]
pub struct MazeGenerator<R: Rng = StdRng> {
    rng: R,
}

impl MazeGenerator<StdRng> {
    pub fn new() -> MazeGenerator<StdRng> {
        MazeGenerator { rng: StdRng::from_entropy() }
    }

    pub fn from_seed(seed: u64) -> MazeGenerator<StdRng> {
        MazeGenerator { rng: StdRng::seed_from_u64(seed) }
    }
}

impl Default for MazeGenerator<StdRng> {
    fn default() -> Self {
        MazeGenerator::new()
    }
}

impl<R: Rng> MazeGenerator<R> {
    pub fn with_rng(rng: R) -> MazeGenerator<R> {
        MazeGenerator { rng }
    }

    /// Wipe the grid back to walls and carve a new perfect maze into it, then mark the
    /// entrance at (1, 1) and the exit at (width - 2, height - 2).
    pub fn generate(&mut self, grid: &mut Grid) -> Result<()> {
        validate_dimensions(grid.width(), grid.height())?;
        debug!("Generating a {}x{} maze", grid.width().0, grid.height().0);

        grid.reset();
        let carved = self.carve_passages(grid, ENTRANCE)?;

        grid.set(ENTRANCE, CellState::Entrance)?;
        grid.set(exit_coordinate(grid.width(), grid.height()), CellState::Exit)?;

        info!("Carved {} cells into a {}x{} grid", carved, grid.width().0, grid.height().0);
        Ok(())
    }

    /// Depth first carving from a room cell. The current cell stays on top of the stack while
    /// it still has uncarved rooms two steps away, which gives long winding corridors.
    /// Returns the number of cells carved.
    fn carve_passages(&mut self, grid: &mut Grid, start: Cartesian2DCoordinate) -> Result<usize> {
        let mut stack = vec![start];
        grid.set(start, CellState::Passage)?;
        let mut carved = 1;

        while let Some(&current) = stack.last() {
            let candidates = uncarved_rooms_around(grid, current)?;

            if let Some(&next) = candidates.choose(&mut self.rng) {
                grid.set(current.midpoint(next), CellState::Passage)?;
                grid.set(next, CellState::Passage)?;
                stack.push(next);
                carved += 2;
            } else {
                stack.pop();
            }
        }

        Ok(carved)
    }
}

/// Room cells two steps away that are inside the carving bounds and still walls.
fn uncarved_rooms_around(grid: &Grid,
                         coord: Cartesian2DCoordinate)
                         -> Result<CoordinateSmallVec> {
    let mut rooms = CoordinateSmallVec::new();
    for dir in CLOCKWISE_FROM_NORTH.iter() {
        if let Some(room) = dir.offset(coord, 2) {
            if grid.in_bounds(room) && grid.get(room)? == CellState::Wall {
                rooms.push(room);
            }
        }
    }
    Ok(rooms)
}
