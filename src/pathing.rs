//! Route finding through a carved maze.
//!
//! The solver is a depth first backtracking search that keeps its bookkeeping in the grid
//! itself: a cell on the route being explored is marked `Path`, which also stops sibling
//! branches from entering it. A dead end is reverted to `Passage` as the search backs out of
//! it, so after a successful search only the route from the start to the exit is marked.
//!
//! The search is iterative with an explicit stack of frames, one per cell on the current
//! route, so its depth is bounded by heap memory rather than the call stack. The order the
//! neighbours are tried in (up, right, down, left) and the point at which a dead end is
//! reverted match the plain recursive formulation, so the same route is found.

use bit_set::BitSet;
use log::{debug, info};

use crate::cells::{Cartesian2DCoordinate, CellState, CLOCKWISE_FROM_NORTH};
use crate::errors::*;
use crate::grid::Grid;

/// A cell on the route being explored, and the index into `CLOCKWISE_FROM_NORTH` of the next
/// neighbour to try from it.
#[derive(Debug, Copy, Clone)]
struct Frame {
    coord: Cartesian2DCoordinate,
    next_direction: usize,
}

impl Frame {
    fn new(coord: Cartesian2DCoordinate) -> Frame {
        Frame { coord, next_direction: 0 }
    }
}

/// Search for a route from `start` to the exit, marking the route's passages as `Path`.
///
/// Returns `Ok(false)` when there is no route, in which case the grid is left exactly as it was.
/// The start cell keeps its state either way if it is the entrance.
/// Errors only if `start` lies outside the grid.
pub fn solve(grid: &mut Grid, start: Cartesian2DCoordinate) -> Result<bool> {
    solve_route(grid, start).map(|route| route.is_some())
}

/// As `solve`, but return the route found: every cell from `start` to the exit, in order.
pub fn solve_route(grid: &mut Grid,
                   start: Cartesian2DCoordinate)
                   -> Result<Option<Vec<Cartesian2DCoordinate>>> {

    match grid.get(start)? {
        CellState::Exit => return Ok(Some(vec![start])),
        CellState::Passage | CellState::Entrance => {}
        CellState::Wall | CellState::Path => {
            debug!("Cannot start a search from {:?}", start);
            return Ok(None);
        }
    }

    mark(grid, start)?;
    let mut stack = vec![Frame::new(start)];
    let mut visits = 1usize;

    while let Some(frame) = stack.last_mut() {
        if frame.next_direction == CLOCKWISE_FROM_NORTH.len() {
            // every neighbour failed, back out of the dead end
            let dead_end = frame.coord;
            stack.pop();
            unmark(grid, dead_end)?;
            continue;
        }

        let direction = CLOCKWISE_FROM_NORTH[frame.next_direction];
        frame.next_direction += 1;
        let neighbour = match grid.neighbour_at_direction(frame.coord, direction) {
            Some(neighbour) => neighbour,
            None => continue,
        };

        match grid.get(neighbour)? {
            CellState::Exit => {
                let mut route = stack.iter().map(|f| f.coord).collect::<Vec<_>>();
                route.push(neighbour);
                info!("Found a route of {} cells after visiting {} cells", route.len(), visits);
                return Ok(Some(route));
            }
            CellState::Passage => {
                mark(grid, neighbour)?;
                stack.push(Frame::new(neighbour));
                visits += 1;
            }
            _ => {}
        }
    }

    info!("No route from {:?} after visiting {} cells", start, visits);
    Ok(None)
}

/// Check a route is a simple walk of axis adjacent cells from the entrance to the exit of
/// `grid`, and that every cell between the two ends is marked `Path`.
pub fn is_valid_route(grid: &Grid, route: &[Cartesian2DCoordinate]) -> bool {
    let (first, last) = match (route.first(), route.last()) {
        (Some(&first), Some(&last)) if route.len() >= 2 => (first, last),
        _ => return false,
    };
    if grid.get(first).ok() != Some(CellState::Entrance) ||
       grid.get(last).ok() != Some(CellState::Exit) {
        return false;
    }

    let width = grid.width().0;
    let mut seen = BitSet::with_capacity(grid.size());
    for coord in route {
        if !seen.insert(coord.y as usize * width + coord.x as usize) {
            return false;
        }
    }

    let adjacent = route.windows(2).all(|pair| pair[0].manhattan_distance(pair[1]) == 1);
    let marked = route[1..route.len() - 1]
        .iter()
        .all(|&c| grid.get(c).ok() == Some(CellState::Path));

    adjacent && marked
}

#[inline]
fn mark(grid: &mut Grid, coord: Cartesian2DCoordinate) -> Result<()> {
    // The entrance is never enterable from a neighbour so it needs no marking, and keeping it
    // as an entrance means it renders the same before and after a search.
    if grid.get(coord)? == CellState::Passage {
        grid.set(coord, CellState::Path)?;
    }
    Ok(())
}

#[inline]
fn unmark(grid: &mut Grid, coord: Cartesian2DCoordinate) -> Result<()> {
    if grid.get(coord)? == CellState::Path {
        grid.set(coord, CellState::Passage)?;
    }
    Ok(())
}
