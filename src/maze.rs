use rand::rngs::StdRng;
use rand::Rng;

use crate::cells::{Cartesian2DCoordinate, CellState};
use crate::errors::*;
use crate::generators::{self, MazeGenerator};
use crate::grid::Grid;
use crate::pathing;
use crate::units::{Height, Width};

/// A maze grid together with the generator that carves it.
///
/// The usual life of a maze is `new`, `generate`, `solve` from the entrance, with the grid read
/// for rendering in between.
#[derive(Debug)]
pub struct Maze<R: Rng = StdRng> {
    grid: Grid,
    generator: MazeGenerator<R>,
}

impl Maze<StdRng> {
    /// An all wall maze grid using an entropy seeded generator.
    /// Both dimensions must be odd, see `units::Width::to_odd`.
    pub fn new(width: Width, height: Height) -> Result<Maze<StdRng>> {
        Maze::with_generator(width, height, MazeGenerator::new())
    }

    /// As `new` but generating the same maze every time for a given seed.
    pub fn seeded(width: Width, height: Height, seed: u64) -> Result<Maze<StdRng>> {
        Maze::with_generator(width, height, MazeGenerator::from_seed(seed))
    }
}

impl<R: Rng> Maze<R> {
    pub fn with_generator(width: Width,
                          height: Height,
                          generator: MazeGenerator<R>)
                          -> Result<Maze<R>> {
        generators::validate_dimensions(width, height)?;
        Ok(Maze {
            grid: Grid::new(width, height),
            generator,
        })
    }

    /// Carve a new maze, replacing whatever the grid held.
    pub fn generate(&mut self) -> Result<()> {
        self.generator.generate(&mut self.grid)
    }

    /// Search for the exit from `start`, marking the route found. See `pathing::solve`.
    pub fn solve(&mut self, start: Cartesian2DCoordinate) -> Result<bool> {
        pathing::solve(&mut self.grid, start)
    }

    /// Search for the exit from the entrance, returning the route.
    pub fn solve_from_entrance(&mut self) -> Result<Option<Vec<Cartesian2DCoordinate>>> {
        let entrance = self.entrance().ok_or(ErrorKind::NoEntrance)?;
        pathing::solve_route(&mut self.grid, entrance)
    }

    pub fn cell_at(&self, coord: Cartesian2DCoordinate) -> Result<CellState> {
        self.grid.get(coord)
    }

    pub fn entrance(&self) -> Option<Cartesian2DCoordinate> {
        self.grid.find(CellState::Entrance)
    }

    pub fn exit(&self) -> Option<Cartesian2DCoordinate> {
        self.grid.find(CellState::Exit)
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rand::rngs::mock::StepRng;

    #[test]
    fn construction_requires_odd_dimensions() {
        assert!(Maze::new(Width(10), Height(11)).is_err());
        assert!(Maze::new(Width(11), Height(11)).is_ok());
        assert!(Maze::new(Width(3), Height(3)).is_err());
    }

    #[test]
    fn too_small_board_has_a_readable_message() {
        // a 2x2 board request is bumped to 3x3, which has one room for both entrance and exit
        let err = Maze::new(Width(2).to_odd(), Height(2).to_odd()).unwrap_err();
        assert_eq!(err.to_string(), "a 3x3 grid has no room for both an entrance and an exit");
        assert_eq!(err.iter().count(), 1);

        let err = Maze::new(Width(4), Height(5)).unwrap_err();
        assert_eq!(err.to_string(), "maze grid dimensions must be odd, got 4x5");
    }

    #[test]
    fn new_maze_is_all_wall() {
        let maze = Maze::seeded(Width(7), Height(7), 3).unwrap();
        assert_eq!(maze.grid().count(CellState::Wall), 49);
        assert_eq!(maze.entrance(), None);
    }

    #[test]
    fn generate_then_solve() {
        let mut maze = Maze::seeded(Width(5), Height(5), 8).unwrap();
        maze.generate().unwrap();
        assert_eq!(maze.entrance(), Some(Cartesian2DCoordinate::new(1, 1)));
        assert_eq!(maze.exit(), Some(Cartesian2DCoordinate::new(3, 3)));

        assert!(maze.solve(Cartesian2DCoordinate::new(1, 1)).unwrap());
        assert_eq!(maze.cell_at(Cartesian2DCoordinate::new(1, 1)).unwrap(), CellState::Entrance);
        assert_eq!(maze.cell_at(Cartesian2DCoordinate::new(3, 3)).unwrap(), CellState::Exit);
        assert!(maze.grid().count(CellState::Path) >= 1);
    }

    #[test]
    fn solving_before_generating() {
        let mut maze = Maze::seeded(Width(5), Height(5), 8).unwrap();
        match maze.solve_from_entrance() {
            Err(Error(ErrorKind::NoEntrance, _)) => {}
            other => panic!("unexpected {:?}", other),
        }
        assert!(!maze.solve(Cartesian2DCoordinate::new(1, 1)).unwrap());
    }

    #[test]
    fn cell_at_out_of_range() {
        let maze = Maze::seeded(Width(5), Height(5), 8).unwrap();
        assert!(maze.cell_at(Cartesian2DCoordinate::new(5, 5)).is_err());
    }

    #[test]
    fn supplied_random_source() {
        // a constant source always picks the first candidate: north, east, south, west order
        let generator = MazeGenerator::with_rng(StepRng::new(0, 0));
        let mut maze = Maze::with_generator(Width(7), Height(5), generator).unwrap();
        maze.generate().unwrap();

        let route = maze.solve_from_entrance().unwrap().unwrap();
        assert_eq!(route.first(), Some(&Cartesian2DCoordinate::new(1, 1)));
        assert_eq!(route.last(), Some(&Cartesian2DCoordinate::new(5, 3)));
        assert!(pathing::is_valid_route(maze.grid(), &route));
    }
}
