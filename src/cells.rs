use smallvec::SmallVec;

/// A grid position. `x` is the column index and `y` the row index, for every phase of the
/// maze's life (carving, solving and rendering all share this convention).
#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug, Ord, PartialOrd)]
pub struct Cartesian2DCoordinate {
    pub x: u32,
    pub y: u32,
}

impl Cartesian2DCoordinate {
    pub fn new(x: u32, y: u32) -> Cartesian2DCoordinate {
        Cartesian2DCoordinate { x, y }
    }

    /// Is this a room cell of the thick wall lattice - odd on both axes.
    #[inline]
    pub fn is_room(&self) -> bool {
        self.x % 2 == 1 && self.y % 2 == 1
    }

    /// The cell exactly halfway between two cells that are two steps apart on one axis.
    #[inline]
    pub fn midpoint(&self, other: Cartesian2DCoordinate) -> Cartesian2DCoordinate {
        Cartesian2DCoordinate {
            x: (self.x + other.x) / 2,
            y: (self.y + other.y) / 2,
        }
    }

    /// Manhattan distance, used to check route cells are axis adjacent.
    #[inline]
    pub fn manhattan_distance(&self, other: Cartesian2DCoordinate) -> u32 {
        let dx = if self.x > other.x { self.x - other.x } else { other.x - self.x };
        let dy = if self.y > other.y { self.y - other.y } else { other.y - self.y };
        dx + dy
    }
}

pub type CoordinateSmallVec = SmallVec<[Cartesian2DCoordinate; 4]>;

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum CompassPrimary {
    North,
    East,
    South,
    West,
}

/// The order the solver tries neighbours in: up, right, down, left.
/// Changing it changes which route is found, not whether one is.
pub const CLOCKWISE_FROM_NORTH: [CompassPrimary; 4] = [CompassPrimary::North,
                                                       CompassPrimary::East,
                                                       CompassPrimary::South,
                                                       CompassPrimary::West];

impl CompassPrimary {
    /// Offset a coordinate `steps` cells in this direction.
    /// None if the result would be negative or overflow.
    pub fn offset(self, coord: Cartesian2DCoordinate, steps: u32) -> Option<Cartesian2DCoordinate> {
        let (x, y) = (coord.x, coord.y);
        match self {
            CompassPrimary::North => y.checked_sub(steps).map(|y| Cartesian2DCoordinate { x, y }),
            CompassPrimary::South => y.checked_add(steps).map(|y| Cartesian2DCoordinate { x, y }),
            CompassPrimary::East => x.checked_add(steps).map(|x| Cartesian2DCoordinate { x, y }),
            CompassPrimary::West => x.checked_sub(steps).map(|x| Cartesian2DCoordinate { x, y }),
        }
    }
}

/// What a single grid cell currently holds. Exactly one state per cell.
#[derive(Eq, PartialEq, Copy, Clone, Debug, Hash)]
pub enum CellState {
    /// Impassable.
    Wall,
    /// Carved and traversable, not on the solver's current route.
    Passage,
    /// The unique start cell.
    Entrance,
    /// The unique goal cell.
    Exit,
    /// A passage marked as part of the solver's route.
    Path,
}

impl Default for CellState {
    fn default() -> CellState {
        CellState::Wall
    }
}

impl CellState {
    /// Can the solver step into a cell in this state.
    #[inline]
    pub fn is_enterable(self) -> bool {
        match self {
            CellState::Passage | CellState::Exit => true,
            _ => false,
        }
    }

    /// Anything but a wall.
    #[inline]
    pub fn is_open(self) -> bool {
        self != CellState::Wall
    }
}
