use std::fmt;
use std::slice;

use fnv::FnvHashMap;
use itertools::Itertools;
use petgraph::graph::{NodeIndex, UnGraph};

use crate::cells::{Cartesian2DCoordinate, CellState, CompassPrimary};
use crate::errors::*;
use crate::units::{Height, Width};

/// Undirected graph of the open (non wall) cells of a grid, one edge per pair of axis
/// adjacent open cells. Node weights are the cell coordinates.
pub type PassageGraph = UnGraph<Cartesian2DCoordinate, ()>;

/// A rectangular array of cell states, stored row major.
#[derive(Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<CellState>,
    width: usize,
    height: usize,
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Grid :: width: {}, height: {}, open cells: {}",
               self.width, self.height, self.cells.iter().filter(|s| s.is_open()).count())
    }
}

impl Grid {
    /// Create a grid with every cell a wall.
    /// The dimensions are not checked for the odd sizing the maze lattice needs, the
    /// generator does that.
    pub fn new(width: Width, height: Height) -> Grid {
        Grid {
            cells: vec![CellState::Wall; width.0 * height.0],
            width: width.0,
            height: height.0,
        }
    }

    #[inline]
    pub fn width(&self) -> Width {
        Width(self.width)
    }

    #[inline]
    pub fn height(&self) -> Height {
        Height(self.height)
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.cells.len()
    }

    /// Is the coordinate strictly inside the outer ring of cells.
    /// This is the carving bound, stricter than `is_valid_coordinate`, so that the boundary of
    /// the grid is never carved and the maze stays enclosed.
    #[inline]
    pub fn in_bounds(&self, coord: Cartesian2DCoordinate) -> bool {
        let (x, y) = (coord.x as usize, coord.y as usize);
        x > 0 && x + 1 < self.width && y > 0 && y + 1 < self.height
    }

    /// Is the coordinate anywhere within the grid's full extent.
    #[inline]
    pub fn is_valid_coordinate(&self, coord: Cartesian2DCoordinate) -> bool {
        (coord.x as usize) < self.width && (coord.y as usize) < self.height
    }

    pub fn get(&self, coord: Cartesian2DCoordinate) -> Result<CellState> {
        self.index(coord)
            .map(|i| self.cells[i])
            .ok_or_else(|| self.out_of_range(coord))
    }

    pub fn set(&mut self, coord: Cartesian2DCoordinate, state: CellState) -> Result<()> {
        match self.index(coord) {
            Some(i) => {
                self.cells[i] = state;
                Ok(())
            }
            None => Err(self.out_of_range(coord)),
        }
    }

    /// Turn every cell back into a wall.
    pub fn reset(&mut self) {
        for cell in self.cells.iter_mut() {
            *cell = CellState::Wall;
        }
    }

    /// The adjacent cell in a direction, if it lies within the full grid extent.
    pub fn neighbour_at_direction(&self,
                                  coord: Cartesian2DCoordinate,
                                  direction: CompassPrimary)
                                  -> Option<Cartesian2DCoordinate> {
        direction.offset(coord, 1)
                 .and_then(|neighbour| if self.is_valid_coordinate(neighbour) {
                     Some(neighbour)
                 } else {
                     None
                 })
    }

    /// How many cells are in the given state.
    pub fn count(&self, state: CellState) -> usize {
        self.cells.iter().filter(|&&s| s == state).count()
    }

    /// The first cell, in row major order, in the given state.
    pub fn find(&self, state: CellState) -> Option<Cartesian2DCoordinate> {
        self.cells
            .iter()
            .position(|&s| s == state)
            .map(|i| self.coordinate_at_index(i))
    }

    /// All coordinates in row major order.
    pub fn iter(&self) -> impl Iterator<Item = Cartesian2DCoordinate> {
        (0..self.height as u32)
            .cartesian_product(0..self.width as u32)
            .map(|(y, x)| Cartesian2DCoordinate::new(x, y))
    }

    /// The cell states one row at a time, top row first.
    pub fn iter_row(&self) -> slice::Chunks<'_, CellState> {
        self.cells.chunks(self.width.max(1))
    }

    /// Build the graph of open cells, linking each to its open east and south neighbours.
    pub fn passage_graph(&self) -> PassageGraph {
        let open_count = self.cells.iter().filter(|s| s.is_open()).count();
        let mut graph = PassageGraph::with_capacity(open_count, open_count * 2);
        let mut node_indices: FnvHashMap<Cartesian2DCoordinate, NodeIndex> =
            FnvHashMap::with_capacity_and_hasher(open_count, Default::default());

        for coord in self.iter().filter(|c| self.is_open(*c)) {
            node_indices.insert(coord, graph.add_node(coord));
        }

        for (&coord, &node) in node_indices.iter() {
            for dir in &[CompassPrimary::East, CompassPrimary::South] {
                let linked = self.neighbour_at_direction(coord, *dir)
                                 .and_then(|neighbour| node_indices.get(&neighbour));
                if let Some(&neighbour_node) = linked {
                    graph.add_edge(node, neighbour_node, ());
                }
            }
        }

        graph
    }

    /// The passage graph as text: a first line `n m` of the vertex and edge counts, then one
    /// line per edge holding its two 1-based vertex indices. Vertices are numbered in row major
    /// order of the open cells.
    pub fn passage_edge_list(&self) -> String {
        let graph = self.passage_graph();
        let mut graph_data = String::new();
        graph_data.push_str(graph.node_count().to_string().as_ref());
        graph_data.push(' ');
        graph_data.push_str(graph.edge_count().to_string().as_ref());
        graph_data.push('\n');

        for edge in graph.raw_edges() {
            graph_data.push_str((edge.source().index() + 1).to_string().as_ref());
            graph_data.push(' ');
            graph_data.push_str((edge.target().index() + 1).to_string().as_ref());
            graph_data.push('\n');
        }

        graph_data
    }

    #[inline]
    fn is_open(&self, coord: Cartesian2DCoordinate) -> bool {
        self.index(coord).map_or(false, |i| self.cells[i].is_open())
    }

    #[inline]
    fn index(&self, coord: Cartesian2DCoordinate) -> Option<usize> {
        if self.is_valid_coordinate(coord) {
            Some(coord.y as usize * self.width + coord.x as usize)
        } else {
            None
        }
    }

    #[inline]
    fn coordinate_at_index(&self, index: usize) -> Cartesian2DCoordinate {
        Cartesian2DCoordinate::new((index % self.width) as u32, (index / self.width) as u32)
    }

    fn out_of_range(&self, coord: Cartesian2DCoordinate) -> Error {
        ErrorKind::CoordinateOutOfRange(coord.x, coord.y, self.width, self.height).into()
    }
}
