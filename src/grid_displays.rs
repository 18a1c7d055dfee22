use std::fmt;
use std::io;

use crate::cells::CellState;
use crate::grid::Grid;

/// Maps each cell state to the glyph drawn for it when a grid is rendered as text.
pub trait GridDisplay {
    fn render_cell(&self, state: CellState) -> char;
}

/// Solid block walls. The default for `Display` on a grid.
#[derive(Debug, Copy, Clone, Default)]
pub struct BlockGlyphs;

impl GridDisplay for BlockGlyphs {
    fn render_cell(&self, state: CellState) -> char {
        match state {
            CellState::Wall => '█',
            CellState::Passage => ' ',
            CellState::Path => '*',
            CellState::Entrance => 'E',
            CellState::Exit => 'S',
        }
    }
}

/// Plain ASCII, for terminals and files that cannot take the block glyph.
#[derive(Debug, Copy, Clone, Default)]
pub struct AsciiGlyphs;

impl GridDisplay for AsciiGlyphs {
    fn render_cell(&self, state: CellState) -> char {
        match state {
            CellState::Wall => '#',
            other => BlockGlyphs.render_cell(other),
        }
    }
}

/// A grid paired with the glyphs to draw it with, one text line per row.
pub struct TextRender<'a, D: GridDisplay + ?Sized> {
    grid: &'a Grid,
    display: &'a D,
}

impl<'a, D: GridDisplay + ?Sized> TextRender<'a, D> {
    pub fn new(grid: &'a Grid, display: &'a D) -> TextRender<'a, D> {
        TextRender { grid, display }
    }

    /// Write the rendering to any output stream.
    pub fn write_to<W: io::Write>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "{}", self)
    }
}

impl<'a, D: GridDisplay + ?Sized> fmt::Display for TextRender<'a, D> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.grid.iter_row() {
            let line: String = row.iter().map(|&state| self.display.render_cell(state)).collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&TextRender::new(self, &BlockGlyphs), f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::cells::Cartesian2DCoordinate;
    use crate::generators::MazeGenerator;
    use crate::pathing;
    use crate::units::{Height, Width};

    fn corridor() -> Grid {
        let mut g = Grid::new(Width(5), Height(3));
        g.set(Cartesian2DCoordinate::new(1, 1), CellState::Entrance).unwrap();
        g.set(Cartesian2DCoordinate::new(2, 1), CellState::Passage).unwrap();
        g.set(Cartesian2DCoordinate::new(3, 1), CellState::Exit).unwrap();
        g
    }

    #[test]
    fn block_rendering() {
        let g = corridor();
        assert_eq!(format!("{}", g), "█████\n█E S█\n█████\n");
    }

    #[test]
    fn ascii_rendering_of_solved_grid() {
        let mut g = corridor();
        assert!(pathing::solve(&mut g, Cartesian2DCoordinate::new(1, 1)).unwrap());
        let text = TextRender::new(&g, &AsciiGlyphs).to_string();
        assert_eq!(text, "#####\n#E*S#\n#####\n");
    }

    #[test]
    fn write_to_stream() {
        let g = corridor();
        let mut out = Vec::new();
        TextRender::new(&g, &AsciiGlyphs).write_to(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "#####\n#E S#\n#####\n");
    }

    #[test]
    fn one_line_per_row() {
        let mut g = Grid::new(Width(11), Height(7));
        MazeGenerator::from_seed(2).generate(&mut g).unwrap();
        let text = TextRender::new(&g, &AsciiGlyphs as &dyn GridDisplay).to_string();
        let lines = text.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), 7);
        assert!(lines.iter().all(|l| l.chars().count() == 11));
        assert_eq!(lines[0], "###########");
        assert_eq!(lines[1].chars().nth(1), Some('E'));
        assert_eq!(lines[5].chars().nth(9), Some('S'));
    }
}
