use docopt::Docopt;
use log::{debug, info};
use serde_derive::Deserialize;
use mazes::{
    grid::Grid,
    grid_displays::{AsciiGlyphs, BlockGlyphs, GridDisplay, TextRender},
    maze::Maze,
    units::{Height, Width},
};
use std::{
    io,
    io::prelude::*,
    fs::File,
    process,
};

const USAGE: &str = "Mazes

Usage:
    mazes_driver -h | --help
    mazes_driver [--rows=<r>] [--columns=<c>] [--seed=<n>] [--ascii] [--no-solve] [--text-out=<path>] [--save-edges=<path>]

Options:
    -h --help              Show this screen.
    --rows=<r>             Number of rows in the grid. Asked for on standard input when not given.
    --columns=<c>          Number of columns in the grid. Asked for on standard input when not given.
                           Even row or column counts are increased by one.
    --seed=<n>             Seed for the maze generator, the same seed and size give the same maze.
    --ascii                Draw walls with '#' rather than a solid block.
    --no-solve             Only generate and show the maze.
    --text-out=<path>      Output file path for the text renderings, instead of standard output.
    --save-edges=<path>    Serialize the maze passages to a text file: each line is a pair of numbers. Line 1: n(#vertices) m(#edges). Line 2+ edge between vertices. Uses 1-based vertex indices.
";
#[derive(Debug, Deserialize)]
struct MazeArgs {
    flag_rows: Option<usize>,
    flag_columns: Option<usize>,
    flag_seed: Option<u64>,
    flag_ascii: bool,
    flag_no_solve: bool,
    flag_text_out: String,
    flag_save_edges: String,
}

mod errors {
    use error_chain::*;
    error_chain! {

        links {
            Maze(::mazes::errors::Error, ::mazes::errors::ErrorKind);
        }

        foreign_links {
            DocOptFailure(::docopt::Error);
            Io(::std::io::Error);
            BadDimension(::std::num::ParseIntError);
        }
    }
}
use crate::errors::*;

fn main() {
    env_logger::init();

    if let Err(ref e) = run() {
        eprintln!("error: {}", e);
        for cause in e.iter().skip(1) {
            eprintln!("caused by: {}", cause);
        }
        process::exit(1);
    }
}

fn run() -> Result<()> {

    let args: MazeArgs = Docopt::new(USAGE).and_then(|d| d.deserialize())?;
    debug!("{:?}", args);

    let rows = match args.flag_rows {
        Some(rows) => rows,
        None => request_dimension("Enter the number of rows for the board: ")?,
    };
    let columns = match args.flag_columns {
        Some(columns) => columns,
        None => request_dimension("Enter the number of columns for the board: ")?,
    };
    let (width, height) = (Width(columns).to_odd(), Height(rows).to_odd());
    info!("Maze size {}x{} (columns x rows)", width.0, height.0);

    let mut maze = if let Some(seed) = args.flag_seed {
        Maze::seeded(width, height, seed)?
    } else {
        Maze::new(width, height)?
    };
    maze.generate()?;

    if !args.flag_save_edges.is_empty() {
        save_maze_graph(maze.grid(), &args.flag_save_edges)?;
    }

    let glyphs: &dyn GridDisplay = if args.flag_ascii { &AsciiGlyphs } else { &BlockGlyphs };
    let mut text = TextRender::new(maze.grid(), glyphs).to_string();

    if !args.flag_no_solve {
        text.push_str("Solving the maze...\n");
        if maze.solve_from_entrance()?.is_some() {
            text.push_str("Maze solved:\n");
            text.push_str(&TextRender::new(maze.grid(), glyphs).to_string());
        } else {
            text.push_str("No solution was found for the maze.\n");
        }
    }

    if args.flag_text_out.is_empty() {
        print!("{}", text);
    } else {
        write_text_to_file(&text, &args.flag_text_out)
            .chain_err(|| format!("Failed to write maze to text file {}", args.flag_text_out))?;
    }

    Ok(())
}

/// Prompt on standard output and read one positive number from standard input.
fn request_dimension(prompt: &str) -> Result<usize> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    out.write_all(prompt.as_bytes())?;
    out.flush()?;

    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    let dimension = line.trim()
        .parse::<usize>()
        .chain_err(|| format!("'{}' is not a board size", line.trim()))?;
    Ok(dimension)
}

fn write_text_to_file(data: &str, file_name: &str) -> io::Result<()> {
    let mut f = File::create(file_name)?;
    f.write_all(data.as_bytes())?;
    Ok(())
}

fn save_maze_graph(maze_grid: &Grid, file_path: &str) -> Result<()> {
    write_text_to_file(&maze_grid.passage_edge_list(), file_path)
        .chain_err(|| format!("Failed to write maze graph to text file {}", file_path))?;
    Ok(())
}
