//! Game of Life core functionality

pub mod engine;
pub mod grid;
pub mod io;
pub mod rules;

pub use engine::GameOfLife;
pub use grid::{Cell, Grid, ALIVE, DEAD};
pub use io::{
    create_example_grids, grid_to_string, load_grid_from_file, parse_grid_from_string,
    save_grid_to_file,
};
pub use rules::GameOfLifeRules;
