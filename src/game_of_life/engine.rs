//! Simulation engine: generation bookkeeping on top of the stepping rule

use super::grid::{Cell, Grid};
use super::io::{load_grid_from_file, save_grid_to_file};
use super::rules::GameOfLifeRules;
use crate::error::Result;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::path::Path;
use tracing::{debug, trace};

/// A running Game of Life simulation.
///
/// Holds the live grid plus exactly one generation of history, which is what
/// [`GameOfLife::is_changing`] compares against.
#[derive(Debug, Clone)]
pub struct GameOfLife {
    previous_generation: Grid,
    current_generation: Grid,
    max_generations: Option<usize>,
    generation_count: usize,
}

impl GameOfLife {
    /// Create an engine, drawing random cells from OS entropy when `randomize` is set
    pub fn new(
        rows: usize,
        columns: usize,
        randomize: bool,
        max_generations: Option<usize>,
    ) -> Result<Self> {
        let mut rng = ChaCha8Rng::from_entropy();
        Self::with_rng(rows, columns, randomize, max_generations, &mut rng)
    }

    /// Create an engine whose random initial grid is reproducible from `seed`
    pub fn seeded(
        rows: usize,
        columns: usize,
        randomize: bool,
        max_generations: Option<usize>,
        seed: u64,
    ) -> Result<Self> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        Self::with_rng(rows, columns, randomize, max_generations, &mut rng)
    }

    /// Create an engine drawing random cells from the supplied generator
    pub fn with_rng<R: Rng + ?Sized>(
        rows: usize,
        columns: usize,
        randomize: bool,
        max_generations: Option<usize>,
        rng: &mut R,
    ) -> Result<Self> {
        let current_generation = if randomize {
            Grid::from_fn(rows, columns, |_| rng.gen_bool(0.5))?
        } else {
            Grid::new(rows, columns)?
        };

        debug!(rows, columns, randomize, ?max_generations, "created engine");
        Self::from_grid(current_generation, max_generations)
    }

    /// Create an engine whose current generation is `grid`
    pub fn from_grid(grid: Grid, max_generations: Option<usize>) -> Result<Self> {
        let previous_generation = Grid::new(grid.rows(), grid.columns())?;

        Ok(Self {
            previous_generation,
            current_generation: grid,
            max_generations,
            generation_count: 1,
        })
    }

    /// Load an engine from a grid text file; the generation cap is left unbounded
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let grid = load_grid_from_file(path)?;
        Self::from_grid(grid, None)
    }

    /// Write the current generation to `path`, replacing any existing file.
    ///
    /// Missing parent directories are created first.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        save_grid_to_file(&self.current_generation, path)
    }

    pub fn rows(&self) -> usize {
        self.current_generation.rows()
    }

    pub fn columns(&self) -> usize {
        self.current_generation.columns()
    }

    pub fn current_generation(&self) -> &Grid {
        &self.current_generation
    }

    pub fn previous_generation(&self) -> &Grid {
        &self.previous_generation
    }

    pub fn generation_count(&self) -> usize {
        self.generation_count
    }

    pub fn max_generations(&self) -> Option<usize> {
        self.max_generations
    }

    pub fn set_max_generations(&mut self, max_generations: Option<usize>) {
        self.max_generations = max_generations;
    }

    /// Living neighbours of `cell` in the current generation
    pub fn count_neighbours(&self, cell: Cell) -> Result<u8> {
        GameOfLifeRules::count_neighbours(&self.current_generation, cell)
    }

    /// The generation that would follow the current one. Does not touch engine state.
    pub fn compute_next_generation(&self) -> Grid {
        GameOfLifeRules::evolve(&self.current_generation)
    }

    /// Advance one generation
    pub fn step(&mut self) {
        let next = self.compute_next_generation();
        self.previous_generation = std::mem::replace(&mut self.current_generation, next);
        self.generation_count += 1;

        trace!(
            generation = self.generation_count,
            living = self.current_generation.living_count(),
            "stepped"
        );
    }

    /// True only when the count equals the cap exactly; a cap already passed never fires
    pub fn is_max_generations_exceeded(&self) -> bool {
        self.max_generations == Some(self.generation_count)
    }

    /// True while the last step (or initial state) differs from its predecessor
    pub fn is_changing(&self) -> bool {
        self.previous_generation != self.current_generation
    }

    /// Flip one cell of the current generation, returning its new state
    pub fn toggle_cell(&mut self, cell: Cell) -> Result<u8> {
        self.current_generation.toggle(cell)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LifeError;
    use tempfile::tempdir;

    const GLIDER: &str = "01000\n00100\n11100\n00000\n00000\n";

    fn glider() -> GameOfLife {
        GameOfLife::from_grid(GLIDER.parse().unwrap(), None).unwrap()
    }

    #[test]
    fn test_create_grid() {
        let life = GameOfLife::new(5, 5, false, None).unwrap();
        assert_eq!(life.current_generation(), &Grid::new(5, 5).unwrap());
        assert_eq!(life.previous_generation(), &Grid::new(5, 5).unwrap());
        assert_eq!(life.generation_count(), 1);
        assert_eq!(life.max_generations(), None);
    }

    #[test]
    fn test_seeded_randomization_is_reproducible() {
        let a = GameOfLife::seeded(20, 30, true, None, 42).unwrap();
        let b = GameOfLife::seeded(20, 30, true, None, 42).unwrap();

        assert_eq!(a.current_generation(), b.current_generation());
        assert_eq!(a.rows(), 20);
        assert_eq!(a.columns(), 30);
        // 600 fair coin flips all landing dead is not a realistic outcome
        assert!(!a.current_generation().is_empty());
        assert!(a.previous_generation().is_empty());
    }

    #[test]
    fn test_invalid_dimensions() {
        assert!(matches!(
            GameOfLife::new(0, 5, true, None),
            Err(LifeError::InvalidDimensions(_))
        ));
    }

    #[test]
    fn test_count_neighbours() {
        let life = glider();
        assert_eq!(life.count_neighbours(Cell::new(1, 1)).unwrap(), 5);
        assert_eq!(life.count_neighbours(Cell::new(4, 4)).unwrap(), 0);
        assert!(matches!(
            life.count_neighbours(Cell::new(usize::MAX, 0)),
            Err(LifeError::OutOfBounds { .. })
        ));
    }

    #[test]
    fn test_get_next_generation() {
        let life = glider();
        let expected: Grid = "00000\n10100\n01100\n01000\n00000\n".parse().unwrap();

        assert_eq!(life.compute_next_generation(), expected);
        assert_eq!(life.generation_count(), 1);
        assert_eq!(life.current_generation(), &GLIDER.parse::<Grid>().unwrap());
    }

    #[test]
    fn test_step() {
        let mut life = glider();
        let count = life.generation_count();
        let expected_prev = life.current_generation().clone();

        life.step();

        let expected_curr: Grid = "00000\n10100\n01100\n01000\n00000\n".parse().unwrap();
        assert_eq!(life.generation_count(), count + 1);
        assert_eq!(life.previous_generation(), &expected_prev);
        assert_eq!(life.current_generation(), &expected_curr);
        assert_eq!(life.rows(), 5);
        assert_eq!(life.columns(), 5);
    }

    #[test]
    fn test_is_max_generations_exceeded() {
        let mut life = glider();
        life.set_max_generations(Some(4));

        for _ in 0..10 {
            if life.is_max_generations_exceeded() {
                break;
            }
            life.step();
        }

        let expected: Grid = "00000\n01000\n00110\n01100\n00000\n".parse().unwrap();
        assert!(life.is_max_generations_exceeded());
        assert_eq!(life.generation_count(), 4);
        assert_eq!(life.current_generation(), &expected);

        life.step();
        assert!(!life.is_max_generations_exceeded());
    }

    #[test]
    fn test_cap_below_count_never_fires() {
        let mut life = glider();
        life.step();
        life.step();
        life.set_max_generations(Some(2));

        for _ in 0..5 {
            assert!(!life.is_max_generations_exceeded());
            life.step();
        }
    }

    #[test]
    fn test_is_changing() {
        let mut life = glider();
        assert!(life.is_changing());

        let before = life.current_generation().clone();
        life.step();
        assert!(life.is_changing());
        assert_ne!(&before, life.current_generation());
    }

    #[test]
    fn test_empty_grid_is_not_changing() {
        let mut life = GameOfLife::new(5, 5, false, None).unwrap();
        assert!(!life.is_changing());

        for _ in 0..3 {
            life.step();
            assert!(life.current_generation().is_empty());
            assert!(!life.is_changing());
        }
    }

    #[test]
    fn test_still_life_stops_changing() {
        let block: Grid = "0000\n0110\n0110\n0000\n".parse().unwrap();
        let mut life = GameOfLife::from_grid(block, None).unwrap();
        assert!(life.is_changing());

        life.step();
        assert!(!life.is_changing());
    }

    #[test]
    fn test_toggle_cell() {
        let mut life = glider();
        let previous = life.previous_generation().clone();

        assert_eq!(life.toggle_cell(Cell::new(4, 4)).unwrap(), 1);
        assert_eq!(life.toggle_cell(Cell::new(0, 1)).unwrap(), 0);
        assert_eq!(life.current_generation().get(Cell::new(4, 4)).unwrap(), 1);
        assert_eq!(life.previous_generation(), &previous);
        assert_eq!(life.generation_count(), 1);
    }

    #[test]
    fn test_toggle_out_of_bounds() {
        let mut life = glider();
        let before = life.current_generation().clone();

        assert!(matches!(
            life.toggle_cell(Cell::new(5, 0)),
            Err(LifeError::OutOfBounds { .. })
        ));
        assert_eq!(life.current_generation(), &before);
    }

    #[test]
    fn test_from_file() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("glider.txt");
        std::fs::write(&path, GLIDER).unwrap();

        let life = GameOfLife::load(&path).unwrap();
        assert_eq!(life.current_generation(), &GLIDER.parse::<Grid>().unwrap());
        assert!(life.previous_generation().is_empty());
        assert_eq!(life.max_generations(), None);
        assert_eq!(life.generation_count(), 1);
    }

    #[test]
    fn test_load_errors() {
        let temp_dir = tempdir().unwrap();
        assert!(matches!(
            GameOfLife::load(temp_dir.path().join("nope.txt")),
            Err(LifeError::NotFound(_))
        ));

        let ragged = temp_dir.path().join("ragged.txt");
        std::fs::write(&ragged, "010\n01\n").unwrap();
        assert!(matches!(
            GameOfLife::load(&ragged),
            Err(LifeError::InvalidDimensions(_))
        ));
    }

    #[test]
    fn test_save() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("saved.txt");

        let mut life = GameOfLife::seeded(5, 5, true, Some(10), 7).unwrap();
        life.step();
        life.save(&path).unwrap();
        assert!(path.is_file());

        let loaded = GameOfLife::load(&path).unwrap();
        assert_eq!(loaded.current_generation(), life.current_generation());
        assert_eq!(loaded.max_generations(), None);
        assert_eq!(loaded.generation_count(), 1);
    }
}
