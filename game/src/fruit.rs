//! Fruit placement.

use crate::{aux::Coordinates, error::GameError, grid::Grid};
use rand::{seq::IteratorRandom, Rng};

/// Picks cells for fruits which are going to be eaten by the snake.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FruitSpawner {
    grid: Grid,
}

impl FruitSpawner {
    /// How many random cells are tried before falling back to scanning the
    /// whole grid for free ones.
    pub const SAMPLE_ATTEMPTS: usize = 32;

    /// Return a new [`FruitSpawner`] for the `grid`.
    pub fn new(grid: Grid) -> Self {
        Self { grid }
    }

    /// Return a cell chosen uniformly among ones for which `occupied` is
    /// `false`, or [`GameError::BoardFull`] if there's no such cell.
    ///
    /// Rejection sampling is uniform over free cells, and so is the scan, so
    /// their combination is too.
    pub fn spawn<R, F>(&self, rng: &mut R, occupied: F) -> Result<Coordinates, GameError>
    where
        R: Rng + ?Sized,
        F: Fn(Coordinates) -> bool,
    {
        for _ in 0..Self::SAMPLE_ATTEMPTS {
            let coords = self.grid.random_coords(rng);
            if !occupied(coords) {
                return Ok(coords);
            }
        }

        self.grid
            .cells()
            .filter(|&coords| !occupied(coords))
            .choose(rng)
            .ok_or(GameError::BoardFull)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};
    use std::collections::HashSet;

    #[test]
    fn avoids_occupied_cells() -> crate::Result<()> {
        let grid = Grid::new((4, 4))?;
        let spawner = FruitSpawner::new(grid);
        let mut rng = StdRng::seed_from_u64(42);

        // Everything but the last row is taken.
        let occupied = |c: Coordinates| c.y < 3;
        for _ in 0..200 {
            let fruit = spawner.spawn(&mut rng, occupied)?;
            assert_eq!(fruit.y, 3);
            assert!(grid.in_bounds(fruit));
        }
        Ok(())
    }

    #[test]
    fn finds_the_last_free_cell() -> crate::Result<()> {
        let grid = Grid::new((20, 20))?;
        let spawner = FruitSpawner::new(grid);
        let mut rng = StdRng::seed_from_u64(3);
        let free = Coordinates::new(13, 7);

        for _ in 0..20 {
            assert_eq!(spawner.spawn(&mut rng, |c| c != free)?, free);
        }
        Ok(())
    }

    #[test]
    fn board_full() -> crate::Result<()> {
        let spawner = FruitSpawner::new(Grid::new((3, 3))?);
        let mut rng = StdRng::seed_from_u64(0);

        assert_eq!(spawner.spawn(&mut rng, |_| true), Err(GameError::BoardFull));
        Ok(())
    }

    #[test]
    fn reaches_every_free_cell() -> crate::Result<()> {
        let grid = Grid::new((3, 3))?;
        let spawner = FruitSpawner::new(grid);
        let mut rng = StdRng::seed_from_u64(9);
        let center = grid.center();

        let seen: HashSet<Coordinates> = (0..1000)
            .map(|_| spawner.spawn(&mut rng, |c| c == center))
            .collect::<Result<_, _>>()?;
        assert_eq!(seen.len(), 8);
        assert!(!seen.contains(&center));
        Ok(())
    }

    #[test]
    fn same_seed_same_fruit() -> crate::Result<()> {
        let spawner = FruitSpawner::new(Grid::default());
        let mut rng1 = StdRng::seed_from_u64(1234);
        let mut rng2 = StdRng::seed_from_u64(1234);

        for _ in 0..50 {
            assert_eq!(
                spawner.spawn(&mut rng1, |_| false)?,
                spawner.spawn(&mut rng2, |_| false)?
            );
        }
        Ok(())
    }
}
