use super::snake::Snake;
use crate::consts;
use rand::Rng;
use ratatui::layout::Position;

/// The dimensions of the playing grid.  Cells are 0-indexed from the top-left
/// corner and there is no wraparound.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Bounds {
    pub(crate) width: u16,
    pub(crate) height: u16,
}

impl Bounds {
    pub(crate) const GRID: Bounds = Bounds {
        width: consts::GRID_SIZE,
        height: consts::GRID_SIZE,
    };

    pub(crate) fn cell_count(self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }

    /// Pick a uniformly random cell within the bounds that is not occupied by
    /// `snake`.  Cells are sampled until a free one turns up; returns `None`
    /// only if the snake covers the entire grid.
    pub(crate) fn spawn_food<R: Rng>(self, snake: &Snake, rng: &mut R) -> Option<Position> {
        if snake.len() >= self.cell_count() {
            return None;
        }
        loop {
            let pos = Position::new(
                rng.random_range(0..self.width),
                rng.random_range(0..self.height),
            );
            if !snake.occupies(pos) {
                return Some(pos);
            }
        }
    }
}
