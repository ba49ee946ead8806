use ratatui::layout::Position;
use std::collections::VecDeque;

/// Snake state.  Snate.
///
/// Holds the cells occupied by the snake, head first.  The snake is never
/// empty.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Snake {
    pub(super) body: VecDeque<Position>,
}

impl Snake {
    /// Create a new snake occupying `cells`, the first of which is the head.
    ///
    /// # Panics
    ///
    /// Panics if `cells` is empty.
    pub(crate) fn new<I: IntoIterator<Item = Position>>(cells: I) -> Snake {
        let body = VecDeque::from_iter(cells);
        assert!(!body.is_empty(), "a snake must have at least one segment");
        Snake { body }
    }

    /// Return the position of the snake's head
    pub(crate) fn head(&self) -> Position {
        self.body[0]
    }

    pub(crate) fn len(&self) -> usize {
        self.body.len()
    }

    /// Return the positions of all of the snake's segments, head first
    pub(crate) fn cells(&self) -> impl Iterator<Item = Position> + '_ {
        self.body.iter().copied()
    }

    /// Test whether any segment of the snake, including the head and the
    /// tail, is at `pos`
    pub(crate) fn occupies(&self, pos: Position) -> bool {
        self.body.contains(&pos)
    }

    /// Add a new head segment at `pos`
    pub(super) fn push_head(&mut self, pos: Position) {
        self.body.push_front(pos);
    }

    /// Remove the last segment.  A single-segment snake is left as it is.
    pub(super) fn pop_tail(&mut self) {
        if self.body.len() > 1 {
            let _ = self.body.pop_back();
        }
    }
}
