use super::direction::Direction;
use super::speed::Difficulty;
use crate::consts;

/// Something the player wants to happen, independent of how they asked for
/// it
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Intent {
    /// Steer the snake.  Applied at the next tick unless it would reverse the
    /// snake onto itself.
    Turn(Direction),

    /// Start a new game if the current one is over
    Confirm,

    /// Start a new game unconditionally
    Restart,

    /// Switch to a different speed profile
    SetDifficulty(Difficulty),
}

/// A pointer drag, measured in pixels from where it started to where it
/// ended.  Positive `dx` is rightwards; positive `dy` is downwards.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Swipe {
    pub(crate) dx: i32,
    pub(crate) dy: i32,
}

impl Swipe {
    /// Build a swipe from a drag across terminal cells
    pub(crate) fn from_cells(columns: i32, rows: i32) -> Swipe {
        Swipe {
            dx: columns.saturating_mul(consts::COLUMN_PIXELS),
            dy: rows.saturating_mul(consts::ROW_PIXELS),
        }
    }

    /// Interpret the swipe as a direction.  The axis with the greater travel
    /// wins, with ties going to the vertical axis, and the travel along that
    /// axis must exceed [`SWIPE_THRESHOLD`][consts::SWIPE_THRESHOLD].
    pub(crate) fn direction(self) -> Option<Direction> {
        let (adx, ady) = (self.dx.unsigned_abs(), self.dy.unsigned_abs());
        let threshold = consts::SWIPE_THRESHOLD.unsigned_abs();
        if adx > ady {
            (adx > threshold).then(|| {
                if self.dx > 0 {
                    Direction::Right
                } else {
                    Direction::Left
                }
            })
        } else {
            (ady > threshold).then(|| {
                if self.dy > 0 {
                    Direction::Down
                } else {
                    Direction::Up
                }
            })
        }
    }
}

/// The clickable elements drawn beside the board
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Button {
    Pad(Direction),
    Restart,
    Difficulty(Difficulty),
}

impl From<Button> for Intent {
    fn from(button: Button) -> Intent {
        match button {
            Button::Pad(d) => Intent::Turn(d),
            Button::Restart => Intent::Restart,
            Button::Difficulty(d) => Intent::SetDifficulty(d),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(31, 0, Some(Direction::Right))]
    #[case(30, 0, None)]
    #[case(-31, 5, Some(Direction::Left))]
    #[case(0, 31, Some(Direction::Down))]
    #[case(0, -30, None)]
    #[case(-10, -100, Some(Direction::Up))]
    #[case(40, 40, Some(Direction::Down))]
    #[case(-40, 40, Some(Direction::Down))]
    #[case(40, -40, Some(Direction::Up))]
    #[case(100, -99, Some(Direction::Right))]
    #[case(0, 0, None)]
    fn test_swipe_direction(#[case] dx: i32, #[case] dy: i32, #[case] r: Option<Direction>) {
        assert_eq!(Swipe { dx, dy }.direction(), r);
    }

    #[rstest]
    #[case(3, 0, None)]
    #[case(3, 1, None)]
    #[case(-3, 0, None)]
    #[case(0, 1, None)]
    #[case(4, 0, Some(Direction::Right))]
    #[case(-5, 1, Some(Direction::Left))]
    #[case(0, 2, Some(Direction::Down))]
    #[case(3, -2, Some(Direction::Up))]
    fn test_cell_swipe(#[case] columns: i32, #[case] rows: i32, #[case] r: Option<Direction>) {
        assert_eq!(Swipe::from_cells(columns, rows).direction(), r);
    }

    #[test]
    fn buttons_to_intents() {
        assert_eq!(
            Intent::from(Button::Pad(Direction::Left)),
            Intent::Turn(Direction::Left)
        );
        assert_eq!(Intent::from(Button::Restart), Intent::Restart);
        assert_eq!(
            Intent::from(Button::Difficulty(Difficulty::Hard)),
            Intent::SetDifficulty(Difficulty::Hard)
        );
    }
}
