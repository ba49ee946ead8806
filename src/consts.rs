//! Assorted constants & hard-coded configuration
use ratatui::{
    layout::{Position, Size},
    style::{Color, Modifier, Style},
};

/// Width & height of the (square) playing grid, in cells
pub(crate) const GRID_SIZE: u16 = 20;

/// Positions of the snake's segments at the start of a game, head first.  The
/// snake starts out facing east.
pub(crate) const INITIAL_SNAKE: [Position; 3] = [
    Position { x: 10, y: 10 },
    Position { x: 9, y: 10 },
    Position { x: 8, y: 10 },
];

/// The speed only starts to ramp up once the score exceeds this value.
pub(crate) const SPEED_RAMP_OFFSET: u32 = 3;

/// Minimum travel, in pixels along the dominant axis, for a mouse drag to be
/// treated as a swipe.  The travel must be strictly greater than this.
pub(crate) const SWIPE_THRESHOLD: i32 = 30;

/// Nominal width of a terminal column in pixels, used to convert mouse drags
/// into swipe distances
pub(crate) const COLUMN_PIXELS: i32 = 8;

/// Nominal height of a terminal row in pixels
pub(crate) const ROW_PIXELS: i32 = 16;

/// Draw everything inside a rectangle of this size in the center of the
/// terminal window.
///
/// Cf. [`crate::util::get_display_area()`]
pub(crate) const DISPLAY_SIZE: Size = Size {
    width: 80,
    height: 24,
};

/// Number of terminal columns used to draw a single grid cell
pub(crate) const CELL_WIDTH: u16 = 2;

/// Glyph for the snake's head when it is moving north/up
pub(crate) const SNAKE_HEAD_NORTH_SYMBOL: char = 'v';

/// Glyph for the snake's head when it is moving south/down
pub(crate) const SNAKE_HEAD_SOUTH_SYMBOL: char = '^';

/// Glyph for the snake's head when it is moving east/right
pub(crate) const SNAKE_HEAD_EAST_SYMBOL: char = '<';

/// Glyph for the snake's head when it is moving west/left
pub(crate) const SNAKE_HEAD_WEST_SYMBOL: char = '>';

/// Glyph for the parts of the snake's body
pub(crate) const SNAKE_BODY_SYMBOL: char = '⚬';

/// Glyph for the food
pub(crate) const FOOD_SYMBOL: char = '●';

/// Glyph for the snake's head when it's collided with a wall or itself
pub(crate) const COLLISION_SYMBOL: char = '×';

/// Style for the snake's head and body
pub(crate) const SNAKE_STYLE: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);

/// Style for the food
pub(crate) const FOOD_STYLE: Style = Style::new().fg(Color::LightRed);

/// Style for [`COLLISION_SYMBOL`]
pub(crate) const COLLISION_STYLE: Style = Style::new()
    .fg(Color::LightRed)
    .add_modifier(Modifier::REVERSED);

/// Style for key codes shown in the interface
pub(crate) const KEY_STYLE: Style = Style::new().fg(Color::Yellow);

/// Style for the score bar at the top of the game screen
pub(crate) const SCORE_BAR_STYLE: Style = Style::new().add_modifier(Modifier::REVERSED);

/// Style for the currently-selected difficulty in the side panel
pub(crate) const SELECTED_STYLE: Style = Style::new().add_modifier(Modifier::UNDERLINED);

/// Style for clickable on-screen buttons
pub(crate) const BUTTON_STYLE: Style = Style::new().fg(Color::Cyan);
