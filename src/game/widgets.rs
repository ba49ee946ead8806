use super::input::Button;
use super::speed::moves_per_second;
use super::{Difficulty, Direction, Game, GameOver, GameState};
use crate::consts;
use crate::util::{center_rect, get_display_area};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Flex, Layout, Margin, Position, Rect, Size},
    style::Style,
    text::{Line, Span, Text},
    widgets::{
        block::{Block, Padding},
        Clear, Widget,
    },
};

/// Where each part of the game screen goes within the terminal
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct GameLayout {
    pub(crate) score_bar: Rect,
    /// The board including its border
    pub(crate) board: Rect,
    pub(crate) panel: Rect,
    pub(crate) help: Rect,
}

impl GameLayout {
    const BOARD_SIZE: Size = Size {
        width: consts::GRID_SIZE * consts::CELL_WIDTH + 2,
        height: consts::GRID_SIZE + 2,
    };

    pub(crate) fn new(area: Rect) -> GameLayout {
        let display = get_display_area(area);
        let [score_bar, middle, help] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .areas(display);
        let [board_column, panel] = Layout::horizontal([
            Constraint::Length(Self::BOARD_SIZE.width),
            Constraint::Length(SidePanel::WIDTH),
        ])
        .flex(Flex::Center)
        .spacing(3)
        .areas(middle);
        let board = center_rect(board_column, Self::BOARD_SIZE);
        let panel = center_rect(
            panel,
            Size {
                width: SidePanel::WIDTH,
                height: SidePanel::HEIGHT,
            },
        );
        GameLayout {
            score_bar,
            board,
            panel,
            help,
        }
    }

    /// Return the on-screen button at `pos`, if any
    pub(crate) fn button_at(&self, pos: Position) -> Option<Button> {
        SidePanel::buttons(self.panel)
            .into_iter()
            .find_map(|(button, rect)| rect.contains(pos).then_some(button))
    }
}

impl<R> Widget for &Game<R> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let layout = GameLayout::new(area);
        let state = self.state();
        Line::styled(
            format!(
                " Score: {}    High Score: {}    Speed: {:.1} moves/s",
                state.score,
                self.high_score(),
                moves_per_second(self.interval()),
            ),
            consts::SCORE_BAR_STYLE,
        )
        .render(layout.score_bar, buf);

        Board(state).render(layout.board, buf);
        SidePanel {
            difficulty: self.difficulty(),
        }
        .render(layout.panel, buf);
        help_line().render(layout.help, buf);

        if !state.running {
            let popup = center_rect(
                layout.board,
                Size {
                    width: GameOverPopup::WIDTH,
                    height: GameOverPopup::HEIGHT,
                },
            );
            GameOverPopup { score: state.score }.render(popup, buf);
        }
    }
}

fn help_line() -> Line<'static> {
    Line::from_iter([
        Span::raw(" Move: "),
        Span::styled("←↓↑→", consts::KEY_STYLE),
        Span::raw(" / "),
        Span::styled("hjkl", consts::KEY_STYLE),
        Span::raw(" / "),
        Span::styled("wasd", consts::KEY_STYLE),
        Span::raw(" — Speed: "),
        Span::styled("1 2 3", consts::KEY_STYLE),
        Span::raw(" — Restart: "),
        Span::styled("r", consts::KEY_STYLE),
        Span::raw(" — Quit: "),
        Span::styled("q", consts::KEY_STYLE),
    ])
}

/// The bordered playing field
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct Board<'a>(&'a GameState);

impl Widget for Board<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::bordered().render(area, buf);
        let state = self.0;
        let mut level = Canvas {
            area: area.inner(Margin::new(1, 1)),
            buf,
        };
        for p in state.snake.cells().skip(1) {
            level.draw_cell(p, consts::SNAKE_BODY_SYMBOL, consts::SNAKE_STYLE);
        }
        if let Some(pos) = state.food {
            level.draw_cell(pos, consts::FOOD_SYMBOL, consts::FOOD_STYLE);
        }
        if state.ended.is_some_and(GameOver::is_collision) {
            level.draw_cell(
                state.snake.head(),
                consts::COLLISION_SYMBOL,
                consts::COLLISION_STYLE,
            );
        } else {
            level.draw_cell(
                state.snake.head(),
                head_symbol(state.direction),
                consts::SNAKE_STYLE,
            );
        }
    }
}

/// Return the glyph to use for drawing the snake's head
fn head_symbol(direction: Direction) -> char {
    match direction {
        Direction::Up => consts::SNAKE_HEAD_NORTH_SYMBOL,
        Direction::Down => consts::SNAKE_HEAD_SOUTH_SYMBOL,
        Direction::Right => consts::SNAKE_HEAD_EAST_SYMBOL,
        Direction::Left => consts::SNAKE_HEAD_WEST_SYMBOL,
    }
}

/// Maps grid cells to terminal cells.  Each grid cell is
/// [`CELL_WIDTH`][consts::CELL_WIDTH] columns wide; its glyph goes in the
/// first column.
#[derive(Debug, Eq, PartialEq)]
struct Canvas<'a> {
    area: Rect,
    buf: &'a mut Buffer,
}

impl Canvas<'_> {
    fn draw_cell(&mut self, pos: Position, symbol: char, style: Style) {
        let Some(x) = pos
            .x
            .checked_mul(consts::CELL_WIDTH)
            .and_then(|x| self.area.x.checked_add(x))
        else {
            return;
        };
        let Some(y) = self.area.y.checked_add(pos.y) else {
            return;
        };
        if let Some(cell) = self.buf.cell_mut((x, y)) {
            cell.set_char(symbol);
            cell.set_style(Style::reset().patch(style));
        }
    }
}

/// Difficulty selector, direction pad, and restart button
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct SidePanel {
    difficulty: Difficulty,
}

impl SidePanel {
    const WIDTH: u16 = 17;
    const HEIGHT: u16 = 11;
    const PAD_WIDTH: u16 = 11;
    const PAD_TOP: u16 = 6;
    const RESTART_LABEL: &'static str = "[Restart (r)]";
    const RESTART_TOP: u16 = 10;

    /*
     * ┌ Difficulty ───┐
     * │ ● Easy    (1) │
     * │ ○ Medium  (2) │
     * │ ○ Hard    (3) │
     * └───────────────┘
     *
     *        [↑]
     *    [←]     [→]
     *        [↓]
     *
     *  [Restart (r)]
     */

    /// Compute the clickable areas of a panel drawn in `area`
    fn buttons(area: Rect) -> Vec<(Button, Rect)> {
        let mut buttons = Vec::new();
        for (d, y) in Difficulty::iter().zip(area.y.saturating_add(1)..) {
            buttons.push((
                Button::Difficulty(d),
                Rect::new(area.x.saturating_add(1), y, Self::WIDTH - 2, 1),
            ));
        }
        let pad_x = area.x.saturating_add((Self::WIDTH - Self::PAD_WIDTH) / 2);
        let pad_y = area.y.saturating_add(Self::PAD_TOP);
        for (direction, dx, dy) in [
            (Direction::Up, 4, 0),
            (Direction::Left, 0, 1),
            (Direction::Right, 8, 1),
            (Direction::Down, 4, 2),
        ] {
            buttons.push((
                Button::Pad(direction),
                Rect::new(pad_x.saturating_add(dx), pad_y.saturating_add(dy), 3, 1),
            ));
        }
        #[allow(clippy::cast_possible_truncation)]
        let restart_width = Self::RESTART_LABEL.chars().count() as u16;
        buttons.push((
            Button::Restart,
            Rect::new(
                area.x.saturating_add((Self::WIDTH - restart_width) / 2),
                area.y.saturating_add(Self::RESTART_TOP),
                restart_width,
                1,
            ),
        ));
        buttons
    }
}

impl Widget for SidePanel {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::bordered()
            .title(" Difficulty ")
            .render(Rect { height: 5, ..area }, buf);
        for (button, rect) in Self::buttons(area) {
            let line = match button {
                Button::Difficulty(d) => {
                    let (mark, style) = if d == self.difficulty {
                        ('●', consts::SELECTED_STYLE)
                    } else {
                        ('○', Style::new())
                    };
                    Line::from_iter([
                        Span::styled(format!(" {mark} {d:<7} ("), style),
                        Span::styled(d.hotkey().to_string(), consts::KEY_STYLE.patch(style)),
                        Span::styled(")", style),
                    ])
                }
                Button::Pad(direction) => {
                    let arrow = match direction {
                        Direction::Up => "[↑]",
                        Direction::Down => "[↓]",
                        Direction::Left => "[←]",
                        Direction::Right => "[→]",
                    };
                    Line::styled(arrow, consts::BUTTON_STYLE)
                }
                Button::Restart => Line::styled(Self::RESTART_LABEL, consts::BUTTON_STYLE),
            };
            line.render(rect, buf);
        }
    }
}

/// Pop-up shown over the board once the game has ended
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct GameOverPopup {
    score: u32,
}

impl GameOverPopup {
    const WIDTH: u16 = 26;
    const HEIGHT: u16 = 7;
}

impl Widget for GameOverPopup {
    /*
     * ┌────── GAME OVER ───────┐
     * │                        │
     * │     Final Score: 3     │
     * │                        │
     * │  Press Space or Enter  │
     * │     to play again      │
     * └────────────────────────┘
     */

    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .title(" GAME OVER ")
            .title_alignment(Alignment::Center)
            .padding(Padding::top(1))
            .style(Style::reset());
        let inner = block.inner(area);
        Clear.render(area, buf);
        block.render(area, buf);
        Text::from_iter([
            Line::from(format!("Final Score: {}", self.score)),
            Line::default(),
            Line::from_iter([
                Span::raw("Press "),
                Span::styled("Space", consts::KEY_STYLE),
                Span::raw(" or "),
                Span::styled("Enter", consts::KEY_STYLE),
            ]),
            Line::from("to play again"),
        ])
        .centered()
        .render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::TickOutcome;
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Rng;
    use ratatui::style::Modifier;
    use std::collections::VecDeque;
    use std::time::Instant;

    const RNG_SEED: u64 = 0x0123456789ABCDEF;

    fn new_game() -> Game<ChaCha12Rng> {
        Game::new_with_rng(
            Difficulty::Medium,
            12,
            ChaCha12Rng::seed_from_u64(RNG_SEED),
            Instant::now(),
        )
    }

    fn row_text(buf: &Buffer, y: u16) -> String {
        (buf.area.left()..buf.area.right())
            .map(|x| buf[(x, y)].symbol())
            .collect()
    }

    fn screen_text(buf: &Buffer) -> Vec<String> {
        (buf.area.top()..buf.area.bottom())
            .map(|y| row_text(buf, y))
            .collect()
    }

    /// Return the terminal position at which the grid cell `pos` is drawn
    fn cell_origin(layout: &GameLayout, pos: Position) -> (u16, u16) {
        let inner = layout.board.inner(Margin::new(1, 1));
        (inner.x + pos.x * consts::CELL_WIDTH, inner.y + pos.y)
    }

    #[test]
    fn layout_fits_display() {
        let area = Rect::new(0, 0, 80, 24);
        let layout = GameLayout::new(area);
        assert_eq!(layout.score_bar, Rect::new(0, 0, 80, 1));
        assert_eq!(layout.help, Rect::new(0, 23, 80, 1));
        assert_eq!(layout.board.height, 22);
        assert_eq!(layout.board.width, 42);
        assert_eq!(layout.board.y, 1);
        assert!(layout.panel.x >= layout.board.right());
        assert!(layout.panel.right() <= area.right());
        assert_eq!(layout.panel.width, SidePanel::WIDTH);
        assert_eq!(layout.panel.height, SidePanel::HEIGHT);
    }

    #[test]
    fn new_game_render() {
        let game = new_game();
        let area = Rect::new(0, 0, 80, 24);
        let mut buffer = Buffer::empty(area);
        game.render(area, &mut buffer);
        let layout = GameLayout::new(area);
        let state = game.state();

        assert!(row_text(&buffer, 0)
            .starts_with(" Score: 0    High Score: 12    Speed: 5.3 moves/s"));
        assert!(buffer[(0, 0)].modifier.contains(Modifier::REVERSED));

        let head = cell_origin(&layout, Position::new(10, 10));
        assert_eq!(buffer[head].symbol(), "<");
        assert_eq!(buffer[head].fg, consts::SNAKE_STYLE.fg.unwrap());
        for x in [9, 8] {
            let body = cell_origin(&layout, Position::new(x, 10));
            assert_eq!(buffer[body].symbol(), "⚬");
        }
        let food = cell_origin(&layout, state.food.unwrap());
        assert_eq!(buffer[food].symbol(), "●");
        assert_eq!(buffer[food].fg, consts::FOOD_STYLE.fg.unwrap());

        let text = screen_text(&buffer);
        assert!(text.iter().all(|line| !line.contains("GAME OVER")));
        assert!(text.iter().any(|line| line.contains("● Medium  (2)")));
        assert!(text.iter().any(|line| line.contains("○ Easy    (1)")));
        assert!(text.iter().any(|line| line.contains("[Restart (r)]")));
        assert!(text.iter().any(|line| line.contains("[←]     [→]")));
        assert!(text[23].starts_with(" Move: ←↓↑→ / hjkl / wasd"));
    }

    #[test]
    fn game_over_render() {
        let mut game = new_game();
        game.state.snake.body = VecDeque::from([
            Position::new(19, 4),
            Position::new(18, 4),
            Position::new(17, 4),
        ]);
        game.state.food = Some(Position::new(0, 0));
        game.state.score = 3;
        let now = Instant::now();
        assert_eq!(
            game.tick(now),
            Some(TickOutcome::GameOver(GameOver::WallCollision))
        );
        let area = Rect::new(0, 0, 80, 24);
        let mut buffer = Buffer::empty(area);
        game.render(area, &mut buffer);
        let layout = GameLayout::new(area);

        let head = cell_origin(&layout, Position::new(19, 4));
        assert_eq!(buffer[head].symbol(), "×");
        assert_eq!(buffer[head].fg, consts::COLLISION_STYLE.fg.unwrap());
        assert!(buffer[head].modifier.contains(Modifier::REVERSED));

        let text = screen_text(&buffer);
        assert!(text.iter().any(|line| line.contains(" GAME OVER ")));
        assert!(text.iter().any(|line| line.contains("Final Score: 3")));
        assert!(text.iter().any(|line| line.contains("Press Space or Enter")));
    }

    #[test]
    fn buttons_are_where_they_are_drawn() {
        let game = new_game();
        let area = Rect::new(0, 0, 80, 24);
        let mut buffer = Buffer::empty(area);
        game.render(area, &mut buffer);
        let layout = GameLayout::new(area);
        for (button, rect) in SidePanel::buttons(layout.panel) {
            assert_eq!(layout.button_at(rect.as_position()), Some(button));
            let label = (rect.left()..rect.right())
                .map(|x| buffer[(x, rect.y)].symbol())
                .collect::<String>();
            let expected = match button {
                Button::Pad(Direction::Up) => "[↑]",
                Button::Pad(Direction::Down) => "[↓]",
                Button::Pad(Direction::Left) => "[←]",
                Button::Pad(Direction::Right) => "[→]",
                Button::Restart => "[Restart (r)]",
                Button::Difficulty(Difficulty::Easy) => " ○ Easy    (1) ",
                Button::Difficulty(Difficulty::Medium) => " ● Medium  (2) ",
                Button::Difficulty(Difficulty::Hard) => " ○ Hard    (3) ",
            };
            assert_eq!(label, expected, "label for {button:?}");
        }
        assert_eq!(layout.button_at(Position::new(0, 0)), None);
        assert_eq!(layout.button_at(layout.board.as_position()), None);
    }
}
