mod clock;
mod direction;
mod grid;
mod input;
mod snake;
mod speed;
mod widgets;
pub(crate) use self::direction::Direction;
pub(crate) use self::input::{Intent, Swipe};
pub(crate) use self::speed::Difficulty;
pub(crate) use self::widgets::GameLayout;
use self::clock::GameClock;
use self::grid::Bounds;
use self::snake::Snake;
use crate::consts;
use rand::Rng;
use ratatui::layout::Position;
use std::time::{Duration, Instant};

/// A game of Snake together with the settings & timer that drive it.
///
/// Nothing in here touches the terminal: time is passed in as `now`
/// arguments, and randomness comes from `R`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Game<R = rand::rngs::ThreadRng> {
    rng: R,
    state: GameState,
    bounds: Bounds,
    high_score: u32,
    difficulty: Difficulty,
    interval: Duration,
    clock: GameClock,
}

impl Game<rand::rngs::ThreadRng> {
    pub(crate) fn new(difficulty: Difficulty, high_score: u32, now: Instant) -> Self {
        Game::new_with_rng(difficulty, high_score, rand::rng(), now)
    }
}

impl<R: Rng> Game<R> {
    /// Create a game and start playing it immediately
    pub(crate) fn new_with_rng(
        difficulty: Difficulty,
        high_score: u32,
        rng: R,
        now: Instant,
    ) -> Game<R> {
        let mut game = Game {
            rng,
            state: GameState::new(),
            bounds: Bounds::GRID,
            high_score,
            difficulty,
            interval: difficulty.profile().base,
            clock: GameClock::default(),
        };
        game.init_game(now);
        game
    }

    /// Reset everything except the high score & difficulty and (re)start the
    /// clock
    pub(crate) fn init_game(&mut self, now: Instant) {
        self.state = GameState::new();
        self.state.food = self.bounds.spawn_food(&self.state.snake, &mut self.rng);
        self.interval = self.difficulty.profile().base;
        self.clock.start(self.interval, now);
        tracing::info!(difficulty = %self.difficulty, interval = ?self.interval, "Starting new game");
    }

    /// Run a tick if the clock says one is due
    pub(crate) fn advance(&mut self, now: Instant) -> Option<TickOutcome> {
        if self.clock.poll(now) {
            self.tick(now)
        } else {
            None
        }
    }

    /// Move the snake one cell.  Returns `None` if the game was already over.
    pub(crate) fn tick(&mut self, now: Instant) -> Option<TickOutcome> {
        if !self.state.running {
            return None;
        }
        self.state.direction = self.state.pending_direction;
        let Some(head) = self
            .state
            .direction
            .advance(self.state.snake.head(), self.bounds)
        else {
            return Some(self.game_over(GameOver::WallCollision));
        };
        // The tail hasn't moved out of the way yet, so running into it counts.
        if self.state.snake.occupies(head) {
            return Some(self.game_over(GameOver::SelfCollision));
        }
        self.state.snake.push_head(head);
        if self.state.food != Some(head) {
            self.state.snake.pop_tail();
            return Some(TickOutcome::Moved);
        }
        self.state.score += 1;
        if self.state.score > self.high_score {
            self.high_score = self.state.score;
            tracing::info!(high_score = self.high_score, "New high score");
        }
        self.interval = self.difficulty.profile().interval(self.state.score);
        self.clock.start(self.interval, now);
        tracing::debug!(score = self.state.score, interval = ?self.interval, "Ate food");
        self.state.food = self.bounds.spawn_food(&self.state.snake, &mut self.rng);
        if self.state.food.is_none() {
            return Some(self.game_over(GameOver::BoardFilled));
        }
        Some(TickOutcome::Ate)
    }

    /// Apply a player's input
    pub(crate) fn handle_intent(&mut self, intent: Intent, now: Instant) {
        match intent {
            Intent::Turn(direction) => {
                if self.state.running && !direction.is_reverse_of(self.state.direction) {
                    self.state.pending_direction = direction;
                }
            }
            Intent::Confirm => {
                if !self.state.running {
                    self.init_game(now);
                }
            }
            Intent::Restart => self.init_game(now),
            Intent::SetDifficulty(difficulty) => self.set_difficulty(difficulty, now),
        }
    }

    /// Switch speed profiles.  The interval drops back to the new profile's
    /// base speed regardless of the score; it only ramps up again at the next
    /// bite.
    fn set_difficulty(&mut self, difficulty: Difficulty, now: Instant) {
        self.difficulty = difficulty;
        self.interval = difficulty.profile().base;
        if self.state.running {
            self.clock.start(self.interval, now);
        }
        tracing::info!(%difficulty, interval = ?self.interval, "Changed difficulty");
    }
}

impl<R> Game<R> {
    fn game_over(&mut self, reason: GameOver) -> TickOutcome {
        self.state.running = false;
        self.state.ended = Some(reason);
        self.clock.stop();
        tracing::info!(score = self.state.score, ?reason, "Game over");
        TickOutcome::GameOver(reason)
    }

    pub(crate) fn state(&self) -> &GameState {
        &self.state
    }

    #[cfg(test)]
    pub(crate) fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub(crate) fn high_score(&self) -> u32 {
        self.high_score
    }

    pub(crate) fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// The current time between ticks
    pub(crate) fn interval(&self) -> Duration {
        self.interval
    }

    /// When the next tick is due, if the game is in progress
    pub(crate) fn deadline(&self) -> Option<Instant> {
        self.clock.deadline()
    }
}

/// Everything that changes while a game is played
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct GameState {
    pub(crate) snake: Snake,

    /// Only `None` once the snake has filled the entire board
    pub(crate) food: Option<Position>,

    /// The direction the snake moved in on the last tick
    pub(crate) direction: Direction,

    /// The direction the snake will move in on the next tick
    pub(crate) pending_direction: Direction,

    pub(crate) score: u32,
    pub(crate) running: bool,

    /// Why the game ended
    pub(crate) ended: Option<GameOver>,
}

impl GameState {
    fn new() -> GameState {
        GameState {
            snake: Snake::new(consts::INITIAL_SNAKE),
            food: None,
            direction: Direction::Right,
            pending_direction: Direction::Right,
            score: 0,
            running: true,
            ended: None,
        }
    }
}

/// What happened during a tick
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum TickOutcome {
    Moved,
    Ate,
    GameOver(GameOver),
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum GameOver {
    WallCollision,
    SelfCollision,
    /// The snake has filled the board and there is nowhere left to put food.
    BoardFilled,
}

impl GameOver {
    pub(crate) fn is_collision(self) -> bool {
        matches!(self, GameOver::WallCollision | GameOver::SelfCollision)
    }
}
