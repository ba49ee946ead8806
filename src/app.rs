use crate::command::Command;
use crate::game::{Game, GameLayout, Intent, Swipe};
use crate::highscore::HighScoreFile;
use crossterm::event::{poll, read, Event, MouseButton, MouseEvent, MouseEventKind};
use rand::Rng;
use ratatui::{
    backend::Backend,
    layout::{Position, Rect},
    Terminal,
};
use std::io;
use std::time::Instant;

/// Ties a [`Game`] to the terminal: draws it, feeds it input events & clock
/// ticks, and writes new high scores to disk
#[derive(Clone, Debug)]
pub(crate) struct App<R = rand::rngs::ThreadRng> {
    game: Game<R>,

    /// Where to save the high score; `None` if it is not being saved
    store: Option<HighScoreFile>,

    /// The high score most recently written to `store`
    saved_high_score: u32,

    /// The area of the last frame drawn, used to locate mouse clicks
    area: Rect,

    /// Where the left mouse button was last pressed
    drag_start: Option<Position>,

    quitting: bool,
}

impl<R: Rng> App<R> {
    pub(crate) fn new(game: Game<R>, store: Option<HighScoreFile>) -> App<R> {
        let saved_high_score = game.high_score();
        App {
            game,
            store,
            saved_high_score,
            area: Rect::default(),
            drag_start: None,
            quitting: false,
        }
    }

    pub(crate) fn run<B: Backend>(mut self, mut terminal: Terminal<B>) -> io::Result<()> {
        while !self.quitting {
            self.draw(&mut terminal)?;
            self.process_input()?;
        }
        tracing::info!(high_score = self.game.high_score(), "Quitting");
        Ok(())
    }

    fn draw<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        let frame = terminal.draw(|frame| frame.render_widget(&self.game, frame.area()))?;
        self.area = frame.area;
        Ok(())
    }

    /// Wait for either an input event or the next tick, whichever comes first,
    /// and handle it.  Once the game is over, there are no more ticks, so this
    /// blocks until an event arrives.
    fn process_input(&mut self) -> io::Result<()> {
        match self.game.deadline() {
            Some(deadline) => {
                if poll(deadline.saturating_duration_since(Instant::now()))? {
                    self.handle_event(read()?, Instant::now());
                }
                self.advance(Instant::now());
            }
            None => self.handle_event(read()?, Instant::now()),
        }
        Ok(())
    }

    fn advance(&mut self, now: Instant) {
        if let Some(outcome) = self.game.advance(now) {
            tracing::trace!(?outcome, "Tick");
            if self.game.high_score() > self.saved_high_score {
                self.save_high_score();
            }
        }
    }

    fn handle_event(&mut self, event: Event, now: Instant) {
        if let Some(ev) = event.as_key_press_event() {
            match Command::from_key_event(ev) {
                Some(Command::Quit) => self.quitting = true,
                Some(cmd) => {
                    if let Some(intent) = cmd.intent() {
                        self.game.handle_intent(intent, now);
                    }
                }
                None => (),
            }
        } else if let Event::Mouse(MouseEvent {
            kind, column, row, ..
        }) = event
        {
            let pos = Position::new(column, row);
            match kind {
                MouseEventKind::Down(MouseButton::Left) => self.drag_start = Some(pos),
                MouseEventKind::Up(MouseButton::Left) => {
                    if let Some(intent) = self
                        .drag_start
                        .take()
                        .and_then(|start| self.release_intent(start, pos))
                    {
                        self.game.handle_intent(intent, now);
                    }
                }
                _ => (),
            }
        }
    }

    /// Interpret a press of the left mouse button at `start` followed by a
    /// release at `end`: either a click on one of the on-screen buttons or a
    /// swipe
    fn release_intent(&self, start: Position, end: Position) -> Option<Intent> {
        if start == end {
            GameLayout::new(self.area)
                .button_at(end)
                .map(Intent::from)
        } else {
            Swipe::from_cells(
                i32::from(end.x) - i32::from(start.x),
                i32::from(end.y) - i32::from(start.y),
            )
            .direction()
            .map(Intent::Turn)
        }
    }

    fn save_high_score(&mut self) {
        let high_score = self.game.high_score();
        if let Some(ref store) = self.store {
            match store.save(high_score) {
                Ok(()) => tracing::debug!(high_score, path = %store.path().display(), "Saved high score"),
                Err(e) => tracing::warn!(
                    path = %store.path().display(),
                    "{:#}",
                    anyhow::Error::new(e)
                ),
            }
        }
        // Don't retry a failed save on every tick; the next new high score
        // will try again.
        self.saved_high_score = high_score;
    }
}
