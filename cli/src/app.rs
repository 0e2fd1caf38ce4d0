use std::io::{BufRead, Write};

use anyhow::Result;
use mineboard_core::{Board, GameError, Session};
use rand::prelude::*;
use web_time::Instant;

use crate::command::{Command, USAGE};
use crate::render::render;
use crate::timer::Timer;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Terminal front-end state: the current snapshot, the elapsed-time display and the seed source for
/// new games.
pub struct App {
    session: Session,
    timer: Timer,
    seeds: SmallRng,
}

impl App {
    pub fn new(board: Board, seed: u64) -> Self {
        Self {
            session: Session::new(board, seed),
            timer: Timer::default(),
            seeds: SmallRng::seed_from_u64(seed),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Applies one command. Misplaced intents leave the session as it was.
    pub fn apply(&mut self, command: Command, now: Instant) -> Result<Flow, GameError> {
        log::debug!("command: {:?}", command);
        let next = match command {
            Command::Reveal(coords) => {
                let (next, outcome) = self.session.reveal(coords)?;
                log::debug!("reveal {:?}: {:?}", coords, outcome);
                next
            }
            Command::Flag(coords) => {
                let (next, outcome) = self.session.cycle_flag(coords)?;
                log::debug!("flag {:?}: {:?}", coords, outcome);
                next
            }
            Command::NewGame => self.session.reset(self.seeds.random())?,
            Command::Quit => return Ok(Flow::Quit),
        };
        self.session = next;
        self.timer.sync(self.session.phase(), now);
        Ok(Flow::Continue)
    }

    /// Reads commands line by line from `input` until `q` or end of input, redrawing after each one.
    pub fn run(&mut self, input: impl BufRead, out: &mut impl Write) -> Result<()> {
        self.draw(out)?;
        for line in input.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            let command = match line.parse::<Command>() {
                Ok(command) => command,
                Err(err) => {
                    writeln!(out, "{err}\n{USAGE}")?;
                    continue;
                }
            };

            match self.apply(command, Instant::now()) {
                Ok(Flow::Quit) => break,
                Ok(Flow::Continue) => self.draw(out)?,
                Err(err) => writeln!(out, "{err}")?,
            }
        }
        Ok(())
    }

    fn draw(&self, out: &mut impl Write) -> Result<()> {
        let elapsed = self.timer.display(Instant::now());
        write!(out, "{}", render(&self.session, &elapsed))?;
        out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mineboard_core::{GamePhase, VisibleCell};

    fn app() -> App {
        App::new(Board::new(8, 8, 10).unwrap(), 1234)
    }

    #[test]
    fn first_reveal_starts_the_game() {
        let mut app = app();
        let flow = app.apply(Command::Reveal((4, 4)), Instant::now()).unwrap();

        assert_eq!(flow, Flow::Continue);
        assert_eq!(app.session().phase(), GamePhase::Playing);
        assert_eq!(app.session().cell_at((4, 4)), VisibleCell::Revealed(0));
        assert!(app.timer.elapsed_secs(Instant::now()).is_some());
    }

    #[test]
    fn out_of_bounds_keeps_session() {
        let mut app = app();
        let before = app.session().clone();

        assert_eq!(
            app.apply(Command::Flag((8, 0)), Instant::now()),
            Err(GameError::InvalidCoords)
        );
        assert_eq!(app.session(), &before);
    }

    #[test]
    fn new_game_resets_with_fresh_seed() {
        let mut app = app();
        app.apply(Command::Reveal((0, 0)), Instant::now()).unwrap();
        app.apply(Command::NewGame, Instant::now()).unwrap();

        assert_eq!(app.session().phase(), GamePhase::Ready);
        assert_ne!(app.session().seed(), 1234);
        assert_eq!(app.timer.display(Instant::now()), "-");
    }

    #[test]
    fn run_plays_scripted_input() {
        let mut app = app();
        let script = "r 4 4\nbogus\nf 9 9\n\nf 0 0\nq\nr 1 1\n";
        let mut out = Vec::new();

        app.run(script.as_bytes(), &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Unknown command \"bogus\""));
        assert!(text.contains("Invalid coordinates"));
        assert!(text.contains("Time elapsed: -"));
        assert_eq!(app.session().phase(), GamePhase::Playing);
        // initial board plus one redraw per accepted command, nothing after `q`
        assert_eq!(text.matches("Mines found").count(), 3);
    }
}
