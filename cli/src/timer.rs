use mineboard_core::GamePhase;
use web_time::Instant;

/// Elapsed-time readout: idle while ready, running while playing, frozen once the game ends.
#[derive(Clone, Debug, Default)]
pub struct Timer {
    started_at: Option<Instant>,
    stopped_at: Option<Instant>,
}

impl Timer {
    pub fn sync(&mut self, phase: GamePhase, now: Instant) {
        match phase {
            GamePhase::Ready => {
                self.started_at = None;
                self.stopped_at = None;
            }
            GamePhase::Playing => {
                self.started_at.get_or_insert(now);
            }
            GamePhase::Won | GamePhase::Lost => {
                // a single move can start and end the game
                self.started_at.get_or_insert(now);
                self.stopped_at.get_or_insert(now);
            }
        }
    }

    pub fn elapsed_secs(&self, now: Instant) -> Option<u64> {
        let started_at = self.started_at?;
        let until = self.stopped_at.unwrap_or(now);
        Some(until.saturating_duration_since(started_at).as_secs())
    }

    pub fn display(&self, now: Instant) -> String {
        match self.elapsed_secs(now) {
            Some(secs) => format!("{secs}s"),
            None => "-".to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn idle_until_playing() {
        let mut timer = Timer::default();
        let now = Instant::now();
        timer.sync(GamePhase::Ready, now);
        assert_eq!(timer.display(now + Duration::from_secs(3)), "-");
    }

    #[test]
    fn counts_while_playing_and_freezes_on_end() {
        let mut timer = Timer::default();
        let start = Instant::now();
        timer.sync(GamePhase::Playing, start);
        timer.sync(GamePhase::Playing, start + Duration::from_secs(2));
        assert_eq!(timer.display(start + Duration::from_millis(4500)), "4s");

        timer.sync(GamePhase::Lost, start + Duration::from_secs(7));
        assert_eq!(timer.display(start + Duration::from_secs(30)), "7s");
    }

    #[test]
    fn reset_returns_to_idle() {
        let mut timer = Timer::default();
        let start = Instant::now();
        timer.sync(GamePhase::Playing, start);
        timer.sync(GamePhase::Won, start + Duration::from_secs(1));
        timer.sync(GamePhase::Ready, start + Duration::from_secs(2));
        assert_eq!(timer.elapsed_secs(start + Duration::from_secs(5)), None);
    }
}
