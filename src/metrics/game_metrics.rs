use std::time::{Duration, Instant};

/// Per-process play statistics shown in the header
pub struct GameMetrics {
    /// Play time banked before the current running stretch
    banked: Duration,
    /// Start of the current running stretch, `None` while paused or stopped
    running_since: Option<Instant>,
    pub games_played: u32,
    pub longest_snake: usize,
}

impl GameMetrics {
    pub fn new() -> Self {
        Self {
            banked: Duration::ZERO,
            running_since: None,
            games_played: 0,
            longest_snake: 0,
        }
    }

    pub fn on_game_start(&mut self) {
        self.banked = Duration::ZERO;
        self.running_since = Some(Instant::now());
    }

    pub fn on_pause(&mut self) {
        if let Some(since) = self.running_since.take() {
            self.banked += since.elapsed();
        }
    }

    pub fn on_resume(&mut self) {
        if self.running_since.is_none() {
            self.running_since = Some(Instant::now());
        }
    }

    pub fn on_game_over(&mut self, final_length: usize) {
        self.on_pause();
        self.games_played += 1;
        self.longest_snake = self.longest_snake.max(final_length);
    }

    /// Time spent running in the current game
    pub fn elapsed(&self) -> Duration {
        self.banked + self.running_since.map_or(Duration::ZERO, |since| since.elapsed())
    }

    pub fn format_time(&self) -> String {
        format_duration(self.elapsed())
    }
}

impl Default for GameMetrics {
    fn default() -> Self {
        Self::new()
    }
}

fn format_duration(elapsed: Duration) -> String {
    let total_secs = elapsed.as_secs();
    format!("{:02}:{:02}", total_secs / 60, total_secs % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_formatting() {
        assert_eq!(format_duration(Duration::from_secs(125)), "02:05");
        assert_eq!(format_duration(Duration::from_secs(0)), "00:00");
        assert_eq!(format_duration(Duration::from_secs(3661)), "61:01");
    }

    #[test]
    fn test_game_over_tracking() {
        let mut metrics = GameMetrics::new();

        metrics.on_game_start();
        metrics.on_game_over(7);
        assert_eq!(metrics.games_played, 1);
        assert_eq!(metrics.longest_snake, 7);

        metrics.on_game_start();
        metrics.on_game_over(4);
        assert_eq!(metrics.games_played, 2);
        assert_eq!(metrics.longest_snake, 7); // Should not decrease
    }

    #[test]
    fn test_pause_stops_clock() {
        let mut metrics = GameMetrics::new();
        metrics.on_game_start();
        std::thread::sleep(Duration::from_millis(30));
        metrics.on_pause();

        let frozen = metrics.elapsed();
        assert!(frozen >= Duration::from_millis(30));
        std::thread::sleep(Duration::from_millis(30));
        assert_eq!(metrics.elapsed(), frozen);

        metrics.on_resume();
        std::thread::sleep(Duration::from_millis(10));
        assert!(metrics.elapsed() > frozen);
    }

    #[test]
    fn test_game_start_resets_time() {
        let mut metrics = GameMetrics::new();
        metrics.on_game_start();
        std::thread::sleep(Duration::from_millis(50));
        assert!(metrics.elapsed() >= Duration::from_millis(50));

        metrics.on_game_start();
        assert!(metrics.elapsed() < Duration::from_millis(50));
    }
}
