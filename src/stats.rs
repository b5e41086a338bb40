// src/stats.rs

use std::time::Duration;

/// Running counters for the redraw pipeline. The orchestrator records one
/// entry per `draw_all`; the binary logs the summary line.
#[derive(Debug, Clone, Default)]
pub struct RedrawStats {
    redraw_count: u64,
    last_duration: Duration,
    last_shape_count: usize,
}

impl RedrawStats {
    pub fn new() -> Self {
        RedrawStats::default()
    }

    pub fn record(&mut self, duration: Duration, shape_count: usize) {
        self.redraw_count += 1;
        self.last_duration = duration;
        self.last_shape_count = shape_count;
    }

    pub fn redraw_count(&self) -> u64 {
        self.redraw_count
    }

    pub fn last_duration(&self) -> Duration {
        self.last_duration
    }

    pub fn last_shape_count(&self) -> usize {
        self.last_shape_count
    }

    pub fn summary(&self) -> String {
        format!(
            "redraw #{}: {} shapes in {:.2}ms",
            self.redraw_count,
            self.last_shape_count,
            self.last_duration.as_secs_f32() * 1000.0
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_updates_counters() {
        let mut stats = RedrawStats::new();
        stats.record(Duration::from_millis(2), 1300);
        stats.record(Duration::from_millis(3), 1310);

        assert_eq!(stats.redraw_count(), 2);
        assert_eq!(stats.last_shape_count(), 1310);
        assert_eq!(stats.last_duration(), Duration::from_millis(3));
        assert!(stats.summary().contains("redraw #2"));
        assert!(stats.summary().contains("1310 shapes"));
    }
}
