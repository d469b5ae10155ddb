//! Session clock — wall-clock timing for one engine run.
//!
//! Produces the `SessionRecord` shape the engine exports for external
//! logging; nothing in this workspace consumes it.

use std::time::{Instant, SystemTime, UNIX_EPOCH};

use orrery_core::config::PacerConfig;
use orrery_core::events::SessionRecord;

/// Wall-clock timer for an active session.
pub struct SessionClock {
    started_at: Instant,
    started_unix_ms: u64,
    config: PacerConfig,
}

impl SessionClock {
    /// Start timing a session running with `config`.
    pub fn start(config: PacerConfig) -> Self {
        let started_unix_ms = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0);
        Self {
            started_at: Instant::now(),
            started_unix_ms,
            config,
        }
    }

    /// Milliseconds elapsed since the session started.
    pub fn elapsed_ms(&self) -> u64 {
        self.started_at.elapsed().as_millis() as u64
    }

    /// Elapsed time as `HH:MM:SS`.
    pub fn display(&self) -> String {
        format_hms(self.elapsed_ms())
    }

    /// End the session and produce its record.
    pub fn finish(self, cycles_completed: u64) -> SessionRecord {
        SessionRecord {
            started_unix_ms: self.started_unix_ms,
            duration_ms: self.elapsed_ms(),
            inhale_secs: self.config.inhale_secs,
            hold_secs: self.config.hold_secs,
            exhale_secs: self.config.exhale_secs,
            rest_secs: self.config.rest_secs,
            cycles_completed,
        }
    }
}

/// Format a millisecond duration as `HH:MM:SS`. Hours are unbounded.
pub fn format_hms(ms: u64) -> String {
    let total_secs = ms / 1000;
    let hours = total_secs / 3600;
    let minutes = (total_secs / 60) % 60;
    let seconds = total_secs % 60;
    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_hms() {
        assert_eq!(format_hms(0), "00:00:00");
        assert_eq!(format_hms(999), "00:00:00");
        assert_eq!(format_hms(61_000), "00:01:01");
        assert_eq!(format_hms(3_661_000), "01:01:01");
        // Hours do not wrap at a day boundary.
        assert_eq!(format_hms(90_061_000), "25:01:01");
    }

    #[test]
    fn test_finish_carries_config_timings() {
        let config = PacerConfig {
            inhale_secs: 5.0,
            hold_secs: 2.0,
            exhale_secs: 6.0,
            rest_secs: 1.0,
            ..PacerConfig::default()
        };
        let clock = SessionClock::start(config);
        let record = clock.finish(7);

        assert_eq!(record.inhale_secs, 5.0);
        assert_eq!(record.hold_secs, 2.0);
        assert_eq!(record.exhale_secs, 6.0);
        assert_eq!(record.rest_secs, 1.0);
        assert_eq!(record.cycles_completed, 7);
        assert!(record.started_unix_ms > 0);
    }
}
