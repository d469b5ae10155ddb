#[cfg(test)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, PI, TAU};

    use crate::angles;
    use crate::commands::PacerCommand;
    use crate::config::PacerConfig;
    use crate::constants::{BASE_COLOR, PEAK_COLOR};
    use crate::enums::*;
    use crate::events::{PacerEvent, SessionRecord};
    use crate::state::FrameSnapshot;
    use crate::types::{Rgb, SimTime};

    /// Verify the phase machine walks the full cycle and wraps.
    #[test]
    fn test_breath_phase_cycle() {
        let mut phase = BreathPhase::Inhale;
        let expected = [
            BreathPhase::Hold,
            BreathPhase::Exhale,
            BreathPhase::Rest,
            BreathPhase::Inhale,
        ];
        for want in expected {
            phase = phase.next();
            assert_eq!(phase, want);
        }
    }

    #[test]
    fn test_breath_phase_half_cycle() {
        assert_eq!(BreathPhase::Inhale.half_cycle(), HalfCycle::Rising);
        assert_eq!(BreathPhase::Hold.half_cycle(), HalfCycle::Rising);
        assert_eq!(BreathPhase::Exhale.half_cycle(), HalfCycle::Falling);
        assert_eq!(BreathPhase::Rest.half_cycle(), HalfCycle::Falling);
    }

    /// Verify all enums round-trip through serde_json.
    #[test]
    fn test_breath_phase_serde() {
        let variants = vec![
            BreathPhase::Inhale,
            BreathPhase::Hold,
            BreathPhase::Exhale,
            BreathPhase::Rest,
        ];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: BreathPhase = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_session_phase_serde() {
        let variants = vec![
            SessionPhase::Idle,
            SessionPhase::Running,
            SessionPhase::Paused,
        ];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: SessionPhase = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_refresh_policy_serde() {
        let variants = vec![RefreshPolicy::OnWrap, RefreshPolicy::Frozen];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: RefreshPolicy = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    /// Normalization maps every finite input into (-PI, PI].
    #[test]
    fn test_normalize_range() {
        let mut angle = -25.0;
        while angle < 25.0 {
            let n = angles::normalize(angle);
            assert!(
                n > -PI && n <= PI,
                "normalize({}) = {} left (-PI, PI]",
                angle,
                n
            );
            angle += 0.137;
        }
    }

    #[test]
    fn test_normalize_idempotent() {
        for raw in [-7.5, -PI, -0.1, 0.0, 1.0, PI, 4.0, 100.0] {
            let once = angles::normalize(raw);
            let twice = angles::normalize(once);
            assert!(
                (once - twice).abs() < 1e-12,
                "normalize not idempotent at {}: {} vs {}",
                raw,
                once,
                twice
            );
        }
    }

    #[test]
    fn test_normalize_boundaries() {
        // PI is included, -PI wraps to PI.
        assert!((angles::normalize(PI) - PI).abs() < 1e-12);
        assert!((angles::normalize(-PI) - PI).abs() < 1e-12);
        assert!((angles::normalize(TAU)).abs() < 1e-12);
        assert!((angles::normalize(3.0 * FRAC_PI_2) + FRAC_PI_2).abs() < 1e-12);
    }

    /// The shortest arc never exceeds a half turn and carries the right sign.
    #[test]
    fn test_shortest_arc_wraps() {
        // 3.0 rad to -3.0 rad: the short way crosses the PI boundary going
        // counter-clockwise through +PI, a positive arc of about 0.283 rad.
        let arc = angles::shortest_arc(3.0, -3.0);
        assert!((arc - (TAU - 6.0)).abs() < 1e-12, "got {}", arc);

        let back = angles::shortest_arc(-3.0, 3.0);
        assert!((back + (TAU - 6.0)).abs() < 1e-12, "got {}", back);
    }

    #[test]
    fn test_interpolate_shortest_path() {
        // Full fraction lands on the target even across the wrap.
        let end = angles::interpolate(3.0, -3.0, 1.0);
        assert!((end + 3.0).abs() < 1e-12, "got {}", end);

        // Zero fraction stays at the (normalized) start.
        let start = angles::interpolate(3.0, -3.0, 0.0);
        assert!((start - 3.0).abs() < 1e-12, "got {}", start);

        // Halfway across the wrap from 3.0 toward -3.0 is exactly PI.
        let mid = angles::interpolate(3.0, -3.0, 0.5);
        assert!((mid.abs() - PI).abs() < 1e-12, "got {}", mid);
    }

    /// Slot angles are evenly spaced with slot 0 at twelve o'clock.
    #[test]
    fn test_slot_angle_quarters() {
        let expected = [-FRAC_PI_2, 0.0, FRAC_PI_2, PI];
        for (i, want) in expected.iter().enumerate() {
            let got = angles::slot_angle(i, 4);
            assert!(
                (got - want).abs() < 1e-12,
                "slot {} of 4: got {}, want {}",
                i,
                got,
                want
            );
        }
    }

    #[test]
    fn test_slot_angle_first_is_top() {
        for count in [1, 2, 8, 250] {
            let got = angles::slot_angle(0, count);
            assert!(
                (got + FRAC_PI_2).abs() < 1e-12,
                "slot 0 of {}: got {}",
                count,
                got
            );
        }
    }

    /// Color interpolation is exact at both endpoints.
    #[test]
    fn test_rgb_lerp_endpoints() {
        assert_eq!(BASE_COLOR.lerp(&PEAK_COLOR, 0.0), BASE_COLOR);
        assert_eq!(BASE_COLOR.lerp(&PEAK_COLOR, 1.0), PEAK_COLOR);
        // Out-of-range t clamps to the endpoints.
        assert_eq!(BASE_COLOR.lerp(&PEAK_COLOR, -0.5), BASE_COLOR);
        assert_eq!(BASE_COLOR.lerp(&PEAK_COLOR, 1.5), PEAK_COLOR);
    }

    #[test]
    fn test_rgb_lerp_midpoint() {
        let mid = BASE_COLOR.lerp(&PEAK_COLOR, 0.5);
        assert_eq!(mid, Rgb::new(51, 128, 191));
    }

    #[test]
    fn test_rgb_hex() {
        assert_eq!(BASE_COLOR.to_hex(), "#667db6");
        assert_eq!(PEAK_COLOR.to_hex(), "#0082c8");
        assert_eq!(Rgb::new(0, 0, 0).to_hex(), "#000000");
    }

    /// Sanitize clamps scales and floors counts/durations without erroring.
    #[test]
    fn test_config_sanitize() {
        let raw = PacerConfig {
            planet_scale: 1.5,
            user_max_planet_scale: -0.2,
            satellite_size_scale: 2.0,
            satellite_count: -5,
            inhale_secs: -2.0,
            hold_secs: 1.0,
            exhale_secs: 4.0,
            rest_secs: -0.5,
            size_variance_pct: -10.0,
            lateral_variance_pct: 150.0,
            radial_variance_pct: 30.0,
            dynamic_size: true,
        };
        let clean = raw.sanitize();
        assert_eq!(clean.planet_scale, 1.0);
        assert_eq!(clean.user_max_planet_scale, 0.0);
        assert_eq!(clean.satellite_size_scale, 1.0);
        assert_eq!(clean.satellite_count, 0);
        assert_eq!(clean.count(), 0);
        assert_eq!(clean.inhale_secs, 0.0);
        assert_eq!(clean.rest_secs, 0.0);
        assert_eq!(clean.size_variance_pct, 0.0);
        // Over-100 variance is deliberate over-drive, not an error.
        assert_eq!(clean.lateral_variance_pct, 150.0);
        assert!(clean.dynamic_size);
    }

    #[test]
    fn test_config_timings() {
        let timings = PacerConfig::default().timings();
        assert_eq!(timings.inhale_ms, 4000.0);
        assert_eq!(timings.hold_ms, 1000.0);
        assert_eq!(timings.exhale_ms, 4000.0);
        assert_eq!(timings.rest_ms, 1000.0);
        assert_eq!(timings.inhale_hold_ms(), 5000.0);
        assert_eq!(timings.exhale_rest_ms(), 5000.0);
        assert_eq!(timings.cycle_ms(), 10000.0);
        assert_eq!(timings.phase_ms(BreathPhase::Hold), 1000.0);
    }

    /// Verify PacerCommand round-trips through serde (tagged union).
    #[test]
    fn test_pacer_command_serde() {
        let commands = vec![
            PacerCommand::Start,
            PacerCommand::Pause,
            PacerCommand::Resume,
            PacerCommand::ApplyConfig {
                config: PacerConfig::default(),
            },
            PacerCommand::Resize {
                bounding_size: 640.0,
            },
        ];
        for cmd in &commands {
            let json = serde_json::to_string(cmd).unwrap();
            let back: PacerCommand = serde_json::from_str(&json).unwrap();
            // Compare JSON representations since PacerCommand doesn't derive PartialEq
            assert_eq!(json, serde_json::to_string(&back).unwrap());
        }
    }

    /// Verify PacerEvent round-trips through serde.
    #[test]
    fn test_pacer_event_serde() {
        let events = vec![
            PacerEvent::PhaseStarted {
                phase: BreathPhase::Exhale,
            },
            PacerEvent::CycleCompleted { cycle: 12 },
            PacerEvent::FieldRebuilt { count: 250 },
            PacerEvent::EngineReset,
        ];
        for event in &events {
            let json = serde_json::to_string(event).unwrap();
            let back: PacerEvent = serde_json::from_str(&json).unwrap();
            assert_eq!(json, serde_json::to_string(&back).unwrap());
        }
    }

    #[test]
    fn test_session_record_serde() {
        let record = SessionRecord {
            started_unix_ms: 1_700_000_000_000,
            duration_ms: 90_000,
            inhale_secs: 4.0,
            hold_secs: 1.0,
            exhale_secs: 4.0,
            rest_secs: 1.0,
            cycles_completed: 9,
        };
        let json = serde_json::to_string(&record).unwrap();
        let back: SessionRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, back);
    }

    /// Verify FrameSnapshot can be serialized to JSON.
    #[test]
    fn test_snapshot_serde() {
        let snapshot = FrameSnapshot::default();
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: FrameSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snapshot.time.tick, back.time.tick);
        assert_eq!(snapshot.phase, back.phase);
        // Verify the default snapshot is reasonably small
        assert!(
            json.len() < 1024,
            "Empty snapshot should be <1KB, was {} bytes",
            json.len()
        );
    }

    /// Verify SimTime advancement.
    #[test]
    fn test_sim_time_advance() {
        let mut time = SimTime::default();
        assert_eq!(time.tick, 0);
        assert_eq!(time.elapsed_secs, 0.0);

        for _ in 0..60 {
            time.advance();
        }
        assert_eq!(time.tick, 60);
        // 60 ticks at 60Hz = 1 second
        assert!((time.elapsed_secs - 1.0).abs() < 1e-10);
    }
}
