//! Pacer engine — the core of the animation.
//!
//! `PacerEngine` owns the orbital field, the planet record, and the
//! four-phase breathing machine, processes queued commands at tick
//! boundaries, and produces `FrameSnapshot`s. Completely headless (no
//! runtime or rendering dependency), enabling deterministic testing.
//!
//! The machine is a single `tick()` dispatching on the current phase;
//! each transition is a pure function of elapsed time and the active
//! configuration. Nothing here chains completion callbacks or captures
//! mutable outer state.

use std::collections::VecDeque;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use orrery_core::commands::PacerCommand;
use orrery_core::components::PlanetState;
use orrery_core::config::{CycleTimings, PacerConfig};
use orrery_core::constants::{BASE_COLOR, DT_MS, MAX_PHASE_ADVANCES_PER_TICK};
use orrery_core::enums::{BreathPhase, HalfCycle, RefreshPolicy, SessionPhase};
use orrery_core::events::PacerEvent;
use orrery_core::state::FrameSnapshot;
use orrery_core::types::SimTime;

use crate::field::OrbitalField;
use crate::solver::{self, SizeBudget};
use crate::systems::snapshot::FrameContext;
use crate::systems::{motion, retarget, snapshot};
use crate::variance::VariancePool;

/// Configuration for constructing a new engine.
pub struct EngineConfig {
    /// RNG seed for determinism. Same seed + same commands = same frames.
    pub seed: u64,
    /// Side length of the square layout viewport, in layout units.
    pub bounding_size: f64,
    /// Variance pool refill behavior.
    pub refresh_policy: RefreshPolicy,
    /// Initial animation configuration.
    pub pacer: PacerConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            bounding_size: orrery_core::constants::DEFAULT_BOUNDING_SIZE,
            refresh_policy: RefreshPolicy::default(),
            pacer: PacerConfig::default(),
        }
    }
}

/// The animation engine. Owns all mutable pacer state.
pub struct PacerEngine {
    config: PacerConfig,
    /// Configuration adopted in full at the next cycle start.
    pending_config: Option<PacerConfig>,
    bounding_size: f64,
    budget: SizeBudget,
    timings: CycleTimings,
    field: OrbitalField,
    planet: PlanetState,
    pool: VariancePool,
    rng: ChaCha8Rng,
    time: SimTime,
    session: SessionPhase,
    phase: BreathPhase,
    /// Time spent inside the current phase, in milliseconds.
    phase_elapsed_ms: f64,
    phase_progress: f64,
    half_cycle_pos: f64,
    cycle: u64,
    command_queue: VecDeque<PacerCommand>,
    events: Vec<PacerEvent>,
}

impl PacerEngine {
    /// Create a new engine. The field and planet are laid out immediately
    /// so snapshots are valid before `Start` arrives, but nothing animates
    /// until the session is running.
    pub fn new(engine_config: EngineConfig) -> Self {
        let config = engine_config.pacer.sanitize();
        let bounding_size = engine_config.bounding_size.max(0.0);
        let budget = solver::resolve(bounding_size, &config);
        let timings = config.timings();
        let mut rng = ChaCha8Rng::seed_from_u64(engine_config.seed);
        let mut pool = VariancePool::new(engine_config.refresh_policy, &mut rng);

        let mut field = OrbitalField::default();
        field.reset(
            config.count(),
            &budget,
            config.size_variance_pct,
            &mut pool,
            &mut rng,
        );

        Self {
            config,
            pending_config: None,
            bounding_size,
            budget,
            timings,
            field,
            planet: PlanetState {
                scale: budget.base_scale,
                color: BASE_COLOR,
            },
            pool,
            rng,
            time: SimTime::default(),
            session: SessionPhase::default(),
            phase: BreathPhase::default(),
            phase_elapsed_ms: 0.0,
            phase_progress: 0.0,
            half_cycle_pos: 0.0,
            cycle: 0,
            command_queue: VecDeque::new(),
            events: Vec::new(),
        }
    }

    /// Queue a command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PacerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PacerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the animation by one tick and return the resulting frame.
    pub fn tick(&mut self) -> FrameSnapshot {
        self.process_commands();

        if self.session == SessionPhase::Running {
            self.step();
        }

        let events = std::mem::take(&mut self.events);
        let context = FrameContext {
            time: self.time,
            session: self.session,
            phase: self.phase,
            phase_progress: self.phase_progress,
            half_cycle_pos: self.half_cycle_pos,
            cycle: self.cycle,
        };
        snapshot::build_snapshot(&context, &self.planet, &self.field, &self.budget, events)
    }

    /// Current session state.
    pub fn session(&self) -> SessionPhase {
        self.session
    }

    /// Current breathing phase.
    pub fn phase(&self) -> BreathPhase {
        self.phase
    }

    /// Current animation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Completed cycle count.
    pub fn cycle(&self) -> u64 {
        self.cycle
    }

    /// The active (sanitized) configuration.
    pub fn config(&self) -> &PacerConfig {
        &self.config
    }

    /// The size budget resolved for the current cycle.
    pub fn budget(&self) -> SizeBudget {
        self.budget
    }

    /// Read-only access to the satellite records (for tests).
    #[cfg(test)]
    pub fn satellites(&self) -> &[orrery_core::components::Satellite] {
        self.field.satellites()
    }

    /// Read-only access to the planet record (for tests).
    #[cfg(test)]
    pub fn planet(&self) -> &PlanetState {
        &self.planet
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single command.
    fn handle_command(&mut self, command: PacerCommand) {
        match command {
            PacerCommand::Start => {
                if self.session == SessionPhase::Idle {
                    self.session = SessionPhase::Running;
                    self.reset();
                }
            }
            PacerCommand::Pause => {
                if self.session == SessionPhase::Running {
                    self.session = SessionPhase::Paused;
                }
            }
            PacerCommand::Resume => {
                if self.session == SessionPhase::Paused {
                    self.session = SessionPhase::Running;
                }
            }
            PacerCommand::ApplyConfig { config } => {
                let config = config.sanitize();
                if config.count() != self.field.len() {
                    // Count changes take effect immediately: resize the
                    // arena, reassign every slot, and re-trigger the
                    // active half-cycle so survivors glide to their new
                    // slots instead of teleporting.
                    self.field.rebuild(
                        config.count(),
                        &self.budget,
                        config.size_variance_pct,
                        &mut self.pool,
                        &mut self.rng,
                    );
                    self.config.satellite_count = config.satellite_count;
                    self.retarget_active_half(&config);
                    self.events.push(PacerEvent::FieldRebuilt {
                        count: config.count() as u32,
                    });
                }
                // Everything else is captured at the next cycle start.
                self.pending_config = Some(config);
            }
            PacerCommand::Resize { bounding_size } => {
                self.bounding_size = bounding_size.max(0.0);
                // Hard reset: the in-flight phase is discarded, never
                // resumed. A paused session stays paused with the new
                // geometry.
                self.reset();
            }
        }
    }

    /// Rebuild all geometry and restart the machine at a fresh inhale.
    fn reset(&mut self) {
        if let Some(pending) = self.pending_config.take() {
            self.config = pending;
        }
        self.budget = solver::resolve(self.bounding_size, &self.config);
        self.timings = self.config.timings();
        self.time = SimTime::default();
        self.phase = BreathPhase::Inhale;
        self.phase_elapsed_ms = 0.0;
        self.phase_progress = 0.0;
        self.half_cycle_pos = 0.0;
        self.cycle = 0;
        self.planet = PlanetState {
            scale: self.budget.base_scale,
            color: BASE_COLOR,
        };
        self.field.reset(
            self.config.count(),
            &self.budget,
            self.config.size_variance_pct,
            &mut self.pool,
            &mut self.rng,
        );
        retarget::begin_rising(
            &mut self.field,
            &self.budget,
            &self.config,
            &mut self.pool,
            &mut self.rng,
        );
        self.events.push(PacerEvent::EngineReset);
        self.events.push(PacerEvent::PhaseStarted {
            phase: BreathPhase::Inhale,
        });
    }

    /// Advance one tick of animation time, taking any phase transitions
    /// that fall inside it, then interpolate all state to the new moment.
    fn step(&mut self) {
        self.time.advance();
        self.phase_elapsed_ms += DT_MS;

        let mut advances = 0;
        while advances < MAX_PHASE_ADVANCES_PER_TICK {
            let duration = self.timings.phase_ms(self.phase);
            if self.phase_elapsed_ms < duration {
                break;
            }
            self.phase_elapsed_ms -= duration;
            self.advance_phase();
            advances += 1;
        }
        if advances == MAX_PHASE_ADVANCES_PER_TICK {
            // All-zero durations would otherwise accumulate elapsed time
            // without bound; at most one full cycle runs per tick.
            let duration = self.timings.phase_ms(self.phase);
            self.phase_elapsed_ms = self.phase_elapsed_ms.min(duration);
        }

        self.refresh_progress();
        motion::run(
            &mut self.field,
            self.phase.half_cycle(),
            self.half_cycle_pos,
            self.config.dynamic_size,
        );
        let level = motion::breath_level(self.phase, self.phase_progress);
        motion::update_planet(&mut self.planet, &self.budget, level);
    }

    /// Take one phase transition.
    fn advance_phase(&mut self) {
        match self.phase {
            // Inhale runs straight into hold on the same trajectory.
            BreathPhase::Inhale => {}
            BreathPhase::Hold => {
                retarget::commit_rising(&mut self.field, self.config.dynamic_size);
            }
            BreathPhase::Exhale => {}
            BreathPhase::Rest => {
                retarget::commit_falling(&mut self.field, self.config.dynamic_size);
                self.cycle += 1;
                self.events.push(PacerEvent::CycleCompleted { cycle: self.cycle });
            }
        }

        self.phase = self.phase.next();
        self.events.push(PacerEvent::PhaseStarted { phase: self.phase });

        match self.phase {
            BreathPhase::Inhale => self.begin_cycle(),
            BreathPhase::Exhale => {
                retarget::begin_falling(
                    &mut self.field,
                    &self.budget,
                    &self.config,
                    &mut self.pool,
                    &mut self.rng,
                );
            }
            _ => {}
        }
    }

    /// Entry to INHALE: adopt any pending configuration, re-resolve the
    /// size budget, and draw the new cycle's targets.
    fn begin_cycle(&mut self) {
        if let Some(pending) = self.pending_config.take() {
            self.config = pending;
        }
        self.budget = solver::resolve(self.bounding_size, &self.config);
        self.timings = self.config.timings();
        retarget::begin_rising(
            &mut self.field,
            &self.budget,
            &self.config,
            &mut self.pool,
            &mut self.rng,
        );
    }

    /// Re-run target drawing for whichever half-cycle is active, keeping
    /// the existing cycle distances where the falling half owns them.
    fn retarget_active_half(&mut self, config: &PacerConfig) {
        match self.phase.half_cycle() {
            HalfCycle::Rising => retarget::begin_rising(
                &mut self.field,
                &self.budget,
                config,
                &mut self.pool,
                &mut self.rng,
            ),
            HalfCycle::Falling => retarget::begin_falling(
                &mut self.field,
                &self.budget,
                config,
                &mut self.pool,
                &mut self.rng,
            ),
        }
    }

    /// Recompute the phase and half-cycle interpolation fractions.
    ///
    /// Zero-length windows read as already complete; no division by zero
    /// can reach the interpolators.
    fn refresh_progress(&mut self) {
        let duration = self.timings.phase_ms(self.phase);
        self.phase_progress = if duration <= 0.0 {
            1.0
        } else {
            (self.phase_elapsed_ms / duration).min(1.0)
        };

        let (window, into_window) = match self.phase {
            BreathPhase::Inhale => (self.timings.inhale_hold_ms(), self.phase_elapsed_ms),
            BreathPhase::Hold => (
                self.timings.inhale_hold_ms(),
                self.timings.inhale_ms + self.phase_elapsed_ms,
            ),
            BreathPhase::Exhale => (self.timings.exhale_rest_ms(), self.phase_elapsed_ms),
            BreathPhase::Rest => (
                self.timings.exhale_rest_ms(),
                self.timings.exhale_ms + self.phase_elapsed_ms,
            ),
        };
        self.half_cycle_pos = if window <= 0.0 {
            1.0
        } else {
            (into_window / window).min(1.0)
        };
    }
}
