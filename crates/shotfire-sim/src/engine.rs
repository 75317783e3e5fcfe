//! Simulation engine — the core of the training exercise.
//!
//! `SimulationEngine` owns the state aggregate, applies operator commands
//! at the moment they arrive, and advances time only when the host calls
//! the clock entry points. Every mutation is a total function of the
//! current state (plus a seeded random draw for detonation readings);
//! commands whose preconditions fail are silent no-ops.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use shotfire_core::catalog::{VerificationData, BLAST_HOLES, POST_BLAST_TASKS, PRE_BLAST_TASKS};
use shotfire_core::commands::OperatorCommand;
use shotfire_core::constants::*;
use shotfire_core::enums::Phase;
use shotfire_core::events::SimEvent;
use shotfire_core::state::SimulationState;

/// Configuration for starting a new simulation.
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self { seed: 42 }
    }
}

/// The simulation engine. Owns the exercise state and the seeded RNG.
pub struct SimulationEngine {
    state: SimulationState,
    rng: ChaCha8Rng,
    events: Vec<SimEvent>,
}

impl SimulationEngine {
    /// Create a new engine with the given config.
    pub fn new(config: SimConfig) -> Self {
        Self {
            state: SimulationState::default(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            events: Vec::new(),
        }
    }

    /// Read-only view of the current state.
    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    /// Take all events buffered since the last drain.
    pub fn drain_events(&mut self) -> Vec<SimEvent> {
        std::mem::take(&mut self.events)
    }

    /// Apply one operator command.
    pub fn apply(&mut self, command: OperatorCommand) {
        match command {
            OperatorCommand::SetPhase { phase } => self.set_phase(phase),
            OperatorCommand::ResetSimulation => self.reset(),
            OperatorCommand::StartEvacuation => self.start_evacuation(),
            OperatorCommand::SoundAlarm => self.sound_alarm(),
            OperatorCommand::CompleteTask => self.complete_task(),
            OperatorCommand::NextTask => self.next_task(),
            OperatorCommand::InitiateBlastSequence => self.initiate_blast_sequence(),
            OperatorCommand::DetonateHole => self.detonate_hole(),
            OperatorCommand::DetectAnomaly => self.detect_anomaly(),
            OperatorCommand::InspectCrater => self.inspect_crater(),
            OperatorCommand::VerifyFlyrock => self.verify_flyrock(),
            OperatorCommand::AuthorizeReentry => self.authorize_reentry(),
            OperatorCommand::NextPostTask => self.next_post_task(),
        }
    }

    /// Advance the simulation clock by one second.
    ///
    /// The engine never drives its own clock; the host calls this once
    /// per second (or batches seconds via [`advance`](Self::advance)).
    pub fn tick_second(&mut self) {
        match self.state.phase {
            Phase::PreBlast => {
                self.state.time_to_detonation = self.state.time_to_detonation.saturating_sub(1);
                if self.state.evacuation_started
                    && self.state.workers_evacuated < self.state.total_workers
                {
                    self.state.workers_evacuated = (self.state.workers_evacuated
                        + EVACUATION_RATE_PER_SEC)
                        .min(self.state.total_workers);
                }
            }
            Phase::BlastSequence if self.state.sequence_initiated => {
                if self.state.blast_countdown > 0 {
                    self.state.blast_countdown -= 1;
                } else {
                    // Countdown expired: fire the holes on a fixed cadence.
                    self.state.detonation_hold_secs += 1;
                    if self.state.detonation_hold_secs >= DETONATION_INTERVAL_SECS {
                        self.state.detonation_hold_secs = 0;
                        self.detonate_hole();
                    }
                }
            }
            _ => {}
        }
    }

    /// Advance the clock by `seconds` one-second steps.
    pub fn advance(&mut self, seconds: u32) {
        for _ in 0..seconds {
            self.tick_second();
        }
    }

    // --- Phase control ---

    /// Move to a later phase. Backward or same-phase jumps are ignored,
    /// keeping progression monotonic for any command sequence.
    fn set_phase(&mut self, phase: Phase) {
        if phase > self.state.phase {
            self.transition(phase);
        }
    }

    fn transition(&mut self, to: Phase) {
        let from = self.state.phase;
        self.state.phase = to;
        self.events.push(SimEvent::PhaseChanged { from, to });
    }

    fn reset(&mut self) {
        self.state = SimulationState::default();
        self.events.push(SimEvent::SimulationReset);
    }

    // --- Pre-blast inspection ---

    fn start_evacuation(&mut self) {
        if self.state.phase == Phase::PreBlast && !self.state.evacuation_started {
            self.state.evacuation_started = true;
            self.events.push(SimEvent::EvacuationStarted);
        }
    }

    fn sound_alarm(&mut self) {
        if self.state.phase != Phase::PreBlast {
            return;
        }
        let Some(required) = self
            .state
            .active_pre_blast_task()
            .and_then(|t| t.required_blasts)
        else {
            return;
        };
        if self.state.alarm_blasts >= required {
            return;
        }
        self.state.alarm_blasts += 1;
        self.events.push(SimEvent::AlarmSounded {
            blasts: self.state.alarm_blasts,
            required,
        });
        if self.state.alarm_blasts >= required && !self.state.evacuation_started {
            self.state.evacuation_started = true;
            self.events.push(SimEvent::EvacuationStarted);
        }
    }

    fn complete_task(&mut self) {
        if self.state.phase != Phase::PreBlast || self.state.task_completed {
            return;
        }
        let Some(task) = self.state.active_pre_blast_task() else {
            return;
        };
        self.state.task_completed = true;
        self.award_xp(task.xp_reward);
        self.events.push(SimEvent::TaskCompleted {
            task_id: task.id.to_string(),
        });
    }

    fn next_task(&mut self) {
        if self.state.phase != Phase::PreBlast
            || self.state.current_task_index >= PRE_BLAST_TASKS.len()
        {
            return;
        }
        self.state.current_task_index += 1;
        self.state.task_completed = false;
        if self.state.current_task_index >= PRE_BLAST_TASKS.len() {
            // Inspection done: record how long the evacuation took, then
            // hand over to the blast sequence.
            self.state.evacuation_time_secs =
                PRE_BLAST_COUNTDOWN_SECS - self.state.time_to_detonation;
            self.transition(Phase::BlastSequence);
        }
    }

    // --- Blast sequence ---

    fn initiate_blast_sequence(&mut self) {
        if self.state.phase != Phase::BlastSequence || self.state.sequence_initiated {
            return;
        }
        self.state.sequence_initiated = true;
        self.state.blast_countdown = BLAST_COUNTDOWN_SECS;
        self.events.push(SimEvent::BlastSequenceInitiated);
    }

    fn detonate_hole(&mut self) {
        if self.state.phase != Phase::BlastSequence
            || self.state.current_blast_hole >= BLAST_HOLES.len()
        {
            return;
        }
        let hole = BLAST_HOLES[self.state.current_blast_hole].id;
        // Per-detonation measurement variability. The flyrock range stays
        // inside the containment limit checked at verification.
        self.state.seismic_magnitude = self
            .rng
            .gen_range(SEISMIC_MAGNITUDE_MIN..SEISMIC_MAGNITUDE_MAX);
        self.state.flyrock_distance_m = self.rng.gen_range(FLYROCK_MIN_M..FLYROCK_MAX_M);
        self.state.current_blast_hole += 1;
        self.events.push(SimEvent::HoleDetonated {
            hole,
            seismic_magnitude: self.state.seismic_magnitude,
            flyrock_distance_m: self.state.flyrock_distance_m,
        });
        if self.state.current_blast_hole >= BLAST_HOLES.len() {
            self.transition(Phase::PostBlast);
        }
    }

    fn detect_anomaly(&mut self) {
        if self.state.phase != Phase::BlastSequence {
            return;
        }
        self.state.anomaly_detected = true;
        self.state.anomalies_detected += 1;
        self.award_xp(ANOMALY_BONUS_XP);
        self.events.push(SimEvent::AnomalyDetected {
            total: self.state.anomalies_detected,
        });
    }

    // --- Post-blast verification ---

    fn inspect_crater(&mut self) {
        if self.state.crater_inspected
            || !self.post_task_matches(|v| matches!(v, VerificationData::Crater { .. }))
        {
            return;
        }
        self.state.crater_inspected = true;
        self.complete_verification();
    }

    fn verify_flyrock(&mut self) {
        if self.state.flyrock_verified
            || !self.post_task_matches(|v| matches!(v, VerificationData::Flyrock { .. }))
        {
            return;
        }
        self.state.flyrock_verified = true;
        self.complete_verification();
    }

    fn authorize_reentry(&mut self) {
        if self.state.reentry_authorized
            || !self.post_task_matches(|v| matches!(v, VerificationData::Reentry { .. }))
        {
            return;
        }
        self.state.reentry_authorized = true;
        self.complete_verification();
    }

    fn next_post_task(&mut self) {
        if self.state.phase != Phase::PostBlast
            || self.state.post_task_index >= POST_BLAST_TASKS.len()
        {
            return;
        }
        self.state.post_task_index += 1;
        if self.state.post_task_index >= POST_BLAST_TASKS.len() {
            self.transition(Phase::Completion);
        }
    }

    /// Whether the active post-blast task's verification matches `pred`.
    fn post_task_matches(&self, pred: impl Fn(&VerificationData) -> bool) -> bool {
        self.state.phase == Phase::PostBlast
            && self
                .state
                .active_post_blast_task()
                .is_some_and(|t| pred(&t.verification))
    }

    /// Credit the active verification task and emit its event.
    fn complete_verification(&mut self) {
        if let Some(task) = self.state.active_post_blast_task() {
            self.award_xp(VERIFICATION_XP);
            self.events.push(SimEvent::VerificationCompleted {
                task_id: task.id.to_string(),
            });
        }
    }

    // --- Scoring ---

    fn award_xp(&mut self, amount: u32) {
        self.state.total_xp += amount;
        self.events.push(SimEvent::XpAwarded {
            amount,
            total: self.state.total_xp,
        });
    }
}
