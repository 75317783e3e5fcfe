//! The simulation state aggregate — the complete snapshot read by the host.

use serde::{Deserialize, Serialize};

use crate::catalog::{BlastHole, PostBlastTask, PreBlastTask};
use crate::catalog::{BLAST_HOLES, POST_BLAST_TASKS, PRE_BLAST_TASKS};
use crate::constants::*;
use crate::enums::Phase;

/// Complete state of one exercise run.
///
/// `Default` is the documented initial state; `ResetSimulation` restores
/// it atomically. Host UIs read this snapshot reactively; all mutation
/// goes through the engine's command and clock entry points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationState {
    pub phase: Phase,
    /// Cumulative score. Never decreases within a run.
    pub total_xp: u32,

    // --- Pre-blast inspection ---
    /// Index into `PRE_BLAST_TASKS`; equals the catalog length once all
    /// inspection tasks are done.
    pub current_task_index: usize,
    /// Whether the active inspection task has already been credited.
    pub task_completed: bool,
    /// Seconds remaining until the scheduled detonation window.
    pub time_to_detonation: u32,
    pub evacuation_started: bool,
    /// Horn blasts sounded so far; saturates at the task requirement.
    pub alarm_blasts: u32,
    pub workers_evacuated: u32,
    pub total_workers: u32,

    // --- Blast sequence ---
    /// Seconds remaining on the armed detonation countdown.
    pub blast_countdown: u32,
    /// Whether the safety checklist has been confirmed.
    pub sequence_initiated: bool,
    /// Holes fired so far; equals the catalog length once the blast is over.
    pub current_blast_hole: usize,
    /// Seismic reading from the most recent detonation.
    pub seismic_magnitude: f64,
    /// Flyrock throw from the most recent detonation (meters).
    pub flyrock_distance_m: f64,
    pub anomaly_detected: bool,
    /// Seconds accumulated toward the next automatic detonation.
    pub detonation_hold_secs: u32,

    // --- Post-blast verification ---
    /// Index into `POST_BLAST_TASKS`; equals the catalog length once all
    /// verifications are done.
    pub post_task_index: usize,
    pub crater_inspected: bool,
    pub flyrock_verified: bool,
    pub reentry_authorized: bool,

    // --- Performance metrics ---
    /// Seconds spent on pre-blast inspection, snapshotted when the blast
    /// sequence begins.
    pub evacuation_time_secs: u32,
    pub safety_compliance_percent: f64,
    pub worker_incidents: u32,
    pub anomalies_detected: u32,
}

impl Default for SimulationState {
    fn default() -> Self {
        Self {
            phase: Phase::Briefing,
            total_xp: 0,
            current_task_index: 0,
            task_completed: false,
            time_to_detonation: PRE_BLAST_COUNTDOWN_SECS,
            evacuation_started: false,
            alarm_blasts: 0,
            workers_evacuated: 0,
            total_workers: TOTAL_WORKERS,
            blast_countdown: BLAST_COUNTDOWN_SECS,
            sequence_initiated: false,
            current_blast_hole: 0,
            seismic_magnitude: 0.0,
            flyrock_distance_m: 0.0,
            anomaly_detected: false,
            detonation_hold_secs: 0,
            post_task_index: 0,
            crater_inspected: false,
            flyrock_verified: false,
            reentry_authorized: false,
            evacuation_time_secs: 0,
            safety_compliance_percent: 100.0,
            worker_incidents: 0,
            anomalies_detected: 0,
        }
    }
}

impl SimulationState {
    /// The active pre-blast task, if inspection is still in progress.
    pub fn active_pre_blast_task(&self) -> Option<&'static PreBlastTask> {
        PRE_BLAST_TASKS.get(self.current_task_index)
    }

    /// The active post-blast task, if verification is still in progress.
    pub fn active_post_blast_task(&self) -> Option<&'static PostBlastTask> {
        POST_BLAST_TASKS.get(self.post_task_index)
    }

    /// The next hole to fire, if any remain.
    pub fn next_blast_hole(&self) -> Option<&'static BlastHole> {
        BLAST_HOLES.get(self.current_blast_hole)
    }

    /// Blast holes not yet fired.
    pub fn holes_remaining(&self) -> usize {
        BLAST_HOLES.len().saturating_sub(self.current_blast_hole)
    }
}
