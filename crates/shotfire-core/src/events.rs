//! Events emitted by the simulation for host feedback.

use serde::{Deserialize, Serialize};

use crate::enums::Phase;

/// Notable state changes, buffered by the engine and drained by the host.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimEvent {
    /// The exercise moved to a later phase.
    PhaseChanged { from: Phase, to: Phase },
    /// XP was credited.
    XpAwarded { amount: u32, total: u32 },
    /// An evacuation horn blast sounded.
    AlarmSounded { blasts: u32, required: u32 },
    /// Worker evacuation began.
    EvacuationStarted,
    /// A pre-blast inspection task completed.
    TaskCompleted { task_id: String },
    /// The safety checklist was confirmed and the countdown armed.
    BlastSequenceInitiated,
    /// A hole fired, with its simulated readings.
    HoleDetonated {
        hole: u32,
        seismic_magnitude: f64,
        flyrock_distance_m: f64,
    },
    /// An anomaly was reported during the blast.
    AnomalyDetected { total: u32 },
    /// A post-blast verification was recorded.
    VerificationCompleted { task_id: String },
    /// The simulation returned to its initial state.
    SimulationReset,
}
