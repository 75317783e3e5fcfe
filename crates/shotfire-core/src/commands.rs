//! Operator commands sent from the host UI to the simulation.
//!
//! Commands whose preconditions are not met in the current state are
//! ignored rather than rejected with an error.

use serde::{Deserialize, Serialize};

use crate::enums::Phase;

/// All operator actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum OperatorCommand {
    // --- Phase control ---
    /// Jump to a later phase (used for the Briefing → PreBlast start).
    SetPhase { phase: Phase },
    /// Restore the initial state for a fresh run.
    ResetSimulation,

    // --- Pre-blast inspection ---
    /// Begin worker evacuation without waiting for the alarm threshold.
    StartEvacuation,
    /// Sound one evacuation horn blast.
    SoundAlarm,
    /// Credit the active inspection task's XP.
    CompleteTask,
    /// Advance to the next inspection task.
    NextTask,

    // --- Blast sequence ---
    /// Confirm the safety checklist and arm the detonation countdown.
    InitiateBlastSequence,
    /// Fire the next hole in sequence.
    DetonateHole,
    /// Report an anomaly observed during the blast.
    DetectAnomaly,

    // --- Post-blast verification ---
    /// Record the crater inspection result.
    InspectCrater,
    /// Record the flyrock containment check.
    VerifyFlyrock,
    /// Authorize worker re-entry to cleared zones.
    AuthorizeReentry,
    /// Advance to the next verification task.
    NextPostTask,
}
