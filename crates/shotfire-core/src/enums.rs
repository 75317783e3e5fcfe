//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Top-level phase of the blasting exercise.
///
/// Phases are strictly ordered. The engine only ever moves forward
/// (Briefing → PreBlast → BlastSequence → PostBlast → Completion)
/// until an explicit reset.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Phase {
    /// Mission briefing before the exercise begins.
    #[default]
    Briefing,
    /// Pre-blast inspection: perimeter, alarm, and shelter tasks.
    PreBlast,
    /// Armed countdown and sequential detonation of the blast holes.
    BlastSequence,
    /// Crater, flyrock, and re-entry verification.
    PostBlast,
    /// Exercise finished; debrief available.
    Completion,
}

/// Letter grade assigned at mission debrief.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Grade {
    APlus,
    A,
    B,
    C,
    D,
}

impl Grade {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::APlus => "A+",
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
        }
    }
}
