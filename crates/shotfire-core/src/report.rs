//! Mission debrief — scoring computed outside the engine.
//!
//! Grading lives here, not in the engine, so scoring-policy changes
//! never touch the state machine.

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::enums::Grade;
use crate::state::SimulationState;

/// Percentage score for a final XP total, capped at 100.
pub fn score_percent(total_xp: f64) -> f64 {
    (total_xp / MAX_MISSION_XP as f64 * 100.0).min(100.0)
}

/// Map a final XP total to a letter grade.
pub fn grade_for(total_xp: f64) -> Grade {
    let score = score_percent(total_xp);
    if score >= GRADE_A_PLUS_PERCENT {
        Grade::APlus
    } else if score >= GRADE_A_PERCENT {
        Grade::A
    } else if score >= GRADE_B_PERCENT {
        Grade::B
    } else if score >= GRADE_C_PERCENT {
        Grade::C
    } else {
        Grade::D
    }
}

/// Debrief summary assembled from a finished run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MissionReport {
    pub grade: Grade,
    pub score_percent: f64,
    pub total_xp: u32,
    pub evacuation_time_secs: u32,
    pub safety_compliance_percent: f64,
    pub worker_incidents: u32,
    pub anomalies_detected: u32,
    /// Whether the final flyrock reading stayed inside the containment limit.
    pub flyrock_contained: bool,
}

impl MissionReport {
    pub fn from_state(state: &SimulationState) -> Self {
        Self {
            grade: grade_for(state.total_xp as f64),
            score_percent: score_percent(state.total_xp as f64),
            total_xp: state.total_xp,
            evacuation_time_secs: state.evacuation_time_secs,
            safety_compliance_percent: state.safety_compliance_percent,
            worker_incidents: state.worker_incidents,
            anomalies_detected: state.anomalies_detected,
            flyrock_contained: state.flyrock_distance_m <= FLYROCK_SAFE_LIMIT_M,
        }
    }
}
