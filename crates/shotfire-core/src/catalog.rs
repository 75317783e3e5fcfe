//! Static exercise catalogs — tasks, blast holes, and checklist data.
//!
//! Read-only configuration consumed by the engine (index bounds, XP
//! rewards) and by host UIs (display text). Never mutated at runtime.

use serde::Serialize;

/// A pre-blast inspection task, completed in catalog order.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PreBlastTask {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    /// XP credited when the task completes.
    pub xp_reward: u32,
    /// Suggested completion window shown to the operator (seconds).
    pub time_limit_secs: Option<u32>,
    /// Horn blasts required before the task can complete.
    pub required_blasts: Option<u32>,
    /// Shelters to confirm (shelter verification only).
    pub shelters: &'static [Shelter],
}

/// A worker shelter confirmed during pre-blast inspection.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Shelter {
    pub id: &'static str,
    pub workers: u32,
}

/// A primed blast hole in firing order.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct BlastHole {
    pub id: u32,
    pub sequence: u32,
}

/// One line of the final safety checklist confirmed before the countdown.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ChecklistItem {
    pub id: &'static str,
    pub label: &'static str,
}

/// A post-blast verification task, completed in catalog order.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PostBlastTask {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub verification: VerificationData,
}

/// Verification data attached to a post-blast task.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(tag = "type")]
pub enum VerificationData {
    /// Crater geometry against the blast plan.
    Crater {
        depth_m: f64,
        fragmentation_percent: f64,
        within_target: bool,
    },
    /// Flyrock throw against the containment limit.
    Flyrock {
        max_distance_m: f64,
        expected_distance_m: f64,
        contained: bool,
    },
    /// Zone clearances for worker re-entry.
    Reentry { zones: &'static [ReentryZone] },
}

/// A graded re-entry zone.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ReentryZone {
    pub id: &'static str,
    pub label: &'static str,
}

/// Pre-blast inspection tasks in completion order.
pub const PRE_BLAST_TASKS: &[PreBlastTask] = &[
    PreBlastTask {
        id: "perimeter_check",
        title: "Verify Blast Perimeter",
        description: "Check that all workers are outside the danger zone",
        xp_reward: 50,
        time_limit_secs: Some(15),
        required_blasts: None,
        shelters: &[],
    },
    PreBlastTask {
        id: "evacuation_alarm",
        title: "Sound Evacuation Alarm",
        description: "Sound three evacuation horn blasts to alert all workers",
        xp_reward: 50,
        time_limit_secs: Some(10),
        required_blasts: Some(3),
        shelters: &[],
    },
    PreBlastTask {
        id: "shelter_verification",
        title: "Check Shelter Readiness",
        description: "Confirm all workers are in protected areas",
        xp_reward: 50,
        time_limit_secs: None,
        required_blasts: None,
        shelters: &[
            Shelter { id: "A", workers: 12 },
            Shelter { id: "B", workers: 8 },
            Shelter { id: "C", workers: 5 },
        ],
    },
];

/// Blast holes in firing order.
pub const BLAST_HOLES: &[BlastHole] = &[
    BlastHole { id: 1, sequence: 1 },
    BlastHole { id: 2, sequence: 2 },
    BlastHole { id: 3, sequence: 3 },
    BlastHole { id: 4, sequence: 4 },
    BlastHole { id: 5, sequence: 5 },
];

/// Final safety checklist confirmed before arming the countdown.
pub const SAFETY_CHECKLIST: &[ChecklistItem] = &[
    ChecklistItem {
        id: "perimeter",
        label: "Perimeter secure",
    },
    ChecklistItem {
        id: "shelters",
        label: "Shelters manned",
    },
    ChecklistItem {
        id: "blast_holes",
        label: "Blast holes primed",
    },
    ChecklistItem {
        id: "detonators",
        label: "Detonators checked",
    },
    ChecklistItem {
        id: "signal_line",
        label: "Signal line clear",
    },
];

/// Post-blast verification tasks in completion order.
pub const POST_BLAST_TASKS: &[PostBlastTask] = &[
    PostBlastTask {
        id: "crater_inspection",
        title: "Check Blast Crater",
        description: "Verify the blast went as planned",
        verification: VerificationData::Crater {
            depth_m: 15.0,
            fragmentation_percent: 80.0,
            within_target: true,
        },
    },
    PostBlastTask {
        id: "flyrock_check",
        title: "Verify Flyrock Containment",
        description: "Check for hazards outside the perimeter",
        verification: VerificationData::Flyrock {
            max_distance_m: 145.0,
            expected_distance_m: 160.0,
            contained: true,
        },
    },
    PostBlastTask {
        id: "reentry_clearance",
        title: "Clear Safe Re-entry",
        description: "Authorize worker re-entry to safe zones only",
        verification: VerificationData::Reentry {
            zones: &[
                ReentryZone {
                    id: "red",
                    label: "RED ZONE: Blast crater (no entry)",
                },
                ReentryZone {
                    id: "yellow",
                    label: "YELLOW ZONE: Flyrock field (limited entry with PPE)",
                },
                ReentryZone {
                    id: "green",
                    label: "GREEN ZONE: Safe work resumption area",
                },
            ],
        },
    },
];
