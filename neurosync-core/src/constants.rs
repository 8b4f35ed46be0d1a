/// NeuroSync engine version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Reserved catalog category that retrieval never surfaces.
pub const CRISIS_RESOURCES_CATEGORY: &str = "crisis_resources";

/// A wellness plan always carries exactly this many immediate actions.
pub const IMMEDIATE_ACTIONS_LEN: usize = 3;

/// Upper bound on activities included in a wellness plan.
pub const MAX_PLAN_ACTIVITIES: usize = 4;

/// Number of matched keywords a crisis report retains (privacy cap).
pub const MAX_REPORTED_KEYWORDS: usize = 5;
