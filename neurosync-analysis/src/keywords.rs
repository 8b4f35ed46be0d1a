//! Keyword tiers for crisis and mood analysis. Matched as lowercase
//! substrings, multi-word phrases included.

/// Severe-tier phrases. Any match escalates straight to `Severity::Severe`.
pub const SEVERE_KEYWORDS: &[&str] = &[
    "suicide",
    "suicidal",
    "kill myself",
    "end my life",
    "take my life",
    "want to die",
    "better off dead",
    "end it all",
    "no point living",
    "not worth living",
    "no reason to live",
    "don't want to live",
    "plan to kill",
    "planning to die",
    "ready to die",
];

/// High-risk phrases.
pub const HIGH_RISK_KEYWORDS: &[&str] = &[
    "harm myself",
    "hurt myself",
    "self harm",
    "cut myself",
    "overdose",
    "can't go on",
    "give up on life",
    "hopeless",
    "no way out",
    "trapped",
    "unbearable",
    "end the pain",
    "can't take it anymore",
    "nothing matters",
    "everyone better off without me",
];

/// Moderate-risk phrases.
pub const MODERATE_RISK_KEYWORDS: &[&str] = &[
    "hate myself",
    "worthless",
    "failure",
    "burden",
    "can't cope",
    "falling apart",
    "losing control",
    "don't care anymore",
    "numb",
    "empty inside",
    "dark thoughts",
    "intrusive thoughts",
];

/// Anxiety indicators.
pub const ANXIETY_KEYWORDS: &[&str] = &[
    "anxious",
    "anxiety",
    "worried",
    "nervous",
    "stressed",
    "overwhelmed",
    "panic",
    "panicking",
    "racing thoughts",
    "can't breathe",
    "heart racing",
    "hyperventilating",
    "restless",
    "on edge",
    "tense",
    "jittery",
    "fear",
    "scared",
    "terrified",
    "dread",
    "catastrophizing",
];

/// Depression indicators.
pub const DEPRESSION_KEYWORDS: &[&str] = &[
    "depressed",
    "depression",
    "sad",
    "hopeless",
    "helpless",
    "empty",
    "numb",
    "no energy",
    "exhausted",
    "tired",
    "can't sleep",
    "sleeping too much",
    "no appetite",
    "don't enjoy",
    "no interest",
    "isolated",
    "alone",
    "abandoned",
    "worthless",
    "guilty",
];

/// Protective phrases. Matches reduce the risk score.
pub const PROTECTIVE_PHRASES: &[&str] = &[
    "getting help",
    "seeing therapist",
    "talking to doctor",
    "support system",
    "family support",
    "friends helping",
    "feeling better",
    "improving",
    "making progress",
    "hope",
    "looking forward",
    "trying",
];

/// Intensity modifiers that boost the anxiety score.
pub const INTENSITY_MODIFIERS: &[&str] =
    &["very", "extremely", "really", "so", "unbearably", "constantly"];
