//! Content gate run over the raw source text before any compilation
//! starts. Three tiers: red blocks the compile, yellow warns and
//! continues, green passes silently.

use regex::Regex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuditLevel {
    Green,
    Yellow,
    Red,
}

#[derive(Debug, Clone)]
pub struct AuditOutcome {
    pub level: AuditLevel,
    pub reason: String,
}

const RED_RULES: &[(&str, &str)] = &[
    ("暴力|血腥|杀人", "violent content"),
    ("诈骗|贩毒|恐怖", "illegal content"),
    ("种族歧视|性别歧视", "hate speech"),
];

const YELLOW_RULES: &[(&str, &str)] = &[
    ("政治敏感", "sensitive topic"),
    (r"\d{15,18}", "possible national ID number"),
];

pub fn classify(source: &str) -> AuditOutcome {
    for (pattern, reason) in RED_RULES {
        if is_match(pattern, source) {
            return AuditOutcome {
                level: AuditLevel::Red,
                reason: (*reason).to_string(),
            };
        }
    }
    for (pattern, reason) in YELLOW_RULES {
        if is_match(pattern, source) {
            return AuditOutcome {
                level: AuditLevel::Yellow,
                reason: (*reason).to_string(),
            };
        }
    }
    AuditOutcome {
        level: AuditLevel::Green,
        reason: "content clean".to_string(),
    }
}

fn is_match(pattern: &str, text: &str) -> bool {
    // Patterns are fixed literals above; a malformed one counts as no match.
    Regex::new(pattern).map(|re| re.is_match(text)).unwrap_or(false)
}
