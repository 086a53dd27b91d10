// src/models/strength.rs

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Proficiency band produced by the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Strength {
    Weak,
    Moderate,
    Strong,
}

impl Strength {
    /// Bootstrap badge color shown next to the band on the report.
    pub fn badge_color(self) -> &'static str {
        match self {
            Strength::Weak => "danger",
            Strength::Moderate => "warning",
            Strength::Strong => "success",
        }
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Strength::Weak => "Weak",
            Strength::Moderate => "Moderate",
            Strength::Strong => "Strong",
        };
        write!(f, "{}", label)
    }
}

impl FromStr for Strength {
    type Err = String;

    /// Labels come from the strength encoder artifact. Anything outside the
    /// trained set means the artifact and this enum disagree, which must not
    /// be papered over with a default band.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Weak" => Ok(Strength::Weak),
            "Moderate" => Ok(Strength::Moderate),
            "Strong" => Ok(Strength::Strong),
            other => Err(format!("unrecognized strength label '{}'", other)),
        }
    }
}
