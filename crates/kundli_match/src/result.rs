use std::fmt;

use serde::{Deserialize, Serialize};

use crate::dosha::DoshaReport;
use crate::koota::{Koota, Symmetry};

/// Highest possible Ashtakoota total.
pub const MAX_SCORE: f64 = 36.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    NotRecommended,
    Average,
    Good,
    Excellent,
}

impl Verdict {
    /// Band for a total out of 36.
    pub fn from_score(score: f64) -> Self {
        if score >= 33.0 {
            Self::Excellent
        } else if score >= 25.0 {
            Self::Good
        } else if score >= 18.0 {
            Self::Average
        } else {
            Self::NotRecommended
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::NotRecommended => "not recommended",
            Self::Average => "average",
            Self::Good => "good",
            Self::Excellent => "excellent",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FactorScore {
    pub name: Koota,
    pub score: f64,
    pub max: f64,
    pub symmetry: Symmetry,
}

/// Total, per-factor breakdown and dosha notes for one pair of charts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompatibilityResult {
    pub score: f64,
    pub max_score: f64,
    /// In customary order, Varna first.
    pub factors: Vec<FactorScore>,
    pub verdict: Verdict,
    /// `None` when scored from bare Moon placements.
    pub doshas: Option<DoshaReport>,
}

impl CompatibilityResult {
    pub fn factor(&self, koota: Koota) -> Option<&FactorScore> {
        self.factors.iter().find(|f| f.name == koota)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verdict_bands() {
        assert_eq!(Verdict::from_score(0.0), Verdict::NotRecommended);
        assert_eq!(Verdict::from_score(17.5), Verdict::NotRecommended);
        assert_eq!(Verdict::from_score(18.0), Verdict::Average);
        assert_eq!(Verdict::from_score(24.5), Verdict::Average);
        assert_eq!(Verdict::from_score(25.0), Verdict::Good);
        assert_eq!(Verdict::from_score(32.5), Verdict::Good);
        assert_eq!(Verdict::from_score(33.0), Verdict::Excellent);
        assert_eq!(Verdict::from_score(MAX_SCORE), Verdict::Excellent);
    }
}
