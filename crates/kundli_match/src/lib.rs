//! Ashtakoota compatibility scoring.
//!
//! [`score`] compares two charts through their sidereal Moon placements.
//! Chart A is the groom and chart B the bride; Varna and Gana depend on that
//! order, the other six factors do not. Scoring is total and pure.

pub mod dosha;
pub mod koota;
pub mod profile;
pub mod result;

use kundli_chart::Chart;

pub use dosha::{DoshaReport, MANGAL_DOSHA_HOUSES, has_kaal_sarp_dosha, has_mangal_dosha};
pub use koota::{ALL_KOOTAS, Gana, Koota, Nadi, Symmetry, VashyaGroup, Yoni};
pub use profile::MoonProfile;
pub use result::{CompatibilityResult, FactorScore, MAX_SCORE, Verdict};

/// Score two charts, groom first.
pub fn score(chart_a: &Chart, chart_b: &Chart) -> CompatibilityResult {
    let groom = MoonProfile::from_chart(chart_a);
    let bride = MoonProfile::from_chart(chart_b);
    let mut result = score_moons(&groom, &bride);
    result.doshas = Some(DoshaReport::new(chart_a, chart_b));
    tracing::debug!(
        score = result.score,
        verdict = %result.verdict,
        groom = %groom.nakshatra,
        bride = %bride.nakshatra,
        "charts matched"
    );
    result
}

/// Score two Moon placements directly. No dosha report.
pub fn score_moons(groom: &MoonProfile, bride: &MoonProfile) -> CompatibilityResult {
    let factors: Vec<FactorScore> = ALL_KOOTAS
        .iter()
        .map(|&k| FactorScore {
            name: k,
            score: k.score(groom, bride),
            max: k.max_points(),
            symmetry: k.symmetry(),
        })
        .collect();
    let total = factors.iter().map(|f| f.score).sum();
    CompatibilityResult {
        score: total,
        max_score: MAX_SCORE,
        factors,
        verdict: Verdict::from_score(total),
        doshas: None,
    }
}
