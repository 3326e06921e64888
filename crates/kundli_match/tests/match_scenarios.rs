//! Compatibility scoring over real charts and hand-picked Moon pairs.

use std::sync::Arc;

use approx::assert_abs_diff_eq;

use kundli_chart::{Chart, ChartBuilder};
use kundli_ephem::AnalyticEphemeris;
use kundli_match::{
    Koota, MAX_SCORE, MANGAL_DOSHA_HOUSES, MoonProfile, Symmetry, Verdict, score, score_moons,
};
use kundli_time::CivilDateTime;
use kundli_vedic_base::{FrameMode, GeoCoordinate, Graha, Nakshatra, Rashi};

fn chart(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> Chart {
    let loc = GeoCoordinate::new(28.6139, 77.2090).unwrap();
    ChartBuilder::new(Arc::new(AnalyticEphemeris::default()))
        .build(&CivilDateTime::new(y, mo, d, h, mi, 0.0), &loc)
        .unwrap()
}

#[test]
fn self_match_is_deterministic_and_symmetric() {
    let a = chart(1990, 1, 1, 12, 0);
    let first = score(&a, &a);
    let again = score(&a, &a);
    assert_eq!(first, again);

    // Same Moon: same nadi, so no Nadi points; every other factor is full.
    assert_eq!(first.factor(Koota::Nadi).unwrap().score, 0.0);
    assert_eq!(first.factor(Koota::Yoni).unwrap().score, 4.0);
    assert_eq!(first.factor(Koota::Bhakoot).unwrap().score, 7.0);
    assert_eq!(first.factor(Koota::Tara).unwrap().score, 3.0);
    assert_eq!(first.max_score, MAX_SCORE);
}

#[test]
fn symmetric_factors_agree_when_roles_swap() {
    let a = chart(1990, 1, 1, 12, 0);
    let b = chart(1992, 8, 17, 4, 45);
    let ab = score(&a, &b);
    let ba = score(&b, &a);
    for (x, y) in ab.factors.iter().zip(ba.factors.iter()) {
        assert_eq!(x.name, y.name);
        if x.symmetry == Symmetry::Symmetric {
            assert_eq!(x.score, y.score, "{}", x.name);
        }
    }
}

#[test]
fn breakdown_sums_to_total_in_fixed_order() {
    let a = chart(1985, 3, 9, 7, 15);
    let b = chart(1988, 11, 23, 21, 40);
    let r = score(&a, &b);
    let names: Vec<Koota> = r.factors.iter().map(|f| f.name).collect();
    assert_eq!(names, Koota::all().to_vec());
    let sum: f64 = r.factors.iter().map(|f| f.score).sum();
    assert_abs_diff_eq!(sum, r.score, epsilon = 1e-12);
    assert!(r.score <= MAX_SCORE);
    assert_eq!(r.verdict, Verdict::from_score(r.score));
}

#[test]
fn perfect_pair_scores_thirty_six() {
    // Groom Moon in Mrigashira, bride in Rohini, both in Vrishabha.
    let groom = MoonProfile::from_sidereal_longitude(57.1667);
    let bride = MoonProfile::from_sidereal_longitude(50.5);
    assert_eq!(groom.nakshatra, Nakshatra::Mrigashira);
    assert_eq!(bride.nakshatra, Nakshatra::Rohini);
    assert_eq!(groom.rashi, Rashi::Vrishabha);

    let r = score_moons(&groom, &bride);
    let points: Vec<f64> = r.factors.iter().map(|f| f.score).collect();
    assert_eq!(points, [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0]);
    assert_eq!(r.score, 36.0);
    assert_eq!(r.verdict, Verdict::Excellent);
    assert!(r.doshas.is_none());
}

#[test]
fn every_moon_pair_stays_within_bounds() {
    for i in 0..108 {
        for j in 0..108 {
            let g = MoonProfile::from_sidereal_longitude(i as f64 * 3.3 + 0.7);
            let b = MoonProfile::from_sidereal_longitude(j as f64 * 3.3 + 1.9);
            let r = score_moons(&g, &b);
            assert!((0.0..=MAX_SCORE).contains(&r.score), "{i} {j}: {}", r.score);
            for f in &r.factors {
                assert!(f.score <= f.max, "{} {i} {j}", f.name);
            }
        }
    }
}

#[test]
fn tropical_chart_reads_lahiri_moon() {
    let loc = GeoCoordinate::new(19.0760, 72.8777).unwrap();
    let birth = CivilDateTime::new(1995, 5, 20, 9, 30, 0.0);
    let base = ChartBuilder::new(Arc::new(AnalyticEphemeris::default()));
    let sidereal = base.clone().build(&birth, &loc).unwrap();
    let tropical = base.frame_mode(FrameMode::Tropical).build(&birth, &loc).unwrap();

    let s = MoonProfile::from_chart(&sidereal);
    let t = MoonProfile::from_chart(&tropical);
    assert_abs_diff_eq!(s.longitude_deg, t.longitude_deg, epsilon = 1e-9);
    assert_eq!(s.nakshatra, t.nakshatra);
}

#[test]
fn dosha_report_reflects_mars_house() {
    let a = chart(1990, 1, 1, 12, 0);
    let b = chart(1993, 6, 2, 18, 10);
    let r = score(&a, &b);
    let d = r.doshas.unwrap();

    let in_dosha_house = |c: &Chart| MANGAL_DOSHA_HOUSES.contains(&c.house_of_graha(Graha::Mangal));
    assert_eq!(d.groom_mangal, in_dosha_house(&a));
    assert_eq!(d.bride_mangal, in_dosha_house(&b));
    assert_eq!(d.mangal_cancelled, d.groom_mangal && d.bride_mangal);
}

#[test]
fn result_serializes() {
    let a = chart(1990, 1, 1, 12, 0);
    let r = score(&a, &a);
    let json = serde_json::to_value(&r).unwrap();
    assert_eq!(json["max_score"], 36.0);
    assert_eq!(json["factors"][0]["name"], "varna");
    assert_eq!(json["factors"][5]["symmetry"], "directional");
    assert!(json["doshas"]["groom_mangal"].is_boolean());
}

#[test]
fn charts_reloaded_from_json_score_the_same() {
    let a = chart(1990, 1, 1, 12, 0);
    let b = chart(1992, 8, 17, 4, 45);
    let a2: Chart = serde_json::from_str(&serde_json::to_string(&a).unwrap()).unwrap();
    let b2: Chart = serde_json::from_str(&serde_json::to_string(&b).unwrap()).unwrap();
    assert_eq!(a2, a);
    assert_eq!(b2, b);
    assert_eq!(score(&a2, &b2), score(&a, &b));
    assert_eq!(score(&b2, &a2), score(&b, &a));
}
