//! Truncated IAU 1980 nutation series (18 largest terms).
//!
//! Computes nutation in longitude (Δψ) and obliquity (Δε) to a few hundredths
//! of an arcsecond, well below the precision of an analytic planetary theory.
//!
//! Source: Meeus, "Astronomical Algorithms" (2nd ed), Chapter 22,
//! Table 22.A; fundamental arguments from the same chapter.

/// Nutation components in arcseconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Nutation {
    /// Nutation in longitude Δψ, arcseconds.
    pub delta_psi_arcsec: f64,
    /// Nutation in obliquity Δε, arcseconds.
    pub delta_epsilon_arcsec: f64,
}

impl Nutation {
    /// Δψ in degrees.
    pub fn delta_psi_deg(&self) -> f64 {
        self.delta_psi_arcsec / 3600.0
    }

    /// Δε in degrees.
    pub fn delta_epsilon_deg(&self) -> f64 {
        self.delta_epsilon_arcsec / 3600.0
    }
}

/// Fundamental arguments in degrees: `[D, M, M', F, Ω]`.
///
/// - `D`  = mean elongation of the Moon from the Sun
/// - `M`  = mean anomaly of the Sun
/// - `M'` = mean anomaly of the Moon
/// - `F`  = Moon's argument of latitude
/// - `Ω`  = longitude of the Moon's mean ascending node
///
/// `t` = Julian centuries of TT since J2000.0.
pub fn fundamental_arguments_deg(t: f64) -> [f64; 5] {
    let t2 = t * t;
    let t3 = t2 * t;
    let d = 297.850_36 + 445_267.111_480 * t - 0.001_914_2 * t2 + t3 / 189_474.0;
    let m = 357.527_72 + 35_999.050_340 * t - 0.000_160_3 * t2 - t3 / 300_000.0;
    let mp = 134.962_98 + 477_198.867_398 * t + 0.008_697_2 * t2 + t3 / 56_250.0;
    let f = 93.271_91 + 483_202.017_538 * t - 0.003_682_5 * t2 + t3 / 327_270.0;
    let om = 125.044_52 - 1_934.136_261 * t + 0.002_070_8 * t2 + t3 / 450_000.0;
    [d, m, mp, f, om]
}

/// Each row: `[nD, nM, nM', nF, nΩ, S, S', C, C']`.
/// Δψ += (S + S'·T) sin(arg), Δε += (C + C'·T) cos(arg), units of 0.0001″.
#[rustfmt::skip]
static TERMS: [[f64; 9]; 18] = [
    //  D     M     M'    F     Ω        S        S'       C       C'
    [  0.0,  0.0,  0.0,  0.0,  1.0, -171996.0, -174.2, 92025.0,  8.9],
    [ -2.0,  0.0,  0.0,  2.0,  2.0,  -13187.0,   -1.6,  5736.0, -3.1],
    [  0.0,  0.0,  0.0,  2.0,  2.0,   -2274.0,   -0.2,   977.0, -0.5],
    [  0.0,  0.0,  0.0,  0.0,  2.0,    2062.0,    0.2,  -895.0,  0.5],
    [  0.0,  1.0,  0.0,  0.0,  0.0,    1426.0,   -3.4,    54.0, -0.1],
    [  0.0,  0.0,  1.0,  0.0,  0.0,     712.0,    0.1,    -7.0,  0.0],
    [ -2.0,  1.0,  0.0,  2.0,  2.0,    -517.0,    1.2,   224.0, -0.6],
    [  0.0,  0.0,  0.0,  2.0,  1.0,    -386.0,   -0.4,   200.0,  0.0],
    [  0.0,  0.0,  1.0,  2.0,  2.0,    -301.0,    0.0,   129.0, -0.1],
    [ -2.0, -1.0,  0.0,  2.0,  2.0,     217.0,   -0.5,   -95.0,  0.3],
    [ -2.0,  0.0,  1.0,  0.0,  0.0,    -158.0,    0.0,     0.0,  0.0],
    [ -2.0,  0.0,  0.0,  2.0,  1.0,     129.0,    0.1,   -70.0,  0.0],
    [  0.0,  0.0, -1.0,  2.0,  2.0,     123.0,    0.0,   -53.0,  0.0],
    [  2.0,  0.0,  0.0,  0.0,  0.0,      63.0,    0.0,     0.0,  0.0],
    [  0.0,  0.0,  1.0,  0.0,  1.0,      63.0,    0.1,   -33.0,  0.0],
    [  2.0,  0.0, -1.0,  2.0,  2.0,     -59.0,    0.0,    26.0,  0.0],
    [  0.0,  0.0, -1.0,  0.0,  1.0,     -58.0,   -0.1,    32.0,  0.0],
    [  0.0,  0.0,  1.0,  2.0,  1.0,     -51.0,    0.0,    27.0,  0.0],
];

/// Nutation in longitude and obliquity at `t` Julian centuries of TT since J2000.0.
pub fn nutation(t: f64) -> Nutation {
    let args = fundamental_arguments_deg(t);
    let mut dpsi = 0.0_f64;
    let mut deps = 0.0_f64;
    for row in &TERMS {
        let angle = (row[0] * args[0]
            + row[1] * args[1]
            + row[2] * args[2]
            + row[3] * args[3]
            + row[4] * args[4])
            .to_radians();
        dpsi += (row[5] + row[6] * t) * angle.sin();
        deps += (row[7] + row[8] * t) * angle.cos();
    }
    Nutation {
        delta_psi_arcsec: dpsi * 1e-4,
        delta_epsilon_arcsec: deps * 1e-4,
    }
}
