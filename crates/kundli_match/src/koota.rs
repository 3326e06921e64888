//! The eight Ashtakoota factors.
//!
//! Each factor reads the groom's and bride's Moon placements. Directional
//! factors (Varna, Gana) depend on who is groom; the rest give the same
//! points with the roles swapped.

use std::fmt;

use kundli_vedic_base::{Nakshatra, Rashi, Relation, naisargika_relation};
use serde::{Deserialize, Serialize};

use crate::profile::MoonProfile;

/// Whether a factor is invariant under swapping groom and bride.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Symmetry {
    Symmetric,
    Directional,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Koota {
    Varna,
    Vashya,
    Tara,
    Yoni,
    GrahaMaitri,
    Gana,
    Bhakoot,
    Nadi,
}

/// Factors in their customary order, 1 through 8 points.
pub const ALL_KOOTAS: [Koota; 8] = [
    Koota::Varna,
    Koota::Vashya,
    Koota::Tara,
    Koota::Yoni,
    Koota::GrahaMaitri,
    Koota::Gana,
    Koota::Bhakoot,
    Koota::Nadi,
];

impl Koota {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Varna => "Varna",
            Self::Vashya => "Vashya",
            Self::Tara => "Tara",
            Self::Yoni => "Yoni",
            Self::GrahaMaitri => "Graha Maitri",
            Self::Gana => "Gana",
            Self::Bhakoot => "Bhakoot",
            Self::Nadi => "Nadi",
        }
    }

    /// Points awarded for a perfect agreement.
    pub const fn max_points(self) -> f64 {
        match self {
            Self::Varna => 1.0,
            Self::Vashya => 2.0,
            Self::Tara => 3.0,
            Self::Yoni => 4.0,
            Self::GrahaMaitri => 5.0,
            Self::Gana => 6.0,
            Self::Bhakoot => 7.0,
            Self::Nadi => 8.0,
        }
    }

    pub const fn symmetry(self) -> Symmetry {
        match self {
            Self::Varna | Self::Gana => Symmetry::Directional,
            _ => Symmetry::Symmetric,
        }
    }

    /// Points for this factor.
    pub fn score(self, groom: &MoonProfile, bride: &MoonProfile) -> f64 {
        match self {
            Self::Varna => varna(groom, bride),
            Self::Vashya => vashya(groom, bride),
            Self::Tara => tara(groom, bride),
            Self::Yoni => yoni(groom, bride),
            Self::GrahaMaitri => graha_maitri(groom, bride),
            Self::Gana => gana(groom, bride),
            Self::Bhakoot => bhakoot(groom, bride),
            Self::Nadi => nadi(groom, bride),
        }
    }

    pub const fn all() -> &'static [Koota; 8] {
        &ALL_KOOTAS
    }
}

impl fmt::Display for Koota {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// Varna
// ---------------------------------------------------------------------------

/// Spiritual rank of a Moon sign, Shudra = 1 through Brahmin = 4.
pub const fn varna_rank(rashi: Rashi) -> u8 {
    match rashi {
        Rashi::Karka | Rashi::Vrischika | Rashi::Meena => 4,
        Rashi::Mesha | Rashi::Simha | Rashi::Dhanu => 3,
        Rashi::Vrishabha | Rashi::Kanya | Rashi::Makara => 2,
        Rashi::Mithuna | Rashi::Tula | Rashi::Kumbha => 1,
    }
}

fn varna(groom: &MoonProfile, bride: &MoonProfile) -> f64 {
    if varna_rank(groom.rashi) >= varna_rank(bride.rashi) {
        1.0
    } else {
        0.0
    }
}

// ---------------------------------------------------------------------------
// Vashya
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VashyaGroup {
    Chatushpada,
    Manava,
    Jalachara,
    Vanachara,
    Keeta,
}

impl VashyaGroup {
    const fn row(self) -> usize {
        self as usize
    }
}

/// Group of a Moon placement. Dhanu and Makara change group at 15°.
pub fn vashya_group(profile: &MoonProfile) -> VashyaGroup {
    let first_half = profile.degrees_in_rashi < 15.0;
    match profile.rashi {
        Rashi::Mesha | Rashi::Vrishabha => VashyaGroup::Chatushpada,
        Rashi::Mithuna | Rashi::Kanya | Rashi::Tula | Rashi::Kumbha => VashyaGroup::Manava,
        Rashi::Karka | Rashi::Meena => VashyaGroup::Jalachara,
        Rashi::Simha => VashyaGroup::Vanachara,
        Rashi::Vrischika => VashyaGroup::Keeta,
        Rashi::Dhanu if first_half => VashyaGroup::Manava,
        Rashi::Dhanu => VashyaGroup::Chatushpada,
        Rashi::Makara if first_half => VashyaGroup::Chatushpada,
        Rashi::Makara => VashyaGroup::Jalachara,
    }
}

#[rustfmt::skip]
static VASHYA_POINTS: [[f64; 5]; 5] = [
    // Cha  Man  Jal  Van  Kee
    [2.0, 1.0, 1.0, 0.5, 1.0], // Chatushpada
    [1.0, 2.0, 0.5, 0.0, 1.0], // Manava
    [1.0, 0.5, 2.0, 1.0, 1.0], // Jalachara
    [0.5, 0.0, 1.0, 2.0, 0.0], // Vanachara
    [1.0, 1.0, 1.0, 0.0, 2.0], // Keeta
];

fn vashya(groom: &MoonProfile, bride: &MoonProfile) -> f64 {
    VASHYA_POINTS[vashya_group(groom).row()][vashya_group(bride).row()]
}

// ---------------------------------------------------------------------------
// Tara
// ---------------------------------------------------------------------------

/// Tara (1..=9) of `to` counted from `from`.
pub fn tara_number(from: Nakshatra, to: Nakshatra) -> usize {
    match from.count_to(to) % 9 {
        0 => 9,
        n => n,
    }
}

fn tara_points(from: Nakshatra, to: Nakshatra) -> f64 {
    // Vipat, Pratyari and Vadha are inauspicious.
    match tara_number(from, to) {
        3 | 5 | 7 => 0.0,
        _ => 1.5,
    }
}

fn tara(groom: &MoonProfile, bride: &MoonProfile) -> f64 {
    tara_points(bride.nakshatra, groom.nakshatra) + tara_points(groom.nakshatra, bride.nakshatra)
}

// ---------------------------------------------------------------------------
// Yoni
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Yoni {
    Horse,
    Elephant,
    Sheep,
    Serpent,
    Dog,
    Cat,
    Rat,
    Cow,
    Buffalo,
    Tiger,
    Deer,
    Monkey,
    Mongoose,
    Lion,
}

pub const fn yoni_of(nakshatra: Nakshatra) -> Yoni {
    use Nakshatra::*;
    match nakshatra {
        Ashwini | Shatabhisha => Yoni::Horse,
        Bharani | Revati => Yoni::Elephant,
        Krittika | Pushya => Yoni::Sheep,
        Rohini | Mrigashira => Yoni::Serpent,
        Ardra | Mula => Yoni::Dog,
        Punarvasu | Ashlesha => Yoni::Cat,
        Magha | PurvaPhalguni => Yoni::Rat,
        UttaraPhalguni | UttaraBhadrapada => Yoni::Cow,
        Hasta | Swati => Yoni::Buffalo,
        Chitra | Vishakha => Yoni::Tiger,
        Anuradha | Jyeshtha => Yoni::Deer,
        PurvaAshadha | Shravana => Yoni::Monkey,
        UttaraAshadha => Yoni::Mongoose,
        Dhanishtha | PurvaBhadrapada => Yoni::Lion,
    }
}

/// Symmetric; zeros mark the seven sworn-enemy pairs.
#[rustfmt::skip]
pub static YONI_POINTS: [[u8; 14]; 14] = [
    // Ho El Sh Se Do Ca Ra Co Bu Ti De Mo Mg Li
    [4, 2, 2, 3, 2, 2, 2, 1, 0, 1, 3, 3, 2, 1], // Horse
    [2, 4, 3, 3, 2, 2, 2, 2, 3, 1, 2, 3, 2, 0], // Elephant
    [2, 3, 4, 2, 1, 2, 1, 3, 3, 1, 2, 0, 3, 1], // Sheep
    [3, 3, 2, 4, 2, 1, 1, 1, 1, 2, 2, 2, 0, 2], // Serpent
    [2, 2, 1, 2, 4, 2, 1, 2, 2, 1, 0, 2, 1, 1], // Dog
    [2, 2, 2, 1, 2, 4, 0, 2, 2, 1, 3, 3, 2, 1], // Cat
    [2, 2, 1, 1, 1, 0, 4, 2, 2, 2, 2, 2, 1, 2], // Rat
    [1, 2, 3, 1, 2, 2, 2, 4, 3, 0, 3, 2, 2, 1], // Cow
    [0, 3, 3, 1, 2, 2, 2, 3, 4, 1, 2, 2, 2, 1], // Buffalo
    [1, 1, 1, 2, 1, 1, 2, 0, 1, 4, 1, 1, 2, 1], // Tiger
    [3, 2, 2, 2, 0, 3, 2, 3, 2, 1, 4, 2, 2, 1], // Deer
    [3, 3, 0, 2, 2, 3, 2, 2, 2, 1, 2, 4, 3, 2], // Monkey
    [2, 2, 3, 0, 1, 2, 1, 2, 2, 2, 2, 3, 4, 2], // Mongoose
    [1, 0, 1, 2, 1, 1, 2, 1, 1, 1, 1, 2, 2, 4], // Lion
];

fn yoni(groom: &MoonProfile, bride: &MoonProfile) -> f64 {
    let g = yoni_of(groom.nakshatra) as usize;
    let b = yoni_of(bride.nakshatra) as usize;
    f64::from(YONI_POINTS[g][b])
}

// ---------------------------------------------------------------------------
// Graha Maitri
// ---------------------------------------------------------------------------

fn graha_maitri(groom: &MoonProfile, bride: &MoonProfile) -> f64 {
    let g = groom.rashi.lord();
    let b = bride.rashi.lord();
    if g == b {
        return 5.0;
    }
    use Relation::*;
    match (naisargika_relation(g, b), naisargika_relation(b, g)) {
        (Friend, Friend) => 5.0,
        (Friend, Neutral) | (Neutral, Friend) => 4.0,
        (Neutral, Neutral) => 3.0,
        (Friend, Enemy) | (Enemy, Friend) => 1.0,
        (Neutral, Enemy) | (Enemy, Neutral) => 0.5,
        (Enemy, Enemy) => 0.0,
    }
}

// ---------------------------------------------------------------------------
// Gana
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gana {
    Deva,
    Manushya,
    Rakshasa,
}

pub const fn gana_of(nakshatra: Nakshatra) -> Gana {
    use Nakshatra::*;
    match nakshatra {
        Ashwini | Mrigashira | Punarvasu | Pushya | Hasta | Swati | Anuradha | Shravana
        | Revati => Gana::Deva,
        Bharani | Rohini | Ardra | PurvaPhalguni | UttaraPhalguni | PurvaAshadha
        | UttaraAshadha | PurvaBhadrapada | UttaraBhadrapada => Gana::Manushya,
        Krittika | Ashlesha | Magha | Chitra | Vishakha | Jyeshtha | Mula | Dhanishtha
        | Shatabhisha => Gana::Rakshasa,
    }
}

/// Row = groom's gana, column = bride's.
#[rustfmt::skip]
static GANA_POINTS: [[f64; 3]; 3] = [
    // Dev  Man  Rak
    [6.0, 6.0, 1.0], // Deva
    [5.0, 6.0, 0.0], // Manushya
    [1.0, 0.0, 6.0], // Rakshasa
];

fn gana(groom: &MoonProfile, bride: &MoonProfile) -> f64 {
    GANA_POINTS[gana_of(groom.nakshatra) as usize][gana_of(bride.nakshatra) as usize]
}

// ---------------------------------------------------------------------------
// Bhakoot
// ---------------------------------------------------------------------------

fn bhakoot(groom: &MoonProfile, bride: &MoonProfile) -> f64 {
    let pair = (bride.rashi.count_to(groom.rashi), groom.rashi.count_to(bride.rashi));
    match pair {
        (2, 12) | (12, 2) | (5, 9) | (9, 5) | (6, 8) | (8, 6) => 0.0,
        _ => 7.0,
    }
}

// ---------------------------------------------------------------------------
// Nadi
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Nadi {
    Adi,
    Madhya,
    Antya,
}

/// Nadi runs Adi, Madhya, Antya, Antya, Madhya, Adi and repeats.
pub const fn nadi_of(nakshatra: Nakshatra) -> Nadi {
    match nakshatra.index() % 6 {
        0 | 5 => Nadi::Adi,
        1 | 4 => Nadi::Madhya,
        _ => Nadi::Antya,
    }
}

fn nadi(groom: &MoonProfile, bride: &MoonProfile) -> f64 {
    if nadi_of(groom.nakshatra) == nadi_of(bride.nakshatra) {
        0.0
    } else {
        8.0
    }
}
