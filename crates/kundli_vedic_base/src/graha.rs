//! The nine grahas, their chart bodies and natural friendships.
//!
//! Friendship table from Brihat Parashara Hora Shastra, ch. 3.

use std::fmt;

use kundli_ephem::CelestialBody;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Graha {
    Surya,
    Chandra,
    Mangal,
    Buddh,
    Guru,
    Shukra,
    Shani,
    Rahu,
    Ketu,
}

pub const ALL_GRAHAS: [Graha; 9] = [
    Graha::Surya,
    Graha::Chandra,
    Graha::Mangal,
    Graha::Buddh,
    Graha::Guru,
    Graha::Shukra,
    Graha::Shani,
    Graha::Rahu,
    Graha::Ketu,
];

/// The seven visible grahas; the nodes excluded.
pub const SAPTA_GRAHAS: [Graha; 7] = [
    Graha::Surya,
    Graha::Chandra,
    Graha::Mangal,
    Graha::Buddh,
    Graha::Guru,
    Graha::Shukra,
    Graha::Shani,
];

impl Graha {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Surya => "Surya",
            Self::Chandra => "Chandra",
            Self::Mangal => "Mangal",
            Self::Buddh => "Buddh",
            Self::Guru => "Guru",
            Self::Shukra => "Shukra",
            Self::Shani => "Shani",
            Self::Rahu => "Rahu",
            Self::Ketu => "Ketu",
        }
    }

    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Surya => "Sun",
            Self::Chandra => "Moon",
            Self::Mangal => "Mars",
            Self::Buddh => "Mercury",
            Self::Guru => "Jupiter",
            Self::Shukra => "Venus",
            Self::Shani => "Saturn",
            Self::Rahu => "Rahu",
            Self::Ketu => "Ketu",
        }
    }

    /// Ephemeris body for this graha. `None` for the nodes.
    pub const fn body(self) -> Option<CelestialBody> {
        match self {
            Self::Surya => Some(CelestialBody::Sun),
            Self::Chandra => Some(CelestialBody::Moon),
            Self::Mangal => Some(CelestialBody::Mars),
            Self::Buddh => Some(CelestialBody::Mercury),
            Self::Guru => Some(CelestialBody::Jupiter),
            Self::Shukra => Some(CelestialBody::Venus),
            Self::Shani => Some(CelestialBody::Saturn),
            Self::Rahu | Self::Ketu => None,
        }
    }

    /// Graha for a chart body. `None` for Uranus, Neptune and Pluto.
    pub const fn from_body(body: CelestialBody) -> Option<Self> {
        match body {
            CelestialBody::Sun => Some(Self::Surya),
            CelestialBody::Moon => Some(Self::Chandra),
            CelestialBody::Mars => Some(Self::Mangal),
            CelestialBody::Mercury => Some(Self::Buddh),
            CelestialBody::Jupiter => Some(Self::Guru),
            CelestialBody::Venus => Some(Self::Shukra),
            CelestialBody::Saturn => Some(Self::Shani),
            CelestialBody::Uranus | CelestialBody::Neptune | CelestialBody::Pluto => None,
        }
    }

    const fn sapta_index(self) -> Option<usize> {
        match self {
            Self::Surya => Some(0),
            Self::Chandra => Some(1),
            Self::Mangal => Some(2),
            Self::Buddh => Some(3),
            Self::Guru => Some(4),
            Self::Shukra => Some(5),
            Self::Shani => Some(6),
            Self::Rahu | Self::Ketu => None,
        }
    }
}

impl fmt::Display for Graha {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Natural (naisargika) disposition of one graha toward another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Relation {
    Friend,
    Neutral,
    Enemy,
}

const F: Relation = Relation::Friend;
const N: Relation = Relation::Neutral;
const E: Relation = Relation::Enemy;

/// Row = the graha whose view is taken, column = the other graha.
/// Order follows [`SAPTA_GRAHAS`]; the diagonal is treated as friendly.
#[rustfmt::skip]
static NAISARGIKA: [[Relation; 7]; 7] = [
    //  Su Mo Ma Me Ju Ve Sa
    [F, F, F, N, F, E, E], // Surya
    [F, F, N, F, N, N, N], // Chandra
    [F, F, F, E, F, N, N], // Mangal
    [F, E, N, F, N, F, N], // Buddh
    [F, F, F, E, F, E, N], // Guru
    [E, E, N, F, N, F, F], // Shukra
    [E, E, E, F, N, F, F], // Shani
];

/// How `of` regards `towards`. Nodes are neutral to everything.
pub fn naisargika_relation(of: Graha, towards: Graha) -> Relation {
    match (of.sapta_index(), towards.sapta_index()) {
        (Some(i), Some(j)) => NAISARGIKA[i][j],
        _ => Relation::Neutral,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_round_trip() {
        for g in SAPTA_GRAHAS {
            let body = g.body().unwrap();
            assert_eq!(Graha::from_body(body), Some(g));
        }
        assert_eq!(Graha::Rahu.body(), None);
        assert_eq!(Graha::from_body(CelestialBody::Pluto), None);
    }

    #[test]
    fn asymmetric_pairs() {
        // Moon is friendly to Mercury; Mercury is hostile to the Moon.
        assert_eq!(naisargika_relation(Graha::Chandra, Graha::Buddh), Relation::Friend);
        assert_eq!(naisargika_relation(Graha::Buddh, Graha::Chandra), Relation::Enemy);
        assert_eq!(naisargika_relation(Graha::Surya, Graha::Shani), Relation::Enemy);
        assert_eq!(naisargika_relation(Graha::Shani, Graha::Guru), Relation::Neutral);
    }

    #[test]
    fn moon_has_no_enemies() {
        for g in SAPTA_GRAHAS {
            assert_ne!(naisargika_relation(Graha::Chandra, g), Relation::Enemy);
        }
    }

    #[test]
    fn nodes_neutral() {
        assert_eq!(naisargika_relation(Graha::Rahu, Graha::Surya), Relation::Neutral);
        assert_eq!(naisargika_relation(Graha::Guru, Graha::Ketu), Relation::Neutral);
    }
}
