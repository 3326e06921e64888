//! Loading configs from disk and turning them into chart builders.

use std::io::Write;

use kundli_chart::ErrorKind;
use kundli_config::{ConfigError, KundliConfig, Zodiac};
use kundli_time::CivilDateTime;
use kundli_vedic_base::{AyanamshaSystem, FrameMode, GeoCoordinate, HouseSystemKind, NodeMode};

#[test]
fn loads_full_document() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
frame_mode = "sidereal"
ayanamsha = "kp"
house_system = "sripati"
nutation = false
node_mode = "true"

[ephemeris]
min_year = 1900
max_year = 2100
"#
    )
    .unwrap();

    let cfg = KundliConfig::load(file.path()).unwrap();
    assert_eq!(cfg.frame_mode, Zodiac::Sidereal);
    assert_eq!(cfg.frame(), FrameMode::Sidereal(AyanamshaSystem::Krishnamurti));
    assert_eq!(cfg.house_system, HouseSystemKind::Porphyry);
    assert!(!cfg.nutation);
    assert_eq!(cfg.node_mode, NodeMode::True);
    assert_eq!(cfg.ephemeris.min_year, 1900);
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = KundliConfig::load(dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }), "{err}");
    assert_eq!(err.kind(), ErrorKind::Configuration);
}

#[test]
fn unknown_key_is_rejected() {
    let err = KundliConfig::from_toml_str("zodiac = \"sidereal\"").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn builder_honours_window() {
    let cfg = KundliConfig::from_toml_str("[ephemeris]\nmin_year = 1950\nmax_year = 2050\n").unwrap();
    let builder = cfg.chart_builder().unwrap();
    let loc = GeoCoordinate::new(28.6139, 77.2090).unwrap();

    assert!(builder.build(&CivilDateTime::new(1990, 1, 1, 12, 0, 0.0), &loc).is_ok());
    let err = builder
        .build(&CivilDateTime::new(1949, 12, 31, 12, 0, 0.0), &loc)
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::EphemerisRange);
}

#[test]
fn builder_honours_frame_and_houses() {
    let cfg = KundliConfig {
        frame_mode: Zodiac::Tropical,
        house_system: HouseSystemKind::Equal,
        ..KundliConfig::default()
    };
    let chart = cfg
        .chart_builder()
        .unwrap()
        .build(
            &CivilDateTime::new(2000, 1, 1, 12, 0, 0.0),
            &GeoCoordinate::new(51.5, 0.0).unwrap(),
        )
        .unwrap();
    assert_eq!(chart.frame().mode, FrameMode::Tropical);
    assert_eq!(chart.houses().system, HouseSystemKind::Equal);
    assert_eq!(chart.ayanamsha_deg(), None);
}
