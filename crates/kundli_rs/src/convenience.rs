use kundli_chart::Chart;
use kundli_config::KundliConfig;
use kundli_match::CompatibilityResult;
use kundli_time::{CivilDateTime, JulianMoment};
use kundli_vedic_base::{GeoCoordinate, Houses, compute_houses};

use crate::date::parse_birth;
use crate::error::KundliError;
use crate::global::config;

/// Build a chart from lexical UTC date/time and a location, using the
/// global configuration.
pub fn generate_chart(
    birth_date: &str,
    birth_time: &str,
    latitude: f64,
    longitude: f64,
) -> Result<Chart, KundliError> {
    generate_chart_with(&config(), birth_date, birth_time, latitude, longitude)
}

/// [`generate_chart`] with an explicit configuration.
pub fn generate_chart_with(
    config: &KundliConfig,
    birth_date: &str,
    birth_time: &str,
    latitude: f64,
    longitude: f64,
) -> Result<Chart, KundliError> {
    let birth = parse_birth(birth_date, birth_time)?;
    let location = GeoCoordinate::new(latitude, longitude)?;
    chart_at(config, &birth, &location)
}

/// Build a chart from already-typed inputs. Use this for non-UTC births.
pub fn chart_at(
    config: &KundliConfig,
    birth: &CivilDateTime,
    location: &GeoCoordinate,
) -> Result<Chart, KundliError> {
    let chart = config.chart_builder()?.build(birth, location)?;
    tracing::debug!(birth = %birth, jd_ut = chart.moment().jd_ut(), "chart generated");
    Ok(chart)
}

/// Ashtakoota score; `chart_a` is the groom, `chart_b` the bride.
pub fn match_charts(chart_a: &Chart, chart_b: &Chart) -> CompatibilityResult {
    kundli_match::score(chart_a, chart_b)
}

/// Julian moment of a lexical UTC date/time.
pub fn julian_moment(birth_date: &str, birth_time: &str) -> Result<JulianMoment, KundliError> {
    Ok(parse_birth(birth_date, birth_time)?.to_julian_moment()?)
}

/// House cusps alone, skipping the ephemeris.
pub fn houses(
    config: &KundliConfig,
    birth: &CivilDateTime,
    location: &GeoCoordinate,
) -> Result<Houses, KundliError> {
    let moment = birth.to_julian_moment()?;
    let transformer = config.chart_builder()?.transformer();
    Ok(compute_houses(moment, location, config.house_system, &transformer)?)
}
