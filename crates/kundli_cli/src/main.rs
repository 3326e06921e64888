mod logger;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use kundli_rs::{
    AyanamshaSystem, Chart, CivilDateTime, GeoCoordinate, HouseSystemKind, KundliConfig,
    KundliError, NodeMode, Zodiac, chart_at, config, houses, init, match_charts, parse_birth,
};
use serde::Serialize;
use thiserror::Error;

#[derive(Parser)]
#[command(name = "kundli", about = "Vedic birth charts and Ashtakoota matching")]
struct Cli {
    /// TOML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Enable debug logging (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,
    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    log_json: bool,
    #[command(flatten)]
    overrides: Overrides,
    #[command(subcommand)]
    command: Commands,
}

/// Settings that take precedence over the config file.
#[derive(clap::Args, Debug, Default)]
struct Overrides {
    /// House system: placidus, koch, porphyry, equal, regiomontanus, campanus
    #[arg(long, global = true)]
    house_system: Option<HouseSystemKind>,
    /// Ayanamsha: lahiri, krishnamurti, raman, fagan_bradley, ...
    #[arg(long, global = true)]
    ayanamsha: Option<AyanamshaSystem>,
    /// Use the tropical zodiac
    #[arg(long, global = true)]
    tropical: bool,
    /// Use true rather than mean lunar nodes
    #[arg(long, global = true)]
    true_nodes: bool,
    /// Disable nutation in longitude
    #[arg(long, global = true)]
    no_nutation: bool,
}

impl Overrides {
    fn apply(&self, mut cfg: KundliConfig) -> KundliConfig {
        if let Some(h) = self.house_system {
            cfg.house_system = h;
        }
        if let Some(a) = self.ayanamsha {
            cfg.ayanamsha = a;
        }
        if self.tropical {
            cfg.frame_mode = Zodiac::Tropical;
        }
        if self.true_nodes {
            cfg.node_mode = NodeMode::True;
        }
        if self.no_nutation {
            cfg.nutation = false;
        }
        cfg
    }
}

#[derive(clap::Args, Debug)]
struct Birth {
    /// Birth date (YYYY-MM-DD)
    #[arg(long)]
    date: String,
    /// Birth time (HH:MM:SS)
    #[arg(long)]
    time: String,
    /// Offset of the given clock time from UTC, in minutes (IST = 330)
    #[arg(long, default_value = "0", allow_hyphen_values = true)]
    utc_offset: i32,
}

impl Birth {
    fn civil(&self) -> Result<CivilDateTime, KundliError> {
        Ok(parse_birth(&self.date, &self.time)?.with_utc_offset_minutes(self.utc_offset))
    }
}

#[derive(clap::Args, Debug)]
struct Place {
    /// Geographic latitude in degrees, north positive
    #[arg(long, allow_hyphen_values = true)]
    lat: f64,
    /// Geographic longitude in degrees, east positive
    #[arg(long, allow_hyphen_values = true)]
    lon: f64,
}

impl Place {
    fn location(&self) -> Result<GeoCoordinate, KundliError> {
        Ok(GeoCoordinate::new(self.lat, self.lon)?)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Build a birth chart and print it as JSON
    Chart {
        #[command(flatten)]
        birth: Birth,
        #[command(flatten)]
        place: Place,
    },
    /// Score two charts previously written by `kundli chart`
    Match {
        /// Chart JSON of the groom
        #[arg(long)]
        groom: PathBuf,
        /// Chart JSON of the bride
        #[arg(long)]
        bride: PathBuf,
    },
    /// Julian Day of a civil date-time
    Julian {
        #[command(flatten)]
        birth: Birth,
    },
    /// Ascendant, MC and house cusps only
    Houses {
        #[command(flatten)]
        birth: Birth,
        #[command(flatten)]
        place: Place,
    },
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Kundli(#[from] KundliError),
    #[error("cannot read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{path} is not a chart: {source}")]
    ChartJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("cannot encode output: {0}")]
    Output(#[from] serde_json::Error),
}

impl CliError {
    fn kind(&self) -> &'static str {
        match self {
            Self::Kundli(e) => e.kind().as_str(),
            Self::Read { .. } | Self::ChartJson { .. } => "input",
            Self::Output(_) => "output",
        }
    }
}

#[derive(Serialize)]
struct JulianOutput {
    jd_ut: f64,
    jd_tt: f64,
    delta_t_seconds: f64,
    centuries_tt: f64,
}

fn load_config(path: Option<&Path>, overrides: &Overrides) -> Result<KundliConfig, KundliError> {
    let base = match path {
        Some(p) => KundliConfig::load(p)?,
        None => KundliConfig::default(),
    };
    Ok(overrides.apply(base))
}

fn read_chart(path: &Path) -> Result<Chart, CliError> {
    let text = std::fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| CliError::ChartJson {
        path: path.to_path_buf(),
        source,
    })
}

fn print_json<T: Serialize>(value: &T) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn run(cli: Cli) -> Result<(), CliError> {
    init(load_config(cli.config.as_deref(), &cli.overrides)?)?;
    let cfg = config();
    tracing::debug!(config = ?cfg, "configuration active");

    match cli.command {
        Commands::Chart { birth, place } => {
            let chart = chart_at(&cfg, &birth.civil()?, &place.location()?)?;
            print_json(&chart)
        }
        Commands::Match { groom, bride } => {
            let a = read_chart(&groom)?;
            let b = read_chart(&bride)?;
            print_json(&match_charts(&a, &b))
        }
        Commands::Julian { birth } => {
            let m = birth.civil()?.to_julian_moment().map_err(KundliError::from)?;
            print_json(&JulianOutput {
                jd_ut: m.jd_ut(),
                jd_tt: m.jd_tt(),
                delta_t_seconds: m.delta_t_seconds(),
                centuries_tt: m.centuries_tt(),
            })
        }
        Commands::Houses { birth, place } => {
            let h = houses(&cfg, &birth.civil()?, &place.location()?)?;
            print_json(&h)
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logger::init_logger(cli.verbose, cli.log_json);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::warn!(kind = e.kind(), "command failed");
            eprintln!("error [{}]: {e}", e.kind());
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_chart_with_overrides() {
        let cli = Cli::try_parse_from([
            "kundli",
            "chart",
            "--date",
            "1990-01-01",
            "--time",
            "12:00:00",
            "--utc-offset",
            "330",
            "--lat",
            "-33.87",
            "--lon",
            "151.21",
            "--house-system",
            "koch",
            "--tropical",
        ])
        .unwrap();
        let cfg = cli.overrides.apply(KundliConfig::default());
        assert_eq!(cfg.house_system, HouseSystemKind::Koch);
        assert_eq!(cfg.frame_mode, Zodiac::Tropical);
        match cli.command {
            Commands::Chart { birth, place } => {
                assert_eq!(birth.utc_offset, 330);
                assert_eq!(place.lat, -33.87);
            }
            _ => panic!("expected chart"),
        }
    }

    #[test]
    fn unknown_house_system_rejected() {
        let r = Cli::try_parse_from([
            "kundli",
            "houses",
            "--date",
            "2000-01-01",
            "--time",
            "00:00:00",
            "--lat",
            "0",
            "--lon",
            "0",
            "--house-system",
            "topocentric",
        ]);
        assert!(r.is_err());
    }

    #[test]
    fn no_overrides_keep_config() {
        let base = KundliConfig {
            house_system: HouseSystemKind::Campanus,
            ..KundliConfig::default()
        };
        assert_eq!(Overrides::default().apply(base), base);
    }

    #[test]
    fn birth_applies_offset() {
        let b = Birth {
            date: "1990-01-01".into(),
            time: "17:30:00".into(),
            utc_offset: 330,
        };
        let ist = b.civil().unwrap().to_julian_moment().unwrap();
        let utc = parse_birth("1990-01-01", "12:00:00")
            .unwrap()
            .to_julian_moment()
            .unwrap();
        assert!((ist.jd_ut() - utc.jd_ut()).abs() < 1e-9);
    }
}
