//! Civil date-time handling for chart construction.
//!
//! This crate provides:
//! - `CivilDateTime` validation (proleptic Gregorian, fixed UTC offset)
//! - Calendar ↔ Julian Day conversion
//! - `JulianMoment`, the UT time scalar, with ΔT to reach TT
//! - Greenwich / local sidereal time

pub mod civil;
pub mod delta_t;
pub mod error;
pub mod julian;
pub mod moment;
pub mod sidereal;

pub use civil::{CivilDateTime, to_julian_moment};
pub use delta_t::delta_t_seconds;
pub use error::TimeError;
pub use julian::{
    DAYS_PER_CENTURY, J2000_JD, SECONDS_PER_DAY, calendar_to_jd, days_in_month, is_leap_year,
    jd_to_calendar, jd_to_centuries, julian_day_number,
};
pub use moment::JulianMoment;
pub use sidereal::{equation_of_equinoxes_deg, gast_deg, gmst_deg, local_sidereal_time_deg};
