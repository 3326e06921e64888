//! Birth chart construction.
//!
//! [`ChartBuilder`] runs the pipeline from a civil birth time and location
//! to an immutable [`Chart`]: ten body positions, houses and lunar nodes,
//! all in one zodiac frame. Failures carry a [`ChartStage`] and an
//! [`ErrorKind`].

pub mod builder;
pub mod chart;
pub mod error;

pub use builder::{ChartBuilder, build};
pub use chart::{BodyPositions, Chart};
pub use error::{ChartCause, ChartError, ChartStage, ErrorKind};
