//! Round progress bar widget for roundprogress.
//!
//! - [`arc_geometry`]: pure mapping from widget state and bounds to arcs and caps
//! - [`RoundProgressBar`]: the stateful widget driving animated progress
//! - [`RoundProgressConfig`]: typed construction options, loadable from YAML or TOML

pub mod arc_geometry;
pub mod config;
pub mod error;
pub mod round_progress_bar;

pub use arc_geometry::{
    arc_rect, compute_geometry, progress_sweep, ArcRenderState, ArcSpec, BackgroundStyle,
    CapKind, CapSpec, DotStamp, ProgressStyle, RenderDescription, WidgetBounds,
};
pub use config::RoundProgressConfig;
pub use error::{ConfigError, StyleParseError};
pub use round_progress_bar::RoundProgressBar;
