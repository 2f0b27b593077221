//! Viewer configuration from environment variables.
//!
//! | Variable | Default |
//! |----------|---------|
//! | `RASTER_WIDTH` / `RASTER_HEIGHT` | 64 / 36 |
//! | `RASTER_ANIMATE` | off |
//! | `RASTER_FRAME_MS` | 33 |
//! | `RASTER_STEP_DEG` | 3.0 |
//! | `RASTER_PROBE` | unset (`x,y`) |
//! | `RASTER_BRUSH` | `solid` (or `vertex`) |
//! | `RASTER_LOG` | `warn` |
//! | `RASTER_LOG_PATH` | unset |
//!
//! Unlike lenient defaults, a value that is present but malformed is an error:
//! the viewer refuses to start rather than silently draw something else.

use std::str::FromStr;

use crate::core::Brush;
use crate::types::{
    ConfigError, Point2D, SurfaceConfig, DEFAULT_HEIGHT, DEFAULT_WIDTH, FRAME_MS, STEP_DEGREES,
    VERTEX_SYMBOLS,
};

#[derive(Debug, Clone, PartialEq)]
pub struct ViewerConfig {
    pub surface: SurfaceConfig,
    pub animate: bool,
    pub frame_ms: u64,
    pub step_degrees: f32,
    pub probe: Option<Point2D>,
    pub brush: Brush,
    pub log_filter: String,
    pub log_path: Option<String>,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            surface: SurfaceConfig::default(),
            animate: false,
            frame_ms: FRAME_MS,
            step_degrees: STEP_DEGREES,
            probe: None,
            brush: Brush::default(),
            log_filter: "warn".to_string(),
            log_path: None,
        }
    }
}

impl ViewerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let width = parse_or(&get, "RASTER_WIDTH", DEFAULT_WIDTH)?;
        let height = parse_or(&get, "RASTER_HEIGHT", DEFAULT_HEIGHT)?;
        let surface = SurfaceConfig::new(width, height)?;

        let animate = match get("RASTER_ANIMATE") {
            Some(v) => parse_flag("RASTER_ANIMATE", &v)?,
            None => false,
        };

        let frame_ms: u64 = parse_or(&get, "RASTER_FRAME_MS", FRAME_MS)?;
        if frame_ms == 0 {
            return Err(invalid("RASTER_FRAME_MS", "0"));
        }

        let step_degrees: f32 = parse_or(&get, "RASTER_STEP_DEG", STEP_DEGREES)?;
        if !step_degrees.is_finite() {
            return Err(invalid("RASTER_STEP_DEG", &step_degrees.to_string()));
        }

        let probe = get("RASTER_PROBE")
            .map(|v| parse_point("RASTER_PROBE", &v))
            .transpose()?;

        let brush = match get("RASTER_BRUSH").as_deref() {
            None | Some("solid") => Brush::default(),
            Some("vertex") => Brush::NearestVertex(VERTEX_SYMBOLS),
            Some(other) => return Err(invalid("RASTER_BRUSH", other)),
        };

        Ok(Self {
            surface,
            animate,
            frame_ms,
            step_degrees,
            probe,
            brush,
            log_filter: get("RASTER_LOG").unwrap_or_else(|| "warn".to_string()),
            log_path: get("RASTER_LOG_PATH"),
        })
    }
}

fn invalid(key: &str, value: &str) -> ConfigError {
    ConfigError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
    }
}

fn parse_or<T: FromStr>(
    get: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: T,
) -> Result<T, ConfigError> {
    match get(key) {
        Some(v) => v.parse().map_err(|_| invalid(key, &v)),
        None => Ok(default),
    }
}

fn parse_flag(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(invalid(key, value)),
    }
}

fn parse_point(key: &str, value: &str) -> Result<Point2D, ConfigError> {
    let (x, y) = value.split_once(',').ok_or_else(|| invalid(key, value))?;
    let x = x.trim().parse().map_err(|_| invalid(key, value))?;
    let y = y.trim().parse().map_err(|_| invalid(key, value))?;
    Ok(Point2D::new(x, y))
}
