//! Launch configuration: command line arguments plus environment overrides.

use std::path::PathBuf;
use std::sync::OnceLock;

use clap::Parser;
use folio_core::content::RESUME_URL;
use folio_core::{ParseThemeError, ThemeMode};
use thiserror::Error;

/// Default window size when no geometry is given.
pub const DEFAULT_WINDOW_SIZE: (f64, f64) = (1280.0, 860.0);

/// Configuration captured at launch, read by the root component.
static LAUNCH_CONFIG: OnceLock<SiteConfig> = OnceLock::new();

/// Command line arguments.
#[derive(Parser, Debug, Clone)]
#[command(name = "folio")]
#[command(about = "Personal portfolio with a light/dark animated background")]
pub struct Args {
    /// Page to open on start (e.g. /projects)
    #[arg(short, long, default_value = "/")]
    pub route: String,

    /// Initial theme: light or dark (env: FOLIO_THEME)
    #[arg(short, long)]
    pub theme: Option<String>,

    /// Location of the downloadable resume
    #[arg(long, default_value = RESUME_URL)]
    pub resume_url: String,

    /// Default log level (RUST_LOG overrides it)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Also write JSON logs to this directory
    #[arg(long)]
    pub log_dir: Option<PathBuf>,

    /// Disable the animated background
    #[arg(long)]
    pub no_animation: bool,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(transparent)]
    Theme(#[from] ParseThemeError),

    #[error("{var} must be a finite number (sizes above zero), got '{value}'")]
    Geometry { var: &'static str, value: String },
}

/// Window placement. Position is left to the OS unless both coordinates are set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowGeometry {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub width: f64,
    pub height: f64,
}

impl Default for WindowGeometry {
    fn default() -> Self {
        Self {
            x: None,
            y: None,
            width: DEFAULT_WINDOW_SIZE.0,
            height: DEFAULT_WINDOW_SIZE.1,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SiteConfig {
    pub initial_route: String,
    pub theme: ThemeMode,
    pub resume_url: String,
    pub animate: bool,
    pub window: WindowGeometry,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            initial_route: "/".to_string(),
            theme: ThemeMode::default(),
            resume_url: RESUME_URL.to_string(),
            animate: true,
            window: WindowGeometry::default(),
        }
    }
}

impl SiteConfig {
    /// Builds the config from parsed arguments and the process environment.
    pub fn from_env(args: Args) -> Result<Self, ConfigError> {
        Self::from_args(args, |var| std::env::var(var).ok())
    }

    /// Builds the config from arguments and an environment lookup.
    pub fn from_args(
        args: Args,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let theme = match args.theme.or_else(|| env("FOLIO_THEME")) {
            Some(name) => name.parse()?,
            None => ThemeMode::default(),
        };

        let x = env_f64(&env, "FOLIO_WIN_X", f64::is_finite)?;
        let y = env_f64(&env, "FOLIO_WIN_Y", f64::is_finite)?;
        let width = env_f64(&env, "FOLIO_WIN_W", is_extent)?;
        let height = env_f64(&env, "FOLIO_WIN_H", is_extent)?;

        let window = match (width, height) {
            (Some(width), Some(height)) => WindowGeometry {
                x,
                y,
                width,
                height,
            },
            _ => WindowGeometry {
                x,
                y,
                ..WindowGeometry::default()
            },
        };

        Ok(Self {
            initial_route: args.route,
            theme,
            resume_url: args.resume_url,
            animate: !args.no_animation,
            window,
        })
    }
}

/// Window sizes must be real, positive lengths.
fn is_extent(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

fn env_f64(
    env: &impl Fn(&str) -> Option<String>,
    var: &'static str,
    accept: fn(f64) -> bool,
) -> Result<Option<f64>, ConfigError> {
    let Some(value) = env(var) else {
        return Ok(None);
    };
    match value.trim().parse::<f64>() {
        Ok(number) if accept(number) => Ok(Some(number)),
        _ => Err(ConfigError::Geometry { var, value }),
    }
}

/// Stores the config for the root component. Later calls are ignored.
pub fn set_launch_config(config: SiteConfig) {
    LAUNCH_CONFIG.set(config).ok();
}

/// The config stored at launch, or defaults when none was set.
pub fn launch_config() -> SiteConfig {
    LAUNCH_CONFIG.get().cloned().unwrap_or_default()
}
