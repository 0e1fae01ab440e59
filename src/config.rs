//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`EFV_SECTION__KEY`)

use figment::{Figment, providers::{Format, Toml, Env}};
use serde::{Serialize, Deserialize};
use std::path::{Path, PathBuf};

use efield_core::{
    GridGenerator, SimulationState, TableSpace, DEFAULT_ANGULAR_STEP, DEFAULT_CHARGE_MAGNITUDE,
    DEFAULT_GRID_JITTER, DEFAULT_GRID_SPACING, DEFAULT_TABLE_WIDTH, MAX_CHARGES,
};
use efield_render::FieldStyle;

/// Smallest accepted grid spacing, in table units
pub const MIN_GRID_SPACING: f32 = 1e-3;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Window configuration
    #[serde(default)]
    pub window: WindowConfig,
    /// Logical table and sample grid
    #[serde(default)]
    pub table: TableConfig,
    /// Charge placement and motion
    #[serde(default)]
    pub charges: ChargeConfig,
    /// Rendering configuration
    #[serde(default)]
    pub rendering: RenderingConfig,
    /// Debug configuration
    #[serde(default)]
    pub debug: DebugConfig,
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`EFV_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    ///
    /// Out-of-range values are replaced by their defaults, see [`validate`](Self::validate).
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let mut config = Self::extract_from(config_dir)?;
        config.validate();
        Ok(config)
    }

    /// Merge the config sources without validating the values
    ///
    /// Used when the logger is not set up yet; call [`validate`](Self::validate)
    /// once it is so the fallbacks are reported.
    pub fn extract_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // EFV_WINDOW__TITLE=Test -> window.title = "Test"
        figment = figment.merge(Env::prefixed("EFV_").split("__"));

        figment.extract().map_err(ConfigError::from)
    }

    /// Replace out-of-range values with their defaults
    ///
    /// A zero magnitude would give charges with no polarity, and a tiny grid
    /// spacing would allocate an unbounded number of sample points.
    pub fn validate(&mut self) {
        let table = TableConfig::default();
        let charges = ChargeConfig::default();

        if !(self.table.width > 0.0 && self.table.width.is_finite()) {
            log::warn!("table.width = {} is not positive; using {}", self.table.width, table.width);
            self.table.width = table.width;
        }
        if !(self.table.grid_spacing >= MIN_GRID_SPACING && self.table.grid_spacing.is_finite()) {
            log::warn!(
                "table.grid_spacing = {} is below {}; using {}",
                self.table.grid_spacing,
                MIN_GRID_SPACING,
                table.grid_spacing
            );
            self.table.grid_spacing = table.grid_spacing;
        }
        if !self.table.grid_jitter.is_finite() {
            log::warn!("table.grid_jitter is not finite; using {}", table.grid_jitter);
            self.table.grid_jitter = table.grid_jitter;
        }
        if !(self.charges.magnitude > 0.0 && self.charges.magnitude.is_finite()) {
            log::warn!(
                "charges.magnitude = {} is not positive; using {:e}",
                self.charges.magnitude,
                charges.magnitude
            );
            self.charges.magnitude = charges.magnitude;
        }
        if !self.charges.angular_step.is_finite() {
            log::warn!("charges.angular_step is not finite; using {}", charges.angular_step);
            self.charges.angular_step = charges.angular_step;
        }
    }

    /// Build the initial simulation state for a canvas of the given size
    pub fn simulation_state(&self, canvas_width: u32, canvas_height: u32) -> SimulationState {
        let table = TableSpace::new(self.table.width, canvas_width, canvas_height);
        SimulationState::new(table)
            .with_charge_magnitude(self.charges.magnitude)
            .with_angular_step(self.charges.angular_step)
            .with_max_charges(self.charges.max_charges)
            .with_markers_visible(self.rendering.show_markers)
    }

    /// Grid generator using the configured spacing and jitter
    pub fn grid_generator(&self) -> GridGenerator {
        GridGenerator::new(self.table.grid_spacing, self.table.grid_jitter)
    }
}

/// Window configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Window width in pixels
    pub width: u32,
    /// Window height in pixels
    pub height: u32,
    /// Start in fullscreen mode
    pub fullscreen: bool,
    /// Enable VSync
    pub vsync: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Electric Field".to_string(),
            width: 1280,
            height: 720,
            fullscreen: false,
            vsync: true,
        }
    }
}

/// Table configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableConfig {
    /// Logical width; height follows the window aspect ratio
    pub width: f32,
    /// Distance between grid samples
    pub grid_spacing: f32,
    /// Maximum random offset applied to each sample, per axis
    pub grid_jitter: f32,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_TABLE_WIDTH,
            grid_spacing: DEFAULT_GRID_SPACING,
            grid_jitter: DEFAULT_GRID_JITTER,
        }
    }
}

/// Charge configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChargeConfig {
    /// Absolute magnitude of placed charges
    pub magnitude: f32,
    /// Orbit step in radians per frame
    pub angular_step: f32,
    /// Charge limit, never above the GPU array size
    pub max_charges: usize,
}

impl Default for ChargeConfig {
    fn default() -> Self {
        Self {
            magnitude: DEFAULT_CHARGE_MAGNITUDE,
            angular_step: DEFAULT_ANGULAR_STEP,
            max_charges: MAX_CHARGES,
        }
    }
}

/// Rendering configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderingConfig {
    /// Background color [r, g, b, a]
    pub background_color: [f32; 4],
    /// Scale applied to the superposed field
    pub coulomb_constant: f32,
    /// Longest field segment drawn, in table units
    pub max_segment_length: f32,
    /// Marker half-size, in table units
    pub marker_size: f32,
    /// Draw charge markers at startup
    pub show_markers: bool,
    /// Directory holding the shader sources
    pub shader_dir: PathBuf,
}

impl RenderingConfig {
    pub fn field_style(&self) -> FieldStyle {
        FieldStyle {
            coulomb_constant: self.coulomb_constant,
            max_segment_length: self.max_segment_length,
            marker_size: self.marker_size,
        }
    }
}

impl Default for RenderingConfig {
    fn default() -> Self {
        let style = FieldStyle::default();
        Self {
            background_color: [0.0, 0.0, 0.0, 1.0],
            coulomb_constant: style.coulomb_constant,
            max_segment_length: style.max_segment_length,
            marker_size: style.marker_size,
            show_markers: true,
            shader_dir: PathBuf::from("shaders"),
        }
    }
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DebugConfig {
    /// Log level (error, warn, info, debug, trace); `RUST_LOG` wins when set
    pub log_level: String,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.window.width, 1280);
        assert_eq!(config.table.width, 3.0);
        assert_eq!(config.table.grid_spacing, 0.05);
        assert_eq!(config.charges.max_charges, 20);
        assert_eq!(config.charges.magnitude, 4e-12);
        assert_eq!(config.debug.log_level, "info");
        assert!(config.rendering.show_markers);
    }

    #[test]
    fn test_config_serialization() {
        let config = AppConfig::default();
        let toml = toml::to_string(&config).unwrap();
        assert!(toml.contains("title"));
        assert!(toml.contains("grid_spacing"));
        assert!(toml.contains("shader_dir"));
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [charges]
            magnitude = 1e-11
            angular_step = 0.02
            max_charges = 5
            "#,
        )
        .unwrap();
        assert_eq!(config.charges.max_charges, 5);
        assert_eq!(config.window.height, 720);
        assert_eq!(config.table.width, 3.0);
    }

    #[test]
    fn test_simulation_state_from_config() {
        let mut config = AppConfig::default();
        config.charges.max_charges = 100;
        config.charges.magnitude = -2e-12;
        config.rendering.show_markers = false;

        let state = config.simulation_state(1200, 600);
        assert_eq!(state.charges().capacity(), MAX_CHARGES);
        assert_eq!(state.charge_magnitude(), 2e-12);
        assert!(!state.show_markers());
        assert_relative_eq!(state.table().height(), 1.5);
    }

    #[test]
    fn test_validate_replaces_bad_values() {
        let mut config = AppConfig::default();
        config.charges.magnitude = 0.0;
        config.table.grid_spacing = 1e-7;
        config.table.width = -3.0;
        config.charges.angular_step = f32::NAN;
        config.validate();

        assert_eq!(config.charges.magnitude, DEFAULT_CHARGE_MAGNITUDE);
        assert_eq!(config.table.grid_spacing, DEFAULT_GRID_SPACING);
        assert_eq!(config.table.width, DEFAULT_TABLE_WIDTH);
        assert_eq!(config.charges.angular_step, DEFAULT_ANGULAR_STEP);
    }

    #[test]
    fn test_validate_keeps_good_values() {
        let mut config = AppConfig::default();
        config.charges.magnitude = 1e-11;
        config.table.grid_spacing = MIN_GRID_SPACING;
        config.table.width = 5.0;
        config.charges.angular_step = -0.02;
        config.validate();

        assert_eq!(config.charges.magnitude, 1e-11);
        assert_eq!(config.table.grid_spacing, MIN_GRID_SPACING);
        assert_eq!(config.table.width, 5.0);
        assert_eq!(config.charges.angular_step, -0.02);
    }

    #[test]
    fn test_field_style_from_config() {
        let mut config = AppConfig::default();
        config.rendering.max_segment_length = 0.1;
        let style = config.rendering.field_style();
        assert_eq!(style.max_segment_length, 0.1);
        assert_eq!(style.coulomb_constant, 8.988e9);
    }
}
