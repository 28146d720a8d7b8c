//! Viewer configuration
//!
//! The display layer's selection state - station, product, elevation,
//! visible alert categories, playback tuning - expressed as explicit
//! configuration handed to each build/filter call rather than read as
//! ambient globals. The subsystem itself persists nothing; the embedding
//! application decides whether a config file exists and where.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::alerts::AlertCategory;
use crate::error::{ConfigError, Result};
use crate::frames::DEFAULT_FRAME_COUNT;
use crate::playback::PlaybackConfig;
use crate::radar::RadarProduct;

/// Top-level viewer configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewerConfig {
    /// NEXRAD station identifier, e.g. "KLOT"
    pub station: String,

    #[serde(default = "default_product")]
    pub product: RadarProduct,

    /// Elevation angle in degrees
    #[serde(default = "default_elevation")]
    pub elevation: f64,

    /// Frames per playback sequence
    #[serde(default = "default_frame_count")]
    pub frame_count: usize,

    #[serde(default)]
    pub playback: PlaybackConfig,

    #[serde(default)]
    pub visible_alerts: VisibilityFilter,
}

fn default_product() -> RadarProduct {
    RadarProduct::Reflectivity
}

fn default_elevation() -> f64 {
    0.5
}

fn default_frame_count() -> usize {
    DEFAULT_FRAME_COUNT
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            station: "KLOT".to_string(),
            product: default_product(),
            elevation: default_elevation(),
            frame_count: default_frame_count(),
            playback: PlaybackConfig::default(),
            visible_alerts: VisibilityFilter::default(),
        }
    }
}

impl ViewerConfig {
    /// Load configuration from a YAML file.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ConfigError::NotFound.into());
        }

        let contents = std::fs::read_to_string(path)?;
        let config: ViewerConfig = serde_yaml::from_str(&contents).map_err(ConfigError::from)?;

        Ok(config)
    }

    /// Save configuration to a YAML file.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = serde_yaml::to_string(self)
            .map_err(|e| ConfigError::SaveError(e.to_string()))?;
        std::fs::write(path, contents)?;

        Ok(())
    }
}

/// Category -> visibility map handed to the display layer.
///
/// A category missing from the map is hidden. The default enables the
/// five storm categories; `Other` is deliberately absent and therefore
/// never shown unless explicitly enabled.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VisibilityFilter(HashMap<AlertCategory, bool>);

impl VisibilityFilter {
    pub fn is_visible(&self, category: AlertCategory) -> bool {
        self.0.get(&category).copied().unwrap_or(false)
    }

    pub fn set(&mut self, category: AlertCategory, visible: bool) {
        self.0.insert(category, visible);
    }
}

impl Default for VisibilityFilter {
    fn default() -> Self {
        let mut map = HashMap::new();
        for category in [
            AlertCategory::TornadoWarning,
            AlertCategory::TornadoWatch,
            AlertCategory::SevereThunderstormWarning,
            AlertCategory::SevereThunderstormWatch,
            AlertCategory::FlashFloodWarning,
        ] {
            map.insert(category, true);
        }
        Self(map)
    }
}
