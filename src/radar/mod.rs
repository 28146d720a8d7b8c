//! Radar products and payload retrieval

pub mod fetch;

pub use fetch::RadarDataFetcher;

use std::fmt;

use serde::{Deserialize, Serialize};

/// NEXRAD level-III product selectable in the viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RadarProduct {
    Reflectivity,
    Velocity,
    SpectrumWidth,
    DifferentialReflectivity,
    CorrelationCoefficient,
}

impl RadarProduct {
    /// Kebab-case name used in cache keys and query parameters.
    pub fn as_str(&self) -> &'static str {
        match self {
            RadarProduct::Reflectivity => "reflectivity",
            RadarProduct::Velocity => "velocity",
            RadarProduct::SpectrumWidth => "spectrum-width",
            RadarProduct::DifferentialReflectivity => "differential-reflectivity",
            RadarProduct::CorrelationCoefficient => "correlation-coefficient",
        }
    }

    /// Short product code used by the mesonet WMS endpoint.
    ///
    /// The serving backend falls back to `n0q` for product names it does
    /// not know; the enum is closed, so that default corresponds to
    /// [`RadarProduct::Reflectivity`] here.
    pub fn wms_code(&self) -> &'static str {
        match self {
            RadarProduct::Reflectivity => "n0q",
            RadarProduct::Velocity => "n0u",
            RadarProduct::SpectrumWidth => "n0s",
            RadarProduct::DifferentialReflectivity => "n0z",
            RadarProduct::CorrelationCoefficient => "n0c",
        }
    }
}

impl fmt::Display for RadarProduct {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
