//! Data backend for a NEXRAD radar viewer
//!
//! Feeds a map dashboard with classified NWS alerts and time-indexed radar
//! imagery: TTL-cached fetchers over the NWS and mesonet APIs, a frame
//! sequence builder tolerant of per-slot losses, and a playback driver
//! with two scheduling policies.
//!
//! Nothing here renders. The display layer receives `(frame, index,
//! total)` per playback step plus classified, visibility-filtered alert
//! lists, and calls back into [`playback::PlaybackDriver`] on user
//! actions. Remote degradation is absorbed at the fetcher boundaries:
//! callers see stale or incomplete data, never an error.

pub mod alerts;
pub mod cache;
pub mod client;
pub mod config;
pub mod error;
pub mod frames;
pub mod playback;
pub mod radar;

pub use error::{Error, Result};
