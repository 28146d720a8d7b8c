//! Historical frame sequencing for radar playback
//!
//! A sequence covers a fixed window ending at "now", one frame per
//! five-minute slot, built oldest-first by awaiting each archive fetch in
//! strict order. Slots that fail or come back empty are holes: they are
//! logged and omitted, never fatal, and the resulting (possibly shorter)
//! length is what playback operates over.

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use serde_json::Value;

use crate::client::RadarArchive;
use crate::radar::RadarProduct;

/// Spacing between archived radar frames.
pub const FRAME_INTERVAL_SECS: i64 = 5 * 60;

/// 12 hours of history at 5-minute spacing.
pub const DEFAULT_FRAME_COUNT: usize = 144;

/// WMS endpoint serving archived radar tiles.
const WMS_BASE_URL: &str = "https://mesonet.agron.iastate.edu/cgi-bin/wms/nexrad/";

/// One timestamped radar snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RadarFrame {
    pub timestamp: DateTime<Utc>,
    /// Opaque archive payload. Slots without one never become frames;
    /// the builder omits them from the sequence entirely
    pub payload: Value,
    /// Tile URL for the rendering layer
    pub source_url: String,
}

/// Ordered, immutable run of radar frames.
///
/// Rebuilt wholesale when any request parameter changes, never patched
/// incrementally.
#[derive(Debug, Clone, Default)]
pub struct FrameSequence {
    frames: Vec<RadarFrame>,
}

impl FrameSequence {
    pub fn new(frames: Vec<RadarFrame>) -> Self {
        Self { frames }
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&RadarFrame> {
        self.frames.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RadarFrame> {
        self.frames.iter()
    }

    pub fn frames(&self) -> &[RadarFrame] {
        &self.frames
    }
}

/// Parameters for one sequence build.
///
/// Selection state is passed explicitly per call; the builder reads no
/// ambient configuration.
#[derive(Debug, Clone)]
pub struct FrameRequest {
    pub station: String,
    pub product: RadarProduct,
    pub elevation: f64,
    pub frame_count: usize,
}

impl FrameRequest {
    pub fn new(station: impl Into<String>, product: RadarProduct, elevation: f64) -> Self {
        Self {
            station: station.into(),
            product,
            elevation,
            frame_count: DEFAULT_FRAME_COUNT,
        }
    }

    pub fn with_frame_count(mut self, frame_count: usize) -> Self {
        self.frame_count = frame_count;
        self
    }
}

/// WMS tile URL for one archived time slot.
///
/// The timestamp is compacted to `YYYYMMDDTHHMMSS`; the serving backend
/// expects this exact shape.
pub fn frame_url(station: &str, product: RadarProduct, timestamp: DateTime<Utc>) -> String {
    format!(
        "{}{}.py?ts={}&station={}",
        WMS_BASE_URL,
        product.wms_code(),
        timestamp.format("%Y%m%dT%H%M%S"),
        station
    )
}

/// Build an ordered frame sequence ending at now.
pub async fn build_sequence<C: RadarArchive>(client: &C, request: &FrameRequest) -> FrameSequence {
    build_sequence_from(client, request, Utc::now()).await
}

/// Build a sequence whose newest slot is `now`.
///
/// Offsets run oldest to newest and each fetch is awaited before the next
/// is issued, so chronological order holds by construction regardless of
/// upstream latency. A failed slot is logged and omitted rather than
/// aborting the build.
pub async fn build_sequence_from<C: RadarArchive>(
    client: &C,
    request: &FrameRequest,
    now: DateTime<Utc>,
) -> FrameSequence {
    let mut frames = Vec::with_capacity(request.frame_count);

    for offset in (0..request.frame_count).rev() {
        let timestamp = now - Duration::seconds(offset as i64 * FRAME_INTERVAL_SECS);

        match client
            .fetch_frame(&request.station, request.product, request.elevation, timestamp)
            .await
        {
            Ok(Some(payload)) => frames.push(RadarFrame {
                timestamp,
                payload,
                source_url: frame_url(&request.station, request.product, timestamp),
            }),
            Ok(None) => {
                log::debug!(
                    "No archive data for {} {} at {}",
                    request.station,
                    request.product,
                    timestamp
                );
            }
            Err(err) => {
                log::warn!("Failed to fetch frame at {}: {}", timestamp, err);
            }
        }
    }

    FrameSequence::new(frames)
}
