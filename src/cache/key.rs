//! Composite cache keys for radar lookups

use crate::radar::RadarProduct;

/// Order-sensitive join of the radar lookup parameters.
///
/// The key is a readable join rather than a hash: it mirrors the upstream
/// archive's own naming and keeps cache contents greppable in debug logs.
pub fn radar_cache_key(station: &str, product: RadarProduct, elevation: f64) -> String {
    format!("{}_{}_{}", station, product.as_str(), elevation)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_shape() {
        let key = radar_cache_key("KLOT", RadarProduct::Reflectivity, 0.5);
        assert_eq!(key, "KLOT_reflectivity_0.5");
    }

    #[test]
    fn test_key_varies_per_parameter() {
        let base = radar_cache_key("KLOT", RadarProduct::Reflectivity, 0.5);

        assert_ne!(base, radar_cache_key("KMKX", RadarProduct::Reflectivity, 0.5));
        assert_ne!(base, radar_cache_key("KLOT", RadarProduct::Velocity, 0.5));
        assert_ne!(base, radar_cache_key("KLOT", RadarProduct::Reflectivity, 1.5));
    }

    #[test]
    fn test_key_is_order_sensitive() {
        // Station and product never collide even when the strings would
        // produce the same set of segments in another order
        let key1 = radar_cache_key("velocity", RadarProduct::Reflectivity, 0.5);
        let key2 = radar_cache_key("reflectivity", RadarProduct::Velocity, 0.5);
        assert_ne!(key1, key2);
    }
}
