use std::sync::Arc;

/// Status value the lookup service reports for a resolved address.
pub const STATUS_SUCCESS: &str = "success";

/// Geolocation resolved for a single client address.
///
/// Created once per address per cache lifetime and never mutated afterwards;
/// the cache hands out `Arc<LocationRecord>` so readers share the same value.
#[derive(Debug, Clone, PartialEq)]
pub struct LocationRecord {
    /// Address the record was resolved for. This is the cache key.
    pub address: Arc<str>,
    pub status: String,
    pub country: String,
    pub country_code: String,
    pub region: String,
    pub region_name: String,
    pub postal_code: String,
    pub latitude: f64,
    pub longitude: f64,
    pub isp: String,
    pub organization: String,
}

impl LocationRecord {
    /// Minimal record carrying only coordinates, the rest left empty.
    pub fn new(address: impl Into<Arc<str>>, latitude: f64, longitude: f64) -> Self {
        Self {
            address: address.into(),
            status: STATUS_SUCCESS.to_string(),
            country: String::new(),
            country_code: String::new(),
            region: String::new(),
            region_name: String::new(),
            postal_code: String::new(),
            latitude,
            longitude,
            isp: String::new(),
            organization: String::new(),
        }
    }

    pub fn to_map_point(&self) -> MapPoint {
        MapPoint {
            address: Arc::clone(&self.address),
            latitude: self.latitude,
            longitude: self.longitude,
        }
    }
}

/// Point on the live map: the projection of a `LocationRecord` served to readers.
#[derive(Debug, Clone, PartialEq)]
pub struct MapPoint {
    pub address: Arc<str>,
    pub latitude: f64,
    pub longitude: f64,
}

/// Counters describing the location cache.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CacheStats {
    pub entries: usize,
    pub insertions: u64,
    pub duplicate_inserts: u64,
    pub hits: u64,
    pub misses: u64,
}

impl CacheStats {
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total > 0 {
            (self.hits as f64 / total as f64) * 100.0
        } else {
            0.0
        }
    }
}
