use livemap_domain::MapPoint;
use serde::Serialize;
use std::sync::Arc;

#[derive(Serialize, Debug, Clone)]
pub struct MapPointResponse {
    pub address: Arc<str>,
    pub latitude: f64,
    pub longitude: f64,
}

impl From<MapPoint> for MapPointResponse {
    fn from(point: MapPoint) -> Self {
        Self {
            address: point.address,
            latitude: point.latitude,
            longitude: point.longitude,
        }
    }
}
