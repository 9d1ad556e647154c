#![allow(dead_code)]

use async_trait::async_trait;
use livemap_application::ports::{ActiveAddressSource, LocationResolver, LocationStore};
use livemap_domain::{CacheStats, DomainError, LocationRecord, MapPoint};
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock as StdRwLock};
use tokio::sync::RwLock;
use std::time::Duration;
use tokio::time::Instant;

// ============================================================================
// Mock ActiveAddressSource
// ============================================================================

pub struct MockActiveAddressSource {
    addresses: Arc<RwLock<Vec<Arc<str>>>>,
    call_count: Arc<AtomicU64>,
    should_fail: Arc<RwLock<bool>>,
}

impl MockActiveAddressSource {
    pub fn new() -> Self {
        Self::with_addresses(vec![])
    }

    pub fn with_addresses(addresses: Vec<&str>) -> Self {
        Self {
            addresses: Arc::new(RwLock::new(
                addresses.into_iter().map(Arc::from).collect(),
            )),
            call_count: Arc::new(AtomicU64::new(0)),
            should_fail: Arc::new(RwLock::new(false)),
        }
    }

    pub async fn set_addresses(&self, addresses: Vec<&str>) {
        *self.addresses.write().await = addresses.into_iter().map(Arc::from).collect();
    }

    pub fn call_count(&self) -> u64 {
        self.call_count.load(Ordering::Relaxed)
    }

    pub async fn set_should_fail(&self, fail: bool) {
        *self.should_fail.write().await = fail;
    }
}

#[async_trait]
impl ActiveAddressSource for MockActiveAddressSource {
    async fn fetch_active_addresses(&self) -> Result<Vec<Arc<str>>, DomainError> {
        self.call_count.fetch_add(1, Ordering::Relaxed);
        if *self.should_fail.read().await {
            return Err(DomainError::DatabaseError("connection refused".to_string()));
        }
        Ok(self.addresses.read().await.clone())
    }
}

// ============================================================================
// Mock LocationResolver
// ============================================================================

pub struct MockLocationResolver {
    coordinates: Arc<RwLock<HashMap<String, (f64, f64)>>>,
    failing: Arc<RwLock<HashSet<String>>>,
    delays: Arc<RwLock<HashMap<String, Duration>>>,
    calls: Arc<RwLock<Vec<(String, Instant)>>>,
}

impl MockLocationResolver {
    pub fn new() -> Self {
        Self {
            coordinates: Arc::new(RwLock::new(HashMap::new())),
            failing: Arc::new(RwLock::new(HashSet::new())),
            delays: Arc::new(RwLock::new(HashMap::new())),
            calls: Arc::new(RwLock::new(Vec::new())),
        }
    }

    pub async fn set_coordinates(&self, address: &str, latitude: f64, longitude: f64) {
        self.coordinates
            .write()
            .await
            .insert(address.to_string(), (latitude, longitude));
    }

    pub async fn set_failing(&self, address: &str, fail: bool) {
        let mut failing = self.failing.write().await;
        if fail {
            failing.insert(address.to_string());
        } else {
            failing.remove(address);
        }
    }

    /// Make lookups of `address` take `delay` before answering.
    pub async fn set_delay(&self, address: &str, delay: Duration) {
        self.delays.write().await.insert(address.to_string(), delay);
    }

    pub async fn call_count(&self) -> usize {
        self.calls.read().await.len()
    }

    pub async fn calls_for(&self, address: &str) -> usize {
        self.calls
            .read()
            .await
            .iter()
            .filter(|(a, _)| a == address)
            .count()
    }

    pub async fn call_instants(&self) -> Vec<Instant> {
        self.calls.read().await.iter().map(|(_, at)| *at).collect()
    }
}

#[async_trait]
impl LocationResolver for MockLocationResolver {
    async fn resolve(&self, address: &str) -> Result<LocationRecord, DomainError> {
        self.calls
            .write()
            .await
            .push((address.to_string(), Instant::now()));

        let delay = self.delays.read().await.get(address).copied();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        if self.failing.read().await.contains(address) {
            return Err(DomainError::LookupFailed {
                address: address.to_string(),
                reason: "connection reset".to_string(),
            });
        }

        let (latitude, longitude) = self
            .coordinates
            .read()
            .await
            .get(address)
            .copied()
            .unwrap_or((10.0, 20.0));
        Ok(LocationRecord::new(address, latitude, longitude))
    }
}

// ============================================================================
// Mock LocationStore
// ============================================================================

pub struct MockLocationStore {
    records: StdRwLock<HashMap<Arc<str>, Arc<LocationRecord>>>,
}

impl MockLocationStore {
    pub fn new() -> Self {
        Self {
            records: StdRwLock::new(HashMap::new()),
        }
    }

    pub fn with_records(records: Vec<LocationRecord>) -> Self {
        let store = Self::new();
        for record in records {
            store.insert_if_absent(record);
        }
        store
    }
}

impl LocationStore for MockLocationStore {
    fn try_get(&self, address: &str) -> Option<Arc<LocationRecord>> {
        self.records.read().unwrap().get(address).cloned()
    }

    fn insert_if_absent(&self, record: LocationRecord) -> bool {
        let mut records = self.records.write().unwrap();
        if records.contains_key(&record.address) {
            return false;
        }
        records.insert(Arc::clone(&record.address), Arc::new(record));
        true
    }

    fn snapshot(&self) -> Vec<MapPoint> {
        self.records
            .read()
            .unwrap()
            .values()
            .map(|r| r.to_map_point())
            .collect()
    }

    fn len(&self) -> usize {
        self.records.read().unwrap().len()
    }

    fn stats(&self) -> CacheStats {
        CacheStats {
            entries: self.len(),
            ..Default::default()
        }
    }
}
