#![allow(dead_code)]

use async_trait::async_trait;
use livemap_application::ports::{ActiveAddressSource, LocationResolver, LocationStore};
use livemap_domain::{CacheStats, DomainError, LocationRecord, MapPoint};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

// ============================================================================
// Mock ActiveAddressSource
// ============================================================================

pub struct MockActiveAddressSource {
    addresses: Vec<Arc<str>>,
    call_count: AtomicU64,
    should_fail: AtomicBool,
}

impl MockActiveAddressSource {
    pub fn with_addresses(addresses: Vec<&str>) -> Self {
        Self {
            addresses: addresses.into_iter().map(Arc::from).collect(),
            call_count: AtomicU64::new(0),
            should_fail: AtomicBool::new(false),
        }
    }

    pub fn failing() -> Self {
        let source = Self::with_addresses(vec![]);
        source.should_fail.store(true, Ordering::Relaxed);
        source
    }

    pub fn call_count(&self) -> u64 {
        self.call_count.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl ActiveAddressSource for MockActiveAddressSource {
    async fn fetch_active_addresses(&self) -> Result<Vec<Arc<str>>, DomainError> {
        self.call_count.fetch_add(1, Ordering::Relaxed);
        if self.should_fail.load(Ordering::Relaxed) {
            return Err(DomainError::DatabaseError("Lost connection".to_string()));
        }
        Ok(self.addresses.clone())
    }
}

// ============================================================================
// Mock LocationResolver
// ============================================================================

pub struct MockLocationResolver {
    call_count: AtomicU64,
}

impl MockLocationResolver {
    pub fn new() -> Self {
        Self {
            call_count: AtomicU64::new(0),
        }
    }

    pub fn call_count(&self) -> u64 {
        self.call_count.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl LocationResolver for MockLocationResolver {
    async fn resolve(&self, address: &str) -> Result<LocationRecord, DomainError> {
        self.call_count.fetch_add(1, Ordering::Relaxed);
        Ok(LocationRecord::new(address, 52.52, 13.40))
    }
}

// ============================================================================
// Mock LocationStore
// ============================================================================

pub struct MockLocationStore {
    records: RwLock<HashMap<Arc<str>, Arc<LocationRecord>>>,
}

impl MockLocationStore {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
        }
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
