use crate::object_store::interface::{ObjectStore, StoreError};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// In-memory store. Keeps insertion order of keys so tests can assert
/// that every upload used a fresh key. Clones share the same objects.
#[derive(Clone)]
pub struct ObjectStoreFake {
    objects: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    keys_in_order: Arc<Mutex<Vec<String>>>,
    fail_uploads: bool,
}

impl ObjectStoreFake {
    pub fn new() -> Self {
        Self {
            objects: Arc::new(Mutex::new(HashMap::new())),
            keys_in_order: Arc::new(Mutex::new(Vec::new())),
            fail_uploads: false,
        }
    }

    /// Every upload reports a network-shaped failure.
    #[allow(dead_code)]
    pub fn failing() -> Self {
        Self {
            fail_uploads: true,
            ..Self::new()
        }
    }

    #[allow(dead_code)]
    pub fn stored_keys(&self) -> Vec<String> {
        self.keys_in_order.lock().unwrap().clone()
    }

    #[allow(dead_code)]
    pub fn object(&self, key: &str) -> Option<Vec<u8>> {
        self.objects.lock().unwrap().get(key).cloned()
    }
}

impl ObjectStore for ObjectStoreFake {
    fn upload(&self, key: &str, bytes: &[u8]) -> Result<(), StoreError> {
        if self.fail_uploads {
            return Err(StoreError::UnexpectedStatus {
                status: 503,
                body: "fake store is down".to_string(),
            });
        }
        self.objects
            .lock()
            .unwrap()
            .insert(key.to_string(), bytes.to_vec());
        self.keys_in_order.lock().unwrap().push(key.to_string());
        Ok(())
    }

    fn download_url(&self, key: &str) -> Result<String, StoreError> {
        if !self.objects.lock().unwrap().contains_key(key) {
            return Err(StoreError::NotFound(key.to_string()));
        }
        Ok(format!("https://storage.fake.local/{}", key))
    }
}
