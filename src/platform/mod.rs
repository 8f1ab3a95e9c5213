//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Key/value storage (LocalStorage on web, process memory on native)
//! - Run seeds

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

/// Read a stored string
#[cfg(target_arch = "wasm32")]
pub fn storage_get(key: &str) -> Option<String> {
    local_storage()?.get_item(key).ok()?
}

/// Write a string; failures are logged, never fatal
#[cfg(target_arch = "wasm32")]
pub fn storage_set(key: &str, value: &str) {
    if let Some(storage) = local_storage() {
        if storage.set_item(key, value).is_err() {
            log::warn!("LocalStorage write failed for {}", key);
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
thread_local! {
    static MEMORY_STORAGE: std::cell::RefCell<std::collections::HashMap<String, String>> =
        std::cell::RefCell::new(std::collections::HashMap::new());
}

#[cfg(not(target_arch = "wasm32"))]
pub fn storage_get(key: &str) -> Option<String> {
    MEMORY_STORAGE.with(|m| m.borrow().get(key).cloned())
}

#[cfg(not(target_arch = "wasm32"))]
pub fn storage_set(key: &str, value: &str) {
    MEMORY_STORAGE.with(|m| {
        m.borrow_mut().insert(key.to_string(), value.to_string());
    });
}

/// Seed for a new run
#[cfg(target_arch = "wasm32")]
pub fn random_seed() -> u64 {
    js_sys::Date::now() as u64
}

#[cfg(not(target_arch = "wasm32"))]
pub fn random_seed() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
