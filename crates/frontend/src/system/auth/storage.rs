use web_sys::window;

/// Read-only view of the persisted key-value state the sign-in flows write to.
///
/// The order history never writes auth records, it only looks them up.
pub trait AuthRecordSource {
    fn read(&self, key: &str) -> Option<String>;
}

/// `window.localStorage`
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

impl AuthRecordSource for LocalStorage {
    fn read(&self, key: &str) -> Option<String> {
        get_local_storage()?.get_item(key).ok()?
    }
}

#[cfg(test)]
pub(crate) mod memory {
    use super::AuthRecordSource;
    use std::collections::HashMap;

    /// In-memory stand-in for localStorage
    #[derive(Debug, Default, Clone)]
    pub struct MemoryStorage {
        items: HashMap<String, String>,
    }

    impl MemoryStorage {
        pub fn with(mut self, key: &str, value: &str) -> Self {
            self.items.insert(key.to_string(), value.to_string());
            self
        }
    }

    impl AuthRecordSource for MemoryStorage {
        fn read(&self, key: &str) -> Option<String> {
            self.items.get(key).cloned()
        }
    }
}
