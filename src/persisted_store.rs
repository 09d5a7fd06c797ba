use wasm_bindgen::JsValue;

use postgrid_core::{KeyValueStore, StoreError};

/// `window.localStorage` as a [`KeyValueStore`].
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct LocalStorage;

impl LocalStorage {
    #[cfg(target_arch = "wasm32")]
    fn storage() -> Result<web_sys::Storage, StoreError> {
        let window =
            web_sys::window().ok_or_else(|| StoreError::Unavailable("missing window".to_string()))?;
        window
            .local_storage()
            .map_err(|err| StoreError::Unavailable(js_err(err)))?
            .ok_or_else(|| StoreError::Unavailable("localStorage disabled".to_string()))
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn storage() -> Result<web_sys::Storage, StoreError> {
        Err(StoreError::Unavailable(
            "localStorage requires a browser".to_string(),
        ))
    }
}

impl KeyValueStore for LocalStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        let storage = Self::storage()?;
        storage
            .get_item(key)
            .map_err(|err| StoreError::Backend(js_err(err)))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let storage = Self::storage()?;
        storage
            .set_item(key, value)
            .map_err(|err| StoreError::Backend(js_err(err)))
    }

    fn remove_item(&self, key: &str) -> Result<(), StoreError> {
        let storage = Self::storage()?;
        storage
            .remove_item(key)
            .map_err(|err| StoreError::Backend(js_err(err)))
    }
}

pub(crate) fn js_err(error: JsValue) -> String {
    if let Some(value) = error.as_string() {
        return value;
    }
    if let Ok(json) = js_sys::JSON::stringify(&error) {
        if let Some(value) = json.as_string() {
            return value;
        }
    }
    "js error".to_string()
}
