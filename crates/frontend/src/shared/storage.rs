use web_sys::window;

fn local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Read a key from localStorage. An absent key and denied storage access
/// both come back as `None`.
pub fn get_item(key: &str) -> Option<String> {
    local_storage()?.get_item(key).ok()?
}

/// Write a key to localStorage. Quota and availability failures surface as
/// an error string for the caller to report.
pub fn set_item(key: &str, value: &str) -> Result<(), String> {
    let storage = local_storage().ok_or_else(|| "localStorage is not available".to_string())?;
    storage.set_item(key, value).map_err(|e| format!("{e:?}"))
}
