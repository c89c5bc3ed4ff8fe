use contracts::system::auth::AdminSession;

const SESSION_KEY: &str = "adminSession";

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

/// Persist the session to localStorage.
pub fn save_session(session: &AdminSession) {
    if let Some(storage) = local_storage() {
        if let Ok(json) = serde_json::to_string(session) {
            let _ = storage.set_item(SESSION_KEY, &json);
        }
    }
}

/// Load the stored session; a malformed record is dropped on sight.
pub fn load_session() -> Option<AdminSession> {
    let storage = local_storage()?;
    let json = storage.get_item(SESSION_KEY).ok()??;
    match serde_json::from_str(&json) {
        Ok(session) => Some(session),
        Err(_) => {
            let _ = storage.remove_item(SESSION_KEY);
            None
        }
    }
}

/// Clear the stored session.
pub fn clear_session() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(SESSION_KEY);
    }
}
