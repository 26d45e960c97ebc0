use wasm_bindgen::JsValue;
use crate::core::logging;
use crate::core::models::BoardSettings;

const SETTINGS_GLOBAL: &str = "TASK_BOARD_SETTINGS";

// Read `window.TASK_BOARD_SETTINGS` if the host page defines it
pub fn load_board_settings() -> BoardSettings {
    let Some(window) = web_sys::window() else {
        return BoardSettings::default();
    };

    let raw = match js_sys::Reflect::get(&window, &JsValue::from_str(SETTINGS_GLOBAL)) {
        Ok(value) if !value.is_undefined() && !value.is_null() => value,
        _ => return BoardSettings::default(),
    };

    // either a JSON string or a plain object
    let parsed = match raw.as_string() {
        Some(text) => BoardSettings::from_json(&text),
        None => serde_wasm_bindgen::from_value::<BoardSettings>(raw).map_err(|e| e.to_string()),
    };

    match parsed {
        Ok(settings) => {
            logging::info(&format!("Loaded board settings: {:?}", settings));
            settings
        }
        Err(e) => {
            logging::error(&format!("Failed to parse {}: {}", SETTINGS_GLOBAL, e));
            BoardSettings::default()
        }
    }
}
