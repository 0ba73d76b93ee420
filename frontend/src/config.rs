use roll_shared::shared_spin_wheel::{WheelConfig, WheelSection};
use roll_shared::shared_ticker::TickerConfig;
use web_sys::window;

pub const TICKER_CONFIG_KEY: &str = "ticker_config";
pub const WHEEL_SECTIONS_KEY: &str = "wheel_sections";
pub const RESULT_SECTION_COUNT: u32 = 10;

fn stored_item(key: &str) -> Option<String> {
    window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|s| s.get_item(key).ok().flatten())
}

/// Accepts a partial JSON object; omitted fields keep their defaults.
pub fn parse_ticker_config(raw: &str) -> Result<TickerConfig, String> {
    let config: TickerConfig = serde_json::from_str(raw)
        .map_err(|e| format!("Error parsing ticker config: {}", e))?;
    config
        .validate()
        .map_err(|e| format!("Invalid ticker config: {}", e))?;
    Ok(config)
}

pub fn parse_wheel_sections(raw: &str) -> Result<Vec<WheelSection>, String> {
    let sections: Vec<WheelSection> = serde_json::from_str(raw)
        .map_err(|e| format!("Error parsing wheel sections: {}", e))?;
    let config = WheelConfig { sections, initial_rotation: 0.0 };
    config
        .validate()
        .map_err(|e| format!("Invalid wheel sections: {}", e))?;
    Ok(config.sections)
}

pub fn load_ticker_config() -> TickerConfig {
    match stored_item(TICKER_CONFIG_KEY).map(|raw| parse_ticker_config(&raw)) {
        Some(Ok(config)) => {
            log::info!("Using ticker config override with {} lanes", config.lanes.len());
            config
        }
        Some(Err(e)) => {
            log::warn!("{}; falling back to defaults", e);
            TickerConfig::default()
        }
        None => TickerConfig::default(),
    }
}

pub fn load_wheel_sections() -> Vec<WheelSection> {
    match stored_item(WHEEL_SECTIONS_KEY).map(|raw| parse_wheel_sections(&raw)) {
        Some(Ok(sections)) => {
            log::info!("Using {} wheel sections from storage", sections.len());
            sections
        }
        Some(Err(e)) => {
            log::warn!("{}; falling back to defaults", e);
            WheelConfig::numbered(RESULT_SECTION_COUNT).sections
        }
        None => WheelConfig::numbered(RESULT_SECTION_COUNT).sections,
    }
}
