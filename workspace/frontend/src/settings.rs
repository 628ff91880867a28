use log::Level;
use wasm_bindgen::JsValue;
use web_sys::window;

/// Global application settings
#[derive(Debug, Clone)]
pub struct AppSettings {
    /// Prediction API host (e.g., "viralcast-prediction-gp1.onrender.com")
    pub api_host: String,

    /// Prediction API port
    pub api_port: u16,

    /// API path prefix (e.g., "/api")
    pub api_path: String,

    /// Use HTTPS for API requests
    pub api_use_https: bool,

    /// Base URL of the external location lookup service
    pub lookup_base_url: String,

    /// Default log level for the application
    pub log_level: Level,

    /// Debounce delay for location validation in milliseconds
    pub validation_debounce_ms: u32,

    /// Minimum query length before a location lookup is attempted
    pub min_location_query_len: usize,

    /// Dashboard auto-refresh interval in milliseconds
    pub refresh_interval_ms: u32,

    /// Toast notification duration in milliseconds
    pub toast_duration_ms: u32,

    /// Enable debug mode
    pub debug_mode: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            api_host: "viralcast-prediction-gp1.onrender.com".to_string(),
            api_port: 443,
            api_path: "/api".to_string(),
            api_use_https: true,
            lookup_base_url: "https://restcountries.com/v3.1".to_string(),
            log_level: Level::Info,
            validation_debounce_ms: 500,
            min_location_query_len: 3,
            refresh_interval_ms: 5 * 60 * 1000,
            toast_duration_ms: 5000,
            debug_mode: false,
        }
    }
}

impl AppSettings {
    /// Create settings from environment/window location
    pub fn from_environment() -> Self {
        let mut settings = Self::default();

        if let Some(window) = window() {
            if let Ok(hostname) = window.location().hostname() {
                settings.debug_mode = hostname == "localhost" || hostname == "127.0.0.1";

                // In development, use more verbose logging
                if settings.debug_mode {
                    settings.log_level = Level::Debug;
                }

                // Try to read from localStorage for custom settings
                if let Ok(Some(storage)) = window.local_storage() {
                    if let Ok(Some(api_host)) = storage.get_item("viralcast_api_host") {
                        settings.api_host = api_host;
                    }

                    if let Ok(Some(api_port)) = storage.get_item("viralcast_api_port") {
                        if let Ok(port_val) = api_port.parse::<u16>() {
                            settings.api_port = port_val;
                        }
                    }

                    if let Ok(Some(api_path)) = storage.get_item("viralcast_api_path") {
                        settings.api_path = api_path;
                    }

                    if let Ok(Some(use_https)) = storage.get_item("viralcast_api_use_https") {
                        settings.api_use_https = use_https.to_lowercase() == "true";
                    }

                    if let Ok(Some(lookup_base)) = storage.get_item("viralcast_lookup_base_url") {
                        settings.lookup_base_url = lookup_base;
                    }

                    if let Ok(Some(log_level)) = storage.get_item("viralcast_log_level") {
                        settings.log_level = match log_level.to_lowercase().as_str() {
                            "error" => Level::Error,
                            "warn" => Level::Warn,
                            "info" => Level::Info,
                            "debug" => Level::Debug,
                            "trace" => Level::Trace,
                            _ => settings.log_level,
                        };
                    }

                    if let Ok(Some(debounce)) = storage.get_item("viralcast_validation_debounce_ms")
                    {
                        if let Ok(debounce_val) = debounce.parse::<u32>() {
                            settings.validation_debounce_ms = debounce_val;
                        }
                    }

                    if let Ok(Some(interval)) = storage.get_item("viralcast_refresh_interval_ms") {
                        if let Ok(interval_val) = interval.parse::<u32>() {
                            settings.refresh_interval_ms = interval_val;
                        }
                    }
                }
            }
        }

        settings
    }

    /// Save settings to localStorage
    pub fn save_to_storage(&self) -> Result<(), JsValue> {
        if let Some(window) = window() {
            if let Some(storage) = window.local_storage()? {
                storage.set_item("viralcast_api_host", &self.api_host)?;
                storage.set_item("viralcast_api_port", &self.api_port.to_string())?;
                storage.set_item("viralcast_api_path", &self.api_path)?;
                storage.set_item("viralcast_api_use_https", &self.api_use_https.to_string())?;
                storage.set_item("viralcast_lookup_base_url", &self.lookup_base_url)?;
                storage.set_item(
                    "viralcast_log_level",
                    &format!("{:?}", self.log_level).to_lowercase(),
                )?;
                storage.set_item(
                    "viralcast_validation_debounce_ms",
                    &self.validation_debounce_ms.to_string(),
                )?;
                storage.set_item(
                    "viralcast_refresh_interval_ms",
                    &self.refresh_interval_ms.to_string(),
                )?;
            }
        }
        Ok(())
    }

    /// Get the base API URL (protocol + host + port + path).
    /// Default ports are omitted so the production URL matches the deployed host.
    pub fn api_base_url(&self) -> String {
        let protocol = if self.api_use_https { "https" } else { "http" };
        let default_port = if self.api_use_https { 443 } else { 80 };
        if self.api_port == default_port {
            format!("{}://{}{}", protocol, self.api_host, self.api_path)
        } else {
            format!(
                "{}://{}:{}{}",
                protocol, self.api_host, self.api_port, self.api_path
            )
        }
    }

    /// Get the full API URL for an endpoint
    pub fn api_url(&self, endpoint: &str) -> String {
        format!("{}{}", self.api_base_url(), endpoint)
    }
}

// Global settings instance using thread_local
use std::cell::RefCell;

thread_local! {
    static SETTINGS: RefCell<AppSettings> = RefCell::new(AppSettings::from_environment());
}

/// Get a copy of the current settings
pub fn get_settings() -> AppSettings {
    SETTINGS.with(|s| s.borrow().clone())
}

/// Update the global settings
pub fn update_settings<F>(f: F)
where
    F: FnOnce(&mut AppSettings),
{
    SETTINGS.with(|s| {
        let mut settings = s.borrow_mut();
        f(&mut settings);
    });
}

/// Initialize settings (call this at app startup)
pub fn init_settings() {
    SETTINGS.with(|s| {
        *s.borrow_mut() = AppSettings::from_environment();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_base_url_omits_default_port() {
        let settings = AppSettings::default();
        assert_eq!(
            settings.api_base_url(),
            "https://viralcast-prediction-gp1.onrender.com/api"
        );
    }

    #[test]
    fn api_base_url_keeps_custom_port() {
        let settings = AppSettings {
            api_host: "localhost".to_string(),
            api_port: 5000,
            api_use_https: false,
            ..AppSettings::default()
        };
        assert_eq!(settings.api_base_url(), "http://localhost:5000/api");
        assert_eq!(
            settings.api_url("/predict"),
            "http://localhost:5000/api/predict"
        );
    }
}
