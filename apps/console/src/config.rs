use std::{collections::HashMap, fs};

use shared::domain::HostKind;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub host: HostKind,
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            host: HostKind::Desktop,
            log_filter: "info".into(),
        }
    }
}

pub fn parse_host(raw: &str) -> Option<HostKind> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "desktop" => Some(HostKind::Desktop),
        "mobile" => Some(HostKind::Mobile),
        _ => None,
    }
}

pub fn load_settings() -> Settings {
    let mut settings = Settings::default();

    if let Ok(raw) = fs::read_to_string("console.toml") {
        if let Ok(file_cfg) = toml::from_str::<HashMap<String, String>>(&raw) {
            if let Some(host) = file_cfg.get("host").and_then(|v| parse_host(v)) {
                settings.host = host;
            }
            if let Some(v) = file_cfg.get("log_filter") {
                settings.log_filter = v.clone();
            }
        }
    }

    if let Ok(v) = std::env::var("CONSOLE_HOST") {
        if let Some(host) = parse_host(&v) {
            settings.host = host;
        }
    }
    if let Ok(v) = std::env::var("APP__HOST") {
        if let Some(host) = parse_host(&v) {
            settings.host = host;
        }
    }

    if let Ok(v) = std::env::var("CONSOLE_LOG") {
        settings.log_filter = v;
    }
    if let Ok(v) = std::env::var("APP__LOG") {
        settings.log_filter = v;
    }

    settings
}
