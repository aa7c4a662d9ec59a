use std::env;
use crate::models::AppSettings;

const BASE_URL_ENV: &str = "LOL_SLOT_DDRAGON_BASE_URL";
const VERSION_ENV: &str = "LOL_SLOT_DDRAGON_VERSION";

/// Where champion artwork is fetched from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetConfig {
    pub base_url: String,
    pub version: String,
}

impl AssetConfig {
    /// Settings values, overridden by environment variables when set.
    pub fn resolve(settings: &AppSettings) -> Self {
        Self {
            base_url: env::var(BASE_URL_ENV).unwrap_or_else(|_| settings.ddragon_base_url.clone()),
            version: env::var(VERSION_ENV).unwrap_or_else(|_| settings.ddragon_version.clone()),
        }
    }

    pub fn champion_image_url(&self, champion_id: &str) -> String {
        champion_image_url(&self.base_url, &self.version, champion_id)
    }

    pub fn champion_splash_url(&self, champion_id: &str, skin: u32) -> String {
        champion_splash_url(&self.base_url, champion_id, skin)
    }
}

pub fn champion_image_url(base_url: &str, version: &str, champion_id: &str) -> String {
    format!("{}/cdn/{}/img/champion/{}.png", base_url.trim_end_matches('/'), version, champion_id)
}

pub fn champion_splash_url(base_url: &str, champion_id: &str, skin: u32) -> String {
    format!("{}/cdn/img/champion/splash/{}_{}.jpg", base_url.trim_end_matches('/'), champion_id, skin)
}
