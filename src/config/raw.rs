use serde::Deserialize;
use std::path::PathBuf;

const DEFAULT_CONFIG_FILE: &str = include_str!("cepmap.default.toml");

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub storage: Option<Storage>,
    pub directory: Option<Directory>,
    pub geocoder: Option<Geocoder>,
    pub device: Option<Device>,
}

impl Default for Config {
    fn default() -> Self {
        let cfg: Self = toml::from_str(DEFAULT_CONFIG_FILE).expect("Default configuration");
        cfg
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Storage {
    pub dir: PathBuf,
}

impl Default for Storage {
    fn default() -> Self {
        Config::default().storage.expect("Storage configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Directory {
    pub base_url: String,
}

impl Default for Directory {
    fn default() -> Self {
        Config::default()
            .directory
            .expect("Directory configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Geocoder {
    pub base_url: String,
    pub user_agent: String,
    pub result_limit: Option<u8>,
}

impl Default for Geocoder {
    fn default() -> Self {
        Config::default().geocoder.expect("Geocoder configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Device {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}
