use anyhow::{anyhow, Result};
use cepmap_entities::geo::MapPoint;
use std::{
    env, fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "cepmap.toml";

const ENV_NAME_STORAGE_DIR: &str = "CEPMAP_STORAGE_DIR";

pub struct Config {
    pub storage: Storage,
    pub directory: Directory,
    pub geocoder: Geocoder,
    pub device: Device,
}

pub struct Storage {
    /// File system directory holding the JSON record store.
    pub dir: PathBuf,
}

pub struct Directory {
    pub base_url: String,
}

pub struct Geocoder {
    pub base_url: String,
    /// Courtesy identification sent with every geocoder request.
    pub user_agent: String,
    pub result_limit: u8,
}

pub struct Device {
    /// Stand-in for the device's GPS fix; `None` models a host without
    /// location access.
    pub position: Option<MapPoint>,
}

impl Config {
    pub fn try_load_from_file_or_default(file_path: Option<&Path>) -> Result<Self> {
        let file_path = file_path.unwrap_or_else(|| {
            log::info!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
            Path::new(DEFAULT_CONFIG_FILE_NAME)
        });

        let raw_config = match fs::read_to_string(file_path) {
            Ok(cfg_string) => toml::from_str(&cfg_string)?,
            Err(err) => match err.kind() {
                ErrorKind::NotFound => {
                    log::info!(
                        "{} not found => load default configuration.",
                        file_path.display()
                    );
                    Ok(raw::Config::default())
                }
                _ => Err(err),
            }?,
        };
        let mut cfg = Self::try_from(raw_config)?;
        if let Ok(dir) = env::var(ENV_NAME_STORAGE_DIR) {
            cfg.storage.dir = dir.into();
        }
        Ok(cfg)
    }
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config {
            storage,
            directory,
            geocoder,
            device,
        } = from;
        let storage = storage.unwrap_or_default();
        let directory = directory.unwrap_or_default();
        let geocoder = geocoder.unwrap_or_default();
        let position = device
            .map(|device| match (device.latitude, device.longitude) {
                (Some(lat), Some(lng)) => Ok(MapPoint::new(lat, lng)),
                _ => Err(anyhow!(
                    "A device position requires both latitude and longitude"
                )),
            })
            .transpose()?;
        Ok(Self {
            storage: Storage { dir: storage.dir },
            directory: Directory {
                base_url: directory.base_url,
            },
            geocoder: Geocoder {
                base_url: geocoder.base_url,
                user_agent: geocoder.user_agent,
                result_limit: geocoder.result_limit.unwrap_or(1),
            },
            device: Device { position },
        })
    }
}
