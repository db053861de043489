use std::path::PathBuf;

use figment::{
    Figment,
    providers::{Env, Format, Yaml},
};
use serde_aux::field_attributes::deserialize_number_from_string;

#[derive(serde::Deserialize, Debug, Clone)]
pub struct Config {
    pub application: Application,
    pub storage: StorageConfig,
}

#[derive(serde::Deserialize, Debug, Clone)]
pub struct Application {
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub trending_size: usize,
}

#[derive(serde::Deserialize, Debug, Clone)]
pub struct StorageConfig {
    pub data_dir: PathBuf,
}

pub enum Environment {
    Local,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Local => "local",
            Environment::Production => "production",
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "production" => Ok(Self::Production),
            other => Err(format!(
                "{} is not a supported environment. Use either `local` or `production`.",
                other
            )),
        }
    }
}

impl Config {
    // base.yaml, then the APP_ENVIRONMENT overlay, then `__`-split env vars
    pub fn new() -> Result<Self, figment::Error> {
        let base_path =
            std::env::current_dir().expect("Failed to determine the current directory.");
        let config_directory = base_path.join("configuration");

        let environment: Environment = std::env::var("APP_ENVIRONMENT")
            .unwrap_or_else(|_| "local".into())
            .try_into()
            .expect("Failed to parse APP_ENVIRONMENT.");

        let environment_filename = format!("{}.yaml", environment.as_str());

        Figment::new()
            .merge(Yaml::file(config_directory.join("base.yaml")))
            .merge(Yaml::file(config_directory.join(environment_filename)))
            .merge(Env::raw().split("__"))
            .extract()
    }
}
