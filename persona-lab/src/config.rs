use anyhow::Result;
use config::{Config as ConfigLoader, Environment, File};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Config {
    pub port: u16,
    pub backend_url: String,
    pub dataset_path: String,
    pub log_level: String,
}

impl Config {
    pub fn load() -> Result<Self> {
        let config = ConfigLoader::builder()
            .set_default("port", 3000)?
            .set_default("backend_url", "http://localhost:8000")?
            .set_default("dataset_path", "data/personality_dataset.csv")?
            .set_default("log_level", "info")?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            .add_source(Environment::with_prefix("PERSONA"))
            .build()?;

        Ok(config.try_deserialize()?)
    }
}
