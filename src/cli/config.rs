use crate::s3::{Credentials, Region};
use anyhow::{Context, Result};
use secrecy::SecretString;
use serde::Deserialize;
use std::{collections::BTreeMap, fs::File, path::Path};

#[derive(Debug, Deserialize)]
pub struct Config {
    pub hosts: BTreeMap<String, Host>,
}

#[derive(Debug, Deserialize)]
pub struct Host {
    pub endpoint: Option<String>,
    pub region: Option<String>,
    #[serde(default)]
    pub access_key: String,
    #[serde(default)]
    pub secret_key: String,
}

impl Config {
    /// # Errors
    ///
    /// Will return `Err` if the file can not be opened or is not a valid config
    pub fn new(config_path: &Path) -> Result<Self> {
        let file = File::open(config_path)
            .with_context(|| format!("unable to open: {}", config_path.display()))?;

        let config: Self =
            serde_yaml_ng::from_reader(file).context("unable to parse config file")?;

        Ok(config)
    }

    /// Get the host from the config.yml
    ///
    /// # Errors
    ///
    /// Will return `Err` if the host is not defined
    pub fn get_host(&self, name: &str) -> Result<&Host> {
        self.hosts
            .get(name)
            .with_context(|| format!("could not find host {name}"))
    }
}

impl Host {
    /// Get the region for the host
    ///
    /// # Errors
    ///
    /// Will return `Err` if the region is unknown or there is neither region nor endpoint
    pub fn get_region(&self) -> Result<Region> {
        Ok(match &self.region {
            Some(r) => r.parse::<Region>()?,
            None => {
                let r = self
                    .endpoint
                    .as_ref()
                    .context("could not parse host need an endpoint or region")?;
                Region::Custom {
                    name: String::new(),
                    endpoint: r.to_string(),
                }
            }
        })
    }

    /// Credentials from the config, `AWS_ACCESS_KEY_ID` and `AWS_SECRET_ACCESS_KEY` take
    /// precedence
    #[must_use]
    pub fn credentials(&self) -> Credentials {
        Credentials::from_env_or(
            &self.access_key,
            &SecretString::new(self.secret_key.as_str().into()),
        )
    }
}
