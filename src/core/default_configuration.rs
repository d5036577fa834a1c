use std::fs;
use serde::Deserialize;
use log::LevelFilter;

use crate::{
    Error,
    core::{
        config::Config,
        error::Result
    },
};

#[derive(Clone, Deserialize)]
struct LogCfg {
    #[serde(rename = "level")]
    level   : String,
    #[serde(rename = "logFile")]
    file    : Option<String>,

    #[serde(skip)]
    deserde_level: Option<LevelFilter>,
}

#[derive(Clone, Deserialize)]
struct Configuration {
    #[serde(rename = "contactsPath")]
    contacts_path   : Option<String>,

    #[serde(rename = "logger")]
    logger          : Option<LogCfg>,
}

pub struct Builder<'a> {
    contacts_path   : Option<String>,

    log_level       : Option<LevelFilter>,
    log_file        : Option<&'a str>,

    cfg             : Option<Configuration>,
}

impl<'a> Builder<'a> {
    pub fn new() -> Builder<'a> {
        Self {
            contacts_path   : None,
            log_level       : None,
            log_file        : None,
            cfg             : None,
        }
    }

    pub fn with_contacts_path(&mut self, path: &str) -> &mut Self {
        self.contacts_path = Some(path.to_string());
        self
    }

    pub fn with_logger(&mut self, level: LevelFilter, file: Option<&'a str>) -> &mut Self {
        self.log_level = Some(level);
        self.log_file = file;
        self
    }

    pub fn load(&mut self, input: &str) -> Result<&mut Self> {
        let data = fs::read_to_string(input).map_err(|e| {
            Error::Io(format!("Reading config error: {}", e))
        })?;

        let cfg = serde_json::from_str::<Configuration>(&data).map_err(|e| {
            Error::Argument(format!("bad config, error: {}", e))
        })?;

        self.cfg = Some(cfg);
        Ok(self)
    }

    pub fn build(&mut self) -> Result<Box<dyn Config>> {
        Ok(Box::new(Configuration::new(self)))
    }
}

impl Default for Builder<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl Configuration {
    fn new(b: &Builder) -> Self {
        let mut cfg = match b.cfg.as_ref() {
            Some(cfg) => cfg.clone(),
            None => Self {
                contacts_path   : None,
                logger          : None,
            }
        };

        if let Some(path) = b.contacts_path.as_ref() {
            cfg.contacts_path = Some(path.clone());
        }

        if let Some(logger) = cfg.logger.as_mut() {
            logger.deserde_level = Some(parse_level(&logger.level));
        }

        if b.log_level.is_some() || b.log_file.is_some() {
            let mut logger = cfg.logger.take().unwrap_or(LogCfg {
                level: "info".to_string(),
                file: None,
                deserde_level: None,
            });
            if let Some(level) = b.log_level {
                logger.deserde_level = Some(level);
            }
            if let Some(file) = b.log_file {
                logger.file = Some(file.to_string());
            }
            if logger.deserde_level.is_none() {
                logger.deserde_level = Some(parse_level(&logger.level));
            }
            cfg.logger = Some(logger);
        }

        cfg
    }
}

// Unrecognized level strings fall back to "info".
fn parse_level(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "off"   => LevelFilter::Off,
        "error" => LevelFilter::Error,
        "warn"  => LevelFilter::Warn,
        "info"  => LevelFilter::Info,
        "debug" => LevelFilter::Debug,
        "trace" => LevelFilter::Trace,
        _       => LevelFilter::Info,
    }
}

impl Config for Configuration {
    fn contacts_path(&self) -> Option<&str> {
        self.contacts_path.as_deref()
    }

    fn log_level(&self) -> LevelFilter {
        self.logger.as_ref()
            .and_then(|v| v.deserde_level)
            .unwrap_or(LevelFilter::Info)
    }

    fn log_file(&self) -> Option<&str> {
        self.logger.as_ref()
            .and_then(|v| v.file.as_deref())
    }
}
