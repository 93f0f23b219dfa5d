use crate::models::{Wpm, DEFAULT_WPM};
use anyhow::Result;
use config::{Config, File};
use directories::ProjectDirs;
use serde::Deserialize;

pub const APP_NAME: &str = "skim";

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct Theme {
    pub bg: String,        // background
    pub text: String,      // current word
    pub highlight: String, // ORP letter
    pub context: String,   // surrounding words
    pub marker: String,    // focus column marker
    pub status: String,    // wpm / remaining time
    pub accent: String,    // titles, picker cursor
    pub sub: String,       // help keys
    #[serde(alias = "subAlt", alias = "subalt")]
    pub sub_alt: String, // help descriptions, disabled entries
    #[serde(alias = "progressStart", alias = "progressstart")]
    pub progress_start: String,
    #[serde(alias = "progressEnd", alias = "progressend")]
    pub progress_end: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            bg: "#1c1c1c".to_string(),
            text: "#d0d0d0".to_string(),
            highlight: "#ff0000".to_string(),
            context: "#444444".to_string(),
            marker: "#585858".to_string(),
            status: "#8a8a8a".to_string(),
            accent: "#ff87d7".to_string(),
            sub: "#626262".to_string(),
            sub_alt: "#4a4a4a".to_string(),
            progress_start: "#5a56e0".to_string(),
            progress_end: "#ee6ff8".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ReaderConfig {
    pub wpm: u32,
}

impl ReaderConfig {
    pub fn wpm(&self) -> Wpm {
        Wpm::new(self.wpm)
    }
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            wpm: u32::from(DEFAULT_WPM),
        }
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct AppConfig {
    pub theme: Theme,
    pub reader: ReaderConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        let mut builder = Self::with_defaults()?;

        if let Some(proj_dirs) = ProjectDirs::from("", "", APP_NAME) {
            let config_path = proj_dirs.config_dir().join("config.toml");

            if config_path.exists() {
                tracing::debug!(target: "runtime", path = %config_path.display(), "loading config file");
                builder = builder.add_source(File::from(config_path));
            }
        }

        let cfg = builder.build()?;

        let app_config: AppConfig = cfg.try_deserialize()?;

        Ok(app_config)
    }

    // theme colors come from `#[serde(default)]`
    fn with_defaults() -> Result<config::ConfigBuilder<config::builder::DefaultState>> {
        let builder = Config::builder().set_default("reader.wpm", i64::from(DEFAULT_WPM))?;
        Ok(builder)
    }
}
