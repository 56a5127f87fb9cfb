use intro_forge_engine::{
    CourseEntry, FieldId, FormDefaults, FormRules, Headings, LinkEntry, RecordDefaults,
    ViewSettings,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

/// Everything a user can tune without touching code. Every section is
/// optional; missing ones take the built-in values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub defaults: RecordDefaults,
    pub headings: Headings,
    /// Prefilled form values keyed by field id, e.g. `firstName`
    pub fields: BTreeMap<String, String>,
    pub courses: Vec<CourseEntry>,
    pub links: Vec<LinkEntry>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            defaults: RecordDefaults::default(),
            headings: Headings::default(),
            fields: BTreeMap::new(),
            courses: builtin_courses(),
            links: Vec::new(),
        }
    }
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let mut config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        // A local picture reference may use ~ or $VARS
        config.defaults.picture_url =
            Self::expand_path(&config.defaults.picture_url).unwrap_or(config.defaults.picture_url);

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    /// Loads `config_path`, or the default location when `None`, falling back
    /// to the built-in configuration when the file does not exist.
    pub fn load_or_default(config_path: Option<&Path>) -> Result<Self, ConfigError> {
        let loaded = match config_path {
            Some(path) => Self::load_from_path(path)?,
            None => Self::load()?,
        };
        Ok(loaded.unwrap_or_else(|| {
            log::info!("No config file found, using built-in defaults");
            Self::default()
        }))
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/intro-forge");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    /// What a form reset restores. Unknown field ids are skipped with a warning.
    pub fn form_defaults(&self) -> FormDefaults {
        let fields = self
            .fields
            .iter()
            .filter_map(|(id, value)| match FieldId::from_wire(id) {
                Some(field) => Some((field, value.clone())),
                None => {
                    log::warn!("Ignoring unknown field '{id}' in config");
                    None
                }
            })
            .collect();

        FormDefaults {
            fields,
            courses: self.courses.clone(),
            links: self.links.clone(),
        }
    }

    pub fn view_settings(&self) -> ViewSettings {
        ViewSettings {
            headings: self.headings.clone(),
            defaults: self.defaults.clone(),
            rules: FormRules::default(),
        }
    }

    fn expand_path(path: &str) -> Option<String> {
        match shellexpand::full(path) {
            Ok(expanded) => Some(expanded.into_owned()),
            Err(_) => None,
        }
    }
}

/// Course rows a fresh form starts with
pub fn builtin_courses() -> Vec<CourseEntry> {
    vec![
        CourseEntry::new(
            "ITIS",
            "3135",
            "Web Design & Development",
            "Course is required for my major, but seems fun.",
        ),
        CourseEntry::new("ITSC", "3155", "Software Engineering", "Also required for major."),
        CourseEntry::new("STAT", "2122", "Intro To Prob and Stat", "Required for my major."),
        CourseEntry::new(
            "GEOG",
            "1511",
            "Local Social Science",
            "I'm passionate about urban planning and urban development, \
             so I really wanted to take this class.",
        ),
    ]
}
