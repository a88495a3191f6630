pub mod display;
mod env_overrides;
pub mod log;

use config::{Config, File, FileFormat, FileSourceFile};
use envconfig::Envconfig;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{
    display::DisplayOptions,
    env_overrides::{EnvVarOverrides, EnvVarOverridesError},
    log::LoggingConfig,
};

pub use display::HideRule;

#[derive(Debug, Clone, Default, Deserialize, Serialize, JsonSchema, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct TypeGraphConfig {
    /// The logger configuration.
    ///
    /// By default only warnings and errors are printed.
    #[serde(default)]
    pub log: LoggingConfig,

    /// Options shaping the produced type graph.
    #[serde(default)]
    pub display: DisplayOptions,
}

#[derive(Debug, thiserror::Error)]
pub enum TypeGraphConfigError {
    #[error("Failed to load configuration: {0}")]
    ConfigLoadError(#[from] config::ConfigError),
    #[error("Failed to apply configuration overrides: {0}")]
    EnvVarOverridesError(#[from] EnvVarOverridesError),
    #[error("Failed to load the environment variables: {0}")]
    EnvVarLoadError(#[from] envconfig::Error),
}

static DEFAULT_FILE_NAMES: &[&str] = &[
    "type-graph.config.yaml",
    "type-graph.config.yml",
    "type-graph.config.json",
];

pub fn load_config(
    override_config_path: Option<String>,
) -> Result<TypeGraphConfig, TypeGraphConfigError> {
    let env_overrides = EnvVarOverrides::init_from_env()?;
    let mut config = Config::builder();

    if let Some(path) = override_config_path {
        let as_file: File<FileSourceFile, _> = std::path::PathBuf::from(path).into();
        config = config.add_source(as_file.required(true));
    } else {
        for name in DEFAULT_FILE_NAMES {
            config = config.add_source(File::with_name(name).required(false));
        }
    }

    config = env_overrides.apply_overrides(config)?;

    Ok(config.build()?.try_deserialize::<TypeGraphConfig>()?)
}

pub fn parse_yaml_config(config_raw: String) -> Result<TypeGraphConfig, TypeGraphConfigError> {
    Config::builder()
        .add_source(File::from_str(&config_raw, FileFormat::Yaml))
        .build()?
        .try_deserialize::<TypeGraphConfig>()
        .map_err(TypeGraphConfigError::ConfigLoadError)
}
