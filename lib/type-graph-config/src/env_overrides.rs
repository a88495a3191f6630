use config::{builder::BuilderState, ConfigBuilder, ConfigError};
use envconfig::Envconfig;
use tracing::debug;

use crate::log::{LogFormat, LogLevel};

#[derive(Envconfig)]
pub struct EnvVarOverrides {
    // Logger overrides
    #[envconfig(from = "LOG_LEVEL")]
    pub log_level: Option<LogLevel>,
    #[envconfig(from = "LOG_FORMAT")]
    pub log_format: Option<LogFormat>,
    #[envconfig(from = "LOG_FILTER")]
    pub log_filter: Option<String>,

    // Display overrides
    #[envconfig(from = "SORT_BY_ALPHABET")]
    pub sort_by_alphabet: Option<bool>,
    #[envconfig(from = "SKIP_DEPRECATED")]
    pub skip_deprecated: Option<bool>,
    #[envconfig(from = "SHOW_HIDDEN")]
    pub show_hidden: Option<bool>,
    #[envconfig(from = "ROOT_TYPE")]
    pub root_type: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum EnvVarOverridesError {
    #[error("Failed to override configuration: {0}")]
    FailedToOverrideConfig(#[from] ConfigError),
}

impl EnvVarOverrides {
    pub fn apply_overrides<T: BuilderState>(
        mut self,
        mut config: ConfigBuilder<T>,
    ) -> Result<ConfigBuilder<T>, EnvVarOverridesError> {
        if let Some(log_level) = self.log_level.take() {
            debug!("[config-override] 'log.level' = {:?}", log_level);
            config = config.set_override("log.level", log_level.as_str())?;
        }
        if let Some(log_format) = self.log_format.take() {
            debug!("[config-override] 'log.format' = {:?}", log_format);
            config = config.set_override("log.format", log_format.as_str())?;
        }
        if let Some(log_filter) = self.log_filter.take() {
            debug!("[config-override] 'log.filter' = {:?}", log_filter);
            config = config.set_override("log.filter", log_filter)?;
        }

        if let Some(sort_by_alphabet) = self.sort_by_alphabet.take() {
            debug!(
                "[config-override] 'display.sort_by_alphabet' = {}",
                sort_by_alphabet
            );
            config = config.set_override("display.sort_by_alphabet", sort_by_alphabet)?;
        }
        if let Some(skip_deprecated) = self.skip_deprecated.take() {
            debug!(
                "[config-override] 'display.skip_deprecated' = {}",
                skip_deprecated
            );
            config = config.set_override("display.skip_deprecated", skip_deprecated)?;
        }
        if let Some(show_hidden) = self.show_hidden.take() {
            debug!("[config-override] 'display.show_hidden' = {}", show_hidden);
            config = config.set_override("display.show_hidden", show_hidden)?;
        }
        if let Some(root_type) = self.root_type.take() {
            debug!("[config-override] 'display.root_type' = {}", root_type);
            config = config.set_override("display.root_type", root_type)?;
        }

        Ok(config)
    }
}
