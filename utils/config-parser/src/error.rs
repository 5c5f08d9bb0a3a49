use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(transparent)]
    Config(#[from] config::ConfigError),
}

pub type ConfigResult<T> = core::result::Result<T, ConfigError>;
