use thiserror::Error;

#[derive(Debug, Error)]
pub enum OptionsError {
    #[error("failed to parse validation options: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("warn_ratio must be in (0, 1], got {value}")]
    WarnRatio { value: f64 },
}
