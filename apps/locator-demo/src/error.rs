use thiserror::Error;

pub type DemoResult<T> = Result<T, DemoError>;

#[derive(Debug, Error)]
pub enum DemoError {
    #[error("config error: {0}")]
    Config(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("scenario `{name}`: expected counter {expected}, got {actual}")]
    Scenario {
        name: &'static str,
        expected: u32,
        actual: u32,
    },
}
