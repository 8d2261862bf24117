#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0} environment variable must be set")]
    MissingVar(&'static str),

    #[error("invalid value for {name} environment variable")]
    InvalidVar {
        name: &'static str,
        #[source]
        source: std::num::ParseIntError,
    },

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

pub type Result<T> = std::result::Result<T, AppError>;
