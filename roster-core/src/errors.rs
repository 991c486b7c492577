use thiserror::Error;

#[derive(Error, Debug)]
pub enum RosterError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type RosterResult<T> = Result<T, RosterError>;
