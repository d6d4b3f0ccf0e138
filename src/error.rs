use std::error;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TooltipError {
    /// A configuration value could not be interpreted, e.g. an unknown side name.
    InvalidConfiguration(String),
}

impl fmt::Display for TooltipError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TooltipError::InvalidConfiguration(value) => {
                write!(f, "Invalid tooltip configuration: {}", value)
            }
        }
    }
}

impl error::Error for TooltipError {}

pub type Result<T> = std::result::Result<T, TooltipError>;
