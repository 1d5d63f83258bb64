pub mod enums;
pub mod parameter;
pub mod report;

pub use enums::*;
pub use parameter::*;
pub use report::*;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("Invalid {field} value: {value}")]
    InvalidEnum { field: String, value: String },
}
