pub mod assign;
pub mod engine;

pub use crate::domain::model::{Pairing, Participant};
pub use crate::domain::ports::{ConfigProvider, Mailer, RandomSource};
pub use crate::utils::error::Result;
