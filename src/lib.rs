pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::adapters::random_org::{RandomOrgClient, RANDOM_ORG_URL};
pub use crate::adapters::smtp::{DryRunMailer, SmtpMailer};
pub use crate::config::CliConfig;
pub use crate::core::engine::SantaEngine;
pub use crate::domain::model::{Pairing, Participant};
pub use crate::domain::ports::{ConfigProvider, Mailer, RandomSource};
pub use crate::utils::error::{Result, SantaError};
