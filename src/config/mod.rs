use crate::adapters::random_org::RANDOM_ORG_URL;
use crate::core::ConfigProvider;
use crate::utils::error::{Result, SantaError};
use crate::utils::validation::{
    validate_email, validate_non_empty_string, validate_range, validate_url, Validate,
};
use clap::Parser;

/// Command-line configuration. Every required value can also come from its
/// environment variable, including via a `.env` file.
#[derive(Debug, Clone, Parser)]
#[command(name = "secret-santa")]
#[command(about = "Assigns and emails Secret Santas using random.org")]
pub struct CliConfig {
    /// API key for random.org
    #[arg(long, env = "RANDOM_ORG_API_KEY")]
    pub api_key: Option<String>,

    /// random.org JSON-RPC endpoint
    #[arg(long, env = "RANDOM_ORG_API_URL", default_value = RANDOM_ORG_URL)]
    pub api_url: String,

    /// Path to the CSV file with participant names and emails
    #[arg(long, default_value = "participants.csv")]
    pub participants_file: String,

    /// Path to the HTML email template
    #[arg(long, default_value = "email-template.html")]
    pub template_file: String,

    /// Date of the event
    #[arg(long, env = "EVENT_DATE")]
    pub event_date: Option<String>,

    /// Suggested gift value
    #[arg(long, env = "EXPECTED_VALUE")]
    pub expected_value: Option<String>,

    /// Location of the event
    #[arg(long, env = "PLACE")]
    pub place: Option<String>,

    /// Organizer's contact email
    #[arg(long, env = "ORGANIZER_EMAIL")]
    pub organizer_email: Option<String>,

    /// SMTP server host
    #[arg(long, env = "SMTP_HOST")]
    pub smtp_host: Option<String>,

    /// SMTP server port
    #[arg(long, env = "SMTP_PORT", default_value = "587")]
    pub smtp_port: u16,

    /// Username for the SMTP server
    #[arg(long, env = "SMTP_USER")]
    pub smtp_user: Option<String>,

    /// Print emails to the console instead of sending them
    #[arg(long)]
    pub dry_run: bool,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        let required = [
            ("--api-key / RANDOM_ORG_API_KEY", self.api_key.is_none()),
            ("--event-date / EVENT_DATE", self.event_date.is_none()),
            ("--expected-value / EXPECTED_VALUE", self.expected_value.is_none()),
            ("--place / PLACE", self.place.is_none()),
            ("--organizer-email / ORGANIZER_EMAIL", self.organizer_email.is_none()),
            ("--smtp-host / SMTP_HOST", self.smtp_host.is_none()),
            ("--smtp-user / SMTP_USER", self.smtp_user.is_none()),
        ];

        let missing: Vec<&str> = required
            .iter()
            .filter(|(_, is_none)| *is_none)
            .map(|(name, _)| *name)
            .collect();
        if !missing.is_empty() {
            return Err(SantaError::MissingConfigError {
                field: missing.join(", "),
            });
        }

        validate_url("api_url", &self.api_url)?;
        validate_non_empty_string("participants_file", &self.participants_file)?;
        validate_non_empty_string("template_file", &self.template_file)?;
        validate_range("smtp_port", self.smtp_port, 1, 65535)?;
        if let Some(organizer) = &self.organizer_email {
            validate_email("organizer_email", organizer)?;
        }

        Ok(())
    }
}

impl ConfigProvider for CliConfig {
    fn participants_file(&self) -> &str {
        &self.participants_file
    }

    fn template_file(&self) -> &str {
        &self.template_file
    }

    fn event_date(&self) -> &str {
        self.event_date.as_deref().unwrap_or_default()
    }

    fn expected_value(&self) -> &str {
        self.expected_value.as_deref().unwrap_or_default()
    }

    fn place(&self) -> &str {
        self.place.as_deref().unwrap_or_default()
    }

    fn organizer_email(&self) -> &str {
        self.organizer_email.as_deref().unwrap_or_default()
    }
}
