use thiserror::Error;

#[derive(Error, Debug)]
pub enum SantaError {
    #[error("random.org request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("random.org API error: {message}")]
    RandomOrgError { message: String },

    #[error("Assignment failed: {message}")]
    AssignmentError { message: String },

    #[error("Participant roster error: {message}")]
    RosterError { message: String },

    #[error("Template error: {message}")]
    TemplateError { message: String },

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("SMTP transport error: {0}")]
    SmtpError(#[from] lettre::transport::smtp::Error),

    #[error("Email build error: {0}")]
    EmailError(#[from] lettre::error::Error),

    #[error("Invalid email address: {0}")]
    AddressError(#[from] lettre::address::AddressError),

    #[error("Missing configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid configuration value for {field} ('{value}'): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl SantaError {
    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            SantaError::ApiError(_) => "Check your network connection and the random.org status",
            SantaError::RandomOrgError { .. } => {
                "Verify your RANDOM_ORG_API_KEY and the request quota on random.org"
            }
            SantaError::AssignmentError { .. } => "Re-run to draw a fresh permutation",
            SantaError::RosterError { .. } | SantaError::CsvError(_) => {
                "Check the participants CSV has 'Name' and 'Email' columns"
            }
            SantaError::TemplateError { .. } => "Check the --template-file path",
            SantaError::IoError(_) => "Check the file paths passed on the command line",
            SantaError::SerializationError(_) => "The random.org response was malformed; try again",
            SantaError::SmtpError(_) => "Check the SMTP host, port, username and password",
            SantaError::EmailError(_) | SantaError::AddressError(_) => {
                "Check the email addresses in the roster and --organizer-email"
            }
            SantaError::MissingConfigError { .. } => {
                "Pass the flag on the command line or set its environment variable"
            }
            SantaError::InvalidConfigValueError { .. } => {
                "Fix the flagged value and run again"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, SantaError>;
