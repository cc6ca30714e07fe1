use crate::domain::model::Pairing;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{Result, SantaError};
use std::fs;
use std::path::Path;

/// Reads the HTML email template.
pub fn read_template(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            SantaError::TemplateError {
                message: format!("file '{}' not found", path.display()),
            }
        } else {
            SantaError::IoError(e)
        }
    })
}

/// Fills the template placeholders for one giver/receiver pair.
pub fn render<C: ConfigProvider>(template: &str, pair: &Pairing, config: &C) -> String {
    template
        .replace("[PARTICIPANT_NAME]", &pair.giver.name)
        .replace("[DRAW_NAME]", &pair.receiver.name)
        .replace("[EVENT_DATE]", config.event_date())
        .replace("[EXPECTED_VALUE]", config.expected_value())
        .replace("[PLACE]", config.place())
        .replace("[EMAIL_ORGANIZER]", config.organizer_email())
}
