use crate::domain::model::Participant;
use crate::utils::error::{Result, SantaError};
use std::collections::HashSet;
use std::path::Path;

/// Loads the participant roster from a CSV file with `Name` and `Email`
/// header columns. Load order is preserved; the assignment pass depends on
/// it.
pub fn load_participants(path: impl AsRef<Path>) -> Result<Vec<Participant>> {
    let path = path.as_ref();
    let mut reader = csv::Reader::from_path(path).map_err(|e| {
        if matches!(e.kind(), csv::ErrorKind::Io(_)) {
            SantaError::RosterError {
                message: format!("could not open '{}'", path.display()),
            }
        } else {
            SantaError::CsvError(e)
        }
    })?;

    let headers = reader.headers()?.clone();
    for required in ["Name", "Email"] {
        if !headers.iter().any(|h| h == required) {
            return Err(SantaError::RosterError {
                message: format!("missing '{}' column in '{}'", required, path.display()),
            });
        }
    }

    let mut participants = Vec::new();
    for record in reader.deserialize() {
        let participant: Participant = record?;
        participants.push(participant);
    }

    warn_on_duplicate_emails(&participants);
    Ok(participants)
}

// Emails are assumed unique; a duplicate would make two givers
// indistinguishable to the repair pass, so call it out loudly.
fn warn_on_duplicate_emails(participants: &[Participant]) {
    let mut seen = HashSet::new();
    for participant in participants {
        if !seen.insert(participant.email.as_str()) {
            tracing::warn!(
                "⚠️ Duplicate email in roster: {} ({})",
                participant.email,
                participant.name
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_csv(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_load_participants() {
        let file = write_csv("Name,Email\nAlice,alice@example.com\nBob,bob@example.com\n");
        let participants = load_participants(file.path()).unwrap();

        assert_eq!(participants.len(), 2);
        assert_eq!(participants[0], Participant::new("Alice", "alice@example.com"));
        assert_eq!(participants[1], Participant::new("Bob", "bob@example.com"));
    }

    #[test]
    fn test_load_preserves_file_order() {
        let file = write_csv("Name,Email\nZoe,zoe@example.com\nAmy,amy@example.com\n");
        let participants = load_participants(file.path()).unwrap();

        let names: Vec<&str> = participants.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Zoe", "Amy"]);
    }

    #[test]
    fn test_extra_columns_are_ignored() {
        let file = write_csv("Name,Email,Team\nAlice,alice@example.com,Platform\n");
        let participants = load_participants(file.path()).unwrap();
        assert_eq!(participants.len(), 1);
    }

    #[test]
    fn test_missing_email_column() {
        let file = write_csv("Name,Address\nAlice,somewhere\n");
        let result = load_participants(file.path());
        assert!(matches!(result, Err(SantaError::RosterError { .. })));
    }

    #[test]
    fn test_missing_file() {
        let result = load_participants("/no/such/participants.csv");
        assert!(matches!(result, Err(SantaError::RosterError { .. })));
    }

    #[test]
    fn test_duplicate_emails_do_not_fail_the_load() {
        let file = write_csv("Name,Email\nAlice,same@example.com\nBob,same@example.com\n");
        let participants = load_participants(file.path()).unwrap();
        assert_eq!(participants.len(), 2);
    }
}
