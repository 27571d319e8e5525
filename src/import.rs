use serde::Serialize;
use tracing::info;

use crate::error::{Result, RosterError};
use crate::model::TeamId;

/// Acknowledgement of an uploaded roster file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImportReceipt {
    pub team_id: TeamId,
    pub file_name: String,
    pub bytes: usize,
}

impl ImportReceipt {
    pub fn message(&self) -> String {
        format!("Successfully uploaded: {}.", self.file_name)
    }
}

/// Accept a roster upload for `team_id`.
///
/// The contents are not parsed and nothing is merged into the store; the
/// receipt only records what arrived.
pub fn acknowledge(team_id: &TeamId, file_name: &str, contents: &[u8]) -> Result<ImportReceipt> {
    let file_name = file_name.trim();
    if file_name.is_empty() {
        return Err(RosterError::Validation(
            "import file has no name".to_string(),
        ));
    }
    info!(%team_id, file_name, bytes = contents.len(), "received roster import");
    Ok(ImportReceipt {
        team_id: team_id.clone(),
        file_name: file_name.to_string(),
        bytes: contents.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_acknowledge_records_receipt() {
        let receipt = acknowledge(&"t1".into(), " rugby.csv ", b"Player Name\nNimal\n").unwrap();
        assert_eq!(receipt.file_name, "rugby.csv");
        assert_eq!(receipt.bytes, 18);
        assert_eq!(receipt.message(), "Successfully uploaded: rugby.csv.");
    }

    #[test]
    fn test_acknowledge_rejects_nameless_upload() {
        assert!(matches!(
            acknowledge(&"t1".into(), "  ", b""),
            Err(RosterError::Validation(_))
        ));
    }
}
