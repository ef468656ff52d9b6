use serde::{Deserialize, Serialize};

/// Bill identifiers mentioned in one utterance; only matched fields are set
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillContext {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bill_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calendar_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rules_report_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amendment_number: Option<String>,
}

impl BillContext {
    pub fn is_empty(&self) -> bool {
        self.bill_number.is_none()
            && self.calendar_number.is_none()
            && self.rules_report_number.is_none()
            && self.amendment_number.is_none()
    }
}

/// Procedural signals counted per utterance
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProceduralMarkers {
    /// Number of question marks
    pub questions: usize,
    /// A motion is made ("move")
    pub motion: bool,
    /// A committee is called
    pub committee_call: bool,
}
