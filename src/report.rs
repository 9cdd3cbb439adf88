use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::extract::{extract_json_object, strip_code_fences};
use crate::util::snippet;

/// Structured description of an identified weed, in the JSON shape the
/// prompt asks the model for.
///
/// Every field defaults individually: a reply that is a valid JSON object
/// but omits a field still deserializes, with the missing field empty.
/// Field contents and list lengths are not validated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WeedReport {
    pub name: String,
    pub scientific_name: String,
    pub description: String,
    pub characteristics: Vec<String>,
    pub control_methods: Vec<String>,
    pub impact: String,
}

impl WeedReport {
    /// The fixed report substituted when no JSON can be recovered from the
    /// model reply. Rendered like any other result, not as an error.
    pub fn analysis_error() -> Self {
        Self {
            name: "Analysis Error".to_string(),
            scientific_name: String::new(),
            description: "The AI couldn't properly analyze this image. \
                          Please try with a clearer image of a weed."
                .to_string(),
            characteristics: Vec::new(),
            control_methods: Vec::new(),
            impact: "Unable to determine impact.".to_string(),
        }
    }

    /// Turns a raw model reply into a report, repairing as needed.
    ///
    /// Stage 1: strip markdown fences and parse. Stage 2: parse the greedy
    /// `{...}` span. Last resort: the fixed [`analysis_error`] report.
    /// Deterministic in the reply text; never fails.
    ///
    /// [`analysis_error`]: WeedReport::analysis_error
    pub fn from_model_reply(reply: &str) -> Self {
        let cleaned = strip_code_fences(reply);
        match serde_json::from_str(cleaned) {
            Ok(report) => report,
            Err(err) => {
                warn!(
                    "model reply is not valid JSON ({err}); reply: {}",
                    snippet(cleaned)
                );
                if let Some(span) = extract_json_object(cleaned) {
                    match serde_json::from_str(span) {
                        Ok(report) => return report,
                        Err(err) => {
                            warn!("extracted JSON span failed to parse: {err}");
                        }
                    }
                }
                Self::analysis_error()
            }
        }
    }
}
