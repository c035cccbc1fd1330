use serde::{Deserialize, Serialize};

/// An Argo CD application row shown under Deploy / ArgoApplication.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationSummary {
    pub name: String,
    #[serde(default)]
    pub project: String,
    /// Name of the destination cluster
    #[serde(default)]
    pub destination: String,
    #[serde(default)]
    pub namespace: String,
    #[serde(default)]
    pub sync_status: String,
    #[serde(default)]
    pub health_status: String,
}

impl ApplicationSummary {
    pub fn is_synced(&self) -> bool {
        self.sync_status.eq_ignore_ascii_case("synced")
    }
}
