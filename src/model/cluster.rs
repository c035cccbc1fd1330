use crate::error::DashboardError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Environment {
    Sit,
    Uat,
    Prd,
}

impl Environment {
    pub const ALL: [Environment; 3] = [Environment::Sit, Environment::Uat, Environment::Prd];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sit => "SIT",
            Self::Uat => "UAT",
            Self::Prd => "PRD",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Environment {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Cluster labels arrive lowercase from the backend
        Self::ALL
            .into_iter()
            .find(|env| env.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| DashboardError::InvalidFilterValue {
                kind: "environment",
                value: s.to_string(),
            })
    }
}

impl TryFrom<String> for Environment {
    type Error = DashboardError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Environment> for String {
    fn from(value: Environment) -> Self {
        value.as_str().to_string()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Provider {
    Gke,
    Ocp,
    Aks,
    Eks,
}

impl Provider {
    pub const ALL: [Provider; 4] = [Provider::Gke, Provider::Ocp, Provider::Aks, Provider::Eks];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Gke => "GKE",
            Self::Ocp => "OCP",
            Self::Aks => "AKS",
            Self::Eks => "EKS",
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Provider {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|provider| provider.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| DashboardError::InvalidFilterValue {
                kind: "provider",
                value: s.to_string(),
            })
    }
}

impl TryFrom<String> for Provider {
    type Error = DashboardError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Provider> for String {
    fn from(value: Provider) -> Self {
        value.as_str().to_string()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct VersionInfo {
    pub kubernetes: String,
    pub platform: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ResourceQuota {
    pub cpu: String,
    pub memory: String,
    pub storage: String,
    pub pvcs: String,
    #[serde(rename = "nodeports")]
    pub node_ports: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl HealthStatus {
    pub fn is_healthy(&self) -> bool {
        self.status.eq_ignore_ascii_case("successful") || self.status.eq_ignore_ascii_case("healthy")
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NodeStatus {
    pub ready: u32,
    pub total: u32,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MonitoringUrls {
    #[serde(default)]
    pub prometheus: Option<String>,
    #[serde(default)]
    pub grafana: Option<String>,
    #[serde(default, rename = "alertmanager")]
    pub alert_manager: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MonitoringInfo {
    pub prometheus: bool,
    pub grafana: bool,
    #[serde(rename = "alertmanager")]
    pub alert_manager: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub urls: Option<MonitoringUrls>,
}

/// A destination cluster as reported by the deployment backend.
///
/// Only `name`, `environment` and `provider` take part in filtering; the
/// remaining fields are shown in the cluster table and quota dialog.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusterInfo {
    pub name: String,
    pub environment: Environment,
    pub provider: Provider,
    #[serde(default)]
    pub version: VersionInfo,
    #[serde(default)]
    pub node_count: u32,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub resource_quota: ResourceQuota,
    #[serde(default)]
    pub health: HealthStatus,
    #[serde(default)]
    pub nodes: NodeStatus,
    #[serde(default)]
    pub network_policy: bool,
    #[serde(default)]
    pub ingress_controller: String,
    #[serde(default)]
    pub last_updated: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub console_url: Option<String>,
    #[serde(default)]
    pub monitoring: MonitoringInfo,
    #[serde(default)]
    pub builtin: bool,
}

impl ClusterInfo {
    pub fn new(name: impl Into<String>, environment: Environment, provider: Provider) -> Self {
        Self {
            name: name.into(),
            environment,
            provider,
            version: VersionInfo::default(),
            node_count: 0,
            region: String::new(),
            resource_quota: ResourceQuota::default(),
            health: HealthStatus::default(),
            nodes: NodeStatus::default(),
            network_policy: false,
            ingress_controller: String::new(),
            last_updated: String::new(),
            console_url: None,
            monitoring: MonitoringInfo::default(),
            builtin: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_parse_ignores_case() {
        assert_eq!("prd".parse::<Environment>().unwrap(), Environment::Prd);
        assert_eq!("Sit".parse::<Environment>().unwrap(), Environment::Sit);
        assert!(matches!(
            "QA".parse::<Environment>(),
            Err(DashboardError::InvalidFilterValue { kind: "environment", .. })
        ));
    }

    #[test]
    fn test_provider_parse_rejects_unknown() {
        assert_eq!("eks".parse::<Provider>().unwrap(), Provider::Eks);
        assert!("aws".parse::<Provider>().is_err());
    }

    #[test]
    fn test_cluster_deserializes_backend_fields() {
        let json = r#"{
            "name": "gke-sit-01",
            "environment": "sit",
            "provider": "GKE",
            "version": { "kubernetes": "v1.29.4", "platform": "v1.29.4-gke.100" },
            "nodeCount": 3,
            "region": "asia-east1",
            "resourceQuota": { "cpu": "64 cores", "memory": "256Gi", "storage": "5000Gi", "pvcs": "50", "nodeports": "20" },
            "health": { "status": "Successful" },
            "nodes": { "ready": 3, "total": 3 },
            "networkPolicy": true,
            "ingressController": "nginx",
            "lastUpdated": "2024-11-02T10:00:00Z",
            "monitoring": { "prometheus": true, "grafana": true, "alertmanager": false },
            "builtin": true
        }"#;

        let cluster: ClusterInfo = serde_json::from_str(json).unwrap();
        assert_eq!(cluster.environment, Environment::Sit);
        assert_eq!(cluster.provider, Provider::Gke);
        assert_eq!(cluster.resource_quota.node_ports, "20");
        assert_eq!(cluster.nodes.ready, 3);
        assert!(cluster.health.is_healthy());
        assert!(cluster.builtin);
        assert!(cluster.console_url.is_none());
    }

    #[test]
    fn test_cluster_rejects_unknown_provider() {
        let json = r#"{ "name": "x", "environment": "UAT", "provider": "DOKS" }"#;
        assert!(serde_json::from_str::<ClusterInfo>(json).is_err());
    }
}
