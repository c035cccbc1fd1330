use crate::error::Result;
use crate::model::{
    ApplicationSummary, ClusterInfo, Environment, HealthStatus, MonitoringInfo, NodeStatus, Provider,
    ResourceQuota, VersionInfo,
};
use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Inventory {
    #[serde(default)]
    pub clusters: Vec<ClusterInfo>,
    #[serde(default)]
    pub applications: Vec<ApplicationSummary>,
}

impl Inventory {
    pub fn parse(contents: &str) -> Result<Self> {
        Ok(serde_json::from_str(contents)?)
    }
}

pub fn read_inventory(path: &Path) -> Result<Inventory> {
    let contents = fs::read_to_string(path)?;
    let inventory = Inventory::parse(&contents)?;
    tracing::info!(
        path = %path.display(),
        clusters = inventory.clusters.len(),
        applications = inventory.applications.len(),
        "loaded inventory"
    );
    Ok(inventory)
}

fn sample_cluster(
    name: &str,
    environment: Environment,
    provider: Provider,
    region: &str,
    nodes: NodeStatus,
    minutes_ago: i64,
) -> ClusterInfo {
    let mut cluster = ClusterInfo::new(name, environment, provider);
    cluster.version = VersionInfo {
        kubernetes: "v1.29.4".to_string(),
        platform: format!("v1.29.4-{}", provider.as_str().to_lowercase()),
    };
    cluster.node_count = nodes.total;
    cluster.nodes = nodes;
    cluster.region = region.to_string();
    cluster.resource_quota = ResourceQuota {
        cpu: "64 cores".to_string(),
        memory: "256Gi".to_string(),
        storage: "5000Gi".to_string(),
        pvcs: "50".to_string(),
        node_ports: "20".to_string(),
    };
    cluster.health = HealthStatus {
        status: if nodes.ready == nodes.total { "Successful" } else { "Degraded" }.to_string(),
        message: None,
    };
    cluster.network_policy = true;
    cluster.ingress_controller = "nginx".to_string();
    cluster.last_updated = (Utc::now() - Duration::minutes(minutes_ago)).to_rfc3339();
    cluster.monitoring = MonitoringInfo {
        prometheus: true,
        grafana: true,
        alert_manager: environment == Environment::Prd,
        urls: None,
    };
    cluster
}

/// Demo data shown when no inventory file is configured.
pub fn sample_inventory() -> Inventory {
    let mut in_cluster = sample_cluster(
        "in-cluster",
        Environment::Sit,
        Provider::Ocp,
        "on-prem",
        NodeStatus { ready: 3, total: 3 },
        2,
    );
    in_cluster.builtin = true;

    let clusters = vec![
        in_cluster,
        sample_cluster("gke-sit-01", Environment::Sit, Provider::Gke, "asia-east1", NodeStatus { ready: 4, total: 4 }, 5),
        sample_cluster("ocp-uat-01", Environment::Uat, Provider::Ocp, "on-prem", NodeStatus { ready: 5, total: 6 }, 12),
        sample_cluster("aks-uat-02", Environment::Uat, Provider::Aks, "eastasia", NodeStatus { ready: 3, total: 3 }, 30),
        sample_cluster("eks-prd-01", Environment::Prd, Provider::Eks, "us-west-2", NodeStatus { ready: 12, total: 12 }, 1),
        sample_cluster("gke-prd-02", Environment::Prd, Provider::Gke, "europe-west4", NodeStatus { ready: 9, total: 10 }, 45),
    ];

    let app = |name: &str, destination: &str, sync: &str, health: &str| ApplicationSummary {
        name: name.to_string(),
        project: "default".to_string(),
        destination: destination.to_string(),
        namespace: name.to_string(),
        sync_status: sync.to_string(),
        health_status: health.to_string(),
    };
    let applications = vec![
        app("guestbook", "gke-sit-01", "Synced", "Healthy"),
        app("payments-api", "eks-prd-01", "Synced", "Healthy"),
        app("ledger-worker", "ocp-uat-01", "OutOfSync", "Progressing"),
        app("external-secrets", "in-cluster", "Synced", "Healthy"),
    ];

    Inventory {
        clusters,
        applications,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_inventory() {
        let json = r#"{
            "clusters": [
                { "name": "sit-a", "environment": "SIT", "provider": "GKE" },
                { "name": "prd-b", "environment": "prd", "provider": "eks", "builtin": true }
            ],
            "applications": [
                { "name": "guestbook", "destination": "sit-a", "syncStatus": "Synced" }
            ]
        }"#;

        let inventory = Inventory::parse(json).unwrap();
        assert_eq!(inventory.clusters.len(), 2);
        assert_eq!(inventory.clusters[1].environment, Environment::Prd);
        assert!(inventory.clusters[1].builtin);
        assert!(inventory.applications[0].is_synced());
    }

    #[test]
    fn test_parse_rejects_bad_environment() {
        let json = r#"{ "clusters": [ { "name": "a", "environment": "DEV", "provider": "GKE" } ] }"#;
        assert!(Inventory::parse(json).is_err());
    }

    #[test]
    fn test_missing_file() {
        assert!(read_inventory(Path::new("/nonexistent/h4-console/inventory.json")).is_err());
    }

    #[test]
    fn test_sample_inventory_round_trips() {
        let inventory = sample_inventory();
        assert!(inventory.clusters.iter().any(|c| c.builtin));
        let json = serde_json::to_string(&inventory).unwrap();
        assert_eq!(Inventory::parse(&json).unwrap(), inventory);
    }
}
