mod application;
mod cluster;

pub use application::ApplicationSummary;
pub use cluster::{
    ClusterInfo, Environment, HealthStatus, MonitoringInfo, NodeStatus, Provider, ResourceQuota,
    VersionInfo,
};
