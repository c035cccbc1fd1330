// Cluster filter state - search term plus environment and provider criteria
use crate::error::DashboardError;
use crate::model::{ClusterInfo, Environment, Provider};
use std::fmt;
use std::str::FromStr;

pub const ALL_ENVIRONMENTS: &str = "All Environments";
pub const ALL_PROVIDERS: &str = "All Providers";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EnvironmentFilter {
    #[default]
    All,
    Only(Environment),
}

impl EnvironmentFilter {
    /// Options in the order the filter dropdown lists them.
    pub fn options() -> impl Iterator<Item = EnvironmentFilter> {
        std::iter::once(Self::All).chain(Environment::ALL.into_iter().map(Self::Only))
    }

    pub fn matches(&self, environment: Environment) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => *wanted == environment,
        }
    }
}

impl fmt::Display for EnvironmentFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str(ALL_ENVIRONMENTS),
            Self::Only(env) => write!(f, "{env}"),
        }
    }
}

impl FromStr for EnvironmentFilter {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Same leniency as the environment names themselves
        if s.trim().eq_ignore_ascii_case(ALL_ENVIRONMENTS) {
            Ok(Self::All)
        } else {
            s.parse().map(Self::Only)
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ProviderFilter {
    #[default]
    All,
    Only(Provider),
}

impl ProviderFilter {
    pub fn options() -> impl Iterator<Item = ProviderFilter> {
        std::iter::once(Self::All).chain(Provider::ALL.into_iter().map(Self::Only))
    }

    pub fn matches(&self, provider: Provider) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => *wanted == provider,
        }
    }
}

impl fmt::Display for ProviderFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str(ALL_PROVIDERS),
            Self::Only(provider) => write!(f, "{provider}"),
        }
    }
}

impl FromStr for ProviderFilter {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case(ALL_PROVIDERS) {
            Ok(Self::All)
        } else {
            s.parse().map(Self::Only)
        }
    }
}

/// Filter criteria for the destination cluster list.
///
/// The three predicates are independent and combined with AND, so each
/// control can be reset without touching the others.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClusterFilterStore {
    search_term: String,
    environment: EnvironmentFilter,
    provider: ProviderFilter,
}

impl ClusterFilterStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn environment(&self) -> EnvironmentFilter {
        self.environment
    }

    pub fn provider(&self) -> ProviderFilter {
        self.provider
    }

    pub fn set_search_term(&mut self, text: impl Into<String>) {
        self.search_term = text.into();
    }

    pub fn set_environment_filter(&mut self, filter: EnvironmentFilter) {
        tracing::debug!(environment = %filter, "environment filter changed");
        self.environment = filter;
    }

    pub fn set_provider_filter(&mut self, filter: ProviderFilter) {
        tracing::debug!(provider = %filter, "provider filter changed");
        self.provider = filter;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_filtering(&self) -> bool {
        !self.search_term.is_empty()
            || self.environment != EnvironmentFilter::All
            || self.provider != ProviderFilter::All
    }

    pub fn matches(&self, cluster: &ClusterInfo) -> bool {
        self.environment.matches(cluster.environment)
            && self.provider.matches(cluster.provider)
            && self.matches_search(cluster)
    }

    fn matches_search(&self, cluster: &ClusterInfo) -> bool {
        if self.search_term.is_empty() {
            return true;
        }
        let needle = self.search_term.to_lowercase();
        cluster.name.to_lowercase().contains(&needle)
            || cluster.environment.as_str().to_lowercase().contains(&needle)
    }

    /// Clusters passing every active predicate, in their original order.
    pub fn filtered_clusters<'a>(&self, clusters: &'a [ClusterInfo]) -> Vec<&'a ClusterInfo> {
        clusters.iter().filter(|cluster| self.matches(cluster)).collect()
    }
}
