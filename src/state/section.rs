// Section registry - the static menu the sidebar renders
use crate::error::{DashboardError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Section {
    Deploy,
    Security,
    ResourcePool,
    Network,
    Bill,
    Settings,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::Deploy,
        Section::Security,
        Section::ResourcePool,
        Section::Network,
        Section::Bill,
        Section::Settings,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Deploy => "Deploy",
            Self::Security => "Security",
            Self::ResourcePool => "ResourcePool",
            Self::Network => "Network",
            Self::Bill => "Bill",
            Self::Settings => "Settings",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Section {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|section| section.as_str() == s)
            .ok_or_else(|| DashboardError::UnknownSection(s.to_string()))
    }
}

impl TryFrom<String> for Section {
    type Error = DashboardError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<Section> for String {
    fn from(value: Section) -> Self {
        value.as_str().to_string()
    }
}

/// One sidebar entry: a section, its icon reference and its ordered sub-items.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub section: Section,
    pub icon: String,
    #[serde(default)]
    pub sub_items: Vec<String>,
}

impl MenuItem {
    pub fn new(section: Section, icon: &str, sub_items: &[&str]) -> Self {
        Self {
            section,
            icon: icon.to_string(),
            sub_items: sub_items.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn title(&self) -> &'static str {
        self.section.as_str()
    }

    pub fn first_sub_item(&self) -> Option<&str> {
        self.sub_items.first().map(String::as_str)
    }

    pub fn has_sub_item(&self, sub_item: &str) -> bool {
        self.sub_items.iter().any(|s| s == sub_item)
    }
}

/// Ordered, validated set of menu items.
///
/// Settings is rendered pinned to the sidebar footer and never owns sub-items.
/// Deploy must be present because breadcrumb "home" navigation lands there.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionRegistry {
    items: Vec<MenuItem>,
}

impl Default for SectionRegistry {
    fn default() -> Self {
        Self {
            items: vec![
                MenuItem::new(
                    Section::Deploy,
                    "workflow",
                    &["ArgoApplication", "ApplicationTemplate", "DestinationCluster"],
                ),
                MenuItem::new(Section::Security, "lock", &["ExternalSecrets"]),
                MenuItem::new(Section::ResourcePool, "cpu", &["Overview", "Nodes"]),
                MenuItem::new(Section::Network, "network", &["VirtualService"]),
                MenuItem::new(Section::Bill, "credit-card", &[]),
                MenuItem::new(Section::Settings, "settings", &[]),
            ],
        }
    }
}

impl SectionRegistry {
    pub fn new(items: Vec<MenuItem>) -> Result<Self> {
        let mut seen = HashSet::new();
        for item in &items {
            if !seen.insert(item.section) {
                return Err(DashboardError::InvalidRegistry(format!(
                    "section {} listed twice",
                    item.section
                )));
            }
            if item.section == Section::Settings && !item.sub_items.is_empty() {
                return Err(DashboardError::InvalidRegistry(
                    "Settings cannot have sub-items".to_string(),
                ));
            }
            let mut subs = HashSet::new();
            for sub in &item.sub_items {
                if sub.trim().is_empty() {
                    return Err(DashboardError::InvalidRegistry(format!(
                        "empty sub-item under {}",
                        item.section
                    )));
                }
                if !subs.insert(sub.as_str()) {
                    return Err(DashboardError::InvalidRegistry(format!(
                        "sub-item {sub} listed twice under {}",
                        item.section
                    )));
                }
            }
        }
        if !seen.contains(&Section::Deploy) {
            return Err(DashboardError::InvalidRegistry(
                "Deploy section is required".to_string(),
            ));
        }
        Ok(Self { items })
    }

    pub fn get(&self, section: Section) -> Result<&MenuItem> {
        self.items
            .iter()
            .find(|item| item.section == section)
            .ok_or_else(|| DashboardError::UnknownSection(section.to_string()))
    }

    /// Items rendered in the scrolling part of the sidebar.
    pub fn main_items(&self) -> impl Iterator<Item = &MenuItem> {
        self.items.iter().filter(|item| item.section != Section::Settings)
    }

    pub fn footer_item(&self) -> Option<&MenuItem> {
        self.items.iter().find(|item| item.section == Section::Settings)
    }
}
