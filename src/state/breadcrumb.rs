// Breadcrumb trail - always derived from navigation state, never stored
use crate::error::Result;
use crate::state::navigation::NavigationState;
use crate::state::section::{Section, SectionRegistry};

pub const ROOT_LABEL: &str = "Dashboard";

/// Where a click on a breadcrumb item leads.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BreadcrumbTarget {
    /// Deploy, first Deploy sub-section, no drill-down.
    Home,
    Section(Section),
    SubSection(Section, String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BreadcrumbItem {
    pub label: String,
    pub is_active: bool,
    pub target: Option<BreadcrumbTarget>,
}

impl BreadcrumbItem {
    fn link(label: impl Into<String>, target: BreadcrumbTarget) -> Self {
        Self {
            label: label.into(),
            is_active: false,
            target: Some(target),
        }
    }
}

pub fn derive(state: &NavigationState, registry: &SectionRegistry) -> Result<Vec<BreadcrumbItem>> {
    let item = registry.get(state.active_section)?;
    let mut items = vec![BreadcrumbItem::link(ROOT_LABEL, BreadcrumbTarget::Home)];

    if state.active_section == Section::Deploy {
        items.push(BreadcrumbItem::link(item.title(), BreadcrumbTarget::Home));
        if let Some(sub) = &state.active_sub_section {
            items.push(BreadcrumbItem::link(
                sub.clone(),
                BreadcrumbTarget::SubSection(Section::Deploy, sub.clone()),
            ));
        }
        if let Some(entity) = &state.selected_entity_label {
            items.push(BreadcrumbItem {
                label: entity.clone(),
                is_active: false,
                target: None,
            });
        }
    } else {
        items.push(BreadcrumbItem::link(
            item.title(),
            BreadcrumbTarget::Section(state.active_section),
        ));
    }

    if let Some(last) = items.last_mut() {
        last.is_active = true;
    }
    Ok(items)
}

#[cfg(test)]
pub fn labels(items: &[BreadcrumbItem]) -> Vec<&str> {
    items.iter().map(|item| item.label.as_str()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::section::MenuItem;

    fn deploy_state(sub: &str) -> NavigationState {
        NavigationState {
            active_section: Section::Deploy,
            active_sub_section: Some(sub.to_string()),
            ..NavigationState::default()
        }
    }

    #[test]
    fn test_deploy_trail() {
        let registry = SectionRegistry::default();
        let items = derive(&deploy_state("DestinationCluster"), &registry).unwrap();
        assert_eq!(labels(&items), ["Dashboard", "Deploy", "DestinationCluster"]);
        assert_eq!(
            items.iter().map(|i| i.is_active).collect::<Vec<_>>(),
            [false, false, true]
        );
        assert_eq!(items[0].target, Some(BreadcrumbTarget::Home));
        assert_eq!(
            items[2].target,
            Some(BreadcrumbTarget::SubSection(
                Section::Deploy,
                "DestinationCluster".to_string()
            ))
        );
    }

    #[test]
    fn test_entity_is_trailing_and_inert() {
        let registry = SectionRegistry::default();
        let mut state = deploy_state("ArgoApplication");
        state.selected_entity_label = Some("my-app".to_string());

        let items = derive(&state, &registry).unwrap();
        assert_eq!(labels(&items), ["Dashboard", "Deploy", "ArgoApplication", "my-app"]);
        let last = items.last().unwrap();
        assert!(last.is_active);
        assert!(last.target.is_none());
    }

    #[test]
    fn test_other_sections_single_item() {
        let registry = SectionRegistry::default();
        for section in [
            Section::Security,
            Section::ResourcePool,
            Section::Network,
            Section::Bill,
            Section::Settings,
        ] {
            let state = NavigationState {
                active_section: section,
                active_sub_section: None,
                // Entity labels only show under Deploy
                selected_entity_label: Some("stale".to_string()),
                ..NavigationState::default()
            };
            let items = derive(&state, &registry).unwrap();
            assert_eq!(labels(&items), ["Dashboard", section.as_str()]);
            assert_eq!(items[1].target, Some(BreadcrumbTarget::Section(section)));
        }
    }

    #[test]
    fn test_section_missing_from_registry() {
        let registry =
            SectionRegistry::new(vec![MenuItem::new(Section::Deploy, "workflow", &["A"])]).unwrap();
        let state = NavigationState {
            active_section: Section::Bill,
            active_sub_section: None,
            ..NavigationState::default()
        };
        assert!(derive(&state, &registry).is_err());
    }
}
