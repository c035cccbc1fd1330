// Navigation state - active section, sub-section, menu expansion and drill-down
use crate::error::{DashboardError, Result};
use crate::state::breadcrumb::{self, BreadcrumbItem, BreadcrumbTarget};
use crate::state::section::{Section, SectionRegistry};
use std::collections::BTreeSet;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavigationState {
    pub active_section: Section,
    pub active_sub_section: Option<String>,
    pub expanded_sections: BTreeSet<Section>,
    pub sidebar_collapsed: bool,
    pub selected_entity_label: Option<String>,
}

impl Default for NavigationState {
    fn default() -> Self {
        Self {
            active_section: Section::Deploy,
            active_sub_section: None,
            expanded_sections: BTreeSet::from([Section::Deploy]),
            sidebar_collapsed: false,
            selected_entity_label: None,
        }
    }
}

/// Owns the single authoritative [`NavigationState`] of a dashboard session.
///
/// Every mutation goes through a method here so that the sidebar highlight,
/// the content panel and the breadcrumb all read the same state. Rejected
/// calls return an error and leave the state untouched.
pub struct NavigationController {
    registry: SectionRegistry,
    state: NavigationState,
}

impl NavigationController {
    pub fn new(registry: SectionRegistry, start_collapsed: bool) -> Self {
        let active_sub_section = registry
            .get(Section::Deploy)
            .ok()
            .and_then(|item| item.first_sub_item())
            .map(str::to_string);

        Self {
            registry,
            state: NavigationState {
                active_sub_section,
                sidebar_collapsed: start_collapsed,
                ..NavigationState::default()
            },
        }
    }

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    pub fn registry(&self) -> &SectionRegistry {
        &self.registry
    }

    /// Handle a click on a top-level menu item.
    pub fn select_section(&mut self, section: Section) -> Result<()> {
        let item = self.registry.get(section)?;
        let first = item.first_sub_item().map(str::to_string);

        if first.is_none() {
            self.state.active_sub_section = None;
        } else if !self.state.sidebar_collapsed {
            if !self.state.expanded_sections.remove(&section) {
                self.state.expanded_sections.insert(section);
            }
            self.state.active_sub_section = first;
        } else {
            // Collapsed: expansion untouched. A kept sub-section must belong to the
            // active section, so a foreign one falls back to the first sub-item.
            let keep = self
                .state
                .active_sub_section
                .as_deref()
                .is_some_and(|sub| item.has_sub_item(sub));
            if !keep {
                self.state.active_sub_section = first;
            }
        }

        self.state.active_section = section;
        self.state.selected_entity_label = None;
        tracing::debug!(
            section = %section,
            sub_section = ?self.state.active_sub_section,
            "selected section"
        );
        Ok(())
    }

    pub fn select_sub_section(&mut self, section: Section, sub_item: &str) -> Result<()> {
        let item = self.registry.get(section)?;
        if !item.has_sub_item(sub_item) {
            return Err(DashboardError::InvalidSubSection {
                section: section.to_string(),
                sub_item: sub_item.to_string(),
            });
        }

        self.state.active_section = section;
        self.state.active_sub_section = Some(sub_item.to_string());
        self.state.selected_entity_label = None;
        tracing::debug!(section = %section, sub_section = sub_item, "selected sub-section");
        Ok(())
    }

    /// Set or clear the drill-down label.
    ///
    /// Accepted in any section; it only shows in the breadcrumb while Deploy
    /// is active.
    pub fn set_selected_entity(&mut self, label: Option<String>) {
        if self.state.active_section != Section::Deploy && label.is_some() {
            tracing::debug!(section = %self.state.active_section, "entity selected outside Deploy");
        }
        self.state.selected_entity_label = label;
    }

    pub fn toggle_collapsed(&mut self) {
        self.state.sidebar_collapsed = !self.state.sidebar_collapsed;
        tracing::debug!(collapsed = self.state.sidebar_collapsed, "toggled sidebar");
    }

    /// Whether a section's sub-items are visible. Always false while collapsed.
    pub fn is_expanded(&self, section: Section) -> bool {
        !self.state.sidebar_collapsed && self.state.expanded_sections.contains(&section)
    }

    pub fn breadcrumb(&self) -> Result<Vec<BreadcrumbItem>> {
        breadcrumb::derive(&self.state, &self.registry)
    }

    /// Apply a breadcrumb click.
    pub fn navigate(&mut self, target: &BreadcrumbTarget) -> Result<()> {
        match target {
            BreadcrumbTarget::Home => {
                let first = self
                    .registry
                    .get(Section::Deploy)?
                    .first_sub_item()
                    .map(str::to_string);
                self.state.active_section = Section::Deploy;
                self.state.active_sub_section = first;
                self.state.selected_entity_label = None;
                tracing::debug!("navigated home");
                Ok(())
            }
            BreadcrumbTarget::Section(section) => {
                let item = self.registry.get(*section)?;
                if *section != self.state.active_section {
                    self.state.active_sub_section = item.first_sub_item().map(str::to_string);
                    self.state.selected_entity_label = None;
                }
                self.state.active_section = *section;
                Ok(())
            }
            BreadcrumbTarget::SubSection(section, sub) => self.select_sub_section(*section, sub),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::breadcrumb::labels;
    use crate::state::section::MenuItem;

    fn controller() -> NavigationController {
        NavigationController::new(SectionRegistry::default(), false)
    }

    fn trail(nav: &NavigationController) -> Vec<String> {
        labels(&nav.breadcrumb().unwrap())
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn test_initial_state() {
        let nav = controller();
        let state = nav.state();
        assert_eq!(state.active_section, Section::Deploy);
        assert_eq!(state.active_sub_section.as_deref(), Some("ArgoApplication"));
        assert!(state.expanded_sections.contains(&Section::Deploy));
        assert!(!state.sidebar_collapsed);
        assert_eq!(trail(&nav), ["Dashboard", "Deploy", "ArgoApplication"]);
    }

    #[test]
    fn test_select_section_picks_first_sub_item_and_toggles() {
        for section in [Section::Security, Section::ResourcePool, Section::Network] {
            let mut nav = controller();
            let first = nav.registry().get(section).unwrap().sub_items[0].clone();

            nav.select_section(section).unwrap();
            assert_eq!(nav.state().active_section, section);
            assert_eq!(nav.state().active_sub_section.as_ref(), Some(&first));
            assert!(nav.state().expanded_sections.contains(&section));

            // Second click collapses the menu but keeps the selection
            nav.select_section(section).unwrap();
            assert!(!nav.state().expanded_sections.contains(&section));
            assert_eq!(nav.state().active_sub_section.as_ref(), Some(&first));
        }
    }

    #[test]
    fn test_deploy_click_toggles_initial_expansion() {
        let mut nav = controller();
        nav.select_section(Section::Deploy).unwrap();
        assert!(!nav.state().expanded_sections.contains(&Section::Deploy));
    }

    #[test]
    fn test_select_section_without_sub_items() {
        for section in [Section::Bill, Section::Settings] {
            let mut nav = controller();
            nav.select_section(section).unwrap();
            assert_eq!(nav.state().active_section, section);
            assert_eq!(nav.state().active_sub_section, None);
            assert!(!nav.state().expanded_sections.contains(&section));
        }
    }

    #[test]
    fn test_application_template_breadcrumb() {
        let mut nav = controller();
        nav.select_section(Section::Deploy).unwrap();
        nav.select_sub_section(Section::Deploy, "ApplicationTemplate").unwrap();
        assert_eq!(trail(&nav), ["Dashboard", "Deploy", "ApplicationTemplate"]);
    }

    #[test]
    fn test_selected_entity_cleared_by_section_click() {
        let mut nav = controller();
        nav.select_sub_section(Section::Deploy, "ArgoApplication").unwrap();
        nav.set_selected_entity(Some("my-app".to_string()));
        assert_eq!(trail(&nav), ["Dashboard", "Deploy", "ArgoApplication", "my-app"]);

        nav.select_section(Section::Deploy).unwrap();
        assert_eq!(trail(&nav), ["Dashboard", "Deploy", "ArgoApplication"]);
        assert!(nav.state().selected_entity_label.is_none());
    }

    #[test]
    fn test_reselect_section_without_sub_items_clears_entity() {
        let mut nav = controller();
        nav.select_section(Section::Bill).unwrap();
        nav.set_selected_entity(Some("invoice-42".to_string()));

        nav.select_section(Section::Bill).unwrap();
        assert_eq!(nav.state().active_section, Section::Bill);
        assert_eq!(nav.state().active_sub_section, None);
        assert!(nav.state().selected_entity_label.is_none());

        // Same while collapsed
        nav.toggle_collapsed();
        let expanded = nav.state().expanded_sections.clone();
        nav.set_selected_entity(Some("invoice-43".to_string()));
        nav.select_section(Section::Bill).unwrap();
        assert_eq!(nav.state().active_sub_section, None);
        assert!(nav.state().selected_entity_label.is_none());
        assert_eq!(nav.state().expanded_sections, expanded);
    }

    #[test]
    fn test_selected_entity_cleared_by_sub_section_click() {
        let mut nav = controller();
        nav.set_selected_entity(Some("my-app".to_string()));
        nav.select_sub_section(Section::Deploy, "DestinationCluster").unwrap();
        assert!(nav.state().selected_entity_label.is_none());
    }

    #[test]
    fn test_entity_outside_deploy_is_kept_but_hidden() {
        let mut nav = controller();
        nav.select_section(Section::Bill).unwrap();
        nav.set_selected_entity(Some("my-app".to_string()));
        assert_eq!(nav.state().selected_entity_label.as_deref(), Some("my-app"));
        assert_eq!(trail(&nav), ["Dashboard", "Bill"]);
    }

    #[test]
    fn test_invalid_sub_section_leaves_state_unchanged() {
        let mut nav = controller();
        nav.set_selected_entity(Some("my-app".to_string()));
        let before = nav.state().clone();

        let err = nav
            .select_sub_section(Section::Deploy, "NotARealSubItem")
            .unwrap_err();
        assert!(matches!(err, DashboardError::InvalidSubSection { .. }));
        assert!(err.is_rejected_input());
        assert_eq!(nav.state(), &before);

        // Sub-items of another section are rejected too
        assert!(nav.select_sub_section(Section::Network, "Nodes").is_err());
        assert_eq!(nav.state(), &before);
    }

    #[test]
    fn test_toggle_collapsed_round_trip() {
        let mut nav = controller();
        nav.select_section(Section::Security).unwrap();
        let before = nav.state().clone();

        nav.toggle_collapsed();
        assert!(nav.state().sidebar_collapsed);
        assert_eq!(nav.state().expanded_sections, before.expanded_sections);
        assert!(!nav.is_expanded(Section::Security));

        nav.toggle_collapsed();
        assert_eq!(nav.state(), &before);
        assert!(nav.is_expanded(Section::Security));
    }

    #[test]
    fn test_select_while_collapsed_keeps_expansion() {
        let mut nav = controller();
        nav.toggle_collapsed();
        let expanded = nav.state().expanded_sections.clone();

        nav.select_section(Section::Deploy).unwrap();
        assert_eq!(nav.state().expanded_sections, expanded);
        assert_eq!(nav.state().active_sub_section.as_deref(), Some("ArgoApplication"));

        nav.select_sub_section(Section::Deploy, "DestinationCluster").unwrap();
        nav.select_section(Section::Deploy).unwrap();
        assert_eq!(
            nav.state().active_sub_section.as_deref(),
            Some("DestinationCluster")
        );

        // A sub-section from another section never leaks across
        nav.select_section(Section::ResourcePool).unwrap();
        assert_eq!(nav.state().active_sub_section.as_deref(), Some("Overview"));
        assert_eq!(nav.state().expanded_sections, expanded);
    }

    #[test]
    fn test_unknown_section_rejected() {
        let registry =
            SectionRegistry::new(vec![MenuItem::new(Section::Deploy, "workflow", &["A", "B"])])
                .unwrap();
        let mut nav = NavigationController::new(registry, false);
        let before = nav.state().clone();
        assert!(matches!(
            nav.select_section(Section::Network),
            Err(DashboardError::UnknownSection(_))
        ));
        assert_eq!(nav.state(), &before);
    }

    #[test]
    fn test_breadcrumb_navigation() {
        let mut nav = controller();
        nav.select_sub_section(Section::Deploy, "DestinationCluster").unwrap();
        nav.set_selected_entity(Some("my-app".to_string()));

        let items = nav.breadcrumb().unwrap();
        let target = items[2].target.clone().unwrap();
        nav.navigate(&target).unwrap();
        assert_eq!(trail(&nav), ["Dashboard", "Deploy", "DestinationCluster"]);

        nav.select_section(Section::Network).unwrap();
        let expanded = nav.state().expanded_sections.clone();
        let home = nav.breadcrumb().unwrap()[0].target.clone().unwrap();
        nav.navigate(&home).unwrap();
        assert_eq!(trail(&nav), ["Dashboard", "Deploy", "ArgoApplication"]);
        assert_eq!(nav.state().expanded_sections, expanded);
    }

    #[test]
    fn test_breadcrumb_section_target_is_stable() {
        let mut nav = controller();
        nav.select_section(Section::ResourcePool).unwrap();
        nav.select_sub_section(Section::ResourcePool, "Nodes").unwrap();
        let before = nav.state().clone();

        nav.navigate(&BreadcrumbTarget::Section(Section::ResourcePool))
            .unwrap();
        assert_eq!(nav.state(), &before);
    }
}
