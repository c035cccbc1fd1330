// Dashboard session - the navigation and filter state of one signed-in session
use crate::error::Result;
use crate::message::Message;
use crate::model::ClusterInfo;
use crate::state::breadcrumb::BreadcrumbItem;
use crate::state::filter::ClusterFilterStore;
use crate::state::navigation::NavigationController;
use crate::state::section::SectionRegistry;

/// Created when the dashboard mounts and dropped on logout.
///
/// Several sessions can coexist (one per window, or per test) because nothing
/// here is global.
pub struct DashboardSession {
    pub navigation: NavigationController,
    pub filters: ClusterFilterStore,
}

impl DashboardSession {
    pub fn new(registry: SectionRegistry, start_collapsed: bool) -> Self {
        Self {
            navigation: NavigationController::new(registry, start_collapsed),
            filters: ClusterFilterStore::new(),
        }
    }

    /// Apply one user action. Shell-level messages are ignored here.
    pub fn dispatch(&mut self, message: Message) -> Result<()> {
        match message {
            Message::SelectSection(section) => self.navigation.select_section(section),
            Message::SelectSubSection(section, sub_item) => {
                self.navigation.select_sub_section(section, &sub_item)
            }
            Message::SelectEntity(label) => {
                self.navigation.set_selected_entity(label);
                Ok(())
            }
            Message::ToggleSidebar => {
                self.navigation.toggle_collapsed();
                Ok(())
            }
            Message::BreadcrumbClicked(target) => self.navigation.navigate(&target),
            Message::SearchChanged(text) => {
                self.filters.set_search_term(text);
                Ok(())
            }
            Message::EnvironmentFilterChanged(filter) => {
                self.filters.set_environment_filter(filter);
                Ok(())
            }
            Message::ProviderFilterChanged(filter) => {
                self.filters.set_provider_filter(filter);
                Ok(())
            }
            Message::ClearFilters => {
                self.filters.reset();
                Ok(())
            }
            _ => Ok(()),
        }
    }

    pub fn breadcrumb(&self) -> Result<Vec<BreadcrumbItem>> {
        self.navigation.breadcrumb()
    }

    pub fn visible_clusters<'a>(&self, clusters: &'a [ClusterInfo]) -> Vec<&'a ClusterInfo> {
        self.filters.filtered_clusters(clusters)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Environment, Provider};
    use crate::state::breadcrumb::labels;
    use crate::state::filter::EnvironmentFilter;
    use crate::state::section::Section;

    #[test]
    fn test_dispatch_drives_breadcrumb() {
        let mut session = DashboardSession::new(SectionRegistry::default(), false);
        session
            .dispatch(Message::SelectSubSection(
                Section::Deploy,
                "ArgoApplication".to_string(),
            ))
            .unwrap();
        session
            .dispatch(Message::SelectEntity(Some("guestbook".to_string())))
            .unwrap();

        let trail = session.breadcrumb().unwrap();
        assert_eq!(labels(&trail), ["Dashboard", "Deploy", "ArgoApplication", "guestbook"]);
    }

    #[test]
    fn test_dispatch_rejects_invalid_sub_section() {
        let mut session = DashboardSession::new(SectionRegistry::default(), false);
        let before = session.navigation.state().clone();
        assert!(session
            .dispatch(Message::SelectSubSection(Section::Deploy, "Nope".to_string()))
            .is_err());
        assert_eq!(session.navigation.state(), &before);
    }

    #[test]
    fn test_sessions_are_independent() {
        let clusters = vec![
            ClusterInfo::new("sit-a", Environment::Sit, Provider::Gke),
            ClusterInfo::new("prd-b", Environment::Prd, Provider::Eks),
        ];
        let mut first = DashboardSession::new(SectionRegistry::default(), false);
        let second = DashboardSession::new(SectionRegistry::default(), true);

        first
            .dispatch(Message::EnvironmentFilterChanged(EnvironmentFilter::Only(
                Environment::Prd,
            )))
            .unwrap();
        assert_eq!(first.visible_clusters(&clusters).len(), 1);
        assert_eq!(second.visible_clusters(&clusters).len(), 2);
        assert!(second.navigation.state().sidebar_collapsed);

        first.dispatch(Message::ClearFilters).unwrap();
        assert_eq!(first.visible_clusters(&clusters).len(), 2);
    }
}
