use crate::state::{BreadcrumbTarget, EnvironmentFilter, ProviderFilter, Section};

#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    // Navigation
    SelectSection(Section),
    SelectSubSection(Section, String),
    SelectEntity(Option<String>),
    ToggleSidebar,
    BreadcrumbClicked(BreadcrumbTarget),

    // Cluster filters
    SearchChanged(String),
    EnvironmentFilterChanged(EnvironmentFilter),
    ProviderFilterChanged(ProviderFilter),
    ClearFilters,

    // Shell
    ShowQuota(String),
    CloseQuota,
    ReloadInventory,
    SignIn(String),
    Logout,
}

impl Message {
    /// Messages handled by the session state rather than the window shell.
    pub fn is_core(&self) -> bool {
        !matches!(
            self,
            Message::ShowQuota(_)
                | Message::CloseQuota
                | Message::ReloadInventory
                | Message::SignIn(_)
                | Message::Logout
        )
    }
}
