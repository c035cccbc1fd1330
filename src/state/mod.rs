pub mod breadcrumb;
pub mod dashboard;
pub mod filter;
pub mod navigation;
pub mod section;

pub use breadcrumb::BreadcrumbTarget;
pub use dashboard::DashboardSession;
pub use filter::{EnvironmentFilter, ProviderFilter};
pub use section::{MenuItem, Section, SectionRegistry};
