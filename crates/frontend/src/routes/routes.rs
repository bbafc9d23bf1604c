use contracts::system::auth::UserRole;
use leptos::prelude::*;

use crate::dashboards::{FreelancerDashboard, SiteAdminDashboard};
use crate::layout::global_context::AppGlobalContext;
use crate::system::auth::context::use_auth;
use crate::system::auth::guard::RequireRole;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardKind {
    Freelancer,
    SiteAdmin,
}

/// Dashboard shown to a role; `None` means access denied.
pub fn dashboard_for(role: UserRole) -> Option<DashboardKind> {
    match role {
        UserRole::Freelancer => Some(DashboardKind::Freelancer),
        r if r.is_site_admin() => Some(DashboardKind::SiteAdmin),
        _ => None,
    }
}

fn has_dashboard(role: UserRole) -> bool {
    dashboard_for(role).is_some()
}

#[component]
fn MainLayout() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");
    let auth_state = use_auth();

    // Runs once when the layout is created.
    ctx.init_router_integration();

    move || match auth_state.with(|s| s.role()).and_then(dashboard_for) {
        Some(DashboardKind::Freelancer) => view! { <FreelancerDashboard /> }.into_any(),
        Some(DashboardKind::SiteAdmin) => view! { <SiteAdminDashboard /> }.into_any(),
        None => view! { <></> }.into_any(),
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <RequireRole allowed=has_dashboard>
            <MainLayout />
        </RequireRole>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dashboard_by_role() {
        assert_eq!(dashboard_for(UserRole::Freelancer), Some(DashboardKind::Freelancer));
        assert_eq!(dashboard_for(UserRole::SiteAdmin), Some(DashboardKind::SiteAdmin));
        assert_eq!(dashboard_for(UserRole::Admin), Some(DashboardKind::SiteAdmin));
        assert_eq!(dashboard_for(UserRole::Teacher), None);
        assert_eq!(dashboard_for(UserRole::Unknown), None);
    }
}
