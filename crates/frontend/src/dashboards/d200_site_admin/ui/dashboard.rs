use leptos::prelude::*;

use super::super::TABS;
use crate::layout::Shell;

#[component]
pub fn SiteAdminDashboard() -> impl IntoView {
    view! { <Shell title_key="site_admin_title" tabs=TABS /> }
}
