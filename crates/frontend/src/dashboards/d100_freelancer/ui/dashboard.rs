use leptos::prelude::*;

use super::super::TABS;
use crate::layout::Shell;

#[component]
pub fn FreelancerDashboard() -> impl IntoView {
    view! { <Shell title_key="freelancer_title" tabs=TABS /> }
}
