pub mod global_context;
pub mod header;
pub mod tabs;

use leptos::prelude::*;

use crate::shared::notifications::NotificationHost;
use header::Header;
use tabs::ModuleTabs;

/// Dashboard frame: header, module tabs and the notification stack.
///
/// ```text
/// +------------------------------------------+
/// |  Header (title, user, language)           |
/// +------------------------------------------+
/// |  Tab bar                                  |
/// |  Selected module                          |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell(title_key: &'static str, tabs: &'static [&'static str]) -> impl IntoView {
    view! {
        <div class="app-layout">
            <Header title_key=title_key />
            <div class="app-main">
                <ModuleTabs keys=tabs />
            </div>
            <NotificationHost />
        </div>
    }
}
