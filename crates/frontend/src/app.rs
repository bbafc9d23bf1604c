use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppRoutes;
use crate::shared::notifications::NotificationService;
use crate::shared::query::{provide_query_client, QueryClient};
use crate::system::auth::context::AuthProvider;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Provide the AppGlobalContext store to the whole app via context.
    provide_context(AppGlobalContext::new());

    provide_context(NotificationService::new());

    // One query cache for the whole application.
    provide_query_client(QueryClient::browser());

    view! {
        <AuthProvider>
            <AppRoutes />
        </AuthProvider>
    }
}
