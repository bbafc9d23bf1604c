use contracts::domain::a201_platform_user::aggregate::PlatformUser;
use contracts::shared::indicators::{IndicatorStatus, ValueFormat};
use contracts::shared::list_query::ListQuery;
use leptos::prelude::*;
use thaw::*;

use crate::domain::a201_platform_user::api;
use crate::domain::a201_platform_user::model::{self, ACTIVE, ADMINS, INACTIVE, TEACHERS};
use crate::shared::components::confirm::confirm_action;
use crate::shared::components::filter_panel::{translated_options, FilterBar};
use crate::shared::components::list_state::ListStateView;
use crate::shared::components::stat_card::{metric, StatCard};
use crate::shared::date_utils::format_datetime;
use crate::shared::i18n::Texts;
use crate::shared::icons::icon;
use crate::shared::list_pipeline::{
    filter_entities, list_view_state, FilterContext, FilterState, Summarize, TOTAL,
};
use crate::shared::list_utils::{highlight_matches, SortState};
use crate::shared::query::{use_entity_list, use_mutation, FetchOptions, MutationMessages};
use crate::system::auth::context::use_signed_in;

#[component]
#[allow(non_snake_case)]
pub fn PlatformUserList() -> impl IntoView {
    let tx = Texts::of("users");
    let users = use_entity_list::<PlatformUser>(
        api::USERS,
        Signal::derive(ListQuery::all),
        FetchOptions::enabled_when(use_signed_in()),
    );
    let mutation = use_mutation();

    let filter = RwSignal::new(FilterState::default());
    let context = StoredValue::new(FilterContext::now());
    let sort = SortState::new("");

    let visible = Memo::new(move |_| {
        let mut rows = users.data.with(|items| {
            filter.with(|f| context.with_value(|ctx| filter_entities(items, f, ctx)))
        });
        sort.apply(&mut rows);
        rows
    });
    let stats = Memo::new(move |_| {
        users
            .data
            .with(|items| context.with_value(|ctx| PlatformUser::summarize(items, ctx)))
    });
    let state = Signal::derive(move || {
        list_view_state(
            users.is_loading.get(),
            users.error.get().as_ref(),
            users.data.with(Vec::len),
            visible.with(Vec::len),
        )
    });

    let toggle = move |user: &PlatformUser| {
        mutation.dispatch(
            api::toggle_status(user),
            MutationMessages::new(tx.get("status_updated"), tx.get("update_failed")),
            |_| {},
        );
    };

    let remove = move |user: &PlatformUser| {
        let question = tx.get("confirm_delete").replace("{name}", &user.full_name());
        if !confirm_action(&question) {
            return;
        }
        mutation.dispatch(
            api::delete_user(user.id),
            MutationMessages::new(tx.get("deleted"), tx.get("delete_failed")),
            |_| {},
        );
    };

    let sortable_header = move |field: &'static str| {
        view! {
            <span class="sortable-header" on:click=move |_| sort.toggle(field)>
                {move || tx.get(field)}
                {move || sort.indicator(field)}
            </span>
        }
    };

    view! {
        <div class="module-view">
            <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center>
                <h2 class="module-view__title">
                    {move || tx.get("title")}
                    <span class="badge badge--primary">{move || visible.with(Vec::len)}</span>
                </h2>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| users.refresh()
                >
                    {icon("refresh")}
                    " "
                    {move || tx.common("refresh")}
                </Button>
            </Flex>

            <div class="stat-grid">
                <StatCard
                    label=tx.signal("total")
                    icon_name="users"
                    value=metric(stats, TOTAL)
                    format=ValueFormat::Integer
                />
                <StatCard
                    label=tx.signal("active")
                    icon_name="check"
                    value=metric(stats, ACTIVE)
                    format=ValueFormat::Integer
                    status=Signal::derive(|| IndicatorStatus::Good)
                />
                <StatCard
                    label=tx.signal("inactive")
                    icon_name="x"
                    value=metric(stats, INACTIVE)
                    format=ValueFormat::Integer
                />
                <StatCard
                    label=tx.signal("admins")
                    icon_name="shield"
                    value=metric(stats, ADMINS)
                    format=ValueFormat::Integer
                />
                <StatCard
                    label=tx.signal("teachers")
                    icon_name="book"
                    value=metric(stats, TEACHERS)
                    format=ValueFormat::Integer
                />
            </div>

            <FilterBar
                filter=filter
                options=translated_options(tx, "role_", &model::ROLES)
                search_placeholder=tx.signal("search_placeholder")
            />

            <ListStateView state=state empty_text=tx.signal("empty")>
                <Table>
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell resizable=true min_width=220.0>
                                {sortable_header("user")}
                            </TableHeaderCell>
                            <TableHeaderCell min_width=120.0>{sortable_header("role")}</TableHeaderCell>
                            <TableHeaderCell resizable=true min_width=160.0>{move || tx.get("school")}</TableHeaderCell>
                            <TableHeaderCell min_width=100.0>{move || tx.get("status")}</TableHeaderCell>
                            <TableHeaderCell min_width=150.0>{sortable_header("last_login")}</TableHeaderCell>
                            <TableHeaderCell min_width=100.0>{move || tx.common("actions")}</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {move || {
                            let needle = filter.with(|f| f.search_term.clone());
                            visible.get().into_iter().map(|user| {
                                let toggle_request = api::toggle_status(&user);
                                let delete_request = api::delete_user(user.id);
                                let name = highlight_matches(&user.full_name(), &needle);
                                let email = highlight_matches(&user.email, &needle);
                                let role = tx.get(&format!("role_{}", user.role));
                                let role_badge = format!("badge badge--role-{}", user.role.to_lowercase());
                                let school = user.school_name.clone().unwrap_or_else(|| "-".to_string());
                                let status_label = tx.get(&format!("status_{}", user.status));
                                let badge = format!("badge badge--{}", user.status);
                                let last_login = if user.last_login.is_empty() {
                                    tx.get("never")
                                } else {
                                    format_datetime(&user.last_login)
                                };
                                let (toggle_icon, toggle_title) = if user.is_active() {
                                    ("lock", tx.get("deactivate"))
                                } else {
                                    ("check", tx.get("activate"))
                                };
                                let target = user.clone();
                                view! {
                                    <TableRow>
                                        <TableCell>
                                            <TableCellLayout>
                                                <strong>{name}</strong>
                                                <div class="cell-secondary">{email}</div>
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>
                                                <span class=role_badge>{role}</span>
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{school}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>
                                                <span class=badge>{status_label}</span>
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{last_login}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>
                                                <span title=toggle_title>
                                                    <Button
                                                        size=ButtonSize::Small
                                                        appearance=ButtonAppearance::Subtle
                                                        disabled=Signal::derive(move || {
                                                            mutation.is_pending_for(&toggle_request)
                                                        })
                                                        on_click=move |_| toggle(&target)
                                                    >
                                                        {icon(toggle_icon)}
                                                    </Button>
                                                </span>
                                                <Button
                                                    size=ButtonSize::Small
                                                    appearance=ButtonAppearance::Subtle
                                                    disabled=Signal::derive(move || {
                                                        mutation.is_pending_for(&delete_request)
                                                    })
                                                    on_click=move |_| remove(&user)
                                                >
                                                    {icon("delete")}
                                                </Button>
                                            </TableCellLayout>
                                        </TableCell>
                                    </TableRow>
                                }
                            }).collect_view()
                        }}
                    </TableBody>
                </Table>
            </ListStateView>
        </div>
    }
}
