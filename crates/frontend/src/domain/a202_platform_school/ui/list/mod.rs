use contracts::domain::a202_platform_school::aggregate::PlatformSchool;
use contracts::shared::indicators::{IndicatorStatus, ValueFormat};
use contracts::shared::list_query::ListQuery;
use leptos::prelude::*;
use thaw::*;

use crate::domain::a202_platform_school::api;
use crate::domain::a202_platform_school::model::{
    self, ACTIVE_SUBSCRIPTIONS, MONTHLY_REVENUE, TOTAL_STUDENTS,
};
use crate::shared::components::confirm::confirm_action;
use crate::shared::components::filter_panel::{translated_options, FilterBar};
use crate::shared::components::list_state::ListStateView;
use crate::shared::components::stat_card::{format_value, metric, StatCard};
use crate::shared::date_utils::format_date;
use crate::shared::i18n::Texts;
use crate::shared::icons::icon;
use crate::shared::list_pipeline::{
    filter_entities, list_view_state, FilterContext, FilterState, Summarize, TOTAL,
};
use crate::shared::query::{use_entity_list, use_mutation, FetchOptions, MutationMessages};
use crate::system::auth::context::use_signed_in;

#[component]
#[allow(non_snake_case)]
pub fn PlatformSchoolList() -> impl IntoView {
    let tx = Texts::of("schools");
    let schools = use_entity_list::<PlatformSchool>(
        api::SCHOOLS,
        Signal::derive(ListQuery::all),
        FetchOptions::enabled_when(use_signed_in()),
    );
    let mutation = use_mutation();

    let filter = RwSignal::new(FilterState::default());
    let context = StoredValue::new(FilterContext::now());

    let visible = Memo::new(move |_| {
        schools.data.with(|items| {
            filter.with(|f| context.with_value(|ctx| filter_entities(items, f, ctx)))
        })
    });
    let stats = Memo::new(move |_| {
        schools
            .data
            .with(|items| context.with_value(|ctx| PlatformSchool::summarize(items, ctx)))
    });
    let state = Signal::derive(move || {
        list_view_state(
            schools.is_loading.get(),
            schools.error.get().as_ref(),
            schools.data.with(Vec::len),
            visible.with(Vec::len),
        )
    });
    let subscription_options = translated_options(tx, "subscription_", &model::SUBSCRIPTIONS);

    let change_subscription = move |id: i64, status: String| {
        mutation.dispatch(
            api::update_subscription(id, &status),
            MutationMessages::new(tx.get("subscription_updated"), tx.get("update_failed")),
            |_| {},
        );
    };

    let remove = move |id: i64, name: &str| {
        if !confirm_action(&tx.get("confirm_delete").replace("{name}", name)) {
            return;
        }
        mutation.dispatch(
            api::delete_school(id),
            MutationMessages::new(tx.get("deleted"), tx.get("delete_failed")),
            |_| {},
        );
    };

    view! {
        <div class="module-view">
            <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center>
                <h2 class="module-view__title">{move || tx.get("title")}</h2>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| schools.refresh()
                >
                    {icon("refresh")}
                    " "
                    {move || tx.common("refresh")}
                </Button>
            </Flex>

            <div class="stat-grid">
                <StatCard
                    label=tx.signal("total")
                    icon_name="school"
                    value=metric(stats, TOTAL)
                    format=ValueFormat::Integer
                />
                <StatCard
                    label=tx.signal("active_subscriptions")
                    icon_name="check"
                    value=metric(stats, ACTIVE_SUBSCRIPTIONS)
                    format=ValueFormat::Integer
                    status=Signal::derive(|| IndicatorStatus::Good)
                />
                <StatCard
                    label=tx.signal("total_students")
                    icon_name="users"
                    value=metric(stats, TOTAL_STUDENTS)
                    format=ValueFormat::Integer
                />
                <StatCard
                    label=tx.signal("monthly_revenue")
                    icon_name="payments"
                    value=metric(stats, MONTHLY_REVENUE)
                    format=ValueFormat::fcfa()
                />
            </div>

            <FilterBar
                filter=filter
                options=subscription_options
                search_placeholder=tx.signal("search_placeholder")
            />

            <ListStateView state=state empty_text=tx.signal("empty")>
                <div class="card-grid">
                    {move || visible.get().into_iter().map(|school| {
                        let id = school.id;
                        let name = school.name.clone();
                        let delete_request = api::delete_school(id);
                        let update_request = api::update_subscription(id, &school.subscription_status);
                        let current = school.subscription_status.clone();
                        let badge = format!("badge badge--{}", school.subscription_status);
                        let status_label = tx.get(&format!("subscription_{}", school.subscription_status));
                        let revenue = format_value(school.monthly_revenue, &ValueFormat::fcfa());
                        let created = format_date(&school.created_at);
                        let contact = [school.contact_email.clone(), school.phone.clone()]
                            .into_iter()
                            .flatten()
                            .collect::<Vec<_>>()
                            .join(" · ");
                        view! {
                            <div class="entity-card">
                                <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Start>
                                    <div>
                                        <h3 class="entity-card__title">{school.name}</h3>
                                        <div class="cell-secondary">
                                            {icon("map-pin")}
                                            " "
                                            {school.location}
                                        </div>
                                        <span class=badge>{status_label}</span>
                                    </div>
                                    <Button
                                        size=ButtonSize::Small
                                        appearance=ButtonAppearance::Subtle
                                        disabled=Signal::derive(move || {
                                            mutation.is_pending_for(&delete_request)
                                        })
                                        on_click=move |_| remove(id, &name)
                                    >
                                        {icon("delete")}
                                    </Button>
                                </Flex>
                                <div class="entity-card__metrics">
                                    <div>
                                        <span class="cell-secondary">{move || tx.get("students")}</span>
                                        <strong>{school.student_count}</strong>
                                    </div>
                                    <div>
                                        <span class="cell-secondary">{move || tx.get("teachers")}</span>
                                        <strong>{school.teacher_count}</strong>
                                    </div>
                                    <div>
                                        <span class="cell-secondary">{move || tx.get("monthly_revenue")}</span>
                                        <strong>{revenue}</strong>
                                    </div>
                                </div>
                                {(!contact.is_empty()).then(|| view! {
                                    <div class="cell-secondary">{contact}</div>
                                })}
                                <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center>
                                    <span class="cell-secondary">
                                        {move || tx.get("created_at")}
                                        " "
                                        {created}
                                    </span>
                                    <select
                                        class="filter-select"
                                        prop:value=current
                                        disabled=move || mutation.is_pending_for(&update_request)
                                        on:change=move |ev| change_subscription(id, event_target_value(&ev))
                                    >
                                        {move || subscription_options.get().into_iter().map(|(value, label)| {
                                            view! { <option value=value>{label}</option> }
                                        }).collect_view()}
                                    </select>
                                </Flex>
                            </div>
                        }
                    }).collect_view()}
                </div>
            </ListStateView>
        </div>
    }
}
