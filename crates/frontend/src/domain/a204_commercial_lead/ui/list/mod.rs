use contracts::domain::a204_commercial_lead::aggregate::{CommercialLead, STATUSES};
use contracts::shared::indicators::{IndicatorStatus, ValueFormat};
use contracts::shared::list_query::FILTER_ALL;
use leptos::prelude::*;
use thaw::*;

use crate::domain::a204_commercial_lead::api;
use crate::domain::a204_commercial_lead::model::{
    self, lead_query, CONVERSION_RATE, CONVERTED, PIPELINE_VALUE,
};
use crate::shared::components::confirm::confirm_action;
use crate::shared::components::filter_panel::{translated_options, FilterBar};
use crate::shared::components::list_state::ListStateView;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::stat_card::{format_value, metric, StatCard};
use crate::shared::date_utils::format_date;
use crate::shared::i18n::Texts;
use crate::shared::icons::icon;
use crate::shared::list_pipeline::{
    list_view_state, FilterContext, FilterState, Summarize, TOTAL,
};
use crate::shared::query::{use_mutation, use_paged_list, FetchOptions, MutationMessages};
use crate::system::auth::context::use_signed_in;

#[component]
#[allow(non_snake_case)]
pub fn CommercialLeadList() -> impl IntoView {
    let tx = Texts::of("commercial");
    let filter = RwSignal::new(FilterState::default());
    let school_type = RwSignal::new(FILTER_ALL.to_string());
    let page = RwSignal::new(1u32);

    let leads = use_paged_list::<CommercialLead>(
        api::LEADS,
        Signal::derive(move || {
            let kind = school_type.get();
            filter.with(|f| lead_query(page.get(), f, &kind))
        }),
        FetchOptions::enabled_when(use_signed_in()),
    );
    let mutation = use_mutation();
    let context = StoredValue::new(FilterContext::now());

    // New criteria start again from the first page.
    Effect::new(move |previous: Option<(FilterState, String)>| {
        let current = (filter.get(), school_type.get());
        if previous.is_some_and(|p| p != current) {
            page.set(1);
        }
        current
    });

    let stats = Memo::new(move |_| {
        leads
            .data
            .with(|p| context.with_value(|ctx| CommercialLead::summarize(&p.items, ctx)))
    });
    let state = Signal::derive(move || {
        let rows = leads.data.with(|p| p.items.len());
        list_view_state(leads.is_loading.get(), leads.error.get().as_ref(), rows, rows)
    });
    let total_pages = Signal::derive(move || leads.data.with(|p| p.total_pages));
    let status_options = translated_options(tx, "status_", STATUSES);

    let change_status = move |id: i64, status: String| {
        mutation.dispatch(
            api::update_status(id, &status),
            MutationMessages::new(tx.get("status_updated"), tx.get("update_failed")),
            |_| {},
        );
    };

    let remove = move |id: i64, company: &str| {
        if !confirm_action(&tx.get("confirm_delete").replace("{name}", company)) {
            return;
        }
        mutation.dispatch(
            api::delete_lead(id),
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
                    on_click=move |_| leads.refresh()
                >
                    {icon("refresh")}
                    " "
                    {move || tx.common("refresh")}
                </Button>
            </Flex>

            <div class="stat-grid">
                <StatCard
                    label=tx.signal("total")
                    icon_name="briefcase"
                    value=metric(stats, TOTAL)
                    format=ValueFormat::Integer
                />
                <StatCard
                    label=tx.signal("converted")
                    icon_name="check"
                    value=metric(stats, CONVERTED)
                    format=ValueFormat::Integer
                    status=Signal::derive(|| IndicatorStatus::Good)
                />
                <StatCard
                    label=tx.signal("conversion_rate")
                    icon_name="trending-up"
                    value=metric(stats, CONVERSION_RATE)
                    format=ValueFormat::Percent { decimals: 1 }
                />
                <StatCard
                    label=tx.signal("pipeline_value")
                    icon_name="payments"
                    value=metric(stats, PIPELINE_VALUE)
                    format=ValueFormat::fcfa()
                />
            </div>

            <FilterBar
                filter=filter
                options=status_options
                search_placeholder=tx.signal("search_placeholder")
            >
                <select
                    class="filter-select"
                    prop:value=move || school_type.get()
                    on:change=move |ev| school_type.set(event_target_value(&ev))
                >
                    <option value=FILTER_ALL>{move || tx.get("all_school_types")}</option>
                    {model::SCHOOL_TYPES.iter().copied().map(|kind| view! {
                        <option value=kind>{move || tx.get(&format!("school_{kind}"))}</option>
                    }).collect_view()}
                </select>
            </FilterBar>

            <ListStateView state=state empty_text=tx.signal("empty")>
                <Table>
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell resizable=true min_width=220.0>{move || tx.get("company")}</TableHeaderCell>
                            <TableHeaderCell resizable=true min_width=180.0>{move || tx.get("contact")}</TableHeaderCell>
                            <TableHeaderCell min_width=120.0>{move || tx.get("location")}</TableHeaderCell>
                            <TableHeaderCell min_width=130.0>{move || tx.get("estimated_value")}</TableHeaderCell>
                            <TableHeaderCell min_width=110.0>{move || tx.get("last_contact")}</TableHeaderCell>
                            <TableHeaderCell min_width=150.0>{move || tx.get("status")}</TableHeaderCell>
                            <TableHeaderCell min_width=80.0>{move || tx.common("actions")}</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {move || leads.data.get().items.into_iter().map(|lead| {
                            let id = lead.id;
                            let company = lead.company_name.clone();
                            let delete_request = api::delete_lead(id);
                            let update_request = api::update_status(id, &lead.status);
                            let current = lead.status.clone();
                            let value = format_value(lead.estimated_value, &ValueFormat::fcfa());
                            let last_contact = lead
                                .last_contact_at
                                .as_deref()
                                .map(format_date)
                                .unwrap_or_else(|| "-".to_string());
                            let school_kind = tx.get(&format!("school_{}", lead.school_type));
                            let details = format!("{} · {} {}", school_kind, lead.student_count, tx.get("students"));
                            let contact_line = match &lead.phone {
                                Some(phone) => format!("{} · {}", lead.email, phone),
                                None => lead.email.clone(),
                            };
                            let badge = format!("badge badge--{}", lead.status);
                            view! {
                                <TableRow>
                                    <TableCell>
                                        <TableCellLayout>
                                            <strong>{lead.company_name}</strong>
                                            <div class="cell-secondary">{details}</div>
                                        </TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout>
                                            {lead.contact_name}
                                            <div class="cell-secondary">{lead.position}</div>
                                            <div class="cell-secondary">{contact_line}</div>
                                        </TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout>{lead.location}</TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout>{value}</TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout>{last_contact}</TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout>
                                            <select
                                                class=badge
                                                prop:value=current
                                                disabled=move || mutation.is_pending_for(&update_request)
                                                on:change=move |ev| change_status(id, event_target_value(&ev))
                                            >
                                                {move || status_options.get().into_iter().map(|(value, label)| {
                                                    view! { <option value=value>{label}</option> }
                                                }).collect_view()}
                                            </select>
                                        </TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout>
                                            <Button
                                                size=ButtonSize::Small
                                                appearance=ButtonAppearance::Subtle
                                                disabled=Signal::derive(move || {
                                                    mutation.is_pending_for(&delete_request)
                                                })
                                                on_click=move |_| remove(id, &company)
                                            >
                                                {icon("delete")}
                                            </Button>
                                        </TableCellLayout>
                                    </TableCell>
                                </TableRow>
                            }
                        }).collect_view()}
                    </TableBody>
                </Table>
                <PaginationControls
                    current_page=page
                    total_pages=total_pages
                    on_page_change=Callback::new(move |p: u32| page.set(p))
                />
            </ListStateView>

            <div class="pipeline-overview">
                <h3>{move || tx.get("pipeline_overview")}</h3>
                <div class="category-grid">
                    {STATUSES.iter().copied().map(|status| view! {
                        <div class=format!("category-tile badge--{status}")>
                            <strong>{move || stats.with(|s| s.get(status) as u64)}</strong>
                            <span class="cell-secondary">{move || tx.get(&format!("status_{status}"))}</span>
                        </div>
                    }).collect_view()}
                </div>
            </div>
        </div>
    }
}
