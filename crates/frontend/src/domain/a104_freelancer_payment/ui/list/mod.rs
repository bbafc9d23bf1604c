use contracts::domain::a104_freelancer_payment::aggregate::FreelancerPayment;
use contracts::shared::indicators::{IndicatorStatus, ValueFormat};
use contracts::shared::list_query::ListQuery;
use leptos::prelude::*;
use thaw::*;

use crate::domain::a104_freelancer_payment::api;
use crate::domain::a104_freelancer_payment::model::{
    self, OVERDUE_COUNT, PENDING_COUNT, THIS_MONTH_REVENUE, TOTAL_AMOUNT, TOTAL_REVENUE,
};
use crate::shared::components::filter_panel::{translated_options, FilterBar};
use crate::shared::components::list_state::ListStateView;
use crate::shared::components::stat_card::{format_value, metric, StatCard};
use crate::shared::date_utils::format_date;
use crate::shared::export::export_csv;
use crate::shared::i18n::Texts;
use crate::shared::icons::icon;
use crate::shared::list_pipeline::{
    filter_entities, list_view_state, FilterContext, FilterState, Summarize, TOTAL,
};
use crate::shared::list_utils::SortState;
use crate::shared::notifications::use_notifications;
use crate::shared::query::{use_entity_list, use_mutation, FetchOptions, MutationMessages};
use crate::system::auth::context::use_signed_in;

#[component]
#[allow(non_snake_case)]
pub fn FreelancerPaymentList() -> impl IntoView {
    let tx = Texts::of("payments");
    let payments = use_entity_list::<FreelancerPayment>(
        api::PAYMENTS,
        Signal::derive(ListQuery::all),
        FetchOptions::enabled_when(use_signed_in()),
    );
    let mutation = use_mutation();
    let notifications = use_notifications();

    let filter = RwSignal::new(FilterState::default());
    let context = RwSignal::new(FilterContext::now());
    let sort = SortState::new("");

    let visible = Memo::new(move |_| {
        let mut rows = payments.data.with(|items| {
            filter.with(|f| context.with(|ctx| filter_entities(items, f, ctx)))
        });
        sort.apply(&mut rows);
        rows
    });
    let stats = Memo::new(move |_| {
        payments
            .data
            .with(|items| context.with(|ctx| FreelancerPayment::summarize(items, ctx)))
    });
    let state = Signal::derive(move || {
        list_view_state(
            payments.is_loading.get(),
            payments.error.get().as_ref(),
            payments.data.with(Vec::len),
            visible.with(Vec::len),
        )
    });

    let remind = move |id: i64| {
        mutation.dispatch(
            api::remind_payment(id),
            MutationMessages::new(tx.get("reminder_sent"), tx.get("reminder_failed")),
            |_| {},
        );
    };

    let export = move || {
        let headers = [
            "invoice", "client", "date", "description", "amount", "method", "status",
        ]
        .map(|key| tx.get(key));
        let rows = visible.get_untracked();
        let filename = format!("payments_{}.csv", context.with_untracked(|c| c.selected_month.clone()));
        if let Err(e) = export_csv(&rows, &model::export_columns(headers), &filename) {
            log::warn!("payment export failed: {}", e);
            notifications.error(tx.get("export_failed"), e);
        }
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
                <h2 class="module-view__title">{move || tx.get("title")}</h2>
                <Space>
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| export()>
                        {icon("download")}
                        " "
                        {move || tx.common("export_csv")}
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| payments.refresh()
                    >
                        {icon("refresh")}
                        " "
                        {move || tx.common("refresh")}
                    </Button>
                </Space>
            </Flex>

            <div class="stat-grid">
                <StatCard
                    label=tx.signal("total")
                    icon_name="file"
                    value=metric(stats, TOTAL)
                    format=ValueFormat::Integer
                />
                <StatCard
                    label=tx.signal("total_amount")
                    icon_name="payments"
                    value=metric(stats, TOTAL_AMOUNT)
                    format=ValueFormat::fcfa()
                />
                <StatCard
                    label=tx.signal("total_revenue")
                    icon_name="trending-up"
                    value=metric(stats, TOTAL_REVENUE)
                    format=ValueFormat::fcfa()
                    status=Signal::derive(|| IndicatorStatus::Good)
                />
                <StatCard
                    label=tx.signal("this_month_revenue")
                    icon_name="calendar"
                    value=metric(stats, THIS_MONTH_REVENUE)
                    format=ValueFormat::fcfa()
                    subtitle=Signal::derive(move || context.with(|c| c.selected_month.clone()))
                />
                <StatCard
                    label=tx.signal("pending")
                    icon_name="clock"
                    value=metric(stats, PENDING_COUNT)
                    format=ValueFormat::Integer
                    status=Signal::derive(|| IndicatorStatus::Warning)
                />
                <StatCard
                    label=tx.signal("overdue")
                    icon_name="alert"
                    value=metric(stats, OVERDUE_COUNT)
                    format=ValueFormat::Integer
                    status=Signal::derive(move || {
                        if stats.with(|s| s.get(OVERDUE_COUNT)) > 0.0 {
                            IndicatorStatus::Bad
                        } else {
                            IndicatorStatus::Neutral
                        }
                    })
                />
            </div>

            <FilterBar
                filter=filter
                options=translated_options(tx, "filter_", &model::FILTERS)
                search_placeholder=tx.signal("search_placeholder")
            >
                <label class="month-picker">
                    {move || tx.get("month")}
                    <input
                        type="month"
                        prop:value=move || context.with(|c| c.selected_month.clone())
                        on:change=move |ev| {
                            let month = event_target_value(&ev);
                            if !month.is_empty() {
                                context.update(|c| *c = c.clone().with_month(month));
                            }
                        }
                    />
                </label>
            </FilterBar>

            <ListStateView state=state empty_text=tx.signal("empty")>
                <Table>
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell min_width=130.0>{move || tx.get("invoice")}</TableHeaderCell>
                            <TableHeaderCell resizable=true min_width=180.0>
                                {sortable_header("client")}
                            </TableHeaderCell>
                            <TableHeaderCell min_width=110.0>{sortable_header("date")}</TableHeaderCell>
                            <TableHeaderCell resizable=true min_width=200.0>{move || tx.get("description")}</TableHeaderCell>
                            <TableHeaderCell min_width=130.0>{sortable_header("amount")}</TableHeaderCell>
                            <TableHeaderCell min_width=110.0>{move || tx.get("status")}</TableHeaderCell>
                            <TableHeaderCell min_width=80.0>{move || tx.common("actions")}</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {move || visible.get().into_iter().map(|payment| {
                            let id = payment.id;
                            let remind_request = api::remind_payment(id);
                            let remindable = model::can_remind(&payment);
                            let status_label = tx.get(&format!("filter_{}", payment.status));
                            let badge = format!("badge badge--{}", payment.status);
                            let amount = format_value(payment.amount, &ValueFormat::fcfa());
                            view! {
                                <TableRow>
                                    <TableCell>
                                        <TableCellLayout>{payment.invoice_number}</TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout>{payment.client_name}</TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout>{format_date(&payment.date)}</TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout>{payment.description}</TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout>
                                            <span class="cell-number">{amount}</span>
                                        </TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout>
                                            <span class=badge>{status_label}</span>
                                        </TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout>
                                            {remindable.then(|| view! {
                                                <Button
                                                    size=ButtonSize::Small
                                                    appearance=ButtonAppearance::Subtle
                                                    disabled=Signal::derive(move || {
                                                        mutation.is_pending_for(&remind_request)
                                                    })
                                                    on_click=move |_| remind(id)
                                                >
                                                    {icon("send")}
                                                </Button>
                                            })}
                                        </TableCellLayout>
                                    </TableCell>
                                </TableRow>
                            }
                        }).collect_view()}
                    </TableBody>
                </Table>
            </ListStateView>
        </div>
    }
}
