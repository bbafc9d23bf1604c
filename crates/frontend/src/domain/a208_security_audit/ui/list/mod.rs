use contracts::domain::a208_security_audit::aggregate::{
    is_severe, AuditLogEntry, SecurityAlert, ACTIONS, ALERT_RESOLVED,
};
use contracts::shared::indicators::{IndicatorStatus, ValueFormat};
use contracts::shared::list_query::ListQuery;
use leptos::prelude::*;
use thaw::*;

use crate::domain::a208_security_audit::api;
use crate::domain::a208_security_audit::model::{
    self, action_refusal, OPEN_ALERTS, RESOLVED_ALERTS, SEVERE,
};
use crate::shared::components::filter_panel::{translated_options, FilterBar};
use crate::shared::components::list_state::ListStateView;
use crate::shared::components::stat_card::{metric, StatCard};
use crate::shared::date_utils::format_datetime;
use crate::shared::i18n::Texts;
use crate::shared::icons::icon;
use crate::shared::list_pipeline::{
    filter_entities, list_view_state, FilterContext, FilterState, Summarize, TOTAL,
};
use crate::shared::notifications::use_notifications;
use crate::shared::query::{use_entity_list, use_mutation, FetchOptions, MutationMessages};
use crate::system::auth::context::use_signed_in;

fn severity_class(severity: &str) -> &'static str {
    match severity {
        "critical" | "high" => "badge badge--error",
        "medium" => "badge badge--warning",
        _ => "badge",
    }
}

fn action_icon(action: &str) -> &'static str {
    match action {
        "scan" => "shield",
        "clear-sessions" => "x",
        "rotate-keys" => "lock",
        _ => "download",
    }
}

#[component]
#[allow(non_snake_case)]
pub fn SecurityAuditView() -> impl IntoView {
    let tx = Texts::of("security");
    let enabled = FetchOptions::enabled_when(use_signed_in());
    let logs = use_entity_list::<AuditLogEntry>(api::AUDIT_LOGS, Signal::derive(ListQuery::all), enabled);
    let alerts = use_entity_list::<SecurityAlert>(api::ALERTS, Signal::derive(ListQuery::all), enabled);
    let mutation = use_mutation();
    let notifications = use_notifications();

    let filter = RwSignal::new(FilterState::default());
    let context = StoredValue::new(FilterContext::now());

    let visible = Memo::new(move |_| {
        logs.data.with(|items| {
            filter.with(|f| context.with_value(|ctx| filter_entities(items, f, ctx)))
        })
    });
    let log_stats = Memo::new(move |_| {
        logs.data
            .with(|items| context.with_value(|ctx| AuditLogEntry::summarize(items, ctx)))
    });
    let alert_stats = Memo::new(move |_| {
        alerts
            .data
            .with(|items| context.with_value(|ctx| SecurityAlert::summarize(items, ctx)))
    });
    let state = Signal::derive(move || {
        list_view_state(
            logs.is_loading.get(),
            logs.error.get().as_ref(),
            logs.data.with(Vec::len),
            visible.with(Vec::len),
        )
    });
    let alerts_state = Signal::derive(move || {
        let total = alerts.data.with(Vec::len);
        list_view_state(alerts.is_loading.get(), alerts.error.get().as_ref(), total, total)
    });

    let run = move |action: &'static str| {
        let ok = tx.get(&format!("action_{}_done", action));
        mutation.dispatch(
            api::run_action(action),
            MutationMessages::new(ok, tx.get("action_failed")),
            move |result| {
                if let Some(reason) = result.ok().as_ref().and_then(action_refusal) {
                    log::warn!("security action {} refused: {}", action, reason);
                    notifications.error(tx.get("action_failed"), reason);
                }
            },
        );
    };

    view! {
        <div class="module-view">
            <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center>
                <h2 class="module-view__title">{move || tx.get("title")}</h2>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| {
                        logs.refresh();
                        alerts.refresh();
                    }
                >
                    {icon("refresh")}
                    " "
                    {move || tx.common("refresh")}
                </Button>
            </Flex>

            <div class="stat-grid">
                <StatCard
                    label=tx.signal("events")
                    icon_name="activity"
                    value=metric(log_stats, TOTAL)
                    format=ValueFormat::Integer
                />
                <StatCard
                    label=tx.signal("severe_events")
                    icon_name="alert"
                    value=metric(log_stats, SEVERE)
                    format=ValueFormat::Integer
                    status=Signal::derive(move || {
                        if log_stats.with(|s| s.get(SEVERE)) > 0.0 {
                            IndicatorStatus::Bad
                        } else {
                            IndicatorStatus::Good
                        }
                    })
                />
                <StatCard
                    label=tx.signal("open_alerts")
                    icon_name="shield"
                    value=metric(alert_stats, OPEN_ALERTS)
                    format=ValueFormat::Integer
                    status=Signal::derive(move || {
                        if alert_stats.with(|s| s.get(OPEN_ALERTS)) > 0.0 {
                            IndicatorStatus::Warning
                        } else {
                            IndicatorStatus::Good
                        }
                    })
                />
                <StatCard
                    label=tx.signal("resolved_alerts")
                    icon_name="check"
                    value=metric(alert_stats, RESOLVED_ALERTS)
                    format=ValueFormat::Integer
                />
            </div>

            <div class="form-card">
                <h3>{move || tx.get("actions")}</h3>
                <Space>
                    {ACTIONS.iter().copied().map(|action| {
                        let request = api::run_action(action);
                        view! {
                            <Button
                                appearance=ButtonAppearance::Secondary
                                disabled=Signal::derive(move || mutation.is_pending_for(&request))
                                on_click=move |_| run(action)
                            >
                                {icon(action_icon(action))}
                                " "
                                {move || tx.get(&format!("action_{}", action))}
                            </Button>
                        }
                    }).collect_view()}
                </Space>
            </div>

            <h3>{move || tx.get("alerts")}</h3>
            <ListStateView state=alerts_state empty_text=tx.signal("no_alerts")>
                <div class="card-grid">
                    {move || alerts.data.get().into_iter().map(|alert| {
                        let card_class = if alert.status == ALERT_RESOLVED {
                            "entity-card entity-card--muted"
                        } else {
                            "entity-card"
                        };
                        let severity = tx.get(&format!("severity_{}", alert.severity));
                        let status = tx.get(&format!("alert_{}", alert.status));
                        let created = format_datetime(&alert.created_at);
                        let badge = severity_class(&alert.severity);
                        view! {
                            <div class=card_class>
                                <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center>
                                    <strong>{alert.title}</strong>
                                    <span class=badge>{severity}</span>
                                </Flex>
                                <p>{alert.description}</p>
                                <Flex justify=FlexJustify::SpaceBetween>
                                    <span class="entity-card__meta">{created}</span>
                                    <span class="entity-card__meta">{status}</span>
                                </Flex>
                            </div>
                        }
                    }).collect_view()}
                </div>
            </ListStateView>

            <h3>{move || tx.get("audit_log")}</h3>
            <FilterBar
                filter=filter
                options=translated_options(tx, "severity_", &model::SEVERITIES)
                search_placeholder=tx.signal("search_placeholder")
            />

            <ListStateView state=state empty_text=tx.signal("empty")>
                <Table>
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell resizable=true min_width=180.0>{move || tx.get("action")}</TableHeaderCell>
                            <TableHeaderCell min_width=180.0>{move || tx.get("user")}</TableHeaderCell>
                            <TableHeaderCell min_width=120.0>{move || tx.get("ip")}</TableHeaderCell>
                            <TableHeaderCell min_width=100.0>{move || tx.get("severity")}</TableHeaderCell>
                            <TableHeaderCell min_width=140.0>{move || tx.get("timestamp")}</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {move || visible.get().into_iter().map(|entry| {
                            let severity = tx.get(&format!("severity_{}", entry.severity));
                            let class = severity_class(&entry.severity);
                            let at = format_datetime(&entry.timestamp);
                            let flagged = is_severe(&entry.severity);
                            view! {
                                <TableRow>
                                    <TableCell>
                                        <TableCellLayout>
                                            {flagged.then(|| icon("alert"))}
                                            {entry.action}
                                        </TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout>{entry.user}</TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout><code>{entry.ip}</code></TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout><span class=class>{severity}</span></TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout>{at}</TableCellLayout>
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
