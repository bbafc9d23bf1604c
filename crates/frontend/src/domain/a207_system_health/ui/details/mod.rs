use contracts::domain::a207_system_health::aggregate::{
    PerformanceMetrics, ServiceStatus, SystemHealth,
};
use contracts::shared::indicators::{IndicatorStatus, ValueFormat};
use leptos::prelude::*;
use thaw::*;

use crate::domain::a207_system_health::api;
use crate::domain::a207_system_health::model::{
    self, service_status, usage_status, AVERAGE_UPTIME, DEGRADED, DOWN, OPERATIONAL,
};
use crate::shared::components::filter_panel::{translated_options, FilterBar};
use crate::shared::components::list_state::ListStateView;
use crate::shared::components::stat_card::{format_value, metric, StatCard};
use crate::shared::config::app_config;
use crate::shared::date_utils::format_datetime;
use crate::shared::i18n::Texts;
use crate::shared::icons::icon;
use crate::shared::list_pipeline::{
    filter_entities, list_view_state, FilterContext, FilterState, Summarize, TOTAL,
};
use crate::shared::query::{use_entity, FetchOptions};
use crate::system::auth::context::use_signed_in;

fn status_class(status: IndicatorStatus) -> &'static str {
    match status {
        IndicatorStatus::Good => "badge badge--success",
        IndicatorStatus::Warning => "badge badge--warning",
        IndicatorStatus::Bad => "badge badge--error",
        IndicatorStatus::Neutral => "badge",
    }
}

#[component]
#[allow(non_snake_case)]
fn UsageGauge(#[prop(into)] label: Signal<String>, #[prop(into)] value: Signal<f64>) -> impl IntoView {
    view! {
        <div class="usage-gauge">
            <Flex justify=FlexJustify::SpaceBetween>
                <span>{move || label.get()}</span>
                <strong>{move || format!("{:.1}%", value.get())}</strong>
            </Flex>
            <progress
                class=move || status_class(usage_status(value.get()))
                max="100"
                value=move || value.get().clamp(0.0, 100.0).to_string()
            ></progress>
        </div>
    }
}

#[component]
#[allow(non_snake_case)]
pub fn SystemHealthView() -> impl IntoView {
    let tx = Texts::of("health");
    let polled = FetchOptions::enabled_when(use_signed_in())
        .with_polling(app_config().ui.health_poll_interval_ms);
    let health = use_entity::<SystemHealth>(api::SYSTEM_HEALTH, polled);
    let performance = use_entity::<PerformanceMetrics>(api::PERFORMANCE, polled);

    let filter = RwSignal::new(FilterState::default());
    let context = StoredValue::new(FilterContext::now());

    let services = Memo::new(move |_| {
        health
            .data
            .with(|h| h.as_ref().map(|h| h.services.clone()).unwrap_or_default())
    });
    let visible = Memo::new(move |_| {
        services.with(|items| {
            filter.with(|f| context.with_value(|ctx| filter_entities(items, f, ctx)))
        })
    });
    let stats = Memo::new(move |_| {
        services.with(|items| context.with_value(|ctx| ServiceStatus::summarize(items, ctx)))
    });
    let state = Signal::derive(move || {
        list_view_state(
            health.is_loading.get(),
            health.error.get().as_ref(),
            services.with(Vec::len),
            visible.with(Vec::len),
        )
    });

    let perf = move |f: fn(&PerformanceMetrics) -> f64| {
        Signal::derive(move || performance.data.with(|p| p.as_ref().map(f).unwrap_or_default()))
    };
    let overall = move || {
        health
            .data
            .with(|h| h.as_ref().map(|h| h.status.clone()).unwrap_or_default())
    };

    view! {
        <div class="module-view">
            <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center>
                <h2 class="module-view__title">
                    {move || tx.get("title")}
                    " "
                    {move || {
                        let status = overall();
                        (!status.is_empty()).then(|| view! {
                            <span class=status_class(service_status(&status))>
                                {tx.get(&format!("status_{status}"))}
                            </span>
                        })
                    }}
                </h2>
                <Space>
                    {move || (health.is_fetching.get() || performance.is_fetching.get()).then(|| view! {
                        <Spinner size=SpinnerSize::Tiny />
                    })}
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| {
                            health.refresh();
                            performance.refresh();
                        }
                    >
                        {icon("refresh")}
                        " "
                        {move || tx.common("refresh")}
                    </Button>
                </Space>
            </Flex>

            <div class="stat-grid">
                <StatCard
                    label=tx.signal("uptime")
                    icon_name="activity"
                    value=Signal::derive(move || health.data.with(|h| h.as_ref().map(|h| h.uptime).unwrap_or_default()))
                    format=ValueFormat::Percent { decimals: 1 }
                    subtitle=Signal::derive(move || {
                        let last = health
                            .data
                            .with(|h| h.as_ref().map(|h| h.last_incident.clone()).unwrap_or_default());
                        if last.is_empty() {
                            String::new()
                        } else {
                            format!("{} {}", tx.get("last_incident"), format_datetime(&last))
                        }
                    })
                />
                <StatCard
                    label=tx.signal("response_time")
                    icon_name="clock"
                    value=perf(|p| p.response_time.current)
                    format=ValueFormat::Number { decimals: 0 }
                    subtitle=Signal::derive(move || {
                        let target = performance.data.with(|p| p.as_ref().map(|p| p.response_time.target).unwrap_or_default());
                        format!("ms · {} {:.0} ms", tx.get("target"), target)
                    })
                    status=Signal::derive(move || {
                        performance.data.with(|p| match p {
                            Some(p) if p.response_time.target > 0.0 && p.response_time.current > p.response_time.target => {
                                IndicatorStatus::Warning
                            }
                            Some(_) => IndicatorStatus::Good,
                            None => IndicatorStatus::Neutral,
                        })
                    })
                />
                <StatCard
                    label=tx.signal("error_rate")
                    icon_name="alert"
                    value=perf(|p| p.error_rates.total)
                    format=ValueFormat::Percent { decimals: 2 }
                />
                <StatCard
                    label=tx.signal("throughput")
                    icon_name="trending-up"
                    value=perf(|p| p.throughput.requests_per_second)
                    format=ValueFormat::Number { decimals: 1 }
                    subtitle=Signal::derive(move || {
                        let daily = performance.data.with(|p| p.as_ref().map(|p| p.throughput.daily_requests).unwrap_or_default());
                        format!("{} {}", format_value(daily as f64, &ValueFormat::Integer), tx.get("requests_per_day"))
                    })
                />
            </div>

            <div class="stat-grid">
                <StatCard
                    label=tx.signal("services_total")
                    icon_name="settings"
                    value=metric(stats, TOTAL)
                    format=ValueFormat::Integer
                />
                <StatCard
                    label=tx.signal("status_operational")
                    icon_name="check"
                    value=metric(stats, OPERATIONAL)
                    format=ValueFormat::Integer
                    status=Signal::derive(|| IndicatorStatus::Good)
                />
                <StatCard
                    label=tx.signal("status_degraded")
                    icon_name="alert"
                    value=metric(stats, DEGRADED)
                    format=ValueFormat::Integer
                    status=Signal::derive(move || {
                        if stats.with(|s| s.get(DEGRADED)) > 0.0 { IndicatorStatus::Warning } else { IndicatorStatus::Neutral }
                    })
                />
                <StatCard
                    label=tx.signal("status_down")
                    icon_name="x"
                    value=metric(stats, DOWN)
                    format=ValueFormat::Integer
                    status=Signal::derive(move || {
                        if stats.with(|s| s.get(DOWN)) > 0.0 { IndicatorStatus::Bad } else { IndicatorStatus::Neutral }
                    })
                />
                <StatCard
                    label=tx.signal("average_uptime")
                    icon_name="activity"
                    value=metric(stats, AVERAGE_UPTIME)
                    format=ValueFormat::Percent { decimals: 2 }
                />
            </div>

            <FilterBar
                filter=filter
                options=translated_options(tx, "status_", &model::SERVICE_STATES)
                search_placeholder=tx.signal("search_placeholder")
            />

            <ListStateView state=state empty_text=tx.signal("empty")>
                <Table>
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell resizable=true min_width=220.0>{move || tx.get("service")}</TableHeaderCell>
                            <TableHeaderCell min_width=130.0>{move || tx.get("status")}</TableHeaderCell>
                            <TableHeaderCell min_width=110.0>{move || tx.get("uptime")}</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {move || visible.get().into_iter().map(|service| {
                            let badge = status_class(service_status(&service.status));
                            let label = tx.get(&format!("status_{}", service.status));
                            let uptime = format!("{:.1}%", service.uptime);
                            view! {
                                <TableRow>
                                    <TableCell>
                                        <TableCellLayout>{service.name}</TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout>
                                            <span class=badge>{label}</span>
                                        </TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout>{uptime}</TableCellLayout>
                                    </TableCell>
                                </TableRow>
                            }
                        }).collect_view()}
                    </TableBody>
                </Table>
            </ListStateView>

            <div class="form-card">
                <h3>{move || tx.get("resource_usage")}</h3>
                <UsageGauge label=tx.signal("cpu") value=perf(|p| p.resource_usage.cpu) />
                <UsageGauge label=tx.signal("memory") value=perf(|p| p.resource_usage.memory) />
                <UsageGauge label=tx.signal("storage") value=perf(|p| p.resource_usage.storage) />
                <UsageGauge label=tx.signal("bandwidth") value=perf(|p| p.resource_usage.bandwidth) />
                {move || {
                    let by_type = performance
                        .data
                        .with(|p| p.as_ref().map(|p| p.error_rates.by_type.clone()).unwrap_or_default());
                    (!by_type.is_empty()).then(|| view! {
                        <h4>{tx.get("errors_by_type")}</h4>
                        <ul class="plain-list">
                            {by_type.into_iter().map(|e| view! {
                                <li>{e.kind} ": " {format!("{:.2}%", e.rate)}</li>
                            }).collect_view()}
                        </ul>
                    })
                }}
            </div>
        </div>
    }
}
