use crate::shared::icons::icon;
use crate::shared::list_pipeline::StatisticsSummary;
use contracts::shared::indicators::{IndicatorStatus, ValueFormat};
use leptos::prelude::*;

pub fn format_value(val: f64, fmt: &ValueFormat) -> String {
    match fmt {
        ValueFormat::Money { currency } => {
            let formatted = if val.abs() >= 1_000_000.0 {
                format!("{:.1}M", val / 1_000_000.0).replace('.', ",")
            } else {
                format_thousands(val.round() as i64)
            };
            format!("{} {}", formatted, currency)
        }
        ValueFormat::Number { decimals } => {
            format!("{:.prec$}", val, prec = *decimals as usize).replace('.', ",")
        }
        ValueFormat::Percent { decimals } => {
            format!("{:.prec$}%", val, prec = *decimals as usize).replace('.', ",")
        }
        ValueFormat::Integer => format_thousands(val.round() as i64),
    }
}

pub fn format_thousands(n: i64) -> String {
    let s = n.abs().to_string();
    let mut result = String::new();
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push('\u{00a0}');
        }
        result.push(ch);
    }
    if n < 0 {
        result.push('-');
    }
    result.chars().rev().collect()
}

/// One metric of a summary as a stat card value.
pub fn metric(summary: Memo<StatisticsSummary>, name: &'static str) -> Signal<f64> {
    Signal::derive(move || summary.with(|s| s.get(name)))
}

#[component]
pub fn StatCard(
    /// Label displayed above the value
    #[prop(into)]
    label: Signal<String>,
    /// Icon name from the icon() helper
    icon_name: &'static str,
    #[prop(into)]
    value: Signal<f64>,
    format: ValueFormat,
    /// Visual status; neutral when omitted
    #[prop(optional, into)]
    status: Option<Signal<IndicatorStatus>>,
    #[prop(optional, into)]
    subtitle: Option<Signal<String>>,
) -> impl IntoView {
    let status_class = move || match status.map(|s| s.get()).unwrap_or(IndicatorStatus::Neutral) {
        IndicatorStatus::Good => "stat-card stat-card--success",
        IndicatorStatus::Bad => "stat-card stat-card--error",
        IndicatorStatus::Warning => "stat-card stat-card--warning",
        IndicatorStatus::Neutral => "stat-card",
    };

    let formatted = move || format_value(value.get(), &format);

    let subtitle_view = move || {
        subtitle.map(|s| {
            view! { <div class="stat-card__subtitle">{move || s.get()}</div> }
        })
    };

    view! {
        <div class=status_class>
            <div class="stat-card__icon">
                {icon(icon_name)}
            </div>
            <div class="stat-card__content">
                <div class="stat-card__label">{move || label.get()}</div>
                <div class="stat-card__value">{formatted}</div>
                {subtitle_view}
            </div>
        </div>
    }
}
