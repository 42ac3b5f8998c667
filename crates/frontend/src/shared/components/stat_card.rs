use crate::shared::icons::icon;
use crate::shared::number_format::{format_count, format_currency};
use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueFormat {
    Currency,
    Count,
}

pub fn format_value(val: f64, fmt: ValueFormat) -> String {
    match fmt {
        ValueFormat::Currency => format_currency(val),
        ValueFormat::Count => format_count(val.max(0.0).round() as u64),
    }
}

#[component]
pub fn StatCard(
    /// Label displayed above the value
    #[prop(into)]
    label: String,
    /// Icon name from the icon() helper
    #[prop(into)]
    icon_name: String,
    /// Primary numeric value (None = loading/error)
    #[prop(into)]
    value: Signal<Option<f64>>,
    /// How to format the value
    format: ValueFormat,
    /// Optional subtitle below the value
    #[prop(into, optional)]
    subtitle: Signal<Option<String>>,
    /// Modifier class, e.g. "stat-card--warning"
    #[prop(optional)]
    variant: Option<&'static str>,
) -> impl IntoView {
    let class = match variant {
        Some(v) => format!("stat-card {}", v),
        None => "stat-card".to_string(),
    };

    let formatted = move || match value.get() {
        Some(v) => format_value(v, format),
        None => "—".to_string(),
    };

    let subtitle_view = move || {
        subtitle.get().map(|s| {
            view! { <div class="stat-card__subtitle">{s}</div> }
        })
    };

    view! {
        <div class=class>
            <div class="stat-card__icon">
                {icon(&icon_name)}
            </div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">{formatted}</div>
                {subtitle_view}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(1450.0, ValueFormat::Currency), "৳1,450");
        assert_eq!(format_value(13.0, ValueFormat::Count), "13");
        assert_eq!(format_value(-2.0, ValueFormat::Count), "0");
    }
}
