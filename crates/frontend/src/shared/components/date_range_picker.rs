use super::date_input::DateInput;
use chrono::{Datelike, Duration, NaiveDate, Utc};
use leptos::prelude::*;
use thaw::*;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// First and last day of a month
pub fn month_bounds(year: i32, month: u32) -> Option<(NaiveDate, NaiveDate)> {
    let start = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    Some((start, next - Duration::days(1)))
}

/// Month before the one `from` falls in; today's month when `from` is blank or malformed
pub fn previous_month_range(from: &str, today: NaiveDate) -> Option<(String, String)> {
    let anchor = NaiveDate::parse_from_str(from, DATE_FORMAT).unwrap_or(today);
    let (year, month) = if anchor.month() == 1 {
        (anchor.year() - 1, 12)
    } else {
        (anchor.year(), anchor.month() - 1)
    };
    let (start, end) = month_bounds(year, month)?;
    Some((start.format(DATE_FORMAT).to_string(), end.format(DATE_FORMAT).to_string()))
}

/// Two date fields plus month shortcuts. Empty strings mean "no bound".
#[component]
pub fn DateRangePicker(
    #[prop(into)]
    date_from: Signal<String>,
    #[prop(into)]
    date_to: Signal<String>,
    /// Receives `(from, to)` after every edit
    on_change: Callback<(String, String)>,
) -> impl IntoView {
    let on_current_month = move |_| {
        let today = Utc::now().date_naive();
        if let Some((start, end)) = month_bounds(today.year(), today.month()) {
            on_change.run((
                start.format(DATE_FORMAT).to_string(),
                end.format(DATE_FORMAT).to_string(),
            ));
        }
    };

    let on_previous_month = move |_| {
        let today = Utc::now().date_naive();
        if let Some(range) = previous_month_range(&date_from.get_untracked(), today) {
            on_change.run(range);
        }
    };

    let on_all_time = move |_| on_change.run((String::new(), String::new()));

    view! {
        <div class="date-range-picker">
            <DateInput
                label="From"
                value=date_from
                on_change=move |from| on_change.run((from, date_to.get_untracked()))
            />
            <DateInput
                label="To"
                value=date_to
                on_change=move |to| on_change.run((date_from.get_untracked(), to))
            />
            <ButtonGroup>
                <Button size=ButtonSize::Small on_click=on_current_month>"This month"</Button>
                <Button size=ButtonSize::Small on_click=on_previous_month>"Previous month"</Button>
                <Button size=ButtonSize::Small on_click=on_all_time>"All time"</Button>
            </ButtonGroup>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_bounds() {
        let (start, end) = month_bounds(2024, 2).unwrap();
        assert_eq!(start.to_string(), "2024-02-01");
        assert_eq!(end.to_string(), "2024-02-29");

        let (_, end) = month_bounds(2023, 12).unwrap();
        assert_eq!(end.to_string(), "2023-12-31");
        assert!(month_bounds(2023, 13).is_none());
    }

    #[test]
    fn test_previous_month_steps_back_from_current_range() {
        let today = NaiveDate::from_ymd_opt(2024, 5, 10).unwrap();
        assert_eq!(
            previous_month_range("2024-01-01", today),
            Some(("2023-12-01".to_string(), "2023-12-31".to_string()))
        );
        assert_eq!(
            previous_month_range("", today),
            Some(("2024-04-01".to_string(), "2024-04-30".to_string()))
        );
    }
}
