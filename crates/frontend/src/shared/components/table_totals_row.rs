use leptos::prelude::*;

/// Totals line of a data table, rendered as a `<tr>` around the given cells
#[component]
pub fn TableTotalsRow(
    children: Children,
    #[prop(optional)]
    class: &'static str,
) -> impl IntoView {
    let row_class = if class.is_empty() {
        "table__totals-row".to_string()
    } else {
        format!("table__totals-row {}", class)
    };

    view! {
        <tr class=row_class>
            {children()}
        </tr>
    }
}
