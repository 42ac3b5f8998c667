use crate::shared::number_format::format_currency;
use leptos::prelude::*;

/// Right-aligned currency cell
#[component]
pub fn TableCellMoney(
    value: f64,
    #[prop(optional)]
    bold: bool,
) -> impl IntoView {
    view! {
        <td class="table__cell table__cell--right table__cell--money" class:table__cell--bold=bold>
            {format_currency(value)}
        </td>
    }
}
