use crate::dashboards::d101_sales_report::api;
use crate::dashboards::d101_sales_report::chart::{bar_geometry, ChartGeometry, CHART_HEIGHT, CHART_WIDTH};
use crate::shared::components::{
    DateRangePicker, EmptyState, ProcessingOverlay, StatCard, TableCellMoney, TableTotalsRow,
    ValueFormat,
};
use crate::shared::confirm::{use_confirm, ConfirmKind};
use crate::shared::export::{
    download_bytes, export_filename, export_to_csv, print_page, CsvExportable, ExportPipeline,
    Html2CanvasRasterizer, PageFormat, PdfEncoder,
};
use crate::shared::icons::icon;
use crate::shared::loader::ResourceLoader;
use crate::shared::notify::use_notifier;
use crate::shared::number_format::{format_count, format_number_with_decimals};
use crate::system::auth::Session;
use contracts::dashboards::d101_sales_report::{ReportQuery, ReportRow, ReportSummary};
use leptos::html::Div;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::rc::Rc;
use web_sys::HtmlElement;

const REPORT_NAME: &str = "sales_report";

type SnapshotPipeline = ExportPipeline<Html2CanvasRasterizer, PdfEncoder>;

impl CsvExportable for ReportRow {
    fn headers() -> Vec<&'static str> {
        vec!["Period", "Earning", "Due", "Quantity"]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.period.clone(),
            format!("{:.2}", self.earning),
            format!("{:.2}", self.due),
            self.quantity.to_string(),
        ]
    }
}

fn now_millis() -> i64 {
    js_sys::Date::now() as i64
}

fn axis_label(value: f64) -> String {
    if value >= 1000.0 {
        format!("{}k", format_number_with_decimals(value / 1000.0, 1, ','))
    } else {
        format_number_with_decimals(value, 0, ',')
    }
}

#[component]
fn ReportChart(geometry: ChartGeometry) -> impl IntoView {
    let view_box = format!("0 0 {} {}", geometry.width, geometry.height);
    let right = geometry.width - 12.0;
    let left = geometry.plot_left;

    view! {
        <svg class="report-chart" viewBox=view_box preserveAspectRatio="xMidYMid meet" role="img">
            <g class="report-chart__grid">
                {geometry.ticks.iter().map(|t| {
                    let y = format!("{:.1}", t.y);
                    view! {
                        <line x1=format!("{:.1}", left) x2=format!("{:.1}", right) y1=y.clone() y2=y.clone() />
                        <text x=format!("{:.1}", left - 6.0) y=y text-anchor="end" dominant-baseline="middle">
                            {axis_label(t.value)}
                        </text>
                    }
                }).collect_view()}
            </g>
            {geometry.groups.iter().map(|g| view! {
                <g class="report-chart__group">
                    <rect
                        class="report-chart__bar report-chart__bar--earning"
                        x=format!("{:.1}", g.earning.x)
                        y=format!("{:.1}", g.earning.y)
                        width=format!("{:.1}", g.earning.width)
                        height=format!("{:.1}", g.earning.height)
                    />
                    <rect
                        class="report-chart__bar report-chart__bar--due"
                        x=format!("{:.1}", g.due.x)
                        y=format!("{:.1}", g.due.y)
                        width=format!("{:.1}", g.due.width)
                        height=format!("{:.1}", g.due.height)
                    />
                    <text
                        class="report-chart__label"
                        x=format!("{:.1}", g.label_x)
                        y=format!("{:.1}", geometry.baseline + 18.0)
                        text-anchor="middle"
                    >
                        {g.label.clone()}
                    </text>
                </g>
            }).collect_view()}
        </svg>
        <div class="report-chart__legend">
            <span class="legend legend--earning">"Earning"</span>
            <span class="legend legend--due">"Due"</span>
        </div>
    }
}

/// Sales report of the managed restaurant: summary cards, chart and table
/// for an optional date range, with PDF, CSV and print output.
#[component]
pub fn SalesReport(session: Session) -> impl IntoView {
    let notifier = use_notifier();
    let confirm = use_confirm();

    let (date_from, set_date_from) = signal(String::new());
    let (date_to, set_date_to) = signal(String::new());

    let report = ResourceLoader::new(
        move || {
            session.resource_id().map(|id| {
                ReportQuery::for_restaurant(id).with_range(Some(date_from.get()), Some(date_to.get()))
            })
        },
        api::get_report_rows,
        notifier,
    );

    let rows = Memo::new(move |_| report.data().unwrap_or_default());
    let summary = Memo::new(move |_| rows.with(|r| ReportSummary::from_rows(r)));
    let geometry = Memo::new(move |_| rows.with(|r| bar_geometry(r, CHART_WIDTH, CHART_HEIGHT)));

    let loaded = move || report.data().is_some();
    let total = move |f: fn(&ReportSummary) -> f64| {
        Signal::derive(move || loaded().then(|| f(&summary.get())))
    };

    // Set only while the chart and table are on screen
    let export_region = NodeRef::<Div>::new();
    let pipeline = StoredValue::new_local(Rc::new(SnapshotPipeline::new(
        Html2CanvasRasterizer,
        PdfEncoder,
        PageFormat::A4_PORTRAIT,
    )));
    let (exporting, set_exporting) = signal(false);

    let download_pdf = move |_| {
        if exporting.get_untracked() {
            return;
        }
        let region: Option<HtmlElement> = export_region.get_untracked().map(HtmlElement::from);
        let pipeline = pipeline.get_value();
        set_exporting.set(true);
        spawn_local(async move {
            let result = match pipeline.export(region.as_ref(), REPORT_NAME, now_millis()).await {
                Ok(doc) => download_bytes(&doc.bytes, &doc.filename, doc.mime).map(|_| doc.filename),
                Err(e) => Err(e),
            };
            set_exporting.try_set(false);
            match result {
                Ok(filename) => {
                    log::debug!("exported {}", filename);
                    notifier.success(format!("Saved {}", filename));
                }
                Err(e) => {
                    log::error!("report export failed: {}", e);
                    notifier.error(e.user_message());
                }
            }
        });
    };

    let download_csv = move |_| {
        let filename = export_filename(REPORT_NAME, now_millis(), "csv");
        if let Err(e) = rows.with_untracked(|r| export_to_csv(r, &filename)) {
            log::warn!("csv export failed: {}", e);
            notifier.error(e.user_message());
        }
    };

    let print = move |_| {
        let asked = confirm.confirm(
            "Print report?",
            "The report will be sent to the printer.",
            ConfirmKind::Info,
        );
        spawn_local(async move {
            if !asked.await {
                return;
            }
            if let Err(e) = print_page() {
                log::error!("print failed: {}", e);
                notifier.error(e.user_message());
            }
        });
    };

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"Sales report"</h1>
                    <span class="header__subtitle">{move || session.resource_name().unwrap_or_default()}</span>
                </div>
                <div class="header__actions">
                    <button
                        class="button button--primary"
                        disabled=move || exporting.get()
                        on:click=download_pdf
                    >
                        {icon("download")}
                        "Download PDF"
                    </button>
                    <button class="button button--secondary" on:click=download_csv>
                        {icon("download")}
                        "CSV"
                    </button>
                    <button class="button button--secondary" on:click=print>
                        {icon("printer")}
                        "Print"
                    </button>
                </div>
            </div>

            <div class="filter-bar">
                <DateRangePicker
                    date_from=date_from
                    date_to=date_to
                    on_change=Callback::new(move |(from, to): (String, String)| {
                        set_date_from.set(from);
                        set_date_to.set(to);
                    })
                />
                <button class="button button--ghost" title="Reload" on:click=move |_| report.refetch()>
                    {icon("refresh")}
                </button>
            </div>

            <div class="stat-grid">
                <StatCard
                    label="Total earning"
                    icon_name="cash"
                    value=total(|s| s.total_earning)
                    format=ValueFormat::Currency
                    variant="stat-card--success"
                />
                <StatCard
                    label="Total due"
                    icon_name="cash"
                    value=total(|s| s.total_due)
                    format=ValueFormat::Currency
                    variant="stat-card--warning"
                />
                <StatCard
                    label="Items sold"
                    icon_name="package"
                    value=total(|s| s.total_quantity as f64)
                    format=ValueFormat::Count
                />
            </div>

            {move || {
                if rows.with(|r| r.is_empty()) {
                    let message = if report.loading() { "Loading..." } else { "No sales in this period" };
                    return view! { <EmptyState message=message /> }.into_any();
                }
                let current = rows.get();
                let totals = summary.get();
                view! {
                    <div class="report-export-region" node_ref=export_region>
                        <section class="section">
                            <h2 class="section__title">"Earning and due per period"</h2>
                            <ReportChart geometry=geometry.get() />
                        </section>
                        <div class="table">
                            <table class="table__data table--striped">
                                <thead class="table__head">
                                    <tr>
                                        <th class="table__header-cell">"Period"</th>
                                        <th class="table__header-cell table__header-cell--right">"Earning"</th>
                                        <th class="table__header-cell table__header-cell--right">"Due"</th>
                                        <th class="table__header-cell table__header-cell--right">"Quantity"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {current.into_iter().map(|row| view! {
                                        <tr class="table__row">
                                            <td class="table__cell">{row.period}</td>
                                            <TableCellMoney value=row.earning />
                                            <TableCellMoney value=row.due />
                                            <td class="table__cell table__cell--right">{format_count(row.quantity)}</td>
                                        </tr>
                                    }).collect_view()}
                                </tbody>
                                <tfoot>
                                    <TableTotalsRow>
                                        <td class="table__cell">"Total"</td>
                                        <TableCellMoney value=totals.total_earning bold=true />
                                        <TableCellMoney value=totals.total_due bold=true />
                                        <td class="table__cell table__cell--right table__cell--bold">
                                            {format_count(totals.total_quantity)}
                                        </td>
                                    </TableTotalsRow>
                                </tfoot>
                            </table>
                        </div>
                    </div>
                }.into_any()
            }}

            <ProcessingOverlay visible=exporting message="Preparing PDF..." />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::export::to_csv;

    fn sample() -> Vec<ReportRow> {
        vec![
            ReportRow {
                period: "Jan".into(),
                earning: 650.0,
                due: 0.0,
                quantity: 5,
            },
            ReportRow {
                period: "Feb".into(),
                earning: 800.0,
                due: 100.0,
                quantity: 8,
            },
        ]
    }

    #[test]
    fn test_csv_has_one_line_per_period() {
        let csv = to_csv(&sample()).unwrap();
        let lines: Vec<&str> = csv.trim_start_matches('\u{FEFF}').lines().collect();
        assert_eq!(lines[0], "Period;Earning;Due;Quantity");
        assert_eq!(lines[1], "Jan;650.00;0.00;5");
        assert_eq!(lines[2], "Feb;800.00;100.00;8");
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn test_axis_label() {
        assert_eq!(axis_label(0.0), "0");
        assert_eq!(axis_label(250.0), "250");
        assert_eq!(axis_label(1500.0), "1.5k");
    }
}
