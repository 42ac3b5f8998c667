//! Geometry of the earning/due bar chart, computed apart from rendering

use contracts::dashboards::d101_sales_report::ReportRow;

pub const CHART_WIDTH: f64 = 640.0;
pub const CHART_HEIGHT: f64 = 260.0;

const PAD_LEFT: f64 = 56.0;
const PAD_RIGHT: f64 = 12.0;
const PAD_TOP: f64 = 12.0;
const PAD_BOTTOM: f64 = 28.0;
const TICKS: usize = 4;

#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarGroup {
    pub label: String,
    pub label_x: f64,
    pub earning: Bar,
    pub due: Bar,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    pub y: f64,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartGeometry {
    pub width: f64,
    pub height: f64,
    /// y of the x axis
    pub baseline: f64,
    pub plot_left: f64,
    pub axis_max: f64,
    pub ticks: Vec<Tick>,
    pub groups: Vec<BarGroup>,
}

/// Smallest 1/2/5 × 10^n at or above `value`
pub fn nice_max(value: f64) -> f64 {
    if !value.is_finite() || value <= 0.0 {
        return 1.0;
    }
    let magnitude = 10f64.powi(value.log10().floor() as i32);
    let fraction = value / magnitude;
    let nice = if fraction <= 1.0 {
        1.0
    } else if fraction <= 2.0 {
        2.0
    } else if fraction <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * magnitude
}

/// One group per row with an earning and a due bar side by side.
/// Bars are scaled against a rounded maximum so the top tick is a round number.
pub fn bar_geometry(rows: &[ReportRow], width: f64, height: f64) -> ChartGeometry {
    let plot_width = (width - PAD_LEFT - PAD_RIGHT).max(0.0);
    let plot_height = (height - PAD_TOP - PAD_BOTTOM).max(0.0);
    let baseline = PAD_TOP + plot_height;

    let peak = rows
        .iter()
        .map(|r| r.earning.max(r.due))
        .fold(0.0_f64, f64::max);
    let axis_max = nice_max(peak);

    let ticks = (0..=TICKS)
        .map(|i| {
            let value = axis_max * i as f64 / TICKS as f64;
            Tick {
                y: baseline - plot_height * i as f64 / TICKS as f64,
                value,
            }
        })
        .collect();

    let slot = if rows.is_empty() {
        0.0
    } else {
        plot_width / rows.len() as f64
    };
    let bar_width = slot * 0.35;

    let bar = |x: f64, value: f64| {
        let h = plot_height * (value.max(0.0) / axis_max);
        Bar {
            x,
            y: baseline - h,
            width: bar_width,
            height: h,
        }
    };

    let groups = rows
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let left = PAD_LEFT + slot * i as f64;
            let first = left + slot * 0.15;
            BarGroup {
                label: row.period.clone(),
                label_x: left + slot / 2.0,
                earning: bar(first, row.earning),
                due: bar(first + bar_width, row.due),
            }
        })
        .collect();

    ChartGeometry {
        width,
        height,
        baseline,
        plot_left: PAD_LEFT,
        axis_max,
        ticks,
        groups,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(period: &str, earning: f64, due: f64) -> ReportRow {
        ReportRow {
            period: period.into(),
            earning,
            due,
            quantity: 0,
        }
    }

    #[test]
    fn test_nice_max() {
        assert_eq!(nice_max(0.0), 1.0);
        assert_eq!(nice_max(800.0), 1000.0);
        assert_eq!(nice_max(130.0), 200.0);
        assert_eq!(nice_max(450.0), 500.0);
        assert_eq!(nice_max(1000.0), 1000.0);
    }

    #[test]
    fn test_bars_scale_to_axis_max() {
        let geo = bar_geometry(&[row("Jan", 650.0, 0.0), row("Feb", 800.0, 100.0)], 640.0, 260.0);
        let plot_height = 260.0 - PAD_TOP - PAD_BOTTOM;
        assert_eq!(geo.axis_max, 1000.0);
        assert_eq!(geo.groups.len(), 2);

        let feb = &geo.groups[1];
        assert!((feb.earning.height - plot_height * 0.8).abs() < 1e-9);
        assert!((feb.due.height - plot_height * 0.1).abs() < 1e-9);
        assert!((feb.earning.y + feb.earning.height - geo.baseline).abs() < 1e-9);
        assert_eq!(geo.groups[0].due.height, 0.0);
        assert!(geo.groups[0].label_x < feb.label_x);
    }

    #[test]
    fn test_empty_rows_have_no_groups() {
        let geo = bar_geometry(&[], 640.0, 260.0);
        assert!(geo.groups.is_empty());
        assert_eq!(geo.ticks.len(), TICKS + 1);
        assert_eq!(geo.ticks[0].value, 0.0);
    }
}
