//! Rolling line chart for one metric using `leptos-chartistry` with SVG rendering.

use chrono::{DateTime, Utc};
use leptos::prelude::*;
use leptos_chartistry::*;
use wattboard_domain::series::{ChartSeries, Metric};

/// A single plotted point.
#[derive(Clone)]
struct Plot {
    /// Server wall-clock time, carried as UTC so the axis shows it unchanged.
    at: DateTime<Utc>,
    value: f64,
}

fn plots(series: &ChartSeries) -> Vec<Plot> {
    series
        .points()
        .map(|point| Plot {
            at: point.at.naive_local().and_utc(),
            value: point.value,
        })
        .collect()
}

/// `#rrggbb` to a chart colour.
fn colour(hex: &str) -> Option<Colour> {
    let hex = hex.strip_prefix('#')?;
    let channel = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
    Some(Colour::from_rgb(channel(0)?, channel(2)?, channel(4)?))
}

/// Build timestamp tick labels (extracted to avoid turbofish inside `view!` macro).
fn timestamp_ticks() -> TickLabels<DateTime<Utc>> {
    TickLabels::timestamps()
}

/// Line chart of the last points recorded for `metric`.
#[component]
pub fn MetricChart(metric: Metric, #[prop(into)] series: Signal<ChartSeries>) -> impl IntoView {
    let data = Signal::derive(move || plots(&series.get()));
    let line = Line::new(|p: &Plot| p.value)
        .with_name(metric.label())
        .with_colour(colour(metric.color()));
    let plotted = Series::new(|p: &Plot| p.at).line(line);
    let inner = vec![
        AxisMarker::left_edge().into_inner(),
        AxisMarker::bottom_edge().into_inner(),
        YGridLine::default().into_inner(),
        XGuideLine::over_data().into_inner(),
        YGuideLine::over_mouse().into_inner(),
    ];

    view! {
        <div class="panel">
            <h3>{metric.label()}</h3>
            <Chart
                aspect_ratio=AspectRatio::from_env_width_apply_ratio(1.6)
                left=TickLabels::aligned_floats()
                bottom=timestamp_ticks()
                inner=inner
                tooltip=Tooltip::left_cursor()
                series=plotted
                data=data
            />
        </div>
    }
}
