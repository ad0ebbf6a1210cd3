use charming::{
    Chart as CharmingChart,
    component::{Axis, Grid, Legend, Title},
    datatype::{DataPoint, DataPointItem},
    element::{
        AxisLabel, AxisPointer, AxisPointerType, AxisType, Color, LineStyle, LineStyleType,
        SplitLine, TextStyle, Tooltip, Trigger,
    },
    renderer::WasmRenderer,
    series::{Bar, Line, Pie},
};
use std::rc::Rc;
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::config::Config;
use crate::models::aggregate::{SeriesPoint, SourceTrend};
use crate::utils::debounce::create_debounced_resize_listener;

const TITLE_COLOR: &str = "#1f2937";
const AXIS_COLOR: &str = "#6b7280";
const GRID_COLOR: &str = "#e5e7eb";

/// Chart-ready data, one variant per kind of chart on the page
#[derive(Debug, Clone, PartialEq)]
pub enum ChartSpec {
    /// Share of each sentiment label
    Pie(Vec<SeriesPoint>),
    /// Per-comment sentiment trend
    Line(Vec<SeriesPoint>),
    /// Counts per category label
    Bar {
        points: Vec<SeriesPoint>,
        color: &'static str,
    },
    /// Percent positive per day, one line per source
    Trend(Vec<SourceTrend>),
}

impl ChartSpec {
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Pie(points) | Self::Line(points) | Self::Bar { points, .. } => points.is_empty(),
            Self::Trend(trends) => trends.is_empty(),
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ChartProps {
    /// DOM id the renderer draws into; must be unique on the page
    pub id: AttrValue,
    pub title: AttrValue,
    pub spec: Rc<ChartSpec>,
}

#[function_component(Chart)]
pub fn chart(props: &ChartProps) -> Html {
    let container_ref = use_node_ref();

    // The resize listener captures the id, so a new id must replace it
    use_effect_with(
        (
            props.id.clone(),
            props.title.clone(),
            props.spec.clone(),
            container_ref.clone(),
        ),
        move |(id, title, spec, container_ref)| {
            let listener = container_ref.cast::<HtmlElement>().and_then(|container| {
                render_chart(&container, id, title, spec);

                let (id, title, spec) = (id.clone(), title.clone(), spec.clone());
                create_debounced_resize_listener(
                    move || render_chart(&container, &id, &title, &spec),
                    Config::RESIZE_DEBOUNCE_MS,
                )
            });

            move || drop(listener)
        },
    );

    if props.spec.is_empty() {
        return html! {
            <div class="chart-container empty">
                <p>{"No comments match the current filters"}</p>
            </div>
        };
    }

    html! {
        <div class="chart-container" ref={container_ref}>
            <div id={props.id.clone()} />
        </div>
    }
}

/// Builds a DOM id from `prefix` and an arbitrary label.
///
/// ASCII letters and digits pass through; every other character becomes
/// `_` plus its hex code point, so distinct labels never share an id.
pub fn chart_id(prefix: &str, label: &str) -> String {
    let mut id = format!("{prefix}-");
    for c in label.chars() {
        if c.is_ascii_alphanumeric() {
            id.push(c);
        } else {
            id.push_str(&format!("_{:x}", u32::from(c)));
        }
    }
    id
}

fn render_chart(container: &HtmlElement, id: &str, title: &str, spec: &ChartSpec) {
    let width = container.client_width().cast_unsigned();
    let height = container.client_height().cast_unsigned();

    if width == 0 || height == 0 {
        return;
    }

    let chart = build_chart(title, spec);
    if let Err(e) = WasmRenderer::new(width, height).render(id, &chart) {
        web_sys::console::error_1(&format!("Render error: {e:?}").into());
    }
}

/// Builds the chart description for `spec`
pub fn build_chart(title: &str, spec: &ChartSpec) -> CharmingChart {
    let chart = CharmingChart::new().title(
        Title::new()
            .text(title)
            .left("center")
            .text_style(TextStyle::new().font_size(16).color(TITLE_COLOR)),
    );

    match spec {
        ChartSpec::Pie(points) => build_pie(chart, points),
        ChartSpec::Line(points) => build_line(chart, points),
        ChartSpec::Bar { points, color } => build_bar(chart, points, color),
        ChartSpec::Trend(trends) => build_trend(chart, trends),
    }
}

fn build_pie(chart: CharmingChart, points: &[SeriesPoint]) -> CharmingChart {
    let data: Vec<DataPointItem> = points
        .iter()
        .map(|p| DataPointItem::new(p.value).name(p.label.clone()))
        .collect();

    chart
        .color(Config::PIE_COLORS.iter().map(|c| Color::from(*c)).collect())
        .tooltip(Tooltip::new().trigger(Trigger::Item))
        .legend(Legend::new().bottom("0"))
        .series(Pie::new().name("Sentiment").radius("60%").data(data))
}

fn build_line(chart: CharmingChart, points: &[SeriesPoint]) -> CharmingChart {
    let labels: Vec<String> = points.iter().map(|p| p.label.clone()).collect();
    let values: Vec<f64> = points.iter().map(|p| p.value).collect();

    with_axes(chart, labels, Some((-1.0, 1.0)))
        .tooltip(Tooltip::new().trigger(Trigger::Axis))
        .series(Line::new().name("Sentiment value").data(values))
}

fn build_bar(chart: CharmingChart, points: &[SeriesPoint], color: &str) -> CharmingChart {
    let labels: Vec<String> = points.iter().map(|p| p.label.clone()).collect();
    let values: Vec<f64> = points.iter().map(|p| p.value).collect();

    with_axes(chart, labels, None)
        .color(vec![Color::from(color)])
        .tooltip(
            Tooltip::new()
                .trigger(Trigger::Axis)
                .axis_pointer(AxisPointer::new().type_(AxisPointerType::Shadow)),
        )
        .series(Bar::new().name("Count").data(values).bar_width("60%"))
}

fn build_trend(chart: CharmingChart, trends: &[SourceTrend]) -> CharmingChart {
    let mut days: Vec<_> = trends
        .iter()
        .flat_map(|t| t.points.iter().map(|(day, _)| *day))
        .collect();
    days.sort_unstable();
    days.dedup();

    let labels: Vec<String> = days.iter().map(|d| d.format("%Y-%m-%d").to_string()).collect();

    let chart = with_axes(chart, labels, Some((0.0, 100.0)))
        .tooltip(Tooltip::new().trigger(Trigger::Axis))
        .legend(Legend::new().bottom("0"));

    trends.iter().fold(chart, |chart, trend| {
        // Days without comments from this source are left as gaps ("-")
        let data: Vec<DataPoint> = days
            .iter()
            .map(|day| {
                trend
                    .points
                    .iter()
                    .find(|(d, _)| d == day)
                    .map_or_else(|| DataPoint::from("-"), |(_, pct)| DataPoint::from(*pct))
            })
            .collect();

        chart.series(Line::new().name(trend.source.clone()).data(data))
    })
}

fn with_axes(
    chart: CharmingChart,
    labels: Vec<String>,
    bounds: Option<(f64, f64)>,
) -> CharmingChart {
    let mut y_axis = Axis::new()
        .type_(AxisType::Value)
        .axis_label(AxisLabel::new().color(AXIS_COLOR))
        .split_line(
            SplitLine::new().line_style(
                LineStyle::new()
                    .color(GRID_COLOR)
                    .type_(LineStyleType::Dashed),
            ),
        );
    if let Some((min, max)) = bounds {
        y_axis = y_axis.min(min).max(max);
    }

    chart
        .grid(
            Grid::new()
                .left("8%")
                .right("4%")
                .bottom("18%")
                .contain_label(true),
        )
        .x_axis(
            Axis::new()
                .type_(AxisType::Category)
                .data(labels)
                .axis_label(AxisLabel::new().rotate(45).color(AXIS_COLOR)),
        )
        .y_axis(y_axis)
}
