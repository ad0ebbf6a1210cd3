use crate::components::chart::{Chart, ChartSpec};
use crate::models::{aggregate, comment::Comment};
use std::rc::Rc;
use yew::prelude::*;

/// Series for every chart on the page, derived from one filtered list
struct ChartSet {
    pie: Rc<ChartSpec>,
    line: Rc<ChartSpec>,
    bar: Rc<ChartSpec>,
    sources: Rc<ChartSpec>,
    trend: Rc<ChartSpec>,
}

impl ChartSet {
    fn from_comments(comments: &[Comment]) -> Self {
        Self {
            pie: Rc::new(ChartSpec::Pie(aggregate::pie_series(comments))),
            line: Rc::new(ChartSpec::Line(aggregate::line_series(comments))),
            bar: Rc::new(ChartSpec::Bar {
                points: aggregate::bar_series(comments),
                color: "#82ca9d",
            }),
            sources: Rc::new(ChartSpec::Bar {
                points: aggregate::source_counts(comments).to_series(),
                color: "#648fff",
            }),
            trend: Rc::new(ChartSpec::Trend(aggregate::positive_share_by_day(comments))),
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct SentimentChartsProps {
    pub comments: Rc<Vec<Comment>>,
}

#[function_component(SentimentCharts)]
pub fn sentiment_charts(props: &SentimentChartsProps) -> Html {
    let charts = use_memo(props.comments.clone(), |comments| {
        ChartSet::from_comments(comments)
    });

    html! {
        <>
            <section class="chart-section">
                <h2>{"Pie Chart - Sentiment Distribution"}</h2>
                <Chart id="sentiment-pie" title="Sentiment Distribution" spec={charts.pie.clone()} />
            </section>

            <section class="chart-section">
                <h2>{"Line Chart - Sentiment Trend"}</h2>
                <Chart id="sentiment-line" title="Sentiment Trend" spec={charts.line.clone()} />
                <p class="chart-note">
                    {"Trend based on sentiment value (1 for positive, 0 for neutral, -1 for negative)."}
                </p>
            </section>

            <section class="chart-section">
                <h2>{"Bar Chart - Sentiment Count"}</h2>
                <Chart id="sentiment-bar" title="Sentiment Count" spec={charts.bar.clone()} />
            </section>

            <section class="chart-section">
                <h2>{"Source Distribution"}</h2>
                <Chart id="source-bar" title="Comments per Source" spec={charts.sources.clone()} />
            </section>

            <section class="chart-section">
                <h2>{"Sentiment Change Over Time"}</h2>
                <Chart id="positive-trend" title="Positive Comments (%) per Source" spec={charts.trend.clone()} />
            </section>
        </>
    }
}
