use crate::components::chart::{Chart, ChartSpec, chart_id};
use crate::config::Config;
use crate::models::{
    aggregate::{self, SeriesPoint},
    comment::Comment,
};
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct WordChartsProps {
    pub comments: Rc<Vec<Comment>>,
}

/// One bar chart of the most frequent words per topic
#[function_component(WordCharts)]
pub fn word_charts(props: &WordChartsProps) -> Html {
    let topics = use_memo(props.comments.clone(), |comments| {
        aggregate::top_words(comments, Config::TOP_WORDS_PER_TOPIC)
            .into_iter()
            .map(|topic| {
                let points = topic
                    .words
                    .iter()
                    .map(|(word, count)| SeriesPoint::new(word.clone(), *count as f64))
                    .collect();
                (
                    topic.topic,
                    Rc::new(ChartSpec::Bar {
                        points,
                        color: "#8884d8",
                    }),
                )
            })
            .collect::<Vec<_>>()
    });

    html! {
        <div class="word-charts">
            {
                topics.iter().map(|(topic, spec)| html! {
                    <Chart
                        key={topic.clone()}
                        id={chart_id("words-chart", topic)}
                        title={format!("Topic: {topic}")}
                        spec={spec.clone()}
                    />
                }).collect::<Html>()
            }
        </div>
    }
}
