use crate::models::{aggregate, comment::Comment};
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SummaryProps {
    pub comments: Rc<Vec<Comment>>,
}

#[function_component(Summary)]
pub fn summary(props: &SummaryProps) -> Html {
    let summary = use_memo(props.comments.clone(), |comments| {
        aggregate::summary(comments)
    });

    html! {
        <div class="data-summary">
            <div class="summary-grid">
                <div class="summary-item">
                    <h3>{"📝 Number of Comments"}</h3>
                    <p class="summary-value">{summary.comments}</p>
                </div>
                <div class="summary-item">
                    <h3>{"📌 Number of Topics"}</h3>
                    <p class="summary-value">{summary.topics}</p>
                </div>
                <div class="summary-item">
                    <h3>{"🔗 Number of Sources"}</h3>
                    <p class="summary-value">{summary.sources}</p>
                </div>
            </div>
        </div>
    }
}
