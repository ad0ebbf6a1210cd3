use yew::prelude::*;

use sentiment_dashboard::components::{
    CommentTable, FilterPanel, SentimentCharts, WordCharts, status::Status, summary::Summary,
};
use sentiment_dashboard::hooks::use_comments::use_comments;
use sentiment_dashboard::models::filter::Category;

#[function_component(App)]
fn app() -> Html {
    let handle = use_comments();

    html! {
        <div class="app-container">
            <header class="app-header">
                <h1>{"📊 Sentiment Analysis Report"}</h1>
            </header>

            <main class="app-main">
                <section class="status-section">
                    <Status state={handle.state.clone()} on_reload={handle.reload.clone()} />
                </section>

                if let Some(store) = handle.state.data() {
                    <section class="data-section">
                        <h2>{"Summary Statistics"}</h2>
                        <Summary comments={store.filtered_handle()} />
                    </section>

                    <section class="filter-section">
                        <h2>{"Filters"}</h2>
                        <FilterPanel
                            options={Category::all().iter().map(|c| (*c, store.options(*c))).collect::<Vec<_>>()}
                            criteria={store.criteria().clone()}
                            on_filter={handle.set_filter.clone()}
                            on_date_range={handle.set_date_range.clone()}
                            on_search={handle.set_text_query.clone()}
                            on_clear={handle.clear_filters.clone()}
                        />
                    </section>

                    <SentimentCharts comments={store.filtered_handle()} />

                    <section class="chart-section">
                        <h2>{"Top Words by Topic"}</h2>
                        <WordCharts comments={store.filtered_handle()} />
                    </section>

                    <section class="data-section">
                        <h2>{"Filtered Comments"}</h2>
                        <CommentTable comments={store.filtered_handle()} />
                    </section>
                }
            </main>

            <style>
                {include_str!("style.css")}
            </style>
        </div>
    }
}

fn main() {
    console_error_panic_hook::set_once();
    yew::Renderer::<App>::new().render();
}
