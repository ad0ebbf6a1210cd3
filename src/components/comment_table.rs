use crate::config::Config;
use crate::models::comment::Comment;
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CommentTableProps {
    pub comments: Rc<Vec<Comment>>,
}

/// Table of the filtered comments, capped at `Config::TABLE_ROW_LIMIT` rows
#[function_component(CommentTable)]
pub fn comment_table(props: &CommentTableProps) -> Html {
    let total = props.comments.len();
    let shown = total.min(Config::TABLE_ROW_LIMIT);

    html! {
        <div class="comment-table">
            <p class="table-caption">{format!("Showing {shown} of {total} comments")}</p>
            <table>
                <thead>
                    <tr>
                        <th>{"Date"}</th>
                        <th>{"Source"}</th>
                        <th>{"Topic"}</th>
                        <th>{"Sentiment"}</th>
                        <th>{"Comment"}</th>
                    </tr>
                </thead>
                <tbody>
                    {
                        props.comments.iter().take(shown).map(|c| html! {
                            <tr>
                                <td>{c.date.format("%Y-%m-%d %H:%M").to_string()}</td>
                                <td>{c.source.clone()}</td>
                                <td>{c.topic.clone()}</td>
                                <td class={format!("sentiment-{}", c.sentiment.label().to_lowercase())}>
                                    {c.sentiment.label().to_string()}
                                </td>
                                <td>{c.text.clone()}</td>
                            </tr>
                        }).collect::<Html>()
                    }
                </tbody>
            </table>
        </div>
    }
}
