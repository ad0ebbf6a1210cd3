use crate::hooks::use_comments::DataState;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StatusProps {
    pub state: DataState,
    pub on_reload: Callback<()>,
}

#[function_component(Status)]
pub fn status(props: &StatusProps) -> Html {
    let onclick = {
        let on_reload = props.on_reload.clone();
        Callback::from(move |_| on_reload.emit(()))
    };

    match &props.state {
        DataState::Loading => html! {
            <div class="status loading">
                <div class="spinner"></div>
                <p>{"Loading comments..."}</p>
            </div>
        },
        DataState::Loaded(store) => html! {
            <div class="status success">
                <p>{format!("✅ {} comments loaded", store.comments().len())}</p>
                <button class="reload-button" {onclick}>{"Reload"}</button>
            </div>
        },
        DataState::Error(msg) => html! {
            <div class="status error">
                <p>{"❌ Error: "}{msg}</p>
                <button class="reload-button" {onclick}>{"Retry"}</button>
            </div>
        },
    }
}
