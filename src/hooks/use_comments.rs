use std::rc::Rc;
use yew::prelude::*;

use crate::config::Config;
use crate::models::{filter::Category, store::CommentStore};
use crate::services::api::{ApiConfig, CommentClient};
use chrono::NaiveDate;
use wasm_bindgen_futures::spawn_local;

#[derive(Clone, PartialEq, Debug)]
pub enum DataState {
    Loading,
    Loaded(Rc<CommentStore>),
    Error(String),
}

impl DataState {
    /// Returns true if the state is loading
    pub fn is_loading(&self) -> bool {
        matches!(self, DataState::Loading)
    }

    /// Returns the store if it is loaded
    pub fn data(&self) -> Option<&Rc<CommentStore>> {
        match self {
            DataState::Loaded(store) => Some(store),
            _ => None,
        }
    }
}

/// Transitions of the dashboard state
#[derive(Debug, Clone, PartialEq)]
pub enum CommentsAction {
    /// A fetch finished; the store holds the new raw list
    Fetched(CommentStore),
    /// A fetch failed
    Failed(String),
    SetFilter(Category, Vec<String>),
    SetDateRange(Option<NaiveDate>, Option<NaiveDate>),
    SetTextQuery(String),
    ClearFilters,
}

impl Reducible for DataState {
    type Action = CommentsAction;

    /// Actions apply to the state current at dispatch time, so a fetch that
    /// resolves after a filter change keeps that change.
    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            CommentsAction::Fetched(mut fetched) => {
                if let Some(store) = self.data() {
                    fetched.apply_criteria(store.criteria().clone());
                }
                Rc::new(DataState::Loaded(Rc::new(fetched)))
            }
            CommentsAction::Failed(message) => Rc::new(DataState::Error(message)),
            action => {
                // Filters only exist once comments are loaded
                let Some(store) = self.data().cloned() else {
                    return self;
                };
                let mut next = (*store).clone();
                apply_filter(&mut next, action);
                Rc::new(DataState::Loaded(Rc::new(next)))
            }
        }
    }
}

fn apply_filter(store: &mut CommentStore, action: CommentsAction) {
    match action {
        CommentsAction::SetFilter(category, values) => store.set_filter(category, values),
        CommentsAction::SetDateRange(start, end) => store.set_date_range(start, end),
        CommentsAction::SetTextQuery(query) => store.set_text_query(Some(&query)),
        CommentsAction::ClearFilters => store.clear_filters(),
        CommentsAction::Fetched(_) | CommentsAction::Failed(_) => {}
    }
}

/// Handle returned by `use_comments` hook
#[derive(Clone, PartialEq)]
pub struct CommentsHandle {
    pub state: DataState,
    pub set_filter: Callback<(Category, Vec<String>)>,
    pub set_date_range: Callback<(Option<NaiveDate>, Option<NaiveDate>)>,
    pub set_text_query: Callback<String>,
    pub clear_filters: Callback<()>,
    pub reload: Callback<()>,
}

/// Owns the comment store: loads it once on mount, again on `reload`, and
/// publishes a new snapshot after every filter change.
#[hook]
pub fn use_comments() -> CommentsHandle {
    let state = use_reducer_eq(|| DataState::Loading);
    let trigger = use_state(|| 0u32); // Reload trigger

    {
        let dispatcher = state.dispatcher();
        let trigger_value = *trigger;

        use_effect_with(trigger_value, move |_| {
            spawn_local(async move {
                let config = ApiConfig::builder()
                    .base_url(Config::api_base_url())
                    .build();

                let client = match CommentClient::with_config(config) {
                    Ok(client) => client,
                    Err(e) => {
                        dispatcher.dispatch(CommentsAction::Failed(e.to_string()));
                        return;
                    }
                };

                let mut fetched = CommentStore::new();
                match fetched.load(&client).await {
                    Ok(report) => {
                        if report.rejected > 0 {
                            gloo::console::warn!(&format!(
                                "Excluded {} malformed comment record(s), kept {}",
                                report.rejected, report.loaded
                            ));
                        }
                        dispatcher.dispatch(CommentsAction::Fetched(fetched));
                    }
                    Err(e) => {
                        gloo::console::error!(&format!("Failed to load comments: {e}"));
                        dispatcher.dispatch(CommentsAction::Failed(e.to_string()));
                    }
                }
            });

            || () // Cleanup
        });
    }

    let set_filter = {
        let dispatcher = state.dispatcher();
        Callback::from(move |(category, values): (Category, Vec<String>)| {
            dispatcher.dispatch(CommentsAction::SetFilter(category, values));
        })
    };

    let set_date_range = {
        let dispatcher = state.dispatcher();
        Callback::from(move |(start, end): (Option<NaiveDate>, Option<NaiveDate>)| {
            dispatcher.dispatch(CommentsAction::SetDateRange(start, end));
        })
    };

    let set_text_query = {
        let dispatcher = state.dispatcher();
        Callback::from(move |query: String| {
            dispatcher.dispatch(CommentsAction::SetTextQuery(query));
        })
    };

    let clear_filters = {
        let dispatcher = state.dispatcher();
        Callback::from(move |()| dispatcher.dispatch(CommentsAction::ClearFilters))
    };

    let reload = {
        let trigger = trigger.clone();
        Callback::from(move |()| trigger.set(*trigger + 1))
    };

    CommentsHandle {
        state: (*state).clone(),
        set_filter,
        set_date_range,
        set_text_query,
        clear_filters,
        reload,
    }
}
