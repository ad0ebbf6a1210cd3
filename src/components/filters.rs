use chrono::NaiveDate;
use wasm_bindgen::JsCast;
use web_sys::{HtmlInputElement, HtmlOptionElement, HtmlSelectElement};
use yew::prelude::*;

use crate::models::filter::{Category, FilterCriteria};

#[derive(Properties, PartialEq)]
pub struct CategoryPickerProps {
    pub category: Category,
    pub options: Vec<String>,
    pub selected: Vec<String>,
    pub on_change: Callback<(Category, Vec<String>)>,
}

/// Multi-select picker for one category; emits the full selection on change
#[function_component(CategoryPicker)]
pub fn category_picker(props: &CategoryPickerProps) -> Html {
    let on_change = {
        let callback = props.on_change.clone();
        let category = props.category;
        Callback::from(move |e: Event| {
            let target: HtmlSelectElement = e.target_unchecked_into();
            callback.emit((category, selected_values(&target)));
        })
    };

    let label = props.category.label();

    html! {
        <div class="filter-group">
            <label>{format!("{label}: ")}</label>
            <select
                multiple={true}
                class="category-picker"
                onchange={on_change}
                aria-label={format!("Filter by {}", label.to_lowercase())}
            >
                {
                    props.options.iter().map(|value| {
                        let selected = props.selected.contains(value);
                        html! {
                            <option value={value.clone()} {selected}>{value.clone()}</option>
                        }
                    }).collect::<Html>()
                }
            </select>
        </div>
    }
}

fn selected_values(select: &HtmlSelectElement) -> Vec<String> {
    let options = select.selected_options();
    (0..options.length())
        .filter_map(|i| options.item(i))
        .filter_map(|element| element.dyn_into::<HtmlOptionElement>().ok())
        .map(|option| option.value())
        .collect()
}

#[derive(Properties, PartialEq)]
pub struct FilterPanelProps {
    /// Picker options per category, derived from the raw list
    pub options: Vec<(Category, Vec<String>)>,
    pub criteria: FilterCriteria,
    pub on_filter: Callback<(Category, Vec<String>)>,
    pub on_date_range: Callback<(Option<NaiveDate>, Option<NaiveDate>)>,
    pub on_search: Callback<String>,
    pub on_clear: Callback<()>,
}

#[function_component(FilterPanel)]
pub fn filter_panel(props: &FilterPanelProps) -> Html {
    // The range only reaches the store once both ends are picked, so the
    // half-picked bounds live here.
    let start = use_state(|| props.criteria.date_range.map(|r| r.start()));
    let end = use_state(|| props.criteria.date_range.map(|r| r.end()));
    let query = use_state(String::new);
    // Bumped on clear so the pickers are rebuilt; a <select> the user has
    // clicked ignores later changes to its options' `selected` attribute.
    let generation = use_state(|| 0u32);

    let on_start = {
        let start = start.clone();
        let end = end.clone();
        let callback = props.on_date_range.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let value = parse_date_input(&input.value());
            start.set(value);
            callback.emit((value, *end));
        })
    };

    let on_end = {
        let start = start.clone();
        let end = end.clone();
        let callback = props.on_date_range.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let value = parse_date_input(&input.value());
            end.set(value);
            callback.emit((*start, value));
        })
    };

    let on_search = {
        let query = query.clone();
        let callback = props.on_search.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            query.set(input.value());
            callback.emit(input.value());
        })
    };

    let on_clear = {
        let start = start.clone();
        let end = end.clone();
        let query = query.clone();
        let generation = generation.clone();
        let callback = props.on_clear.clone();
        Callback::from(move |_| {
            start.set(None);
            end.set(None);
            query.set(String::new());
            generation.set(generation.wrapping_add(1));
            callback.emit(());
        })
    };

    let format_date = |d: Option<NaiveDate>| {
        d.map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_default()
    };

    html! {
        <div class="filter-panel">
            {
                props.options.iter().map(|(category, options)| {
                    let selected: Vec<String> =
                        props.criteria.values(*category).iter().cloned().collect();
                    html! {
                        <CategoryPicker
                            key={picker_key(*category, *generation)}
                            category={*category}
                            options={options.clone()}
                            {selected}
                            on_change={props.on_filter.clone()}
                        />
                    }
                }).collect::<Html>()
            }

            <div class="filter-group">
                <label>{"Date Range: "}</label>
                <input type="date" value={format_date(*start)} onchange={on_start} aria-label="Start date" />
                <span>{" – "}</span>
                <input type="date" value={format_date(*end)} onchange={on_end} aria-label="End date" />
            </div>

            <div class="filter-group">
                <label>{"Search: "}</label>
                <input
                    type="search"
                    placeholder="Search comments"
                    value={(*query).clone()}
                    oninput={on_search}
                />
            </div>

            <button class="clear-filters" onclick={on_clear}>{"Clear filters"}</button>
        </div>
    }
}

/// Key of a category picker; a new generation forces a fresh `<select>`
pub fn picker_key(category: Category, generation: u32) -> String {
    format!("{}-{generation}", category.label())
}

/// Parses the `yyyy-mm-dd` value of a date input; an emptied input clears the bound
pub fn parse_date_input(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}
