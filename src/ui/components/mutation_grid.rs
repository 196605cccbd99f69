use dioxus::prelude::*;

use crate::{
    domain::{AppState, MutationSort},
    ui::theme,
    util::format::format_multiplier,
};

#[derive(Clone, PartialEq)]
struct MutationOption {
    id: String,
    name: String,
    multiplier: f64,
    active: bool,
}

/// Searchable, sortable checkbox grid bound to the calculator state.
#[component]
pub fn MutationGrid() -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let mut query = use_signal(String::new);
    let mut sort = use_signal(MutationSort::default);

    let current_sort = sort();
    let (options, active_count) = state.with(|st| {
        let options = st
            .catalog
            .search_mutations(&query(), current_sort)
            .into_iter()
            .map(|m| MutationOption {
                id: m.id.clone(),
                name: m.name.clone(),
                multiplier: m.multiplier,
                active: st.mutation_ids.contains(&m.id),
            })
            .collect::<Vec<_>>();
        (options, st.mutation_ids.len())
    });

    rsx! {
        div {
            class: "{theme::panel()}",
            div {
                class: "row-between",
                h3 { class: "{theme::panel_title()}", "Mutations ({active_count} active)" }
                button {
                    class: theme::btn_small(false),
                    disabled: active_count == 0,
                    onclick: move |_| state.with_mut(|st| st.clear_mutations()),
                    "Clear"
                }
            }
            div {
                class: "row",
                input {
                    class: "{theme::input_class()}",
                    placeholder: "Search mutations…",
                    value: query(),
                    oninput: move |evt| query.set(evt.value()),
                }
                for option in MutationSort::ALL {
                    button {
                        key: "{option.label()}",
                        class: theme::btn_small(option == current_sort),
                        onclick: move |_| sort.set(option),
                        "{option.label()}"
                    }
                }
            }
            if options.is_empty() {
                p { class: "empty", "No mutation matches your search." }
            }
            div {
                class: "mutation-grid",
                for option in options {
                    MutationCheckbox { key: "{option.id}", option: option.clone() }
                }
            }
        }
    }
}

#[component]
fn MutationCheckbox(option: MutationOption) -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let checkbox_id = format!("mut-{}", option.id);
    let id = option.id.clone();
    let class = if option.active {
        "mutation-item mutation-item-active"
    } else {
        "mutation-item"
    };

    rsx! {
        label {
            class: class,
            r#for: "{checkbox_id}",
            input {
                id: "{checkbox_id}",
                r#type: "checkbox",
                checked: option.active,
                onchange: move |evt| {
                    let active = evt.checked();
                    state.with_mut(|st| st.set_mutation(id.clone(), active));
                },
            }
            span { "{option.name}" }
            span { class: "mutation-multiplier", "{format_multiplier(option.multiplier)}" }
        }
    }
}
