use dioxus::prelude::*;

use crate::{
    domain::{GardenEntry, GardenEntryId},
    ui::theme,
    util::format::{format_clock, format_currency},
};

#[component]
pub fn GardenListView(
    entries: Vec<GardenEntry>,
    total: f64,
    on_remove: EventHandler<GardenEntryId>,
    on_clear: EventHandler<()>,
) -> Element {
    let is_empty = entries.is_empty();

    rsx! {
        div {
            class: "{theme::panel()}",
            div {
                class: "row-between",
                h3 { class: "{theme::panel_title()}", "My Garden" }
                button {
                    class: theme::btn_danger(),
                    disabled: is_empty,
                    onclick: move |_| on_clear.call(()),
                    "Clear all"
                }
            }
            if is_empty {
                p { class: "empty", "Add a calculation to start tracking your garden." }
            } else {
                ul {
                    class: "list",
                    for entry in entries {
                        li {
                            key: "{entry.id}",
                            class: "list-item",
                            div {
                                div { "{entry.label}" }
                                div { class: "list-meta", "{format_clock(entry.created_at)}" }
                            }
                            span {
                                class: "{theme::profit_text(entry.profit)}",
                                "{format_currency(entry.profit)}"
                            }
                            button {
                                class: theme::btn_small(false),
                                onclick: {
                                    let id = entry.id;
                                    move |_| on_remove.call(id)
                                },
                                "Remove"
                            }
                        }
                    }
                }
            }
            p { class: "list-total {theme::profit_text(total)}", "Total: {format_currency(total)}" }
        }
    }
}
