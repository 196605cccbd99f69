use dioxus::prelude::*;

use crate::{
    domain::RankedCrop,
    ui::theme,
    util::format::{format_currency, format_rate},
};

#[derive(Clone, PartialEq)]
pub struct RecommendationRow {
    pub crop_id: String,
    pub name: String,
    pub icon: String,
    pub profit: f64,
    pub profit_per_minute: f64,
}

impl From<&RankedCrop<'_>> for RecommendationRow {
    fn from(ranked: &RankedCrop<'_>) -> Self {
        Self {
            crop_id: ranked.crop.id.clone(),
            name: ranked.crop.name.clone(),
            icon: ranked.crop.icon.clone(),
            profit: ranked.result.profit,
            profit_per_minute: ranked.result.profit_per_minute,
        }
    }
}

/// Best crops for the current pet and modifiers. Clicking one selects it.
#[component]
pub fn RecommendationList(
    rows: Vec<RecommendationRow>,
    pet_name: String,
    on_pick: EventHandler<String>,
) -> Element {
    rsx! {
        div {
            class: "{theme::panel()}",
            h3 { class: "{theme::panel_title()}", "Top crops with {pet_name}" }
            if rows.is_empty() {
                p { class: "empty", "Pick a pet to see recommendations." }
            } else {
                ol {
                    class: "list",
                    for (idx, row) in rows.into_iter().enumerate() {
                        li {
                            key: "{row.crop_id}",
                            class: "list-item",
                            button {
                                class: theme::btn_small(false),
                                onclick: {
                                    let crop_id = row.crop_id.clone();
                                    move |_| on_pick.call(crop_id.clone())
                                },
                                span { class: "list-rank", "#{idx + 1}" }
                                span { class: "table-icon", "{row.icon}" }
                                "{row.name}"
                            }
                            div {
                                span {
                                    class: "{theme::profit_text(row.profit_per_minute)}",
                                    "{format_rate(row.profit_per_minute)}"
                                }
                                span { class: "list-meta", " · {format_currency(row.profit)}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
