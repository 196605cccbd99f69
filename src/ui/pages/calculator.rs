use dioxus::prelude::*;
use time::OffsetDateTime;

use crate::{
    app::RECOMMENDATION_COUNT,
    domain::{AppState, GardenEntry, GardenEntryId, ValuationResult},
    ui::{
        components::{
            garden_list::GardenListView,
            kpi_card::KpiCard,
            mutation_grid::MutationGrid,
            profit_indicator::ProfitIndicator,
            recommendation_list::{RecommendationList, RecommendationRow},
            toast::{notify, GardenNotice, ToastQueue},
        },
        theme,
    },
    util::format::{format_currency, format_rate},
};

#[derive(Clone, PartialEq)]
struct SelectOption {
    id: String,
    label: String,
}

#[component]
pub fn CalculatorPage() -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<ToastQueue>>();

    let (crop_options, pet_options) = state.with(|st| {
        let crops = st
            .catalog
            .crops
            .iter()
            .map(|c| SelectOption {
                id: c.id.clone(),
                label: format!("{} {}", c.icon, c.name).trim().to_string(),
            })
            .collect::<Vec<_>>();
        let pets = st
            .catalog
            .pets
            .iter()
            .map(|p| SelectOption {
                id: p.id.clone(),
                label: format!("{} (×{})", p.name, p.multiplier),
            })
            .collect::<Vec<_>>();
        (crops, pets)
    });

    let crop_id = state.with(|st| st.crop_id.clone());
    let pet_id = state.with(|st| st.pet_id.clone());
    let quantity_input = state.with(|st| st.quantity_input.clone());
    let friend_input = state.with(|st| st.friend_input.clone());
    let game_pass = state.with(|st| st.game_pass);
    let result: Option<ValuationResult> = state.with(|st| st.result().cloned());
    let stale_reason = state.with(|st| st.last_error().map(|err| err.to_string()));

    let pet_name = state.with(|st| {
        st.catalog
            .pet(&st.pet_id)
            .map(|p| p.name.clone())
            .unwrap_or_else(|| "no pet".to_string())
    });
    let recommendations: Vec<RecommendationRow> = state.with(|st| {
        st.recommendations(RECOMMENDATION_COUNT)
            .iter()
            .map(RecommendationRow::from)
            .collect()
    });
    let garden_entries: Vec<GardenEntry> = state.with(|st| st.garden.entries().to_vec());
    let garden_total = state.with(|st| st.garden.total());

    let (profit_display, rate_display, profit_class) = match result.as_ref() {
        Some(r) => (
            format_currency(r.profit),
            format_rate(r.profit_per_minute),
            theme::profit_text(r.profit),
        ),
        None => ("—".to_string(), "—".to_string(), "text-muted"),
    };

    let on_add_to_garden = move |_| {
        let notice = state.with_mut(|st| {
            st.add_to_garden(OffsetDateTime::now_utc())
                .and_then(|id| st.garden.entries().iter().find(|entry| entry.id == id))
                .map(|entry| GardenNotice::Added {
                    label: entry.label.clone(),
                    profit: entry.profit,
                })
                .unwrap_or(GardenNotice::AddRefused)
        });
        notify(toasts, notice);
    };

    let on_remove = move |id: GardenEntryId| {
        state.with_mut(|st| st.remove_garden_entry(id));
    };

    let on_clear = move |_: ()| {
        let count = state.with_mut(|st| {
            let count = st.garden.len();
            st.clear_garden();
            count
        });
        notify(toasts, GardenNotice::Cleared { count });
    };

    let on_pick = move |crop_id: String| {
        state.with_mut(|st| st.select_crop(crop_id));
    };

    rsx! {
        div { class: "stack",
            section {
                class: "grid-3",
                KpiCard {
                    title: "Profit".to_string(),
                    value: profit_display,
                    description: Some("Per harvest, after cost".to_string()),
                    value_class: profit_class,
                }
                KpiCard {
                    title: "Profit / min".to_string(),
                    value: rate_display,
                    description: Some("Profit over one harvest cycle".to_string()),
                    value_class: profit_class,
                }
                KpiCard {
                    title: "Garden Total".to_string(),
                    value: format_currency(garden_total),
                    description: Some(format!("{} saved calculations", garden_entries.len())),
                    value_class: theme::profit_text(garden_total),
                }
            }

            if let Some(reason) = stale_reason {
                div { class: "error-panel", "Showing the last valid result. {reason}" }
            }

            section {
                class: "grid-main",
                div {
                    class: "stack",
                    div {
                        class: "{theme::panel()}",
                        h3 { class: "{theme::panel_title()}", "Crop & Pet" }
                        div {
                            class: "row",
                            div { class: "field",
                                label { class: "{theme::label_class()}", "Crop" }
                                select {
                                    class: "{theme::input_class()}",
                                    value: "{crop_id}",
                                    onchange: move |evt: FormEvent| {
                                        state.with_mut(|st| st.select_crop(evt.value()))
                                    },
                                    for choice in crop_options {
                                        option {
                                            key: "{choice.id}",
                                            value: "{choice.id}",
                                            selected: choice.id == crop_id,
                                            "{choice.label}"
                                        }
                                    }
                                }
                            }
                            div { class: "field",
                                label { class: "{theme::label_class()}", "Pet" }
                                select {
                                    class: "{theme::input_class()}",
                                    value: "{pet_id}",
                                    onchange: move |evt: FormEvent| {
                                        state.with_mut(|st| st.select_pet(evt.value()))
                                    },
                                    for choice in pet_options {
                                        option {
                                            key: "{choice.id}",
                                            value: "{choice.id}",
                                            selected: choice.id == pet_id,
                                            "{choice.label}"
                                        }
                                    }
                                }
                            }
                        }
                    }

                    div {
                        class: "{theme::panel()}",
                        h3 { class: "{theme::panel_title()}", "Global Settings" }
                        div {
                            class: "row",
                            div { class: "field",
                                label { class: "{theme::label_class()}", "Quantity" }
                                input {
                                    class: "{theme::input_class()}",
                                    r#type: "number",
                                    min: "1",
                                    value: "{quantity_input}",
                                    oninput: move |evt| {
                                        state.with_mut(|st| st.set_quantity_input(evt.value()))
                                    },
                                }
                            }
                            div { class: "field",
                                label { class: "{theme::label_class()}", "Friends (+5% each)" }
                                input {
                                    class: "{theme::input_class()}",
                                    r#type: "number",
                                    min: "0",
                                    value: "{friend_input}",
                                    oninput: move |evt| {
                                        state.with_mut(|st| st.set_friend_input(evt.value()))
                                    },
                                }
                            }
                            label { class: "checkbox-row",
                                input {
                                    r#type: "checkbox",
                                    checked: game_pass,
                                    onchange: move |evt| {
                                        state.with_mut(|st| st.set_game_pass(evt.checked()))
                                    },
                                }
                                "x2 Sell game pass"
                            }
                        }
                    }

                    MutationGrid {}

                    if let Some(result) = result {
                        ProfitIndicator { result, game_pass }
                    }

                    div {
                        button {
                            class: theme::btn_primary(),
                            onclick: on_add_to_garden,
                            "Add to garden"
                        }
                    }
                }

                div {
                    class: "stack",
                    RecommendationList {
                        rows: recommendations,
                        pet_name,
                        on_pick,
                    }
                    GardenListView {
                        entries: garden_entries,
                        total: garden_total,
                        on_remove,
                        on_clear,
                    }
                }
            }
        }
    }
}
