use dioxus::prelude::*;

use crate::{
    domain::{crop_table, AppState, CropSort},
    ui::components::crop_table::CropTable,
};

/// Base-value reference for every crop, independent of pet and modifiers.
#[component]
pub fn BestCropsPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let mut sort = use_signal(CropSort::default);

    let current_sort = sort();
    let rows = state.with(|st| crop_table(&st.catalog, current_sort));

    rsx! {
        div { class: "stack",
            header {
                h1 { class: "app-title", "Best Crops" }
                p {
                    class: "list-meta",
                    "Base sell minus cost per harvest, before pets, mutations and boosts."
                }
            }
            CropTable {
                rows,
                sort: current_sort,
                on_sort: move |next: CropSort| sort.set(next),
            }
        }
    }
}
