use dioxus::prelude::*;

use crate::{
    domain::{CropSort, CropTableRow},
    ui::theme,
    util::format::{format_currency, format_minutes, format_rate},
};

#[component]
pub fn CropTable(
    rows: Vec<CropTableRow>,
    sort: CropSort,
    on_sort: EventHandler<CropSort>,
) -> Element {
    let count = rows.len();

    rsx! {
        div {
            class: "{theme::panel()}",
            header {
                class: "row-between",
                h3 { class: "{theme::panel_title()}", "All Crops" }
                span { class: "list-meta", "{count} crops" }
            }
            div {
                class: "row",
                span { class: "list-meta", "Sort:" }
                for option in CropSort::ALL {
                    button {
                        key: "{option.label()}",
                        class: theme::btn_small(option == sort),
                        onclick: move |_| on_sort.call(option),
                        "{option.label()}"
                    }
                }
            }
            if rows.is_empty() {
                p { class: "empty", "The catalog has no crops." }
            } else {
                table {
                    class: "{theme::table()}",
                    thead {
                        tr {
                            th { "Crop" }
                            th { class: "num", "Cost" }
                            th { class: "num", "Sell" }
                            th { class: "num", "Time" }
                            th { class: "num", "Raw Profit" }
                            th { class: "num", "Profit / min" }
                        }
                    }
                    tbody {
                        for row in rows {
                            tr {
                                key: "{row.id}",
                                td {
                                    span { class: "table-icon", "{row.icon}" }
                                    "{row.name}"
                                }
                                td { class: "num", "{format_currency(row.cost)}" }
                                td { class: "num", "{format_currency(row.sell)}" }
                                td { class: "num", "{format_minutes(row.time)}" }
                                td {
                                    class: "num {theme::profit_text(row.raw_profit)}",
                                    "{format_currency(row.raw_profit)}"
                                }
                                td {
                                    class: "num {theme::profit_text(row.profit_per_minute)}",
                                    "{format_rate(row.profit_per_minute)}"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
