use dioxus::prelude::*;

/// A single headline number. `value_class` tints the value (e.g. gain/loss).
#[component]
pub fn KpiCard(
    title: String,
    value: String,
    description: Option<String>,
    #[props(default)] value_class: &'static str,
) -> Element {
    rsx! {
        div {
            class: "kpi-card",
            h3 { class: "kpi-title", "{title}" }
            p { class: "kpi-value {value_class}", "{value}" }
            if let Some(desc) = description {
                p { class: "kpi-description", "{desc}" }
            }
        }
    }
}
