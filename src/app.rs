use dioxus::{logger::tracing::warn, prelude::*, signals::Signal};

use crate::{
    domain::{AppState, Catalog},
    ui::{
        components::toast::{Toast, ToastQueue},
        pages::{BestCropsPage, CalculatorPage},
        shell::Shell,
    },
    util::assets::{self, embedded_catalog},
};

/// How many crops the recommendation panel lists.
pub const RECOMMENDATION_COUNT: usize = 5;

#[derive(Routable, Clone, PartialEq)]
pub enum Route {
    #[route("/")]
    Calculator {},
    #[route("/best-crops")]
    BestCrops {},
}

#[component]
pub fn App() -> Element {
    let catalog = use_hook(|| embedded_catalog().map_err(|err| err.to_string()));

    let toasts = use_signal(ToastQueue::default);
    use_context_provider(|| toasts);

    rsx! {
        document::Style { "{assets::main_css()}" }
        match catalog {
            Ok(catalog) => rsx! { CalculatorRoot { catalog } },
            Err(message) => rsx! { CatalogUnavailable { message } },
        }
        Toast {}
    }
}

/// Owns the calculator state once the catalog is known to be valid.
#[component]
fn CalculatorRoot(catalog: Catalog) -> Element {
    let state: Signal<AppState> = use_signal(move || AppState::new(catalog));
    use_context_provider(|| state);

    rsx! { Router::<Route> {} }
}

#[component]
fn CatalogUnavailable(message: String) -> Element {
    use_hook({
        let message = message.clone();
        move || warn!("Catalog unavailable, calculator disabled: {message}")
    });

    rsx! {
        div { class: "app-shell",
            main { class: "app-main",
                div {
                    class: "error-panel",
                    h2 { "The crop catalog could not be loaded." }
                    p { "{message}" }
                }
            }
        }
    }
}

#[component]
pub fn Calculator() -> Element {
    rsx! { Shell { CalculatorPage {} } }
}

#[component]
pub fn BestCrops() -> Element {
    rsx! { Shell { BestCropsPage {} } }
}
