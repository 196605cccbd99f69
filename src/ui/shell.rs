use dioxus::prelude::*;

use crate::{
    app::Route,
    ui::theme,
    util::version::{version_label, APP_NAME},
};

#[component]
pub fn Shell(children: Element) -> Element {
    let current_route = use_route::<Route>();
    let nav = use_navigator();

    rsx! {
        div { class: "app-shell",
            header {
                class: "app-header",
                div {
                    h1 { class: "app-title", "🌱 {APP_NAME}" }
                    p {
                        class: "app-tagline",
                        "Pick a crop, stack your boosts, see what the harvest is worth."
                    }
                }
                nav { class: "nav",
                    NavButton {
                        active: matches!(current_route, Route::Calculator {}),
                        onclick: move |_| { nav.push(Route::Calculator {}); },
                        label: "🧮 Calculator",
                    }
                    NavButton {
                        active: matches!(current_route, Route::BestCrops {}),
                        onclick: move |_| { nav.push(Route::BestCrops {}); },
                        label: "🏆 Best Crops",
                    }
                }
            }
            main { class: "app-main",
                {children}
            }
            footer { class: "app-footer",
                "{APP_NAME} {version_label()}"
            }
        }
    }
}

#[component]
fn NavButton(active: bool, onclick: EventHandler<()>, label: &'static str) -> Element {
    rsx! {
        button {
            class: theme::nav_button(active),
            onclick: move |_| onclick.call(()),
            "{label}"
        }
    }
}
