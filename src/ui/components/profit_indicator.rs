use dioxus::prelude::*;

use crate::{
    domain::ValuationResult,
    util::format::{format_currency, format_multiplier},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ProfitStatus {
    Gain,
    Loss,
    BreakEven,
}

impl ProfitStatus {
    fn of(profit: f64) -> Self {
        if profit > 0.0 {
            Self::Gain
        } else if profit < 0.0 {
            Self::Loss
        } else {
            Self::BreakEven
        }
    }
}

/// Breakdown of how the current profit was reached.
#[component]
pub fn ProfitIndicator(result: ValuationResult, game_pass: bool) -> Element {
    let (label, theme) = match ProfitStatus::of(result.profit) {
        ProfitStatus::Gain => ("Profitable", "indicator indicator-gain"),
        ProfitStatus::Loss => ("Losing", "indicator indicator-loss"),
        ProfitStatus::BreakEven => ("Break-even", "indicator indicator-even"),
    };
    let multipliers = format!(
        "Mutations {} · Friends {}",
        format_multiplier(result.mutation_multiplier),
        format_multiplier(result.friend_multiplier)
    );
    let unit_price = format!("Sell price per unit {}", format_currency(result.unit_sell_price));
    let margin = format!(
        "Revenue {} − cost {}{}",
        format_currency(result.total_sell_value),
        format_currency(result.total_cost),
        if game_pass { ", ×2 game pass" } else { "" }
    );

    rsx! {
        div {
            class: "{theme}",
            div {
                class: "row-between",
                span { class: "panel-title", "Breakdown" }
                span { class: "panel-title", "{label}" }
            }
            p { class: "indicator-line", "{multipliers}" }
            p { class: "indicator-line", "{unit_price}" }
            p { class: "indicator-line", "{margin}" }
        }
    }
}
