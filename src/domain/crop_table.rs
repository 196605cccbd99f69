//! Reference table of every crop at base value (no pet, no modifiers).

use std::cmp::Ordering;

use super::{
    catalog::Catalog,
    entities::{Crop, Pet},
    evaluation::{evaluate, ValuationContext},
};

#[derive(Clone, Debug, PartialEq)]
pub struct CropTableRow {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub cost: f64,
    pub sell: f64,
    pub time: f64,
    pub raw_profit: f64,
    pub profit_per_minute: f64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CropSort {
    #[default]
    ProfitPerMinute,
    RawProfit,
    Cost,
}

impl CropSort {
    pub const ALL: [CropSort; 3] = [Self::ProfitPerMinute, Self::RawProfit, Self::Cost];

    pub fn label(&self) -> &'static str {
        match self {
            Self::ProfitPerMinute => "Profit / min",
            Self::RawProfit => "Raw Profit",
            Self::Cost => "Cost",
        }
    }
}

fn row_for(crop: &Crop, baseline: &Pet, context: &ValuationContext) -> CropTableRow {
    let result = evaluate(crop, baseline, &[], context);
    CropTableRow {
        id: crop.id.clone(),
        name: crop.name.clone(),
        icon: crop.icon.clone(),
        cost: crop.cost,
        sell: crop.sell,
        time: crop.time,
        raw_profit: result.profit,
        profit_per_minute: result.profit_per_minute,
    }
}

pub fn crop_table(catalog: &Catalog, sort: CropSort) -> Vec<CropTableRow> {
    let baseline = Pet::baseline();
    let mut rows: Vec<CropTableRow> = catalog
        .crops
        .iter()
        .map(|crop| {
            let context = ValuationContext::new(crop.id.clone(), baseline.id.clone());
            row_for(crop, &baseline, &context)
        })
        .collect();
    sort_rows(&mut rows, sort);
    rows
}

/// Stable sort: profit columns descending, cost ascending.
pub fn sort_rows(rows: &mut [CropTableRow], sort: CropSort) {
    rows.sort_by(|a, b| {
        let ord = match sort {
            CropSort::ProfitPerMinute => b.profit_per_minute.partial_cmp(&a.profit_per_minute),
            CropSort::RawProfit => b.raw_profit.partial_cmp(&a.raw_profit),
            CropSort::Cost => a.cost.partial_cmp(&b.cost),
        };
        ord.unwrap_or(Ordering::Equal)
    });
}
