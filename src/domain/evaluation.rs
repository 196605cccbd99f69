//! Crop valuation: modifier composition, profit and ranking.

use std::{cmp::Ordering, collections::BTreeSet, fmt};

use thiserror::Error;

use super::{
    catalog::Catalog,
    entities::{Crop, CropId, Mutation, MutationId, Pet, PetId},
    input::{DEFAULT_FRIEND_COUNT, DEFAULT_QUANTITY},
};

/// Flat sell-price bonus contributed by each friend in the server.
pub const FRIEND_BOOST_PER_FRIEND: f64 = 0.05;
/// Applied to the net margin when the game pass is owned.
pub const GAME_PASS_MULTIPLIER: f64 = 2.0;

/// Everything a single calculation needs besides the catalog itself.
///
/// Quantity and friend count are expected to be normalized already
/// (see [`crate::domain::input`]).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValuationContext {
    pub crop_id: CropId,
    pub pet_id: PetId,
    pub mutation_ids: BTreeSet<MutationId>,
    pub quantity: u32,
    pub friend_count: u32,
    pub game_pass: bool,
}

impl ValuationContext {
    pub fn new(crop_id: impl Into<CropId>, pet_id: impl Into<PetId>) -> Self {
        Self {
            crop_id: crop_id.into(),
            pet_id: pet_id.into(),
            mutation_ids: BTreeSet::new(),
            quantity: DEFAULT_QUANTITY,
            friend_count: DEFAULT_FRIEND_COUNT,
            game_pass: false,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ValuationResult {
    pub mutation_multiplier: f64,
    pub friend_multiplier: f64,
    pub unit_sell_price: f64,
    pub total_cost: f64,
    pub total_sell_value: f64,
    pub profit: f64,
    pub profit_per_minute: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReferenceKind {
    Crop,
    Pet,
}

impl fmt::Display for ReferenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReferenceKind::Crop => write!(f, "crop"),
            ReferenceKind::Pet => write!(f, "pet"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ValuationError {
    #[error("{kind} `{id}` is not in the catalog")]
    UnresolvedReference { kind: ReferenceKind, id: String },
}

/// Mutations stack additively on their bonus: 1.5 and 1.5 make 2.0, not 2.25.
pub fn mutation_multiplier(mutations: &[&Mutation]) -> f64 {
    1.0 + mutations.iter().map(|m| m.bonus()).sum::<f64>()
}

pub fn friend_boost_multiplier(friend_count: u32) -> f64 {
    1.0 + FRIEND_BOOST_PER_FRIEND * friend_count as f64
}

/// The game pass doubles the margin after cost has been subtracted.
pub fn apply_game_pass(net_profit: f64, game_pass: bool) -> f64 {
    if game_pass {
        net_profit * GAME_PASS_MULTIPLIER
    } else {
        net_profit
    }
}

pub fn profit_per_minute(profit: f64, time_minutes: f64) -> f64 {
    if time_minutes > 0.0 {
        profit / time_minutes
    } else {
        0.0
    }
}

/// Values one harvest of `context.quantity` units.
///
/// Only the modifier fields of `context` are read; the crop, pet and
/// mutations are passed in already resolved. Modifiers compose in a fixed
/// order: mutation, friend boost, pet, then the game pass on the margin.
pub fn evaluate(
    crop: &Crop,
    pet: &Pet,
    mutations: &[&Mutation],
    context: &ValuationContext,
) -> ValuationResult {
    let quantity = context.quantity as f64;
    let mutation_multiplier = mutation_multiplier(mutations);
    let friend_multiplier = friend_boost_multiplier(context.friend_count);

    let unit_sell_price = crop.sell * pet.multiplier * mutation_multiplier * friend_multiplier;
    let total_sell_value = unit_sell_price * quantity;
    // Cost scales with quantity; cycle time does not.
    let total_cost = crop.cost * quantity;

    let profit = apply_game_pass(total_sell_value - total_cost, context.game_pass);

    ValuationResult {
        mutation_multiplier,
        friend_multiplier,
        unit_sell_price,
        total_cost,
        total_sell_value,
        profit,
        profit_per_minute: profit_per_minute(profit, crop.time),
    }
}

/// Resolves the context against the catalog and evaluates it.
///
/// Unknown mutation ids are skipped; an unknown crop or pet aborts.
pub fn evaluate_context(
    catalog: &Catalog,
    context: &ValuationContext,
) -> Result<ValuationResult, ValuationError> {
    let crop = catalog
        .crop(&context.crop_id)
        .ok_or_else(|| ValuationError::UnresolvedReference {
            kind: ReferenceKind::Crop,
            id: context.crop_id.clone(),
        })?;
    let pet = catalog
        .pet(&context.pet_id)
        .ok_or_else(|| ValuationError::UnresolvedReference {
            kind: ReferenceKind::Pet,
            id: context.pet_id.clone(),
        })?;
    let mutations = catalog.active_mutations(&context.mutation_ids);

    Ok(evaluate(crop, pet, &mutations, context))
}

#[derive(Clone, Debug, PartialEq)]
pub struct RankedCrop<'a> {
    pub crop: &'a Crop,
    pub result: ValuationResult,
}

impl RankedCrop<'_> {
    pub fn profit_per_minute(&self) -> f64 {
        self.result.profit_per_minute
    }
}

/// Top `top_n` crops by profit per minute under `pet` and the context's
/// quantity, friends and game pass. Selected mutations are ignored.
/// Ties keep catalog order.
pub fn rank<'a>(
    catalog: &'a Catalog,
    pet: &Pet,
    context: &ValuationContext,
    top_n: usize,
) -> Vec<RankedCrop<'a>> {
    let mut ranked: Vec<RankedCrop<'a>> = catalog
        .crops
        .iter()
        .map(|crop| RankedCrop {
            crop,
            result: evaluate(crop, pet, &[], context),
        })
        .collect();

    ranked.sort_by(|a, b| {
        b.profit_per_minute()
            .partial_cmp(&a.profit_per_minute())
            .unwrap_or(Ordering::Equal)
    });
    ranked.truncate(top_n);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    impl ValuationContext {
        fn with_mutation(mut self, id: impl Into<MutationId>) -> Self {
            self.mutation_ids.insert(id.into());
            self
        }

        fn with_quantity(mut self, quantity: u32) -> Self {
            self.quantity = quantity;
            self
        }

        fn with_friends(mut self, friend_count: u32) -> Self {
            self.friend_count = friend_count;
            self
        }

        fn with_game_pass(mut self, game_pass: bool) -> Self {
            self.game_pass = game_pass;
            self
        }
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn crop(id: &str, cost: f64, sell: f64, time: f64) -> Crop {
        Crop {
            id: id.to_string(),
            name: id.to_string(),
            icon: String::new(),
            cost,
            sell,
            time,
        }
    }

    fn pet(multiplier: f64) -> Pet {
        Pet {
            id: "pet".to_string(),
            name: "Pet".to_string(),
            multiplier,
        }
    }

    fn mutation(id: &str, multiplier: f64) -> Mutation {
        Mutation {
            id: id.to_string(),
            name: id.to_string(),
            multiplier,
        }
    }

    fn ctx() -> ValuationContext {
        ValuationContext::new("crop", "pet")
    }

    fn catalog(crops: Vec<Crop>) -> Catalog {
        Catalog {
            crops,
            pets: vec![pet(1.0)],
            mutations: vec![mutation("none", 1.0), mutation("wet", 2.0)],
        }
    }

    #[test]
    fn base_profit_is_sell_times_pet_minus_cost() {
        for (cost, sell, multiplier) in [(10.0, 20.0, 1.0), (35.0, 18.0, 1.75), (1.0, 1.0, 3.0)] {
            let result = evaluate(&crop("c", cost, sell, 5.0), &pet(multiplier), &[], &ctx());
            assert!(approx(result.profit, sell * multiplier - cost));
        }
    }

    #[test]
    fn mutations_stack_on_bonus() {
        let a = mutation("a", 1.2);
        let b = mutation("b", 1.3);
        assert!(approx(mutation_multiplier(&[&a, &b]), 1.5));

        let doubled = mutation("c", 1.5);
        assert!(approx(mutation_multiplier(&[&doubled, &doubled]), 2.0));
    }

    #[test]
    fn none_mutation_contributes_nothing() {
        let none = mutation("none", 3.0);
        assert!(approx(mutation_multiplier(&[&none]), 1.0));
    }

    #[test]
    fn friend_boost_is_linear() {
        assert!(approx(friend_boost_multiplier(0), 1.0));
        assert!(approx(friend_boost_multiplier(10), 1.5));
        assert!(approx(friend_boost_multiplier(40), 3.0));
    }

    #[test]
    fn game_pass_doubles_margin_not_revenue() {
        let context = ctx().with_game_pass(true);
        let result = evaluate(&crop("c", 10.0, 20.0, 1.0), &pet(1.0), &[], &context);
        assert!(approx(result.profit, 20.0));
    }

    #[test]
    fn game_pass_doubles_losses_too() {
        let context = ctx().with_game_pass(true);
        let result = evaluate(&crop("c", 30.0, 20.0, 1.0), &pet(1.0), &[], &context);
        assert!(approx(result.profit, -20.0));
    }

    #[test]
    fn quantity_scales_value_but_not_time() {
        let c = crop("c", 5.0, 10.0, 60.0);
        let single = evaluate(&c, &pet(1.0), &[], &ctx());
        let triple = evaluate(&c, &pet(1.0), &[], &ctx().with_quantity(3));

        assert!(approx(triple.total_cost, 15.0));
        assert!(approx(triple.total_sell_value, 30.0));
        assert!(approx(triple.profit, 15.0));
        assert!(approx(triple.profit_per_minute, 15.0 / 60.0));
        assert!(approx(triple.profit_per_minute, single.profit_per_minute * 3.0));
    }

    #[test]
    fn quantity_is_taken_as_given() {
        // Normalizing quantity belongs to the input layer.
        let result = evaluate(&crop("c", 5.0, 10.0, 60.0), &pet(1.0), &[], &ctx().with_quantity(0));
        assert_eq!(result.total_cost, 0.0);
        assert_eq!(result.total_sell_value, 0.0);
        assert_eq!(result.profit, 0.0);
    }

    #[test]
    fn zero_time_crop_has_zero_rate() {
        for (cost, sell) in [(1.0, 500.0), (500.0, 1.0)] {
            let result = evaluate(&crop("c", cost, sell, 0.0), &pet(2.0), &[], &ctx());
            assert_eq!(result.profit_per_minute, 0.0);
            assert!(result.profit != 0.0);
        }
    }

    #[test]
    fn full_modifier_stack() {
        let gold = mutation("gold", 1.5);
        let context = ctx().with_friends(2).with_game_pass(true);
        let result = evaluate(&crop("c", 50.0, 150.0, 30.0), &pet(2.0), &[&gold], &context);

        assert!(approx(result.mutation_multiplier, 1.5));
        assert!(approx(result.friend_multiplier, 1.1));
        assert!(approx(result.unit_sell_price, 495.0));
        assert!(approx(result.total_cost, 50.0));
        assert!(approx(result.profit, 890.0));
        assert!((result.profit_per_minute - 29.6667).abs() < 1e-3);
    }

    #[test]
    fn evaluate_context_rejects_unknown_crop_and_pet() {
        let catalog = catalog(vec![crop("carrot", 10.0, 20.0, 5.0)]);

        let err = evaluate_context(&catalog, &ValuationContext::new("beet", "pet")).unwrap_err();
        assert_eq!(
            err,
            ValuationError::UnresolvedReference {
                kind: ReferenceKind::Crop,
                id: "beet".to_string()
            }
        );

        let context = ValuationContext::new("carrot", "dragon");
        let err = evaluate_context(&catalog, &context).unwrap_err();
        assert!(matches!(
            err,
            ValuationError::UnresolvedReference {
                kind: ReferenceKind::Pet,
                ..
            }
        ));
    }

    #[test]
    fn evaluate_context_skips_unknown_mutations() {
        let catalog = catalog(vec![crop("carrot", 10.0, 20.0, 5.0)]);
        let context = ValuationContext::new("carrot", "pet")
            .with_mutation("wet")
            .with_mutation("glitter");
        let result = evaluate_context(&catalog, &context).unwrap();
        assert!(approx(result.mutation_multiplier, 2.0));
        assert!(approx(result.profit, 30.0));
    }

    #[test]
    fn rank_orders_by_rate_and_ignores_mutations() {
        let catalog = catalog(vec![
            crop("slow", 10.0, 100.0, 60.0),
            crop("fast", 10.0, 40.0, 5.0),
            crop("instant", 1.0, 1000.0, 0.0),
            crop("mid", 10.0, 70.0, 10.0),
        ]);
        let context = ValuationContext::new("slow", "pet").with_mutation("wet");
        let ranked = rank(&catalog, &pet(1.0), &context, 3);

        let ids: Vec<_> = ranked.iter().map(|r| r.crop.id.as_str()).collect();
        assert_eq!(ids, vec!["fast", "mid", "slow"]);
        assert!(approx(ranked[0].profit_per_minute(), 6.0));
    }

    #[test]
    fn rank_is_stable_and_deterministic() {
        let catalog = catalog(vec![
            crop("a", 10.0, 20.0, 10.0),
            crop("b", 20.0, 40.0, 20.0),
            crop("c", 5.0, 10.0, 5.0),
            crop("d", 1.0, 50.0, 1.0),
        ]);
        let context = ctx().with_friends(10).with_game_pass(true);

        let first = rank(&catalog, &pet(1.5), &context, 10);
        let second = rank(&catalog, &pet(1.5), &context, 10);
        assert_eq!(first, second);

        let ids: Vec<_> = first.iter().map(|r| r.crop.id.as_str()).collect();
        assert_eq!(ids, vec!["d", "a", "b", "c"]);
    }

    #[test]
    fn rank_handles_small_catalogs() {
        let catalog = catalog(vec![crop("only", 1.0, 2.0, 1.0)]);
        assert_eq!(rank(&catalog, &pet(1.0), &ctx(), 5).len(), 1);
        assert!(rank(&catalog, &pet(1.0), &ctx(), 0).is_empty());
    }
}
