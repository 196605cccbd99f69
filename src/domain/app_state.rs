use std::collections::BTreeSet;

use dioxus::logger::tracing::{debug, info, warn};
use time::OffsetDateTime;

use super::{
    catalog::Catalog,
    entities::{CropId, MutationId, PetId},
    evaluation::{
        evaluate_context, rank, RankedCrop, ValuationContext, ValuationError, ValuationResult,
    },
    garden_list::{garden_label, GardenEntryId, GardenList},
    input::{parse_friend_count, parse_quantity},
};

/// Calculator state owned by the UI. Every setter recalculates.
#[derive(Clone, Debug)]
pub struct AppState {
    pub catalog: Catalog,
    pub crop_id: CropId,
    pub pet_id: PetId,
    pub mutation_ids: BTreeSet<MutationId>,
    /// Raw text from the quantity field.
    pub quantity_input: String,
    /// Raw text from the friends field.
    pub friend_input: String,
    pub game_pass: bool,
    pub garden: GardenList,
    result: Option<ValuationResult>,
    last_error: Option<ValuationError>,
}

impl AppState {
    pub fn new(catalog: Catalog) -> Self {
        let crop_id = catalog.crops.first().map(|c| c.id.clone()).unwrap_or_default();
        let pet_id = catalog.pets.first().map(|p| p.id.clone()).unwrap_or_default();
        let mut state = Self {
            catalog,
            crop_id,
            pet_id,
            mutation_ids: BTreeSet::new(),
            quantity_input: "1".to_string(),
            friend_input: "0".to_string(),
            game_pass: false,
            garden: GardenList::default(),
            result: None,
            last_error: None,
        };
        state.recalculate();
        state
    }

    /// A fresh context built from the current selection and inputs.
    pub fn context(&self) -> ValuationContext {
        ValuationContext {
            crop_id: self.crop_id.clone(),
            pet_id: self.pet_id.clone(),
            mutation_ids: self.mutation_ids.clone(),
            quantity: parse_quantity(&self.quantity_input),
            friend_count: parse_friend_count(&self.friend_input),
            game_pass: self.game_pass,
        }
    }

    /// Last successful valuation. Kept when a later calculation fails.
    pub fn result(&self) -> Option<&ValuationResult> {
        self.result.as_ref()
    }

    pub fn last_error(&self) -> Option<&ValuationError> {
        self.last_error.as_ref()
    }

    pub fn recalculate(&mut self) {
        let context = self.context();
        match evaluate_context(&self.catalog, &context) {
            Ok(result) => {
                debug!(
                    crop = %context.crop_id,
                    pet = %context.pet_id,
                    profit = result.profit,
                    "recalculated valuation"
                );
                self.result = Some(result);
                self.last_error = None;
            }
            Err(err) => {
                warn!("Valuation skipped: {err}");
                self.last_error = Some(err);
            }
        }
    }

    pub fn select_crop(&mut self, id: impl Into<CropId>) {
        self.crop_id = id.into();
        self.recalculate();
    }

    pub fn select_pet(&mut self, id: impl Into<PetId>) {
        self.pet_id = id.into();
        self.recalculate();
    }

    pub fn set_mutation(&mut self, id: impl Into<MutationId>, active: bool) {
        let id = id.into();
        if active {
            self.mutation_ids.insert(id);
        } else {
            self.mutation_ids.remove(&id);
        }
        self.recalculate();
    }

    pub fn clear_mutations(&mut self) {
        self.mutation_ids.clear();
        self.recalculate();
    }

    pub fn set_quantity_input(&mut self, raw: impl Into<String>) {
        self.quantity_input = raw.into();
        self.recalculate();
    }

    pub fn set_friend_input(&mut self, raw: impl Into<String>) {
        self.friend_input = raw.into();
        self.recalculate();
    }

    pub fn set_game_pass(&mut self, active: bool) {
        self.game_pass = active;
        self.recalculate();
    }

    /// Top crops for the current pet and modifiers; empty if the pet is unknown.
    pub fn recommendations(&self, top_n: usize) -> Vec<RankedCrop<'_>> {
        match self.catalog.pet(&self.pet_id) {
            Some(pet) => rank(&self.catalog, pet, &self.context(), top_n),
            None => Vec::new(),
        }
    }

    /// Snapshots the current valuation into the garden list.
    ///
    /// Returns `None` when the current selection does not produce a result.
    pub fn add_to_garden(&mut self, now: OffsetDateTime) -> Option<GardenEntryId> {
        if self.last_error.is_some() {
            return None;
        }
        let profit = self.result.as_ref()?.profit;
        let context = self.context();
        let crop = self.catalog.crop(&context.crop_id)?;
        let mutations = self.catalog.active_mutations(&context.mutation_ids);
        let label = garden_label(context.quantity, crop, &mutations);

        let id = self.garden.add(label.clone(), profit, now);
        info!(id, %label, profit, "added garden entry");
        Some(id)
    }

    pub fn remove_garden_entry(&mut self, id: GardenEntryId) -> bool {
        let removed = self.garden.remove(id);
        if removed {
            info!(id, "removed garden entry");
        }
        removed
    }

    pub fn clear_garden(&mut self) {
        info!(count = self.garden.len(), "cleared garden list");
        self.garden.clear();
    }
}
