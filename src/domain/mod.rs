//! Domain logic for crop valuation lives here.

pub mod app_state;
pub mod catalog;
pub mod crop_table;
pub mod entities;
pub mod evaluation;
pub mod garden_list;
pub mod input;

#[allow(unused_imports)]
pub use app_state::AppState;
#[allow(unused_imports)]
pub use catalog::{Catalog, CatalogError, MutationSort};
#[allow(unused_imports)]
pub use crop_table::{crop_table, sort_rows, CropSort, CropTableRow};
#[allow(unused_imports)]
pub use entities::{Crop, CropId, Mutation, MutationId, Pet, PetId, NONE_MUTATION_ID};
#[allow(unused_imports)]
pub use evaluation::{
    apply_game_pass, evaluate, evaluate_context, friend_boost_multiplier, mutation_multiplier,
    profit_per_minute, rank, RankedCrop, ReferenceKind, ValuationContext, ValuationError,
    ValuationResult,
};
#[allow(unused_imports)]
pub use garden_list::{garden_label, GardenEntry, GardenEntryId, GardenList};
