use serde::{Deserialize, Serialize};

/// Identifier for crops in the catalog.
pub type CropId = String;
/// Identifier for pets in the catalog.
pub type PetId = String;
/// Identifier for mutations in the catalog.
pub type MutationId = String;

/// Reserved mutation id meaning "no mutation".
pub const NONE_MUTATION_ID: &str = "none";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Crop {
    pub id: CropId,
    pub name: String,
    /// Display glyph or image reference.
    #[serde(default)]
    pub icon: String,
    /// Price to plant/buy one unit.
    pub cost: f64,
    /// Base sale price per unit.
    pub sell: f64,
    /// Harvest-cycle duration in minutes. Zero means the rate is undefined.
    #[serde(default)]
    pub time: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Pet {
    pub id: PetId,
    pub name: String,
    pub multiplier: f64,
}

impl Pet {
    /// A pet that leaves the sell price untouched.
    pub fn baseline() -> Self {
        Self {
            id: "baseline".to_string(),
            name: "No pet".to_string(),
            multiplier: 1.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Mutation {
    pub id: MutationId,
    pub name: String,
    /// 1 + bonus, e.g. 1.5 = +50%.
    pub multiplier: f64,
}

impl Mutation {
    pub fn is_none(&self) -> bool {
        self.id == NONE_MUTATION_ID
    }

    /// The additive portion of the multiplier.
    pub fn bonus(&self) -> f64 {
        if self.is_none() {
            0.0
        } else {
            self.multiplier - 1.0
        }
    }
}
