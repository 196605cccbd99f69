//! Session-local list of saved valuations with a running total.

use time::OffsetDateTime;

use super::entities::{Crop, Mutation};

/// Creation time in Unix milliseconds, unique within one list.
pub type GardenEntryId = i64;

#[derive(Clone, Debug, PartialEq)]
pub struct GardenEntry {
    pub id: GardenEntryId,
    pub created_at: OffsetDateTime,
    pub label: String,
    /// Profit at the moment the entry was saved.
    pub profit: f64,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct GardenList {
    entries: Vec<GardenEntry>,
    last_id: Option<GardenEntryId>,
}

impl GardenList {
    pub fn add(
        &mut self,
        label: impl Into<String>,
        profit: f64,
        now: OffsetDateTime,
    ) -> GardenEntryId {
        let stamp = (now.unix_timestamp_nanos() / 1_000_000) as i64;
        let id = match self.last_id {
            Some(last) if stamp <= last => last + 1,
            _ => stamp,
        };
        self.last_id = Some(id);
        self.entries.push(GardenEntry {
            id,
            created_at: now,
            label: label.into(),
            profit,
        });
        id
    }

    pub fn remove(&mut self, id: GardenEntryId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != id);
        self.entries.len() != before
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn entries(&self) -> &[GardenEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total(&self) -> f64 {
        self.entries.iter().map(|entry| entry.profit).sum()
    }
}

/// "3x Carrot" or "3x Carrot (Wet, Shocked)".
pub fn garden_label(quantity: u32, crop: &Crop, mutations: &[&Mutation]) -> String {
    if mutations.is_empty() {
        return format!("{quantity}x {}", crop.name);
    }
    let names = mutations
        .iter()
        .map(|m| m.name.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    format!("{quantity}x {} ({names})", crop.name)
}
