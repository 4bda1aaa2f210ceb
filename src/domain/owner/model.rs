use serde::{Serialize, Deserialize};
use mongodb::bson::oid::ObjectId;

use crate::domain::pet::model::Pet;

/// Aggregate root. Pets are embedded and only ever saved through the owner,
/// so a save is all-or-nothing for the whole document.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Owner {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub city: String,
    pub telephone: String,
    pub pets: Vec<Pet>,
}

impl Owner {

    pub fn pet(&self, pet_id: ObjectId) -> Option<&Pet> {
        self.pets.iter().find(|pet| pet.id == Some(pet_id))
    }

    pub fn pet_mut(&mut self, pet_id: ObjectId) -> Option<&mut Pet> {
        self.pets.iter_mut().find(|pet| pet.id == Some(pet_id))
    }

    /// Name lookup is case-insensitive; pet names must stay unique per owner
    /// under that comparison.
    pub fn pet_by_name(&self, name: &str) -> Option<&Pet> {
        let name = name.to_lowercase();
        self.pets.iter().find(|pet| pet.name.to_lowercase() == name)
    }

    pub fn add_pet(&mut self, pet: Pet) {
        self.pets.push(pet);
    }
}
