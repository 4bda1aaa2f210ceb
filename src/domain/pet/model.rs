use chrono::NaiveDate;
use serde::{Serialize, Deserialize};
use mongodb::bson::oid::ObjectId;

/// Reference data shared read-only across all owners.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PetType {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub name: String,
}

/// A pet embedded in its owner's document. `id` is `None` until the pet has
/// been attached and saved, which is the only thing that makes it "new".
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Pet {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    pub birth_date: Option<NaiveDate>,
    pub pet_type: PetType,
}

impl Pet {
    pub fn is_new(&self) -> bool {
        self.id.is_none()
    }
}

/// Submitted form fields. Ids are never bound from the payload; the owner id
/// comes from the path and pet ids are assigned on persistence.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct PetFormReceive {
    pub name: String,
    pub birth_date: Option<NaiveDate>,
    pub type_id: ObjectId,
}

/// Form display payload: the pet being created or edited plus the selectable
/// pet types.
#[derive(Serialize, Deserialize, Debug)]
pub struct PetFormSend {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    pub birth_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_id: Option<ObjectId>,
    pub types: Vec<PetType>,
}

impl PetFormSend {

    pub fn blank(types: Vec<PetType>) -> Self {
        PetFormSend {
            id: None,
            name: String::new(),
            birth_date: None,
            type_id: None,
            types,
        }
    }

    pub fn from_pet(pet: &Pet, types: Vec<PetType>) -> Self {
        PetFormSend {
            id: pet.id,
            name: pet.name.clone(),
            birth_date: pet.birth_date,
            type_id: Some(pet.pet_type.id),
            types,
        }
    }
}
