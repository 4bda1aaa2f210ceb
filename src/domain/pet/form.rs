use chrono::NaiveDate;
use serde::Serialize;
use mongodb::bson::oid::ObjectId;

use crate::domain::owner::model::Owner;
use crate::domain::owner::repository::OwnerRepository;
use crate::domain::pet::model::{Pet, PetFormReceive, PetFormSend, PetType};
use crate::utils::clock::Clock;
use crate::utils::errors::ApiError;

const REQUIRED: &str = "required";
const DUPLICATE: &str = "duplicate";
const TYPE_MISMATCH: &str = "typeMismatch";

/// A single rejected field, sent back so the client can re-display the form.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct FieldError {
    pub field: String,
    pub code: String,
    pub message: String,
}

impl FieldError {
    fn new(field: &str, code: &str, message: &str) -> Self {
        FieldError {
            field: field.to_string(),
            code: code.to_string(),
            message: message.to_string(),
        }
    }
}

/// Terminal state of one submission: either the owner aggregate was saved, or
/// the rules rejected the input and nothing was written.
#[derive(Debug)]
pub enum SubmitOutcome {
    Persisted { redirect: String, message: String },
    Rejected { errors: Vec<FieldError> },
}

impl SubmitOutcome {
    fn persisted(owner_id: ObjectId, message: &str) -> Self {
        SubmitOutcome::Persisted {
            redirect: format!("/owners/{}", owner_id),
            message: message.to_string(),
        }
    }
}

/// Create/edit flow for pets. Built per request from the repository and a
/// clock; holds no state of its own and does no logging.
pub struct PetFormService<'a> {
    owners: &'a dyn OwnerRepository,
    clock: &'a dyn Clock,
}

impl<'a> PetFormService<'a> {

    pub fn new(owners: &'a dyn OwnerRepository, clock: &'a dyn Clock) -> Self {
        PetFormService { owners, clock }
    }

    pub async fn prepare_create(&self, owner_id: ObjectId) -> Result<PetFormSend, ApiError> {
        self.owner(owner_id).await?;
        let types = self.owners.find_pet_types().await?;
        Ok(PetFormSend::blank(types))
    }

    pub async fn prepare_edit(
        &self,
        owner_id: ObjectId,
        pet_id: ObjectId,
    ) -> Result<PetFormSend, ApiError> {
        let owner = self.owner(owner_id).await?;
        let pet = owner
            .pet(pet_id)
            .ok_or_else(|| ApiError::NotFound(format!("Pet ID not found: {}", pet_id)))?;
        let types = self.owners.find_pet_types().await?;
        Ok(PetFormSend::from_pet(pet, types))
    }

    pub async fn submit_create(
        &self,
        owner_id: ObjectId,
        form: PetFormReceive,
    ) -> Result<SubmitOutcome, ApiError> {
        let mut owner = self.owner(owner_id).await?;
        let types = self.owners.find_pet_types().await?;

        let pet_type = match validate(&form, &owner, None, &types, self.clock.today()) {
            Ok(pet_type) => pet_type,
            Err(errors) => return Ok(SubmitOutcome::Rejected { errors }),
        };

        owner.add_pet(Pet {
            id: Some(ObjectId::new()),
            name: form.name,
            birth_date: form.birth_date,
            pet_type,
        });
        self.owners.save(&owner).await?;

        Ok(SubmitOutcome::persisted(owner_id, "New Pet has been Added"))
    }

    pub async fn submit_edit(
        &self,
        owner_id: ObjectId,
        pet_id: ObjectId,
        form: PetFormReceive,
    ) -> Result<SubmitOutcome, ApiError> {
        let mut owner = self.owner(owner_id).await?;
        if owner.pet(pet_id).is_none() {
            return Err(ApiError::NotFound(format!("Pet ID not found: {}", pet_id)));
        }
        let types = self.owners.find_pet_types().await?;

        let pet_type = match validate(&form, &owner, Some(pet_id), &types, self.clock.today()) {
            Ok(pet_type) => pet_type,
            Err(errors) => return Ok(SubmitOutcome::Rejected { errors }),
        };

        let pet = owner
            .pet_mut(pet_id)
            .ok_or_else(|| ApiError::NotFound(format!("Pet ID not found: {}", pet_id)))?;
        pet.name = form.name;
        pet.birth_date = form.birth_date;
        pet.pet_type = pet_type;
        self.owners.save(&owner).await?;

        Ok(SubmitOutcome::persisted(owner_id, "Pet details has been edited"))
    }

    async fn owner(&self, owner_id: ObjectId) -> Result<Owner, ApiError> {
        self.owners
            .find_by_id(owner_id)
            .await?
            .ok_or_else(|| ApiError::NotFound(format!("Owner ID not found: {}", owner_id)))
    }
}

/// Every rule runs and every violation is collected; the caller gets the full
/// set at once. On a clean pass the resolved pet type comes back so the
/// submission can embed it.
fn validate(
    form: &PetFormReceive,
    owner: &Owner,
    exclude_pet_id: Option<ObjectId>,
    types: &[PetType],
    today: NaiveDate,
) -> Result<PetType, Vec<FieldError>> {
    let mut errors = Vec::new();

    if form.name.trim().is_empty() {
        errors.push(FieldError::new("name", REQUIRED, "is required"));
    } else if let Some(existing) = owner.pet_by_name(&form.name) {
        if existing.id != exclude_pet_id {
            errors.push(FieldError::new("name", DUPLICATE, "already exists"));
        }
    }

    if let Some(birth_date) = form.birth_date {
        if birth_date > today {
            errors.push(FieldError::new("birth_date", TYPE_MISMATCH, "cannot be in the future"));
        }
    }

    let pet_type = types.iter().find(|pet_type| pet_type.id == form.type_id).cloned();
    if pet_type.is_none() {
        errors.push(FieldError::new("type_id", TYPE_MISMATCH, "unknown pet type"));
    }

    match pet_type {
        Some(pet_type) if errors.is_empty() => Ok(pet_type),
        _ => Err(errors),
    }
}

// ----------------------------- TESTS --------------------------------
