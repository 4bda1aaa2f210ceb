use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use crate::domain::owner::model::Owner;
use crate::domain::pet::model::PetType;
use crate::utils::errors::ApiError;

#[async_trait]
pub trait OwnerRepository: Send + Sync {
    async fn find_by_id(&self, id: ObjectId) -> Result<Option<Owner>, ApiError>;
    async fn save(&self, owner: &Owner) -> Result<(), ApiError>;
    async fn find_pet_types(&self) -> Result<Vec<PetType>, ApiError>;
}
