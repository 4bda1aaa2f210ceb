use async_trait::async_trait;
use futures::StreamExt;
use mongodb::bson::doc;
use mongodb::bson::oid::ObjectId;

use crate::infrastructure::database::mongo_context::MongoContext;
use crate::domain::owner::model::Owner;
use crate::domain::owner::repository::OwnerRepository;
use crate::domain::pet::model::PetType;
use crate::utils::errors::ApiError;

pub struct MongoOwnerRepository {
    owners: mongodb::Collection<Owner>,
    pet_types: mongodb::Collection<PetType>
}

impl MongoOwnerRepository {
    pub fn new(context: &MongoContext) -> Self {
        Self {
            owners: context.collection("owners"),
            pet_types: context.collection("pet_types")
        }
    }
}

#[async_trait]
impl OwnerRepository for MongoOwnerRepository {

    async fn find_by_id(&self, id: ObjectId) -> Result<Option<Owner>, ApiError> {
        match self.owners.find_one(doc! { "_id": id }).await {
            Ok(owner) => Ok(owner),
            Err(e) => Err(ApiError::MongoError(e))
        }
    }

    async fn save(&self, owner: &Owner) -> Result<(), ApiError> {
        let id = owner.id
            .ok_or_else(|| ApiError::BadRequest("Cannot save an owner without an id".to_string()))?;

        let result = self.owners.replace_one(doc! { "_id": id }, owner).await?;
        if result.matched_count == 0 {
            return Err(ApiError::NotFound(format!("Owner ID not found: {}", id)));
        }
        Ok(())
    }

    async fn find_pet_types(&self) -> Result<Vec<PetType>, ApiError> {
        let mut cursor = self.pet_types.find(doc! {}).sort(doc! { "name": 1 }).await?;
        let mut types = Vec::new();

        while let Some(doc) = cursor.next().await {
            match doc {
                Ok(pet_type) => types.push(pet_type),
                Err(e) => return Err(ApiError::MongoError(e)),
            }
        }
        Ok(types)
    }
}
