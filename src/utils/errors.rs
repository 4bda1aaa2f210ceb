use std::error::Error;

use actix_web::{HttpResponse, ResponseError};
use mongodb::{bson, error::Error as MongoError};
use thiserror::Error;
use bson::ser::Error as BsonError;
use bson::de::Error as BsonDeError;

/// Hard request failures. Field-level validation problems are not errors;
/// they travel back to the client as a rejected submission instead.
#[derive(Debug, Error, Clone)]
pub enum ApiError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal server error: {0}")]
    InternalServerError(String),

    #[error(transparent)]
    MongoError(#[from] MongoError),

    #[error("Serialization error")]
    SerializationError(#[from] BsonError),

    #[error("Deserialization error")]
    DeserializationError(#[from] BsonDeError)
}

impl ResponseError for ApiError {
    fn error_response(&self) -> HttpResponse {
        match self {
            ApiError::NotFound(message) => {
                HttpResponse::NotFound().json(serde_json::json!({
                    "error": message,
                    "code": 404
                }))
            },
            ApiError::BadRequest(message) => {
                HttpResponse::BadRequest().json(serde_json::json!({
                    "error": message,
                    "code": 400
                }))
            },
            ApiError::InternalServerError(message) => {
                HttpResponse::InternalServerError().json(serde_json::json!({
                    "error": message,
                    "code": 500
                }))
            },
            ApiError::MongoError(message) => {
                HttpResponse::InternalServerError().json(serde_json::json!({
                    "error": format!("Database error: {}", message),
                    "code": 500,
                    "details": message.source().map(|src| src.to_string())
                }))
            },
            ApiError::SerializationError(message) => {
                HttpResponse::BadRequest().json(serde_json::json!({
                    "error": "Invalid data format",
                    "code": 400,
                    "details": message.source().map(|src| src.to_string())
                }))
            },
            ApiError::DeserializationError(message) => {
                HttpResponse::BadRequest().json(serde_json::json!({
                    "error": "Invalid data format",
                    "code": 400,
                    "details": message.source().map(|src| src.to_string())
                }))
            }
        }
    }
}

// ----------------------------- TESTS --------------------------------
