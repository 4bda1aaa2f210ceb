pub mod form;
pub mod model;

pub use form::{FieldError, PetFormService, SubmitOutcome};
pub use model::{Pet, PetType};
