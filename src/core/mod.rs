pub mod errors;
pub mod models;

pub use errors::PraepdrillError;
pub use models::{ GrammaticalCase, Preposition, VerbCard };
