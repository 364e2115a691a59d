pub mod article;
pub mod errors;
