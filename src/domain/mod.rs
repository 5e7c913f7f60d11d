pub mod errors;
pub mod mapping;
pub mod value_objects;
