pub mod conjugation;
pub mod context;
pub mod resolver;
pub mod select;
