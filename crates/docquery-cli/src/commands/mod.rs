pub mod select;
pub mod wellformed;
