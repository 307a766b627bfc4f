pub mod document;
pub mod item;
