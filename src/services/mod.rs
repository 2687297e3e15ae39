pub mod catalog;
pub mod recommendation;
pub mod selection;
