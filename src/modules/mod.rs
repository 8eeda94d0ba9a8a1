pub mod post;
pub mod terminal;
