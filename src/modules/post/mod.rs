pub mod post_client;
pub mod post_dtos;
pub mod post_form;
pub mod post_store;
pub mod post_wall;
