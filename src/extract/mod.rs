mod reconstruct;

pub use reconstruct::{reconstruct_sprite, save_sprite};
