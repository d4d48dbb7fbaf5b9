pub mod atlas;
pub mod batch;
pub mod cli;
pub mod error;
pub mod extract;

pub use atlas::{SpriteRecord, parse_atlas};
pub use batch::{BatchRequest, BatchTask, RunState, run_batch, start_batch};
pub use error::BunkaiError;
pub use extract::{reconstruct_sprite, save_sprite};
