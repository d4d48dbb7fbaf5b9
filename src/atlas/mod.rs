mod parser;
mod record;

pub use parser::parse_atlas;
pub use record::SpriteRecord;
