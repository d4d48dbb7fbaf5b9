use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "bunkai")]
#[command(version, about = "Sprite sheet splitter", long_about = None)]
pub struct CliArgs {
    /// Atlas descriptor XML file (Starling/Sparrow SubTexture format)
    pub atlas: PathBuf,

    /// Packed sprite sheet image
    pub sheet: PathBuf,

    /// Output directory for extracted sprites [default: .]
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
