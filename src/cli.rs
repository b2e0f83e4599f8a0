// cli.rs - Command-line interface configuration
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "shape-spinner")]
#[command(about = "Spinning random shapes demo", long_about = None)]
pub struct Cli {
    /// Image file used by textured shapes
    #[arg(long = "texture", default_value = "texture.png")]
    pub texture: PathBuf,
}
