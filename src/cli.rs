// cli.rs - Command-line interface configuration
use clap::Parser;

pub const DEFAULT_WIDTH: u32 = 800;
pub const DEFAULT_HEIGHT: u32 = 600;

#[derive(Parser, Debug, Clone)]
#[command(name = "transform-cube")]
#[command(about = "Interactive cube with toggleable model transforms", long_about = None)]
pub struct Cli {
    /// Disable the on-screen HUD
    #[arg(long = "no-ui", default_value = "false")]
    pub no_ui: bool,

    /// Initial window width in logical pixels
    #[arg(long, default_value_t = DEFAULT_WIDTH, value_parser = clap::value_parser!(u32).range(1..))]
    pub width: u32,

    /// Initial window height in logical pixels
    #[arg(long, default_value_t = DEFAULT_HEIGHT, value_parser = clap::value_parser!(u32).range(1..))]
    pub height: u32,
}
