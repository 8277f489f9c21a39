// cli.rs - Command-line interface for the headless camera driver
use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "lookat-camera")]
#[command(about = "Headless look-at camera driver", long_about = None)]
pub struct Cli {
    /// JSON camera configuration (defaults are used when omitted)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Number of camera updates to run
    #[arg(long, default_value = "1")]
    pub frames: u32,

    /// Keys held during every update, e.g. "shift+w"
    #[arg(long, default_value = "")]
    pub keys: String,

    /// Force the debug fly camera on
    #[arg(long, conflicts_with = "no_fly")]
    pub fly: bool,

    /// Force the debug fly camera off
    #[arg(long = "no-fly")]
    pub no_fly: bool,

    /// Upload transforms to a headless GPU buffer instead of memory
    #[arg(long, default_value = "false")]
    pub gpu: bool,

    /// Print the final camera snapshot as JSON
    #[arg(long, default_value = "false")]
    pub json: bool,
}

impl Cli {
    /// Fly override requested on the command line, if any
    pub fn fly_override(&self) -> Option<bool> {
        match (self.fly, self.no_fly) {
            (true, _) => Some(true),
            (false, true) => Some(false),
            (false, false) => None,
        }
    }
}
