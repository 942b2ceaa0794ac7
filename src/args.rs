use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Reads and writes the Clevo keyboard backlight controls.
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
pub struct CliArgs {
    /// Directory holding the driver's kb_* attribute files.
    #[clap(short, long, default_value = "/sys/devices/platform/clevo_xsm_wmi")]
    pub sysfs_dir: PathBuf,

    #[clap(subcommand)]
    pub command: CliCommand,
}

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Print all four backlight attributes.
    Status,

    /// Print the supported mode and color names.
    Supported,

    /// Print the mode code, or set the mode by name.
    Mode { name: Option<String> },

    /// Print the on/off state, or set it (0 = off, 1 = on).
    State { value: Option<String> },

    /// Print the zone colors, or set them: one name for all zones,
    /// or three names in left middle right order.
    Color { colors: Vec<String> },

    /// Print the brightness, or set it (1-10).
    Brightness { value: Option<String> },
}

/// Starts a REST Api to control the keyboard backlight
/// via homeassistant or a browser.
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
pub struct RestArgs {
    /// The listen address to bind to.
    #[clap(short, long, default_value = "localhost:1313")]
    pub bind: String,

    /// Directory holding the driver's kb_* attribute files.
    #[clap(short, long, default_value = "/sys/devices/platform/clevo_xsm_wmi")]
    pub sysfs_dir: PathBuf,
}
