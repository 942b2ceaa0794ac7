use anyhow::bail;
use clap::Parser;

use kbdlight::args::{CliArgs, CliCommand};
use kbdlight::control::{zone_assignment, Color, Mode};
use kbdlight::KbdBacklight;

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = CliArgs::parse();
    let light = KbdBacklight::with_sysfs_dir(&args.sysfs_dir);

    match args.command {
        CliCommand::Status => {
            println!("mode:       {}", light.mode());
            println!("state:      {}", light.state());
            println!("brightness: {}", light.brightness());
            match light.color() {
                Ok(colors) => println!(
                    "color:      {} {} {}",
                    colors.left, colors.middle, colors.right
                ),
                Err(err) => println!("color:      unavailable ({})", err),
            }
        }
        CliCommand::Supported => {
            print!("modes:");
            for mode in Mode::ALL {
                print!(" {}", mode.name());
            }
            println!();
            print!("colors:");
            for color in Color::ALL {
                print!(" {}", color.name());
            }
            println!();
        }
        CliCommand::Mode { name: None } => println!("{}", light.mode()),
        CliCommand::Mode { name: Some(name) } => light.set_mode(&name)?,
        CliCommand::State { value: None } => println!("{}", light.state()),
        CliCommand::State { value: Some(value) } => light.set_state(&value)?,
        CliCommand::Color { colors } if colors.is_empty() => {
            let colors = light.color()?;
            println!("{} {} {}", colors.left, colors.middle, colors.right);
        }
        CliCommand::Color { colors } => {
            let assignment = match zone_assignment(&colors) {
                Some(assignment) => assignment,
                None => bail!("expected one color, or three colors in left middle right order"),
            };
            light.set_color(&assignment)?;
        }
        CliCommand::Brightness { value: None } => println!("{}", light.brightness()),
        CliCommand::Brightness { value: Some(value) } => light.set_brightness(&value)?,
    }
    return Ok(());
}
