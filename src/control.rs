use std::collections::HashMap;

use serde::Serialize;

/// Effect modes understood by the clevo_xsm_wmi driver.
/// The numeric codes are part of the driver's sysfs contract.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Mode {
    RandomColor,
    Custom,
    Breathe,
    Cycle,
    Wave,
    Dance,
    Tempo,
    Flash,
}

impl Mode {
    pub const ALL: [Mode; 8] = [
        Mode::RandomColor,
        Mode::Custom,
        Mode::Breathe,
        Mode::Cycle,
        Mode::Wave,
        Mode::Dance,
        Mode::Tempo,
        Mode::Flash,
    ];

    /// The code written to the kb_mode file.
    pub fn code(&self) -> u8 {
        match self {
            Mode::RandomColor => 0,
            Mode::Custom => 1,
            Mode::Breathe => 2,
            Mode::Cycle => 3,
            Mode::Wave => 4,
            Mode::Dance => 5,
            Mode::Tempo => 6,
            Mode::Flash => 7,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Mode::RandomColor => "random_color",
            Mode::Custom => "custom",
            Mode::Breathe => "breathe",
            Mode::Cycle => "cycle",
            Mode::Wave => "wave",
            Mode::Dance => "dance",
            Mode::Tempo => "tempo",
            Mode::Flash => "flash",
        }
    }

    pub fn from_name(name: &str) -> Option<Mode> {
        return Mode::ALL.iter().copied().find(|m| m.name() == name);
    }
}

/// The colors the driver accepts for a zone. Each maps to a fixed
/// 24-bit rgb value, but the driver wants the *names* on its wire
/// format, so the values are informational only.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Color {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
}

/// Substituted when a caller asks for a color the driver doesn't know.
pub const DEFAULT_COLOR: Color = Color::Blue;

impl Color {
    pub const ALL: [Color; 8] = [
        Color::Black,
        Color::Red,
        Color::Green,
        Color::Yellow,
        Color::Blue,
        Color::Magenta,
        Color::Cyan,
        Color::White,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Color::Black => "black",
            Color::Red => "red",
            Color::Green => "green",
            Color::Yellow => "yellow",
            Color::Blue => "blue",
            Color::Magenta => "magenta",
            Color::Cyan => "cyan",
            Color::White => "white",
        }
    }

    // Render as 0x00RRGGBB.
    pub fn rgb(&self) -> u32 {
        match self {
            Color::Black => 0x000000,
            Color::Red => 0xFF0000,
            Color::Green => 0x00FF00,
            Color::Yellow => 0xFFFF00,
            Color::Blue => 0x0000FF,
            Color::Magenta => 0xFF00FF,
            Color::Cyan => 0x00FFFF,
            Color::White => 0xFFFFFF,
        }
    }

    pub fn from_name(name: &str) -> Option<Color> {
        return Color::ALL.iter().copied().find(|c| c.name() == name);
    }
}

/// One of the three independently colorable keyboard regions.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Zone {
    Left,
    Middle,
    Right,
}

impl Zone {
    pub const ALL: [Zone; 3] = [Zone::Left, Zone::Middle, Zone::Right];

    /// Position of this zone in the kb_color line.
    pub fn slot(&self) -> usize {
        match self {
            Zone::Left => 0,
            Zone::Middle => 1,
            Zone::Right => 2,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Zone::Left => "left",
            Zone::Middle => "middle",
            Zone::Right => "right",
        }
    }
}

/// Per-zone color names as reported by the driver.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ZoneColors {
    pub left: String,
    pub middle: String,
    pub right: String,
}

impl ZoneColors {
    /// A single color name applied to every zone. The driver reports
    /// a one-token kb_color line in this case.
    pub fn uniform(name: &str) -> ZoneColors {
        return ZoneColors {
            left: name.to_string(),
            middle: name.to_string(),
            right: name.to_string(),
        };
    }
}

/// Builds a full zone assignment from positional input: a single name
/// applies to every zone, three names apply left/middle/right.
/// Returns None for any other count.
pub fn zone_assignment(names: &[String]) -> Option<HashMap<Zone, String>> {
    let mut assignment = HashMap::new();
    match names {
        [name] => {
            for zone in Zone::ALL {
                assignment.insert(zone, name.clone());
            }
        }
        [left, middle, right] => {
            assignment.insert(Zone::Left, left.clone());
            assignment.insert(Zone::Middle, middle.clone());
            assignment.insert(Zone::Right, right.clone());
        }
        _ => return None,
    }
    return Some(assignment);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_codes_match_the_driver_table() {
        let expected = [
            ("random_color", 0),
            ("custom", 1),
            ("breathe", 2),
            ("cycle", 3),
            ("wave", 4),
            ("dance", 5),
            ("tempo", 6),
            ("flash", 7),
        ];
        for (name, code) in expected {
            let mode = Mode::from_name(name).unwrap();
            assert_eq!(mode.code(), code);
            assert_eq!(mode.name(), name);
        }
    }

    #[test]
    fn unknown_mode_name_is_rejected() {
        assert_eq!(Mode::from_name("not_a_mode"), None);
        assert_eq!(Mode::from_name(""), None);
        assert_eq!(Mode::from_name("Wave"), None);
    }

    #[test]
    fn color_values_match_the_driver_table() {
        let expected = [
            ("black", 0x000000),
            ("red", 0xFF0000),
            ("green", 0x00FF00),
            ("yellow", 0xFFFF00),
            ("blue", 0x0000FF),
            ("magenta", 0xFF00FF),
            ("cyan", 0x00FFFF),
            ("white", 0xFFFFFF),
        ];
        for (name, rgb) in expected {
            let color = Color::from_name(name).unwrap();
            assert_eq!(color.rgb(), rgb);
            assert_eq!(color.name(), name);
        }
        assert_eq!(DEFAULT_COLOR, Color::Blue);
    }

    #[test]
    fn single_name_covers_all_zones() {
        let assignment = zone_assignment(&["red".to_string()]).unwrap();
        assert_eq!(assignment.len(), 3);
        for zone in Zone::ALL {
            assert_eq!(assignment[&zone], "red");
        }
    }

    #[test]
    fn three_names_are_positional() {
        let names = vec!["red".to_string(), "green".to_string(), "blue".to_string()];
        let assignment = zone_assignment(&names).unwrap();
        assert_eq!(assignment[&Zone::Left], "red");
        assert_eq!(assignment[&Zone::Middle], "green");
        assert_eq!(assignment[&Zone::Right], "blue");
    }

    #[test]
    fn other_name_counts_are_invalid() {
        assert!(zone_assignment(&[]).is_none());
        let two = vec!["red".to_string(), "green".to_string()];
        assert!(zone_assignment(&two).is_none());
    }
}
