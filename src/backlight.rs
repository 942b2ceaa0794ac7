use std::collections::HashMap;
use std::io;

use thiserror::Error;

use crate::control::{Color, Mode, Zone, ZoneColors, DEFAULT_COLOR};
use crate::sysfs::{Attr, AttrStore, SysfsStore};

/// Returned by the read accessors when the attribute file cannot be
/// read. Distinct from every value the driver reports.
pub const READ_ERROR: &str = "-1";

pub const MIN_BRIGHTNESS: u32 = 1;
pub const MAX_BRIGHTNESS: u32 = 10;

#[derive(Debug, Error)]
pub enum BacklightError {
    #[error("the {0} is empty")]
    Empty(&'static str),

    #[error("the mode '{0}' is not supported")]
    UnsupportedMode(String),

    #[error("the state '{0}' is not supported")]
    UnsupportedState(String),

    #[error("the brightness value '{0}' is not supported")]
    UnsupportedBrightness(String),

    #[error("expected one or three colors in {line:?}, found {found}")]
    ColorFormat { line: String, found: usize },

    #[error("failed to access {attr}: {source}")]
    Io {
        attr: Attr,
        #[source]
        source: io::Error,
    },
}

/// Facade over the driver's four attribute files.
///
/// The driver owns all backlight state; this type holds nothing but the
/// store and translates between domain values and the one-line text
/// format on each call. Setters validate before touching the file and
/// report rejected input and I/O trouble through [`BacklightError`];
/// the mode/state/brightness getters degrade to the [`READ_ERROR`]
/// sentinel instead, so a UI polling an off-target machine keeps
/// running. Nothing in here panics.
pub struct KbdBacklight<S = SysfsStore> {
    store: S,
}

impl KbdBacklight<SysfsStore> {
    /// Talks to the driver at its canonical sysfs location.
    pub fn new() -> KbdBacklight<SysfsStore> {
        return KbdBacklight {
            store: SysfsStore::new(),
        };
    }

    /// Talks to attribute files under `dir` instead. Useful when the
    /// driver is mounted elsewhere or for poking a fake tree.
    pub fn with_sysfs_dir(dir: impl Into<std::path::PathBuf>) -> KbdBacklight<SysfsStore> {
        return KbdBacklight {
            store: SysfsStore::at(dir),
        };
    }
}

impl Default for KbdBacklight<SysfsStore> {
    fn default() -> KbdBacklight<SysfsStore> {
        return KbdBacklight::new();
    }
}

impl<S: AttrStore> KbdBacklight<S> {
    pub fn with_store(store: S) -> KbdBacklight<S> {
        return KbdBacklight { store };
    }

    /// The current mode code, "0".."7". [`READ_ERROR`] if the file
    /// cannot be read.
    pub fn mode(&self) -> String {
        return self.read_or_sentinel(Attr::Mode);
    }

    /// Sets the mode by name; see [`Mode::ALL`] for the valid names.
    pub fn set_mode(&self, name: &str) -> Result<(), BacklightError> {
        if name.is_empty() {
            log::error!("mode is empty");
            return Err(BacklightError::Empty("mode"));
        }
        let mode = match Mode::from_name(name) {
            Some(mode) => mode,
            None => {
                log::error!("the mode '{}' is not supported", name);
                return Err(BacklightError::UnsupportedMode(name.to_string()));
            }
        };
        return self.write(Attr::Mode, &mode.code().to_string());
    }

    /// The current state, "1" when the backlight is on and "0" when it
    /// is off. [`READ_ERROR`] if the file cannot be read.
    pub fn state(&self) -> String {
        return self.read_or_sentinel(Attr::State);
    }

    /// Sets the state; the driver accepts exactly "0" (off) and "1" (on).
    pub fn set_state(&self, value: &str) -> Result<(), BacklightError> {
        if value.is_empty() {
            log::error!("state is empty");
            return Err(BacklightError::Empty("state"));
        }
        if value != "0" && value != "1" {
            log::error!("the state '{}' is not supported", value);
            return Err(BacklightError::UnsupportedState(value.to_string()));
        }
        return self.write(Attr::State, value);
    }

    /// The per-zone colors. The driver reports either one token (every
    /// zone the same color) or three tokens in left/middle/right order;
    /// anything else is a format error.
    pub fn color(&self) -> Result<ZoneColors, BacklightError> {
        let line = self.store.read_line(Attr::Color).map_err(|err| {
            log::error!("failed to read {}: {}", Attr::Color, err);
            BacklightError::Io {
                attr: Attr::Color,
                source: err,
            }
        })?;
        let tokens: Vec<&str> = line.split(' ').collect();
        let found = tokens.len();
        return match tokens[..] {
            [all] => Ok(ZoneColors::uniform(all)),
            [left, middle, right] => Ok(ZoneColors {
                left: left.to_string(),
                middle: middle.to_string(),
                right: right.to_string(),
            }),
            _ => {
                log::error!("unexpected kb_color content {:?}", line);
                Err(BacklightError::ColorFormat { line, found })
            }
        };
    }

    /// Writes a zone/color-name assignment. An unknown color name does
    /// not fail the call; that zone falls back to the default color and
    /// the substitution is logged. Zones missing from the assignment
    /// are written as empty slots, which the driver may refuse.
    pub fn set_color(&self, colors: &HashMap<Zone, String>) -> Result<(), BacklightError> {
        if colors.is_empty() {
            log::error!("color assignment is empty");
            return Err(BacklightError::Empty("color assignment"));
        }

        let mut slots: [&str; 3] = ["", "", ""];
        for (zone, name) in colors {
            slots[zone.slot()] = match Color::from_name(name) {
                Some(color) => color.name(),
                None => {
                    log::error!(
                        "the color '{}' is not supported, substituting '{}'",
                        name,
                        DEFAULT_COLOR.name()
                    );
                    DEFAULT_COLOR.name()
                }
            };
        }
        for zone in Zone::ALL {
            if slots[zone.slot()].is_empty() {
                log::warn!("no color given for the {} zone", zone.name());
            }
        }
        return self.write(Attr::Color, &slots.join(" "));
    }

    /// The current brightness, "1".."10". [`READ_ERROR`] if the file
    /// cannot be read.
    pub fn brightness(&self) -> String {
        return self.read_or_sentinel(Attr::Brightness);
    }

    /// Sets the brightness; accepts decimal values in
    /// [`MIN_BRIGHTNESS`]..=[`MAX_BRIGHTNESS`].
    pub fn set_brightness(&self, value: &str) -> Result<(), BacklightError> {
        if value.is_empty() {
            log::error!("brightness is empty");
            return Err(BacklightError::Empty("brightness"));
        }
        let level = value.parse::<u32>().ok();
        match level {
            Some(level) if (MIN_BRIGHTNESS..=MAX_BRIGHTNESS).contains(&level) => (),
            _ => {
                log::error!("the brightness value '{}' is not supported", value);
                return Err(BacklightError::UnsupportedBrightness(value.to_string()));
            }
        }
        return self.write(Attr::Brightness, value);
    }

    fn read_or_sentinel(&self, attr: Attr) -> String {
        match self.store.read_line(attr) {
            Ok(value) => value,
            Err(err) => {
                log::error!("failed to read {}: {}", attr, err);
                READ_ERROR.to_string()
            }
        }
    }

    fn write(&self, attr: Attr, value: &str) -> Result<(), BacklightError> {
        return self.store.write_line(attr, value).map_err(|err| {
            log::error!("failed to write {}: {}", attr, err);
            BacklightError::Io { attr, source: err }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};

    /// In-memory attribute store so the tests never touch /sys.
    struct MemStore {
        files: RefCell<HashMap<Attr, String>>,
        writes: Cell<usize>,
    }

    impl MemStore {
        fn empty() -> MemStore {
            return MemStore {
                files: RefCell::new(HashMap::new()),
                writes: Cell::new(0),
            };
        }

        fn containing(attr: Attr, content: &str) -> MemStore {
            let store = MemStore::empty();
            store.files.borrow_mut().insert(attr, content.to_string());
            return store;
        }

        fn contents(&self, attr: Attr) -> Option<String> {
            return self.files.borrow().get(&attr).cloned();
        }
    }

    impl AttrStore for MemStore {
        fn read_line(&self, attr: Attr) -> io::Result<String> {
            return self
                .files
                .borrow()
                .get(&attr)
                .cloned()
                .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no such attribute"));
        }

        fn write_line(&self, attr: Attr, value: &str) -> io::Result<()> {
            self.writes.set(self.writes.get() + 1);
            self.files.borrow_mut().insert(attr, value.to_string());
            return Ok(());
        }
    }

    fn assignment(pairs: &[(Zone, &str)]) -> HashMap<Zone, String> {
        return pairs
            .iter()
            .map(|(zone, name)| (*zone, name.to_string()))
            .collect();
    }

    #[test]
    fn every_mode_writes_its_paired_code() {
        for mode in Mode::ALL {
            let store = MemStore::empty();
            let light = KbdBacklight::with_store(store);
            light.set_mode(mode.name()).unwrap();
            assert_eq!(
                light.store.contents(Attr::Mode).unwrap(),
                mode.code().to_string()
            );
        }
    }

    #[test]
    fn invalid_mode_names_cause_no_write() {
        let light = KbdBacklight::with_store(MemStore::empty());
        assert!(matches!(
            light.set_mode(""),
            Err(BacklightError::Empty("mode"))
        ));
        assert!(matches!(
            light.set_mode("not_a_mode"),
            Err(BacklightError::UnsupportedMode(_))
        ));
        assert_eq!(light.store.writes.get(), 0);
    }

    #[test]
    fn setting_a_mode_twice_is_idempotent() {
        let light = KbdBacklight::with_store(MemStore::empty());
        light.set_mode("wave").unwrap();
        assert_eq!(light.store.contents(Attr::Mode).unwrap(), "4");
        light.set_mode("wave").unwrap();
        assert_eq!(light.store.contents(Attr::Mode).unwrap(), "4");
    }

    #[test]
    fn state_accepts_exactly_zero_and_one() {
        let light = KbdBacklight::with_store(MemStore::empty());
        light.set_state("0").unwrap();
        assert_eq!(light.store.contents(Attr::State).unwrap(), "0");
        light.set_state("1").unwrap();
        assert_eq!(light.store.contents(Attr::State).unwrap(), "1");

        let writes_so_far = light.store.writes.get();
        for rejected in ["2", "on", "off", " 1", ""] {
            assert!(light.set_state(rejected).is_err(), "accepted {:?}", rejected);
        }
        assert_eq!(light.store.writes.get(), writes_so_far);
    }

    #[test]
    fn one_color_token_covers_all_zones() {
        let store = MemStore::containing(Attr::Color, "red");
        let light = KbdBacklight::with_store(store);
        assert_eq!(light.color().unwrap(), ZoneColors::uniform("red"));
    }

    #[test]
    fn three_color_tokens_map_left_middle_right() {
        let store = MemStore::containing(Attr::Color, "red green blue");
        let light = KbdBacklight::with_store(store);
        let colors = light.color().unwrap();
        assert_eq!(colors.left, "red");
        assert_eq!(colors.middle, "green");
        assert_eq!(colors.right, "blue");
    }

    #[test]
    fn other_token_counts_are_a_format_error() {
        let store = MemStore::containing(Attr::Color, "red green");
        let light = KbdBacklight::with_store(store);
        assert!(matches!(
            light.color(),
            Err(BacklightError::ColorFormat { found: 2, .. })
        ));
    }

    #[test]
    fn unsupported_color_falls_back_to_the_default() {
        let light = KbdBacklight::with_store(MemStore::empty());
        let colors = assignment(&[
            (Zone::Left, "red"),
            (Zone::Middle, "bogus"),
            (Zone::Right, "blue"),
        ]);
        light.set_color(&colors).unwrap();
        assert_eq!(light.store.contents(Attr::Color).unwrap(), "red blue blue");
    }

    #[test]
    fn missing_zones_keep_an_empty_slot() {
        let light = KbdBacklight::with_store(MemStore::empty());
        let colors = assignment(&[(Zone::Left, "green")]);
        light.set_color(&colors).unwrap();
        assert_eq!(light.store.contents(Attr::Color).unwrap(), "green  ");
    }

    #[test]
    fn empty_color_assignment_causes_no_write() {
        let light = KbdBacklight::with_store(MemStore::empty());
        assert!(matches!(
            light.set_color(&HashMap::new()),
            Err(BacklightError::Empty(_))
        ));
        assert_eq!(light.store.writes.get(), 0);
    }

    #[test]
    fn brightness_boundaries() {
        let light = KbdBacklight::with_store(MemStore::empty());
        light.set_brightness("1").unwrap();
        assert_eq!(light.store.contents(Attr::Brightness).unwrap(), "1");
        light.set_brightness("10").unwrap();
        assert_eq!(light.store.contents(Attr::Brightness).unwrap(), "10");

        let writes_so_far = light.store.writes.get();
        for rejected in ["0", "11", "abc", "-3", ""] {
            assert!(
                light.set_brightness(rejected).is_err(),
                "accepted {:?}",
                rejected
            );
        }
        assert_eq!(light.store.writes.get(), writes_so_far);
    }

    #[test]
    fn rejected_brightness_error_names_the_value() {
        let light = KbdBacklight::with_store(MemStore::empty());
        let err = light.set_brightness("11").unwrap_err();
        assert!(err.to_string().contains("11"));
    }

    #[test]
    fn reads_against_a_missing_store_return_the_sentinel() {
        let light = KbdBacklight::with_store(MemStore::empty());
        assert_eq!(light.mode(), READ_ERROR);
        assert_eq!(light.state(), READ_ERROR);
        assert_eq!(light.brightness(), READ_ERROR);
        assert!(matches!(light.color(), Err(BacklightError::Io { .. })));
    }

    #[test]
    fn reads_return_the_stored_value() {
        let store = MemStore::containing(Attr::Mode, "3");
        let light = KbdBacklight::with_store(store);
        assert_eq!(light.mode(), "3");
    }
}
