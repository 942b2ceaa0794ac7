use std::fmt;
use std::fs;
use std::io;
use std::path::PathBuf;

/// Where the clevo_xsm_wmi platform driver exposes its attribute files.
pub const DEFAULT_SYSFS_DIR: &str = "/sys/devices/platform/clevo_xsm_wmi";

/// The four backlight control points, one file each.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Attr {
    Mode,
    State,
    Color,
    Brightness,
}

impl Attr {
    pub fn file_name(&self) -> &'static str {
        match self {
            Attr::Mode => "kb_mode",
            Attr::State => "kb_state",
            Attr::Color => "kb_color",
            Attr::Brightness => "kb_brightness",
        }
    }
}

impl fmt::Display for Attr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        return f.write_str(self.file_name());
    }
}

/// Single-line read/write access to the attribute files, keyed by
/// attribute so tests can substitute an in-memory store.
pub trait AttrStore {
    fn read_line(&self, attr: Attr) -> io::Result<String>;
    fn write_line(&self, attr: Attr, value: &str) -> io::Result<()>;
}

/// The real store, backed by the driver's sysfs directory. Every call
/// opens the file, transfers one line and closes it again; nothing is
/// held across calls and nothing is cached.
pub struct SysfsStore {
    dir: PathBuf,
}

impl SysfsStore {
    pub fn new() -> SysfsStore {
        return SysfsStore::at(DEFAULT_SYSFS_DIR);
    }

    pub fn at(dir: impl Into<PathBuf>) -> SysfsStore {
        return SysfsStore { dir: dir.into() };
    }

    fn path(&self, attr: Attr) -> PathBuf {
        return self.dir.join(attr.file_name());
    }
}

impl Default for SysfsStore {
    fn default() -> SysfsStore {
        return SysfsStore::new();
    }
}

impl AttrStore for SysfsStore {
    fn read_line(&self, attr: Attr) -> io::Result<String> {
        log::debug!("read {}", self.path(attr).display());
        let contents = fs::read_to_string(self.path(attr))?;
        return Ok(contents.trim_end().to_string());
    }

    fn write_line(&self, attr: Attr, value: &str) -> io::Result<()> {
        log::debug!("write {:?} into {}", value, self.path(attr).display());
        return fs::write(self.path(attr), value);
    }
}
