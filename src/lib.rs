// High-level overview:
//
// Protocol:                  sysfs attribute files                 AttrStore                   Result / sentinel            HTTP, argv
// Library Concept:   driver <----------------------> file store  <----------> KbdBacklight   <------------------> client <------------> user
//
// Implementing:      clevo_xsm_wmi                  SysfsStore                kbdlight (lib)                    kbdlight-rest          homeassistant
//                                                                                                              kbdlight (cli)         actual human

pub mod args;
pub mod backlight;
pub mod control;
pub mod sysfs;

pub use backlight::*;
pub use control::*;
