#![allow(unreachable_code)]
#[macro_use]
extern crate rouille;
extern crate serde;

use clap::Parser;
use std::io;

use serde::Serialize;

use kbdlight::args::RestArgs;
use kbdlight::control::{zone_assignment, Color, Mode, ZoneColors};
use kbdlight::{BacklightError, KbdBacklight};

#[derive(Serialize, Debug)]
struct StatusResponse {
    mode: String,
    state: String,
    brightness: String,
    color: Option<ZoneColors>,
}

#[derive(Serialize, Debug)]
struct SupportedResponse {
    version: String,
    modes: Vec<&'static str>,
    colors: Vec<&'static str>,
}

fn reject(err: BacklightError) -> rouille::Response {
    let status = match err {
        BacklightError::Io { .. } => 500,
        _ => 400,
    };
    return rouille::Response::text(err.to_string()).with_status_code(status);
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let kbdlight_version: &str = option_env!("CARGO_PKG_VERSION").unwrap_or("unknown");
    let args = RestArgs::parse();
    print!("starting server listening on {}\n", args.bind);
    let light = KbdBacklight::with_sysfs_dir(&args.sysfs_dir);

    rouille::start_server(args.bind, move |request| {
        rouille::log(&request, io::stdout(), || {
            router!(request,
                (GET) (/) => {
                    return rouille::Response::redirect_302("/status");
                },

                (GET) (/status) => {
                    // A color read failure turns into a null field so the
                    // other attributes still come through.
                    let response = StatusResponse {
                        mode: light.mode(),
                        state: light.state(),
                        brightness: light.brightness(),
                        color: light.color().ok(),
                    };
                    return rouille::Response::json(&response);
                },

                (GET) (/supported) => {
                    let supported = SupportedResponse {
                        version: kbdlight_version.to_string(),
                        modes: Mode::ALL.iter().map(|m| m.name()).collect(),
                        colors: Color::ALL.iter().map(|c| c.name()).collect(),
                    };
                    return rouille::Response::json(&supported);
                },

                (POST) (/control) => {
                    let maybe_input = post_input!(request, {
                        mode: Option<String>,
                        state: Option<String>,
                        brightness: Option<String>,
                        color: Vec<String>,
                    });
                    let input = match maybe_input {
                        Ok(v) => v,
                        Err(e) => { log::error!("bad '/control' input: {:?}", e); return rouille::Response::empty_400(); }
                    };
                    log::debug!("got '/control' input {:?}", input);
                    if let Some(mode) = input.mode {
                        if let Err(err) = light.set_mode(&mode) {
                            return reject(err);
                        }
                    }
                    if let Some(state) = input.state {
                        if let Err(err) = light.set_state(&state) {
                            return reject(err);
                        }
                    }
                    if let Some(brightness) = input.brightness {
                        if let Err(err) = light.set_brightness(&brightness) {
                            return reject(err);
                        }
                    }
                    if !input.color.is_empty() {
                        let assignment = match zone_assignment(&input.color) {
                            Some(assignment) => assignment,
                            None => return rouille::Response::text("expected one color, or three colors left middle right").with_status_code(400),
                        };
                        if let Err(err) = light.set_color(&assignment) {
                            return reject(err);
                        }
                    }
                    return rouille::Response::text("success");
                },

                _ => rouille::Response::empty_404()
            )
        })
    });
    return Ok(());
}
