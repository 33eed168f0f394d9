// SPDX-License-Identifier: MPL-2.0
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use piccull::app::{self, Flags};
use std::path::PathBuf;

const HELP: &str = "\
PicCull

USAGE:
  piccull [FOLDER]

ARGS:
  <FOLDER>    Image folder to open on startup

OPTIONS:
  -h, --help  Print this help
";

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let flags = Flags {
        folder: args
            .finish()
            .into_iter()
            .next()
            .map(PathBuf::from),
    };

    app::run(flags)
}
