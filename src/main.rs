// SPDX-License-Identifier: MPL-2.0
// Prevent a console window next to the app window in Windows release builds.
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use iced_lightbox::app::{self, paths, Flags};
use iced_lightbox::media::MediaKind;
use std::fmt;
use std::process::ExitCode;

const HELP: &str = "\
Iced Lightbox - full-screen media lightbox

USAGE:
  iced_lightbox [OPTIONS] <MEDIA>...

OPTIONS:
  --page <N>          Current page number, 1-based (default: 1)
  --per-page <N>      Items per page (default: [gallery] items_per_page)
  --index <N>         Index within the page (default: 0)
  --type <KIND>       image | video (default: detected from the first item)
  --lang <LOCALE>     UI language, e.g. en-US or fr
  --data-dir <DIR>    Data directory (favorites.json)
  --config-dir <DIR>  Config directory (settings.toml)
  -h, --help          Print this help
  --                  Treat every later argument as media

ENVIRONMENT:
  ICED_LIGHTBOX_DATA_DIR, ICED_LIGHTBOX_CONFIG_DIR, RUST_LOG
";

struct Args {
    flags: Flags,
    data_dir: Option<String>,
    config_dir: Option<String>,
}

#[derive(Debug)]
enum ArgsError {
    Parse(pico_args::Error),
    UnknownFlag(String),
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::Parse(err) => write!(f, "{err}"),
            ArgsError::UnknownFlag(flag) => write!(f, "unknown option '{flag}'"),
        }
    }
}

impl From<pico_args::Error> for ArgsError {
    fn from(err: pico_args::Error) -> Self {
        ArgsError::Parse(err)
    }
}

fn parse_args(mut args: pico_args::Arguments) -> Result<Option<Args>, ArgsError> {
    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let page = args.opt_value_from_str("--page")?.unwrap_or(1);
    let per_page = args.opt_value_from_str("--per-page")?;
    let index = args.opt_value_from_str("--index")?.unwrap_or(0);
    let kind: Option<MediaKind> = args.opt_value_from_str("--type")?;
    let lang = args.opt_value_from_str("--lang")?;
    let data_dir = args.opt_value_from_str("--data-dir")?;
    let config_dir = args.opt_value_from_str("--config-dir")?;

    // Anything after a bare `--` is media, even if it looks like a flag.
    let mut media = Vec::new();
    let mut options_ended = false;
    for arg in args.finish() {
        let arg = arg.to_string_lossy().into_owned();
        if !options_ended && arg == "--" {
            options_ended = true;
        } else if !options_ended && arg.starts_with("--") {
            return Err(ArgsError::UnknownFlag(arg));
        } else {
            media.push(arg);
        }
    }

    Ok(Some(Args {
        flags: Flags {
            lang,
            media,
            page,
            per_page,
            index,
            kind,
        },
        data_dir,
        config_dir,
    }))
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = match parse_args(pico_args::Arguments::from_env()) {
        Ok(Some(args)) => args,
        Ok(None) => {
            print!("{HELP}");
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            return ExitCode::from(2);
        }
    };

    paths::init_cli_overrides(args.data_dir, args.config_dir);

    match app::run(args.flags) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("Lightbox terminated with an error: {err}");
            ExitCode::FAILURE
        }
    }
}
