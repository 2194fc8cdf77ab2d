pub mod cmd_get;
pub mod cmd_put;
pub mod cmd_show;

use clap::{
    Arg, ArgAction, ColorChoice, Command,
    builder::ValueParser,
    builder::styling::{AnsiColor, Effects, Styles},
};
use std::{
    fs,
    path::{Path, PathBuf},
};

pub fn validator_is_file() -> ValueParser {
    ValueParser::from(move |s: &str| -> std::result::Result<PathBuf, String> {
        if let Ok(metadata) = fs::metadata(s) {
            if metadata.is_file() {
                return Ok(PathBuf::from(s));
            }
        }

        Err(format!("Invalid file path or file does not exist: '{s}'"))
    })
}

pub fn new(config_path: &Path) -> Command {
    // get config file path (default: ~/.config/s3acl/config.yml)
    let config_file_path = config_path.join("config.yml");

    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Blue.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Green.on_default());

    Command::new("s3acl")
        .version(env!("CARGO_PKG_VERSION"))
        .color(ColorChoice::Auto)
        .styles(styles)
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .default_value(config_file_path.into_os_string())
                .long("config")
                .num_args(1)
                .short('c')
                .global(true)
                .value_parser(validator_is_file())
                .value_name("config.yml"),
        )
        .arg(
            Arg::new("verbose")
                .help("Verbosity level")
                .short('v')
                .long("verbose")
                .global(true)
                .action(ArgAction::Count),
        )
        .arg(
            Arg::new("no-sign-request")
                .help("Make requests as anonymous user (no credentials used)")
                .long("no-sign-request")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .subcommand(cmd_get::command())
        .subcommand(cmd_put::command())
        .subcommand(cmd_show::command())
}
