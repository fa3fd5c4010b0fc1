//! Usage and version text.

use clap::{Arg, ArgAction, Command};

use crate::domain::options::{FLAGS, FlagKind};

const AFTER_HELP: &str = "\
The given command after -- will be spawned before running the tests.

Also, Nightwatch's CLI options are fully supported as-is.";

/// `nahual v<version>`.
pub fn version_text() -> String {
    format!("{} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}

/// Usage text rendered from the flag schema.
pub fn usage_text() -> String {
    usage_command().render_help().to_string().trim_end().to_string()
}

fn usage_command() -> Command {
    let flags = FLAGS.iter().map(|spec| {
        let arg = Arg::new(spec.name).long(spec.name).help(spec.help);
        let arg = match spec.alias {
            Some(alias) => arg.short(alias),
            None => arg,
        };
        match spec.kind {
            FlagKind::Boolean => arg.action(ArgAction::SetTrue),
            FlagKind::String => arg.action(ArgAction::Append).value_name("VALUE"),
        }
    });

    Command::new(env!("CARGO_PKG_NAME"))
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .override_usage("nahual [SRC] [DEST] [OPTIONS] [NIGHTWATCH OPTIONS] [-- <COMMAND>...]")
        .disable_help_flag(true)
        .disable_version_flag(true)
        .arg(Arg::new("src").value_name("SRC").help("Source directory [default: test]"))
        .arg(Arg::new("dest").value_name("DEST").help("Destination directory [default: generated]"))
        .args(flags)
        .after_help(AFTER_HELP)
}
