use clap::Parser;
use gitmux::commands::*;
use gitmux::core::{config::Config, duration::parse_duration, error::Result, print_error};
use log::LevelFilter;
use std::env;
use std::ffi::OsString;
use std::io;
use std::path::PathBuf;
use std::time::Duration;

/// Long options that are also accepted with a single dash (`-cfg FILE`)
const SINGLE_DASH_LONG: &[&str] = &["cfg", "printcfg", "dbg", "timeout"];

#[derive(Parser)]
#[command(name = "gitmux")]
#[command(about = "Git working tree status in your tmux status bar")]
#[command(version)]
struct Cli {
    /// Configuration file, merged over the default configuration
    #[arg(long = "cfg", value_name = "FILE")]
    cfg: Option<PathBuf>,

    /// Print the default configuration and exit
    #[arg(long = "printcfg")]
    printcfg: bool,

    /// Output the status as JSON and report errors on stderr
    #[arg(long = "dbg")]
    dbg: bool,

    /// Give up when status collection is still running after this long (ex: 2s, 500ms)
    #[arg(long = "timeout", value_name = "DURATION", value_parser = parse_duration)]
    timeout: Option<Duration>,

    /// Directory of the repository
    #[arg(default_value = ".")]
    dir: PathBuf,
}

fn main() {
    let cli = Cli::parse_from(normalize_args(env::args_os()));

    // RUST_LOG still takes precedence over the level picked here
    let level = if cli.dbg {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    if let Err(e) = run(&cli) {
        // A status bar can't display errors, keep it blank unless debugging
        if cli.dbg {
            print_error(&e.to_string());
        }
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if cli.printcfg {
        return execute_print_config(&mut out);
    }

    let config = Config::load(cli.cfg.as_deref())?;
    log::debug!("reading status of {}", cli.dir.display());
    execute_status(&cli.dir, &config, cli.dbg, cli.timeout, &mut out)
}

/// Rewrite `-cfg`-style long options to `--cfg` so clap doesn't read them as
/// bundled short flags. Arguments after `--` are left alone.
fn normalize_args(args: impl IntoIterator<Item = OsString>) -> Vec<OsString> {
    let mut options_ended = false;
    args.into_iter()
        .map(|arg| {
            if options_ended {
                return arg;
            }
            match arg.to_str() {
                Some("--") => {
                    options_ended = true;
                    arg
                }
                Some(s) if is_single_dash_long(s) => OsString::from(format!("-{s}")),
                _ => arg,
            }
        })
        .collect()
}

fn is_single_dash_long(arg: &str) -> bool {
    let Some(rest) = arg.strip_prefix('-') else {
        return false;
    };
    let name = rest.split_once('=').map_or(rest, |(name, _)| name);
    SINGLE_DASH_LONG.contains(&name)
}
