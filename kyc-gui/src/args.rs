//! Command-line argument parsing.

use std::{error::Error, fmt::Display, path::PathBuf, process};

use kyc::config::default_datadir;

/// Parsed command-line argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Arg {
    DatadirPath(PathBuf),
    Fragment(String),
    UserAgent(String),
    ApiUrl(String),
}

/// What the command line asks for, defaults applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    pub datadir: PathBuf,
    pub fragment: String,
    pub user_agent: Option<String>,
    pub api_url: Option<String>,
}

/// Parse command-line arguments, `args[0]` being the program name.
pub fn parse_args(args: Vec<String>, version: impl Display) -> Result<Vec<Arg>, Box<dyn Error>> {
    let mut res = Vec::new();

    if args.len() > 1 && (args[1] == "--version" || args[1] == "-v") {
        eprintln!("{}", version);
        process::exit(0);
    }

    if args.len() > 1 && (args[1] == "--help" || args[1] == "-h") {
        eprintln!(
            r#"
Usage: kyc-gui [OPTIONS]

Options:
    --datadir <PATH>         Path of the kyc data directory
    --fragment <FRAGMENT>    Initial location fragment, '#admin' opens the review console
    --user-agent <UA>        User agent used for device detection and requests
    --api-url <URL>          Base url of the verification backend
    -v, --version            Display kyc-gui version
    -h, --help               Print help
        "#
        );
        process::exit(0);
    }

    let mut iter = args.into_iter().skip(1);
    while let Some(arg) = iter.next() {
        let mut value = || {
            iter.next()
                .ok_or_else(|| format!("missing arg to {}", arg))
        };
        let parsed = match arg.as_str() {
            "--datadir" => Arg::DatadirPath(PathBuf::from(value()?)),
            "--fragment" => Arg::Fragment(value()?),
            "--user-agent" => Arg::UserAgent(value()?),
            "--api-url" => Arg::ApiUrl(value()?),
            _ => return Err(format!("unknown argument {}", arg).into()),
        };
        res.push(parsed);
    }

    Ok(res)
}

/// Folds the parsed arguments into [`Options`]. Each flag may be given once.
pub fn args_to_options(args: &[Arg]) -> Result<Options, Box<dyn Error>> {
    let mut datadir = None;
    let mut fragment = None;
    let mut user_agent = None;
    let mut api_url = None;

    fn set<T: Clone>(slot: &mut Option<T>, value: &T, flag: &str) -> Result<(), Box<dyn Error>> {
        if slot.is_some() {
            return Err(format!("{} given more than once", flag).into());
        }
        *slot = Some(value.clone());
        Ok(())
    }

    for arg in args {
        match arg {
            Arg::DatadirPath(path) => set(&mut datadir, path, "--datadir")?,
            Arg::Fragment(f) => set(&mut fragment, f, "--fragment")?,
            Arg::UserAgent(ua) => set(&mut user_agent, ua, "--user-agent")?,
            Arg::ApiUrl(url) => set(&mut api_url, url, "--api-url")?,
        }
    }

    let datadir = match datadir {
        Some(path) => path,
        None => default_datadir().ok_or("Could not locate the data directory")?,
    };

    Ok(Options {
        datadir,
        fragment: fragment.unwrap_or_default(),
        user_agent,
        api_url,
    })
}
