use crate::cli::{Config, Host, actions::Action, commands, dispatch, matches};
use crate::s3::S3;
use anyhow::{Context, Result, anyhow};
use colored::Colorize;
use std::{
    fs,
    path::{Path, PathBuf},
    process::exit,
};

/// Directory holding config.yml, created if missing
///
/// # Errors
///
/// Will return `Err` if the directory can not be created
pub fn get_config_path() -> Result<PathBuf> {
    let home_dir = dirs::home_dir().map_or_else(|| PathBuf::from("/tmp"), |h| h);

    let config_path = Path::new(&home_dir).join(".config").join("s3acl");
    fs::create_dir_all(&config_path)
        .with_context(|| format!("unable to create: {}", config_path.display()))?;

    Ok(config_path)
}

/// Parses the command line, loads the config and returns the `S3` handle with the action to run
///
/// # Errors
///
/// Will return `Err` if the config or the arguments are not valid
pub fn start() -> Result<(S3, Action)> {
    let config_path = get_config_path()?;

    // start the command line interface
    let cmd = commands::new(&config_path);

    // get the matches
    let matches = cmd.get_matches();

    let verbosity_level = match matches.get_count("verbose") {
        0 => log::LevelFilter::Off,
        1 => log::LevelFilter::Info,
        _ => log::LevelFilter::Debug,
    };

    env_logger::Builder::new()
        .filter_level(verbosity_level)
        .init();

    log::info!("config path: {}", config_path.display());

    let config_file = matches
        .get_one::<PathBuf>("config")
        .context("no config file found")?;

    // load the config file
    let config = Config::new(config_file)?;

    log::debug!("config hosts: {:?}", config.hosts.keys().collect::<Vec<_>>());

    // show config
    if matches.subcommand_matches("show").is_some() {
        println!("Hosts:");
        for key in config.hosts.keys() {
            println!("   - {key}");
        }
        exit(0);
    }

    // returns [host, bucket, path...]
    let mut hbp = matches::host_bucket_path(&matches)?;

    log::info!("hbp: {hbp:?}");

    let host = get_host_from_hbp(&config, config_file, &mut hbp)?;

    let region = host.get_region()?;

    let bucket = get_bucket_from_hbp(&mut hbp)?;

    let credentials = host.credentials();

    // sign or not the request ( --no-sign-request )
    let no_sign_request = matches.get_flag("no-sign-request");

    let s3 = S3::new(&credentials, &region, Some(bucket), no_sign_request);

    log::debug!("S3:\n{s3}");

    let action = dispatch::dispatch(&hbp, &matches)?;

    log::debug!("action: {action:#?}");

    Ok((s3, action))
}

fn get_host_from_hbp<'a>(
    config: &'a Config,
    config_file: &Path,
    hbp: &mut Vec<&str>,
) -> Result<&'a Host> {
    if hbp.is_empty() {
        return Err(anyhow!(
            "No \"host\" found, check config file {}, For more information try {}",
            config_file.display(),
            "--help".green()
        ));
    }

    let name = hbp.remove(0);

    config.get_host(name).map_err(|_| {
        anyhow!(
            "Could not find host: \"{}\". Check config file {}, For more information try {}",
            name.red(),
            config_file.display(),
            "--help".green()
        )
    })
}

fn get_bucket_from_hbp(hbp: &mut Vec<&str>) -> Result<String> {
    if hbp.is_empty() {
        return Err(anyhow!(
            "No \"bucket\" found, try: <s3 provider>/<bucket name>"
        ));
    }

    let bucket = hbp.remove(0);

    if bucket.is_empty() {
        Err(anyhow!(
            "No \"bucket\" found, try: <s3 provider>/<bucket name>/path"
        ))
    } else {
        Ok(bucket.to_string())
    }
}
