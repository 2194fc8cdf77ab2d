use anyhow::{Context, Result, anyhow};
use clap::ArgMatches;

/// returns the host, bucket and key path from the `<host>/<bucket>/<key>` argument
pub fn host_bucket_path(matches: &ArgMatches) -> Result<Vec<&str>> {
    let (subcommand, sub_m) = matches.subcommand().context("subcommand missing")?;

    log::debug!("subcommand: {subcommand}");

    let arg = sub_m
        .try_get_one::<String>("arguments")
        .ok()
        .flatten()
        .context("arguments missing")?;

    let v: Vec<&str> = arg.splitn(3, '/').collect();

    // check bucket
    let (Some(host), Some(bucket)) = (v.first(), v.get(1)) else {
        return Err(anyhow!(
            "No \"bucket\" found, try: <s3 provider>/<bucket name>/path"
        ));
    };

    let mut hbp = vec![*host, *bucket];

    if let Some(path) = v.get(2) {
        // check path
        if path.starts_with('/') {
            return Err(anyhow!("Please remove leading slashes from path."));
        }

        hbp.extend(path.split('/'));
    }

    Ok(hbp)
}
