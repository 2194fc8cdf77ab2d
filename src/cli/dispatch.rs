use crate::cli::actions::{Action, PolicySource};
use crate::s3::acl::{CannedAcl, Grant};
use anyhow::{Context, Result, anyhow};
use clap::ArgMatches;
use std::path::PathBuf;

// return Action based on the subcommand, `path` is what is left of <host>/<bucket>/<key>
pub fn dispatch(path: &[&str], matches: &ArgMatches) -> Result<Action> {
    let key = Some(path.join("/")).filter(|k| !k.is_empty());

    match matches.subcommand() {
        Some(("get", sub_m)) => Ok(Action::GetAcl {
            key,
            info: sub_m.get_flag("info"),
        }),

        Some(("put", sub_m)) => {
            let policy = if let Some(acl) = sub_m.get_one::<String>("acl") {
                PolicySource::Canned(acl.parse::<CannedAcl>()?)
            } else if let Some(file) = sub_m.get_one::<PathBuf>("file") {
                PolicySource::File(file.clone())
            } else {
                let owner = sub_m
                    .get_one::<String>("owner")
                    .context("--owner is required with --grant")?;
                let grants: Vec<Grant> = sub_m
                    .get_many::<Grant>("grant")
                    .unwrap_or_default()
                    .cloned()
                    .collect();
                PolicySource::Grants {
                    owner: owner.to_string(),
                    grants,
                }
            };

            log::info!("put ACL from: {policy:?}");

            Ok(Action::PutAcl { key, policy })
        }

        _ => Err(anyhow!("unknown subcommand, try --help")),
    }
}
