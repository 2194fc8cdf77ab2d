use crate::{
    cli::actions::{Action, PolicySource},
    s3::{
        S3,
        acl::{AccessControlPolicy, Grant, Owner},
        object_info::ObjectInfo,
    },
};
use anyhow::{Context, Result};
use colored::Colorize;

/// # Errors
/// Will return an error if the action fails
pub async fn handle(s3: &S3, action: Action) -> Result<()> {
    match action {
        Action::GetAcl { key, info } => match (key, info) {
            (Some(key), true) => print_object_info(&s3.get_object_acl(&key).await?),
            (Some(key), false) => println!("{}", s3.get_object_acl_string(&key).await?),
            (None, true) => print_policy(&s3.get_bucket_acl().await?),
            (None, false) => println!("{}", s3.get_bucket_acl_string().await?),
        },

        Action::PutAcl { key, policy } => {
            match policy {
                PolicySource::Canned(acl) => match &key {
                    Some(key) => s3.put_object_canned_acl(key, acl).await?,
                    None => s3.put_bucket_canned_acl(acl).await?,
                },

                PolicySource::File(path) => {
                    let xml = tokio::fs::read_to_string(&path)
                        .await
                        .with_context(|| format!("unable to read: {}", path.display()))?;
                    match &key {
                        Some(key) => s3.put_object_acl_string(key, &xml).await?,
                        None => s3.put_bucket_acl_string(&xml).await?,
                    }
                }

                PolicySource::Grants { owner, grants } => {
                    let policy = AccessControlPolicy::new(Owner::new(&owner, None), grants);
                    match &key {
                        Some(key) => s3.put_object_acl(key, &policy).await?,
                        None => s3.put_bucket_acl(&policy).await?,
                    }
                }
            }

            log::info!("ACL updated: {}", key.as_deref().unwrap_or("<bucket>"));
        }
    }

    Ok(())
}

fn print_owner(owner: &Owner) {
    println!(
        "{:>14}: {} {}",
        "Owner".green(),
        owner.id,
        owner.display_name.as_deref().unwrap_or_default()
    );
}

fn print_grants(grants: &[Grant]) {
    for grant in grants {
        let grantee = &grant.grantee;
        let who = grantee
            .id
            .as_deref()
            .or(grantee.uri.as_deref())
            .or(grantee.email_address.as_deref())
            .unwrap_or_default();
        println!(
            "{:>14}: {} {} ({})",
            "Grant".green(),
            grant.permission.to_string().yellow(),
            who,
            grantee.grantee_type.as_str()
        );
    }
}

fn print_policy(policy: &AccessControlPolicy) {
    print_owner(&policy.owner);
    print_grants(policy.grants());

    if let Some(acl) = policy.canned_acl() {
        println!("{:>14}: {acl}", "x-amz-acl".green());
    } else {
        for (header, values) in policy.grant_headers() {
            println!("{:>14}: {}", header.green(), values.join(", "));
        }
    }
}

fn print_object_info(info: &ObjectInfo) {
    println!("{:>14}: {}", "Key".green(), info.key);

    if let Some(size) = info.size {
        println!("{:>14}: {size}", "Size".green());
    }

    if let Some(etag) = &info.etag {
        println!("{:>14}: {etag}", "ETag".green());
    }

    if let Some(last_modified) = info.last_modified {
        println!("{:>14}: {}", "Last-Modified".green(), last_modified.to_rfc2822());
    }

    if let Some(version_id) = &info.version_id {
        println!("{:>14}: {version_id}", "Version ID".green());
    }

    print_owner(&info.owner);
    print_grants(&info.grants);

    for (header, values) in info
        .metadata
        .iter()
        .filter(|(k, _)| k.as_str() == "x-amz-acl" || k.starts_with("x-amz-grant-"))
    {
        println!("{:>14}: {}", header.green(), values.join(", "));
    }
}
