use crate::{cli::commands::validator_is_file, s3::acl::CannedAcl, s3::acl::Grant};
use clap::{Arg, ArgAction, ArgGroup, Command, builder::ValueParser};

pub fn validator_grant() -> ValueParser {
    ValueParser::from(move |s: &str| -> std::result::Result<Grant, String> {
        s.parse::<Grant>().map_err(|e| e.to_string())
    })
}

pub fn command() -> Command {
    Command::new("put")
        .about("Replaces the ACL of a bucket or an object")
        .arg(
            Arg::new("arguments")
                .help("<s3 provider>/<bucket>/<optional file>")
                .required(true)
                .value_names(["S3ACL"])
                .num_args(1),
        )
        .arg(
            Arg::new("acl")
                .help("The canned ACL to apply")
                .long("acl")
                .short('a')
                .value_parser(CannedAcl::ALL.map(|acl| acl.as_str()))
                .num_args(1),
        )
        .arg(
            Arg::new("file")
                .help("AccessControlPolicy XML document, sent as is")
                .long("file")
                .short('f')
                .value_name("policy.xml")
                .value_parser(validator_is_file())
                .num_args(1),
        )
        .arg(
            Arg::new("owner")
                .help("Canonical user ID of the owner")
                .long("owner")
                .short('o')
                .requires("grant")
                .num_args(1),
        )
        .arg(
            Arg::new("grant")
                .help("PERMISSION:id=<id>, PERMISSION:uri=<uri> or PERMISSION:emailAddress=<email>, can be repeated")
                .long("grant")
                .short('g')
                .requires("owner")
                .value_parser(validator_grant())
                .action(ArgAction::Append)
                .num_args(1),
        )
        .group(
            ArgGroup::new("policy")
                .args(["acl", "file", "grant"])
                .required(true),
        )
}
