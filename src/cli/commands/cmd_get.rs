use clap::{Arg, ArgAction, Command};

pub fn command() -> Command {
    Command::new("get")
        .about("Retrieves the ACL of a bucket or an object")
        .arg(
            Arg::new("arguments")
                .help("<s3 provider>/<bucket>/<optional file>")
                .required(true)
                .value_names(["S3ACL"])
                .num_args(1),
        )
        .arg(
            Arg::new("info")
                .help("Decode the ACL, objects are merged with their metadata")
                .long("info")
                .short('i')
                .action(ArgAction::SetTrue),
        )
}
