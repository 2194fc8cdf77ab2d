use colored::Colorize;
use s3acl::cli::{actions::acl, start};
use std::process;

#[tokio::main]
async fn main() {
    let (s3, action) = match start() {
        Ok(start) => start,
        Err(e) => {
            eprintln!("{} {e:#}", "Error:".red());
            process::exit(1);
        }
    };

    if let Err(e) = acl::handle(&s3, action).await {
        eprintln!("{} {e}", "Error:".red());
        process::exit(1);
    }
}
