use clap::Command;

pub fn command() -> Command {
    Command::new("show").about("Show the hosts defined in the config file")
}
