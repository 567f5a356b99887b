use clap::Command;
use log::LevelFilter;
use shatsum::cmd::{Cmd, SumCmd};

fn main() {
    env_logger::builder()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .init();

    let app: Command = SumCmd::cmd().version(env!("SHATSUM_VERSION_INFO"));
    let m = app.get_matches();

    if shatsum::log_error(SumCmd.run(&m)).is_none() {
        std::process::exit(1);
    }
}
