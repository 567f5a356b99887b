use chrono::{DateTime, Local};
use std::{process::Command, time::SystemTime};

fn exe_cmd(cmd: &mut Command) -> anyhow::Result<String> {
    let output = cmd.output()?;
    anyhow::ensure!(
        output.status.success(),
        "{}",
        String::from_utf8_lossy(&output.stderr)
    );

    Ok(String::from_utf8(output.stdout)?)
}

fn main() {
    // 不在git仓库中构建时不附带提交信息
    let git_commit_hash = exe_cmd(Command::new("git").args(["log", "-n", "1", "--pretty=format:%H"]))
        .map(|s| s[..8.min(s.len())].trim().to_string())
        .unwrap_or_default();

    let build_time = DateTime::<Local>::from(SystemTime::now()).format("%Y/%m/%d-%H:%M:%S:%Z");

    if git_commit_hash.is_empty() {
        println!(
            "cargo:rustc-env=SHATSUM_VERSION_INFO={}-{}",
            env!("CARGO_PKG_VERSION"),
            build_time
        );
    } else {
        println!(
            "cargo:rustc-env=SHATSUM_VERSION_INFO={}-{}-{}",
            env!("CARGO_PKG_VERSION"),
            build_time,
            git_commit_hash
        );
    }
}
