use std::process::Command;

/// Prefer an explicit environment override (set by release builds),
/// then fall back to running `program args`, then to "unknown".
fn probe(env_key: &str, program: &str, args: &[&str]) -> String {
    std::env::var(env_key).unwrap_or_else(|_| {
        Command::new(program)
            .args(args)
            .output()
            .ok()
            .filter(|output| output.status.success())
            .map(|output| String::from_utf8_lossy(&output.stdout).trim().to_string())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| "unknown".to_string())
    })
}

fn main() {
    let git_sha = probe("GIT_SHA", "git", &["rev-parse", "--short", "HEAD"]);
    let build_date = probe("BUILD_DATE", "date", &["+%Y-%m-%d"]);

    println!("cargo:rustc-env=WORDPLAY_GIT_SHA={}", git_sha);
    println!("cargo:rustc-env=WORDPLAY_BUILD_DATE={}", build_date);
    println!("cargo:rerun-if-env-changed=GIT_SHA");
    println!("cargo:rerun-if-env-changed=BUILD_DATE");
}
