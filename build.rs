use std::path::Path;
use std::process::Command;

fn main() {
    let describe = git_output(&["describe", "--always", "--dirty", "--tags"])
        .unwrap_or_else(|| "unknown".into());
    println!("cargo:rustc-env=CERNE_GIT_DESCRIBE={describe}");

    for watched in [".git/HEAD", ".git/index", ".git/packed-refs"] {
        if Path::new(watched).exists() {
            println!("cargo:rerun-if-changed={watched}");
        }
    }
    println!("cargo:rerun-if-env-changed=GIT_DIR");
}

fn git_output(args: &[&str]) -> Option<String> {
    let output = Command::new("git").args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    let text = String::from_utf8_lossy(&output.stdout).trim().to_string();
    (!text.is_empty()).then_some(text)
}
