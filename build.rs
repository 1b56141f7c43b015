//! Build script for cz-emoji: embeds the Git-aware version string.

use std::{io, process::Command};

fn main() {
    let cargo_version = env!("CARGO_PKG_VERSION");
    let version = version_with_git(cargo_version)
        .unwrap_or_else(|_| String::from(cargo_version));

    println!("cargo:rustc-env=VERSION_WITH_GIT={version}");
}

/// Builds the version string shown by `cz-emoji --version`.
///
/// Release builds from a clean checkout of the `v<version>` tag get the plain
/// cargo version. Any other build gets the short Git revision as build
/// metadata, suffixed by `-modified` when the worktree is dirty:
///
/// * `0.1.0` on tag `v0.1.0`, clean => `0.1.0`
/// * `0.2.0-dev` on any commit, dirty => `0.2.0-dev+abcd1234-modified`
///
/// Builds from `cargo install --git` are never marked as modified, and release
/// versions installed this way stay plain.
fn version_with_git(cargo_version: &str) -> io::Result<String> {
    let status = git(&["status", "--porcelain"])?;
    let from_cargo_checkout = status == "?? .cargo-ok";

    let description = git(&["describe", "--always", "--dirty=-modified"])?;
    let on_release_tag = description == format!("v{cargo_version}");
    let is_release = !cargo_version.contains("-dev");

    if on_release_tag || (from_cargo_checkout && is_release) {
        return Ok(String::from(cargo_version));
    }

    let revision = git(&["rev-parse", "--short", "HEAD"])?;
    if revision.is_empty() {
        return Ok(String::from(cargo_version));
    }

    if status.is_empty() || from_cargo_checkout {
        Ok(format!("{cargo_version}+{revision}"))
    } else {
        Ok(format!("{cargo_version}+{revision}-modified"))
    }
}

/// Runs Git and returns its trimmed standard output.
fn git(args: &[&str]) -> io::Result<String> {
    let output = Command::new("git").args(args).output()?;
    String::from_utf8(output.stdout)
        .map(|stdout| stdout.trim().to_owned())
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}
