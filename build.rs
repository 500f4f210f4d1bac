//! Injects release version information at compile time.
//!
//! Release builds set VERSION and GIT_COMMIT; local builds fall back to
//! the Cargo package version.

fn main() {
    println!("cargo:rerun-if-env-changed=VERSION");
    println!("cargo:rerun-if-env-changed=GIT_COMMIT");

    if let Ok(version) = std::env::var("VERSION") {
        println!("cargo:rustc-env=APP_VERSION={}", version);
    }

    if let Ok(commit) = std::env::var("GIT_COMMIT") {
        println!("cargo:rustc-env=APP_COMMIT={}", commit);
    }
}
