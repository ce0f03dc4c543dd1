//! Records the compiler version so the binary can gate on it at startup.

use std::env;
use std::process::Command;

fn main() {
    println!("cargo:rerun-if-env-changed=RUSTC");

    let rustc = env::var("RUSTC").unwrap_or_else(|_| "rustc".to_string());
    let output = Command::new(&rustc)
        .arg("--version")
        .output()
        .unwrap_or_else(|e| panic!("failed to run `{rustc} --version`: {e}"));
    let version = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if !output.status.success() || version.is_empty() {
        panic!("`{rustc} --version` did not report a version");
    }

    println!("cargo:rustc-env=TTS_WEBSOCKET_RUSTC_VERSION={version}");
}
