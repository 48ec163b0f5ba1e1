use std::env;

fn main() {
    println!("cargo::rustc-check-cfg=cfg(quiet_logs)");

    // Pick the default log filter based on build profile
    let profile = env::var("PROFILE").unwrap_or_else(|_| "debug".to_string());

    if profile == "release" {
        // Only warnings and errors by default; RUST_LOG still overrides
        println!("cargo:rustc-cfg=quiet_logs");
    }

    println!("cargo:rerun-if-env-changed=PROFILE");
}
