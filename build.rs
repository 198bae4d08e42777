fn main() {
    // Capture the current timestamp as the build time
    let build_time = chrono::Utc::now();

    // Set as environment variables for use in env! macro
    println!("cargo:rustc-env=BUILD_TIME={}", build_time.to_rfc3339());
    println!("cargo:rustc-env=BUILD_YEAR={}", build_time.format("%Y"));

    // Rerun if build.rs changes
    println!("cargo:rerun-if-changed=build.rs");
}
