use chrono::Datelike;

fn main() {
    // Capture the current timestamp as the build time
    let now = chrono::Utc::now();

    // Exposed to the footer through env! macros
    println!("cargo:rustc-env=BUILD_TIME={}", now.to_rfc3339());
    println!("cargo:rustc-env=BUILD_YEAR={}", now.year());

    // Rerun if build.rs or the embedded content changes
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=content");
}
