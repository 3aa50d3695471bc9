fn main() {
    let python_feature_enabled = std::env::var_os("CARGO_FEATURE_PYTHON").is_some();
    let target_os = std::env::var("CARGO_CFG_TARGET_OS").unwrap_or_default();

    // The Python extension module resolves interpreter symbols at import time
    // on macOS, so the cdylib must not require libpython at link time.
    if python_feature_enabled && target_os == "macos" {
        println!("cargo:rustc-cdylib-link-arg=-undefined");
        println!("cargo:rustc-cdylib-link-arg=dynamic_lookup");
    }
}
