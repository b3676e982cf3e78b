//! CLI entry point for generating Swift and Kotlin bindings.

fn main() {
    uniffi::uniffi_bindgen_main();
}
