//! UniFFI bindgen CLI tool for generating language bindings.
//!
//! Generates the Swift and Kotlin bindings used by the Tavolo shells from
//! the compiled tavolo-core library.
//!
//! ## Usage
//!
//! Generate Swift bindings:
//! ```bash
//! cargo run --features cli --bin uniffi-bindgen generate --library target/release/libtavolo_core.dylib --language swift --out-dir ./bindings
//! ```
//!
//! Generate Kotlin bindings:
//! ```bash
//! cargo run --features cli --bin uniffi-bindgen generate --library target/release/libtavolo_core.so --language kotlin --out-dir ./bindings
//! ```

fn main() {
    uniffi::uniffi_bindgen_main()
}
