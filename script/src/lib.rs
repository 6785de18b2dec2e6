//! Shared plumbing for the Veridca deployment and maintenance scripts.

use std::path::PathBuf;

use eyre::Context;

pub mod abi;
pub mod env;
pub mod report;

/// Collection name passed to `initialize`.
pub const TOKEN_NAME: &str = "Veridca";
/// Collection symbol passed to `initialize`.
pub const TOKEN_SYMBOL: &str = "VR";

/// Path of the prebuilt contract WASM, relative to the workspace root.
///
/// The scripts expect `cargo build --release --target
/// wasm32-unknown-unknown -p veridca` to have run first.
pub fn wasm_path() -> eyre::Result<PathBuf> {
    let cwd =
        std::env::current_dir().context("should get current dir from env")?;
    Ok(cwd
        .join("target")
        .join("wasm32-unknown-unknown")
        .join("release")
        .join("veridca.wasm"))
}
