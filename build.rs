//! Build script for ouracli.
//!
//! Copies the `.env.example` template next to where `config::load_env`
//! looks for `.env`, so a fresh install has a starting point for `OURA_PAT`
//! and friends:
//! - Linux: `~/.local/share/ouracli/.env.example`
//! - macOS: `~/Library/Application Support/ouracli/.env.example`
//! - Windows: `%LOCALAPPDATA%/ouracli/.env.example`
//!
//! Nothing here may fail the build. Read-only homes and sandboxed builders
//! only get a `cargo:warning`.

use std::{env, fs, path::PathBuf};

fn main() {
    println!("cargo:rerun-if-changed=.env.example");

    let Some(manifest_dir) = env::var_os("CARGO_MANIFEST_DIR").map(PathBuf::from) else {
        return;
    };
    let template = manifest_dir.join(".env.example");
    if !template.is_file() {
        println!(
            "cargo:warning=.env.example not found at {}",
            template.display()
        );
        return;
    }

    let mut out_dir = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    out_dir.push("ouracli");

    let copied = fs::create_dir_all(&out_dir)
        .and_then(|_| fs::copy(&template, out_dir.join(".env.example")));
    if let Err(e) = copied {
        println!(
            "cargo:warning=could not copy .env.example to {}: {}",
            out_dir.display(),
            e
        );
    }
}
