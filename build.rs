//! Build script for tunequeue.
//!
//! Copies the `.env.example` configuration template from the crate root into
//! the local data directory, next to where the program looks for its `.env`:
//!
//! - Linux: `~/.local/share/tunequeue/.env.example`
//! - macOS: `~/Library/Application Support/tunequeue/.env.example`
//! - Windows: `%LOCALAPPDATA%/tunequeue/.env.example`
//!
//! Any failure (missing template, unwritable data directory) is reported as a
//! cargo warning and never fails the build.

use std::{env, fs, path::PathBuf};

fn main() {
    println!("cargo:rerun-if-changed=.env.example");

    if let Err(e) = copy_env_example() {
        println!("cargo:warning=.env.example not copied: {}", e);
    }
}

fn copy_env_example() -> Result<(), Box<dyn std::error::Error>> {
    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR")?);
    let env_example_path = manifest_dir.join(".env.example");
    if !env_example_path.is_file() {
        return Err(format!("not found at {}", env_example_path.display()).into());
    }

    let mut out_dir = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    out_dir.push("tunequeue");
    fs::create_dir_all(&out_dir)?;

    let contents = fs::read_to_string(&env_example_path)?;
    fs::write(out_dir.join(".env.example"), contents)?;
    Ok(())
}
