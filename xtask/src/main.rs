//! Build automation tasks for hinanai
//!
//! Usage:
//!   cargo xtask build-web              # Build WASM into dist/web
//!   cargo xtask dist [--platform P]    # Native release build into dist/native/<platform>

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::Command;

const BINARY: &str = "hinanai";

/// macroquad's JS loader, pinned to the macroquad release we build against
const MQ_JS_BUNDLE: &str = "https://raw.githubusercontent.com/not-fl3/macroquad/v0.4.14/js/mq_js_bundle.js";

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <title>hinanai</title>
    <style>
        html, body, canvas { margin: 0; padding: 0; width: 100%; height: 100%; overflow: hidden; background: black; }
    </style>
</head>
<body>
    <canvas id="glcanvas" tabindex="1"></canvas>
    <script src="mq_js_bundle.js"></script>
    <script>load("hinanai.wasm");</script>
</body>
</html>
"#;

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Build automation for hinanai")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build WASM plus assets and loader page into dist/web
    BuildWeb,
    /// Build a native release and copy assets next to it
    Dist {
        /// Target platform label: windows, macos, linux (defaults to host)
        #[arg(long)]
        platform: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::BuildWeb => build_web(),
        Commands::Dist { platform } => dist(platform),
    }
}

/// Get the project root directory
fn project_root() -> Result<PathBuf> {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .map(Path::to_path_buf)
        .context("xtask has no parent directory")
}

/// Run a command and check for success
fn run_cmd(cmd: &mut Command) -> Result<()> {
    let status = cmd.status().context("Failed to execute command")?;
    if !status.success() {
        anyhow::bail!("Command failed with status: {}", status);
    }
    Ok(())
}

/// Copy directory recursively
fn copy_dir_recursive(src: &Path, dst: &Path) -> Result<()> {
    std::fs::create_dir_all(dst)?;
    for entry in std::fs::read_dir(src)? {
        let entry = entry?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if src_path.is_dir() {
            copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            std::fs::copy(&src_path, &dst_path)?;
        }
    }
    Ok(())
}

/// Copy assets/ into `dist`. The font is required at startup, so a missing
/// assets directory is an error rather than a silent skip.
fn copy_assets(root: &Path, dist: &Path) -> Result<()> {
    let assets = root.join("assets");
    if !assets.is_dir() {
        anyhow::bail!("{} not found; the font asset is required at runtime", assets.display());
    }
    copy_dir_recursive(&assets, &dist.join("assets"))
}

/// Remove and recreate an output directory
fn fresh_dir(dir: &Path) -> Result<()> {
    if dir.exists() {
        std::fs::remove_dir_all(dir)?;
    }
    std::fs::create_dir_all(dir)?;
    Ok(())
}

fn build_web() -> Result<()> {
    let root = project_root()?;
    let dist = root.join("dist/web");

    println!("Building WASM...");
    run_cmd(
        Command::new("cargo")
            .current_dir(&root)
            .args(["build", "--release", "--target", "wasm32-unknown-unknown", "--bin", BINARY]),
    )?;

    fresh_dir(&dist)?;

    println!("Copying files to dist/web...");
    let wasm = format!("{}.wasm", BINARY);
    std::fs::copy(
        root.join("target/wasm32-unknown-unknown/release").join(&wasm),
        dist.join(&wasm),
    )
    .with_context(|| format!("copying {}", wasm))?;
    std::fs::write(dist.join("index.html"), INDEX_HTML)?;

    println!("Downloading {}...", MQ_JS_BUNDLE);
    run_cmd(
        Command::new("curl")
            .args(["-L", "-o"])
            .arg(dist.join("mq_js_bundle.js"))
            .arg(MQ_JS_BUNDLE),
    )?;

    copy_assets(&root, &dist)?;

    println!("Web build complete: dist/web/");
    Ok(())
}

fn dist(platform: Option<String>) -> Result<()> {
    let root = project_root()?;
    let platform = platform.unwrap_or_else(|| {
        if cfg!(target_os = "windows") {
            "windows".to_string()
        } else if cfg!(target_os = "macos") {
            "macos".to_string()
        } else {
            "linux".to_string()
        }
    });

    let dist = root.join(format!("dist/native/{}", platform));

    println!("Building native release for {}...", platform);
    fresh_dir(&dist)?;
    run_cmd(
        Command::new("cargo")
            .current_dir(&root)
            .args(["build", "--release", "--bin", BINARY]),
    )?;

    let binary_name = if platform == "windows" {
        format!("{}.exe", BINARY)
    } else {
        BINARY.to_string()
    };
    std::fs::copy(
        root.join("target/release").join(&binary_name),
        dist.join(&binary_name),
    )
    .with_context(|| format!("copying {}", binary_name))?;

    copy_assets(&root, &dist)?;

    println!("Native build complete: dist/native/{}/", platform);
    Ok(())
}
