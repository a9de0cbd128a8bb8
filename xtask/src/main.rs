//! Workspace task runner: man page and shell completion generation.

use std::fs;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::{Shell, generate_to};
use clap_mangen::Man;

#[derive(Parser)]
#[command(name = "xtask", about = "Workspace tasks", arg_required_else_help = true)]
struct Xtask {
    #[command(subcommand)]
    command: Task,
}

#[derive(Subcommand)]
enum Task {
    /// Generate man pages into dist/man
    Man,
    /// Generate shell completions into dist/completions
    Completions,
    /// Generate everything
    Dist,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let xtask = Xtask::parse();
    match xtask.command {
        Task::Man => man()?,
        Task::Completions => completions()?,
        Task::Dist => {
            man()?;
            completions()?;
        }
    }
    Ok(())
}

fn man() -> Result<(), Box<dyn std::error::Error>> {
    let out_dir = dist_dir().join("man");
    fs::create_dir_all(&out_dir)?;

    let cmd = basen::command();
    let man = Man::new(cmd.clone());
    let mut buffer = Vec::new();
    man.render(&mut buffer)?;
    fs::write(out_dir.join("basen.1"), buffer)?;

    // One page per subcommand
    for sub in cmd.get_subcommands() {
        let name = format!("basen-{}.1", sub.get_name());
        let mut buffer = Vec::new();
        Man::new(sub.clone()).render(&mut buffer)?;
        fs::write(out_dir.join(name), buffer)?;
    }

    println!("man pages written to {}", out_dir.display());
    Ok(())
}

fn completions() -> Result<(), Box<dyn std::error::Error>> {
    let out_dir = dist_dir().join("completions");
    fs::create_dir_all(&out_dir)?;

    let mut cmd = basen::command();
    for shell in [Shell::Bash, Shell::Zsh, Shell::Fish, Shell::PowerShell] {
        generate_to(shell, &mut cmd, "basen", &out_dir)?;
    }

    println!("completions written to {}", out_dir.display());
    Ok(())
}

fn dist_dir() -> PathBuf {
    // CARGO_MANIFEST_DIR is xtask/; dist lives at the workspace root.
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .map(PathBuf::from)
        .unwrap_or_default()
        .join("dist")
}
