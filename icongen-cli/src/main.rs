use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use icongen_core::render::IconRenderer;
use icongen_core::targets::{self, Platform};
use icongen_core::{raster, verify, VERSION};

#[derive(Parser, Debug)]
#[command(name = "icongen", version = VERSION, about = "Render the app logo into Android and iOS launcher icons")]
struct Cli {
    #[command(subcommand)]
    cmd: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render every icon into the project tree (default)
    Generate {
        /// Project root containing android/ and ios/ [default: current directory]
        #[arg(long)]
        root: Option<PathBuf>,
    },
    /// Check that every icon exists with the expected dimensions
    Verify {
        /// Project root containing android/ and ios/ [default: current directory]
        #[arg(long)]
        root: Option<PathBuf>,
    },
    /// Print the size tables
    List {
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    match cli.cmd.unwrap_or(Command::Generate { root: None }) {
        Command::Generate { root } => generate(project_root(root))?,
        Command::Verify { root } => {
            let checks = verify::verify(project_root(root));
            let failed = checks.iter().filter(|c| !c.is_ok()).count();
            for c in &checks {
                let mark = if c.is_ok() { "✓" } else { "✗" };
                let px = c.target.px;
                println!("  {} {} ({}x{}): {}", mark, c.target.path.display(), px, px, c.status);
            }
            if failed > 0 {
                bail!("{} of {} icons failed verification", failed, checks.len());
            }
            println!("\nAll {} icons verified.", checks.len());
        }
        Command::List { json } => {
            if json {
                let tables: Vec<_> = Platform::ALL
                    .iter()
                    .map(|p| serde_json::json!({ "platform": p, "sizes": p.sizes() }))
                    .collect();
                println!("{}", serde_json::to_string_pretty(&tables)?);
            } else {
                for p in Platform::ALL {
                    println!("{}:", p.label());
                    for e in p.sizes() {
                        println!("  {:<16} {}px", e.id, e.px);
                    }
                }
            }
        }
    }
    Ok(())
}

/// An empty root keeps printed paths relative, e.g. `android/app/...`.
fn project_root(root: Option<PathBuf>) -> PathBuf {
    root.unwrap_or_default()
}

fn generate(root: PathBuf) -> Result<()> {
    let rasterizer = raster::probe().context("cannot render icons")?;
    let renderer = IconRenderer::new(rasterizer, root)?;
    log::debug!("{} targets under {}", targets::plan(renderer.root()).len(), renderer.root().display());

    for (i, platform) in Platform::ALL.into_iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("Generating {} icons...", platform.label());
        renderer
            .render_platform(platform, |w| {
                println!("  ✓ {} ({}x{})", w.target.path.display(), w.target.px, w.target.px);
            })
            .with_context(|| format!("generating {} icons", platform.label()))?;
    }

    println!("\nAll icons generated successfully!");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn bare_invocation_means_generate() {
        let cli = Cli::try_parse_from(["icongen"]).unwrap();
        assert!(cli.cmd.is_none());
    }

    #[test]
    fn generate_accepts_root() {
        let cli = Cli::try_parse_from(["icongen", "generate", "--root", "app"]).unwrap();
        match cli.cmd {
            Some(Command::Generate { root }) => assert_eq!(project_root(root), PathBuf::from("app")),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn default_root_prints_paths_without_dot_prefix() {
        let root = project_root(None);
        let first = &targets::plan(&root)[0];
        assert_eq!(
            first.path.display().to_string(),
            "android/app/src/main/res/mipmap-mdpi/ic_launcher.png"
        );
        let last = &targets::plan(&root)[17];
        assert!(last.path.starts_with("ios/Runner"));
    }

    #[test]
    fn root_is_documented_on_every_subcommand() {
        let cmd = Cli::command();
        for name in ["generate", "verify"] {
            let sub = cmd.find_subcommand(name).unwrap();
            let root = sub.get_arguments().find(|a| a.get_id() == "root").unwrap();
            assert!(root.get_help().is_some(), "{} --root has no help", name);
        }
    }
}
