//! `iconkit` CLI - Icon knockout, tinting, accent extraction, and badges.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use iconkit::ops::{apply_tint, circle_badge, dominant_color, make_transparent};
use iconkit::theme::{
    accent_from_image, find_profile_image, Section, Theme, ThemeMode, DEFAULT_ACCENT,
};
use iconkit::{load_pixmap, save_pixmap, Pixmap, Rgb};

/// Icon post-processing: background knockout, tinting, accents, and badges.
#[derive(Parser, Debug)]
#[command(name = "iconkit")]
#[command(version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Enable verbose output.
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Make dark background pixels fully transparent.
    Knockout {
        /// Input image path.
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Output image path.
        #[arg(short, long, default_value = "output.png", value_name = "OUTPUT")]
        output: PathBuf,

        /// Darkness tolerance (0-100). A pixel is knocked out when every color channel is at or below it.
        #[arg(long, default_value = "30", value_name = "INT",
              value_parser = clap::value_parser!(u8).range(0..=100))]
        tolerance: u8,
    },

    /// Recolor every visible pixel with a flat color, keeping alpha.
    Tint {
        /// Input image path.
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Output image path.
        #[arg(short, long, default_value = "icon_tinted.png", value_name = "OUTPUT")]
        output: PathBuf,

        /// Tint color as #RRGGBB.
        #[arg(short, long, default_value = "#ffffff", value_name = "COLOR")]
        color: Rgb,
    },

    /// Print the dominant color of an image as #rrggbb.
    Accent {
        /// Input image path.
        #[arg(value_name = "INPUT")]
        input: PathBuf,
    },

    /// Render an image as a round profile badge.
    Badge {
        /// Input image path.
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Output image path.
        #[arg(short, long, default_value = "badge.png", value_name = "OUTPUT")]
        output: PathBuf,

        /// Badge side length in pixels.
        #[arg(short, long, default_value = "64", value_name = "INT",
              value_parser = clap::value_parser!(u32).range(1..))]
        size: u32,
    },

    /// Discover the profile image in a directory and print the derived palette.
    Theme {
        /// Directory to search for a profile image.
        #[arg(value_name = "DIR", default_value = ".")]
        dir: PathBuf,

        /// Theme mode.
        #[arg(long, default_value = "dark", value_parser = ["dark", "light"])]
        mode: String,
    },

    /// List the sidebar sections, optionally filtered by title.
    Sections {
        /// Case-insensitive title filter.
        #[arg(value_name = "QUERY")]
        query: Option<String>,
    },
}

fn main() -> ExitCode {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("iconkit={log_level}").into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    if let Err(err) = run(&args) {
        tracing::error!("{err:#}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

fn run(args: &Args) -> Result<()> {
    match &args.command {
        Command::Knockout {
            input,
            output,
            tolerance,
        } => {
            let icon = load_input(input)?;
            let cutout = make_transparent(&icon, *tolerance);
            save_pixmap(&cutout, output).context("Failed to save image")?;
            println!(
                "Successfully processed {} -> {}",
                input.display(),
                output.display()
            );
        }

        Command::Tint {
            input,
            output,
            color,
        } => {
            let icon = load_input(input)?;
            let tinted = apply_tint(&icon, *color);
            save_pixmap(&tinted, output).context("Failed to save image")?;
            println!(
                "Successfully processed {} -> {}",
                input.display(),
                output.display()
            );
        }

        Command::Accent { input } => {
            let icon = load_input(input)?;
            let color = dominant_color(&icon).context("Failed to extract dominant color")?;
            println!("{color}");
        }

        Command::Badge {
            input,
            output,
            size,
        } => {
            let icon = load_input(input)?;
            let badge = circle_badge(&icon, *size).context("Failed to render badge")?;
            save_pixmap(&badge, output).context("Failed to save image")?;
            println!(
                "Successfully processed {} -> {}",
                input.display(),
                output.display()
            );
        }

        Command::Theme { dir, mode } => {
            let accent = match find_profile_image(dir) {
                Some(path) => {
                    tracing::info!("Found profile image {}", path.display());
                    accent_from_image(path)
                }
                None => {
                    tracing::info!("No profile image in {}; using default accent", dir.display());
                    DEFAULT_ACCENT
                }
            };
            let mode = match mode.as_str() {
                "light" => ThemeMode::Light,
                _ => ThemeMode::Dark,
            };
            print_theme(Theme::new(mode, accent));
        }

        Command::Sections { query } => {
            let query = query.as_deref().unwrap_or("");
            for section in Section::filter(query) {
                println!(
                    "{:<16} {} - {}",
                    section.label(),
                    section.title(),
                    section.description()
                );
            }
        }
    }

    Ok(())
}

fn load_input(path: &Path) -> Result<Pixmap> {
    // Validate input file exists
    if !path.exists() {
        anyhow::bail!("Input file does not exist: {}", path.display());
    }
    load_pixmap(path).context("Failed to load image")
}

fn print_theme(theme: Theme) {
    let mode = match theme.mode {
        ThemeMode::Dark => "dark",
        ThemeMode::Light => "light",
    };
    let palette = theme.palette;
    println!("mode:       {mode}");
    println!("window:     {}", palette.window);
    println!("sidebar:    {}", palette.sidebar);
    println!("border:     {}", palette.border);
    println!("card:       {}", palette.card);
    println!("text:       {}", palette.text);
    println!("text-muted: {}", palette.text_muted);
    println!("accent:     {}", palette.accent);
}
