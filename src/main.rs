//! seatmap - CLI tool to inspect seat maps and try selection toggles.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use seatmap::{
    generate_legend, generate_text_map, parse_layout_file, random_field, validate_field,
    GridLayout, LayoutConfig, LayoutOptions, Rect, SampleConfig, SeatField, SeatPos,
    SelectionTracker, ToggleOutcome,
};

/// Build a seat map, toggle seats and print the result.
#[derive(Parser, Debug)]
#[command(name = "seatmap")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Layout file (rows of A/U/R/S/E/X/_ glyphs); a random field is generated if omitted
    #[arg(short, long)]
    layout: Option<PathBuf>,

    /// Price for every seat of a layout file
    #[arg(long, default_value = "0")]
    price: f64,

    /// Rows of the random field
    #[arg(long, default_value = "44")]
    rows: u32,

    /// Columns of the random field
    #[arg(long, default_value = "44")]
    columns: u32,

    /// Seed for the random field
    #[arg(long)]
    seed: Option<u64>,

    /// Toggle the seat at grid position X,Y (repeatable)
    #[arg(short, long, value_parser = parse_pair::<i32>)]
    toggle: Vec<(i32, i32)>,

    /// Viewport size WIDTHxHEIGHT in pixels, used by --tap
    #[arg(long, value_parser = parse_size)]
    viewport: Option<(f32, f32)>,

    /// Tap the viewport at pixel PX,PY (repeatable)
    #[arg(long, value_parser = parse_pair::<f32>)]
    tap: Vec<(f32, f32)>,

    /// Validate only, don't print the map
    #[arg(long)]
    validate: bool,

    /// Output the final field as JSON
    #[arg(long)]
    json: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn parse_pair<T: std::str::FromStr>(s: &str) -> std::result::Result<(T, T), String> {
    let (a, b) = s
        .split_once(',')
        .ok_or_else(|| format!("expected A,B, got '{}'", s))?;
    let a = a.trim().parse().map_err(|_| format!("invalid number '{}'", a))?;
    let b = b.trim().parse().map_err(|_| format!("invalid number '{}'", b))?;
    Ok((a, b))
}

fn parse_size(s: &str) -> std::result::Result<(f32, f32), String> {
    let (w, h) = s
        .split_once(|c: char| c == 'x' || c == 'X')
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got '{}'", s))?;
    let w = w.trim().parse().map_err(|_| format!("invalid width '{}'", w))?;
    let h = h.trim().parse().map_err(|_| format!("invalid height '{}'", h))?;
    Ok((w, h))
}

fn load_field(args: &Args) -> Result<SeatField> {
    match &args.layout {
        Some(path) => {
            info!("Loading layout: {}", path.display());
            parse_layout_file(path, &LayoutOptions::new(args.price))
                .with_context(|| format!("Failed to parse {}", path.display()))
        }
        None => {
            let mut config = SampleConfig::new(args.rows, args.columns);
            config.seed = args.seed;
            info!("Generating random {}x{} field", args.columns, args.rows);
            random_field(&config).context("Failed to generate random field")
        }
    }
}

fn log_toggle(pos: SeatPos, outcome: ToggleOutcome) {
    match outcome {
        ToggleOutcome::Changed { from, to } => info!("Seat {}: {} -> {}", pos, from, to),
        ToggleOutcome::Unchanged(status) => {
            warn!("Seat {} is {} and cannot be selected", pos, status)
        }
        ToggleOutcome::NotFound => warn!("No seat at {}", pos),
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let mut field = load_field(&args)?;
    info!("Loaded {} seat(s)", field.len());

    // Validate
    let validation = validate_field(&field);

    for warning in &validation.warnings {
        warn!("{}", warning);
    }

    for err in &validation.errors {
        error!("{}", err);
    }

    if !validation.passed {
        anyhow::bail!("Validation failed");
    }

    // Validate-only mode
    if args.validate {
        info!("Validation passed");
        return Ok(());
    }

    let selection = SelectionTracker::attach(&mut field);

    for &(x, y) in &args.toggle {
        let pos = SeatPos::new(x, y);
        log_toggle(pos, field.toggle_selection(pos));
    }

    if !args.tap.is_empty() {
        let (width, height) = args
            .viewport
            .context("--tap requires --viewport WIDTHxHEIGHT")?;
        let viewport = Rect::from_size(width, height);
        let layout = GridLayout::for_field(viewport, &field, &LayoutConfig::default());

        for &(px, py) in &args.tap {
            match layout.hit_test(&field, px, py).map(|seat| seat.pos()) {
                Some(pos) => log_toggle(pos, field.toggle_selection(pos)),
                None => warn!("Tap at ({}, {}) hit no seat", px, py),
            }
        }
    }

    // Debug output
    if args.json {
        let json = serde_json::to_string_pretty(&field.snapshot())?;
        println!("{}", json);
        return Ok(());
    }

    print!("{}", generate_text_map(&field));
    println!();
    print!("{}", generate_legend(&field));
    println!();

    for pos in selection.positions() {
        if let Some(seat) = field.seat(pos) {
            println!("{} {}: {}", pos, seat.label(), seat.price);
        }
    }
    println!(
        "Selected: {} seat(s), total {}",
        selection.len(),
        field.selected_total()
    );

    Ok(())
}
