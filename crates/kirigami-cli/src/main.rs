//! kirigami CLI - SVG cut-pattern generator
//!
//! Parses pattern parameters from flags, runs the pattern engine, and
//! writes the resulting scene as an SVG file. Diameters are accepted on
//! the command line (they are what you measure); the engine works in
//! radii.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use kirigami_pattern::{generate, Parameters, PatternKind, SpacingLaw};

#[derive(Parser)]
#[command(name = "kirigami")]
#[command(about = "Generate SVG cut patterns for circular kirigami panels", long_about = None)]
struct Cli {
    /// Outer diameter of the panel.
    #[arg(long)]
    outer_diam: f64,

    /// Inner diameter of the panel.
    #[arg(long, default_value_t = 0.0)]
    inner_diam: f64,

    /// Number of intermediate rings or radial dash steps.
    #[arg(long, default_value_t = 10)]
    num_intermediate: u32,

    /// Number of arc segments per ring, or of radial rays.
    #[arg(long, default_value_t = 20)]
    num_segments: u32,

    /// Fraction of each segment that is cut (vs gap), in (0, 1].
    #[arg(long, default_value_t = 0.8)]
    arc_fraction: f64,

    /// Pattern family.
    #[arg(long, value_enum, default_value = "concentric-arcs")]
    pattern: Pattern,

    /// Radial spacing law for intermediate rings.
    #[arg(long, value_enum, default_value = "linear")]
    spacing: Spacing,

    /// Exponent for power spacing.
    #[arg(long, default_value_t = 1.0)]
    radial_exponent: f64,

    /// Twist angle in degrees per ring for the spiral pattern.
    #[arg(long, default_value_t = 10.0)]
    spiral_twist: f64,

    /// Stagger the arcs between adjacent rings.
    #[arg(long)]
    stagger: bool,

    /// Draw full inner and outer boundary circles.
    #[arg(long)]
    draw_bounds: bool,

    /// Diameter of a central hole for attachment.
    #[arg(long, default_value_t = 0.0)]
    central_hole: f64,

    /// Line width for the cuts.
    #[arg(long, default_value_t = 0.1)]
    line_width: f64,

    /// Output SVG file name.
    #[arg(long, default_value = "kirigami.svg")]
    output: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Pattern {
    ConcentricArcs,
    SpiralArcs,
    RadialLines,
}

impl From<Pattern> for PatternKind {
    fn from(pattern: Pattern) -> Self {
        match pattern {
            Pattern::ConcentricArcs => PatternKind::ConcentricArcs,
            Pattern::SpiralArcs => PatternKind::SpiralArcs,
            Pattern::RadialLines => PatternKind::RadialLines,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Spacing {
    Linear,
    Power,
    Log,
}

impl From<Spacing> for SpacingLaw {
    fn from(spacing: Spacing) -> Self {
        match spacing {
            Spacing::Linear => SpacingLaw::Linear,
            Spacing::Power => SpacingLaw::Power,
            Spacing::Log => SpacingLaw::Log,
        }
    }
}

fn params_from(cli: &Cli) -> Parameters {
    Parameters {
        inner_radius: cli.inner_diam / 2.0,
        outer_radius: cli.outer_diam / 2.0,
        ring_count: cli.num_intermediate,
        segment_count: cli.num_segments,
        arc_fraction: cli.arc_fraction,
        spacing: cli.spacing.into(),
        radial_exponent: cli.radial_exponent,
        spiral_twist_deg: cli.spiral_twist,
        pattern: cli.pattern.into(),
        stagger: cli.stagger,
        draw_bounds: cli.draw_bounds,
        central_hole_radius: cli.central_hole / 2.0,
        stroke_width: cli.line_width,
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let params = params_from(&cli);

    let generated = generate(&params)?;
    for warning in &generated.warnings {
        eprintln!("warning: {warning}");
    }

    kirigami_svg::write_scene(&cli.output, &generated.scene)
        .with_context(|| format!("writing {}", cli.output.display()))?;
    println!(
        "Wrote {} primitives to {}",
        generated.scene.len(),
        cli.output.display()
    );

    Ok(())
}
