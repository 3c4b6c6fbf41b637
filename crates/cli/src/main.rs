#![deny(unsafe_code)]
//! CLI binary for the hue-wheel color picker.
//!
//! Subcommands:
//! - `render`: render the wheel for a viewport and write a PNG
//! - `pick`: report the color under a point
//! - `list`: print available shadings and their parameters
//!
//! Set `RUST_LOG=debug` for render and cache diagnostics.

mod error;

use clap::{Parser, Subcommand};
use error::CliError;
use hue_wheel_core::{color_at, render_with, Hsb, Point, Shading, Viewport};
use hue_wheel_surface::ShadingKind;
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "hue-wheel", about = "Hue/saturation color wheel CLI")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render the wheel and write a PNG.
    Render {
        /// Viewport width in pixels.
        #[arg(short = 'W', long, default_value_t = 256.0)]
        width: f64,

        /// Viewport height in pixels.
        #[arg(short = 'H', long, default_value_t = 256.0)]
        height: f64,

        /// Shading policy (visual, linear).
        #[arg(short, long, default_value = "visual")]
        shading: String,

        /// Shading parameters as a JSON string.
        #[arg(long, default_value = "{}")]
        params: String,

        /// Output file path.
        #[arg(short, long, default_value = "wheel.png")]
        output: PathBuf,
    },
    /// Report the color under a pointer position.
    Pick {
        /// Pointer x coordinate.
        #[arg(long, allow_negative_numbers = true)]
        x: f64,

        /// Pointer y coordinate.
        #[arg(long, allow_negative_numbers = true)]
        y: f64,

        /// Viewport width in pixels.
        #[arg(short = 'W', long, default_value_t = 256.0)]
        width: f64,

        /// Viewport height in pixels.
        #[arg(short = 'H', long, default_value_t = 256.0)]
        height: f64,

        /// Brightness of the selected color, in [0, 1].
        #[arg(short, long, default_value_t = 1.0)]
        brightness: f64,
    },
    /// List available shadings.
    List,
}

/// Longest side a rendered snapshot may have.
const MAX_RENDER_SIDE: usize = 16_384;
/// Pixel budget for one render (8192 x 8192).
const MAX_RENDER_PIXELS: usize = 1 << 26;

/// Rejects viewports the core treats as precondition violations.
fn viewport(width: f64, height: f64) -> Result<Viewport, CliError> {
    if !(width.is_finite() && height.is_finite()) || width < 0.0 || height < 0.0 {
        return Err(CliError::Viewport { width, height });
    }
    Ok(Viewport::new(width, height))
}

/// Checks that a viewport yields a writable snapshot before any pixel is
/// allocated.
fn render_viewport(width: f64, height: f64) -> Result<Viewport, CliError> {
    let vp = viewport(width, height)?;
    let (w, h) = vp.pixel_dims();
    if w == 0 || h == 0 {
        return Err(CliError::EmptyRender { width, height });
    }
    let too_large = w > MAX_RENDER_SIDE
        || h > MAX_RENDER_SIDE
        || w.checked_mul(h).map_or(true, |n| n > MAX_RENDER_PIXELS);
    if too_large {
        return Err(CliError::RenderTooLarge {
            width: w,
            height: h,
            max_side: MAX_RENDER_SIDE,
            max_pixels: MAX_RENDER_PIXELS,
        });
    }
    Ok(vp)
}

/// JSON report printed by `pick --json`.
fn pick_report(hsb: Hsb) -> serde_json::Value {
    let rgb = hsb.to_rgb();
    serde_json::json!({
        "hsb": hsb,
        "rgb": {
            "hex": rgb,
            "red": rgb.red,
            "green": rgb.green,
            "blue": rgb.blue,
        },
    })
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::List => {
            let shadings: Vec<ShadingKind> = ShadingKind::list_shadings()
                .iter()
                .map(|name| ShadingKind::from_name(name, &serde_json::json!({})))
                .collect::<Result<_, _>>()?;
            if cli.json {
                let info: serde_json::Map<String, serde_json::Value> = shadings
                    .iter()
                    .map(|s| (s.name().to_string(), s.param_schema()))
                    .collect();
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("Shadings:");
                for s in &shadings {
                    println!("  {} {}", s.name(), s.params());
                }
            }
        }
        Command::Render {
            width,
            height,
            shading,
            params,
            output,
        } => {
            let vp = render_viewport(width, height)?;
            let params: serde_json::Value =
                serde_json::from_str(&params).map_err(|e| CliError::Params(e.to_string()))?;
            let kind = ShadingKind::from_name(&shading, &params)?;
            log::info!("rendering {width}x{height} with {} shading", kind.name());

            let raster = render_with(vp, &kind)?;
            hue_wheel_surface::snapshot::write_png(&raster, &output)?;

            if cli.json {
                let info = serde_json::json!({
                    "width": raster.width(),
                    "height": raster.height(),
                    "shading": kind.name(),
                    "params": kind.params(),
                    "output": output.display().to_string(),
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                eprintln!(
                    "rendered {}x{} {} wheel -> {}",
                    raster.width(),
                    raster.height(),
                    kind.name(),
                    output.display()
                );
            }
        }
        Command::Pick {
            x,
            y,
            width,
            height,
            brightness,
        } => {
            let vp = viewport(width, height)?;
            let hsb = color_at(Point::new(x, y), vp, brightness);
            let rgb = hsb.to_rgb();

            if cli.json {
                println!("{}", serde_json::to_string_pretty(&pick_report(hsb))?);
            } else {
                println!(
                    "hue {:.4}  saturation {:.4}  brightness {:.4}",
                    hsb.hue, hsb.saturation, hsb.brightness
                );
                println!(
                    "rgb {:.4} {:.4} {:.4}  {}",
                    rgb.red,
                    rgb.green,
                    rgb.blue,
                    rgb.to_hex()
                );
            }
        }
    }

    Ok(())
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        log::debug!("command failed: {e:?}");
        if json_mode {
            let j = serde_json::json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}
