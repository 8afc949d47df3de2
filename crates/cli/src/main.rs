#![deny(unsafe_code)]
//! CLI binary for the picker color engine.
//!
//! Subcommands:
//! - `convert <hex>`: show a color in every encoding
//! - `random`: sample colors from a mode
//! - `bar forward|inverse`: color bar mapping
//! - `constrain <s> <v>`: clamp into a mode envelope
//! - `gate`: whether a configuration clamps area/bar edits
//! - `edit <hex>`: run one control edit through the pipeline
//! - `modes`, `presets`: list the built-in tables

mod error;

use clap::{Parser, Subcommand};
use error::CliError;
use picker_core::color::{parse_hex, rgb_to_hsl};
use picker_core::editor::{edit_alpha, edit_from_area, edit_from_bar, edit_hue};
use picker_core::random::generate_random_color;
use picker_core::{
    position_from_sat_value, sat_value_from_position, should_apply_constraints, ColorMode,
    ColorValue, ModeTable, PickerConfig, Presets, Xorshift64,
};
use serde_json::{json, Value};
use std::io::{self, BufWriter, Write};
use std::process;
use std::time::{SystemTime, UNIX_EPOCH};

#[derive(Parser)]
#[command(name = "picker", version, about = "Color picker math from the command line")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    /// Log debug detail to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show a hex color as RGB, HSV and HSL.
    Convert {
        /// Color as #rrggbb or rrggbb.
        hex: String,

        /// Alpha in [0, 1].
        #[arg(short, long, default_value_t = 1.0)]
        alpha: f64,

        /// Render malformed hex as black instead of failing.
        #[arg(long)]
        lenient: bool,
    },
    /// Sample random colors from a color mode.
    Random {
        /// Color mode (normal, pastel, vivid).
        #[arg(short, long, default_value = "normal")]
        mode: ColorMode,

        /// PRNG seed; defaults to the current time.
        #[arg(long)]
        seed: Option<u64>,

        /// How many colors to sample.
        #[arg(short = 'n', long, default_value_t = 1)]
        count: usize,
    },
    /// Map between the color bar and saturation/value.
    Bar {
        #[command(subcommand)]
        direction: BarDirection,
    },
    /// Clamp saturation/value into a mode's envelope.
    Constrain {
        #[arg(allow_negative_numbers = true)]
        saturation: f64,
        #[arg(allow_negative_numbers = true)]
        value: f64,

        /// Mode key; unknown keys pass through unchanged.
        #[arg(short, long, default_value = "normal")]
        mode: String,

        /// Extra modes as a JSON object of {"name": {"saturation": {..}, "value": {..}}}.
        #[arg(long)]
        modes: Option<String>,
    },
    /// Report whether area/bar edits are clamped under a configuration.
    Gate {
        /// Picker configuration as a JSON string.
        #[arg(long, default_value = "{}")]
        config: String,

        /// Mode key to gate on instead of the configuration's built-in mode.
        #[arg(short, long)]
        mode: Option<String>,

        /// Extra modes as JSON, resolved together with --mode.
        #[arg(long, requires = "mode")]
        modes: Option<String>,
    },
    /// Apply control edits to a color, in the order hue, area, bar, alpha.
    Edit {
        /// Starting color as #rrggbb.
        hex: String,

        /// Hue slider fraction in [0, 1].
        #[arg(long)]
        hue: Option<f64>,

        /// Color area pointer as x,y fractions.
        #[arg(long, value_parser = parse_point)]
        area: Option<(f64, f64)>,

        /// Color bar position in [0, 100].
        #[arg(long)]
        bar: Option<f64>,

        /// Alpha slider percent in [0, 100].
        #[arg(long)]
        alpha: Option<f64>,

        /// Picker configuration as a JSON string.
        #[arg(long, default_value = "{}")]
        config: String,
    },
    /// List built-in color modes and their envelopes.
    Modes,
    /// List the default preset swatches.
    Presets,
}

#[derive(Subcommand)]
enum BarDirection {
    /// Saturation/value to bar position.
    Forward {
        saturation: f64,
        value: f64,
    },
    /// Bar position to saturation/value.
    Inverse {
        #[arg(allow_negative_numbers = true)]
        position: f64,
    },
}

fn parse_point(s: &str) -> Result<(f64, f64), String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected x,y but got {s:?}"))?;
    let parse = |v: &str| {
        v.trim()
            .parse::<f64>()
            .map_err(|e| format!("invalid coordinate {v:?}: {e}"))
    };
    Ok((parse(x)?, parse(y)?))
}

fn entropy_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default()
}

fn color_json(color: &ColorValue) -> Result<Value, CliError> {
    let mut value = serde_json::to_value(color)?;
    value["hsl"] = serde_json::to_value(rgb_to_hsl(color.rgb()))?;
    Ok(value)
}

fn color_line(color: &ColorValue) -> String {
    let rgb = color.rgb();
    let hsv = color.hsv();
    let hsl = rgb_to_hsl(rgb);
    format!(
        "{}  rgb({}, {}, {})  hsv({}, {}%, {}%)  hsl({}, {}%, {}%)  alpha {}",
        color.hex(),
        rgb.r,
        rgb.g,
        rgb.b,
        hsv.h,
        hsv.s,
        hsv.v,
        hsl.h,
        hsl.s,
        hsl.l,
        color.alpha()
    )
}

fn print_json(value: &Value) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::Convert {
            hex,
            alpha,
            lenient,
        } => {
            if !lenient {
                parse_hex(&hex)?;
            }
            let color = ColorValue::from_hex(&hex, alpha);
            if cli.json {
                print_json(&color_json(&color)?)?;
            } else {
                println!("{}", color_line(&color));
            }
        }
        Command::Random { mode, seed, count } => {
            let seed = seed.unwrap_or_else(entropy_seed);
            log::debug!("sampling {count} {mode} colors with seed {seed}");
            let mut rng = Xorshift64::new(seed);
            let mut out = BufWriter::new(io::stdout().lock());
            if cli.json {
                // Written one color at a time; the list is never collected.
                writeln!(out, "{{\"mode\": {}, \"seed\": {seed}, \"colors\": [", serde_json::to_string(&mode)?)?;
                for i in 0..count {
                    let color = color_json(&generate_random_color(mode, &mut rng))?;
                    let sep = if i + 1 < count { "," } else { "" };
                    writeln!(out, "  {}{sep}", serde_json::to_string(&color)?)?;
                }
                writeln!(out, "]}}")?;
            } else {
                for _ in 0..count {
                    writeln!(out, "{}", color_line(&generate_random_color(mode, &mut rng)))?;
                }
            }
            out.flush()?;
        }
        Command::Bar { direction } => match direction {
            BarDirection::Forward { saturation, value } => {
                let position = position_from_sat_value(saturation, value);
                if cli.json {
                    print_json(&json!({"s": saturation, "v": value, "position": position}))?;
                } else {
                    println!("{position}");
                }
            }
            BarDirection::Inverse { position } => {
                let sv = sat_value_from_position(position);
                if cli.json {
                    print_json(&json!({"position": position, "s": sv.s, "v": sv.v}))?;
                } else {
                    println!("s={} v={}", sv.s, sv.v);
                }
            }
        },
        Command::Constrain {
            saturation,
            value,
            mode,
            modes,
        } => {
            let table = match modes {
                Some(json) => ModeTable::from_json(&json)?,
                None => ModeTable::standard(),
            };
            let sv = table.constrain(saturation, value, &mode);
            if cli.json {
                print_json(&json!({"mode": mode, "s": sv.s, "v": sv.v}))?;
            } else {
                println!("s={} v={}", sv.s, sv.v);
            }
        }
        Command::Gate {
            config,
            mode,
            modes,
        } => {
            let config = PickerConfig::from_json(&config)?;
            let (mode, applies) = match mode {
                Some(key) => {
                    let table = match modes {
                        Some(json) => ModeTable::from_json(&json)?,
                        None => ModeTable::standard(),
                    };
                    let applies = table.should_apply_constraints(&key, config.sliders);
                    (key, applies)
                }
                None => (
                    config.mode.to_string(),
                    should_apply_constraints(config.mode, config.sliders),
                ),
            };
            if cli.json {
                print_json(&json!({"mode": mode, "applies": applies}))?;
            } else {
                println!("{applies}");
            }
        }
        Command::Edit {
            hex,
            hue,
            area,
            bar,
            alpha,
            config,
        } => {
            if hue.is_none() && area.is_none() && bar.is_none() && alpha.is_none() {
                return Err(CliError::Input(
                    "nothing to edit: pass --hue, --area, --bar or --alpha".into(),
                ));
            }
            let config = PickerConfig::from_json(&config)?;
            let mut color = ColorValue::from_rgb(parse_hex(&hex)?, 1.0);
            if let Some(fraction) = hue {
                color = edit_hue(&color, fraction);
            }
            if let Some((x, y)) = area {
                color = edit_from_area(&color, x, y, &config);
            }
            if let Some(position) = bar {
                color = edit_from_bar(&color, position, &config);
            }
            if let Some(percent) = alpha {
                color = edit_alpha(&color, percent);
            }
            if cli.json {
                print_json(&color_json(&color)?)?;
            } else {
                println!("{}", color_line(&color));
            }
        }
        Command::Modes => {
            let table = ModeTable::standard();
            if cli.json {
                print_json(&serde_json::to_value(&table)?)?;
            } else {
                for name in table.names() {
                    if let Some(range) = table.get(name) {
                        println!(
                            "{name:<8} s {}..={}  v {}..={}",
                            range.saturation.min,
                            range.saturation.max,
                            range.value.min,
                            range.value.max
                        );
                    }
                }
            }
        }
        Command::Presets => {
            let presets = Presets::default();
            if cli.json {
                print_json(&json!({"presets": presets.hexes()}))?;
            } else {
                println!("{}", presets.hexes().join(" "));
            }
        }
    }

    Ok(())
}

fn init_logger(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logger(cli.verbose);
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        if json_mode {
            let j = serde_json::json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_point_accepts_pair() {
        assert_eq!(parse_point("0.25, 0.5"), Ok((0.25, 0.5)));
    }

    #[test]
    fn parse_point_rejects_missing_comma() {
        assert!(parse_point("0.25").is_err());
        assert!(parse_point("a,b").is_err());
    }

    #[test]
    fn color_json_adds_hsl() {
        let color = ColorValue::from_hex("#ff0000", 1.0);
        let value = color_json(&color).unwrap();
        assert_eq!(value["hex"], "#ff0000");
        assert_eq!(value["hsl"]["l"], 50);
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
