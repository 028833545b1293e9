use clap::{Parser, Subcommand, ValueEnum};
use rust_qrgen::encoder::builder::evaluate_masks;
use rust_qrgen::utils::render::{save_png, to_text};
use rust_qrgen::{ECLevel, QrEncoder};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "qrtool", version, about = "rust_qrgen CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Copy, ValueEnum)]
enum Level {
    L,
    M,
    Q,
    H,
}

impl From<Level> for ECLevel {
    fn from(level: Level) -> Self {
        match level {
            Level::L => ECLevel::L,
            Level::M => ECLevel::M,
            Level::Q => ECLevel::Q,
            Level::H => ECLevel::H,
        }
    }
}

#[derive(Subcommand)]
enum Command {
    /// Encode text into a QR code and print it or write a PNG
    Encode {
        text: String,
        #[arg(long, value_enum, default_value = "m")]
        level: Level,
        /// Force a version (1-40)
        #[arg(long)]
        version: Option<u8>,
        /// Omit the quiet zone
        #[arg(long)]
        no_border: bool,
        /// Pixels per module in the PNG
        #[arg(long, default_value_t = 8)]
        box_size: u32,
        /// Write a PNG instead of printing to the terminal
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Print the penalty of every mask and the one chosen
    Masks {
        text: String,
        #[arg(long, value_enum, default_value = "m")]
        level: Level,
        #[arg(long)]
        version: Option<u8>,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Command::Encode {
            text,
            level,
            version,
            no_border,
            box_size,
            output,
        } => encode_cmd(&text, level, version, no_border, box_size, output),
        Command::Masks {
            text,
            level,
            version,
        } => masks_cmd(&text, level, version),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn encoder(level: Level, version: Option<u8>) -> QrEncoder {
    let encoder = QrEncoder::new(level.into());
    match version {
        Some(v) => encoder.with_version(v),
        None => encoder,
    }
}

fn encode_cmd(
    text: &str,
    level: Level,
    version: Option<u8>,
    no_border: bool,
    box_size: u32,
    output: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut encoder = encoder(level, version);
    if no_border {
        encoder = encoder.with_quiet_zone(0);
    }

    let start = Instant::now();
    let qr = encoder.encode_str(text)?;
    let elapsed = start.elapsed();

    match output {
        Some(path) => {
            save_png(&qr, box_size, &path)?;
            println!("Wrote {}", path.display());
        }
        None => print!("{}", to_text(&qr)),
    }
    println!(
        "version={} level={:?} mask={} penalty={} segments={} time={:.2?}",
        qr.version.number(),
        qr.error_correction,
        qr.mask_pattern.id(),
        qr.penalty,
        qr.segments.len(),
        elapsed
    );
    Ok(())
}

fn masks_cmd(text: &str, level: Level, version: Option<u8>) -> Result<(), Box<dyn std::error::Error>> {
    let encoder = encoder(level, version);
    let prepared = encoder.prepare(text.as_bytes())?;
    let candidates = evaluate_masks(prepared.version, &prepared.stream, 0, false)?;

    println!(
        "Version {} level {:?}, {} data bits",
        prepared.version.version_number(),
        prepared.version.level(),
        prepared.version.data_bit_capacity()
    );
    println!("mask  rule1  rule2  rule3  rule4  total");
    for c in &candidates {
        println!(
            "{:>4}  {:>5}  {:>5}  {:>5}  {:>5}  {:>5}",
            c.mask.id(),
            c.penalty.rule1,
            c.penalty.rule2,
            c.penalty.rule3,
            c.penalty.rule4,
            c.penalty.total()
        );
    }
    if let Some(best) = candidates
        .iter()
        .min_by_key(|c| (c.penalty.total(), c.mask.id()))
    {
        println!("Chosen mask: {}", best.mask.id());
    }
    Ok(())
}
