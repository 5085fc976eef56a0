use std::path::PathBuf;

use clap::Parser;

pub const DEFAULT_INSTRUCTIONS_PER_SECOND: u32 = 700;
pub const MAX_INSTRUCTIONS_PER_SECOND: u32 = 100_000;
pub const DEFAULT_SCALE: u8 = 16;

/// Command line settings for the windowed interpreter.
#[derive(Parser, Debug, Clone)]
#[command(version, about = "CHIP-8 interpreter", long_about = None)]
pub struct Settings {
    /// Path to the ROM file to run
    pub rom: PathBuf,

    /// Instructions executed per second of wall-clock time
    #[arg(
        long,
        default_value_t = DEFAULT_INSTRUCTIONS_PER_SECOND,
        value_parser = clap::value_parser!(u32).range(1..=MAX_INSTRUCTIONS_PER_SECOND as i64)
    )]
    pub ips: u32,

    /// Window scale factor
    #[arg(long, default_value_t = DEFAULT_SCALE, value_parser = parse_scale)]
    pub scale: u8,

    /// Do not play a tone while the sound timer runs
    #[arg(long)]
    pub mute: bool,

    /// Seed for the random number source, for reproducible runs
    #[arg(long)]
    pub seed: Option<u64>,
}

fn parse_scale(s: &str) -> Result<u8, String> {
    let scale: u8 = s.parse().map_err(|_| format!("`{s}` is not a number"))?;
    match scale {
        1 | 2 | 4 | 8 | 16 | 32 => Ok(scale),
        _ => Err(format!("scale must be one of 1, 2, 4, 8, 16, 32 (got {scale})")),
    }
}
