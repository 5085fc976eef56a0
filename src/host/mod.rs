//! Window, keyboard and audio wiring around the interpreter core.

use std::time::Instant;

use anyhow::{Context, Result};
use chip8vm::{Emulator, TimerDriver};
use log::{info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;

pub mod config;
mod input;
mod sound;
mod window;

use config::Settings;
use sound::Sound;
use window::Screen;

// Cycles owed for one loop pass are capped so a stalled window does not
// turn into a burst of thousands of instructions.
const MAX_CYCLES_PER_PASS: u32 = 64;

pub fn run(settings: Settings) -> Result<()> {
    let mut emu = match settings.seed {
        Some(seed) => Emulator::with_rng(StdRng::seed_from_u64(seed)),
        None => Emulator::new(),
    };
    emu.load_rom_by_file(&settings.rom)
        .with_context(|| format!("could not load {}", settings.rom.display()))?;
    info!(
        "running {} at {} instructions/s",
        settings.rom.display(),
        settings.ips
    );

    let mut screen = Screen::new(settings.scale)?;
    let sound = if settings.mute {
        None
    } else {
        match Sound::new() {
            Ok(sound) => Some(sound),
            Err(err) => {
                warn!("continuing without sound: {err:#}");
                None
            }
        }
    };

    let start = Instant::now();
    let mut cpu_clock = TimerDriver::with_frequency(start, settings.ips);
    emu.restart_timers(start);

    while screen.is_running() {
        let now = Instant::now();
        for (n, pressed) in input::keypad_state(&screen.held_keys()).iter().enumerate() {
            emu.set_key(n as u8, *pressed);
        }

        for _ in 0..cpu_clock.due_ticks(now).min(MAX_CYCLES_PER_PASS) {
            if let Err(err) = emu.cycle() {
                // recoverable errors were already logged by the core
                if err.is_fatal() {
                    return Err(err).context("interpreter halted");
                }
            }
        }

        emu.sync_timers(now);
        if let Some(sound) = &sound {
            sound.set_active(emu.sound_active());
        }

        match emu.take_frame() {
            Some(frame) => screen.render(&frame)?,
            None => screen.update(),
        }
    }
    Ok(())
}
