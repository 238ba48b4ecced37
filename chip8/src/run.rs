use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{anyhow, Context};
use log::{error, info};
use sdl2::event::{Event, WindowEvent};
use sdl2::keyboard::Keycode;

use vm8::Machine;
use vm8_display::Display;

use crate::keymap::keymap;

/// Everything the front end needs to start a program.
pub struct Config {
    pub rom: PathBuf,
    pub cycle_delay: Duration,
    pub scale: u32,
    pub seed: Option<u64>,
}

pub fn run(config: Config) -> anyhow::Result<()> {
    let mut machine = match config.seed {
        Some(seed) => Machine::with_seed(seed),
        None => Machine::new(),
    };

    // Load ROM
    let file = File::open(&config.rom)
        .with_context(|| format!("unable to open {}", config.rom.display()))?;
    machine
        .load_from(&mut BufReader::new(file))
        .with_context(|| format!("unable to load {}", config.rom.display()))?;
    info!("loaded {}", config.rom.display());

    // Get SDL2 context
    let sdl = sdl2::init().map_err(|e| anyhow!("unable to initialise SDL2: {}", e))?;
    let mut display = Display::new(&sdl, config.scale)?;
    let mut events = sdl
        .event_pump()
        .map_err(|e| anyhow!("unable to get SDL2 event pump: {}", e))?;

    let mut last_cycle = Instant::now();

    'event: loop {
        if let Err(fault) = machine.step() {
            error!("halting at {:#06X}: {}", machine.pc(), fault);
            return Err(fault.into());
        }

        // Handle input
        for event in events.poll_iter() {
            match event {
                Event::Quit { .. }
                | Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } => break 'event,
                // Key releases are not delivered to an unfocused window
                Event::Window {
                    win_event: WindowEvent::FocusLost,
                    ..
                } => machine.keypad().release_all(),
                Event::KeyDown {
                    keycode: Some(key), ..
                } => {
                    if let Some(index) = keymap(key) {
                        machine.set_key(index, true)?;
                    }
                }
                Event::KeyUp {
                    keycode: Some(key), ..
                } => {
                    if let Some(index) = keymap(key) {
                        machine.set_key(index, false)?;
                    }
                }
                _ => continue,
            };
        }

        // If the draw flag is set, unset it and render the current frame
        if let Some(frame) = machine.take_frame() {
            display.render(frame)?;
        }

        // Handle timing
        let elapsed = last_cycle.elapsed();
        if config.cycle_delay > elapsed {
            std::thread::sleep(config.cycle_delay - elapsed);
        }
        last_cycle = Instant::now();
    }

    info!("exiting");
    Ok(())
}
