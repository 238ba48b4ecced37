//! Runs a CHIP-8 program in an SDL2 window.
//!
//! ```bash
//! chip8 roms/pong.ch8
//! RUST_LOG=vm8=trace chip8 --cycle-delay-us 0 roms/pong.ch8
//! ```
//!
//! Escape or closing the window exits.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use vm8::constants::DEFAULT_CYCLE_DELAY_US;
use vm8_display::DEFAULT_SCALE;

mod keymap;
mod run;

#[doc(hidden)]
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    #[arg(help = "Path to the ROM file to run")]
    rom: PathBuf,

    #[arg(long, default_value_t = DEFAULT_CYCLE_DELAY_US, help = "Microseconds to wait after each cycle")]
    cycle_delay_us: u64,

    #[arg(short, long, default_value_t = DEFAULT_SCALE, help = "Window pixels per display pixel")]
    scale: u32,

    #[arg(long, help = "Seed for the random number instruction")]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    run::run(run::Config {
        rom: args.rom,
        cycle_delay: Duration::from_micros(args.cycle_delay_us),
        scale: args.scale,
        seed: args.seed,
    })
}
