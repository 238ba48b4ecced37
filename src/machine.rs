use std::io::Read;
use std::sync::Arc;

use log::{debug, trace, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::constants::{MEMORY_SIZE, PROGRAM_START};
use crate::error::{Fault, InvalidKey, LoadError};
use crate::instruction::Instruction;
use crate::keypad::Keypad;
use crate::operations::Flow;
use crate::state::{FrameBuffer, State};

/// What a single call to `Machine::step` did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// The word at the program counter decoded and ran.
    Executed(Instruction),
    /// The word at the program counter is not an instruction; the program counter did not move.
    Unrecognized(u16),
}

/// # Machine
/// A CHIP-8 virtual machine.
///
/// Tracks:
///  - the architectural `state`
///  - the `keypad`, shared with whatever produces input
///  - the random source for `Cxnn`
///
/// Supplies interfaces for:
/// - loading programs
/// - pressing and releasing keys
/// - advancing the machine one cycle at a time
/// - inspecting its frame buffer and sound timer for some presenter
pub struct Machine {
    state: State,
    keypad: Arc<Keypad>,
    rng: StdRng,
}

impl Machine {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// A machine whose `Cxnn` results are reproducible.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Machine {
            state: State::new(),
            keypad: Arc::new(Keypad::new()),
            rng,
        }
    }

    /// Copies a program into memory at `PROGRAM_START`.
    ///
    /// Memory is untouched if the program doesn't fit.
    pub fn load(&mut self, program: &[u8]) -> Result<(), LoadError> {
        let start = usize::from(PROGRAM_START);
        if start + program.len() > MEMORY_SIZE {
            return Err(LoadError::too_large(program.len()));
        }
        self.state.memory[start..start + program.len()].copy_from_slice(program);
        debug!("loaded {} byte program at {:#06X}", program.len(), start);
        Ok(())
    }

    /// Load a program from a source file
    ///
    /// # Arguments
    /// * `reader` a reader positioned at the start of a ROM image
    pub fn load_from(&mut self, reader: &mut dyn Read) -> Result<(), LoadError> {
        let mut program = Vec::new();
        reader.read_to_end(&mut program)?;
        self.load(&program)
    }

    /// Advances the machine by a single cycle
    /// - fetches and decodes the word at the program counter
    /// - executes it and moves the program counter
    /// - decrements the timers
    ///
    /// An unrecognized word is logged and skipped over without moving the program counter, so a
    /// malformed program will keep hitting it. A `Fault` means the instruction could only be
    /// partially applied; the machine should not be stepped again.
    pub fn step(&mut self) -> Result<Step, Fault> {
        let op = self.state.fetch()?;
        let step = match Instruction::decode(op) {
            Some(instruction) => {
                trace!(
                    "{:04X} {:?} v{:02X?} i{:04X} pc{:04X}",
                    op,
                    instruction,
                    self.state.v,
                    self.state.i,
                    self.state.pc
                );
                let flow = instruction.execute(&mut self.state, &self.keypad, &mut self.rng)?;
                self.advance(flow);
                Step::Executed(instruction)
            }
            None => {
                warn!("unrecognized instruction {:04X} at {:#06X}", op, self.state.pc);
                Step::Unrecognized(op)
            }
        };
        self.state.tick_timers();
        Ok(step)
    }

    fn advance(&mut self, flow: Flow) {
        let pc = &mut self.state.pc;
        match flow {
            Flow::Next => *pc = pc.wrapping_add(2),
            Flow::Skip => *pc = pc.wrapping_add(4),
            Flow::Goto(addr) => *pc = addr,
            Flow::Stay => {}
        }
    }

    /// The frame buffer; cells are 0 (off) or 1 (on).
    pub fn frame_buffer(&self) -> &FrameBuffer {
        &self.state.frame_buffer
    }

    /// Whether the frame buffer changed since the presenter last cleared the flag.
    pub fn needs_redraw(&self) -> bool {
        self.state.draw_flag
    }

    pub fn set_redraw(&mut self, redraw: bool) {
        self.state.draw_flag = redraw;
    }

    /// Returns the FrameBuffer if the display should be redrawn, clearing the redraw flag
    pub fn take_frame(&mut self) -> Option<&FrameBuffer> {
        if self.state.draw_flag {
            self.state.draw_flag = false;
            Some(&self.state.frame_buffer)
        } else {
            None
        }
    }

    /// Set the pressed status of key
    ///
    /// # Arguments
    /// * `key` the index of the key, 0x0..=0xF
    /// * `pressed` whether the key is now held down
    pub fn set_key(&self, key: usize, pressed: bool) -> Result<(), InvalidKey> {
        self.keypad.set(key, pressed)
    }

    /// A handle to the keypad that can be moved to another thread.
    pub fn keypad(&self) -> Arc<Keypad> {
        Arc::clone(&self.keypad)
    }

    /// Whether a tone should be playing.
    pub fn sound_active(&self) -> bool {
        self.state.sound_timer > 0
    }

    pub fn delay_timer(&self) -> u8 {
        self.state.delay_timer
    }

    pub fn sound_timer(&self) -> u8 {
        self.state.sound_timer
    }

    pub fn pc(&self) -> u16 {
        self.state.pc
    }

    pub fn index(&self) -> u16 {
        self.state.i
    }

    /// V0..=VF
    pub fn registers(&self) -> &[u8; 16] {
        &self.state.v
    }

    pub fn memory(&self) -> &[u8; MEMORY_SIZE] {
        &self.state.memory
    }
}

impl Default for Machine {
    fn default() -> Self {
        Self::new()
    }
}
