use std::ops::Range;

use crate::constants::{DISPLAY_SIZE, MEMORY_SIZE, PROGRAM_START, SPRITE_SHEET, STACK_SIZE};
use crate::error::Fault;

/// # State
/// The architectural state of the machine.
///
/// ## CPU
/// Registers
/// - (v) 16 primary 8-bit registers (V0..VF)
///     - the first 15 (V0..VE) are general purpose registers
///     - the 16th (VF) is also written as a flag by arithmetic, shifts, AND/XOR, I += Vx and draw
/// - (i) a 16-bit index register used as a memory pointer
///
/// Counter
/// - (pc) a 16-bit program counter
///
/// Pointer
/// - (sp) the number of return addresses on the stack, 0..=16
///
/// Timers
/// - 2 8-bit timers (delay & sound), decremented once per cycle while nonzero
///
/// ## Memory
/// - 16 return addresses of stack
/// - 4096 bytes of addressable memory, with the sprite sheet in 0x000..0x050
/// - a flat 64x32 frame buffer of 0/1 cells indexed `x + 64 * y`
#[derive(Clone)]
pub struct State {
    pub v: [u8; 16],
    pub i: u16,
    pub pc: u16,
    pub sp: u8,
    pub delay_timer: u8,
    pub sound_timer: u8,
    pub stack: [u16; STACK_SIZE],
    pub memory: [u8; MEMORY_SIZE],
    pub frame_buffer: FrameBuffer,
    pub draw_flag: bool,
}

/// The FrameBuffer is indexed as `x + DISPLAY_WIDTH * y`
pub type FrameBuffer = [u8; DISPLAY_SIZE];

impl State {
    pub fn new() -> Self {
        let mut memory = [0; MEMORY_SIZE];
        memory[0..SPRITE_SHEET.len()].copy_from_slice(&SPRITE_SHEET);

        State {
            v: [0; 16],
            i: 0,
            pc: PROGRAM_START,
            sp: 0,
            delay_timer: 0,
            sound_timer: 0,
            stack: [0; STACK_SIZE],
            memory,
            frame_buffer: [0; DISPLAY_SIZE],
            draw_flag: false,
        }
    }

    /// Vx
    pub fn vx(&self, x: u8) -> u8 {
        self.v[usize::from(x)]
    }

    /// The carry/borrow/collision flag.
    pub fn set_vf(&mut self, flag: bool) {
        self.v[0xF] = u8::from(flag);
    }

    /// Memory addresses `start..start + len`, or a fault naming the first one outside memory.
    /// An empty span touches no memory and never faults.
    fn span(&self, start: usize, len: usize) -> Result<Range<usize>, Fault> {
        if len == 0 {
            return Ok(0..0);
        }
        let end = start + len;
        if end > MEMORY_SIZE {
            return Err(Fault::AddressOutOfRange {
                address: start.max(MEMORY_SIZE),
                pc: self.pc,
            });
        }
        Ok(start..end)
    }

    pub fn read(&self, start: usize, len: usize) -> Result<&[u8], Fault> {
        let span = self.span(start, len)?;
        Ok(&self.memory[span])
    }

    pub fn write(&mut self, start: usize, bytes: &[u8]) -> Result<(), Fault> {
        let span = self.span(start, bytes.len())?;
        self.memory[span].copy_from_slice(bytes);
        Ok(())
    }

    /// The instruction word at the program counter.
    /// Memory is stored as bytes, but opcodes are 16 bits so we combine two subsequent bytes.
    pub fn fetch(&self) -> Result<u16, Fault> {
        let word = self.read(usize::from(self.pc), 2)?;
        Ok(u16::from(word[0]) << 8 | u16::from(word[1]))
    }

    pub fn push(&mut self, address: u16) -> Result<(), Fault> {
        let slot = self
            .stack
            .get_mut(usize::from(self.sp))
            .ok_or(Fault::StackOverflow { pc: self.pc })?;
        *slot = address;
        self.sp += 1;
        Ok(())
    }

    pub fn pop(&mut self) -> Result<u16, Fault> {
        let sp = self
            .sp
            .checked_sub(1)
            .ok_or(Fault::StackUnderflow { pc: self.pc })?;
        self.sp = sp;
        Ok(self.stack[usize::from(sp)])
    }

    /// Decrements both timers toward 0.
    pub fn tick_timers(&mut self) {
        self.delay_timer = self.delay_timer.saturating_sub(1);
        self.sound_timer = self.sound_timer.saturating_sub(1);
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}
