use rand::{Rng, RngCore};

use crate::constants::{DISPLAY_SIZE, DISPLAY_WIDTH, GLYPH_HEIGHT};
use crate::error::Fault;
use crate::keypad::Keypad;
use crate::state::State;

/// Where the program counter goes once an operation has been applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// pc += 2
    Next,
    /// pc += 4
    Skip,
    /// pc = addr
    Goto(u16),
    /// pc is left alone so the same instruction runs again next cycle
    Stay,
}

impl Flow {
    fn skip_if(condition: bool) -> Self {
        if condition {
            Flow::Skip
        } else {
            Flow::Next
        }
    }
}

fn key_state(state: &State, keypad: &Keypad, x: u8) -> Result<bool, Fault> {
    let key = state.vx(x);
    keypad
        .is_pressed(usize::from(key))
        .ok_or(Fault::KeyOutOfRange { key, pc: state.pc })
}

/// clear
pub fn clear(state: &mut State) -> Flow {
    state.frame_buffer = [0; DISPLAY_SIZE];
    state.draw_flag = true;
    Flow::Next
}

/// PC = STACK.pop() + 2
pub fn ret(state: &mut State) -> Result<Flow, Fault> {
    let caller = state.pop()?;
    Ok(Flow::Goto(caller.wrapping_add(2)))
}

/// PC = addr
pub fn jump(nnn: u16) -> Flow {
    Flow::Goto(nnn)
}

/// STACK.push(PC); PC = addr
pub fn call(state: &mut State, nnn: u16) -> Result<Flow, Fault> {
    state.push(state.pc)?;
    Ok(Flow::Goto(nnn))
}

/// if Vx == nn then pc += 2
pub fn skip_eq_imm(state: &State, x: u8, nn: u8) -> Flow {
    Flow::skip_if(state.vx(x) == nn)
}

/// if Vx != nn then pc += 2
pub fn skip_ne_imm(state: &State, x: u8, nn: u8) -> Flow {
    Flow::skip_if(state.vx(x) != nn)
}

/// if Vx == Vy then pc += 2
pub fn skip_eq_reg(state: &State, x: u8, y: u8) -> Flow {
    Flow::skip_if(state.vx(x) == state.vx(y))
}

/// if Vx != Vy then pc += 2
pub fn skip_ne_reg(state: &State, x: u8, y: u8) -> Flow {
    Flow::skip_if(state.vx(x) != state.vx(y))
}

/// Vx = nn
pub fn set_imm(state: &mut State, x: u8, nn: u8) -> Flow {
    state.v[usize::from(x)] = nn;
    Flow::Next
}

/// Vx += nn
/// Overflow is dropped and VF is untouched
pub fn add_imm(state: &mut State, x: u8, nn: u8) -> Flow {
    state.v[usize::from(x)] = state.vx(x).wrapping_add(nn);
    Flow::Next
}

/// Vx = Vy
pub fn set_reg(state: &mut State, x: u8, y: u8) -> Flow {
    state.v[usize::from(x)] = state.vx(y);
    Flow::Next
}

/// Vx |= Vy
pub fn or(state: &mut State, x: u8, y: u8) -> Flow {
    state.v[usize::from(x)] |= state.vx(y);
    Flow::Next
}

/// Vx &= Vy; VF = 0
pub fn and(state: &mut State, x: u8, y: u8) -> Flow {
    state.v[usize::from(x)] &= state.vx(y);
    state.set_vf(false);
    Flow::Next
}

/// Vx ^= Vy; VF = 0
pub fn xor(state: &mut State, x: u8, y: u8) -> Flow {
    state.v[usize::from(x)] ^= state.vx(y);
    state.set_vf(false);
    Flow::Next
}

/// VF = carry; Vx += Vy
pub fn add_reg(state: &mut State, x: u8, y: u8) -> Flow {
    state.set_vf(u16::from(state.vx(x)) + u16::from(state.vx(y)) > 0xFF);
    state.v[usize::from(x)] = state.vx(x).wrapping_add(state.vx(y));
    Flow::Next
}

/// VF = !borrow; Vx -= Vy
pub fn sub(state: &mut State, x: u8, y: u8) -> Flow {
    state.set_vf(state.vx(x) >= state.vx(y));
    state.v[usize::from(x)] = state.vx(x).wrapping_sub(state.vx(y));
    Flow::Next
}

/// VF = lsb; Vx >>= 1
pub fn shift_right(state: &mut State, x: u8) -> Flow {
    state.v[0xF] = state.vx(x) & 0x1;
    state.v[usize::from(x)] = state.vx(x) >> 1;
    Flow::Next
}

/// VF = !borrow; Vx = Vy - Vx
pub fn sub_n(state: &mut State, x: u8, y: u8) -> Flow {
    state.set_vf(state.vx(x) <= state.vx(y));
    state.v[usize::from(x)] = state.vx(y).wrapping_sub(state.vx(x));
    Flow::Next
}

/// VF = msb; Vx <<= 1
pub fn shift_left(state: &mut State, x: u8) -> Flow {
    state.v[0xF] = state.vx(x) >> 7;
    state.v[usize::from(x)] = state.vx(x) << 1;
    Flow::Next
}

/// I = addr
pub fn set_index(state: &mut State, nnn: u16) -> Flow {
    state.i = nnn;
    Flow::Next
}

/// PC = V0 + addr
pub fn jump_offset(state: &State, nnn: u16) -> Flow {
    Flow::Goto(nnn + u16::from(state.v[0x0]))
}

/// Vx = rand_byte & nn
pub fn random(state: &mut State, rng: &mut dyn RngCore, x: u8, nn: u8) -> Flow {
    let byte: u8 = rng.gen();
    state.v[usize::from(x)] = byte & nn;
    Flow::Next
}

/// draw_sprite(x=Vx y=Vy size=n)
/// XORs the sprite in memory I..I+n onto the FrameBuffer at Vx, Vy.
/// Positions past the end of a row continue on the next row, and positions past the end of the
/// FrameBuffer wrap to its start.
/// Sets VF as soon as a pixel is erased
///
/// Vx and Vy are read for every pixel, so when either is VF the pixels after the first collision
/// move with the flag.
pub fn draw(state: &mut State, x: u8, y: u8, n: u8) -> Result<Flow, Fault> {
    state.set_vf(false);

    let mut sprite = [0u8; 16];
    let height = usize::from(n);
    sprite[..height].copy_from_slice(state.read(usize::from(state.i), height)?);

    for (row, byte) in sprite[..height].iter().enumerate() {
        for col in 0..8 {
            if byte & (0x80 >> col) == 0 {
                continue;
            }
            let px = usize::from(state.vx(x)) + col;
            let py = usize::from(state.vx(y)) + row;
            let index = (px + py * DISPLAY_WIDTH) % DISPLAY_SIZE;
            if state.frame_buffer[index] == 1 {
                state.set_vf(true);
            }
            state.frame_buffer[index] ^= 1;
        }
    }

    state.draw_flag = true;
    Ok(Flow::Next)
}

/// if Vx.pressed then pc += 2
pub fn skip_key_pressed(state: &State, keypad: &Keypad, x: u8) -> Result<Flow, Fault> {
    Ok(Flow::skip_if(key_state(state, keypad, x)?))
}

/// if !Vx.pressed then pc += 2
pub fn skip_key_released(state: &State, keypad: &Keypad, x: u8) -> Result<Flow, Fault> {
    Ok(Flow::skip_if(!key_state(state, keypad, x)?))
}

/// Vx = DT
pub fn load_delay(state: &mut State, x: u8) -> Flow {
    state.v[usize::from(x)] = state.delay_timer;
    Flow::Next
}

/// Vx = lowest pressed key, or run again next cycle if none are pressed
pub fn wait_key(state: &mut State, keypad: &Keypad, x: u8) -> Flow {
    match keypad.first_pressed() {
        Some(key) => {
            state.v[usize::from(x)] = key;
            Flow::Next
        }
        None => Flow::Stay,
    }
}

/// DT = Vx
pub fn set_delay(state: &mut State, x: u8) -> Flow {
    state.delay_timer = state.vx(x);
    Flow::Next
}

/// ST = Vx
pub fn set_sound(state: &mut State, x: u8) -> Flow {
    state.sound_timer = state.vx(x);
    Flow::Next
}

/// VF = I + Vx > 0xFFF; I += Vx
pub fn add_index(state: &mut State, x: u8) -> Flow {
    state.set_vf(u32::from(state.i) + u32::from(state.vx(x)) > 0xFFF);
    state.i = state.i.wrapping_add(u16::from(state.vx(x)));
    Flow::Next
}

/// I = Vx * 5
/// Set I to the memory address of the sprite for Vx
/// See constants::SPRITE_SHEET for more details
pub fn load_glyph(state: &mut State, x: u8) -> Flow {
    state.i = u16::from(state.vx(x)) * GLYPH_HEIGHT;
    Flow::Next
}

/// mem[I..I+3] = bcd(Vx)
pub fn store_bcd(state: &mut State, x: u8) -> Result<Flow, Fault> {
    let vx = state.vx(x);
    let bcd = [vx / 100, vx / 10 % 10, vx % 10];
    state.write(usize::from(state.i), &bcd)?;
    Ok(Flow::Next)
}

/// mem[I..=I+x] = V0..=Vx; I += x + 1
pub fn store_registers(state: &mut State, x: u8) -> Result<Flow, Fault> {
    let count = usize::from(x) + 1;
    let registers = state.v;
    state.write(usize::from(state.i), &registers[..count])?;
    state.i = state.i.wrapping_add(u16::from(x) + 1);
    Ok(Flow::Next)
}

/// V0..=Vx = mem[I..=I+x]; I += x + 1
pub fn load_registers(state: &mut State, x: u8) -> Result<Flow, Fault> {
    let count = usize::from(x) + 1;
    let mut loaded = [0u8; 16];
    loaded[..count].copy_from_slice(state.read(usize::from(state.i), count)?);
    state.v[..count].copy_from_slice(&loaded[..count]);
    state.i = state.i.wrapping_add(u16::from(x) + 1);
    Ok(Flow::Next)
}
