use rand::RngCore;

use crate::error::Fault;
use crate::keypad::Keypad;
use crate::opcode::Opcode;
use crate::operations::{self, Flow};
use crate::state::State;

/// # Instructions
/// A decoded instruction word: the operation and the operand fields it uses.
///
/// Registers are named by index (`x`, `y`), immediates keep their field names (`nn`, `nnn`, `n`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    /// `00E0`
    Clear,
    /// `00EE`
    Return,
    /// `1nnn`
    Jump { nnn: u16 },
    /// `2nnn`
    Call { nnn: u16 },
    /// `3xnn`
    SkipEqImm { x: u8, nn: u8 },
    /// `4xnn`
    SkipNeImm { x: u8, nn: u8 },
    /// `5xy_`
    SkipEqReg { x: u8, y: u8 },
    /// `6xnn`
    SetImm { x: u8, nn: u8 },
    /// `7xnn`
    AddImm { x: u8, nn: u8 },
    /// `8xy0`
    SetReg { x: u8, y: u8 },
    /// `8xy1`
    Or { x: u8, y: u8 },
    /// `8xy2`
    And { x: u8, y: u8 },
    /// `8xy3`
    Xor { x: u8, y: u8 },
    /// `8xy4`
    AddReg { x: u8, y: u8 },
    /// `8xy5`
    Sub { x: u8, y: u8 },
    /// `8x_6`
    ShiftRight { x: u8 },
    /// `8xy7`
    SubN { x: u8, y: u8 },
    /// `8x_E`
    ShiftLeft { x: u8 },
    /// `9xy_`
    SkipNeReg { x: u8, y: u8 },
    /// `Annn`
    SetIndex { nnn: u16 },
    /// `Bnnn`
    JumpOffset { nnn: u16 },
    /// `Cxnn`
    Random { x: u8, nn: u8 },
    /// `Dxyn`
    Draw { x: u8, y: u8, n: u8 },
    /// `Ex9E`
    SkipKeyPressed { x: u8 },
    /// `ExA1`
    SkipKeyReleased { x: u8 },
    /// `Fx07`
    LoadDelay { x: u8 },
    /// `Fx0A`
    WaitKey { x: u8 },
    /// `Fx15`
    SetDelay { x: u8 },
    /// `Fx18`
    SetSound { x: u8 },
    /// `Fx1E`
    AddIndex { x: u8 },
    /// `Fx29`
    LoadGlyph { x: u8 },
    /// `Fx33`
    StoreBcd { x: u8 },
    /// `Fx55`
    StoreRegisters { x: u8 },
    /// `Fx65`
    LoadRegisters { x: u8 },
}

impl Instruction {
    /// Selects the Instruction for an instruction word.
    ///
    /// Families 0x0, 0x8, 0xE and 0xF are further cased on their low nibble or byte; every other
    /// family is identified by its first nibble alone. Returns `None` for words that are not part
    /// of the instruction set.
    pub fn decode(op: u16) -> Option<Self> {
        use Instruction::*;

        let (x, y, n, nn, nnn) = (op.x(), op.y(), op.n(), op.nn(), op.nnn());
        let instruction = match op.nibbles() {
            (0x0, 0x0, 0xE, 0x0) => Clear,
            (0x0, 0x0, 0xE, 0xE) => Return,
            (0x1, ..) => Jump { nnn },
            (0x2, ..) => Call { nnn },
            (0x3, ..) => SkipEqImm { x, nn },
            (0x4, ..) => SkipNeImm { x, nn },
            (0x5, ..) => SkipEqReg { x, y },
            (0x6, ..) => SetImm { x, nn },
            (0x7, ..) => AddImm { x, nn },
            (0x8, .., 0x0) => SetReg { x, y },
            (0x8, .., 0x1) => Or { x, y },
            (0x8, .., 0x2) => And { x, y },
            (0x8, .., 0x3) => Xor { x, y },
            (0x8, .., 0x4) => AddReg { x, y },
            (0x8, .., 0x5) => Sub { x, y },
            (0x8, .., 0x6) => ShiftRight { x },
            (0x8, .., 0x7) => SubN { x, y },
            (0x8, .., 0xE) => ShiftLeft { x },
            (0x9, ..) => SkipNeReg { x, y },
            (0xA, ..) => SetIndex { nnn },
            (0xB, ..) => JumpOffset { nnn },
            (0xC, ..) => Random { x, nn },
            (0xD, ..) => Draw { x, y, n },
            (0xE, _, 0x9, 0xE) => SkipKeyPressed { x },
            (0xE, _, 0xA, 0x1) => SkipKeyReleased { x },
            (0xF, _, 0x0, 0x7) => LoadDelay { x },
            (0xF, _, 0x0, 0xA) => WaitKey { x },
            (0xF, _, 0x1, 0x5) => SetDelay { x },
            (0xF, _, 0x1, 0x8) => SetSound { x },
            (0xF, _, 0x1, 0xE) => AddIndex { x },
            (0xF, _, 0x2, 0x9) => LoadGlyph { x },
            (0xF, _, 0x3, 0x3) => StoreBcd { x },
            (0xF, _, 0x5, 0x5) => StoreRegisters { x },
            (0xF, _, 0x6, 0x5) => LoadRegisters { x },
            _ => return None,
        };
        Some(instruction)
    }

    /// Applies the instruction to `state` and reports where the program counter should go.
    ///
    /// The program counter itself is left for the caller to move.
    pub fn execute(
        self,
        state: &mut State,
        keypad: &Keypad,
        rng: &mut dyn RngCore,
    ) -> Result<Flow, Fault> {
        use Instruction::*;

        let flow = match self {
            Clear => operations::clear(state),
            Return => operations::ret(state)?,
            Jump { nnn } => operations::jump(nnn),
            Call { nnn } => operations::call(state, nnn)?,
            SkipEqImm { x, nn } => operations::skip_eq_imm(state, x, nn),
            SkipNeImm { x, nn } => operations::skip_ne_imm(state, x, nn),
            SkipEqReg { x, y } => operations::skip_eq_reg(state, x, y),
            SetImm { x, nn } => operations::set_imm(state, x, nn),
            AddImm { x, nn } => operations::add_imm(state, x, nn),
            SetReg { x, y } => operations::set_reg(state, x, y),
            Or { x, y } => operations::or(state, x, y),
            And { x, y } => operations::and(state, x, y),
            Xor { x, y } => operations::xor(state, x, y),
            AddReg { x, y } => operations::add_reg(state, x, y),
            Sub { x, y } => operations::sub(state, x, y),
            ShiftRight { x } => operations::shift_right(state, x),
            SubN { x, y } => operations::sub_n(state, x, y),
            ShiftLeft { x } => operations::shift_left(state, x),
            SkipNeReg { x, y } => operations::skip_ne_reg(state, x, y),
            SetIndex { nnn } => operations::set_index(state, nnn),
            JumpOffset { nnn } => operations::jump_offset(state, nnn),
            Random { x, nn } => operations::random(state, rng, x, nn),
            Draw { x, y, n } => operations::draw(state, x, y, n)?,
            SkipKeyPressed { x } => operations::skip_key_pressed(state, keypad, x)?,
            SkipKeyReleased { x } => operations::skip_key_released(state, keypad, x)?,
            LoadDelay { x } => operations::load_delay(state, x),
            WaitKey { x } => operations::wait_key(state, keypad, x),
            SetDelay { x } => operations::set_delay(state, x),
            SetSound { x } => operations::set_sound(state, x),
            AddIndex { x } => operations::add_index(state, x),
            LoadGlyph { x } => operations::load_glyph(state, x),
            StoreBcd { x } => operations::store_bcd(state, x)?,
            StoreRegisters { x } => operations::store_registers(state, x)?,
            LoadRegisters { x } => operations::load_registers(state, x)?,
        };
        Ok(flow)
    }
}

#[cfg(test)]
mod test_instruction {
    use super::*;
    use crate::constants::{DISPLAY_SIZE, DISPLAY_WIDTH};
    use crate::state::FrameBuffer;
    use rand::rngs::mock::StepRng;

    /// Decodes and executes `op`, then moves the pc the way the machine would
    fn run(op: u16, state: &mut State, keypad: &Keypad) {
        let mut rng = StepRng::new(0xAB, 0);
        let instruction = Instruction::decode(op).expect("op should decode");
        match instruction.execute(state, keypad, &mut rng).unwrap() {
            Flow::Next => state.pc += 0x2,
            Flow::Skip => state.pc += 0x4,
            Flow::Goto(addr) => state.pc = addr,
            Flow::Stay => {}
        }
    }

    fn exec(op: u16, state: &mut State) {
        run(op, state, &Keypad::new());
    }

    #[test]
    fn test_decodes_operand_fields() {
        assert_eq!(
            Instruction::decode(0xD12F),
            Some(Instruction::Draw {
                x: 0x1,
                y: 0x2,
                n: 0xF
            })
        );
        assert_eq!(
            Instruction::decode(0x7A42),
            Some(Instruction::AddImm { x: 0xA, nn: 0x42 })
        );
        assert_eq!(
            Instruction::decode(0x2ABC),
            Some(Instruction::Call { nnn: 0xABC })
        );
    }

    #[test]
    fn test_decodes_every_family_with_a_sub_operation() {
        assert_eq!(Instruction::decode(0x00E0), Some(Instruction::Clear));
        assert_eq!(Instruction::decode(0x00EE), Some(Instruction::Return));
        assert_eq!(
            Instruction::decode(0x8AB7),
            Some(Instruction::SubN { x: 0xA, y: 0xB })
        );
        assert_eq!(
            Instruction::decode(0xE3A1),
            Some(Instruction::SkipKeyReleased { x: 0x3 })
        );
        assert_eq!(
            Instruction::decode(0xF40A),
            Some(Instruction::WaitKey { x: 0x4 })
        );
    }

    #[test]
    fn test_rejects_unknown_words() {
        for op in [0x0000, 0x0123, 0x00E1, 0x8128, 0x812F, 0xE19F, 0xF100, 0xF1FF] {
            assert_eq!(Instruction::decode(op), None, "{:04X}", op);
        }
    }

    #[test]
    fn test_skips_ignore_their_low_nibble() {
        assert_eq!(
            Instruction::decode(0x512F),
            Some(Instruction::SkipEqReg { x: 0x1, y: 0x2 })
        );
        assert_eq!(
            Instruction::decode(0x9127),
            Some(Instruction::SkipNeReg { x: 0x1, y: 0x2 })
        );
    }

    #[test]
    fn test_00e0_cls() {
        let mut state = State::new();
        state.frame_buffer[0] = 1;
        exec(0x00E0, &mut state);
        assert_eq!(state.frame_buffer[0], 0);
        assert!(state.draw_flag);
        assert_eq!(state.pc, 0x0202);
    }

    #[test]
    fn test_00ee_ret() {
        let mut state = State::new();
        state.sp = 0x1;
        state.stack[0] = 0x0ABC;
        exec(0x00EE, &mut state);
        assert_eq!(state.sp, 0x0);
        // Add 2 to the popped address so the call isn't executed again
        assert_eq!(state.pc, 0x0ABC + 0x2);
    }

    #[test]
    fn test_1nnn_jp() {
        let mut state = State::new();
        exec(0x1ABC, &mut state);
        assert_eq!(state.pc, 0x0ABC);
    }

    #[test]
    fn test_2nnn_call() {
        let mut state = State::new();
        state.pc = 0x0ABC;
        exec(0x2123, &mut state);
        assert_eq!(state.sp, 0x1);
        assert_eq!(state.stack[0], 0x0ABC);
        assert_eq!(state.pc, 0x0123);
    }

    #[test]
    fn test_call_then_ret_resumes_after_call() {
        let mut state = State::new();
        exec(0x2400, &mut state);
        exec(0x00EE, &mut state);
        assert_eq!(state.pc, 0x0202);
        assert_eq!(state.sp, 0x0);
    }

    #[test]
    fn test_3xnn_se_skips() {
        let mut state = State::new();
        state.v[0x1] = 0x11;
        exec(0x3111, &mut state);
        assert_eq!(state.pc, 0x0204);
    }

    #[test]
    fn test_3xnn_se_doesntskip() {
        let mut state = State::new();
        exec(0x3111, &mut state);
        assert_eq!(state.pc, 0x0202);
    }

    #[test]
    fn test_4xnn_sne_skips() {
        let mut state = State::new();
        exec(0x4111, &mut state);
        assert_eq!(state.pc, 0x0204);
    }

    #[test]
    fn test_4xnn_sne_doesntskip() {
        let mut state = State::new();
        state.v[0x1] = 0x11;
        exec(0x4111, &mut state);
        assert_eq!(state.pc, 0x0202);
    }

    #[test]
    fn test_5xy0_se_skips() {
        let mut state = State::new();
        state.v[0x1] = 0x11;
        state.v[0x2] = 0x11;
        exec(0x5120, &mut state);
        assert_eq!(state.pc, 0x0204);
    }

    #[test]
    fn test_5xy0_se_doesntskip() {
        let mut state = State::new();
        state.v[0x1] = 0x11;
        exec(0x5120, &mut state);
        assert_eq!(state.pc, 0x0202);
    }

    #[test]
    fn test_6xnn_ld() {
        let mut state = State::new();
        exec(0x6122, &mut state);
        assert_eq!(state.v[0x1], 0x22);
    }

    #[test]
    fn test_7xnn_add_wraps_without_flag() {
        let mut state = State::new();
        state.v[0x1] = 0xFF;
        state.v[0xF] = 0x7;
        exec(0x7102, &mut state);
        assert_eq!(state.v[0x1], 0x01);
        assert_eq!(state.v[0xF], 0x7);
    }

    #[test]
    fn test_8xy0_ld() {
        let mut state = State::new();
        state.v[0x2] = 0x1;
        exec(0x8120, &mut state);
        assert_eq!(state.v[0x1], 0x1);
    }

    #[test]
    fn test_8xy1_or_keeps_flag() {
        let mut state = State::new();
        state.v[0x1] = 0x6;
        state.v[0x2] = 0x3;
        state.v[0xF] = 0x1;
        exec(0x8121, &mut state);
        assert_eq!(state.v[0x1], 0x7);
        assert_eq!(state.v[0xF], 0x1);
    }

    #[test]
    fn test_8xy2_and_resets_flag() {
        let mut state = State::new();
        state.v[0x1] = 0x6;
        state.v[0x2] = 0x3;
        state.v[0xF] = 0x1;
        exec(0x8122, &mut state);
        assert_eq!(state.v[0x1], 0x2);
        assert_eq!(state.v[0xF], 0x0);
    }

    #[test]
    fn test_8xy3_xor_resets_flag() {
        let mut state = State::new();
        state.v[0x1] = 0x6;
        state.v[0x2] = 0x3;
        state.v[0xF] = 0x1;
        exec(0x8123, &mut state);
        assert_eq!(state.v[0x1], 0x5);
        assert_eq!(state.v[0xF], 0x0);
    }

    #[test]
    fn test_8xy4_add_nocarry() {
        let mut state = State::new();
        state.v[0x1] = 10;
        state.v[0x2] = 10;
        exec(0x8124, &mut state);
        assert_eq!(state.v[0x1], 20);
        assert_eq!(state.v[0xF], 0x0);
    }

    #[test]
    fn test_8xy4_add_carry() {
        let mut state = State::new();
        state.v[0x1] = 250;
        state.v[0x2] = 10;
        exec(0x8124, &mut state);
        assert_eq!(state.v[0x1], 4);
        assert_eq!(state.v[0xF], 0x1);
    }

    #[test]
    fn test_8xy5_sub_noborrow() {
        let mut state = State::new();
        state.v[0x1] = 10;
        state.v[0x2] = 5;
        exec(0x8125, &mut state);
        assert_eq!(state.v[0x1], 5);
        assert_eq!(state.v[0xF], 0x1);
    }

    #[test]
    fn test_8xy5_sub_borrow() {
        let mut state = State::new();
        state.v[0x1] = 5;
        state.v[0x2] = 10;
        exec(0x8125, &mut state);
        assert_eq!(state.v[0x1], 251);
        assert_eq!(state.v[0xF], 0x0);
    }

    #[test]
    fn test_8xy5_sub_equal_is_noborrow() {
        let mut state = State::new();
        state.v[0x1] = 0x11;
        state.v[0x2] = 0x11;
        exec(0x8125, &mut state);
        assert_eq!(state.v[0x1], 0x0);
        assert_eq!(state.v[0xF], 0x1);
    }

    #[test]
    fn test_8xy6_shr_lsb() {
        let mut state = State::new();
        state.v[0x1] = 0x5;
        exec(0x8106, &mut state);
        assert_eq!(state.v[0x1], 0x2);
        assert_eq!(state.v[0xF], 0x1);
    }

    #[test]
    fn test_8xy6_shr_nolsb() {
        let mut state = State::new();
        state.v[0x1] = 0x4;
        exec(0x8106, &mut state);
        assert_eq!(state.v[0x1], 0x2);
        assert_eq!(state.v[0xF], 0x0);
    }

    #[test]
    fn test_8xy7_subn_noborrow() {
        let mut state = State::new();
        state.v[0x1] = 0x11;
        state.v[0x2] = 0x33;
        exec(0x8127, &mut state);
        assert_eq!(state.v[0x1], 0x22);
        assert_eq!(state.v[0xF], 0x1);
    }

    #[test]
    fn test_8xy7_subn_borrow() {
        let mut state = State::new();
        state.v[0x1] = 0x12;
        state.v[0x2] = 0x11;
        exec(0x8127, &mut state);
        assert_eq!(state.v[0x1], 0xFF);
        assert_eq!(state.v[0xF], 0x0);
    }

    #[test]
    fn test_8xye_shl_msb() {
        let mut state = State::new();
        state.v[0x1] = 0xFF;
        exec(0x810E, &mut state);
        // 0xFF * 2 = 0x01FE
        assert_eq!(state.v[0x1], 0xFE);
        assert_eq!(state.v[0xF], 0x1);
    }

    #[test]
    fn test_8xye_shl_nomsb() {
        let mut state = State::new();
        state.v[0x1] = 0x4;
        exec(0x810E, &mut state);
        assert_eq!(state.v[0x1], 0x8);
        assert_eq!(state.v[0xF], 0x0);
    }

    #[test]
    fn test_9xy0_sne_skips() {
        let mut state = State::new();
        state.v[0x1] = 0x11;
        exec(0x9120, &mut state);
        assert_eq!(state.pc, 0x0204);
    }

    #[test]
    fn test_9xy0_sne_doesntskip() {
        let mut state = State::new();
        state.v[0x1] = 0x11;
        state.v[0x2] = 0x11;
        exec(0x9120, &mut state);
        assert_eq!(state.pc, 0x0202);
    }

    #[test]
    fn test_annn_ld() {
        let mut state = State::new();
        exec(0xAABC, &mut state);
        assert_eq!(state.i, 0xABC);
    }

    #[test]
    fn test_bnnn_jp() {
        let mut state = State::new();
        state.v[0x0] = 0x2;
        exec(0xBABC, &mut state);
        assert_eq!(state.pc, 0xABE);
    }

    #[test]
    fn test_cxnn_rnd_masks_random_byte() {
        let mut state = State::new();
        // The mock rng always yields 0xAB
        exec(0xC10F, &mut state);
        assert_eq!(state.v[0x1], 0x0B);
    }

    #[test]
    fn test_dxyn_drw_draws() {
        let mut state = State::new();
        state.v[0x0] = 0x1;
        // Draw the 0x0 sprite with a 1x 1y offset
        exec(0xD005, &mut state);
        let glyph: [[u8; 4]; 5] = [
            [1, 1, 1, 1],
            [1, 0, 0, 1],
            [1, 0, 0, 1],
            [1, 0, 0, 1],
            [1, 1, 1, 1],
        ];
        let mut expected: FrameBuffer = [0; DISPLAY_SIZE];
        for (row, pixels) in glyph.iter().enumerate() {
            let start = 1 + (row + 1) * DISPLAY_WIDTH;
            expected[start..start + 4].copy_from_slice(pixels);
        }
        assert!(state.frame_buffer[..] == expected[..]);
        assert!(state.draw_flag);
        assert_eq!(state.v[0xF], 0x0);
    }

    #[test]
    fn test_dxyn_drw_collides() {
        let mut state = State::new();
        state.frame_buffer[0] = 1;
        exec(0xD001, &mut state);
        assert_eq!(state.v[0xF], 0x1)
    }

    #[test]
    fn test_dxyn_drw_xors() {
        let mut state = State::new();
        // 0 1 0 1 -> Set
        state.frame_buffer[0..4].copy_from_slice(&[0, 1, 0, 1]);
        // 1 1 1 1 -> Draw xor
        exec(0xD001, &mut state);
        assert_eq!(state.frame_buffer[0..4], [1, 0, 1, 0])
    }

    #[test]
    fn test_ex9e_skp_skips() {
        let mut state = State::new();
        let keypad = Keypad::new();
        keypad.set(0xE, true).unwrap();
        state.v[0x1] = 0xE;
        run(0xE19E, &mut state, &keypad);
        assert_eq!(state.pc, 0x0204);
    }

    #[test]
    fn test_ex9e_skp_doesntskip() {
        let mut state = State::new();
        exec(0xE19E, &mut state);
        assert_eq!(state.pc, 0x0202);
    }

    #[test]
    fn test_exa1_sknp_skips() {
        let mut state = State::new();
        exec(0xE1A1, &mut state);
        assert_eq!(state.pc, 0x0204);
    }

    #[test]
    fn test_exa1_sknp_doesntskip() {
        let mut state = State::new();
        let keypad = Keypad::new();
        keypad.set(0xE, true).unwrap();
        state.v[0x1] = 0xE;
        run(0xE1A1, &mut state, &keypad);
        assert_eq!(state.pc, 0x0202);
    }

    #[test]
    fn test_fx07_ld() {
        let mut state = State::new();
        state.delay_timer = 0xF;
        exec(0xF107, &mut state);
        assert_eq!(state.v[0x1], 0xF);
    }

    #[test]
    fn test_fx0a_ld_waits_without_key() {
        let mut state = State::new();
        exec(0xF10A, &mut state);
        assert_eq!(state.pc, 0x0200);
    }

    #[test]
    fn test_fx0a_ld_stores_lowest_key() {
        let mut state = State::new();
        let keypad = Keypad::new();
        keypad.set(0x9, true).unwrap();
        keypad.set(0x4, true).unwrap();
        run(0xF10A, &mut state, &keypad);
        assert_eq!(state.v[0x1], 0x4);
        assert_eq!(state.pc, 0x0202);
    }

    #[test]
    fn test_fx15_ld() {
        let mut state = State::new();
        state.v[0x1] = 0xF;
        exec(0xF115, &mut state);
        assert_eq!(state.delay_timer, 0xF);
    }

    #[test]
    fn test_fx18_ld() {
        let mut state = State::new();
        state.v[0x1] = 0xF;
        exec(0xF118, &mut state);
        assert_eq!(state.sound_timer, 0xF);
    }

    #[test]
    fn test_fx1e_add() {
        let mut state = State::new();
        state.i = 0x1;
        state.v[0x1] = 0x1;
        exec(0xF11E, &mut state);
        assert_eq!(state.i, 0x2);
        assert_eq!(state.v[0xF], 0x0);
    }

    #[test]
    fn test_fx1e_add_past_memory_sets_flag() {
        let mut state = State::new();
        state.i = 0xFFF;
        state.v[0x1] = 0x1;
        exec(0xF11E, &mut state);
        assert_eq!(state.i, 0x1000);
        assert_eq!(state.v[0xF], 0x1);
    }

    #[test]
    fn test_fx1e_add_wraps_at_16_bits() {
        let mut state = State::new();
        state.i = 0xFFFF;
        state.v[0x1] = 0x2;
        exec(0xF11E, &mut state);
        assert_eq!(state.i, 0x1);
        assert_eq!(state.v[0xF], 0x1);
    }

    #[test]
    fn test_ff1e_adds_vf_after_the_flag_is_written() {
        let mut state = State::new();
        state.i = 0xFFF;
        state.v[0xF] = 0x10;
        exec(0xFF1E, &mut state);
        // 0xFFF + 0x10 passes 0xFFF so VF = 1, then I += VF
        assert_eq!(state.v[0xF], 0x1);
        assert_eq!(state.i, 0x1000);
    }

    #[test]
    fn test_fx29_ld() {
        let mut state = State::new();
        state.v[0x1] = 0x2;
        exec(0xF129, &mut state);
        assert_eq!(state.i, 0xA);
    }

    #[test]
    fn test_fx33_ld() {
        let mut state = State::new();
        // 0x7B -> 123
        state.v[0x1] = 0x7B;
        state.i = 0x300;
        exec(0xF133, &mut state);
        assert_eq!(state.memory[0x300..0x303], [0x1, 0x2, 0x3]);
    }

    #[test]
    fn test_fx55_ld() {
        let mut state = State::new();
        state.i = 0x300;
        state.v[0x0..0x5].copy_from_slice(&[0x1, 0x2, 0x3, 0x4, 0x5]);
        exec(0xF455, &mut state);
        assert_eq!(state.memory[0x300..0x305], [0x1, 0x2, 0x3, 0x4, 0x5]);
        assert_eq!(state.memory[0x305], 0x0);
        assert_eq!(state.i, 0x305);
    }

    #[test]
    fn test_fx65_ld() {
        let mut state = State::new();
        state.i = 0x300;
        state.memory[0x300..0x305].copy_from_slice(&[0x1, 0x2, 0x3, 0x4, 0x5]);
        exec(0xF465, &mut state);
        assert_eq!(state.v[0x0..0x5], [0x1, 0x2, 0x3, 0x4, 0x5]);
        assert_eq!(state.v[0x5], 0x0);
        assert_eq!(state.i, 0x305);
    }
}
