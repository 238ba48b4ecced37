/// # Opcodes
///
/// Instruction words are 16 bits, read as four nibbles `[f x y n]`. The first nibble picks the
/// family; the rest are operands whose meaning depends on it:
/// - `x`, `y` name registers
/// - `n` is a sprite height, `nn` a byte immediate, `nnn` an address
///
/// Families 0x0, 0x8, 0xE and 0xF also use `n` or `nn` to select the operation.
pub trait Opcode {
    /// All four nibbles, most significant first.
    fn nibbles(&self) -> (u8, u8, u8, u8);

    fn x(&self) -> u8;

    fn y(&self) -> u8;

    fn n(&self) -> u8;

    fn nn(&self) -> u8;

    fn nnn(&self) -> u16;
}

/// The nibble `index` places from the least significant end.
fn nibble(word: u16, index: u16) -> u8 {
    (word >> (4 * index)) as u8 & 0xF
}

impl Opcode for u16 {
    fn nibbles(&self) -> (u8, u8, u8, u8) {
        (nibble(*self, 3), self.x(), self.y(), self.n())
    }

    fn x(&self) -> u8 {
        nibble(*self, 2)
    }

    fn y(&self) -> u8 {
        nibble(*self, 1)
    }

    fn n(&self) -> u8 {
        nibble(*self, 0)
    }

    fn nn(&self) -> u8 {
        self.to_be_bytes()[1]
    }

    fn nnn(&self) -> u16 {
        self & 0x0FFF
    }
}
