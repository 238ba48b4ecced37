use thiserror::Error;

use crate::constants::MAX_PROGRAM_SIZE;

/// Reasons a program image could not be placed in memory.
///
/// The machine must not be stepped after a failed load.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("program is {size} bytes but at most {max} bytes fit in program space")]
    TooLarge { size: usize, max: usize },

    #[error("unable to read program")]
    Io(#[from] std::io::Error),
}

impl LoadError {
    pub(crate) fn too_large(size: usize) -> Self {
        LoadError::TooLarge {
            size,
            max: MAX_PROGRAM_SIZE,
        }
    }
}

/// # Faults
/// Structural errors raised while executing an instruction.
///
/// Unlike an unrecognized instruction word these are fatal: the instruction that raised one has
/// only been partially applied, so the machine should not be stepped again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Fault {
    #[error("call at {pc:#06X} overflowed the call stack")]
    StackOverflow { pc: u16 },

    #[error("return at {pc:#06X} with an empty call stack")]
    StackUnderflow { pc: u16 },

    #[error("instruction at {pc:#06X} tested key {key:#04X} which is not on the keypad")]
    KeyOutOfRange { key: u8, pc: u16 },

    #[error("instruction at {pc:#06X} addressed {address:#06X} outside of memory")]
    AddressOutOfRange { address: usize, pc: u16 },
}

/// A keypad index above 0xF.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{0:#04X} is not a key on the keypad")]
pub struct InvalidKey(pub usize);
