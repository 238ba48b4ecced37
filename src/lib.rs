pub use error::{Fault, InvalidKey, LoadError};
pub use instruction::Instruction;
pub use keypad::Keypad;
pub use machine::{Machine, Step};
pub use state::FrameBuffer;

pub mod constants;
mod error;
mod instruction;
mod keypad;
mod machine;
mod opcode;
mod operations;
mod state;
