//! VM state for the primitive tape machine

/// Machine state besides the tape
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VMState {
    /// Index of the next opcode
    pub ip: usize,

    /// Opcodes executed so far
    pub steps: u64,

    /// Lowest pointer index reached so far
    pub min_pointer: i64,

    /// Halt reason, once halted
    pub halt_reason: Option<HaltReason>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HaltReason {
    /// Instruction pointer ran off the end of the program
    Completed,
    /// Configured step limit reached before the program finished
    StepLimit,
}

impl VMState {
    pub fn new(pointer: i64) -> Self {
        VMState {
            ip: 0,
            steps: 0,
            min_pointer: pointer,
            halt_reason: None,
        }
    }

    #[inline]
    pub fn is_halted(&self) -> bool {
        self.halt_reason.is_some()
    }

    /// Halt execution
    pub fn halt(&mut self, reason: HaltReason) {
        self.halt_reason = Some(reason);
    }

    /// Record a pointer position
    #[inline]
    pub fn observe_pointer(&mut self, pointer: i64) {
        self.min_pointer = self.min_pointer.min(pointer);
    }
}
