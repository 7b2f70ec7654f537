//! Virtual Machine for the primitive tape machine

use crate::io::IOHandler;
use crate::state::{HaltReason, VMState};
use crate::tape::Tape;
use infinifuck_spec::{Opcode, Program};
use serde::{Deserialize, Serialize};

/// VM configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VMConfig {
    /// Maximum number of opcodes to execute; `None` runs until the program
    /// ends, which may be never
    pub max_steps: Option<u64>,

    /// Emit a trace event for every executed opcode
    pub trace: bool,
}

impl VMConfig {
    /// Unbounded configuration with a step limit
    pub fn with_max_steps(max_steps: u64) -> Self {
        VMConfig {
            max_steps: Some(max_steps),
            ..Self::default()
        }
    }
}

/// Execution result
#[derive(Debug, Clone)]
pub struct ExecutionResult {
    /// Tape after the run
    pub tape: Tape,

    /// Bytes written by `.`
    pub output: Vec<u8>,

    /// Lowest pointer index reached, starting from the initial pointer
    pub min_pointer: i64,

    /// Number of opcodes executed
    pub steps: u64,

    /// Reason for halting
    pub halt_reason: HaltReason,
}

impl ExecutionResult {
    /// Did the program run to its end?
    pub fn completed(&self) -> bool {
        self.halt_reason == HaltReason::Completed
    }

    /// Output decoded as UTF-8, lossily
    pub fn output_text(&self) -> String {
        String::from_utf8_lossy(&self.output).into_owned()
    }
}

/// Primitive tape machine
pub struct VM {
    program: Program,
    tape: Tape,
    io: IOHandler,
    state: VMState,
    config: VMConfig,
}

impl VM {
    /// Create a new VM over a tape with fully buffered input
    pub fn new(program: Program, tape: Tape, input: Vec<u8>, config: VMConfig) -> Self {
        let state = VMState::new(tape.pointer());
        Self {
            program,
            tape,
            io: IOHandler::new(input),
            state,
            config,
        }
    }

    /// Run the VM until the program ends or the step limit is hit
    pub fn run(mut self) -> ExecutionResult {
        tracing::debug!(
            opcodes = self.program.len(),
            pointer = self.tape.pointer(),
            "starting run"
        );

        while !self.state.is_halted() {
            self.step();
        }

        let halt_reason = self.state.halt_reason.unwrap_or(HaltReason::Completed);
        tracing::debug!(steps = self.state.steps, ?halt_reason, "run halted");

        ExecutionResult {
            output: self.io.take_outputs(),
            tape: self.tape,
            min_pointer: self.state.min_pointer,
            steps: self.state.steps,
            halt_reason,
        }
    }

    /// Execute one opcode, or halt if there is nothing left to execute
    pub fn step(&mut self) {
        if self.state.is_halted() {
            return;
        }

        let Some(op) = self.program.get(self.state.ip) else {
            self.state.halt(HaltReason::Completed);
            return;
        };

        if let Some(limit) = self.config.max_steps {
            if self.state.steps >= limit {
                self.state.halt(HaltReason::StepLimit);
                return;
            }
        }

        if self.config.trace {
            tracing::trace!(
                step = self.state.steps,
                ip = self.state.ip,
                op = %op,
                pointer = self.tape.pointer(),
                cell = self.tape.current(),
            );
        }

        let mut next = self.state.ip + 1;
        match op {
            Opcode::Increment => self.tape.increment(),
            Opcode::Decrement => self.tape.decrement(),
            Opcode::MoveLeft => {
                self.tape.move_left();
                self.state.observe_pointer(self.tape.pointer());
            }
            Opcode::MoveRight => self.tape.move_right(),
            Opcode::LoopOpen => {
                if self.tape.current() == 0 {
                    next = self.program.partner(self.state.ip) + 1;
                }
            }
            // The matching open re-tests the cell
            Opcode::LoopClose => next = self.program.partner(self.state.ip),
            Opcode::Input => {
                let byte = self.io.read();
                self.tape.set_current(byte);
            }
            Opcode::Output => self.io.write(self.tape.current()),
        }

        self.state.ip = next;
        self.state.steps += 1;
    }

    /// Get current state (for debugging)
    pub fn state(&self) -> &VMState {
        &self.state
    }

    /// Get tape (for debugging)
    pub fn tape(&self) -> &Tape {
        &self.tape
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_text(code: &str, tape: Tape, input: &[u8]) -> ExecutionResult {
        let program = Program::parse(code).unwrap();
        VM::new(program, tape, input.to_vec(), VMConfig::default()).run()
    }

    #[test]
    fn test_vmconfig_default() {
        let config = VMConfig::default();
        assert_eq!(config.max_steps, None);
        assert!(!config.trace);
    }

    #[test]
    fn test_empty_program_completes() {
        let result = run_text("", Tape::new(), &[]);
        assert!(result.completed());
        assert_eq!(result.steps, 0);
        assert_eq!(result.tape, Tape::new());
    }

    #[test]
    fn test_arithmetic_wraps() {
        let result = run_text("-", Tape::new(), &[]);
        assert_eq!(result.tape.current(), 255);

        let tape = Tape::from_cells(0, &[255], 0);
        let result = run_text("+", tape, &[]);
        assert_eq!(result.tape.current(), 0);
    }

    #[test]
    fn test_loop_skipped_on_zero() {
        let result = run_text("[+]>+", Tape::new(), &[]);
        assert_eq!(result.tape.get(0), 0);
        assert_eq!(result.tape.get(1), 1);
        assert_eq!(result.steps, 3);
    }

    #[test]
    fn test_clear_loop() {
        let tape = Tape::from_cells(0, &[5], 0);
        let result = run_text("[-]", tape, &[]);
        assert_eq!(result.tape.current(), 0);
        // 5 iterations of `[-]` plus the final failing test
        assert_eq!(result.steps, 5 * 3 + 1);
    }

    #[test]
    fn test_nested_loops_move_value() {
        // cell0 = 3, cell1 = 4: cell2 += cell0 * cell1
        let tape = Tape::from_cells(0, &[3, 4], 0);
        let result = run_text("[>[->+>+<<]>>[-<<+>>]<<<-]", tape, &[]);
        assert_eq!(result.tape.get(0), 0);
        assert_eq!(result.tape.get(1), 4);
        assert_eq!(result.tape.get(2), 12);
    }

    #[test]
    fn test_input_and_output() {
        let result = run_text(",.,.,.", Tape::new(), b"hi");
        assert_eq!(result.output, vec![b'h', b'i', 0]);
        assert_eq!(result.tape.current(), 0);
    }

    #[test]
    fn test_min_pointer_tracking() {
        let result = run_text("<<<>>>>", Tape::new(), &[]);
        assert_eq!(result.min_pointer, -3);
        assert_eq!(result.tape.pointer(), 1);

        let mut tape = Tape::new();
        tape.set_pointer(6);
        let result = run_text("<<", tape, &[]);
        assert_eq!(result.min_pointer, 4);
    }

    #[test]
    fn test_step_limit_halts_infinite_loop() {
        let program = Program::parse("+[]").unwrap();
        let vm = VM::new(program, Tape::new(), vec![], VMConfig::with_max_steps(100));
        let result = vm.run();
        assert_eq!(result.halt_reason, HaltReason::StepLimit);
        assert_eq!(result.steps, 100);
        assert!(!result.completed());
    }

    #[test]
    fn test_step_by_step() {
        let program = Program::parse("+>").unwrap();
        let mut vm = VM::new(program, Tape::new(), vec![], VMConfig::default());
        vm.step();
        assert_eq!(vm.tape().current(), 1);
        assert_eq!(vm.state().ip, 1);
        vm.step();
        assert_eq!(vm.tape().pointer(), 1);
        vm.step();
        assert!(vm.state().is_halted());
    }

    #[test]
    fn test_output_text() {
        let result = run_text(",.,.", Tape::new(), b"ok");
        assert_eq!(result.output_text(), "ok");
    }
}
