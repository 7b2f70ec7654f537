//! I/O handling
//!
//! Input is fully buffered before a run starts. Reading past the end yields
//! 0 instead of blocking, so end of input looks exactly like a NUL byte.

use std::collections::VecDeque;

#[derive(Debug, Clone, Default)]
pub struct IOHandler {
    inputs: VecDeque<u8>,
    outputs: Vec<u8>,
}

impl IOHandler {
    pub fn new(inputs: Vec<u8>) -> Self {
        IOHandler {
            inputs: inputs.into(),
            outputs: Vec::new(),
        }
    }

    /// Next input byte, or 0 once input is exhausted
    pub fn read(&mut self) -> u8 {
        self.inputs.pop_front().unwrap_or(0)
    }

    pub fn write(&mut self, value: u8) {
        self.outputs.push(value);
    }

    pub fn outputs(&self) -> &[u8] {
        &self.outputs
    }

    pub fn take_outputs(&mut self) -> Vec<u8> {
        std::mem::take(&mut self.outputs)
    }

    /// Bytes not yet read
    pub fn remaining(&self) -> usize {
        self.inputs.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_in_order_then_zero() {
        let mut io = IOHandler::new(b"ab".to_vec());
        assert_eq!(io.read(), b'a');
        assert_eq!(io.remaining(), 1);
        assert_eq!(io.read(), b'b');
        assert_eq!(io.read(), 0);
        assert_eq!(io.read(), 0);
    }

    #[test]
    fn test_write_and_take() {
        let mut io = IOHandler::default();
        io.write(1);
        io.write(2);
        assert_eq!(io.outputs(), &[1, 2]);
        assert_eq!(io.take_outputs(), vec![1, 2]);
        assert!(io.outputs().is_empty());
    }
}
