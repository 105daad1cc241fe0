pub mod ast_interpreter;
pub mod ir_interpreter;

pub use self::ast_interpreter::AstInterpreter;
pub use self::ir_interpreter::IrInterpreter;

use std::io::{BufRead, Write};

use log::trace;

use crate::error::{Error, Result};

/// Largest value a cell may hold.
pub const CELL_MAX: i64 = 127;

/// The memory of a running program, a row of cells and a cursor into it.
///
/// The cursor always has a backing cell, the tape grows to the right the first
/// time the cursor reaches a new index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tape {
    cells: Vec<u8>,
    cursor: usize,
}

impl Default for Tape {
    fn default() -> Self {
        Self::new()
    }
}

impl Tape {
    pub fn new() -> Self {
        Self {
            cells: vec![0],
            cursor: 0,
        }
    }

    /// Value under the cursor
    pub fn cell(&self) -> u8 {
        self.cells[self.cursor]
    }

    pub fn set_cell(&mut self, value: i64) -> Result<()> {
        if !(0..=CELL_MAX).contains(&value) {
            return Err(Error::CellOutOfRange { value });
        }
        self.cells[self.cursor] = value as u8;
        Ok(())
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn set_cursor(&mut self, index: i64) -> Result<()> {
        if index < 0 {
            return Err(Error::NegativeIndex { index });
        }
        let index = index as usize;
        if index >= self.cells.len() {
            trace!("growing tape to {} cells", index + 1);
            self.cells.resize(index + 1, 0);
        }
        self.cursor = index;
        Ok(())
    }

    pub fn cells(&self) -> &[u8] {
        &self.cells
    }
}

/// A tape plus wherever `,` reads from and `.` writes to.
pub struct Runtime<'io> {
    tape: Tape,

    in_stream: Box<dyn BufRead + 'io>,
    out_stream: Box<dyn Write + 'io>,

    /// Ask for input on stderr before every read
    prompt: bool,

    /// Stop with an error after this many steps, `None` runs forever
    step_limit: Option<u64>,
    steps: u64,
}

impl<'io> Runtime<'io> {
    pub fn new(in_stream: Box<dyn BufRead + 'io>, out_stream: Box<dyn Write + 'io>) -> Self {
        Self {
            tape: Tape::new(),
            in_stream,
            out_stream,
            prompt: false,
            step_limit: None,
            steps: 0,
        }
    }

    pub fn with_prompt(mut self, prompt: bool) -> Self {
        self.prompt = prompt;
        self
    }

    pub fn with_step_limit(mut self, step_limit: Option<u64>) -> Self {
        self.step_limit = step_limit;
        self
    }

    pub fn tape(&self) -> &Tape {
        &self.tape
    }

    pub fn steps(&self) -> u64 {
        self.steps
    }

    pub fn reset(&mut self) {
        // input and output streams carry on where they were
        self.tape = Tape::new();
        self.steps = 0;
    }

    /// Count one step of execution against the limit.
    pub fn tick(&mut self) -> Result<()> {
        self.steps += 1;
        match self.step_limit {
            Some(limit) if self.steps > limit => Err(Error::StepLimitExceeded { limit }),
            _ => Ok(()),
        }
    }

    pub fn increment(&mut self) -> Result<()> {
        self.tape.set_cell(self.tape.cell() as i64 + 1)
    }

    pub fn decrease(&mut self) -> Result<()> {
        self.tape.set_cell(self.tape.cell() as i64 - 1)
    }

    pub fn move_next(&mut self) -> Result<()> {
        self.tape.set_cursor(self.tape.cursor() as i64 + 1)
    }

    pub fn move_prev(&mut self) -> Result<()> {
        self.tape.set_cursor(self.tape.cursor() as i64 - 1)
    }

    /// Read one whitespace delimited integer into the current cell
    pub fn read(&mut self) -> Result<()> {
        if self.prompt {
            self.out_stream.flush()?;
            eprint!("Enter an integer: ");
        }

        let word = self.read_word()?.ok_or(Error::InputExhausted)?;
        let value = word
            .parse::<i64>()
            .map_err(|_| Error::InvalidInput { text: word.clone() })?;
        self.tape.set_cell(value)
    }

    /// Write the current cell as a single character
    pub fn write(&mut self) -> Result<()> {
        // cells never exceed 127 so the byte is the character
        self.out_stream.write_all(&[self.tape.cell()])?;
        Ok(())
    }

    /// is the value under the cursor zero?
    pub fn value_is_zero(&self) -> bool {
        self.tape.cell() == 0
    }

    pub fn flush(&mut self) -> Result<()> {
        self.out_stream.flush()?;
        Ok(())
    }

    fn read_word(&mut self) -> Result<Option<String>> {
        let mut word = vec![];
        loop {
            let buf = self.in_stream.fill_buf()?;
            if buf.is_empty() {
                break;
            }

            let mut used = 0;
            let mut done = false;
            for &byte in buf {
                used += 1;
                if byte.is_ascii_whitespace() {
                    if !word.is_empty() {
                        done = true;
                        break;
                    }
                } else {
                    word.push(byte);
                }
            }
            self.in_stream.consume(used);

            if done {
                break;
            }
        }

        if word.is_empty() {
            Ok(None)
        } else {
            Ok(Some(String::from_utf8_lossy(&word).into_owned()))
        }
    }
}
