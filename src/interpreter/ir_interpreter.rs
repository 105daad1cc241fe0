use crate::error::Result;
use crate::ir::Ir;

use super::Runtime;

/// Runs lowered IR, recursing into the body of every `Jump`.
pub struct IrInterpreter {}

impl IrInterpreter {
    pub fn new() -> Self {
        Self {}
    }

    pub fn run(&mut self, runtime: &mut Runtime, instructions: &[Ir]) -> Result<()> {
        // pc only ever indexes this list, a jump body gets its own pc
        let mut pc = 0;
        while pc < instructions.len() {
            runtime.tick()?;
            match &instructions[pc] {
                Ir::Add => runtime.increment()?,
                Ir::Sub => runtime.decrease()?,
                Ir::Next => runtime.move_next()?,
                Ir::Prev => runtime.move_prev()?,
                Ir::Input => runtime.read()?,
                Ir::Output => runtime.write()?,
                Ir::Jump(body) => loop {
                    runtime.tick()?;
                    if runtime.value_is_zero() {
                        break;
                    }
                    self.run(runtime, body)?;
                },
            }
            pc += 1;
        }
        Ok(())
    }
}

impl Default for IrInterpreter {
    fn default() -> Self {
        Self::new()
    }
}
