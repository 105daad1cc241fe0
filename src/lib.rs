//! A small compiler for an eight instruction tape language.
//!
//! Source text goes through [`lexer::Lexer`] and [`parser::Parser`] into a
//! [`parser::Program`], which can either be interpreted directly or lowered
//! into [`ir::Ir`] and interpreted from there. Both routes behave the same.

pub mod error;
pub mod interpreter;
pub mod ir;
pub mod lexer;
pub mod parser;
pub mod printer;

use std::io::{BufRead, Write};

pub use crate::error::{Error, Result};
use crate::interpreter::{AstInterpreter, IrInterpreter, Runtime, Tape};
use crate::lexer::Lexer;
use crate::parser::{Parser, Program};

/// Parse with the permissive bracket handling, a stray top level `]` ends the
/// program and a missing `]` is treated as end of input.
pub fn parse(source: &str) -> Result<Program> {
    Parser::new(Lexer::new(source)).parse_program()
}

/// Parse, rejecting any `[` or `]` without a partner.
pub fn parse_strict(source: &str) -> Result<Program> {
    Parser::strict(Lexer::new(source)).parse_program()
}

/// Interpret the AST against `runtime`.
pub fn execute_ast(program: &Program, runtime: &mut Runtime) -> Result<()> {
    let result = AstInterpreter::new().interpret(runtime, program);
    let flushed = runtime.flush();
    result.and(flushed)
}

/// Lower to IR then interpret that against `runtime`.
pub fn execute_ir(program: &Program, runtime: &mut Runtime) -> Result<()> {
    let instructions = ir::lower_program(program)?;
    let result = IrInterpreter::new().run(runtime, &instructions);
    let flushed = runtime.flush();
    result.and(flushed)
}

/// Parse `source` and walk its AST on a fresh tape, returning the final tape.
pub fn run_ast<'io>(
    source: &str,
    input: impl BufRead + 'io,
    output: impl Write + 'io,
) -> Result<Tape> {
    let program = parse(source)?;
    let mut runtime = Runtime::new(Box::new(input), Box::new(output));
    execute_ast(&program, &mut runtime)?;
    Ok(runtime.tape().clone())
}

/// Parse `source`, lower it to IR and run that on a fresh tape, returning the final tape.
pub fn run_ir<'io>(
    source: &str,
    input: impl BufRead + 'io,
    output: impl Write + 'io,
) -> Result<Tape> {
    let program = parse(source)?;
    let mut runtime = Runtime::new(Box::new(input), Box::new(output));
    execute_ir(&program, &mut runtime)?;
    Ok(runtime.tape().clone())
}
