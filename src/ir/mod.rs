pub mod lower;

pub use self::lower::lower_program;

/// Intermediate representation, one instruction per primitive.
///
/// Loops aren't flattened into jump offsets, a [`Ir::Jump`] owns its body and
/// the interpreter re-walks it.
#[derive(Clone, Debug, PartialEq)]
pub enum Ir {
    /// Add one to the current cell
    Add,

    /// Subtract one from the current cell
    Sub,

    /// Move the cursor right
    Next,

    /// Move the cursor left
    Prev,

    /// Read an integer into the current cell
    Input,

    /// Write the current cell as a character
    Output,

    /// Run the body while the current cell is non-zero
    Jump(Vec<Ir>),
}

impl Ir {
    pub fn name(&self) -> &'static str {
        match self {
            Ir::Add => "ADD",
            Ir::Sub => "SUB",
            Ir::Next => "NEXT",
            Ir::Prev => "PREV",
            Ir::Input => "INPUT",
            Ir::Output => "OUTPUT",
            Ir::Jump(_) => "JUMP",
        }
    }
}
