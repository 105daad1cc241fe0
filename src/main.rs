extern crate clap;

use std::{
    collections::HashSet,
    io::{self},
    process::ExitCode,
    time::Instant,
};

use bfc_ir::{
    interpreter::{AstInterpreter, IrInterpreter, Runtime},
    ir::lower_program,
    lexer::Lexer,
    parser::Parser,
    printer, Result,
};
use clap::{Parser as ClapParser, ValueEnum};
use colored::Colorize;

/// Tape language compiler/IR/interpreter
#[derive(ClapParser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// The file to operate on
    #[arg()]
    file: String,

    /// What to print or run, defaults to running the IR interpreter
    #[arg(value_enum)]
    commands: Vec<Commands>,

    /// Reject unmatched `[` and `]` instead of ignoring them
    #[arg(short, long)]
    strict: bool,

    /// Give up after this many execution steps
    #[arg(short, long)]
    max_steps: Option<u64>,

    /// Ask for each integer on stderr before reading it
    #[arg(short, long)]
    prompt: bool,

    #[arg(short, long, default_value_t = log::Level::Warn)]
    log_level: log::Level,
}

#[derive(ValueEnum, Debug, Clone, Hash, PartialEq, Eq)]
enum Commands {
    /// Output the tokens
    Tokens,
    /// Output the ast
    Ast,
    /// Output the IR
    Ir,

    /// Run the AST as is
    AstInterpreter,
    /// Lower to IR and run that
    IrInterpreter,
}

fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(e) = simple_logger::init_with_level(args.log_level) {
        eprintln!("{0:}: {1:}", "Warning".yellow(), e);
    }

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{0:}: {1:}", "Error".red(), e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<()> {
    let mut commands: HashSet<Commands> = HashSet::from_iter(args.commands.into_iter());
    if commands.is_empty() {
        commands.insert(Commands::IrInterpreter);
    }

    eprintln!("Running {}", args.file);

    let text = std::fs::read_to_string(&args.file)?;

    eprintln!("{}", "Starting lexing".blue());
    let now = Instant::now();
    let tokens = Lexer::new(&text).collect_results()?;
    eprintln!("{} {:.2?}", "Finished lexing in".green(), now.elapsed());

    if commands.contains(&Commands::Tokens) {
        println!("{}", printer::format_tokens(&tokens));
    }

    let mut parser = if args.strict {
        Parser::strict(Lexer::new(&text))
    } else {
        Parser::new(Lexer::new(&text))
    };

    eprintln!("{}", "Starting parsing".blue());
    let mut now: Instant = Instant::now();
    let program = parser.parse_program()?;
    eprintln!("{} {:.2?}", "Finished parsing in".green(), now.elapsed());

    if commands.contains(&Commands::Ast) {
        print!("{}", printer::format_ast(&program));
    }

    let stdin = io::stdin().lock();
    let stdout = io::stdout();

    let mut runtime = Runtime::new(Box::new(stdin), Box::new(stdout))
        .with_prompt(args.prompt)
        .with_step_limit(args.max_steps);

    if commands.contains(&Commands::AstInterpreter) {
        eprintln!("{}", "Starting ast-interpreter".blue());
        now = Instant::now();
        let result = AstInterpreter::new().interpret(&mut runtime, &program);
        runtime.flush()?;
        result?;
        runtime.reset();
        println!();
        eprintln!(
            "{} {:.2?}",
            "Finished ast-interpreter in".green(),
            now.elapsed()
        );
    }

    if !commands.contains(&Commands::Ir) && !commands.contains(&Commands::IrInterpreter) {
        return Ok(());
    }

    eprintln!("{}", "Starting lowering".blue());
    now = Instant::now();
    let instructions = lower_program(&program)?;
    eprintln!(
        "{} {} in {:.2?}",
        "Finished lowering with top level length".green(),
        instructions.len(),
        now.elapsed()
    );

    if commands.contains(&Commands::Ir) {
        print!("{}", printer::format_ir(&instructions));
    }

    if commands.contains(&Commands::IrInterpreter) {
        eprintln!("{}", "Starting ir-interpreter".blue());
        now = Instant::now();
        let result = IrInterpreter::new().run(&mut runtime, &instructions);
        runtime.flush()?;
        result?;
        println!();
        eprintln!(
            "{} {:.2?}",
            "Finished ir-interpreter in".green(),
            now.elapsed()
        );
    }

    Ok(())
}
