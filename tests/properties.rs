use bfc_ir::interpreter::{Runtime, Tape};
use bfc_ir::lexer::lexer::is_blank;
use bfc_ir::lexer::{Lexer, TokenKind};
use bfc_ir::parser::Program;
use bfc_ir::{execute_ast, execute_ir, parse, printer};
use proptest::prelude::*;

const MAX_STEPS: u64 = 4096;
const SYMBOLS: [&str; 6] = ["+", "-", ">", "<", ".", ","];

/// Symbols with whitespace sprinkled between them.
fn spaced_source() -> impl Strategy<Value = String> {
    let piece = prop_oneof![
        4 => prop::sample::select(vec!['+', '-', '>', '<', '.', ',', '[', ']']),
        1 => prop::sample::select(vec![' ', '\t', '\n', '\r', '\x0B', '\x0C']),
    ];
    prop::collection::vec(piece, 0..128).prop_map(|chars| chars.into_iter().collect())
}

/// Programs where every `[` has its `]`, nested a few levels deep.
fn balanced_source() -> impl Strategy<Value = String> {
    let leaf = prop::sample::select(SYMBOLS.to_vec()).prop_map(str::to_string);
    leaf.prop_recursive(4, 64, 8, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..8).prop_map(|parts| parts.concat()),
            prop::collection::vec(inner, 0..8).prop_map(|parts| format!("[{}]", parts.concat())),
        ]
    })
}

fn input_text() -> impl Strategy<Value = String> {
    prop::collection::vec(0i64..=127, 0..16).prop_map(|values| {
        values
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    })
}

struct Outcome {
    result: Result<(), String>,
    output: Vec<u8>,
    tape: Tape,
    steps: u64,
}

fn execute(
    program: &Program,
    input: &str,
    run: fn(&Program, &mut Runtime) -> bfc_ir::Result<()>,
) -> Outcome {
    let mut output = vec![];
    let (result, tape, steps) = {
        let mut runtime = Runtime::new(Box::new(input.as_bytes()), Box::new(&mut output))
            .with_step_limit(Some(MAX_STEPS));
        let result = run(program, &mut runtime).map_err(|e| e.to_string());
        (result, runtime.tape().clone(), runtime.steps())
    };
    Outcome {
        result,
        output,
        tape,
        steps,
    }
}

proptest! {
    #[test]
    fn tokens_reproduce_the_stripped_source(source in spaced_source()) {
        let stripped: String = source.chars().filter(|&c| !is_blank(c)).collect();
        let tokens = Lexer::new(&source).collect_results().expect("only valid symbols");
        prop_assert_eq!(printer::format_tokens(&tokens), stripped);
    }

    #[test]
    fn peeking_never_consumes(source in spaced_source()) {
        let mut lexer = Lexer::new(&source);
        loop {
            let position = lexer.position();
            let peeked = lexer.peek().expect("only valid symbols");
            prop_assert_eq!(lexer.position(), position);
            prop_assert_eq!(lexer.peek().expect("only valid symbols"), peeked);

            let next = lexer.next().expect("only valid symbols");
            prop_assert_eq!(next, peeked);
            if next == TokenKind::EOF {
                break;
            }
        }
    }

    #[test]
    fn ast_and_ir_runs_are_identical(source in balanced_source(), input in input_text()) {
        let program = parse(&source).expect("balanced source parses");

        let ast = execute(&program, &input, execute_ast);
        let ir = execute(&program, &input, execute_ir);

        prop_assert_eq!(&ast.result, &ir.result);
        prop_assert_eq!(&ast.output, &ir.output);
        prop_assert_eq!(&ast.tape, &ir.tape);
        prop_assert_eq!(ast.steps, ir.steps);
    }
}
