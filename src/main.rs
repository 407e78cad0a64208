use clap::Parser;
use rcalc::{lexer, parser};

mod repl;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The expression to evaluate. Starts the interactive calculator when
    /// omitted.
    expression: Option<String>,

    /// Debug the lexer, printing out each token. Does not parse or evaluate.
    #[clap(long, default_value = "false")]
    debug_lexer: bool,

    /// Debug the parser, printing out the AST. Does not evaluate.
    #[clap(long, default_value = "false")]
    debug_parser: bool,
}

fn main() {
    let Args {
        expression,
        debug_lexer,
        debug_parser,
    } = Args::parse();

    let Some(expression) = expression else {
        repl::Repl::new().run();
        return;
    };

    if debug_lexer {
        run_debug_lexer(&expression);
        return;
    }

    if debug_parser {
        run_debug_parser(&expression);
        return;
    }

    match rcalc::evaluate(&expression) {
        Ok(value) => println!("= {value}"),
        Err(e) => {
            report(e, &expression);
            std::process::exit(1);
        }
    }
}

fn run_debug_lexer(expression: &str) {
    match lexer::tokenize(expression) {
        Ok(tokens) => {
            for token in tokens {
                println!("{token:?}");
            }
        }
        Err(e) => {
            report(e, expression);
            std::process::exit(1);
        }
    }
}

fn run_debug_parser(expression: &str) {
    let tokens = match lexer::tokenize(expression) {
        Ok(tokens) => tokens,
        Err(e) => {
            report(e, expression);
            std::process::exit(1);
        }
    };

    match parser::Parser::new(tokens).parse() {
        Ok(ast) => println!("{ast:#?}"),
        Err(e) => {
            report(e, expression);
            std::process::exit(1);
        }
    }
}

fn report(error: impl Into<miette::Report>, expression: &str) {
    let diag = error.into().with_source_code(expression.to_string());
    eprintln!("{diag:?}");
}
