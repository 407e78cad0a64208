use std::io::{self, BufRead, Write};

/// The interactive line loop. Owns the session history; the evaluation
/// pipeline itself keeps no state between lines.
pub struct Repl {
    history: Vec<(String, f64)>,
}

impl Repl {
    pub fn new() -> Self {
        Self {
            history: Vec::new(),
        }
    }

    pub fn run(&mut self) {
        print_banner();

        let stdin = io::stdin();
        let mut lines = stdin.lock().lines();

        loop {
            print!(">>> ");
            if io::stdout().flush().is_err() {
                break;
            }

            let line = match lines.next() {
                Some(Ok(line)) => line,
                // EOF or a broken pipe ends the session
                _ => break,
            };

            let input = line.trim();
            if input.is_empty() {
                continue;
            }

            match input.to_lowercase().as_str() {
                "exit" | "quit" | "q" => break,
                "history" => self.print_history(),
                "clear" => {
                    self.history.clear();
                    println!("History cleared");
                }
                "help" => print_help(),
                _ => self.evaluate_line(input),
            }
        }
    }

    fn evaluate_line(&mut self, input: &str) {
        match rcalc::evaluate(input) {
            Ok(value) => {
                println!("= {value}");
                self.history.push((input.to_string(), value));
            }
            Err(e) => println!("Error: {e}"),
        }
    }

    fn print_history(&self) {
        if self.history.is_empty() {
            println!("No history yet");
            return;
        }

        println!("\nExpression history");
        println!("{}", "-".repeat(50));
        for (i, (expression, result)) in self.history.iter().enumerate() {
            println!("{:3}. {expression:<30} = {result}", i + 1);
        }
        println!("{}", "-".repeat(50));
    }
}

fn print_banner() {
    println!("{}", "=".repeat(70));
    println!("rcalc");
    println!("{}", "=".repeat(70));
    println!("Type expressions to evaluate them");
    println!("Commands: 'exit' or 'quit' to exit, 'history' to view history, 'clear' to clear history");
    println!("{}", "=".repeat(70));
    println!();
}

fn print_help() {
    println!("\nAvailable commands:");
    println!("  exit, quit, q  - Exit the calculator");
    println!("  history        - Show calculation history");
    println!("  clear          - Clear history");
    println!("  help           - Show this help message");
    println!("\nSupported operations:");
    println!("  +, -, *, /     - Basic arithmetic");
    println!("  ( )            - Grouping");
    println!("  +x, -x         - Unary operators");
    println!("  pi, e          - Constants");
    println!("  abs, sqrt, pow, min, max, round, sin, cos, tan - Functions");
}
