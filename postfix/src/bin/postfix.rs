use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use postfix::{repl, SymbolTable};

/// Evaluate postfix expressions over the variables a=5, b=7, c=2, d=4
#[derive(Parser, Debug)]
#[command(name = "postfix", version, about)]
struct Args {
    /// Expressions to evaluate once, given without the sentinel (eg: abc*+d-)
    exprs: Vec<String>,

    /// Character that ends an expression in interactive mode
    #[arg(long, default_value_t = repl::SENTINEL)]
    sentinel: char,

    /// Where to keep line history [default: ~/.postfix_history]
    #[arg(long, conflicts_with = "no_history")]
    history: Option<PathBuf>,

    /// Don't load or save line history
    #[arg(long)]
    no_history: bool,

    /// Print variable bindings and exit
    #[arg(long)]
    vars: bool,
}

fn evalexprs(cx: &SymbolTable, exprs: &[String]) -> ExitCode {
    let mut status = ExitCode::SUCCESS;
    for expr in exprs {
        match cx.parse_eval(expr) {
            Ok((tree, value)) => println!("{} = {}", tree, value),
            Err(e) => {
                eprintln!("Eval error: {}", e);
                status = ExitCode::FAILURE;
            }
        }
    }
    status
}

fn interactive(cx: &SymbolTable, args: &Args) -> anyhow::Result<()> {
    repl::check_sentinel(cx, args.sentinel)?;
    let histpath = match (&args.history, args.no_history) {
        (_, true) => None,
        (Some(path), _) => Some(path.clone()),
        (None, _) => dirs::home_dir().map(|h| h.join(".postfix_history")),
    };

    let mut rl = rustyline::DefaultEditor::new()?;
    if let Some(ref path) = histpath {
        if rl.load_history(path).is_err() {
            eprintln!("No history yet");
        }
    }

    let readline = |prompt: &str| match rl.readline(prompt) {
        Ok(line) => {
            if repl::keep_in_history(prompt) {
                let _ = rl.add_history_entry(line.as_str());
            }
            Some(line)
        }
        Err(_) => None,
    };
    repl::run(cx, args.sentinel, readline, &mut io::stdout().lock())?;

    if let Some(ref path) = histpath {
        if let Err(e) = rl.save_history(path) {
            eprintln!("Couldn't save history to {}: {}", path.display(), e);
        }
    }
    Ok(())
}

fn main() -> anyhow::Result<ExitCode> {
    let args = Args::parse();
    let cx = SymbolTable::reference();

    if args.vars {
        for (name, value) in cx.vars() {
            println!("{} = {}", name, value);
        }
        return Ok(ExitCode::SUCCESS);
    }
    if !args.exprs.is_empty() {
        return Ok(evalexprs(cx, &args.exprs));
    }
    interactive(cx, &args)?;
    Ok(ExitCode::SUCCESS)
}
