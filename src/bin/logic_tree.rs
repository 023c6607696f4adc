//! A small command line front end for the library: parse a formula, print its JSON document,
//! evaluate it and export its `.dot` graph.
//!
//! Usage: `logic_tree <formula> [NAME=true|false ...] [--dot=<path>]`
//!
//! The graph is printed to the standard output, unless `--dot` is given, in which case it is
//! written into the given file (which can be rendered using `dot -Tpng <path> -o tree.png`).
//! Set `RUST_LOG=debug` to see log output.

use biodivine_lib_logic_tree::{evaluate, parse, to_graph, LogicValuation};
use log::{error, info};
use std::error::Error;
use std::process::exit;

struct Arguments {
    formula: String,
    valuation: LogicValuation,
    dot_path: Option<String>,
}

fn read_arguments() -> Result<Arguments, String> {
    let mut args = std::env::args().skip(1);
    let formula = args
        .next()
        .ok_or_else(|| "Usage: logic_tree <formula> [NAME=true|false ...] [--dot=<path>]".to_string())?;
    let mut valuation = LogicValuation::new();
    let mut dot_path = None;
    for arg in args {
        if let Some(path) = arg.strip_prefix("--dot=") {
            dot_path = Some(path.to_string());
            continue;
        }
        let (name, value) = arg
            .split_once('=')
            .ok_or_else(|| format!("Expected NAME=VALUE, but found `{}`.", arg))?;
        let value = match value {
            "true" | "TRUE" | "1" => true,
            "false" | "FALSE" | "0" => false,
            _ => return Err(format!("Invalid value of `{}`: `{}`.", name, value)),
        };
        valuation.set(name, value);
    }
    Ok(Arguments {
        formula,
        valuation,
        dot_path,
    })
}

fn run(arguments: Arguments) -> Result<(), Box<dyn Error>> {
    let tree = parse(&arguments.formula)?;
    info!("Parsed formula `{}`.", tree);

    println!("JSON:");
    println!("{}", tree.to_json_pretty()?);

    println!();
    match evaluate(&tree, &arguments.valuation) {
        Ok(value) => println!("Value: {}", value),
        Err(e) => println!("Value: cannot evaluate ({})", e),
    }

    let dot = to_graph(&tree);
    match arguments.dot_path {
        Some(path) => {
            std::fs::write(&path, dot)?;
            info!("Graph written to `{}`.", path);
        }
        None => {
            println!();
            println!("Graphviz DOT:");
            println!("{}", dot);
        }
    }
    Ok(())
}

fn main() {
    env_logger::init();
    let result = read_arguments()
        .map_err(Box::<dyn Error>::from)
        .and_then(run);
    if let Err(e) = result {
        // `env_logger` prints errors even when `RUST_LOG` is not set.
        error!("{}", e);
        exit(1);
    }
}
