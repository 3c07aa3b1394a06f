use std::fs;

use clap::Parser;
use fieldenum::{
    assign,
    generator::{dynamic::DynamicEnum, field::FieldType},
    interpreter::evaluator::core::Context,
    with_values,
};

/// fieldenum assigns enum values to a list of fields from arithmetic tag
/// expressions, or evaluates a single expression.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells fieldenum to read the contents from a file.
    #[arg(short, long)]
    file: bool,

    /// Treats the contents as one expression and prints its value.
    #[arg(short, long)]
    expr: bool,

    /// The value of `iota` in expression mode.
    #[arg(short, long, default_value_t = 0, allow_negative_numbers = true)]
    iota: i64,

    /// The type shared by all fields, such as `i32`, `u8`, `f64`, `c128` or
    /// `string`.
    #[arg(short, long, default_value = "i64")]
    kind: FieldType,

    /// A custom value as `name=expression`. May be repeated; later
    /// definitions can use earlier ones.
    #[arg(short = 'v', long = "value")]
    values: Vec<String>,

    /// A field layout (`Name`, `Name =` or `Name = tag`, separated by newlines
    /// or `;`), an expression with `--expr`, or a path with `--file`.
    contents: String,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let contents = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            std::process::exit(1);
        })
    } else {
        args.contents.clone()
    };

    if let Err(e) = run(&args, &contents) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run(args: &Args, contents: &str) -> Result<(), Box<dyn std::error::Error>> {
    let mut context = Context::with_iota(args.iota);
    let mut values = Vec::with_capacity(args.values.len());

    for definition in &args.values {
        let Some((name, expr)) = definition.split_once('=') else {
            return Err(format!("invalid value \"{definition}\", expected name=expression").into());
        };
        let value = context.evaluate(expr.trim())?;
        context.define_value(name.trim(), value.clone())?;
        values.push((name.trim().to_string(), value));
    }

    if args.expr {
        println!("{}", context.evaluate(contents.trim())?);
        return Ok(());
    }

    let mut target = DynamicEnum::parse(args.kind.clone(), contents)?;
    assign(&mut target, [with_values(values)])?;

    for (name, value) in target.iter() {
        if let Some(value) = value {
            println!("{name} = {value}");
        }
    }

    Ok(())
}
