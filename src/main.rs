use std::process::ExitCode;

use itertools::Itertools;
use strum::IntoEnumIterator;

use strictmath::bits::{same_bits, FloatBits};
use strictmath::conformance;
use strictmath::opts::{BenchOpts, Command, EvalOpts, Opts, SweepOpts};
use strictmath::{special, Function};

fn eval(opts: &EvalOpts) -> ExitCode {
    let function = opts.function;
    let arity = function.arity();

    if opts.operands.len() != arity {
        eprintln!(
            "error: {function} takes {arity} operand{}, got {}",
            if arity == 1 { "" } else { "s" },
            opts.operands.len()
        );

        return ExitCode::FAILURE;
    }

    let a = opts.operands[0].0;
    let b = opts.operands.get(1).map_or(0.0, |operand| operand.0);
    let operands = opts.operands.iter().map(|x| format!("{:e}", x.0)).join(", ");

    log::debug!("evaluating {function}({operands})");

    let actual = function.evaluate(a, b);
    let expected = conformance::reference(function, a, b);
    let matches = same_bits(actual, expected);

    println!("{function}({operands}) = {actual:e}");
    println!("bits:      {:#018x}", actual.to_bits());
    println!(
        "reference: {:#018x} ({})",
        expected.to_bits(),
        if matches { "match" } else { "mismatch" }
    );

    if let Some(rule) = special::explain(function, a, b) {
        println!("rule:      {rule}");
    }

    if opts.exact {
        match FloatBits::from(actual).to_rational() {
            Some(value) => println!("exact:     {value}"),
            None => println!("exact:     not finite"),
        }
    }

    if matches {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn sweep(opts: &SweepOpts) -> ExitCode {
    let functions = match opts.function {
        Some(function) => vec![function],
        None => Function::iter().collect(),
    };

    let mut conformant = true;

    for function in functions {
        let report = conformance::sweep(function, opts.sampler, opts.trials, opts.seed);

        println!("{report}");

        for mismatch in &report.examples {
            println!("  {mismatch}");
        }

        conformant &= report.is_conformant();
    }

    if conformant {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn bench(opts: &BenchOpts) -> ExitCode {
    println!("{}", conformance::bench(opts.iterations, opts.seed));

    ExitCode::SUCCESS
}

fn main() -> ExitCode {
    let opts = Opts::parse();

    env_logger::Builder::new()
        .filter_level(opts.log_level)
        .init();

    match &opts.command {
        Command::Eval(opts) => eval(opts),
        Command::Sweep(opts) => sweep(opts),
        Command::Bench(opts) => bench(opts),
    }
}
