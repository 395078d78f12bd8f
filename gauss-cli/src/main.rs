//! Gauss interactive console
//!
//! A thin driver over `gauss-matrix`: reads a matrix and operation tokens
//! from stdin, applies one step at a time, prints narration to stdout.
//! Diagnostics go through `tracing` to stderr (`RUST_LOG` controls the
//! level, default `info`).
//!
//! Commands:
//! - `ops`: apply elementary row (or congruence) operations until "end"
//! - `echelon`: reduce the matrix to row-echelon form
//! - `det`: compute the determinant of a square matrix

use std::env;
use std::error::Error;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use gauss_core::parse_scalar;
use gauss_matrix::{determinant, ElementaryOp, Matrix, Mode, Operator, Reducer};
use tracing::debug;

const ROW_MENU: &str = "\
1. add c times j-th row to i-th row\t input: 1 c j i
2. multiply i-th row by c\t\t input: 2 i c
3. interchange i-th and j-th rows\t input: 3 i j
Input 'end' to stop.
(note: replace letters with values.)
";

const CONGRUENCE_MENU: &str = "\
1. add c times j-th row/column to i-th row\t input: 1 c j i
2. multiply i-th row/column by c\t\t input: 2 i c
3. interchange i-th and j-th rows/columns\t input: 3 i j
Input 'end' to stop.
(note: replace letters with values.)
";

fn main() -> ExitCode {
    init_tracing();

    let args: Vec<String> = env::args().skip(1).collect();
    let mut positional: Vec<String> = Vec::new();
    let mut quiet = false;
    for arg in &args {
        match arg.as_str() {
            "--quiet" => quiet = true,
            "--help" | "-h" => {
                print_usage();
                return ExitCode::SUCCESS;
            }
            other if !other.starts_with('-') => positional.push(other.to_string()),
            other => {
                eprintln!("unexpected argument: {other}");
                print_usage();
                return ExitCode::FAILURE;
            }
        }
    }

    let Some(command) = positional.first() else {
        print_usage();
        return ExitCode::FAILURE;
    };
    if positional.len() > 2 || (positional.len() == 2 && command != "ops") {
        eprintln!("too many arguments");
        print_usage();
        return ExitCode::FAILURE;
    }

    let stdin = io::stdin();
    let mut reader = io::BufReader::new(stdin.lock());

    let result = match command.as_str() {
        "ops" => {
            let mode = match positional.get(1) {
                Some(token) => match Mode::parse(token) {
                    Ok(mode) => mode,
                    Err(e) => {
                        eprintln!("error: {e}");
                        return ExitCode::FAILURE;
                    }
                },
                None => Mode::default(),
            };
            run_ops(&mut reader, mode, quiet)
        }
        "echelon" => run_echelon(&mut reader, quiet),
        "det" => run_det(&mut reader, quiet),
        other => {
            eprintln!("unknown command: {other}");
            print_usage();
            return ExitCode::FAILURE;
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run_ops(reader: &mut impl BufRead, mode: Mode, quiet: bool) -> Result<(), Box<dyn Error>> {
    let matrix = read_matrix(reader)?;
    let mut operator = Operator::new(matrix, mode, !quiet)?;

    println!("Matrix:");
    println!("{}", operator.matrix());
    println!();
    if operator.verbose() {
        print!(
            "{}",
            match mode {
                Mode::Row => ROW_MENU,
                Mode::Congruence => CONGRUENCE_MENU,
            }
        );
        io::stdout().flush()?;
    }

    loop {
        let Some(line) = read_line(reader)? else { break };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line == "end" {
            break;
        }
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let op = match ElementaryOp::parse(&tokens) {
            Ok(op) => op,
            Err(e) => {
                eprintln!("error: {e}");
                continue;
            }
        };
        debug!(?op, "applying");
        match operator.apply(&op) {
            Ok(step) => {
                if operator.verbose() {
                    println!("{step}");
                    println!();
                }
            }
            // The matrix is unchanged by the failed step; keep going.
            Err(e) => eprintln!("error: {e}"),
        }
    }

    println!("Result:");
    println!("{}", operator.matrix());
    Ok(())
}

fn run_echelon(reader: &mut impl BufRead, quiet: bool) -> Result<(), Box<dyn Error>> {
    let matrix = read_matrix(reader)?;
    println!("Matrix:");
    println!("{matrix}");
    println!();

    let reduction = Reducer::new(matrix).with_verbose(!quiet).reduce()?;
    for step in &reduction.steps {
        println!("{step}");
        println!();
    }
    println!("Row echelon form:");
    println!("{}", reduction.matrix);
    Ok(())
}

fn run_det(reader: &mut impl BufRead, quiet: bool) -> Result<(), Box<dyn Error>> {
    let matrix = read_matrix(reader)?;
    println!("Matrix:");
    println!("{matrix}");
    println!();

    let det = determinant(&matrix, !quiet)?;
    for step in &det.steps {
        println!("{step}");
        println!();
    }
    println!("Determinant: {}", det.value);
    Ok(())
}

/// Read `m n` then m rows of n entries; entries may be decimals or
/// fractions (one token each).
fn read_matrix(reader: &mut impl BufRead) -> Result<Matrix, Box<dyn Error>> {
    print!("Matrix shape (m n): ");
    io::stdout().flush()?;
    let line = read_line(reader)?.ok_or("unexpected end of input")?;
    let dims: Vec<&str> = line.split_whitespace().collect();
    if dims.len() != 2 {
        return Err("expected two dimensions, e.g. \"3 3\"".into());
    }
    let m: usize = dims[0].parse().map_err(|_| format!("bad row count {:?}", dims[0]))?;
    let n: usize = dims[1].parse().map_err(|_| format!("bad column count {:?}", dims[1]))?;
    if m == 0 || n == 0 {
        return Err("matrix dimensions must be positive".into());
    }

    println!("Enter {m} rows of {n} entries:");
    let mut rows = Vec::with_capacity(m);
    for i in 0..m {
        let line = read_line(reader)?.ok_or("unexpected end of input")?;
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() != n {
            return Err(format!("row {} has {} entries, expected {}", i + 1, tokens.len(), n).into());
        }
        let mut row = Vec::with_capacity(n);
        for token in tokens {
            row.push(parse_scalar(token)?);
        }
        rows.push(row);
    }

    let matrix = Matrix::from_rows(rows)?;
    debug!(rows = m, cols = n, "matrix read");
    Ok(matrix)
}

fn read_line(reader: &mut impl BufRead) -> io::Result<Option<String>> {
    let mut line = String::new();
    match reader.read_line(&mut line)? {
        0 => Ok(None),
        _ => Ok(Some(line)),
    }
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn print_usage() {
    eprintln!("usage: gauss <command> [--quiet]");
    eprintln!();
    eprintln!("  ops [row|congruence]  apply elementary operations interactively");
    eprintln!("                        (congruence mirrors each row operation onto");
    eprintln!("                        the matching column; default is row)");
    eprintln!("  echelon               reduce the matrix to row-echelon form");
    eprintln!("  det                   compute the determinant of a square matrix");
    eprintln!();
    eprintln!("  --quiet               print only final results, no step narration");
}
