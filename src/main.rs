// std imports
use std::{
    io::{self, BufRead},
    process,
};

// third-party imports
use clap::Parser;
use env_logger::{self as logger};

// local imports
use calcomb::{calc, cli::Opt, error::Error};

const CALCOMB_DEBUG_LOG: &str = "CALCOMB_DEBUG_LOG";
const CALCOMB_DEBUG_LOG_STYLE: &str = "CALCOMB_DEBUG_LOG_STYLE";

const EXIT_PARSE_FAILURE: i32 = 1;
const EXIT_FAULT: i32 = 2;
const EXIT_IO: i32 = 3;

// ---

fn bootstrap() {
    if std::env::var(CALCOMB_DEBUG_LOG).is_ok() {
        logger::Builder::from_env(
            logger::Env::new()
                .filter(CALCOMB_DEBUG_LOG)
                .write_style(CALCOMB_DEBUG_LOG_STYLE),
        )
        .format_timestamp_micros()
        .init();
        log::debug!("logging initialized");
    } else {
        logger::Builder::new()
            .filter_level(log::LevelFilter::Error)
            .format_timestamp_millis()
            .init()
    }
}

/// Read one line from standard input, without its line terminator
fn read_line() -> io::Result<String> {
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    let len = line.trim_end_matches(['\n', '\r']).len();
    line.truncate(len);
    Ok(line)
}

fn run(opt: Opt) -> i32 {
    let input = match opt.expr {
        Some(expr) => expr,
        None => match read_line() {
            Ok(line) => line,
            Err(err) => {
                log::error!("failed to read standard input: {}", err);
                eprintln!("failed to read input: {}", err);
                return EXIT_IO;
            }
        },
    };

    if opt.echo {
        println!("{}", input);
    }

    let result = if opt.strict {
        calc::evaluate_all(&input)
    } else {
        calc::evaluate(&input)
    };

    match result {
        Ok(value) => {
            println!("{}", value);
            0
        }
        Err(Error::Failure(failure)) => {
            eprintln!("{}", failure);
            EXIT_PARSE_FAILURE
        }
        Err(Error::Fault(fault)) => {
            eprintln!("fatal: {}", fault);
            EXIT_FAULT
        }
    }
}

fn main() {
    bootstrap();
    let opt = Opt::parse();
    process::exit(run(opt));
}
