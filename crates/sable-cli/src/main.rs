//! Sable command-line runner.
//!
//! Usage:
//!   sable <file.sbc>            Run from the image's initial pointer
//!   sable -s <name> <file.sbc>  Run from a named symbol
//!   sable -d <file.sbc>         Disassemble the code region

use std::{env, fs, process::ExitCode};

use sable_core::{Image, disasm};
use sable_vm::Machine;

const USAGE: &str = "\
Usage: sable [OPTIONS] <FILE>

Arguments:
  <FILE>  Sable bytecode image

Options:
  -s <NAME>  Start at the named symbol instead of the initial pointer
  -d         Disassemble the code region instead of running
  -h, --help Print this help message";

enum Action {
    Run { path: String, entry: Option<String> },
    Disasm { path: String },
    Help,
}

fn parse_args() -> Result<Action, String> {
    let args: Vec<String> = env::args().skip(1).collect();

    match args.as_slice() {
        [arg] if arg == "-h" || arg == "--help" => Ok(Action::Help),
        [flag, path] if flag == "-d" => Ok(Action::Disasm { path: path.clone() }),
        [flag, name, path] if flag == "-s" => Ok(Action::Run {
            path: path.clone(),
            entry: Some(name.clone()),
        }),
        [path] if !path.starts_with('-') => Ok(Action::Run {
            path: path.clone(),
            entry: None,
        }),
        _ => Err(USAGE.into()),
    }
}

fn read_image(path: &str) -> Result<Vec<u8>, String> {
    fs::read(path).map_err(|e| format!("error reading {path}: {e}"))
}

fn run_file(path: &str, entry: Option<&str>) -> Result<(), String> {
    let bytes = read_image(path)?;
    let mut vm = Machine::new(bytes).map_err(|e| e.to_string())?;
    let result = match entry {
        Some(name) => vm.call(name),
        None => vm.run(None),
    };
    result.map_err(|e| e.to_string())
}

fn disasm_file(path: &str) -> Result<(), String> {
    let bytes = read_image(path)?;
    let image = Image::load(bytes).map_err(|e| e.to_string())?;
    for line in disasm::disassemble(&image, image.base(), usize::MAX) {
        println!("{:6}  {:<28}  {}", line.offset, line.text, line.bytes);
    }
    Ok(())
}

fn main() -> ExitCode {
    let action = match parse_args() {
        Ok(action) => action,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let result = match action {
        Action::Help => {
            println!("{USAGE}");
            return ExitCode::SUCCESS;
        }
        Action::Run { path, entry } => run_file(&path, entry.as_deref()),
        Action::Disasm { path } => disasm_file(&path),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
