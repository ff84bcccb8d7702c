//! File-based DH solver: reads a table of per-joint parameters, prints the
//! per-joint transforms and the chained forward kinematics in a LaTeX
//! bmatrix compatible format.

use std::fs::File;
use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::Parser;

use rs_dh_kinematics::kinematic_traits::Transform;
use rs_dh_kinematics::kinematics_impl::DhKinematics;
use rs_dh_kinematics::latex;
use rs_dh_kinematics::parameter_error::ParameterError;

const HELP: &str = "\
Help for using dh_solver
-----------------------------------
- Call with \"dh_solver <optional input file> <optional output file (input file must be specified)>\"
- If no input file is given, the program will ask for the file to be typed
- Input file specified as # of joints lines of d,a,theta,alpha
- Output consists of A matrices (# = # of joints), then T matrices (# = # of A - 1)
- Matrices are printed so that they can be copied directly into a LaTeX amsmath bmatrix environment
";

const HELP_LONG: &str = "\
Detailed help for using dh_solver
--------------------------------------------
General
--------------------------
- For background on the program, use \"dh_solver info\"
- For the short help message, use \"dh_solver help\"
- Call with \"dh_solver <optional input file> <optional output file (input file must be specified)>\"
- If no input file is given, the program will ask for the file to be typed
- Input file specified as # of joints lines of d,a,theta,alpha
- Output consists of A matrices (# = # of joints), then T matrices (# = # of A - 1)
- The output file, when given, is overwritten with the same matrices that go to stdout

Parameter specification
-----------------------
- Each field can be specified numerically or symbolically
- A numeric field is used as given (meters for d and a, degrees for theta and alpha)
- A symbolic field is the variable name without the joint number; the joint
  number is appended automatically (theta in line 2 becomes \\theta_2)
- theta and alpha are prefixed so they typeset as Greek letters; any other
  name is kept as-is (useful for link length symbols such as l)
- A variable joint marker must be written explicitly (i.e. theta^*)

Example
-----------------------
- \"dh_solver DATA OUT\" reads the table from DATA and mirrors the matrices to OUT
";

const INFO: &str = "\
Info on dh_solver
-------------------------------
- Builds the Denavit-Hartenberg transform for each table row, numerically or
  symbolically depending on how the parameters are given
- Chains the transforms into the forward kinematics, printing every partial
  product along the way
- Prints all matrices in a LaTeX amsmath bmatrix compatible format
- For usage, run \"dh_solver help\" or \"dh_solver help_long\"
";

/// Builds DH transform matrices from a parameter table and chains them
/// into forward kinematics.
#[derive(Parser)]
#[command(name = "dh_solver", version)]
struct Cli {
    /// Input file, one joint per line as d,a,theta,alpha. The keywords
    /// `help`, `help_long` and `info` are also accepted here.
    input: Option<String>,

    /// Output file the matrices are mirrored to, in addition to stdout.
    output: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // A lone keyword asks for help; with an output argument present the
    // first argument is a file path like any other.
    if cli.output.is_none() {
        match cli.input.as_deref().unwrap_or_default() {
            "help" => {
                print!("{}", HELP);
                return Ok(());
            }
            "help_long" => {
                print!("{}", HELP_LONG);
                return Ok(());
            }
            "info" => {
                print!("{}", INFO);
                return Ok(());
            }
            _ => {}
        }
    }

    let kinematics = load_kinematics(cli.input.as_deref())?;

    let mut mirror = match cli.output.as_deref() {
        Some(path) => {
            Some(File::create(path).with_context(|| format!("cannot create output file {path}"))?)
        }
        None => None,
    };

    let stdout = io::stdout();
    let mut stdout = stdout.lock();
    for transform in kinematics.joint_transforms() {
        emit(&mut stdout, mirror.as_mut(), &transform)?;
    }
    for transform in kinematics.chained_transforms() {
        emit(&mut stdout, mirror.as_mut(), &transform)?;
    }
    Ok(())
}

/// Loads the DH table from the given path, falling back to one interactive
/// prompt when the path is missing or unreadable. A table that reads but
/// does not parse is a hard error.
fn load_kinematics(input: Option<&str>) -> Result<DhKinematics> {
    if let Some(path) = input {
        match DhKinematics::from_file(path) {
            Ok(kinematics) => return Ok(kinematics),
            Err(err @ ParameterError::IoError(_)) => eprintln!("cannot read {path}: {err}"),
            Err(err) => {
                return Err(err).with_context(|| format!("reading DH parameters from {path}"));
            }
        }
    }
    let path = prompt_for_path()?;
    DhKinematics::from_file(&path)
        .with_context(|| format!("reading DH parameters from {path}"))
}

fn prompt_for_path() -> Result<String> {
    print!("Please enter the input filepath: ");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("reading the input path from stdin")?;
    Ok(line.trim().to_string())
}

fn emit<W: Write>(stdout: &mut W, mirror: Option<&mut File>, transform: &Transform) -> Result<()> {
    latex::write_matrix(stdout, transform)?;
    if let Some(file) = mirror {
        latex::write_matrix(file, transform)?;
    }
    Ok(())
}
