use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use tracing::debug;

use crate::burn::{format_activations, format_summary as format_burn_summary, simulate_scenario};
use crate::burn::{BurnReport, TraceMode};
use crate::data::scenario::validate_duration;
use crate::data::{load_scenario, BurnScenario};
use crate::error::{CliError, ExportError, InputError, INVALID_POISON_INPUT};
use crate::export::{burn_to_csv, poison_to_csv, to_json, OutputFormat, PoisonReport};
use crate::poison::{
    format_summary as format_poison_summary, parse_count, simulate_poison, total_damage,
};

pub const USAGE: &str = "usage: dotsim <poison|burn> [options]";
pub const POISON_USAGE: &str = "usage: dotsim poison [INITIAL_POISON ROUNDS] [--format table|json|csv]";
pub const BURN_USAGE: &str =
    "usage: dotsim burn [--config PATH] [--duration SECS] [--trace] [--format table|json|csv]";

pub const POISON_PROMPT: &str = "Enter the initial poison count: ";
pub const ROUNDS_PROMPT: &str = "Enter the number of rounds to simulate: ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Poison,
    Burn,
}

pub fn parse_command(args: &[String]) -> Option<Command> {
    match args.get(1).map(String::as_str) {
        Some("poison") => Some(Command::Poison),
        Some("burn") => Some(Command::Burn),
        _ => None,
    }
}

/// Dispatch a full argv (program name first) and return the process exit code.
pub fn run_with_args(args: &[String]) -> i32 {
    let rest = args.get(2..).unwrap_or(&[]);
    match parse_command(args) {
        Some(Command::Poison) => handle_poison(rest),
        Some(Command::Burn) => handle_burn(rest),
        None => {
            eprintln!("{USAGE}");
            2
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PoisonOptions {
    pub initial_poison: Option<String>,
    pub rounds: Option<String>,
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BurnOptions {
    pub config: Option<PathBuf>,
    pub duration: Option<f64>,
    pub trace: bool,
    pub format: OutputFormat,
}

fn is_option(arg: &str) -> bool {
    arg.starts_with("--")
}

fn option_value<'a>(
    option: &str,
    iter: &mut impl Iterator<Item = &'a String>,
) -> Result<&'a String, CliError> {
    iter.next()
        .filter(|value| !is_option(value))
        .ok_or_else(|| CliError::MissingValue(option.to_string()))
}

fn parse_format(raw: &str) -> Result<OutputFormat, CliError> {
    OutputFormat::parse(raw).ok_or_else(|| CliError::UnknownFormat(raw.to_string()))
}

/// Positional values fill `INITIAL_POISON` then `ROUNDS`; they stay raw text so that
/// non-numeric values get the same treatment as typed answers.
pub fn parse_poison_options(args: &[String]) -> Result<PoisonOptions, CliError> {
    let mut options = PoisonOptions::default();
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--format" => options.format = parse_format(option_value(arg, &mut iter)?)?,
            other if is_option(other) => return Err(CliError::UnknownOption(other.to_string())),
            other => {
                if options.initial_poison.is_none() {
                    options.initial_poison = Some(other.to_string());
                } else if options.rounds.is_none() {
                    options.rounds = Some(other.to_string());
                } else {
                    return Err(CliError::UnexpectedArgument(other.to_string()));
                }
            }
        }
    }
    Ok(options)
}

pub fn parse_burn_options(args: &[String]) -> Result<BurnOptions, CliError> {
    let mut options = BurnOptions::default();
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--config" => options.config = Some(PathBuf::from(option_value(arg, &mut iter)?)),
            "--duration" => {
                let raw = option_value(arg, &mut iter)?;
                let duration = raw.trim().parse::<f64>().map_err(|_| CliError::InvalidValue {
                    option: arg.clone(),
                    value: raw.clone(),
                })?;
                options.duration = Some(duration);
            }
            "--trace" => options.trace = true,
            "--format" => options.format = parse_format(option_value(arg, &mut iter)?)?,
            other if is_option(other) => return Err(CliError::UnknownOption(other.to_string())),
            other => return Err(CliError::UnexpectedArgument(other.to_string())),
        }
    }
    Ok(options)
}

fn read_answer<R: BufRead, W: Write>(
    prompt: &str,
    input: &mut R,
    output: &mut W,
) -> Result<String, InputError> {
    write!(output, "{prompt}")?;
    output.flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line)
}

/// Resolve both poison parameters, prompting for any not given on the command line.
///
/// Each answer is checked as soon as it is read; the rounds prompt is never shown after an
/// invalid poison count.
pub fn read_poison_inputs<R: BufRead, W: Write>(
    options: &PoisonOptions,
    input: &mut R,
    output: &mut W,
) -> Result<(i64, i64), InputError> {
    let raw_poison = match &options.initial_poison {
        Some(raw) => raw.clone(),
        None => read_answer(POISON_PROMPT, input, output)?,
    };
    let initial_poison = parse_count(&raw_poison, "initial poison count")?;

    let raw_rounds = match &options.rounds {
        Some(raw) => raw.clone(),
        None => read_answer(ROUNDS_PROMPT, input, output)?,
    };
    let rounds = parse_count(&raw_rounds, "number of rounds")?;
    Ok((initial_poison, rounds))
}

pub fn render_poison(
    initial_poison: i64,
    rounds: i64,
    format: OutputFormat,
) -> Result<String, ExportError> {
    let records = simulate_poison(initial_poison, rounds);
    match format {
        OutputFormat::Table => Ok(format_poison_summary(&records)),
        OutputFormat::Json => to_json(&PoisonReport {
            initial_poison,
            rounds,
            total_damage: total_damage(&records),
            records: &records,
        }),
        OutputFormat::Csv => poison_to_csv(&records),
    }
}

pub fn render_burn(report: &BurnReport, format: OutputFormat) -> Result<String, ExportError> {
    match format {
        OutputFormat::Table => {
            let mut text = format_burn_summary(report);
            if !report.activations.is_empty() {
                text.push('\n');
                text.push_str(&format_activations(&report.activations));
            }
            Ok(text)
        }
        OutputFormat::Json => to_json(report),
        OutputFormat::Csv => burn_to_csv(report),
    }
}

fn emit(rendered: Result<String, ExportError>) -> i32 {
    match rendered {
        Ok(text) => {
            print!("{text}");
            if !text.ends_with('\n') {
                println!();
            }
            0
        }
        Err(err) => {
            eprintln!("{err}");
            1
        }
    }
}

fn handle_poison(args: &[String]) -> i32 {
    let options = match parse_poison_options(args) {
        Ok(options) => options,
        Err(err) => {
            eprintln!("{err}");
            eprintln!("{POISON_USAGE}");
            return 2;
        }
    };

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();
    let (initial_poison, rounds) = match read_poison_inputs(&options, &mut input, &mut output) {
        Ok(values) => values,
        Err(InputError::NotNumeric { field, value }) => {
            debug!(field, value = %value, "rejected poison input");
            println!("{INVALID_POISON_INPUT}");
            return 1;
        }
        Err(err) => {
            eprintln!("{err}");
            return 1;
        }
    };

    emit(render_poison(initial_poison, rounds, options.format))
}

fn handle_burn(args: &[String]) -> i32 {
    let options = match parse_burn_options(args) {
        Ok(options) => options,
        Err(err) => {
            eprintln!("{err}");
            eprintln!("{BURN_USAGE}");
            return 2;
        }
    };

    let scenario = match &options.config {
        Some(path) => match load_scenario(path) {
            Ok(scenario) => scenario,
            Err(err) => {
                eprintln!("{err}");
                return 1;
            }
        },
        None => BurnScenario::reference(),
    };
    let scenario = match options.duration {
        Some(duration) => {
            if let Err(err) = validate_duration(duration) {
                eprintln!("{err}");
                return 1;
            }
            scenario.with_duration(duration)
        }
        None => scenario,
    };

    let trace_mode = if options.trace {
        TraceMode::Events
    } else {
        TraceMode::Off
    };
    let report = simulate_scenario(&scenario, trace_mode);
    if options.format == OutputFormat::Table {
        println!();
    }
    emit(render_burn(&report, options.format))
}
