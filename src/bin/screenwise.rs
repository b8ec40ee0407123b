//! Screenwise CLI - Command-line front-end for the estimation engine
//!
//! Commands:
//! - predict: Estimate screen time for one input or an NDJSON batch
//! - validate: Check inputs against the engine's range constraints
//! - schema: Print input/output schema information
//!
//! The engine itself stays pure; this binary owns all I/O and rendering.

use clap::{Parser, Subcommand, ValueEnum};
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use screenwise::report::ReportEncoder;
use screenwise::{estimate_detailed, DetailedPrediction, PredictionInput, ENGINE_VERSION};

/// Screenwise - Deterministic screen-time estimation for children
#[derive(Parser)]
#[command(name = "screenwise")]
#[command(version = ENGINE_VERSION)]
#[command(about = "Estimate a child's daily screen time from habit factors", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Estimate screen time for one input or an NDJSON batch
    Predict {
        /// Input file path (use - for stdin)
        #[arg(short, long, default_value = "-")]
        input: PathBuf,

        /// Input format
        #[arg(long, default_value = "json")]
        input_format: InputFormat,

        /// Output format
        #[arg(long, default_value = "text")]
        output_format: OutputFormat,

        /// Wrap each prediction in a provenance-stamped report payload
        #[arg(long)]
        report: bool,
    },

    /// Check inputs against the engine's range constraints
    Validate {
        /// Input file path (use - for stdin)
        #[arg(short, long, default_value = "-")]
        input: PathBuf,

        /// Input format
        #[arg(long, default_value = "json")]
        input_format: InputFormat,

        /// Output validation report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print schema information
    Schema {
        /// Schema to print (input or output)
        #[arg(value_enum)]
        schema_type: SchemaType,
    },
}

#[derive(Clone, ValueEnum)]
enum InputFormat {
    /// Single JSON object
    Json,
    /// Newline-delimited JSON (one input per line)
    Ndjson,
}

#[derive(Clone, ValueEnum)]
enum OutputFormat {
    /// Human-readable summary
    Text,
    /// Compact JSON
    Json,
    /// Pretty-printed JSON
    JsonPretty,
    /// Newline-delimited JSON (one record per input)
    Ndjson,
}

#[derive(Clone, ValueEnum)]
enum SchemaType {
    /// Input record fields and valid values
    Input,
    /// Prediction result fields
    Output,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!(
                "{}",
                serde_json::to_string(&CliErrorReport::from(e))
                    .unwrap_or_else(|_| "Unknown error".to_string())
            );
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Commands::Predict {
            input,
            input_format,
            output_format,
            report,
        } => cmd_predict(&input, input_format, output_format, report),

        Commands::Validate {
            input,
            input_format,
            json,
        } => cmd_validate(&input, input_format, json),

        Commands::Schema { schema_type } => {
            cmd_schema(schema_type);
            Ok(())
        }
    }
}

fn cmd_predict(
    input: &Path,
    input_format: InputFormat,
    output_format: OutputFormat,
    report: bool,
) -> Result<(), CliError> {
    let inputs = read_inputs(input, &input_format)?;

    if inputs.is_empty() {
        return Err(CliError::NoInputs);
    }

    let encoder = ReportEncoder::new();
    let mut rendered: Vec<String> = Vec::with_capacity(inputs.len());

    for record in &inputs {
        if report {
            let payload = encoder.encode(record)?;
            rendered.push(match output_format {
                OutputFormat::Text | OutputFormat::JsonPretty => {
                    serde_json::to_string_pretty(&payload)?
                }
                OutputFormat::Json | OutputFormat::Ndjson => serde_json::to_string(&payload)?,
            });
        } else {
            let detailed = estimate_detailed(record)?;
            rendered.push(match output_format {
                OutputFormat::Text => format_text(&detailed),
                OutputFormat::Json | OutputFormat::Ndjson => {
                    serde_json::to_string(&detailed.result)?
                }
                OutputFormat::JsonPretty => serde_json::to_string_pretty(&detailed.result)?,
            });
        }
    }

    println!("{}", rendered.join("\n"));
    Ok(())
}

fn cmd_validate(input: &Path, input_format: InputFormat, json: bool) -> Result<(), CliError> {
    let inputs = read_inputs(input, &input_format)?;

    let mut errors: Vec<ValidationErrorDetail> = Vec::new();
    for (index, record) in inputs.iter().enumerate() {
        if let Err(e) = screenwise::validator::validate(record) {
            errors.push(ValidationErrorDetail {
                index,
                violations: e.violations,
            });
        }
    }

    let rep = ValidationReport {
        total_inputs: inputs.len(),
        valid_inputs: inputs.len() - errors.len(),
        invalid_inputs: errors.len(),
        errors,
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&rep)?);
    } else {
        println!("Validation Report");
        println!("=================");
        println!("Total inputs:   {}", rep.total_inputs);
        println!("Valid inputs:   {}", rep.valid_inputs);
        println!("Invalid inputs: {}", rep.invalid_inputs);

        if !rep.errors.is_empty() {
            println!("\nErrors:");
            for err in &rep.errors {
                for violation in &err.violations {
                    println!("  - Input {}: {}", err.index, violation);
                }
            }
        }
    }

    if rep.invalid_inputs > 0 {
        Err(CliError::ValidationFailed(rep.invalid_inputs))
    } else {
        Ok(())
    }
}

fn cmd_schema(schema_type: SchemaType) {
    match schema_type {
        SchemaType::Input => {
            println!("Input Schema (camelCase JSON object)");
            println!();
            println!("  childAge           integer, 3-18");
            println!("  dayType            weekday | weekend | holiday");
            println!("  primaryActivity    school | gaming | creative | reading |");
            println!("                     social | outdoor | sports");
            println!("  previousScreenTime number, 0-24 (hours)");
            println!("  parentalControl    strict | moderate | relaxed | none");
            println!("  deviceAccess       limited | supervised | unrestricted");
            println!();
            println!("Unrecognized categorical values are accepted and treated as");
            println!("neutral (modifier 1.0); numeric fields outside their range fail");
            println!("validation with every violation reported.");
        }
        SchemaType::Output => {
            println!("Output Schema (camelCase JSON object)");
            println!();
            println!("  hours              integer >= 0");
            println!("  minutes            integer, 0-59");
            println!("  confidencePercent  integer, 60-95");
            println!("  insightText        non-empty string");
            println!();
            println!("With --report, each prediction is wrapped in a payload carrying");
            println!("report_version, producer metadata, computed_at_utc, the echoed");
            println!("input, and the per-dimension factor breakdown.");
        }
    }
}

// Helper functions

fn read_inputs(input: &Path, format: &InputFormat) -> Result<Vec<PredictionInput>, CliError> {
    let data = if input.to_string_lossy() == "-" {
        if atty::is(atty::Stream::Stdin) {
            eprintln!("reading input from terminal; pipe JSON or finish with Ctrl-D");
        }
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        fs::read_to_string(input)?
    };

    match format {
        InputFormat::Json => {
            let record: PredictionInput = serde_json::from_str(data.trim())?;
            Ok(vec![record])
        }
        InputFormat::Ndjson => {
            let mut records = Vec::new();
            for line in data.lines() {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                records.push(serde_json::from_str(trimmed)?);
            }
            Ok(records)
        }
    }
}

fn format_text(detailed: &DetailedPrediction) -> String {
    let result = &detailed.result;
    format!(
        "Estimated screen time: {} h {:02} min (confidence {}%)\n{}",
        result.hours, result.minutes, result.confidence_percent, result.insight_text
    )
}

// Error types

#[derive(Debug)]
enum CliError {
    Io(io::Error),
    Json(serde_json::Error),
    Validation(screenwise::ValidationError),
    NoInputs,
    ValidationFailed(usize),
}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        CliError::Io(e)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Json(e)
    }
}

impl From<screenwise::ValidationError> for CliError {
    fn from(e: screenwise::ValidationError) -> Self {
        CliError::Validation(e)
    }
}

#[derive(serde::Serialize)]
struct CliErrorReport {
    code: String,
    message: String,
    hint: Option<String>,
}

impl From<CliError> for CliErrorReport {
    fn from(e: CliError) -> Self {
        match e {
            CliError::Io(e) => CliErrorReport {
                code: "IO_ERROR".to_string(),
                message: e.to_string(),
                hint: Some("Check file paths and permissions".to_string()),
            },
            CliError::Json(e) => CliErrorReport {
                code: "JSON_ERROR".to_string(),
                message: e.to_string(),
                hint: Some("Check JSON syntax and field names (camelCase)".to_string()),
            },
            CliError::Validation(e) => CliErrorReport {
                code: "VALIDATION_ERROR".to_string(),
                message: e.to_string(),
                hint: Some("Run 'screenwise validate' for a full report".to_string()),
            },
            CliError::NoInputs => CliErrorReport {
                code: "NO_INPUTS".to_string(),
                message: "No inputs found".to_string(),
                hint: Some("Ensure the input file is not empty".to_string()),
            },
            CliError::ValidationFailed(count) => CliErrorReport {
                code: "VALIDATION_FAILED".to_string(),
                message: format!("{count} inputs failed validation"),
                hint: Some("Fix the reported range violations and retry".to_string()),
            },
        }
    }
}

// Report types

#[derive(serde::Serialize)]
struct ValidationReport {
    total_inputs: usize,
    valid_inputs: usize,
    invalid_inputs: usize,
    errors: Vec<ValidationErrorDetail>,
}

#[derive(serde::Serialize)]
struct ValidationErrorDetail {
    index: usize,
    violations: Vec<String>,
}
