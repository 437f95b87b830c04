//! Command-line interface
//!
//! `fieldlogic eval`, `validate`, `check` and `lint`. Commands write their
//! result to the given writer; the binary supplies stdout.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use fieldlogic_application::{FormSchema, FormState};
use fieldlogic_domain::{FieldSubject, FieldValue, SubjectKind};
use fieldlogic_expr::FieldState;
use fieldlogic_infrastructure::AppConfig;
use std::collections::HashMap;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Command line interface for fieldlogic
#[derive(Parser, Debug)]
#[command(name = "fieldlogic")]
#[command(about = "Conditional form logic and rule-chain validation")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Evaluate a conditional expression and print `true` or `false`
    Eval {
        /// Expression, e.g. "fields.age >= 18 && value === 'yes'"
        expression: String,

        /// Current value of the subject field (JSON; bare text is a string)
        #[arg(long)]
        value: Option<String>,

        /// Other fields as a JSON object
        #[arg(long)]
        fields: Option<String>,

        /// State flags as a JSON object, e.g. {"required": true}
        #[arg(long)]
        state: Option<String>,
    },

    /// Validate one value against a rule chain and print the outcome as JSON
    Validate {
        /// Value to validate (JSON; bare text is a string)
        value: String,

        /// Rule chain, e.g. "required,min:3"
        chain: String,

        /// Input type of the subject (text, number, checkbox, radio, ...)
        #[arg(long, default_value = "text")]
        kind: String,

        /// Mark a checkbox subject as checked
        #[arg(long)]
        checked: bool,

        /// Sibling fields as a JSON object
        #[arg(long)]
        fields: Option<String>,
    },

    /// Evaluate a whole form and print the report as JSON
    Check {
        /// Form schema (.json or .toml)
        #[arg(long)]
        schema: PathBuf,

        /// Form state (JSON with `values` and `checked`)
        #[arg(long)]
        state: PathBuf,
    },

    /// Report unknown rules and malformed conditions in a schema
    Lint {
        /// Form schema (.json or .toml)
        #[arg(long)]
        schema: PathBuf,
    },
}

/// Run `command`, writing its result to `out`
///
/// Returns `false` when `check` finds an invalid field or `lint` finds a
/// problem; the binary exits with status 1 in that case.
pub fn execute(command: &Command, config: &AppConfig, out: &mut impl Write) -> Result<bool> {
    match command {
        Command::Eval {
            expression,
            value,
            fields,
            state,
        } => {
            let value = value.as_deref().map(parse_value).unwrap_or_default();
            let fields = parse_fields(fields.as_deref())?;
            let state: FieldState = match state {
                Some(json) => serde_json::from_str(json).context("Invalid --state JSON")?,
                None => FieldState::default(),
            };
            let result = crate::expression_engine(config).evaluate(expression, &value, &state, &fields);
            writeln!(out, "{result}")?;
            Ok(true)
        }
        Command::Validate {
            value,
            chain,
            kind,
            checked,
            fields,
        } => {
            let evaluator = crate::form_evaluator(config);
            if config.rules.strict_unknown_rules {
                evaluator.rule_engine().check_chain(chain)?;
            }
            let subject = FieldSubject::new(SubjectKind::from_input_type(kind))
                .with_checked(*checked)
                .with_fields(parse_fields(fields.as_deref())?);
            let outcome = evaluator
                .rule_engine()
                .validate(&parse_value(value), chain, &subject);
            writeln!(out, "{}", serde_json::to_string(&outcome)?)?;
            Ok(true)
        }
        Command::Check { schema, state } => {
            let evaluator = crate::form_evaluator(config);
            let schema = load_schema(schema)?;
            evaluator.prepare(&schema)?;
            let text = std::fs::read_to_string(state)
                .with_context(|| format!("Failed to read state file {}", state.display()))?;
            let state = FormState::from_json(&text)?;
            let report = evaluator.evaluate(&schema, &state);
            writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
            Ok(report.is_valid())
        }
        Command::Lint { schema } => {
            let schema = load_schema(schema)?;
            schema.check()?;
            let findings = crate::form_evaluator(config).lint(&schema);
            writeln!(out, "{}", serde_json::to_string_pretty(&findings)?)?;
            Ok(findings.is_empty())
        }
    }
}

fn load_schema(path: &Path) -> Result<FormSchema> {
    debug!(path = %path.display(), "Loading schema");
    FormSchema::from_file(path).with_context(|| format!("Failed to load schema {}", path.display()))
}

/// JSON when it parses, otherwise the raw text as a string
fn parse_value(text: &str) -> FieldValue {
    serde_json::from_str::<FieldValue>(text).unwrap_or_else(|_| FieldValue::from(text))
}

fn parse_fields(json: Option<&str>) -> Result<HashMap<String, FieldValue>> {
    match json {
        Some(json) => serde_json::from_str(json).context("Invalid --fields JSON"),
        None => Ok(HashMap::new()),
    }
}
