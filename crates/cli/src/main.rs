//! Command-line front end for the pre-screening engine.
//!
//! Thin I/O glue only: reads plain data, calls the library, prints what
//! comes back.

use anyhow::{bail, Context, Result};
use chrono::Utc;
use clap::{Parser, Subcommand};
use prescreen_catalog::Catalog;
use prescreen_core::{
    assess_conditions, generate_follow_up_questions, render_text_report, FollowUpAnswer,
    PainSeverity, PatientDetails, SymptomDuration,
};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::io::Read;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "prescreen")]
#[command(about = "Symptom pre-screening triage CLI")]
struct Cli {
    /// Load the catalog from a YAML file instead of the built-in data
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all symptoms grouped by category
    Symptoms,
    /// Generate follow-up questions for a symptom selection
    Questions {
        /// Comma-separated symptom codes, e.g. s_98,s_107,s_1986
        symptoms: String,
    },
    /// Run an assessment from a JSON request
    Assess {
        /// Path to the request file; reads stdin when omitted
        input: Option<PathBuf>,
        /// Render a plain-text report instead of JSON (requires the
        /// request to carry a patient block)
        #[arg(long)]
        text: bool,
    },
}

/// JSON request shape for the `assess` subcommand.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct AssessRequest {
    symptoms: Vec<String>,
    #[serde(default)]
    answers: BTreeMap<String, FollowUpAnswer>,
    pain_severity: PainSeverity,
    #[serde(default)]
    duration: SymptomDuration,
    #[serde(default)]
    emergency: bool,
    #[serde(default)]
    patient: Option<PatientBlock>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct PatientBlock {
    age: u32,
    sex: String,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let catalog = load_catalog(cli.catalog.as_deref())?;

    match cli.command {
        Commands::Symptoms => {
            for (category, symptoms) in catalog.symptoms_by_category() {
                println!("{category}");
                for symptom in symptoms {
                    let region = symptom.region.map(|r| r.name()).unwrap_or("-");
                    println!("  {:<8} {} ({})", symptom.id, symptom.name, region);
                }
            }
        }
        Commands::Questions { symptoms } => {
            let selected: Vec<String> = symptoms
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect();
            let questions = generate_follow_up_questions(&catalog, &selected);
            if questions.is_empty() {
                println!("No follow-up questions for this selection.");
            } else {
                for (idx, question) in questions.iter().enumerate() {
                    println!("{}. {} [{}]", idx + 1, question.question, question.symptom_id);
                }
            }
        }
        Commands::Assess { input, text } => {
            let request = read_request(input.as_deref())?;
            let result = assess_conditions(
                &request.symptoms,
                &request.answers,
                request.pain_severity,
                request.duration,
                request.emergency,
            );
            if text {
                let Some(patient) = request.patient else {
                    bail!("a text report requires a 'patient' block with age and sex");
                };
                let details = PatientDetails {
                    age: patient.age,
                    sex: patient.sex,
                    pain_severity: request.pain_severity,
                    duration: request.duration,
                };
                println!(
                    "{}",
                    render_text_report(&result, &details, &catalog, Utc::now())
                );
            } else {
                println!("{}", serde_json::to_string_pretty(&result)?);
            }
        }
    }

    Ok(())
}

fn load_catalog(path: Option<&std::path::Path>) -> Result<Catalog> {
    match path {
        Some(path) => Catalog::from_yaml_file(path)
            .with_context(|| format!("failed to load catalog from {}", path.display())),
        None => Ok(Catalog::builtin()),
    }
}

fn read_request(path: Option<&std::path::Path>) -> Result<AssessRequest> {
    let raw = match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read request from {}", path.display()))?,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read request from stdin")?;
            buffer
        }
    };
    serde_json::from_str(&raw).context("failed to parse assessment request")
}
