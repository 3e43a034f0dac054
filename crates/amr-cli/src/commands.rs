//! Subcommand implementations.

use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use amr_cli::sample::write_sample_dataset;
use amr_core::{normalize_headers, process, validate};
use amr_ingest::read_csv_table;
use amr_model::FilterSelection;
use amr_report::write_all;

use crate::cli::{ReportArgs, SampleArgs, ValidateArgs};
use crate::summary::{print_report, print_validation};

pub fn run_report(args: &ReportArgs) -> Result<()> {
    let span = info_span!("report", input = %args.input.display());
    let _guard = span.enter();
    let start = Instant::now();

    let table = read_csv_table(&args.input)
        .with_context(|| format!("load {}", args.input.display()))?;
    let selection = build_selection(&args.genders, &args.sample_types);
    let result = process(&table, &selection)?;
    info!(
        isolates = result.isolate_count(),
        antibiotics = result.schema.antibiotic_count(),
        duration_ms = start.elapsed().as_millis(),
        "report computed"
    );

    print_report(&result, !args.no_distribution, !args.no_profiles);

    if let Some(output_dir) = &args.output_dir {
        let dataset = args
            .input
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| args.input.display().to_string());
        let paths = write_all(output_dir, &dataset, &result)?;
        println!("Exports written to {}:", output_dir.display());
        for path in [
            &paths.wide,
            &paths.long,
            &paths.resistance_summary,
            &paths.mdr_profiles,
            &paths.high_risk,
            &paths.narrative,
            &paths.json_report,
        ] {
            println!("- {}", path.display());
        }
    }
    Ok(())
}

pub fn run_validate(args: &ValidateArgs) -> Result<()> {
    let table = read_csv_table(&args.input)
        .with_context(|| format!("load {}", args.input.display()))?;
    let normalized = normalize_headers(&table);
    let schema = validate(&normalized)?;
    print_validation(&schema, normalized.rows.len());
    Ok(())
}

pub fn run_sample(args: &SampleArgs) -> Result<()> {
    write_sample_dataset(&args.out)?;
    println!("Sample dataset written to {}", args.out.display());
    Ok(())
}

fn build_selection(genders: &[String], sample_types: &[String]) -> FilterSelection {
    let mut selection = FilterSelection::all();
    if !genders.is_empty() {
        selection = selection.with_genders(genders);
    }
    if !sample_types.is_empty() {
        selection = selection.with_sample_types(sample_types);
    }
    selection
}
