use std::time::Instant;

use anyhow::{Result, bail};
use tracing::{info, info_span};

use survey_cli::config::{PipelineConfig, default_city_data_path, default_output_path};
use survey_cli::pipeline::{load_city_index, missing_fields, normalize_rows, read_survey};
use survey_model::{Coordinates, format_numeric};
use survey_normalize::{
    LocationResolver, RecordNormalizer, SalaryBounds, detect_ratio, parse_salary,
};
use survey_output::{JsonLinesSink, MemorySink, RecordSink};

use crate::cli::{LocationArgs, RatioArgs, RunArgs, SalaryArgs};
use crate::summary::print_details;
use crate::types::RunResult;

pub fn run_survey(args: &RunArgs) -> Result<RunResult> {
    let run_span = info_span!("run", survey = %args.survey.display());
    let _run_guard = run_span.enter();
    let run_start = Instant::now();

    let config = PipelineConfig::load_or_default(args.config.as_deref())?;
    let cities = args.cities.clone().unwrap_or_else(default_city_data_path);
    let output = if args.dry_run {
        None
    } else {
        Some(
            args.output
                .clone()
                .unwrap_or_else(|| default_output_path(&args.survey)),
        )
    };

    let index = load_city_index(&cities)?;
    let table = read_survey(&args.survey, &config.fields)?;
    let normalizer = RecordNormalizer::new(&config.fields, &index, config.salary);

    let mut sink: Box<dyn RecordSink> = match &output {
        Some(path) => Box::new(JsonLinesSink::create(path)?),
        None => Box::new(MemorySink::new()),
    };
    let summary = normalize_rows(&table.rows, &normalizer, sink.as_mut(), args.limit)?;

    info!(
        records = summary.records_written,
        dry_run = args.dry_run,
        duration_ms = run_start.elapsed().as_millis(),
        "run complete"
    );
    Ok(RunResult {
        survey: args.survey.clone(),
        cities,
        output,
        missing_fields: missing_fields(&table, &config.fields),
        summary,
    })
}

pub fn run_salary(args: &SalaryArgs) -> Result<()> {
    if args.min > args.max {
        bail!("--min {} is above --max {}", args.min, args.max);
    }
    let bounds = SalaryBounds::new(args.min, args.max);
    let parse = parse_salary(&args.text, &bounds);
    print_details(vec![
        ("Input", args.text.clone()),
        ("Amount", format_numeric(parse.amount)),
        ("Period", parse.period.as_str().to_string()),
        ("Hourly", format!("{:.4}", parse.hourly)),
        ("Salary", format_numeric(parse.value)),
    ]);
    Ok(())
}

pub fn run_ratio(args: &RatioArgs) -> Result<()> {
    let (rule, raw, ratio) = match detect_ratio(&args.text) {
        Some(found) => (
            found.rule.as_str(),
            format_numeric(found.raw),
            found.patients_per_nurse(),
        ),
        None => ("none", "-".to_string(), 0.0),
    };
    print_details(vec![
        ("Input", args.text.clone()),
        ("Rule", rule.to_string()),
        ("Raw", raw),
        ("Patients per nurse", format_numeric(ratio)),
    ]);
    Ok(())
}

pub fn run_location(args: &LocationArgs) -> Result<()> {
    let cities = args.cities.clone().unwrap_or_else(default_city_data_path);
    let index = load_city_index(&cities)?;
    let resolver = LocationResolver::new(&index);
    let (strategy, coordinates) = match resolver.resolve_with_strategy(&args.text) {
        Some((strategy, coordinates)) => (strategy.as_str(), coordinates),
        None => ("unresolved", Coordinates::UNKNOWN),
    };
    print_details(vec![
        ("Input", args.text.clone()),
        ("Strategy", strategy.to_string()),
        ("Latitude", format_numeric(coordinates.lat)),
        ("Longitude", format_numeric(coordinates.lng)),
    ]);
    Ok(())
}
