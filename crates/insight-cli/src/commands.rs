use std::io::{self, IsTerminal};
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{debug, info, info_span};

use insight_core::{AnalysisEngine, Dataset};
use insight_ingest::{LoadOptions, load_dataset_frame};
use insight_model::AnalysisConfig;
use insight_cli::settings::{ConfigOverrides, apply_overrides, load_config};

use crate::cli::{AnalyzeArgs, OutputFormatArg};
use crate::summary::render_summary;
use crate::types::AnalyzeResult;

pub fn run_analyze(args: &AnalyzeArgs) -> Result<AnalyzeResult> {
    let span = info_span!("analyze_file", file = %args.file.display());
    let _guard = span.enter();

    let overrides = ConfigOverrides {
        sample_threshold: args.sample_threshold,
        sample_size: args.sample_size,
        seed: args.seed,
        top_correlations: args.top_correlations,
    };
    let config = apply_overrides(load_config(args.config.as_deref())?, &overrides);
    let engine = AnalysisEngine::new(config).context("configure analysis engine")?;
    debug!(
        thresholds_version = engine.config().version,
        "configured analysis engine"
    );

    let load_start = Instant::now();
    let frame = load_dataset_frame(&args.file, &LoadOptions::default())
        .with_context(|| format!("load {}", args.file.display()))?;
    info!(
        rows = frame.height(),
        columns = frame.width(),
        duration_ms = load_start.elapsed().as_millis(),
        "loaded dataset"
    );

    let dataset = Dataset::from(frame);
    let bundle = engine.analyze(&dataset);

    let report = match args.format {
        OutputFormatArg::Table => {
            let plain = args.output.is_some() || !io::stdout().is_terminal();
            render_summary(&bundle, &args.file, plain)
        }
        OutputFormatArg::Json => {
            serde_json::to_string_pretty(&bundle).context("serialize analysis bundle")? + "\n"
        }
        OutputFormatArg::Narrative => {
            serde_json::to_string_pretty(&bundle.narrative_inputs())
                .context("serialize narrative inputs")?
                + "\n"
        }
        OutputFormatArg::Charts => {
            let charts = engine
                .chart_inputs(&dataset, &bundle)
                .context("prepare chart inputs")?;
            serde_json::to_string_pretty(&charts).context("serialize chart inputs")? + "\n"
        }
    };
    write_report(&report, args.output.as_deref())?;

    Ok(AnalyzeResult {
        file: args.file.clone(),
        status: bundle.status,
        output: args.output.clone(),
    })
}

pub fn run_thresholds() -> Result<()> {
    let json = serde_json::to_string_pretty(&AnalysisConfig::default())
        .context("serialize default thresholds")?;
    println!("{json}");
    Ok(())
}

fn write_report(report: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, report)
                .with_context(|| format!("write report {}", path.display()))?;
            info!(path = %path.display(), "wrote report");
        }
        None => print!("{report}"),
    }
    Ok(())
}
