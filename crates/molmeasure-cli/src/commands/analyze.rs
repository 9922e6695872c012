use crate::cli::AnalyzeArgs;
use crate::config;
use crate::error::Result;
use molmeasure::workflows::analyze::{self, AnalysisReport, AngleUnit};
use std::path::Path;
use tracing::info;

pub fn run(args: AnalyzeArgs) -> Result<()> {
    let analysis_config = config::build_analysis_config(&args)?;
    let report = analyze::analyze_file(&args.input, &analysis_config)?;

    print_summary(&report);

    if let Some(output) = &args.output {
        write_report(&report, output)?;
        info!("Report written to {:?}", output);
    }
    Ok(())
}

fn print_summary(report: &AnalysisReport) {
    println!("Atoms:  {}", report.num_atoms);
    println!(
        "Bonds:  {} (window {:.3}-{:.3} Å)",
        report.summary.count, report.min_bond, report.max_bond
    );
    if let (Some(mean), Some(min), Some(max)) =
        (report.summary.mean, report.summary.min, report.summary.max)
    {
        println!("Length: mean {:.4} Å, min {:.4} Å, max {:.4} Å", mean, min, max);
    }
    if !report.angles.is_empty() {
        let unit = match report.angle_unit {
            AngleUnit::Degrees => "deg",
            AngleUnit::Radians => "rad",
        };
        println!("Angles: {} ({})", report.angles.len(), unit);
    }
}

pub(crate) fn write_report(report: &AnalysisReport, path: &Path) -> Result<()> {
    let content = toml::to_string_pretty(report)?;
    std::fs::write(path, content)?;
    Ok(())
}
