//! Check command - conform JSON documents against a spec definition.

use std::path::{Path, PathBuf};

use colored::Colorize;
use conform::{ConformReport, Engine};
use serde_json::Value;

pub fn run(
    spec_path: PathBuf,
    inputs: Vec<PathBuf>,
    ndjson: bool,
    json_output: bool,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let engine = Engine::new();
    let spec = engine.load_spec(&spec_path)?;

    let mut documents = Vec::new();
    let mut origins = Vec::new();
    for input in &inputs {
        let docs = read_documents(input, ndjson)?;
        origins.extend((0..docs.len()).map(|i| (input.clone(), i + 1)));
        documents.extend(docs);
    }

    let report = engine.check_all(&spec, &documents);

    if json_output {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report, &origins, ndjson, verbose);
    }

    if report.is_clean() {
        Ok(())
    } else {
        Err(format!(
            "{} of {} documents failed to conform",
            report.failed, report.documents
        )
        .into())
    }
}

fn read_documents(path: &Path, ndjson: bool) -> Result<Vec<Value>, Box<dyn std::error::Error>> {
    let src = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;

    if !ndjson {
        let doc: Value = serde_json::from_str(&src)
            .map_err(|e| format!("Invalid JSON in {}: {}", path.display(), e))?;
        return Ok(vec![doc]);
    }

    let mut docs = Vec::new();
    for (n, line) in src.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let doc: Value = serde_json::from_str(line)
            .map_err(|e| format!("Invalid JSON in {} line {}: {}", path.display(), n + 1, e))?;
        docs.push(doc);
    }
    Ok(docs)
}

fn print_report(
    report: &ConformReport,
    origins: &[(PathBuf, usize)],
    ndjson: bool,
    verbose: bool,
) {
    println!("{} {}", "Spec:".cyan().bold(), report.spec.white());
    println!();

    for failure in &report.failures {
        let (file, n) = &origins[failure.index];
        let place = location(file, *n, ndjson);
        println!("{} {}", "✗".red().bold(), place.white().bold());
        for violation in &failure.violations {
            let kind = format!("[{}]", violation.kind.label());
            println!("    {} {}", kind.yellow(), violation);
        }
    }

    if verbose && report.passed > 0 {
        let failed: Vec<usize> = report.failures.iter().map(|f| f.index).collect();
        for (index, (file, n)) in origins.iter().enumerate() {
            if !failed.contains(&index) {
                println!("{} {}", "✓".green().bold(), location(file, *n, ndjson));
            }
        }
    }

    if !report.failures.is_empty() || verbose {
        println!();
    }

    let summary = format!(
        "{}/{} documents conform ({:.0}%)",
        report.passed,
        report.documents,
        report.pass_rate() * 100.0
    );
    if report.is_clean() {
        println!("{}", summary.green().bold());
    } else {
        println!("{}", summary.red().bold());
        for (kind, count) in &report.violations_by_kind {
            println!("  {}: {}", kind.label(), count);
        }
    }
}

fn location(file: &Path, n: usize, ndjson: bool) -> String {
    if ndjson {
        format!("{} (document {})", file.display(), n)
    } else {
        file.display().to_string()
    }
}
