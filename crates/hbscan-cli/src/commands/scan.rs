use super::load_structure;
use crate::cli::{OutputFormat, ScanArgs};
use crate::config::PartialScanConfig;
use crate::error::Result;
use crate::output;
use crate::utils::progress::CliProgressHandler;
use hbscan::engine::progress::ProgressReporter;
use hbscan::workflows;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use tracing::info;

pub fn run(args: ScanArgs, show_progress: bool) -> Result<()> {
    info!("Merging configuration from file and CLI arguments...");
    let config =
        PartialScanConfig::load(&args.classify)?.merge_with_cli(&args.classify, &args.zones)?;

    let (system, _) = load_structure(&args.input)?;

    let progress_handler = if show_progress {
        CliProgressHandler::new()
    } else {
        CliProgressHandler::hidden()
    };
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    info!("Invoking the core scan workflow...");
    let report = workflows::scan::run(&system, &config, &reporter)?;

    eprintln!(
        "Scanned {} residue(s): {} hydrogen-bonded pair(s) found.",
        report.residues_scanned,
        report.contacts.len()
    );

    let mut writer: Box<dyn Write> = match &args.output {
        Some(path) => {
            info!("Writing contacts to {:?}", path);
            Box::new(BufWriter::new(File::create(path)?))
        }
        None => Box::new(io::stdout().lock()),
    };

    match args.format {
        OutputFormat::Text => output::write_text(&mut writer, &system, &report.contacts)?,
        OutputFormat::Csv => output::write_csv(&mut writer, &system, &report.contacts)?,
    }
    writer.flush()?;

    if let Some(path) = &args.output {
        eprintln!("✓ Contacts written to: {}", path.display());
    }
    Ok(())
}
