use super::load_structure;
use crate::cli::PairArgs;
use crate::config::PartialScanConfig;
use crate::error::Result;
use crate::output;
use hbscan::core::models::system::MolecularSystem;
use hbscan::workflows;
use tracing::info;

pub fn run(args: PairArgs) -> Result<()> {
    let (system, _) = load_structure(&args.input)?;
    println!("{}", describe_pair(&system, &args)?);
    Ok(())
}

fn describe_pair(system: &MolecularSystem, args: &PairArgs) -> Result<String> {
    let config = PartialScanConfig::load(&args.classify)?.merge_with_cli(&args.classify, &[])?;
    info!(
        first = %args.first,
        second = %args.second,
        mode = %config.mode.kind(),
        roles = %config.mode.roles(),
        "Classifying residue pair."
    );

    let contact = workflows::scan::run_pair(system, &args.first, &args.second, &config)?;
    Ok(match contact {
        Some(contact) => output::format_contact(system, &contact),
        None => format!("{}  not HBonded to {}", args.first, args.second),
    })
}
