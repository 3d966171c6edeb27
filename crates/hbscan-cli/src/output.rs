use crate::error::Result;
use hbscan::core::models::ids::{AtomId, ResidueId};
use hbscan::core::models::residue::{NO_INSERTION_CODE, Residue, ResidueLabel};
use hbscan::core::models::system::MolecularSystem;
use hbscan::engine::tasks::hbond_scan::HBondContact;
use serde::Serialize;
use std::fmt;
use std::io::Write;

/// Chain, label and name of a residue.
struct ResidueInfo<'a> {
    chain: char,
    label: ResidueLabel,
    name: &'a str,
}

impl ResidueInfo<'_> {
    fn insertion(&self) -> String {
        match self.label.insertion_code {
            NO_INSERTION_CODE => String::new(),
            code => code.to_string(),
        }
    }
}

impl fmt::Display for ResidueInfo<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.chain, self.label)
    }
}

fn residue_info(system: &MolecularSystem, residue_id: ResidueId) -> ResidueInfo<'_> {
    let residue = system.residue(residue_id);
    let chain = residue.and_then(|r| system.chain(r.chain_id));
    ResidueInfo {
        chain: chain.map_or('?', |c| c.id),
        label: residue.map_or(
            ResidueLabel {
                residue_number: 0,
                insertion_code: NO_INSERTION_CODE,
            },
            Residue::label,
        ),
        name: residue.map_or("", |r| r.name.as_str()),
    }
}

fn atom_name(system: &MolecularSystem, atom_id: Option<AtomId>) -> &str {
    atom_id
        .and_then(|id| system.atom(id))
        .map_or("", |atom| atom.name.as_str())
}

/// One line of text output, e.g. `A12  HBonded to A45  [bb] N-H...O`.
pub fn format_contact(system: &MolecularSystem, contact: &HBondContact) -> String {
    let first = residue_info(system, contact.residue1);
    let second = residue_info(system, contact.residue2);
    let bond = &contact.bond;

    let donor = atom_name(system, Some(bond.donor));
    let acceptor = atom_name(system, Some(bond.acceptor));
    let atoms = match bond.hydrogen {
        Some(_) => format!("{}-{}...{}", donor, atom_name(system, bond.hydrogen), acceptor),
        None => format!("{}...{}", donor, acceptor),
    };

    format!(
        "{}  HBonded to {}  [{}] {}",
        first,
        second,
        bond.roles,
        atoms
    )
}

pub fn write_text<W: Write>(
    writer: &mut W,
    system: &MolecularSystem,
    contacts: &[HBondContact],
) -> Result<()> {
    for contact in contacts {
        writeln!(writer, "{}", format_contact(system, contact))?;
    }
    Ok(())
}

#[derive(Serialize)]
struct ContactRecord<'a> {
    chain1: char,
    resnum1: isize,
    insert1: String,
    resname1: &'a str,
    chain2: char,
    resnum2: isize,
    insert2: String,
    resname2: &'a str,
    roles: String,
    donor: &'a str,
    hydrogen: &'a str,
    acceptor: &'a str,
    antecedent: &'a str,
}

pub fn write_csv<W: Write>(
    writer: W,
    system: &MolecularSystem,
    contacts: &[HBondContact],
) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for contact in contacts {
        let first = residue_info(system, contact.residue1);
        let second = residue_info(system, contact.residue2);
        let bond = &contact.bond;
        csv_writer.serialize(ContactRecord {
            chain1: first.chain,
            resnum1: first.label.residue_number,
            insert1: first.insertion(),
            resname1: first.name,
            chain2: second.chain,
            resnum2: second.label.residue_number,
            insert2: second.insertion(),
            resname2: second.name,
            roles: bond.roles.to_string(),
            donor: atom_name(system, Some(bond.donor)),
            hydrogen: atom_name(system, bond.hydrogen),
            acceptor: atom_name(system, Some(bond.acceptor)),
            antecedent: atom_name(system, bond.antecedent),
        })?;
    }
    // A header row is only emitted with the first record.
    if contacts.is_empty() {
        csv_writer.write_record([
            "chain1",
            "resnum1",
            "insert1",
            "resname1",
            "chain2",
            "resnum2",
            "insert2",
            "resname2",
            "roles",
            "donor",
            "hydrogen",
            "acceptor",
            "antecedent",
        ])?;
    }
    csv_writer.flush()?;
    Ok(())
}
