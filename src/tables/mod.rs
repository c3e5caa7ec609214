//! Table loading pipeline.
//!
//! Stages run in dependency order: opcodes, then atoms, then BIFs (BIF
//! loading registers its atoms into the same table). Every table is built
//! once from the files on disk; nothing is re-read or updated afterwards.
pub mod atoms;
pub mod bifs;
pub mod opcodes;
pub mod source;

use std::collections::BTreeSet;
use std::path::Path;

use tracing::info;

use crate::error::Result;
use crate::model::{Atom, Bif};
use crate::profile::VersionProfile;

pub use atoms::AtomTable;
pub use bifs::BifTable;
pub use opcodes::OpcodeTable;
pub use source::SourceTable;

/// Finished tables for one generation run.
#[derive(Debug)]
pub struct TableLoader {
    profile: VersionProfile,
    opcodes: OpcodeTable,
    atoms: AtomTable,
    bifs: BifTable,
    implemented_ops: BTreeSet<String>,
}

impl TableLoader {
    /// Load every table named by `profile`, resolving its paths against
    /// `table_dir`. The first missing file or malformed line aborts.
    pub fn load(profile: VersionProfile, table_dir: &Path) -> Result<Self> {
        let genop = SourceTable::read(table_dir.join(&profile.genop_tab))?;
        let atoms_src = SourceTable::read(table_dir.join(&profile.atoms_tab))?;
        let bif_src = SourceTable::read(table_dir.join(&profile.bif_tab))?;
        let implemented = SourceTable::read(table_dir.join(&profile.implemented_ops_tab))?;

        Self::from_sources(profile, &genop, &atoms_src, &bif_src, &implemented)
    }

    /// Same as `load` for tables already in memory.
    pub fn from_sources(
        profile: VersionProfile,
        genop: &SourceTable,
        atoms_src: &SourceTable,
        bif_src: &SourceTable,
        implemented: &SourceTable,
    ) -> Result<Self> {
        let opcodes = OpcodeTable::load(genop, profile.opcode_range())?;

        let mut atoms = AtomTable::new();
        let bifs = BifTable::load(&profile, atoms_src, bif_src, &mut atoms)?;

        // Passed through to the generators as-is; not checked against
        // the opcode table.
        let implemented_ops = implemented
            .data_lines()
            .map(|(_, line)| line.to_string())
            .collect();

        info!(
            profile = %profile.name,
            opcodes = opcodes.len(),
            atoms = atoms.len(),
            bifs = bifs.len(),
            "tables loaded"
        );

        Ok(Self {
            profile,
            opcodes,
            atoms,
            bifs,
            implemented_ops,
        })
    }

    pub fn profile(&self) -> &VersionProfile {
        &self.profile
    }

    pub fn opcodes(&self) -> &OpcodeTable {
        &self.opcodes
    }

    pub fn atom_table(&self) -> &AtomTable {
        &self.atoms
    }

    /// Atoms in id order; `atoms()[id - 1].id == id`.
    pub fn atoms(&self) -> &[Atom] {
        self.atoms.as_slice()
    }

    pub fn bifs(&self) -> &[Bif] {
        self.bifs.as_slice()
    }

    pub fn implemented_ops(&self) -> &BTreeSet<String> {
        &self.implemented_ops
    }

    /// Highest opcode actually present in the opcode table.
    pub fn max_opcode_seen(&self) -> Option<u32> {
        self.opcodes.max_opcode()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_sources() {
        let loader = TableLoader::from_sources(
            VersionProfile::otp20(),
            &SourceTable::from_text("genop.tab", "1: label/1\n2: func_info/3\n"),
            &SourceTable::from_text("atoms.tab", "ok\nerlang\n"),
            &SourceTable::from_text("implemented_bifs.tab", "bif erlang:self/0\n"),
            &SourceTable::from_text("implemented_ops.tab", "# done\nlabel\n\nfunc_info\n"),
        )
        .unwrap();

        assert_eq!(loader.opcodes().len(), 2);
        assert_eq!(loader.max_opcode_seen(), Some(2));
        let texts: Vec<_> = loader.atoms().iter().map(|a| a.text.as_str()).collect();
        assert_eq!(texts, vec!["ok", "erlang", "self"]);
        assert_eq!(loader.bifs().len(), 1);
        assert!(loader.implemented_ops().contains("func_info"));
        assert_eq!(loader.implemented_ops().len(), 2);
        assert_eq!(loader.profile().name, "otp20");
    }
}
