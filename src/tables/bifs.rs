//! BIF table loading.
//!
//! The atoms file is registered first so that hand-written atoms keep the
//! low ids; every BIF then registers its own function and module atoms.

use tracing::debug;

use crate::error::Result;
use crate::model::Bif;
use crate::names::is_safe_identifier;
use crate::profile::VersionProfile;
use crate::tables::atoms::AtomTable;
use crate::tables::source::SourceTable;

#[derive(Debug, Default, Clone)]
pub struct BifTable {
    bifs: Vec<Bif>,
}

impl BifTable {
    /// Load `atoms_src` then `bif_src` into `atoms`, returning the BIFs
    /// ordered by `(function_atom, arity)`.
    ///
    /// Generated dispatch tables are emitted in this order; changing the
    /// sort key changes generated output. Duplicate lines are kept.
    pub fn load(
        profile: &VersionProfile,
        atoms_src: &SourceTable,
        bif_src: &SourceTable,
        atoms: &mut AtomTable,
    ) -> Result<Self> {
        atoms.load(atoms_src)?;

        let mut bifs = Vec::new();
        for (line_no, line) in bif_src.data_lines() {
            let bif = profile
                .parse_bif_line(line)
                .map_err(|reason| bif_src.malformed(line_no, line, reason))?;
            register_bif_atoms(&bif, atoms);
            bifs.push(bif);
        }

        sort_bifs(&mut bifs);
        debug!(
            file = %bif_src.path().display(),
            count = bifs.len(),
            atoms = atoms.len(),
            "loaded bifs"
        );
        Ok(Self { bifs })
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Bif> {
        self.bifs.iter()
    }

    pub fn as_slice(&self) -> &[Bif] {
        &self.bifs
    }

    pub fn len(&self) -> usize {
        self.bifs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bifs.is_empty()
    }
}

fn register_bif_atoms(bif: &Bif, atoms: &mut AtomTable) {
    let hint = (!is_safe_identifier(&bif.function_atom)).then_some(bif.c_name.as_str());
    atoms.register_with_module(&bif.function_atom, hint, bif.module_atom.as_deref());

    if let Some(module) = &bif.module_atom {
        atoms.register(module, Some(module.to_uppercase().as_str()));
    }
}

/// Stable sort by function atom text, then arity.
pub fn sort_bifs(bifs: &mut [Bif]) {
    bifs.sort_by(|a, b| {
        (a.function_atom.as_str(), a.arity).cmp(&(b.function_atom.as_str(), b.arity))
    });
}
