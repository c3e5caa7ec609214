//! JSON dump of the loaded tables, for generators written in other
//! languages and for eyeballing a table set.

use std::collections::BTreeSet;
use std::io::{self, Write};

use serde::Serialize;

use crate::model::{Atom, Bif, Opcode};
use crate::tables::TableLoader;

#[derive(Debug, Serialize)]
struct TablesView<'a> {
    profile: &'a str,
    min_opcode: u32,
    max_opcode: u32,
    opcodes: Vec<&'a Opcode>,
    atoms: &'a [Atom],
    bifs: &'a [Bif],
    implemented_ops: &'a BTreeSet<String>,
}

pub fn emit(tables: &TableLoader, out: &mut impl Write) -> io::Result<()> {
    let profile = tables.profile();
    let view = TablesView {
        profile: &profile.name,
        min_opcode: profile.min_opcode,
        max_opcode: profile.max_opcode,
        opcodes: tables.opcodes().iter().collect(),
        atoms: tables.atoms(),
        bifs: tables.bifs(),
        implemented_ops: tables.implemented_ops(),
    };
    serde_json::to_writer_pretty(&mut *out, &view)?;
    writeln!(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::VersionProfile;
    use crate::tables::SourceTable;
    use serde_json::{Value, json};

    #[test]
    fn test_json_shape() {
        let tables = TableLoader::from_sources(
            VersionProfile::otp20(),
            &SourceTable::from_text("genop.tab", "10 list_to_binary/1\n"),
            &SourceTable::from_text("atoms.tab", ""),
            &SourceTable::from_text("implemented_bifs.tab", "ubif erlang:abs/1\n"),
            &SourceTable::from_text("implemented_ops.tab", ""),
        )
        .unwrap();

        let mut out = Vec::new();
        emit(&tables, &mut out).unwrap();
        let value: Value = serde_json::from_slice(&out).unwrap();

        assert_eq!(
            value["opcodes"],
            json!([{ "name": "list_to_binary", "arity": 1, "opcode": 10 }])
        );
        assert_eq!(value["bifs"][0]["kind"], json!("no_heap"));
        assert_eq!(value["atoms"][1]["text"], json!("erlang"));
        assert_eq!(value["atoms"][1]["id"], json!(2));
    }
}
