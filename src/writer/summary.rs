//! Short human-readable report of the loaded tables.

use std::io::{self, Write};

use crate::model::BifKind;
use crate::tables::TableLoader;

pub fn emit(tables: &TableLoader, out: &mut impl Write) -> io::Result<()> {
    let profile = tables.profile();
    writeln!(out, "profile {}", profile.name)?;

    // ── Opcodes ────────────────────────────────────────────────────────
    let opcodes = tables.opcodes();
    match (opcodes.iter().next(), tables.max_opcode_seen()) {
        (Some(first), Some(last)) => writeln!(
            out,
            "opcodes: {} ({}..={}, expected {}..={})",
            opcodes.len(),
            first.opcode,
            last,
            profile.min_opcode,
            profile.max_opcode
        )?,
        _ => writeln!(out, "opcodes: 0")?,
    }

    // ── Atoms / BIFs ───────────────────────────────────────────────────
    writeln!(out, "atoms: {}", tables.atoms().len())?;
    writeln!(out, "bifs: {}", tables.bifs().len())?;
    for kind in [BifKind::Plain, BifKind::NoHeap, BifKind::HeapUsing] {
        let count = tables.bifs().iter().filter(|b| b.kind == Some(kind)).count();
        if count > 0 {
            writeln!(out, "  {}: {}", kind.tag(), count)?;
        }
    }

    writeln!(out, "implemented ops: {}", tables.implemented_ops().len())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::VersionProfile;
    use crate::tables::SourceTable;

    #[test]
    fn test_summary_lines() {
        let tables = TableLoader::from_sources(
            VersionProfile::otp21(),
            &SourceTable::from_text("genop.tab", "1: label/1\n4: call/2\n"),
            &SourceTable::from_text("atoms.tab", "ok\n"),
            &SourceTable::from_text(
                "implemented_bifs.tab",
                "bif erlang:self/0\ngcbif erlang:length/1\nbif erlang:node/0\n",
            ),
            &SourceTable::from_text("implemented_ops.tab", "label\n"),
        )
        .unwrap();

        let mut out = Vec::new();
        emit(&tables, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(
            text,
            "profile otp21\n\
             opcodes: 2 (1..=4, expected 1..=163)\n\
             atoms: 5\n\
             bifs: 3\n  bif: 2\n  gcbif: 1\n\
             implemented ops: 1\n"
        );
    }
}
