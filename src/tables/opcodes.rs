//! `genop.tab` loading.
//!
//! Data lines look like `<opcode>: <name>/<arity>`. Anything that does not
//! split into exactly two space-separated tokens (section headers, notes)
//! is not data and is skipped silently.

use std::collections::BTreeMap;
use std::ops::RangeInclusive;

use tracing::{debug, warn};

use crate::error::{LineError, Result};
use crate::model::Opcode;
use crate::tables::source::SourceTable;

#[derive(Debug, Default, Clone)]
pub struct OpcodeTable {
    ops: BTreeMap<u32, Opcode>,
}

impl OpcodeTable {
    /// Parse a whole opcode table. `expected` is only used to flag
    /// suspicious opcodes in the log.
    pub fn load(source: &SourceTable, expected: RangeInclusive<u32>) -> Result<Self> {
        let mut ops = BTreeMap::new();

        for (line_no, line) in source.data_lines() {
            let op = match parse_opcode_line(line) {
                Ok(Some(op)) => op,
                Ok(None) => continue,
                Err(reason) => return Err(source.malformed(line_no, line, reason)),
            };
            if !expected.contains(&op.opcode) {
                warn!(
                    file = %source.path().display(),
                    opcode = op.opcode,
                    name = %op.name,
                    "opcode outside the documented range {}..={}",
                    expected.start(),
                    expected.end()
                );
            }
            ops.insert(op.opcode, op);
        }

        debug!(file = %source.path().display(), count = ops.len(), "loaded opcodes");
        Ok(Self { ops })
    }

    pub fn get(&self, opcode: u32) -> Option<&Opcode> {
        self.ops.get(&opcode)
    }

    /// Opcodes in ascending numeric order.
    pub fn iter(&self) -> impl Iterator<Item = &Opcode> + '_ {
        self.ops.values()
    }

    pub fn as_map(&self) -> &BTreeMap<u32, Opcode> {
        &self.ops
    }

    pub fn max_opcode(&self) -> Option<u32> {
        self.ops.keys().next_back().copied()
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }
}

/// `Ok(None)` for lines that are not opcode definitions.
pub fn parse_opcode_line(line: &str) -> std::result::Result<Option<Opcode>, LineError> {
    let tokens: Vec<&str> = line.split(' ').collect();
    let &[code, name_arity] = tokens.as_slice() else {
        return Ok(None);
    };

    let code = code.trim_end_matches(':');
    let opcode = code.parse().map_err(|_| LineError::BadInteger {
        field: "opcode",
        value: code.to_string(),
    })?;

    let (name, arity) = name_arity
        .split_once('/')
        .ok_or(LineError::MissingSeparator('/'))?;
    let arity = arity.parse().map_err(|_| LineError::BadInteger {
        field: "arity",
        value: arity.to_string(),
    })?;

    Ok(Some(Opcode {
        // a leading dash marks a deprecated op
        name: name.trim_matches('-').to_string(),
        arity,
        opcode,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TableError;

    #[test]
    fn test_parse_opcode_line() {
        let op = |name: &str, arity: u32, opcode: u32| -> std::result::Result<_, LineError> {
            Ok(Some(Opcode {
                name: name.into(),
                arity,
                opcode,
            }))
        };
        let test_cases = [
            ("10 list_to_binary/1", op("list_to_binary", 1, 10)),
            ("1: label/1", op("label", 1, 1)),
            ("3: -int_code_end/0", op("int_code_end", 0, 3)),
            ("BEAM_FORMAT_NUMBER=0", Ok(None)),
            ("## @spec label Lbl", Ok(None)),
            (
                "5 foo/bar",
                Err(LineError::BadInteger {
                    field: "arity",
                    value: "bar".into(),
                }),
            ),
            (
                "x: label/1",
                Err(LineError::BadInteger {
                    field: "opcode",
                    value: "x".into(),
                }),
            ),
            ("7: label", Err(LineError::MissingSeparator('/'))),
        ];

        for (input, expected) in test_cases {
            assert_eq!(parse_opcode_line(input), expected, "input {input:?}");
        }
    }

    #[test]
    fn test_load_skips_non_data_lines() {
        let source = SourceTable::from_text(
            "genop.tab",
            "# comment\nBEAM_FORMAT_NUMBER=0\n\n1: label/1\n## @doc Call the function at Label.\n4: call/2\n",
        );
        let table = OpcodeTable::load(&source, 1..=158).unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(table.get(4).map(|op| op.name.as_str()), Some("call"));
        assert!(table.get(2).is_none());
        assert_eq!(table.max_opcode(), Some(4));
    }

    #[test]
    fn test_load_does_not_add_synthetic_ops() {
        let source = SourceTable::from_text("genop.tab", "158: put_map_exact/5\n");
        let table = OpcodeTable::load(&source, 1..=158).unwrap();

        let codes: Vec<_> = table.as_map().keys().copied().collect();
        assert_eq!(codes, vec![158]);
    }

    #[test]
    fn test_load_reports_bad_line() {
        let source = SourceTable::from_text("genop.tab", "1: label/1\n5 foo/bar\n");
        let err = OpcodeTable::load(&source, 1..=158).unwrap_err();

        match err {
            TableError::MalformedTableLine { line_no, line, .. } => {
                assert_eq!(line_no, 2);
                assert_eq!(line, "5 foo/bar");
            }
            other => panic!("unexpected error {other}"),
        }
    }
}
