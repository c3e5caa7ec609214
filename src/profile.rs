//! Per-release loading rules.
//!
//! A `VersionProfile` is plain configuration: where the three tables live
//! and how one line of the BIF table is read. The BIF line grammar changed
//! between OTP releases, so every profile carries its own line parser as a
//! function value. Supporting a new release means building a new profile,
//! usually by reusing one of the grammars below.

use std::ops::RangeInclusive;
use std::path::PathBuf;

use crate::error::LineError;
use crate::model::{Bif, BifKind};
use crate::names::unquote;

/// Turns one data line of the BIF table into a record.
pub type BifLineParser = fn(&str) -> Result<Bif, LineError>;

#[derive(Debug, Clone)]
pub struct VersionProfile {
    pub name: String,
    /// Expected opcode range. Documentation only, out-of-range opcodes
    /// are logged, not rejected.
    pub min_opcode: u32,
    pub max_opcode: u32,
    pub atoms_tab: PathBuf,
    pub bif_tab: PathBuf,
    pub genop_tab: PathBuf,
    pub implemented_ops_tab: PathBuf,
    pub line_parser: BifLineParser,
}

impl VersionProfile {
    pub fn otp19() -> Self {
        Self {
            name: "otp19".into(),
            min_opcode: 1,
            max_opcode: 158,
            atoms_tab: "atoms.tab".into(),
            bif_tab: "otp19/bif.tab".into(),
            genop_tab: "otp19/genop.tab".into(),
            implemented_ops_tab: "implemented_ops.tab".into(),
            line_parser: parse_plain_bif_line,
        }
    }

    pub fn otp20() -> Self {
        Self {
            name: "otp20".into(),
            min_opcode: 1,
            max_opcode: 159,
            atoms_tab: "atoms.tab".into(),
            bif_tab: "implemented_bifs.tab".into(),
            genop_tab: "otp20/genop.tab".into(),
            implemented_ops_tab: "implemented_ops.tab".into(),
            line_parser: parse_qualified_bif_line,
        }
    }

    pub fn otp21() -> Self {
        Self {
            name: "otp21".into(),
            max_opcode: 163,
            genop_tab: "otp21/genop.tab".into(),
            ..Self::otp20()
        }
    }

    /// Built-in profile for an OTP major release number.
    pub fn for_release(release: u32) -> Option<Self> {
        match release {
            19 => Some(Self::otp19()),
            20 => Some(Self::otp20()),
            21 => Some(Self::otp21()),
            _ => None,
        }
    }

    pub fn opcode_range(&self) -> RangeInclusive<u32> {
        self.min_opcode..=self.max_opcode
    }

    pub fn parse_bif_line(&self, raw: &str) -> Result<Bif, LineError> {
        (self.line_parser)(raw)
    }
}

/// OTP 19 `bif.tab`: `<atom> <arity> [<c_name>]`, no module column.
pub fn parse_plain_bif_line(raw: &str) -> Result<Bif, LineError> {
    let fields: Vec<&str> = raw.split_whitespace().collect();
    if !(2..=3).contains(&fields.len()) {
        return Err(LineError::FieldCount {
            expected: "2 or 3",
            found: fields.len(),
        });
    }

    let function_atom = unquote(fields[0]).to_string();
    let c_name = fields.get(2).copied().unwrap_or(function_atom.as_str()).to_uppercase();

    Ok(Bif {
        arity: parse_arity(fields[1])?,
        function_atom,
        module_atom: None,
        c_name,
        kind: None,
    })
}

/// OTP 20+ `bif.tab`: `<kind> <module>:<function>/<arity> [<c_name>]`.
///
/// The module ends at the first colon and the arity starts after the last
/// slash, so `erlang:'/'/2` is read as function `'/'`.
pub fn parse_qualified_bif_line(raw: &str) -> Result<Bif, LineError> {
    let fields: Vec<&str> = raw.split_whitespace().collect();
    if !(2..=3).contains(&fields.len()) {
        return Err(LineError::FieldCount {
            expected: "2 or 3",
            found: fields.len(),
        });
    }

    let kind =
        BifKind::from_tag(fields[0]).ok_or_else(|| LineError::UnknownKind(fields[0].to_string()))?;
    let (module, fun_arity) = fields[1]
        .split_once(':')
        .ok_or(LineError::MissingSeparator(':'))?;
    let (function, arity) = fun_arity
        .rsplit_once('/')
        .ok_or(LineError::MissingSeparator('/'))?;
    if module.is_empty() {
        return Err(LineError::EmptyName("module"));
    }
    if unquote(function).is_empty() {
        return Err(LineError::EmptyName("function"));
    }

    let function_atom = unquote(function).to_string();
    let c_name = fields.get(2).copied().unwrap_or(function_atom.as_str()).to_uppercase();

    Ok(Bif {
        arity: parse_arity(arity)?,
        function_atom,
        module_atom: Some(module.to_string()),
        c_name,
        kind: Some(kind),
    })
}

fn parse_arity(value: &str) -> Result<u32, LineError> {
    value.parse().map_err(|_| LineError::BadInteger {
        field: "arity",
        value: value.to_string(),
    })
}
