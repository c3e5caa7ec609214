//! Plain records produced by the table loader.
//!
//! These are handed read-only to the code generators; nothing here
//! knows how a table file is laid out.

use serde::Serialize;

/// One line of `genop.tab`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Opcode {
    pub name: String,
    pub arity: u32,
    pub opcode: u32,
}

/// An interned atom. `id` is positional: generated constant tables are
/// indexed by it, so it never changes once assigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Atom {
    pub text: String,
    pub constant_name: Option<String>,
    pub id: u32,
    /// Module of the BIF that first introduced this atom, if any.
    pub module_hint: Option<String>,
}

impl Atom {
    /// Name used for the generated constant: the explicit hint when one
    /// was registered, the uppercased text otherwise.
    pub fn const_name(&self) -> String {
        match &self.constant_name {
            Some(name) => name.clone(),
            None => self.text.to_uppercase(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BifKind {
    /// `bif`
    Plain,
    /// `ubif`: never touches the process heap.
    NoHeap,
    /// `gcbif`: may allocate, so it takes a live register count.
    HeapUsing,
}

impl BifKind {
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "bif" => Some(BifKind::Plain),
            "ubif" => Some(BifKind::NoHeap),
            "gcbif" => Some(BifKind::HeapUsing),
            _ => None,
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            BifKind::Plain => "bif",
            BifKind::NoHeap => "ubif",
            BifKind::HeapUsing => "gcbif",
        }
    }
}

/// A built-in function entry.
///
/// Older grammars carry neither `module_atom` nor `kind`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Bif {
    pub function_atom: String,
    pub module_atom: Option<String>,
    pub arity: u32,
    pub c_name: String,
    pub kind: Option<BifKind>,
}
