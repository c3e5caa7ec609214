//! Atom interning for the generated atom table.
//!
//! Ids start at 1 and are handed out in first-seen order. The generated
//! constant table is indexed positionally by id, so iteration order must
//! reproduce registration order exactly.

use std::collections::HashMap;

use tracing::debug;

use crate::error::{LineError, Result};
use crate::model::Atom;
use crate::tables::source::SourceTable;

#[derive(Debug, Default, Clone)]
pub struct AtomTable {
    /// `atoms[id - 1]` is the atom with that id.
    atoms: Vec<Atom>,
    ids: HashMap<String, u32>,
}

impl AtomTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the id of `text`, assigning the next one on first sight.
    /// Repeat registrations are no-ops: the first hint stays.
    pub fn register(&mut self, text: &str, constant_name: Option<&str>) -> u32 {
        self.register_with_module(text, constant_name, None)
    }

    /// Like `register`, also recording which module introduced the atom.
    pub fn register_with_module(
        &mut self,
        text: &str,
        constant_name: Option<&str>,
        module_hint: Option<&str>,
    ) -> u32 {
        if let Some(&id) = self.ids.get(text) {
            return id;
        }

        let id = self.atoms.len() as u32 + 1;
        self.atoms.push(Atom {
            text: text.to_string(),
            constant_name: constant_name.map(str::to_string),
            id,
            module_hint: module_hint.map(str::to_string),
        });
        self.ids.insert(text.to_string(), id);
        id
    }

    pub fn lookup_by_text(&self, text: &str) -> Option<&Atom> {
        let id = *self.ids.get(text)?;
        self.lookup_by_id(id)
    }

    pub fn lookup_by_id(&self, id: u32) -> Option<&Atom> {
        let idx = id.checked_sub(1)?;
        self.atoms.get(idx as usize)
    }

    /// All atoms in id order.
    pub fn iter(&self) -> std::slice::Iter<'_, Atom> {
        self.atoms.iter()
    }

    pub fn as_slice(&self) -> &[Atom] {
        &self.atoms
    }

    pub fn len(&self) -> usize {
        self.atoms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    /// Register every atom of an `atoms.tab` file.
    ///
    /// A line is `<atom>` or `<atom> <CONST_NAME>`; the override is stored
    /// uppercased. Any other field count aborts the load.
    pub fn load(&mut self, source: &SourceTable) -> Result<()> {
        let before = self.len();
        for (line_no, line) in source.data_lines() {
            let fields: Vec<&str> = line.split_whitespace().collect();
            let (text, hint) = match fields[..] {
                [text] => (text, None),
                [text, hint] => (text, Some(hint.to_uppercase())),
                _ => {
                    let reason = LineError::FieldCount {
                        expected: "1 or 2",
                        found: fields.len(),
                    };
                    return Err(source.malformed(line_no, line, reason));
                }
            };
            self.register(text, hint.as_deref());
        }
        debug!(
            file = %source.path().display(),
            added = self.len() - before,
            "loaded atoms"
        );
        Ok(())
    }
}

impl<'a> IntoIterator for &'a AtomTable {
    type Item = &'a Atom;
    type IntoIter = std::slice::Iter<'a, Atom>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
