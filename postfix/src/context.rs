use std::collections::BTreeMap;
use std::sync::OnceLock;

use thiserror::Error;

use crate::token::{Operator, Token, OPERATORS};

/// Bindings every evaluation starts from unless a different table is given.
pub const REFERENCE_VARS: [(char, f64); 4] = [('a', 5.0), ('b', 7.0), ('c', 2.0), ('d', 4.0)];

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TableErr {
    #[error("'{0}' is an operator and can't name a variable")]
    ReservedName(char),
}

/// Maps single character variable names to their constant values.
///
/// Names never overlap with operator characters, so every input character
/// resolves to at most one [`Token`].
#[derive(Clone, Debug, PartialEq)]
pub struct SymbolTable(BTreeMap<char, f64>);

impl SymbolTable {
    pub fn new() -> SymbolTable {
        SymbolTable(REFERENCE_VARS.iter().copied().collect())
    }

    /// Shared instance of the reference bindings.
    pub fn reference() -> &'static SymbolTable {
        static TABLE: OnceLock<SymbolTable> = OnceLock::new();
        TABLE.get_or_init(SymbolTable::new)
    }

    pub fn with_vars<I>(vars: I) -> Result<SymbolTable, TableErr>
    where
        I: IntoIterator<Item = (char, f64)>,
    {
        let mut table = BTreeMap::new();
        for (name, value) in vars {
            if Operator::from_char(name).is_some() {
                return Err(TableErr::ReservedName(name));
            }
            table.insert(name, value);
        }
        Ok(SymbolTable(table))
    }

    pub fn get(&self, name: char) -> Option<f64> {
        self.0.get(&name).copied()
    }

    pub fn vars(&self) -> impl Iterator<Item = (char, f64)> + '_ {
        self.0.iter().map(|(&name, &value)| (name, value))
    }

    pub fn token(&self, c: char) -> Option<Token> {
        match self.get(c) {
            Some(value) => Some(Token::Var(c, value)),
            None => Operator::from_char(c).map(Token::Op),
        }
    }

    /// Every character this table accepts, variables first: `{a, b, +, -}`.
    pub fn alphabet(&self) -> String {
        let chars = self
            .0
            .keys()
            .copied()
            .chain(OPERATORS.iter().map(|op| op.symbol()))
            .map(|c| c.to_string())
            .collect::<Vec<String>>();
        format!("{{{}}}", chars.join(", "))
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        SymbolTable::new()
    }
}
