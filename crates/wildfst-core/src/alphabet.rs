// Expansion alphabet: the concrete symbols a wildcard arc is spelled out over.

use hashbrown::HashSet;

use crate::LabelError;
use crate::label::{Label, WildcardLabels};

/// A finite, ordered, duplicate-free set of concrete symbols.
///
/// Order is the caller's order and decides the order in which expanded arcs
/// are appended to a state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Alphabet {
    symbols: Vec<Label>,
}

impl Alphabet {
    /// Build an alphabet, rejecting epsilon, wildcard labels and duplicates.
    pub fn new<I>(symbols: I, labels: &WildcardLabels) -> Result<Self, LabelError>
    where
        I: IntoIterator<Item = Label>,
    {
        let symbols = symbols.into_iter();
        let mut checked: Vec<Label> = Vec::with_capacity(symbols.size_hint().0);
        let mut seen: HashSet<Label> = HashSet::with_capacity(checked.capacity());
        for sym in symbols {
            if !labels.is_concrete(sym) {
                return Err(LabelError::ReservedInAlphabet(sym));
            }
            if !seen.insert(sym) {
                return Err(LabelError::DuplicateInAlphabet(sym));
            }
            checked.push(sym);
        }
        Ok(Self { symbols: checked })
    }

    /// Build an alphabet without any checks.
    pub fn new_unchecked(symbols: Vec<Label>) -> Self {
        Self { symbols }
    }

    #[inline]
    pub fn symbols(&self) -> &[Label] {
        &self.symbols
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Label> + '_ {
        self.symbols.iter().copied()
    }
}
