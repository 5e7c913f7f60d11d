use crate::domain::errors::DomainError;

/// Conversion between a domain enum and the integer code stored in the database.
///
/// Every enum that crosses into SQL goes through this trait, so the codes live in
/// exactly one place per enum.
pub trait WireCode: Copy + Sized {
    /// Human readable name of the enum, used in error messages.
    const KIND: &'static str;

    fn code(self) -> i64;

    fn from_code(code: i64) -> Result<Self, DomainError>;
}

/// A filter argument that may be a single member or a set of members.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}

impl<T: WireCode> OneOrMany<T> {
    /// Wire codes of every member, singletons normalised to a one element list.
    pub fn codes(&self) -> Vec<i64> {
        match self {
            OneOrMany::One(value) => vec![value.code()],
            OneOrMany::Many(values) => values.iter().map(|v| v.code()).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, OneOrMany::Many(values) if values.is_empty())
    }
}

impl<T> From<Vec<T>> for OneOrMany<T> {
    fn from(values: Vec<T>) -> Self {
        OneOrMany::Many(values)
    }
}

impl<T, const N: usize> From<[T; N]> for OneOrMany<T> {
    fn from(values: [T; N]) -> Self {
        OneOrMany::Many(values.into())
    }
}

impl<T> FromIterator<T> for OneOrMany<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        OneOrMany::Many(iter.into_iter().collect())
    }
}
