use derive_more::Display;
use serde::Deserialize;

/// One CSV record. Rows in the same file may have different widths; a row
/// with no fields is written as `""`, the same bytes as a single empty field.
#[derive(Debug, Display, Clone, Default, PartialEq, Eq, Deserialize)]
#[display("{_0:?}")]
#[serde(transparent)]
pub struct Row(Vec<String>);

impl Row {
    pub fn new<I, S>(fields: I) -> Row
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(fields.into_iter().map(Into::into).collect())
    }

    pub fn fields(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
