/// Append-only text listing the named constants of one settings group
///
/// There is no way to remove or rewrite text once appended. Emitters borrow
/// the description immutably when they finalize, so it cannot change while
/// being written out.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnumerationDescription {
    text: String,
    constant_count: usize,
}

impl EnumerationDescription {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one `\t<name> = <value>,` definition
    pub fn push_constant(&mut self, name: &str, value: u32, eol: &str) {
        self.text.push('\t');
        self.text.push_str(name);
        self.text.push_str(" = ");
        self.text.push_str(&value.to_string());
        self.text.push(',');
        self.text.push_str(eol);
        self.constant_count += 1;
    }

    /// Appends verbatim text, e.g. a comment or a block supplied by another generator
    pub fn append_raw(&mut self, text: &str) {
        self.text.push_str(text);
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn constant_count(&self) -> usize {
        self.constant_count
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl From<&str> for EnumerationDescription {
    fn from(text: &str) -> Self {
        let mut description = Self::new();
        description.append_raw(text);
        description
    }
}
