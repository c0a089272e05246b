/// Append-only buffer of generated accessor code
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GettersContent {
    text: String,
    getter_count: usize,
}

impl GettersContent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a `case` arm returning the named configuration field
    pub fn push_case(&mut self, constant: &str, field: &str, eol: &str) {
        self.text.push_str("\tcase ");
        self.text.push_str(constant);
        self.text.push(':');
        self.text.push_str(eol);
        self.text.push_str("\t\treturn engineConfiguration->");
        self.text.push_str(field);
        self.text.push(';');
        self.text.push_str(eol);
        self.getter_count += 1;
    }

    pub fn append_raw(&mut self, text: &str) {
        self.text.push_str(text);
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn getter_count(&self) -> usize {
        self.getter_count
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl From<&str> for GettersContent {
    fn from(text: &str) -> Self {
        let mut content = Self::new();
        content.append_raw(text);
        content
    }
}
