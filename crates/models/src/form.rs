use std::collections::HashMap;

/// Per-field validation requirements for one form.
#[derive(Debug, Clone)]
pub struct FieldRule {
    pub required: bool,
    pub min_length: Option<usize>,
    pub email: bool,
    pub label: String,
}

impl FieldRule {
    pub fn required(label: &str) -> Self {
        Self { required: true, min_length: None, email: false, label: label.to_string() }
    }

    pub fn min_length(mut self, min: usize) -> Self {
        self.min_length = Some(min);
        self
    }

    pub fn email(mut self) -> Self {
        self.email = true;
        self
    }
}

/// Ordered collection of `(field name, rule)` pairs for one screen.
///
/// Declaration order is part of the contract: validation errors are
/// reported in the order fields were added.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    entries: Vec<(String, FieldRule)>,
}

impl RuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(mut self, name: &str, rule: FieldRule) -> Self {
        self.entries.push((name.to_string(), rule));
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = &(String, FieldRule)> {
        self.entries.iter()
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }
}

/// Field values read off a screen, trimmed on insertion. Built fresh on
/// every submission attempt.
#[derive(Debug, Clone, Default)]
pub struct FormData {
    values: HashMap<String, String>,
}

impl FormData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: &str, raw: &str) {
        self.values.insert(name.to_string(), raw.trim().to_string());
    }

    /// Trimmed value for a field; missing fields read as empty.
    pub fn get(&self, name: &str) -> &str {
        self.values.get(name).map(String::as_str).unwrap_or("")
    }
}

/// Outcome of one validation pass; never persisted between calls.
#[derive(Debug, Clone)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<String>,
}

impl ValidationResult {
    pub fn valid() -> Self {
        Self { is_valid: true, errors: Vec::new() }
    }

    pub fn push_error(&mut self, message: String) {
        self.errors.push(message);
        self.is_valid = false;
    }
}

/// Conservative `local@domain.tld` shape: no whitespace, exactly one `@`,
/// at least one `.` somewhere after it, no empty parts.
pub fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = value.splitn(3, '@');
    let local = parts.next().unwrap_or("");
    let domain = match parts.next() {
        Some(d) => d,
        None => return false,
    };
    if parts.next().is_some() {
        return false;
    }
    if local.is_empty() || domain.is_empty() {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}
