//! `{Field: value, ...}` rendering shared by every `Display` impl.

use std::fmt;

/// Collects `Name: value` pairs in insertion order and writes them as
/// `{Name: value, Other: value}`.
pub(crate) struct FieldList {
    parts: Vec<String>,
}

impl FieldList {
    pub(crate) fn new() -> Self {
        Self { parts: Vec::new() }
    }

    pub(crate) fn field(&mut self, name: &str, value: impl fmt::Display) -> &mut Self {
        self.parts.push(format!("{}: {}", name, value));
        self
    }

    pub(crate) fn opt<T: fmt::Display>(&mut self, name: &str, value: Option<&T>) -> &mut Self {
        if let Some(v) = value {
            self.field(name, v);
        }
        self
    }

    /// Lists are only shown when non-empty.
    pub(crate) fn list<T: fmt::Display>(&mut self, name: &str, items: &[T]) -> &mut Self {
        if !items.is_empty() {
            self.field(name, Bracketed(items));
        }
        self
    }

    pub(crate) fn finish(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}}}", self.parts.join(", "))
    }
}

/// Six-decimal rendering for confidences and coordinates.
pub(crate) struct Fixed6(pub f64);

impl fmt::Display for Fixed6 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}", self.0)
    }
}

pub(crate) struct Bracketed<'a, T>(pub &'a [T]);

impl<T: fmt::Display> fmt::Display for Bracketed<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, item) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", item)?;
        }
        f.write_str("]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Probe {
        name: Option<String>,
        tags: Vec<String>,
        score: f64,
    }

    impl fmt::Display for Probe {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            FieldList::new()
                .opt("Name", self.name.as_ref())
                .list("Tags", &self.tags)
                .field("Score", Fixed6(self.score))
                .finish(f)
        }
    }

    #[test]
    fn absent_fields_are_skipped() {
        let p = Probe {
            name: None,
            tags: vec![],
            score: 0.5,
        };
        assert_eq!(p.to_string(), "{Score: 0.500000}");
    }

    #[test]
    fn present_fields_keep_order() {
        let p = Probe {
            name: Some(String::new()),
            tags: vec!["a".into(), "b".into()],
            score: 1.0,
        };
        assert_eq!(p.to_string(), "{Name: , Tags: [a, b], Score: 1.000000}");
    }
}
