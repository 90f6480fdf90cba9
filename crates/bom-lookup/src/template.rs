/// Token replaced by the part identifier in a lookup URL template.
pub const PART_NUMBER_PLACEHOLDER: &str = "{part_number}";

/// A lookup URL containing [`PART_NUMBER_PLACEHOLDER`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlTemplate {
    raw: String,
}

impl UrlTemplate {
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn has_placeholder(&self) -> bool {
        self.raw.contains(PART_NUMBER_PLACEHOLDER)
    }

    /// Substitute the identifier verbatim for every placeholder occurrence.
    pub fn expand(&self, identifier: &str) -> String {
        self.raw.replace(PART_NUMBER_PLACEHOLDER, identifier)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expands_every_placeholder() {
        let template = UrlTemplate::new("http://catalog/search?q={part_number}&echo={part_number}");
        assert!(template.has_placeholder());
        assert_eq!(
            template.expand("ABC-123"),
            "http://catalog/search?q=ABC-123&echo=ABC-123"
        );
    }

    #[test]
    fn template_without_placeholder_is_constant() {
        let template = UrlTemplate::new("http://catalog/search");
        assert!(!template.has_placeholder());
        assert_eq!(template.expand("ABC"), "http://catalog/search");
    }
}
