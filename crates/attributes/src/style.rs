use serde::{Deserialize, Serialize};
use std::fmt;

/// One `property: value` declaration of an inline `style` attribute.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InlineStyle {
    pub property: String,
    pub value: String,
}

impl InlineStyle {
    pub fn new(property: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            value: value.into(),
        }
    }

    /// Parses a `style` attribute body (`color: red; margin: 0`) into declarations.
    ///
    /// Declarations without a colon or with an empty side are skipped.
    pub fn parse_declarations(source: &str) -> Vec<InlineStyle> {
        source
            .split(';')
            .filter_map(|declaration| {
                let (property, value) = declaration.split_once(':')?;
                let (property, value) = (property.trim(), value.trim());
                if property.is_empty() || value.is_empty() {
                    return None;
                }
                Some(InlineStyle::new(property, value))
            })
            .collect()
    }
}

impl fmt::Display for InlineStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.property, self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(InlineStyle::new("color", "blue").to_string(), "color: blue");
    }

    #[test]
    fn test_parse_declarations() {
        let parsed = InlineStyle::parse_declarations(" color: red;margin:0 ; broken; :x; width:");
        assert_eq!(
            parsed,
            vec![InlineStyle::new("color", "red"), InlineStyle::new("margin", "0")]
        );
    }
}
