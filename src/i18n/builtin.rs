//! Built-in catalogs used by the demo server.

use crate::i18n::MessageCatalog;

/// Languages with a built-in catalog.
pub const SUPPORTED_LANGUAGES: &[&str] = &["en", "th"];

pub const DEFAULT_LANGUAGE: &str = "en";

// `validation.username.length` is left out of both catalogs on purpose so the
// demo route shows the raw-key fallback.
const EN: &[(&str, &str)] = &[
    ("errors.bad_request", "Bad request"),
    ("errors.not_found", "Not found"),
    ("errors.unauthorized", "Unauthorized"),
    ("validation.field.required", "{{.field}} is required"),
];

const TH: &[(&str, &str)] = &[
    ("errors.bad_request", "คำขอไม่ถูกต้อง"),
    ("errors.not_found", "ไม่พบข้อมูล"),
    ("errors.unauthorized", "ไม่ได้รับอนุญาต"),
    ("validation.field.required", "จำเป็นต้องระบุ {{.field}}"),
];

/// Build the catalog for `language`, if one ships with the crate.
pub fn catalog(language: &str) -> Option<MessageCatalog> {
    let messages = match language {
        "en" => EN,
        "th" => TH,
        _ => return None,
    };

    let mut catalog = MessageCatalog::new(language);
    catalog.extend(messages.iter().copied());
    Some(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_supported_language_has_a_catalog() {
        for language in SUPPORTED_LANGUAGES {
            let catalog = catalog(language).unwrap();
            assert_eq!(catalog.language(), *language);
            assert!(catalog.contains("errors.bad_request"));
            assert!(!catalog.contains("validation.username.length"));
        }
        assert!(SUPPORTED_LANGUAGES.contains(&DEFAULT_LANGUAGE));
    }

    #[test]
    fn test_unknown_language() {
        assert!(catalog("fr").is_none());
    }
}
