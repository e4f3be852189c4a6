// src/middleware/i18n.rs

use axum::extract::FromRequestParts;
use axum::http::{header, request::Parts};

const SUPPORTED_LANGS: [&str; 2] = ["pt", "en"];
const DEFAULT_LANG: &str = "en";

// Extrator de idioma: primeiro idioma suportado do Accept-Language
pub struct Locale(pub String);

impl Locale {
    pub fn from_header(raw: Option<&str>) -> Self {
        let lang = raw
            .and_then(|header_str| {
                accept_language::parse(header_str).into_iter().find_map(|tag| {
                    // "pt-BR" -> "pt"
                    let primary = tag.split('-').next().unwrap_or(&tag).to_ascii_lowercase();
                    SUPPORTED_LANGS.contains(&primary.as_str()).then_some(primary)
                })
            })
            .unwrap_or_else(|| DEFAULT_LANG.to_string());

        Locale(lang)
    }
}

impl<S> FromRequestParts<S> for Locale
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let raw = parts
            .headers
            .get(header::ACCEPT_LANGUAGE)
            .and_then(|header_value| header_value.to_str().ok());

        Ok(Locale::from_header(raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_first_supported_language() {
        assert_eq!(Locale::from_header(Some("pt-BR,pt;q=0.9,en;q=0.8")).0, "pt");
        assert_eq!(Locale::from_header(Some("fr-FR,en-US;q=0.7")).0, "en");
        assert_eq!(Locale::from_header(Some("de")).0, "en");
        assert_eq!(Locale::from_header(None).0, "en");
    }
}
