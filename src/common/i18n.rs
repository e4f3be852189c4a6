// src/common/i18n.rs

use std::collections::HashMap;

const FALLBACK_LANG: &str = "en";

// Tabelas de mensagens por idioma. A chave é o código do erro, nunca a frase.
#[derive(Debug, Clone)]
pub struct I18nStore {
    messages: HashMap<&'static str, HashMap<&'static str, &'static str>>,
}

impl Default for I18nStore {
    fn default() -> Self {
        Self::new()
    }
}

impl I18nStore {
    pub fn new() -> Self {
        let pt = HashMap::from([
            ("validation_error", "Um ou mais campos são inválidos."),
            ("invalid_payload", "Corpo da requisição inválido."),
            ("lead_not_found", "Lead não encontrado."),
            ("vehicle_not_found", "Veículo não encontrado."),
            ("internal_error", "Ocorreu um erro inesperado."),
            ("required", "Campo obrigatório."),
            ("negative_price", "O preço não pode ser negativo."),
        ]);
        let en = HashMap::from([
            ("validation_error", "One or more fields are invalid."),
            ("invalid_payload", "Malformed request body."),
            ("lead_not_found", "Lead not found."),
            ("vehicle_not_found", "Vehicle not found."),
            ("internal_error", "An unexpected error occurred."),
            ("required", "This field is required."),
            ("negative_price", "Price cannot be negative."),
        ]);

        Self {
            messages: HashMap::from([("pt", pt), ("en", en)]),
        }
    }

    /// Traduz `key` para `lang`, caindo para inglês e depois para a própria chave.
    pub fn translate(&self, lang: &str, key: &str) -> String {
        self.messages
            .get(lang)
            .and_then(|table| table.get(key))
            .or_else(|| self.messages.get(FALLBACK_LANG).and_then(|table| table.get(key)))
            .map(|message| message.to_string())
            .unwrap_or_else(|| key.to_string())
    }
}
