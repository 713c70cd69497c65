use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Raised for language codes Linguee does not serve
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unsupported language code '{0}'")]
pub struct UnknownLanguage(pub String);

/// Languages available on Linguee, keyed by their two-letter code
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum LanguageCode {
    BG,
    CS,
    DA,
    DE,
    EL,
    EN,
    ES,
    ET,
    FI,
    FR,
    HU,
    IT,
    JA,
    LT,
    LV,
    MT,
    NL,
    PL,
    PT,
    RO,
    RU,
    SK,
    SL,
    SV,
    ZH,
}

impl LanguageCode {
    pub const ALL: [LanguageCode; 25] = [
        LanguageCode::BG,
        LanguageCode::CS,
        LanguageCode::DA,
        LanguageCode::DE,
        LanguageCode::EL,
        LanguageCode::EN,
        LanguageCode::ES,
        LanguageCode::ET,
        LanguageCode::FI,
        LanguageCode::FR,
        LanguageCode::HU,
        LanguageCode::IT,
        LanguageCode::JA,
        LanguageCode::LT,
        LanguageCode::LV,
        LanguageCode::MT,
        LanguageCode::NL,
        LanguageCode::PL,
        LanguageCode::PT,
        LanguageCode::RO,
        LanguageCode::RU,
        LanguageCode::SK,
        LanguageCode::SL,
        LanguageCode::SV,
        LanguageCode::ZH,
    ];

    /// Upper-case code, as Linguee expects it in the `source` parameter
    pub fn code(&self) -> &'static str {
        match self {
            LanguageCode::BG => "BG",
            LanguageCode::CS => "CS",
            LanguageCode::DA => "DA",
            LanguageCode::DE => "DE",
            LanguageCode::EL => "EL",
            LanguageCode::EN => "EN",
            LanguageCode::ES => "ES",
            LanguageCode::ET => "ET",
            LanguageCode::FI => "FI",
            LanguageCode::FR => "FR",
            LanguageCode::HU => "HU",
            LanguageCode::IT => "IT",
            LanguageCode::JA => "JA",
            LanguageCode::LT => "LT",
            LanguageCode::LV => "LV",
            LanguageCode::MT => "MT",
            LanguageCode::NL => "NL",
            LanguageCode::PL => "PL",
            LanguageCode::PT => "PT",
            LanguageCode::RO => "RO",
            LanguageCode::RU => "RU",
            LanguageCode::SK => "SK",
            LanguageCode::SL => "SL",
            LanguageCode::SV => "SV",
            LanguageCode::ZH => "ZH",
        }
    }

    /// Full English name used in Linguee URL paths
    pub fn name(&self) -> &'static str {
        match self {
            LanguageCode::BG => "bulgarian",
            LanguageCode::CS => "czech",
            LanguageCode::DA => "danish",
            LanguageCode::DE => "german",
            LanguageCode::EL => "greek",
            LanguageCode::EN => "english",
            LanguageCode::ES => "spanish",
            LanguageCode::ET => "estonian",
            LanguageCode::FI => "finnish",
            LanguageCode::FR => "french",
            LanguageCode::HU => "hungarian",
            LanguageCode::IT => "italian",
            LanguageCode::JA => "japanese",
            LanguageCode::LT => "lithuanian",
            LanguageCode::LV => "latvian",
            LanguageCode::MT => "maltese",
            LanguageCode::NL => "dutch",
            LanguageCode::PL => "polish",
            LanguageCode::PT => "portuguese",
            LanguageCode::RO => "romanian",
            LanguageCode::RU => "russian",
            LanguageCode::SK => "slovak",
            LanguageCode::SL => "slovene",
            LanguageCode::SV => "swedish",
            LanguageCode::ZH => "chinese",
        }
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.code().to_lowercase())
    }
}

impl FromStr for LanguageCode {
    type Err = UnknownLanguage;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_uppercase();
        LanguageCode::ALL
            .iter()
            .find(|language| language.code() == normalized)
            .copied()
            .ok_or_else(|| UnknownLanguage(value.to_string()))
    }
}

impl TryFrom<String> for LanguageCode {
    type Error = UnknownLanguage;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<LanguageCode> for String {
    fn from(language: LanguageCode) -> Self {
        language.to_string()
    }
}
