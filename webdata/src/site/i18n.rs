use serde::{Deserialize, Serialize};

/// Site languages. English is the default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    #[default]
    En,
    Bn,
}

impl Lang {
    pub fn code(self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Bn => "bn",
        }
    }

    pub fn from_code(code: &str) -> Option<Lang> {
        let code = code.trim().to_ascii_lowercase();
        if code.starts_with("bn") {
            Some(Lang::Bn)
        } else if code.starts_with("en") {
            Some(Lang::En)
        } else {
            None
        }
    }

    pub fn toggled(self) -> Lang {
        match self {
            Lang::En => Lang::Bn,
            Lang::Bn => Lang::En,
        }
    }

    /// Label of the toggle button: the language you would switch to.
    pub fn switch_label(self) -> &'static str {
        match self {
            Lang::En => "বাংলা",
            Lang::Bn => "English",
        }
    }

    pub fn font_class(self) -> &'static str {
        match self {
            Lang::En => "font-english",
            Lang::Bn => "font-bengali",
        }
    }
}

/// A string authored in both languages side by side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bilingual {
    pub en: &'static str,
    pub bn: &'static str,
}

impl Bilingual {
    pub const fn new(en: &'static str, bn: &'static str) -> Self {
        Self { en, bn }
    }

    pub fn get(&self, lang: Lang) -> &'static str {
        match lang {
            Lang::En => self.en,
            Lang::Bn => self.bn,
        }
    }
}

const BN_DIGITS: [char; 10] = ['০', '১', '২', '৩', '৪', '৫', '৬', '৭', '৮', '৯'];

/// Renders ASCII digits in the script of `lang`.
pub fn localize_digits(text: &str, lang: Lang) -> String {
    match lang {
        Lang::En => text.to_string(),
        Lang::Bn => text
            .chars()
            .map(|c| c.to_digit(10).map(|d| BN_DIGITS[d as usize]).unwrap_or(c))
            .collect(),
    }
}
