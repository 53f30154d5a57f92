//! Language names and the ISO 639-1 codes understood by the endpoint
//!
//! The table is ordered. Reverse lookups return the first entry whose code
//! matches, so entries earlier in the table win when codes are shared.

/// Every `(name, code)` pair accepted by the endpoint, in lookup order
pub const LANGUAGES: &[(&str, &str)] = &[
    ("afrikaans", "af"),
    ("albanian", "sq"),
    ("amharic", "am"),
    ("arabic", "ar"),
    ("armenian", "hy"),
    ("azerbaijani", "az"),
    ("basque", "eu"),
    ("belarusian", "be"),
    ("bengali", "bn"),
    ("bosnian", "bs"),
    ("bulgarian", "bg"),
    ("catalan", "ca"),
    ("cebuano", "ceb"),
    ("chichewa", "ny"),
    ("chinese (simplified)", "zh-cn"),
    ("chinese (traditional)", "zh-tw"),
    ("corsican", "co"),
    ("croatian", "hr"),
    ("czech", "cs"),
    ("danish", "da"),
    ("dutch", "nl"),
    ("english", "en"),
    ("esperanto", "eo"),
    ("estonian", "et"),
    ("filipino", "tl"),
    ("finnish", "fi"),
    ("french", "fr"),
    ("frisian", "fy"),
    ("galician", "gl"),
    ("georgian", "ka"),
    ("german", "de"),
    ("greek", "el"),
    ("gujarati", "gu"),
    ("haitian creole", "ht"),
    ("hausa", "ha"),
    ("hawaiian", "haw"),
    ("hebrew", "iw"),
    ("hindi", "hi"),
    ("hmong", "hmn"),
    ("hungarian", "hu"),
    ("icelandic", "is"),
    ("igbo", "ig"),
    ("indonesian", "id"),
    ("irish", "ga"),
    ("italian", "it"),
    ("japanese", "ja"),
    ("javanese", "jw"),
    ("kannada", "kn"),
    ("kazakh", "kk"),
    ("khmer", "km"),
    ("kinyarwanda", "rw"),
    ("korean", "ko"),
    ("kurdish (kurmanji)", "ku"),
    ("kyrgyz", "ky"),
    ("lao", "lo"),
    ("latin", "la"),
    ("latvian", "lv"),
    ("lithuanian", "lt"),
    ("luxembourgish", "lb"),
    ("macedonian", "mk"),
    ("malagasy", "mg"),
    ("malay", "ms"),
    ("malayalam", "ml"),
    ("maltese", "mt"),
    ("maori", "mi"),
    ("marathi", "mr"),
    ("mongolian", "mn"),
    ("myanmar (burmese)", "my"),
    ("nepali", "ne"),
    ("norwegian", "no"),
    ("odia (oriya)", "or"),
    ("pashto", "ps"),
    ("persian", "fa"),
    ("polish", "pl"),
    ("portuguese", "pt"),
    ("punjabi", "pa"),
    ("romanian", "ro"),
    ("russian", "ru"),
    ("samoan", "sm"),
    ("scots gaelic", "gd"),
    ("serbian", "sr"),
    ("sesotho", "st"),
    ("shona", "sn"),
    ("sindhi", "sd"),
    ("sinhala", "si"),
    ("slovak", "sk"),
    ("slovenian", "sl"),
    ("somali", "so"),
    ("spanish", "es"),
    ("sundanese", "su"),
    ("swahili", "sw"),
    ("swedish", "sv"),
    ("tajik", "tg"),
    ("tamil", "ta"),
    ("tatar", "tt"),
    ("telugu", "te"),
    ("thai", "th"),
    ("turkish", "tr"),
    ("turkmen", "tk"),
    ("ukrainian", "uk"),
    ("urdu", "ur"),
    ("uyghur", "ug"),
    ("uzbek", "uz"),
    ("vietnamese", "vi"),
    ("welsh", "cy"),
    ("xhosa", "xh"),
    ("yiddish", "yi"),
    ("yoruba", "yo"),
    ("zulu", "zu"),
];

/// Selector meaning "let the endpoint detect the source language"
pub const AUTO: &str = "auto";

/// Look up the code for a language name (case-insensitive)
pub fn code_for(name: &str) -> Option<&'static str> {
    let name = name.trim().to_lowercase();
    LANGUAGES
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, code)| *code)
}

/// Look up the name for a code, first match in table order
pub fn name_for(code: &str) -> Option<&'static str> {
    LANGUAGES
        .iter()
        .find(|(_, c)| *c == code)
        .map(|(name, _)| *name)
}

/// Codes the endpoint also accepts, mapped to the table's code for the same
/// language. Consulted only after the main table.
pub const ALIASES: &[(&str, &str)] = &[("he", "iw"), ("jv", "jw")];

/// Table code for `code`, following `ALIASES` when the table has no match
pub fn canonical_code(code: &str) -> Option<&'static str> {
    LANGUAGES
        .iter()
        .find(|(_, c)| *c == code)
        .map(|(_, c)| *c)
        .or_else(|| {
            ALIASES
                .iter()
                .find(|(alias, _)| *alias == code)
                .map(|(_, c)| *c)
        })
}

/// Resolve a selector (language name, code or alias) to its table code
pub fn resolve(selector: &str) -> Option<&'static str> {
    code_for(selector).or_else(|| canonical_code(&selector.trim().to_lowercase()))
}

/// Reverse lookup for a code read back from a result page.
///
/// Codes on the page are cut to two letters, so `zh-cn` comes back as `zh`.
/// An exact match wins, then an alias, then the first entry whose primary
/// subtag equals `code`.
///
/// The cut also hits three-letter codes: `ceb` and `hmn` come back as `ce`
/// and `hm` and match nothing, and `haw` comes back as `ha`, which is hausa.
/// That is what the page reports, not a lookup error.
pub fn name_for_detected(code: &str) -> Option<&'static str> {
    canonical_code(code).and_then(name_for).or_else(|| {
        LANGUAGES
            .iter()
            .find(|(_, c)| c.split('-').next() == Some(code))
            .map(|(name, _)| *name)
    })
}
