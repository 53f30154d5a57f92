//! Extraction of the translation fields from a result page

use scraper::{ElementRef, Html, Selector};
use tracing::debug;

use crate::core::errors::{Result, TranslationError};

const INPUT_CONTAINER: &str = "div.input-container";
const RESULT_CONTAINER: &str = "div.result-container";
const SOURCE_FIELD: &str = r#"input[name="hl"]"#;
const TARGET_FIELD: &str = r#"input[name="tl"]"#;

/// Fields read from one result page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    /// Detected (or requested) source code, first two letters only
    pub source: String,
    /// Target code, first two letters only
    pub target: String,
    /// Translated text as rendered
    pub text: String,
}

#[cfg(test)]
thread_local! {
    static PARSE_CALLS: std::cell::Cell<usize> = const { std::cell::Cell::new(0) };
}

/// Number of documents parsed by `extract` on the current thread
#[cfg(test)]
pub(crate) fn parse_calls() -> usize {
    PARSE_CALLS.with(|calls| calls.get())
}

/// Parse `html` and read the source code, target code and translated text.
///
/// Codes like `en-GB` are cut to their first two characters. A page without
/// the input container, either language field, or the result container is an
/// `ExtractionFailed` error.
pub fn extract(html: &str) -> Result<Extraction> {
    #[cfg(test)]
    PARSE_CALLS.with(|calls| calls.set(calls.get() + 1));

    let document = Html::parse_document(html);

    let input_container = document
        .select(&selector(INPUT_CONTAINER)?)
        .next()
        .ok_or_else(|| missing("input container"))?;

    let source = field_code(&input_container, SOURCE_FIELD)?;
    let target = field_code(&input_container, TARGET_FIELD)?;

    let text = document
        .select(&selector(RESULT_CONTAINER)?)
        .next()
        .ok_or_else(|| missing("result container"))?
        .text()
        .collect::<String>();

    debug!("Extracted {} -> {} ({} chars)", source, target, text.chars().count());

    Ok(Extraction {
        source,
        target,
        text,
    })
}

fn field_code(container: &ElementRef<'_>, css: &str) -> Result<String> {
    let value = container
        .select(&selector(css)?)
        .next()
        .ok_or_else(|| missing(css))?
        .value()
        .attr("value")
        .ok_or_else(|| missing(&format!("value of {}", css)))?;

    Ok(value.chars().take(2).collect())
}

fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| TranslationError::ExtractionFailed {
        message: format!("bad selector {}: {:?}", css, e),
    })
}

fn missing(what: &str) -> TranslationError {
    TranslationError::ExtractionFailed {
        message: format!("{} not found in page", what),
    }
}
