//! CLI command definitions and handlers

use clap::Subcommand;
use tokio::io::AsyncReadExt;
use tracing::info;

use crate::core::client::AsyncTranslator;
use crate::core::config::TranslatorConfig;
use crate::core::languages::LANGUAGES;
use crate::core::models::{DetectedLanguage, Translated};

/// Commands for gtrans
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Translate text (reads stdin when TEXT is omitted)
    Translate {
        /// Text to translate
        text: Option<String>,

        /// Source language name or code (default: auto)
        #[arg(short, long)]
        source: Option<String>,

        /// Target language name or code (default: en)
        #[arg(short, long)]
        target: Option<String>,

        /// Print the full result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Detect the language of text (reads stdin when TEXT is omitted)
    Detect {
        /// Text to inspect
        text: Option<String>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// List supported languages and their codes
    Languages,
}

/// Handle translate command
pub async fn handle_translate(
    mut config: TranslatorConfig,
    text: Option<String>,
    source: Option<String>,
    target: Option<String>,
    json: bool,
) -> anyhow::Result<()> {
    if let Some(source) = source {
        config.source = source;
    }
    if let Some(target) = target {
        config.target = target;
    }

    let input = read_input(text).await?;
    let translator = AsyncTranslator::new(config)?;

    info!(
        "Translating {} bytes: {} -> {}",
        input.len(),
        translator.source(),
        translator.target()
    );

    let result = translator
        .scoped(|t| async move { t.translate_bytes(&input).await })
        .await?;

    println!("{}", render_translation(&result, json)?);
    Ok(())
}

/// Handle detect command
pub async fn handle_detect(
    mut config: TranslatorConfig,
    text: Option<String>,
    json: bool,
) -> anyhow::Result<()> {
    config.source = crate::core::languages::AUTO.to_string();

    let input = read_input(text).await?;
    let translator = AsyncTranslator::new(config)?;

    let detected = translator
        .scoped(|t| async move {
            let text = crate::core::validation::decode_input(&input)?;
            t.detect(text).await
        })
        .await?;

    println!("{}", render_detection(&detected, json)?);
    Ok(())
}

/// Handle languages command
pub fn handle_languages() {
    print!("{}", render_languages());
}

/// Text from the argument, or stdin with one trailing newline removed
async fn read_input(text: Option<String>) -> anyhow::Result<Vec<u8>> {
    if let Some(text) = text {
        return Ok(text.into_bytes());
    }

    let mut buf = Vec::new();
    tokio::io::stdin().read_to_end(&mut buf).await?;

    if buf.ends_with(b"\n") {
        buf.pop();
        if buf.ends_with(b"\r") {
            buf.pop();
        }
    }

    Ok(buf)
}

fn render_translation(result: &Translated, json: bool) -> anyhow::Result<String> {
    if json {
        Ok(serde_json::to_string_pretty(result)?)
    } else {
        Ok(result.to_string())
    }
}

fn render_detection(detected: &DetectedLanguage, json: bool) -> anyhow::Result<String> {
    if json {
        Ok(serde_json::to_string_pretty(detected)?)
    } else {
        Ok(detected.to_string())
    }
}

fn render_languages() -> String {
    LANGUAGES
        .iter()
        .map(|(name, code)| format!("{:<8}{}\n", code, name))
        .collect()
}
