//! Async translation client for the simplified result page

use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::core::config::TranslatorConfig;
use crate::core::errors::{Result, TranslationError};
use crate::core::languages::{self, AUTO};
use crate::core::models::{DetectedLanguage, Translated};
use crate::core::response::classify;
use crate::core::session::{HttpSession, Transport};
use crate::core::validation::{decode_input, validate_input};

/// Session plus the ownership rule for closing it
#[derive(Debug)]
struct SessionSlot {
    transport: Arc<dyn Transport>,
    /// Created by the translator, so the translator closes it
    owned: bool,
    closed: AtomicBool,
}

impl SessionSlot {
    fn close(&self) {
        if self.closed.swap(true, Ordering::SeqCst) {
            return;
        }

        if self.owned {
            self.transport.close();
            info!("Translator session closed");
        } else {
            debug!("Translator closed, caller-supplied session left open");
        }
    }
}

impl Drop for SessionSlot {
    fn drop(&mut self) {
        self.close();
    }
}

/// Async translation client
///
/// Clones share one session, so one translator can serve concurrent calls.
#[derive(Debug, Clone)]
pub struct AsyncTranslator {
    config: Arc<TranslatorConfig>,
    source: &'static str,
    target: &'static str,
    session: Arc<SessionSlot>,
}

impl AsyncTranslator {
    /// Create a new async translator with its own HTTP session
    pub fn new(config: TranslatorConfig) -> Result<Self> {
        config.validate()?;
        let (source, target) = resolve_languages(&config)?;
        let transport = HttpSession::from_config(&config)?;

        Ok(Self::assemble(config, source, target, Arc::new(transport), true))
    }

    /// Create from environment
    pub fn from_env() -> Result<Self> {
        Self::new(TranslatorConfig::from_env()?)
    }

    /// Create a translator on top of a caller-supplied session.
    ///
    /// The session is never closed by the translator. `config.proxy` cannot be
    /// applied to it and is ignored.
    pub fn with_session(config: TranslatorConfig, transport: Arc<dyn Transport>) -> Result<Self> {
        config.validate()?;
        let (source, target) = resolve_languages(&config)?;

        if let Some(proxy) = &config.proxy {
            warn!("Proxy {} ignored: session was supplied by the caller", proxy);
        }

        Ok(Self::assemble(config, source, target, transport, false))
    }

    /// Create a translator that reuses an existing `reqwest::Client`
    pub fn with_http_client(config: TranslatorConfig, client: reqwest::Client) -> Result<Self> {
        Self::with_session(config, Arc::new(HttpSession::from_client(client)))
    }

    #[cfg(test)]
    pub(crate) fn with_owned_session(
        config: TranslatorConfig,
        transport: Arc<dyn Transport>,
    ) -> Result<Self> {
        config.validate()?;
        let (source, target) = resolve_languages(&config)?;
        Ok(Self::assemble(config, source, target, transport, true))
    }

    fn assemble(
        config: TranslatorConfig,
        source: &'static str,
        target: &'static str,
        transport: Arc<dyn Transport>,
        owned: bool,
    ) -> Self {
        info!(
            "Translator ready: {} -> {} via {}",
            source, target, config.endpoint_url
        );

        Self {
            config: Arc::new(config),
            source,
            target,
            session: Arc::new(SessionSlot {
                transport,
                owned,
                closed: AtomicBool::new(false),
            }),
        }
    }

    /// Translate `text`
    ///
    /// Input is validated before anything is sent. One GET is issued, its
    /// status classified and the page parsed; a failure at any step is
    /// returned as is, and the translator stays usable.
    pub async fn translate(&self, text: &str) -> Result<Translated> {
        if self.is_closed() {
            return Err(TranslationError::SessionClosed);
        }

        validate_input(text, self.config.max_length)?;

        debug!(
            "Requesting translation {} -> {} ({} chars)",
            self.source,
            self.target,
            text.chars().count()
        );

        let response = self
            .session
            .transport
            .get(
                &self.config.endpoint_url,
                &[("sl", self.source), ("tl", self.target), ("q", text)],
            )
            .await?;

        if let Err(e) = classify(response.status) {
            warn!("Endpoint answered {}: {}", response.status, e);
            return Err(e);
        }

        Translated::from_page(text, &response.body)
    }

    /// Translate raw bytes, which must be UTF-8 text
    pub async fn translate_bytes(&self, bytes: &[u8]) -> Result<Translated> {
        let text = decode_input(bytes)?;
        self.translate(text).await
    }

    /// Detect the language of `text`
    ///
    /// The endpoint has no detection-only call, so this runs a full
    /// translation and reads the source language off the result.
    pub async fn detect(&self, text: &str) -> Result<DetectedLanguage> {
        let result = self.translate(text).await?;
        let code = result.source().to_lowercase();

        let name = languages::name_for_detected(&code).ok_or_else(|| {
            TranslationError::UnsupportedLanguage {
                language: code.clone(),
            }
        })?;

        Ok(DetectedLanguage::new(name, code))
    }

    /// Close the translator.
    ///
    /// An owned session is closed exactly once however many times this is
    /// called. A caller-supplied session is left open.
    pub fn close(&self) {
        self.session.close();
    }

    /// Whether the translator was closed or its session was closed under it
    pub fn is_closed(&self) -> bool {
        self.session.closed.load(Ordering::SeqCst) || self.session.transport.is_closed()
    }

    /// Run `f` with this translator and close it when `f` finishes.
    ///
    /// The close also happens if the future panics or is dropped early.
    pub async fn scoped<F, Fut>(self, f: F) -> Fut::Output
    where
        F: FnOnce(AsyncTranslator) -> Fut,
        Fut: Future,
    {
        let _guard = CloseGuard(self.clone());
        f(self).await
    }

    /// Resolved source code, or "auto"
    pub fn source(&self) -> &'static str {
        self.source
    }

    /// Resolved target code
    pub fn target(&self) -> &'static str {
        self.target
    }

    /// Configuration the translator was built from
    pub fn config(&self) -> &TranslatorConfig {
        &self.config
    }
}

/// Closes the translator when dropped
struct CloseGuard(AsyncTranslator);

impl Drop for CloseGuard {
    fn drop(&mut self) {
        self.0.close();
    }
}

/// Resolve source and target selectors to codes
fn resolve_languages(config: &TranslatorConfig) -> Result<(&'static str, &'static str)> {
    let source = if config.source.trim().eq_ignore_ascii_case(AUTO) {
        AUTO
    } else {
        resolve_selector(&config.source)?
    };
    let target = resolve_selector(&config.target)?;

    if source == target {
        return Err(TranslationError::SameSourceTarget {
            source_lang: config.source.clone(),
            target_lang: config.target.clone(),
        });
    }

    Ok((source, target))
}

fn resolve_selector(selector: &str) -> Result<&'static str> {
    languages::resolve(selector).ok_or_else(|| TranslationError::UnsupportedLanguage {
        language: selector.to_string(),
    })
}
