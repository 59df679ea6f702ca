use tracing::{debug, info};

use crate::{
    WeatherSnapshot,
    catalog::CityCatalog,
    error::{FetchError, LookupError},
    provider::WeatherProvider,
};

/// Result of a submission that passed validation.
#[derive(Debug)]
pub enum SubmitOutcome {
    /// The snapshot was replaced and the search box reset.
    Updated,
    /// The lookup failed; the previous snapshot is still in place.
    Failed(FetchError),
}

impl SubmitOutcome {
    pub fn is_updated(&self) -> bool {
        matches!(self, SubmitOutcome::Updated)
    }
}

/// State behind the search box: typed text, its suggestions, and the last
/// successful reading.
///
/// Lookups take `&mut self`, so one session never has two requests in flight.
#[derive(Debug)]
pub struct SearchSession<P> {
    catalog: CityCatalog,
    provider: P,
    input: String,
    suggestions: Vec<&'static str>,
    snapshot: Option<WeatherSnapshot>,
}

impl<P: WeatherProvider> SearchSession<P> {
    pub fn new(provider: P) -> Self {
        Self::with_catalog(CityCatalog::popular(), provider)
    }

    pub fn with_catalog(catalog: CityCatalog, provider: P) -> Self {
        Self {
            catalog,
            provider,
            input: String::new(),
            suggestions: Vec::new(),
            snapshot: None,
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn suggestions(&self) -> &[&'static str] {
        &self.suggestions
    }

    pub fn snapshot(&self) -> Option<&WeatherSnapshot> {
        self.snapshot.as_ref()
    }

    pub fn catalog(&self) -> CityCatalog {
        self.catalog
    }

    /// Input changed: store the text and recompute suggestions.
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
        self.suggestions = self.catalog.suggest(&self.input);
    }

    /// Suggestion picked: fill the box with it and submit right away.
    pub async fn select(&mut self, suggestion: &str) -> Result<SubmitOutcome, LookupError> {
        self.set_input(suggestion);
        self.submit().await
    }

    /// Submit whatever is currently typed.
    pub async fn submit(&mut self) -> Result<SubmitOutcome, LookupError> {
        let city = self
            .catalog
            .resolve(&self.input)
            .ok_or_else(|| LookupError::UnknownCity(self.input.clone()))?;

        info!(city, "looking up current weather");

        match self.provider.current_weather(city).await {
            Ok(snapshot) => {
                self.snapshot = Some(snapshot);
                self.input.clear();
                self.suggestions.clear();
                Ok(SubmitOutcome::Updated)
            }
            Err(err) => {
                // Callers report the failure from the returned outcome.
                debug!(
                    city,
                    error = %err,
                    source = ?std::error::Error::source(&err),
                    "weather lookup failed"
                );
                Ok(SubmitOutcome::Failed(err))
            }
        }
    }
}
