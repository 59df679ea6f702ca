use inquire::{
    CustomUserError,
    autocompletion::{Autocomplete, Replacement},
};
use weather_now_core::CityCatalog;

/// Feeds catalog suggestions into the `inquire` text prompt.
#[derive(Debug, Clone, Copy, Default)]
pub struct CityCompleter {
    catalog: CityCatalog,
}

impl CityCompleter {
    pub fn new(catalog: CityCatalog) -> Self {
        Self { catalog }
    }
}

impl Autocomplete for CityCompleter {
    fn get_suggestions(&mut self, input: &str) -> Result<Vec<String>, CustomUserError> {
        Ok(self.catalog.suggest(input).into_iter().map(str::to_owned).collect())
    }

    fn get_completion(
        &mut self,
        input: &str,
        highlighted_suggestion: Option<String>,
    ) -> Result<Replacement, CustomUserError> {
        // Tab without a highlight completes to the first match.
        Ok(highlighted_suggestion
            .or_else(|| self.catalog.suggest(input).first().map(|s| s.to_string())))
    }
}
