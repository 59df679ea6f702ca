use tracing::debug;

/// Upper bound on the number of suggestions returned for one input.
pub const MAX_SUGGESTIONS: usize = 8;

/// Cities that can be looked up, in suggestion priority order.
pub static POPULAR_CITIES: &[&str] = &[
    "Mumbai",
    "Delhi",
    "Bengaluru",
    "Hyderabad",
    "Chennai",
    "Kolkata",
    "Pune",
    "Ahmedabad",
    "Jaipur",
    "Surat",
    "Lucknow",
    "Kanpur",
    "Nagpur",
    "Indore",
    "Bhopal",
    "Patna",
    "Vadodara",
    "Visakhapatnam",
    "Coimbatore",
    "Ludhiana",
    "Agra",
    "Varanasi",
    "Madurai",
    "Nashik",
    "Rajkot",
    "Amritsar",
    "Meerut",
    "Allahabad (Prayagraj)",
    "Aurangabad",
    "Ranchi",
    "Guwahati",
    "Chandigarh",
    "Mysuru",
    "Thiruvananthapuram",
    "Kochi",
    "Vijayawada",
    "Trichy",
    "Jodhpur",
    "Udaipur",
];

/// Closed set of city names the lookup accepts.
///
/// Lookups are restricted to this list; free-text geocoding is not supported.
#[derive(Debug, Clone, Copy)]
pub struct CityCatalog {
    cities: &'static [&'static str],
}

impl CityCatalog {
    /// The built-in catalog backed by [`POPULAR_CITIES`].
    pub const fn popular() -> Self {
        Self { cities: POPULAR_CITIES }
    }

    pub fn cities(&self) -> &'static [&'static str] {
        self.cities
    }

    /// Case-insensitive prefix match over the catalog, first [`MAX_SUGGESTIONS`] hits
    /// in catalog order. Empty input yields no suggestions.
    pub fn suggest(&self, input: &str) -> Vec<&'static str> {
        if input.is_empty() {
            return Vec::new();
        }

        let needle = input.to_lowercase();
        let matches: Vec<&'static str> = self
            .cities
            .iter()
            .copied()
            .filter(|city| city.to_lowercase().starts_with(&needle))
            .take(MAX_SUGGESTIONS)
            .collect();

        debug!(input, count = matches.len(), "computed city suggestions");
        matches
    }

    /// Returns the catalog spelling of `name` if it matches an entry case-insensitively.
    pub fn resolve(&self, name: &str) -> Option<&'static str> {
        let needle = name.to_lowercase();
        self.cities
            .iter()
            .copied()
            .find(|city| city.to_lowercase() == needle)
    }
}

impl Default for CityCatalog {
    fn default() -> Self {
        Self::popular()
    }
}
