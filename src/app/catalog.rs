use itertools::Itertools;
use serde::{Deserialize, Serialize};

// Shipped with the binary so a missing or broken asset file still
// yields a usable storefront.
const DEFAULT_CATALOG_JSON: &str = include_str!("../../assets/countries.json");

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRef {
    pub url: String,
}

/// A selectable shipping destination as supplied by the catalog:
/// country code, display name, flag image and the locale used to build
/// the destination route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    pub code: String,
    pub name: String,
    pub image: ImageRef,
    #[serde(rename = "defaultLocale")]
    pub default_locale: String,
}

/// Render-ready view of a [`Country`]: `value` and `default_locale`
/// are lowercased so route comparison and route building never have to
/// think about case again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryOption {
    pub value: String,
    pub name: String,
    pub image_url: String,
    pub default_locale: String,
}

impl CountryOption {
    fn from_country(country: &Country) -> Self {
        Self {
            value: country.code.to_lowercase(),
            name: country.name.clone(),
            image_url: country.image.url.clone(),
            default_locale: country.default_locale.to_lowercase(),
        }
    }
}

#[derive(Debug, Clone)]
pub enum CatalogError {
    Malformed(String),
}

impl std::fmt::Display for CatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            CatalogError::Malformed(err) => write!(f, "Couldn't parse catalog: {}", err),
        }
    }
}

/// The ordered set of shipping destinations. Order is preserved as
/// given in the source data and reflects menu order.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    countries: Vec<Country>,
}

impl Catalog {
    /// Load the catalog from the assets directory, falling back to the
    /// compiled-in default. Never fails; a broken asset file is logged
    /// and skipped.
    pub fn load() -> Self {
        let asset_paths = [
            "./assets/countries.json",
            "../assets/countries.json",
            "../Resources/assets/countries.json",
        ];

        for path in asset_paths {
            let Ok(raw) = std::fs::read_to_string(path) else {
                continue;
            };
            match Self::from_json(&raw) {
                Ok(catalog) => {
                    tracing::info!(
                        "Loaded {} countries from {}",
                        catalog.countries.len(),
                        path
                    );
                    return catalog;
                }
                Err(err) => {
                    tracing::error!("Ignoring catalog at {}: {}", path, err);
                }
            }
        }

        tracing::info!("Using built-in country catalog");
        Self::from_json(DEFAULT_CATALOG_JSON).unwrap_or_else(|err| {
            // Only reachable if the embedded asset itself is broken
            tracing::error!("Built-in catalog failed to parse: {}", err);
            Self::default()
        })
    }

    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        let countries: Vec<Country> =
            serde_json::from_str(raw).map_err(|err| CatalogError::Malformed(err.to_string()))?;
        Ok(Self { countries })
    }

    pub fn from_countries(countries: Vec<Country>) -> Self {
        Self { countries }
    }

    pub fn countries(&self) -> &[Country] {
        &self.countries
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }

    /// Derive the render-ready options, keeping input order. Exactly
    /// one option survives per distinct lowercase code; later
    /// duplicates are dropped with a warning.
    pub fn options(&self) -> Vec<CountryOption> {
        let before = self.countries.len();
        let options: Vec<CountryOption> = self
            .countries
            .iter()
            .map(CountryOption::from_country)
            .unique_by(|option| option.value.clone())
            .collect();

        if options.len() < before {
            tracing::warn!(
                "Dropped {} duplicate country code(s) from catalog",
                before - options.len()
            );
        }

        options
    }
}

/// The option addressed by the route's country-code parameter, if any.
pub fn selected_option<'a>(
    options: &'a [CountryOption],
    country_code: Option<&str>,
) -> Option<&'a CountryOption> {
    let code = country_code?;
    options.iter().find(|option| option.value == code)
}

/// What the toggle button shows: the matched option, or the first
/// option when the route addresses nothing. `None` only for an empty
/// catalog.
pub fn display_option<'a>(
    options: &'a [CountryOption],
    country_code: Option<&str>,
) -> Option<&'a CountryOption> {
    selected_option(options, country_code).or_else(|| options.first())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn country(code: &str, name: &str, locale: &str) -> Country {
        Country {
            code: code.to_string(),
            name: name.to_string(),
            image: ImageRef {
                url: format!("https://flagcdn.com/{}.svg", code.to_lowercase()),
            },
            default_locale: locale.to_string(),
        }
    }

    #[test]
    fn options_lowercase_code_and_locale() {
        let catalog = Catalog::from_countries(vec![country("US", "United States", "en-US")]);
        let options = catalog.options();

        assert_eq!(options.len(), 1);
        assert_eq!(options[0].value, "us");
        assert_eq!(options[0].default_locale, "en-us");
        assert_eq!(options[0].name, "United States");
    }

    #[test]
    fn options_preserve_input_order() {
        let catalog = Catalog::from_countries(vec![
            country("GB", "United Kingdom", "en-GB"),
            country("US", "United States", "en-US"),
            country("FR", "France", "fr-FR"),
        ]);

        let values: Vec<String> = catalog.options().iter().map(|o| o.value.clone()).collect();

        assert_eq!(values, vec!["gb", "us", "fr"]);
    }

    #[test]
    fn duplicate_codes_keep_first_occurrence() {
        let catalog = Catalog::from_countries(vec![
            country("US", "United States", "en-US"),
            country("us", "United States (dup)", "en-US"),
        ]);
        let options = catalog.options();

        assert_eq!(options.len(), 1);
        assert_eq!(options[0].name, "United States");
    }

    #[test]
    fn selected_option_matches_route_code() {
        let catalog = Catalog::from_countries(vec![
            country("US", "United States", "en-US"),
            country("GB", "United Kingdom", "en-GB"),
        ]);
        let options = catalog.options();

        let selected = selected_option(&options, Some("gb"));
        assert_eq!(selected.map(|o| o.name.as_str()), Some("United Kingdom"));
    }

    #[test]
    fn unmatched_route_code_selects_nothing() {
        let catalog = Catalog::from_countries(vec![
            country("US", "United States", "en-US"),
            country("GB", "United Kingdom", "en-GB"),
        ]);
        let options = catalog.options();

        assert_eq!(selected_option(&options, Some("fr")), None);
        assert_eq!(selected_option(&options, None), None);
    }

    #[test]
    fn display_falls_back_to_first_option() {
        let catalog = Catalog::from_countries(vec![
            country("US", "United States", "en-US"),
            country("GB", "United Kingdom", "en-GB"),
        ]);
        let options = catalog.options();

        let shown = display_option(&options, Some("fr"));
        assert_eq!(shown.map(|o| o.value.as_str()), Some("us"));
    }

    #[test]
    fn empty_catalog_displays_nothing() {
        let catalog = Catalog::from_countries(vec![]);
        let options = catalog.options();

        assert!(catalog.is_empty());
        assert_eq!(display_option(&options, Some("us")), None);
    }

    #[test]
    fn built_in_catalog_parses() {
        let catalog = Catalog::from_json(DEFAULT_CATALOG_JSON).unwrap();

        assert!(!catalog.is_empty());
        // every built-in entry must survive derivation
        assert_eq!(catalog.options().len(), catalog.countries().len());
    }
}
