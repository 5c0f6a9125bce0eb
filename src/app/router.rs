// Cap on the navigation log so a long session can't grow it unbounded
const HISTORY_DEPTH: usize = 64;

/// A client-side route: ordered path segments plus the optional
/// `searchBy` query parameter carried across navigations.
///
/// The storefront convention is `/<countryCode>/<locale>`, both
/// segments lowercased. Parsing never fails; anything unparseable
/// collapses to the root route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    segments: Vec<String>,
    search_by: Option<String>,
}

impl Route {
    pub fn root() -> Self {
        Self {
            segments: vec![],
            search_by: None,
        }
    }

    /// Build the destination route for a chosen shipping country.
    /// Both path segments are lowercased on the way in.
    pub fn storefront(country_code: &str, locale: &str, search_by: Option<&str>) -> Self {
        Self {
            segments: vec![country_code.to_lowercase(), locale.to_lowercase()],
            search_by: search_by
                .filter(|s| !s.is_empty())
                .map(|s| s.to_string()),
        }
    }

    pub fn parse(path: &str) -> Self {
        let (path_part, query_part) = match path.split_once('?') {
            Some((p, q)) => (p, Some(q)),
            None => (path, None),
        };

        let segments = path_part
            .split('/')
            .filter(|s| !s.is_empty())
            .map(|s| s.to_string())
            .collect();

        let mut search_by = None;
        if let Some(query) = query_part {
            for pair in query.split('&') {
                let (key, value) = match pair.split_once('=') {
                    Some((k, v)) => (k, v),
                    None => continue,
                };
                if key == "searchBy" && !value.is_empty() {
                    match urlencoding::decode(value) {
                        Ok(decoded) => search_by = Some(decoded.into_owned()),
                        Err(err) => {
                            tracing::warn!("Dropping undecodable searchBy value: {}", err);
                        }
                    }
                }
                // Unknown query keys are ignored
            }
        }

        Self { segments, search_by }
    }

    /// Canonical string form, e.g. `/us/en-us?searchBy=shoes`.
    pub fn to_path(&self) -> String {
        let mut path = if self.segments.is_empty() {
            "/".to_string()
        } else {
            format!("/{}", self.segments.join("/"))
        };
        if let Some(ref search_by) = self.search_by {
            path.push_str("?searchBy=");
            path.push_str(&urlencoding::encode(search_by));
        }
        path
    }

    pub fn country_code(&self) -> Option<&str> {
        self.segments.first().map(String::as_str)
    }

    pub fn lang(&self) -> Option<&str> {
        self.segments.get(1).map(String::as_str)
    }

    pub fn search_by(&self) -> Option<&str> {
        self.search_by.as_deref()
    }

    /// Same path with a different search context. `None` or an empty
    /// string clears it.
    pub fn with_search(&self, search_by: Option<&str>) -> Self {
        Self {
            segments: self.segments.clone(),
            search_by: search_by
                .filter(|s| !s.is_empty())
                .map(|s| s.to_string()),
        }
    }
}

impl Default for Route {
    fn default() -> Self {
        Self::root()
    }
}

/// Owns the current route and a bounded push-only log of past
/// navigations, newest last.
#[derive(Debug, Default)]
pub struct Router {
    current: Route,
    history: Vec<Route>,
}

impl Router {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn starting_at(route: Route) -> Self {
        Self {
            current: route,
            history: vec![],
        }
    }

    pub fn current(&self) -> &Route {
        &self.current
    }

    pub fn push(&mut self, path: &str) {
        self.push_route(Route::parse(path));
    }

    pub fn push_route(&mut self, route: Route) {
        tracing::info!("Navigating to {}", route.to_path());
        self.history.push(std::mem::take(&mut self.current));
        if self.history.len() > HISTORY_DEPTH {
            self.history.remove(0);
        }
        self.current = route;
    }

    pub fn history(&self) -> &[Route] {
        &self.history
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storefront_route_lowercases_segments() {
        let route = Route::storefront("US", "en-US", None);

        assert_eq!(route.to_path(), "/us/en-us");
        assert_eq!(route.country_code(), Some("us"));
        assert_eq!(route.lang(), Some("en-us"));
        assert_eq!(route.search_by(), None);
    }

    #[test]
    fn storefront_route_keeps_search_context() {
        let route = Route::storefront("us", "en-us", Some("shoes"));

        assert_eq!(route.to_path(), "/us/en-us?searchBy=shoes");
        assert_eq!(route.search_by(), Some("shoes"));
    }

    #[test]
    fn parse_reads_segments_and_query() {
        let route = Route::parse("/gb/en-gb?searchBy=boots");

        assert_eq!(route.country_code(), Some("gb"));
        assert_eq!(route.lang(), Some("en-gb"));
        assert_eq!(route.search_by(), Some("boots"));
    }

    #[test]
    fn parse_ignores_unknown_query_keys() {
        let route = Route::parse("/us/en-us?utm=abc&searchBy=socks");

        assert_eq!(route.search_by(), Some("socks"));
    }

    #[test]
    fn parse_of_garbage_is_root() {
        let route = Route::parse("???");

        assert_eq!(route.country_code(), None);
        assert_eq!(route.search_by(), None);
    }

    #[test]
    fn search_values_round_trip_through_encoding() {
        let route = Route::storefront("us", "en-us", Some("red shoes & boots"));
        let reparsed = Route::parse(&route.to_path());

        assert_eq!(reparsed, route);
        assert_eq!(reparsed.search_by(), Some("red shoes & boots"));
    }

    #[test]
    fn with_search_clears_on_empty() {
        let route = Route::storefront("us", "en-us", Some("shoes"));

        assert_eq!(route.with_search(None).search_by(), None);
        assert_eq!(route.with_search(Some("")).search_by(), None);
        assert_eq!(route.with_search(Some("hats")).search_by(), Some("hats"));
    }

    #[test]
    fn router_records_history_newest_last() {
        let mut router = Router::new();
        router.push("/us/en-us");
        router.push("/fr/fr-fr");

        assert_eq!(router.current().to_path(), "/fr/fr-fr");
        assert_eq!(router.history().len(), 2);
        assert_eq!(router.history().last().unwrap().to_path(), "/us/en-us");
    }

    #[test]
    fn router_history_is_bounded() {
        let mut router = Router::new();
        for i in 0..200 {
            router.push(&format!("/us/en-us?searchBy=q{}", i));
        }

        assert_eq!(router.history().len(), HISTORY_DEPTH);
        assert_eq!(router.current().search_by(), Some("q199"));
    }
}
