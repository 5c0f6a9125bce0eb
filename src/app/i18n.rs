use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::RwLock;

// Supported UI languages
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    #[default]
    English,
    Chinese,
}

impl Language {
    pub fn name(&self) -> &'static str {
        match self {
            Language::English => "En",
            Language::Chinese => "中文",
        }
    }

    pub fn all() -> Vec<Language> {
        vec![Language::English, Language::Chinese]
    }

    /// Map a route `lang` parameter (a locale tag such as `en-us` or
    /// `zh-CN`) to a supported UI language. Unrecognized or absent
    /// values fall back to English rather than failing the lookup.
    pub fn from_route_lang(lang: Option<&str>) -> Language {
        let Some(lang) = lang else {
            return Language::default();
        };

        let primary = lang
            .split(['-', '_'])
            .next()
            .unwrap_or(lang)
            .to_lowercase();

        match primary.as_str() {
            "zh" => Language::Chinese,
            "en" => Language::English,
            _ => Language::default(),
        }
    }
}

// Define a type for translations
type Translations = HashMap<String, String>;

// Global state for i18n
lazy_static! {
    static ref CURRENT_LANGUAGE: RwLock<Language> = RwLock::new(Language::default());
    static ref TRANSLATIONS: RwLock<HashMap<Language, Translations>> = RwLock::new(HashMap::new());
}

// Initialize translations
pub fn init() {
    let mut translations = HashMap::new();

    // English translations
    let mut en = HashMap::new();
    // Window menus
    en.insert("shop".to_string(), "Shop".to_string());
    en.insert("exit".to_string(), "Exit".to_string());
    en.insert("help".to_string(), "Help".to_string());
    en.insert("about".to_string(), "About".to_string());

    // Country selector
    en.insert("shipping_to".to_string(), "Shipping to".to_string());
    en.insert("no_countries".to_string(), "No countries available".to_string());

    // Search bar
    en.insert("search_hint".to_string(), "Search the store...".to_string());
    en.insert("clear_search".to_string(), "Clear".to_string());

    // Storefront panel
    en.insert("welcome".to_string(), "Welcome to the {} store".to_string());
    en.insert("pick_country".to_string(), "Pick a shipping country to get started".to_string());
    en.insert("locale_label".to_string(), "Locale: ".to_string());
    en.insert("search_label".to_string(), "Searching for: ".to_string());
    en.insert("no_search".to_string(), "No active search".to_string());
    en.insert("route_label".to_string(), "Route: ".to_string());

    // Chinese translations
    let mut zh = HashMap::new();
    // Window menus
    zh.insert("shop".to_string(), "商店".to_string());
    zh.insert("exit".to_string(), "退出".to_string());
    zh.insert("help".to_string(), "帮助".to_string());
    zh.insert("about".to_string(), "关于".to_string());

    // Country selector
    zh.insert("shipping_to".to_string(), "送货至".to_string());
    zh.insert("no_countries".to_string(), "没有可选国家".to_string());

    // Search bar
    zh.insert("search_hint".to_string(), "搜索商店...".to_string());
    zh.insert("clear_search".to_string(), "清除".to_string());

    // Storefront panel
    zh.insert("welcome".to_string(), "欢迎来到{}商店".to_string());
    zh.insert("pick_country".to_string(), "请先选择送货国家".to_string());
    zh.insert("locale_label".to_string(), "语言区域：".to_string());
    zh.insert("search_label".to_string(), "正在搜索：".to_string());
    zh.insert("no_search".to_string(), "无进行中的搜索".to_string());
    zh.insert("route_label".to_string(), "路由：".to_string());

    // Add about window translations
    init_about_translations(&mut en, &mut zh);

    // Add translations to the global map
    translations.insert(Language::English, en);
    translations.insert(Language::Chinese, zh);

    // Store translations
    let mut global_translations = TRANSLATIONS.write().unwrap();
    *global_translations = translations;
}

// Add about window translations
fn init_about_translations(en: &mut HashMap<String, String>, zh: &mut HashMap<String, String>) {
    // About window - English
    en.insert("app_name".to_string(), "Shopwindow".to_string());
    en.insert(
        "app_description".to_string(),
        "A desktop storefront window. Pick a shipping country and the store follows you there."
            .to_string(),
    );

    // About window - Chinese
    zh.insert("app_name".to_string(), "橱窗".to_string());
    zh.insert(
        "app_description".to_string(),
        "一个桌面商店橱窗。选择送货国家，商店随之切换。".to_string(),
    );
}

// Set the current language
pub fn set_language(lang: Language) {
    let mut current = CURRENT_LANGUAGE.write().unwrap();
    *current = lang;
}

// Get the current language
pub fn get_language() -> Language {
    *CURRENT_LANGUAGE.read().unwrap()
}

// Translate a key to the current language
pub fn t(key: &str) -> String {
    let lang = *CURRENT_LANGUAGE.read().unwrap();
    let translations = TRANSLATIONS.read().unwrap();

    if let Some(lang_translations) = translations.get(&lang) {
        if let Some(translation) = lang_translations.get(key) {
            return translation.clone();
        }
    }

    // Return the key if no translation is found
    key.to_string()
}

// Translate a key with format arguments
pub fn tf(key: &str, args: &[&str]) -> String {
    let translated_format = t(key);
    // Simple replacement of {} with arguments
    let mut result = translated_format;
    for arg in args {
        if let Some(pos) = result.find("{}") {
            result.replace_range(pos..pos + 2, arg);
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn route_lang_maps_locale_tags() {
        assert_eq!(Language::from_route_lang(Some("en-us")), Language::English);
        assert_eq!(Language::from_route_lang(Some("zh-CN")), Language::Chinese);
        assert_eq!(Language::from_route_lang(Some("zh_TW")), Language::Chinese);
    }

    #[test]
    fn unknown_route_lang_falls_back_to_english() {
        assert_eq!(Language::from_route_lang(Some("fr-fr")), Language::English);
        assert_eq!(Language::from_route_lang(Some("")), Language::English);
        assert_eq!(Language::from_route_lang(None), Language::English);
    }

    #[test]
    fn every_language_carries_the_selector_phrase() {
        init();

        let translations = TRANSLATIONS.read().unwrap();
        for lang in Language::all() {
            let table = translations.get(&lang).unwrap();
            assert!(table.contains_key("shipping_to"), "{:?}", lang);
        }
    }

    // Single test for everything touching the global language state,
    // so parallel test threads can't race on set_language.
    #[test]
    fn phrase_lookup_and_fallback() {
        init();

        set_language(Language::English);
        assert_eq!(t("shipping_to"), "Shipping to");
        assert_eq!(t("not_a_real_key"), "not_a_real_key");
        assert_eq!(
            tf("welcome", &["United States"]),
            "Welcome to the United States store"
        );

        set_language(Language::Chinese);
        assert_eq!(t("shipping_to"), "送货至");

        set_language(Language::English);
    }
}
