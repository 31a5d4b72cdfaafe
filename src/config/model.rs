//! Configuration data model.
//!
//! All structs derive `Serialize`/`Deserialize` for TOML persistence.
//! Every field has a default so the carousel runs without a config file.

use serde::{Deserialize, Serialize};

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub hero: HeroConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Structure and content of the hero region.
///
/// The container and both controls are required; an empty string is
/// treated as a missing element and rejected at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeroConfig {
    #[serde(default = "default_container")]
    pub container: String,
    #[serde(default = "default_prev_control")]
    pub prev_control: String,
    #[serde(default = "default_next_control")]
    pub next_control: String,
    #[serde(default = "default_slides")]
    pub slides: Vec<SlideConfig>,
}

impl Default for HeroConfig {
    fn default() -> Self {
        Self {
            container: default_container(),
            prev_control: default_prev_control(),
            next_control: default_next_control(),
            slides: default_slides(),
        }
    }
}

/// Content of one hero slide.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlideConfig {
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default)]
    pub cta: Option<String>,
    /// Named colour (`"cyan"`, `"magenta"`, `"#ffaa00"`, ...).
    #[serde(default = "default_accent")]
    pub accent: String,
}

/// Diagnostic log settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            log_dir: default_log_dir(),
            level: default_log_level(),
        }
    }
}

fn default_container() -> String {
    "heroCarousel".to_string()
}
fn default_prev_control() -> String {
    "‹".to_string()
}
fn default_next_control() -> String {
    "›".to_string()
}
fn default_accent() -> String {
    "white".to_string()
}
fn default_log_dir() -> String {
    "~/.local/share/herocarousel/logs".to_string()
}
fn default_log_level() -> String {
    "info".to_string()
}

fn default_slides() -> Vec<SlideConfig> {
    vec![
        SlideConfig {
            title: "New Season Arrivals".into(),
            subtitle: "Fresh styles for every day, hand-picked for you".into(),
            cta: Some("Shop Now".into()),
            accent: "cyan".into(),
        },
        SlideConfig {
            title: "Up to 50% Off".into(),
            subtitle: "Limited-time deals across the whole store".into(),
            cta: Some("Browse Deals".into()),
            accent: "magenta".into(),
        },
        SlideConfig {
            title: "Free Shipping".into(),
            subtitle: "On every order, no minimum spend".into(),
            cta: Some("Start Shopping".into()),
            accent: "yellow".into(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use crate::config::parse_config;

    #[test]
    fn test_empty_file_uses_defaults() {
        let cfg = parse_config("").unwrap();
        assert_eq!(cfg.hero.container, "heroCarousel");
        assert_eq!(cfg.hero.slides.len(), 3);
        assert!(!cfg.logging.enabled);
        assert_eq!(cfg.logging.level, "info");
    }

    #[test]
    fn test_custom_slides_replace_defaults() {
        let cfg = parse_config(
            r#"
            [hero]
            next_control = ">"

            [[hero.slides]]
            title = "Only one"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.hero.next_control, ">");
        assert_eq!(cfg.hero.prev_control, "‹");
        assert_eq!(cfg.hero.slides.len(), 1);
        assert_eq!(cfg.hero.slides[0].accent, "white");
        assert_eq!(cfg.hero.slides[0].cta, None);
    }

    #[test]
    fn test_explicit_empty_slide_list() {
        let cfg = parse_config("[hero]\nslides = []\n").unwrap();
        assert!(cfg.hero.slides.is_empty());
    }

    #[test]
    fn test_slide_requires_title() {
        assert!(parse_config("[[hero.slides]]\nsubtitle = \"x\"\n").is_err());
    }
}
