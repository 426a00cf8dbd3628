use std::rc::Rc;

use chrono::NaiveDate;
use log::warn;
use serde::Deserialize;
use yew::prelude::*;

use crate::error::ContentError;

const SITE_JSON: &str = include_str!("../content/site.json");

#[derive(Deserialize, Clone, PartialEq, Debug, Default)]
#[serde(default)]
pub struct SiteContent {
    pub hero: HeroContent,
    pub product: ProductContent,
    pub company: CompanyContent,
    pub masterplan: MasterplanContent,
    pub news: NewsContent,
    pub careers: CareersContent,
    pub footer: FooterContent,
}

#[derive(Deserialize, Clone, PartialEq, Debug, Default)]
#[serde(default)]
pub struct HeroContent {
    pub headline: String,
    pub subline: String,
    pub cta_link: String,
    pub background: String,
    pub stats: Vec<HeroStat>,
    pub announcement: Option<Announcement>,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct HeroStat {
    pub value: String,
    pub label: String,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct Announcement {
    pub badge: String,
    pub text: String,
    pub href: String,
}

#[derive(Deserialize, Clone, PartialEq, Debug, Default)]
#[serde(default)]
pub struct ProductContent {
    pub name: String,
    pub tagline: String,
    pub hero_subtitle: String,
    pub company: String,
    pub video: String,
    pub poster: String,
    pub cta_background: String,
    pub safety_stats: Vec<SafetyStat>,
    pub feature_cards: Vec<FeatureCard>,
    pub specs: Vec<Spec>,
    pub comparisons: Vec<ComparisonSlide>,
    pub showcase_sections: Vec<ShowcaseSection>,
    pub tech_highlights: Vec<TechHighlight>,
    pub detailed_specs: Vec<Spec>,
    pub timeline: Vec<Milestone>,
    pub trust_badges: Vec<String>,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct SafetyStat {
    pub label: String,
    pub value: String,
    pub unit: String,
    #[serde(default)]
    pub icon: SafetyIcon,
}

#[derive(Deserialize, Clone, Copy, PartialEq, Eq, Debug, Default)]
#[serde(rename_all = "snake_case")]
pub enum SafetyIcon {
    #[default]
    FlightControl,
    Power,
    Battery,
    Communication,
    Navigation,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct FeatureCard {
    pub id: String,
    pub title: String,
    pub description: String,
    pub image: String,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct Spec {
    pub label: String,
    pub value: String,
    pub unit: String,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct ComparisonSlide {
    pub id: String,
    pub title: String,
    pub caption: String,
    pub before: ComparisonImage,
    pub after: ComparisonImage,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct ComparisonImage {
    pub src: String,
    pub label: String,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct ShowcaseSection {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub image: String,
    #[serde(default)]
    pub alignment: Alignment,
}

#[derive(Deserialize, Clone, Copy, PartialEq, Eq, Debug, Default)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    #[default]
    Center,
    Left,
    Right,
}

impl Alignment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Alignment::Center => "center",
            Alignment::Left => "left",
            Alignment::Right => "right",
        }
    }
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct TechHighlight {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub stats: Vec<TechStat>,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct TechStat {
    pub value: String,
    pub unit: String,
    pub label: String,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct Milestone {
    pub year: String,
    pub title: String,
    pub status: MilestoneStatus,
}

#[derive(Deserialize, Clone, Copy, PartialEq, Eq, Debug)]
#[serde(rename_all = "lowercase")]
pub enum MilestoneStatus {
    Completed,
    Current,
    Upcoming,
}

impl MilestoneStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MilestoneStatus::Completed => "completed",
            MilestoneStatus::Current => "current",
            MilestoneStatus::Upcoming => "upcoming",
        }
    }
}

#[derive(Deserialize, Clone, PartialEq, Debug, Default)]
#[serde(default)]
pub struct CompanyContent {
    pub title: String,
    pub intro: String,
    pub quote: String,
    pub team: String,
}

#[derive(Deserialize, Clone, PartialEq, Debug, Default)]
#[serde(default)]
pub struct MasterplanContent {
    pub title: String,
    pub phases: Vec<String>,
    pub quote: String,
}

#[derive(Deserialize, Clone, PartialEq, Debug, Default)]
#[serde(default)]
pub struct NewsContent {
    pub title: String,
    pub items: Vec<NewsItem>,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct NewsItem {
    pub title: String,
    pub date: NaiveDate,
}

impl NewsItem {
    pub fn display_date(&self) -> String {
        self.date.format("%B %-d, %Y").to_string()
    }
}

#[derive(Deserialize, Clone, PartialEq, Debug, Default)]
#[serde(default)]
pub struct CareersContent {
    pub title: String,
    pub body: String,
    pub quote: String,
}

#[derive(Deserialize, Clone, PartialEq, Debug, Default)]
#[serde(default)]
pub struct FooterContent {
    pub brand: String,
    pub tagline: String,
    pub description: String,
    pub columns: Vec<LinkColumn>,
    pub socials: Vec<SocialLink>,
    pub partners: Vec<Partner>,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct LinkColumn {
    pub title: String,
    pub links: Vec<FooterLink>,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct FooterLink {
    pub name: String,
    pub href: String,
    #[serde(default)]
    pub badge: Option<String>,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct SocialLink {
    pub name: String,
    pub href: String,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct Partner {
    pub name: String,
    pub href: String,
    pub logo: String,
}

impl Spec {
    /// Grouping used by the detailed specifications grid.
    pub fn category(&self) -> &'static str {
        match self.label.as_str() {
            "Max Range" | "Top Speed" | "Cruise Speed" | "Max Altitude" => "Performance",
            "Passengers" | "Cargo Capacity" => "Capacity",
            "Battery" | "Charge Time" => "Power",
            "Length" | "Wingspan" | "Height" | "MTOW" => "Dimensions",
            _ => "General",
        }
    }

    /// Values of 1000 or more get thousands separators, everything else is shown verbatim.
    pub fn display_value(&self) -> String {
        format_spec_value(&self.value)
    }
}

/// Only plain decimal numbers are regrouped; anything else (units baked in,
/// exponents, signs) is returned as written.
pub fn format_spec_value(value: &str) -> String {
    let trimmed = value.trim();
    let (int_part, frac_part) = match trimmed.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (trimmed, None),
    };
    let is_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    if !is_digits(int_part) || !frac_part.map_or(true, is_digits) {
        return value.to_string();
    }
    let whole: u64 = match int_part.parse() {
        Ok(v) => v,
        Err(_) => return value.to_string(),
    };
    if whole < 1000 {
        return value.to_string();
    }

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    match frac_part {
        Some(f) => format!("{}.{}", grouped, f),
        None => grouped,
    }
}

/// Splits copy on embedded newlines so each line can be rendered with a `<br/>`.
pub fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split('\n')
}

pub fn parse(json: &str) -> Result<SiteContent, ContentError> {
    Ok(serde_json::from_str(json)?)
}

pub fn load() -> SiteContent {
    match parse(SITE_JSON) {
        Ok(content) => content,
        Err(e) => {
            warn!("{}; rendering without copy", e);
            SiteContent::default()
        }
    }
}

#[hook]
pub fn use_site_content() -> Rc<SiteContent> {
    use_context::<Rc<SiteContent>>().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_content_parses() {
        let content = parse(SITE_JSON).expect("site.json should parse");
        assert_eq!(content.product.name, "Shunya One");
        assert_eq!(content.product.safety_stats.len(), 5);
        assert_eq!(content.product.comparisons.len(), 3);
        assert_eq!(content.footer.columns.len(), 4);
        assert_eq!(
            content.product.timeline[1].status,
            MilestoneStatus::Current
        );
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let content = parse(r#"{ "company": { "title": "Us" } }"#).unwrap();
        assert_eq!(content.company.title, "Us");
        assert!(content.product.feature_cards.is_empty());
        assert!(content.hero.announcement.is_none());
    }

    #[test]
    fn malformed_content_is_an_error() {
        assert!(matches!(parse("{ not json"), Err(ContentError::Parse(_))));
    }

    #[test]
    fn spec_categories() {
        let spec = |label: &str| Spec {
            label: label.into(),
            value: "1".into(),
            unit: "".into(),
        };
        assert_eq!(spec("Cruise Speed").category(), "Performance");
        assert_eq!(spec("Cargo Capacity").category(), "Capacity");
        assert_eq!(spec("Charge Time").category(), "Power");
        assert_eq!(spec("MTOW").category(), "Dimensions");
        assert_eq!(spec("Noise").category(), "General");
    }

    #[test]
    fn spec_values_get_thousands_separators() {
        assert_eq!(format_spec_value("1800"), "1,800");
        assert_eq!(format_spec_value("3000"), "3,000");
        assert_eq!(format_spec_value("1250000"), "1,250,000");
        assert_eq!(format_spec_value("1234.5"), "1,234.5");
        assert_eq!(format_spec_value("999"), "999");
        assert_eq!(format_spec_value("12.0"), "12.0");
        assert_eq!(format_spec_value("360°"), "360°");
    }

    #[test]
    fn only_plain_numbers_are_regrouped() {
        assert_eq!(format_spec_value("1e4"), "1e4");
        assert_eq!(format_spec_value("001500"), "1,500");
        assert_eq!(format_spec_value("-2000"), "-2000");
        assert_eq!(format_spec_value("1,800"), "1,800");
        assert_eq!(format_spec_value("2000."), "2000.");
        assert_eq!(format_spec_value("999.9"), "999.9");
    }

    #[test]
    fn news_dates_render_long_form() {
        let item = NewsItem {
            title: "x".into(),
            date: NaiveDate::from_ymd_opt(2025, 9, 10).unwrap(),
        };
        assert_eq!(item.display_date(), "September 10, 2025");
    }
}
