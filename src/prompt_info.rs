//! Best-effort metadata scraped from a raw prompt.
//!
//! The day count comes from the first `days` mention (case-insensitive): the
//! run of digits whose last digit sits within the four characters right before
//! it. `"5 days"`, `"5days"` and `"10 - days"` all resolve; `"five days"` and
//! `"7-day"` fall back to [`DEFAULT_DAYS`]. Later `days` mentions are ignored.
//!
//! Country and diet keywords are plain substring matches, reported in list
//! order.

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

pub const DEFAULT_DAYS: u32 = 7;

pub const COUNTRIES: &[&str] = &[
    "indian",
    "pakistani",
    "bangladeshi",
    "sri lankan",
    "nepali",
    "chinese",
    "japanese",
    "korean",
    "thai",
    "vietnamese",
    "filipino",
    "indonesian",
    "malaysian",
    "middle eastern",
    "lebanese",
    "turkish",
    "persian",
    "mediterranean",
    "greek",
    "italian",
    "spanish",
    "french",
    "german",
    "british",
    "american",
    "mexican",
    "brazilian",
    "caribbean",
    "ethiopian",
    "nigerian",
    "moroccan",
];

pub const DIETS: &[&str] = &[
    "vegan",
    "vegetarian",
    "pescatarian",
    "keto",
    "paleo",
    "gluten-free",
    "dairy-free",
    "lactose-free",
    "low-carb",
    "high-protein",
    "halal",
    "kosher",
];

lazy_static! {
    static ref DAYS_WORD: Regex = Regex::new(r"(?i)days").expect("valid days regex");
    // digits, then at most three non-digits up to the end of the haystack
    static ref TRAILING_COUNT: Regex = Regex::new(r"(\d+)\D{0,3}$").expect("valid count regex");
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PromptInfo {
    pub requested_days: u32,
    pub countries: Vec<String>,
    pub dietary_preferences: Vec<String>,
}

impl Default for PromptInfo {
    fn default() -> Self {
        Self {
            requested_days: DEFAULT_DAYS,
            countries: Vec::new(),
            dietary_preferences: Vec::new(),
        }
    }
}

impl PromptInfo {
    pub fn extract(prompt: &str) -> Self {
        let lowered = prompt.to_lowercase();
        Self {
            requested_days: requested_days(prompt),
            countries: matching_keywords(&lowered, COUNTRIES),
            dietary_preferences: matching_keywords(&lowered, DIETS),
        }
    }
}

pub fn requested_days(prompt: &str) -> u32 {
    let Some(days) = DAYS_WORD.find(prompt) else {
        return DEFAULT_DAYS;
    };

    TRAILING_COUNT
        .captures(&prompt[..days.start()])
        .and_then(|caps| caps.get(1))
        .and_then(|digits| digits.as_str().parse().ok())
        .unwrap_or(DEFAULT_DAYS)
}

fn matching_keywords(lowered: &str, keywords: &[&str]) -> Vec<String> {
    keywords
        .iter()
        .filter(|keyword| lowered.contains(*keyword))
        .map(|keyword| keyword.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_days_diet_and_country() {
        let info = PromptInfo::extract("Give me a 5 days vegan meal plan for an Indian diet");
        assert_eq!(info.requested_days, 5);
        assert!(info.dietary_preferences.contains(&"vegan".to_string()));
        assert!(info.countries.contains(&"indian".to_string()));
    }

    #[test]
    fn defaults_to_a_week_without_digit_days() {
        assert_eq!(requested_days("Build me a workout plan"), DEFAULT_DAYS);
        assert_eq!(requested_days("Plan for five days please"), DEFAULT_DAYS);
        assert_eq!(requested_days("a 3-day split"), DEFAULT_DAYS);
        assert_eq!(requested_days("days of training"), DEFAULT_DAYS);
    }

    #[test]
    fn reads_digits_close_to_days() {
        assert_eq!(requested_days("3days"), 3);
        assert_eq!(requested_days("Give me 14 DAYS of meals"), 14);
        assert_eq!(requested_days("plan for 10 - days"), 10);
    }

    #[test]
    fn ignores_digits_outside_lookback_window() {
        assert_eq!(requested_days("I am 30 years old, give me some days off"), DEFAULT_DAYS);
        assert_eq!(requested_days("5 workout days"), DEFAULT_DAYS);
    }

    #[test]
    fn only_first_days_mention_counts() {
        assert_eq!(requested_days("a plan for 4 days, then 6 days of rest"), 4);
        assert_eq!(requested_days("some days off, then 6 days of work"), DEFAULT_DAYS);
    }

    #[test]
    fn overflowing_count_falls_back() {
        assert_eq!(requested_days("99999999999999999999 days"), DEFAULT_DAYS);
    }

    #[test]
    fn keyword_order_follows_lists() {
        let info = PromptInfo::extract("KETO and vegan food, Mexican or Italian style");
        assert_eq!(info.countries, vec!["italian", "mexican"]);
        assert_eq!(info.dietary_preferences, vec!["vegan", "keto"]);
    }

    #[test]
    fn repeated_keyword_reported_once() {
        let info = PromptInfo::extract("vegan vegan vegan");
        assert_eq!(info.dietary_preferences, vec!["vegan"]);
        assert!(info.countries.is_empty());
    }
}
