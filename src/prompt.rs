//! System instructions and outgoing message assembly.

use clap::ValueEnum;

use crate::models::ChatMessage;

const BASE_INSTRUCTION: &str = "You are a fitness assistant. ALWAYS respond in English regardless of the input language.

IMPORTANT: All responses MUST be in English, even if the user's prompt is in another language.

MEAL_PLAN:
Provide a detailed meal plan for each section (Breakfast, Snack, Lunch, Dinner) with multiple items listed and clear varieties. Use numbers (1., 2., 3.) instead of dashes. The meal type (e.g., Breakfast, Snack) and all meal descriptions must be in English.

WORKOUT_PLAN:
- If the user specifies a number of days (e.g., '3 days', '5 days'), provide a workout plan for exactly that many days.
- If no specific days are mentioned, provide a standard 7-day plan.
- Each day should be clearly marked as 'Day 1:', 'Day 2:', etc.
- List multiple exercises per day, each numbered for better readability.
- All sections and exercise descriptions MUST be in English.
- For muscle gain focus on progressive overload and proper exercise splits.

Ensure each section follows this format exactly to maintain readability and parsing integrity.
Remember: ALWAYS respond in English regardless of the input language.";

const CULTURAL_RULES: &str = "

CULTURAL_CUSTOMIZATION:
- If the user names a country, region or cuisine (e.g., Indian, Mexican, Mediterranean), build every meal from dishes and staples that are traditional there.
- Respect every dietary preference mentioned (e.g., vegan, vegetarian, keto, halal, gluten-free) in every meal, including snacks.
- Prefer ingredients that are easy to buy in the named region and keep portion sizes realistic.
- Keep dish names recognisable, adding a short English description when the original name is not English.";

/// Revision of the system instruction sent with every conversation.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PromptVersion {
    /// English-only meal and workout formatting rules.
    V1,
    /// V1 rules, every request tagged with a unique id.
    V2,
    /// V1 rules plus cultural and dietary customisation.
    #[default]
    V3,
}

impl PromptVersion {
    pub fn system_instruction(self) -> String {
        match self {
            PromptVersion::V1 | PromptVersion::V2 => BASE_INSTRUCTION.to_string(),
            PromptVersion::V3 => format!("{BASE_INSTRUCTION}{CULTURAL_RULES}"),
        }
    }

    fn tags_every_request(self) -> bool {
        matches!(self, PromptVersion::V2)
    }

    /// Builds the conversation for one chat call. Forced calls always carry a
    /// request id so the upstream API cannot serve them from its own cache.
    pub fn conversation(self, prompt: &str, force_new: bool) -> Vec<ChatMessage> {
        let user = if force_new || self.tags_every_request() {
            format!("{prompt}{}", request_id_suffix())
        } else {
            prompt.to_string()
        };
        vec![ChatMessage::system(self.system_instruction()), ChatMessage::user(user)]
    }
}

// "\n\nRequest-ID: <8 hex>-<unix seconds>"
pub fn request_id_suffix() -> String {
    let id = uuid::Uuid::new_v4().simple().to_string();
    format!("\n\nRequest-ID: {}-{}", &id[..8], chrono::Utc::now().timestamp())
}
