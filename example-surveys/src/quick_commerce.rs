//! Consumer survey on quick-commerce (10-minute delivery) apps.
//!
//! Eight sections, A to H. Section B needs at least one platform, section D at
//! least one product category, and section E a price sensitivity of 1 to 5.
//! Checking "Others" under platforms asks for the platform's name.

use survey_wizard_types::{
    AnyOfField, ConditionalField, Field, FieldKind, GroupRule, OneOfField, RangeRule, Step,
    StepRule, SurveyDefinition,
};

pub const AGE_GROUPS: [&str; 5] = ["Below 20", "20–30", "31–40", "41–50", "Above 50"];

pub const HOUSEHOLD_TYPES: [&str; 3] = ["Nuclear family", "Joint family", "Living alone"];

pub const PLATFORMS: [&str; 5] = [
    "Zepto",
    "Blinkit",
    "Swiggy Instamart",
    "BigBasket Now",
    OTHER_PLATFORM,
];

/// The platform option that reveals the free-text platform name.
pub const OTHER_PLATFORM: &str = "Others";

pub const USAGE_FREQUENCIES: [&str; 5] = [
    "Daily",
    "2–3 times a week",
    "Once a week",
    "Occasionally",
    "Rarely",
];

pub const ORDER_VALUES: [&str; 4] = ["Below ₹300", "₹300–₹600", "₹600–₹1000", "Above ₹1000"];

pub const TIME_SAVED: [&str; 4] = [
    "Less than 15 minutes",
    "15–30 minutes",
    "30–60 minutes",
    "More than 1 hour",
];

pub const PRODUCT_CATEGORIES: [&str; 10] = [
    "Groceries & staples",
    "Dairy & bakery",
    "Snacks & beverages",
    "Personal care items",
    "Emergency / last-minute items",
    "Electronics & accessories",
    "Household essentials",
    "Stationery & office supplies",
    "Medicines & health products",
    "Pet supplies",
];

pub const PURCHASE_FREQUENCY_CHANGES: [&str; 4] = [
    "Increasing significantly",
    "Increasing slightly",
    "No change",
    "Reducing",
];

pub const AGREEMENT: [&str; 5] = [
    "Strongly agree",
    "Agree",
    "Neutral",
    "Disagree",
    "Strongly disagree",
];

pub const PRICE_COMPARISONS: [&str; 5] = [
    "Much higher",
    "Slightly higher",
    "Almost the same",
    "Slightly lower",
    "Much lower",
];

pub const LOCAL_SHOP_IMPACTS: [&str; 4] = [
    "Yes, significantly",
    "Yes, to some extent",
    "No change",
    "Increased visits to local shops",
];

pub const IMPORTANCE: [&str; 4] = ["Very Important", "Important", "Neutral", "Not Important"];

pub const SATISFACTION: [&str; 5] = [
    "Very satisfied",
    "Satisfied",
    "Neutral",
    "Dissatisfied",
    "Very dissatisfied",
];

pub const FUTURE_USAGE: [&str; 3] = ["Yes", "No", "Not sure"];

/// Lowest and highest accepted price sensitivity.
pub const PRICE_SENSITIVITY: (i64, i64) = (1, 5);

pub const PLATFORMS_ERROR: &str = "platforms_error";
pub const CATEGORIES_ERROR: &str = "categories_error";
pub const PRICE_ERROR: &str = "price_error";

fn dropdown(name: &str, label: &str, options: &[&str]) -> Field {
    Field::required(
        name,
        label,
        FieldKind::OneOf(OneOfField::dropdown(options.iter().copied())),
    )
}

fn radio(name: &str, label: &str, options: &[&str]) -> Field {
    Field::required(
        name,
        label,
        FieldKind::OneOf(OneOfField::radio(options.iter().copied())),
    )
}

// Checkbox groups are enforced by a group rule, not by the required flag.
fn checkboxes(name: &str, label: &str, options: &[&str]) -> Field {
    Field::optional(
        name,
        label,
        FieldKind::AnyOf(AnyOfField::new(options.iter().copied())),
    )
}

fn profile() -> Step {
    Step::new(
        "Respondent profile",
        vec![
            Field::required("full_name", "Full name", FieldKind::Input),
            Field::required("email", "Email address", FieldKind::Email),
            dropdown("age_group", "Age group", &AGE_GROUPS),
            radio("household_type", "Household type", &HOUSEHOLD_TYPES),
        ],
    )
}

fn awareness_and_usage() -> Step {
    Step::new(
        "Awareness and usage",
        vec![
            Field::required(
                "awareness",
                "Are you aware of quick-commerce apps?",
                FieldKind::Confirm,
            ),
            checkboxes("platforms_used", "Which platforms have you used?", &PLATFORMS),
            Field::optional(
                "other_platform_name",
                "Name of the other platform",
                FieldKind::Input,
            ),
            dropdown("most_used_platform", "Which platform do you use most?", &PLATFORMS),
            radio("usage_frequency", "How often do you order?", &USAGE_FREQUENCIES),
        ],
    )
    .with_rule(StepRule::AtLeastOne(GroupRule::new(
        "platforms_used",
        PLATFORMS_ERROR,
    )))
}

fn spending() -> Step {
    Step::new(
        "Spending and convenience",
        vec![
            radio("average_order_value", "Average order value", &ORDER_VALUES),
            radio(
                "time_saved",
                "Time saved compared to a store visit",
                &TIME_SAVED,
            ),
        ],
    )
}

fn purchase_behaviour() -> Step {
    Step::new(
        "Purchase behaviour",
        vec![
            checkboxes(
                "product_categories",
                "What do you usually buy?",
                &PRODUCT_CATEGORIES,
            ),
            radio(
                "purchase_frequency_change",
                "How has your purchase frequency changed?",
                &PURCHASE_FREQUENCY_CHANGES,
            ),
            radio(
                "impulse_buying",
                "Quick delivery makes me buy on impulse",
                &AGREEMENT,
            ),
        ],
    )
    .with_rule(StepRule::AtLeastOne(GroupRule::new(
        "product_categories",
        CATEGORIES_ERROR,
    )))
}

fn pricing() -> Step {
    let (min, max) = PRICE_SENSITIVITY;
    Step::new(
        "Pricing and local shops",
        vec![
            Field::required(
                "price_sensitivity",
                "How price sensitive are you? (1 = not at all, 5 = very)",
                FieldKind::Int,
            ),
            radio(
                "price_comparison",
                "Prices compared to local stores",
                &PRICE_COMPARISONS,
            ),
            radio(
                "local_shops_impact",
                "Have you reduced visits to local shops?",
                &LOCAL_SHOP_IMPACTS,
            ),
        ],
    )
    .with_rule(StepRule::Range(RangeRule::new(
        "price_sensitivity",
        min,
        max,
        PRICE_ERROR,
    )))
}

fn priorities() -> Step {
    Step::new(
        "What matters",
        vec![
            radio("importance_delivery", "Delivery speed", &IMPORTANCE),
            radio("importance_convenience", "Convenience", &IMPORTANCE),
            radio("importance_pricing", "Pricing and discounts", &IMPORTANCE),
            radio("importance_availability", "Product availability", &IMPORTANCE),
        ],
    )
}

fn satisfaction() -> Step {
    Step::new(
        "Satisfaction",
        vec![
            radio(
                "overall_satisfaction",
                "Overall satisfaction",
                &SATISFACTION,
            ),
            radio(
                "future_usage_intent",
                "Will you keep using quick-commerce apps?",
                &FUTURE_USAGE,
            ),
        ],
    )
}

fn comments() -> Step {
    Step::new(
        "Your thoughts",
        vec![Field::optional(
            "qualitative_response",
            "Anything else you would like to share?",
            FieldKind::Multiline,
        )],
    )
}

/// The full eight-section survey.
pub fn quick_commerce() -> SurveyDefinition {
    SurveyDefinition::new(
        "Quick Commerce Consumer Survey",
        vec![
            profile(),
            awareness_and_usage(),
            spending(),
            purchase_behaviour(),
            pricing(),
            priorities(),
            satisfaction(),
            comments(),
        ],
    )
    .with_conditional(ConditionalField::new(
        "platforms_used",
        OTHER_PLATFORM,
        "other_platform_name",
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn definition_is_consistent() {
        let survey = quick_commerce();
        survey.check().unwrap();
        assert_eq!(survey.len(), 8);
        assert_eq!(survey.fields().count(), 24);
    }

    #[test]
    fn rules_live_in_their_sections() {
        let survey = quick_commerce();
        assert_eq!(survey.step_of(&"platforms_used".into()), Some(1));
        assert_eq!(survey.step_of(&"product_categories".into()), Some(3));
        assert_eq!(survey.step_of(&"price_sensitivity".into()), Some(4));

        let indicators: Vec<&str> = survey.indicators().map(|i| i.as_str()).collect();
        assert_eq!(indicators, [PLATFORMS_ERROR, CATEGORIES_ERROR, PRICE_ERROR]);
    }

    #[test]
    fn other_platform_follows_checkbox() {
        let survey = quick_commerce();
        let conditional = &survey.conditionals()[0];
        assert_eq!(conditional.trigger_value, OTHER_PLATFORM);
        assert_eq!(conditional.dependent.as_str(), "other_platform_name");
    }
}
