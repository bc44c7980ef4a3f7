//! Field and step validation.
//!
//! Every check reports through [`FieldView`], so the same rules drive a real
//! surface and the recording surface used in tests.

use survey_wizard_types::{FieldName, FieldView, Form, GroupRule, RangeRule, Step, StepRule};

/// Parse `raw` as an integer and check it lies in `min..=max`.
///
/// Surrounding whitespace is ignored; anything else that is not a plain
/// integer fails.
pub fn check_range(raw: &str, min: i64, max: i64) -> bool {
    raw.trim()
        .parse::<i64>()
        .is_ok_and(|value| (min..=max).contains(&value))
}

/// Check a required field has a value.
///
/// Radio groups and dropdowns pass once an option is picked, checkbox groups
/// once one member is checked. Optional fields always pass.
pub fn check_required(name: &FieldName, form: &Form) -> bool {
    !form.is_required(name) || !form.is_blank(name)
}

/// Run a range rule and mark or clear its field and indicator.
pub fn validate_range(rule: &RangeRule, form: &Form, view: &mut impl FieldView) -> bool {
    let raw = form.get_text(&rule.field).unwrap_or_default();
    let valid = check_range(raw, rule.min, rule.max);
    view.set_field_invalid(&rule.field, !valid);
    view.set_indicator(&rule.indicator, !valid);
    valid
}

/// Clear a range rule's marking without re-validating.
///
/// Called on every edit of the field; the value is checked again on blur or
/// on the next advance.
pub fn clear_range(rule: &RangeRule, view: &mut impl FieldView) {
    view.set_field_invalid(&rule.field, false);
    view.set_indicator(&rule.indicator, false);
}

/// Blur handler for a range field: validate only when something was typed.
pub fn validate_range_on_blur(rule: &RangeRule, form: &Form, view: &mut impl FieldView) -> Option<bool> {
    if form.is_blank(&rule.field) {
        return None;
    }
    Some(validate_range(rule, form, view))
}

/// Run an at-least-one rule and show or hide its indicator.
pub fn validate_group(rule: &GroupRule, form: &Form, view: &mut impl FieldView) -> bool {
    let valid = form
        .get_checked(&rule.group)
        .is_ok_and(|checked| !checked.is_empty());
    view.set_indicator(&rule.indicator, !valid);
    valid
}

/// Validate every required field and every rule of `step`.
///
/// All checks run even after one fails, so every indicator of the step is up
/// to date after a single call. Fields that fail the required check get their
/// native validity report.
pub fn validate_step(step: &Step, form: &Form, view: &mut impl FieldView) -> bool {
    let mut valid = true;

    for field in &step.fields {
        if !check_required(field.name(), form) {
            view.report_validity(field.name());
            valid = false;
        }
    }

    for rule in &step.rules {
        let passed = match rule {
            StepRule::AtLeastOne(group) => validate_group(group, form, view),
            StepRule::Range(range) => validate_range(range, form, view),
        };
        valid &= passed;
    }

    valid
}

/// The first field of `step`, in document order, that would fail validation.
pub fn first_invalid<'a>(step: &'a Step, form: &Form) -> Option<&'a FieldName> {
    step.fields.iter().map(|f| f.name()).find(|name| {
        if !check_required(name, form) {
            return true;
        }
        step.range_rule(name).is_some_and(|rule| {
            let raw = form.get_text(name).unwrap_or_default();
            !check_range(raw, rule.min, rule.max)
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RecordingSurface;
    use survey_wizard_types::{AnyOfField, Field, FieldKind, OneOfField, SurveyDefinition};

    fn pricing_step() -> Step {
        Step::new(
            "Pricing",
            vec![
                Field::required("price_sensitivity", "Price sensitivity", FieldKind::Int),
                Field::required(
                    "awareness",
                    "Aware?",
                    FieldKind::OneOf(OneOfField::radio(["true", "false"])),
                ),
                Field::required(
                    "product_categories",
                    "Categories",
                    FieldKind::AnyOf(AnyOfField::new(["Groceries", "Snacks"])),
                ),
            ],
        )
        .with_rule(StepRule::AtLeastOne(GroupRule::new(
            "product_categories",
            "categories_error",
        )))
        .with_rule(StepRule::Range(RangeRule::new(
            "price_sensitivity",
            1,
            5,
            "price_error",
        )))
    }

    fn form_for(step: &Step) -> Form {
        Form::new(&SurveyDefinition::new("T", vec![step.clone()]))
    }

    #[test]
    fn range_rejects_out_of_bounds_and_garbage() {
        for raw in ["0", "6", "abc", "", "-1", "2.5", "1e1"] {
            assert!(!check_range(raw, 1, 5), "{raw:?} should fail");
        }
        for raw in ["1", "2", "3", "4", "5", " 3 "] {
            assert!(check_range(raw, 1, 5), "{raw:?} should pass");
        }
    }

    #[test]
    fn range_marks_and_clears() {
        let step = pricing_step();
        let rule = step.range_rule(&"price_sensitivity".into()).unwrap().clone();
        let mut form = form_for(&step);
        let mut view = RecordingSurface::new();

        form.set(&rule.field, "9").unwrap();
        assert!(!validate_range(&rule, &form, &mut view));
        assert!(view.is_field_invalid(&rule.field));
        assert!(view.is_indicator_visible(&rule.indicator));

        clear_range(&rule, &mut view);
        assert!(!view.is_field_invalid(&rule.field));
        assert!(!view.is_indicator_visible(&rule.indicator));

        form.set(&rule.field, "4").unwrap();
        assert!(validate_range(&rule, &form, &mut view));
        assert!(!view.is_field_invalid(&rule.field));
    }

    #[test]
    fn blur_skips_empty_range_field() {
        let step = pricing_step();
        let rule = step.range_rule(&"price_sensitivity".into()).unwrap().clone();
        let form = form_for(&step);
        let mut view = RecordingSurface::new();

        assert_eq!(validate_range_on_blur(&rule, &form, &mut view), None);
        assert!(!view.is_indicator_visible(&rule.indicator));
    }

    #[test]
    fn step_runs_every_check() {
        let step = pricing_step();
        let form = form_for(&step);
        let mut view = RecordingSurface::new();

        assert!(!validate_step(&step, &form, &mut view));

        assert!(view.is_indicator_visible(&"categories_error".into()));
        assert!(view.is_indicator_visible(&"price_error".into()));
        assert!(view.is_field_invalid(&"price_sensitivity".into()));
        assert_eq!(
            view.reported(),
            [
                FieldName::new("price_sensitivity"),
                FieldName::new("awareness"),
                FieldName::new("product_categories"),
            ]
        );
    }

    #[test]
    fn step_passes_and_hides_indicators() {
        let step = pricing_step();
        let mut form = form_for(&step);
        let mut view = RecordingSurface::new();
        validate_step(&step, &form, &mut view);

        form.set(&"price_sensitivity".into(), "3").unwrap();
        form.set(&"awareness".into(), Some("true".to_string()))
            .unwrap();
        form.set_checked(&"product_categories".into(), "Snacks", true)
            .unwrap();

        assert!(validate_step(&step, &form, &mut view));
        assert!(view.visible_indicators().is_empty());
        assert!(!view.is_field_invalid(&"price_sensitivity".into()));
    }

    #[test]
    fn validation_is_deterministic() {
        let step = pricing_step();
        let mut form = form_for(&step);
        form.set(&"price_sensitivity".into(), "7").unwrap();

        let mut first = RecordingSurface::new();
        let mut second = RecordingSurface::new();
        let a = validate_step(&step, &form, &mut first);
        let b = validate_step(&step, &form, &mut second);
        let c = validate_step(&step, &form, &mut second);

        assert_eq!(a, b);
        assert_eq!(b, c);
        assert_eq!(first.visible_indicators(), second.visible_indicators());
    }

    #[test]
    fn first_invalid_follows_document_order() {
        let step = pricing_step();
        let mut form = form_for(&step);
        assert_eq!(
            first_invalid(&step, &form).map(FieldName::as_str),
            Some("price_sensitivity")
        );

        form.set(&"price_sensitivity".into(), "8").unwrap();
        assert_eq!(
            first_invalid(&step, &form).map(FieldName::as_str),
            Some("price_sensitivity")
        );

        form.set(&"price_sensitivity".into(), "2").unwrap();
        assert_eq!(
            first_invalid(&step, &form).map(FieldName::as_str),
            Some("awareness")
        );
    }
}
