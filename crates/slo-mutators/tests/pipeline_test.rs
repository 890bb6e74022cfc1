//! Integration tests running full mutator sequences against one result.

use std::collections::HashMap;

use slo_model::{GroupRole, PromDuration, Rule, Slo, SloRules};
use slo_mutators::{
    ErrorBudgetExhaustedMutator, InfoLabelsMutator, MUTATOR_VERSION, MutatorPipeline, Request,
    RuleIntervalsMutator, SloMutator,
};

// ==================== Helper Functions ====================

fn checkout_availability() -> Request {
    Request::new(Slo::new("availability", "checkout"))
}

fn generated_result() -> SloRules {
    let mut result = SloRules::default();
    result.sli_error_rec_rules.name = "slo-sli-recordings-checkout-availability".to_string();
    result
        .sli_error_rec_rules
        .rules
        .push(Rule::new("slo:sli_error:ratio_rate5m", "sum(rate(errors[5m]))").unwrap());

    result.metadata_rec_rules.name = "slo-meta-recordings-checkout-availability".to_string();
    result.metadata_rec_rules.rules.push(
        Rule::new("sloth_slo_info", "vector(1)")
            .unwrap()
            .with_label("sloth_service", "checkout"),
    );

    result.alert_rules.name = "slo-alerts-checkout-availability".to_string();
    result
        .alert_rules
        .rules
        .push(Rule::new("CheckoutAvailabilityBurnRate", "burn > 1").unwrap());
    result
}

// ==================== Full Pipeline Tests ====================

#[test]
fn full_pipeline_applies_all_three_mutators() {
    let pipeline = MutatorPipeline::new()
        .with(Box::new(
            ErrorBudgetExhaustedMutator::from_config(
                r#"{"alert_labels": {"severity": "critical", "team": "platform"}}"#,
            )
            .unwrap(),
        ))
        .with(Box::new(
            InfoLabelsMutator::from_config(r#"{"labels": {"owner": "platform"}}"#).unwrap(),
        ))
        .with(Box::new(
            RuleIntervalsMutator::from_config(r#"{"interval": {"default": "30s", "alert": "1m"}}"#)
                .unwrap(),
        ));

    let mut result = generated_result();
    pipeline.run(&checkout_availability(), &mut result).unwrap();

    // Error-budget alert appended after the generated burn alert.
    assert_eq!(result.alert_rules.rules.len(), 2);
    let appended = &result.alert_rules.rules[1];
    assert_eq!(appended.name, "ErrorBudgetExhausted");
    assert_eq!(
        appended.expr,
        r#"slo:period_error_budget_remaining:ratio{severity="critical",sloth_id="checkout-availability",sloth_service="checkout",sloth_slo="availability",team="platform"} <= 0"#
    );
    assert_eq!(appended.for_duration, Some(PromDuration::from_secs(300)));

    // Info labels merged into the info record, existing labels preserved.
    let info = result.metadata_rec_rules.rule("sloth_slo_info").unwrap();
    assert_eq!(info.labels.get("owner"), Some(&"platform".to_string()));
    assert_eq!(info.labels.get("sloth_service"), Some(&"checkout".to_string()));

    // Intervals resolved per group.
    assert_eq!(
        result.sli_error_rec_rules.interval,
        Some(PromDuration::from_secs(30))
    );
    assert_eq!(
        result.metadata_rec_rules.interval,
        Some(PromDuration::from_secs(30))
    );
    assert_eq!(result.alert_rules.interval, Some(PromDuration::from_secs(60)));

    // Generated rules are untouched.
    assert_eq!(result.sli_error_rec_rules.rules.len(), 1);
    assert_eq!(result.alert_rules.rules[0].name, "CheckoutAvailabilityBurnRate");
}

#[test]
fn pipeline_order_does_not_affect_end_state_for_independent_mutators() {
    let forward = MutatorPipeline::new()
        .with(Box::new(
            InfoLabelsMutator::from_config(r#"{"labels": {"owner": "platform"}}"#).unwrap(),
        ))
        .with(Box::new(
            RuleIntervalsMutator::from_config(r#"{"interval": {"default": "30s"}}"#).unwrap(),
        ));
    let reversed = MutatorPipeline::new()
        .with(Box::new(
            RuleIntervalsMutator::from_config(r#"{"interval": {"default": "30s"}}"#).unwrap(),
        ))
        .with(Box::new(
            InfoLabelsMutator::from_config(r#"{"labels": {"owner": "platform"}}"#).unwrap(),
        ));

    let mut a = generated_result();
    let mut b = generated_result();
    forward.run(&checkout_availability(), &mut a).unwrap();
    reversed.run(&checkout_availability(), &mut b).unwrap();

    assert_eq!(a, b);
}

#[test]
fn pipeline_is_reusable_across_independent_slos() {
    let pipeline = MutatorPipeline::new().with(Box::new(
        ErrorBudgetExhaustedMutator::from_config("{}").unwrap(),
    ));

    let mut checkout = SloRules::default();
    let mut payments = SloRules::default();
    pipeline.run(&checkout_availability(), &mut checkout).unwrap();
    pipeline
        .run(&Request::new(Slo::new("latency", "payments")), &mut payments)
        .unwrap();

    assert!(checkout.alert_rules.rules[0]
        .expr
        .contains(r#"sloth_id="checkout-availability""#));
    assert!(payments.alert_rules.rules[0]
        .expr
        .contains(r#"sloth_id="payments-latency""#));
}

#[test]
fn mutators_on_empty_generated_result_are_safe() {
    let pipeline = MutatorPipeline::new()
        .with(Box::new(
            InfoLabelsMutator::from_config(r#"{"labels": {"owner": "platform"}}"#).unwrap(),
        ))
        .with(Box::new(
            RuleIntervalsMutator::from_config(r#"{"interval": {"default": "30s"}}"#).unwrap(),
        ));

    let mut result = SloRules::default();
    pipeline.run(&checkout_availability(), &mut result).unwrap();

    for role in GroupRole::ALL {
        assert_eq!(result.group(role).interval, Some(PromDuration::from_secs(30)));
        assert!(result.group(role).rules.is_empty());
    }
}

#[test]
fn mutator_identity_metadata_is_stable_and_unique() {
    let mutators: Vec<Box<dyn SloMutator>> = vec![
        Box::new(ErrorBudgetExhaustedMutator::from_config("{}").unwrap()),
        Box::new(InfoLabelsMutator::from_config(r#"{"labels": {"a": "b"}}"#).unwrap()),
        Box::new(RuleIntervalsMutator::from_config(r#"{"interval": {"default": "30s"}}"#).unwrap()),
    ];

    let ids: Vec<&str> = mutators.iter().map(|m| m.id()).collect();
    let mut deduped = ids.clone();
    deduped.sort_unstable();
    deduped.dedup();
    assert_eq!(deduped.len(), ids.len());

    for mutator in &mutators {
        assert_eq!(mutator.version(), MUTATOR_VERSION);
        assert!(!mutator.id().is_empty());
    }
}

#[test]
fn configs_are_owned_per_instance() {
    // Two instances of the same mutator with different configs must not
    // observe each other's labels.
    let first = InfoLabelsMutator::from_config(r#"{"labels": {"a": "1"}}"#).unwrap();
    let second = InfoLabelsMutator::from_config(r#"{"labels": {"b": "2"}}"#).unwrap();

    let mut result = SloRules::default();
    result
        .metadata_rec_rules
        .rules
        .push(Rule::new("sloth_slo_info", "vector(1)").unwrap());

    first.process(&checkout_availability(), &mut result).unwrap();
    let after_first = result
        .metadata_rec_rules
        .rule("sloth_slo_info")
        .unwrap()
        .labels
        .clone();
    assert_eq!(after_first, HashMap::from([("a".to_string(), "1".to_string())]));

    second.process(&checkout_availability(), &mut result).unwrap();
    let after_second = &result.metadata_rec_rules.rule("sloth_slo_info").unwrap().labels;
    assert_eq!(after_second.get("a"), Some(&"1".to_string()));
    assert_eq!(after_second.get("b"), Some(&"2".to_string()));
}
