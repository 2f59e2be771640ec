//! Integration tests for the validation framework
//!
//! Exercises the validator the way campaign submission uses it: several
//! fields checked in one pass, scoped sections, and error aggregation.

use calldeck_common::validation::Validator;

/// Scenario: a campaign form with every required field missing
#[test]
fn test_empty_campaign_form_reports_every_field() {
    let contacts: Vec<u32> = vec![];
    let mut validator = Validator::new();

    validator
        .require("campaign_name", "")
        .require("assigned_agent_id", "")
        .require("from_number", "")
        .require_items("contacts", &contacts, 1);

    let err = validator.finalize().expect_err("all fields invalid");
    assert_eq!(err.error_count(), 4);
    assert_eq!(err.field_errors("contacts").len(), 1);

    let rendered = err.to_string();
    assert!(rendered.contains("4 errors"));
    assert!(rendered.contains("campaign_name"));
}

/// Scenario: a valid form passes without collecting anything
#[test]
fn test_valid_campaign_form_passes() {
    let mut validator = Validator::new();

    validator
        .require("campaign_name", "Q3 Outreach")
        .require("assigned_agent_id", "agent-1")
        .require_match("from_number", "+918879415567", r"^\+\d{10,15}$")
        .require_items("contacts", &[1, 2, 3], 1);

    assert!(validator.finalize().is_ok());
}

/// Scenario: schedule section errors carry the section prefix
#[test]
fn test_scoped_schedule_section() {
    let mut validator = Validator::new();
    validator.require("campaign_name", "Later").scoped("schedule", |v| {
        v.require("date", "").require("time", "");
    });

    let err = validator.finalize().expect_err("schedule incomplete");
    assert_eq!(err.error_count(), 2);
    assert_eq!(err.errors[0].field, "schedule.date");
    assert_eq!(err.errors[1].field, "schedule.time");
}

/// Scenario: stop-on-first keeps only the first failure for fast feedback
#[test]
fn test_stop_on_first_error_mode() {
    let mut validator = Validator::stop_on_first();

    validator
        .require("campaign_name", "")
        .require("from_number", "")
        .require_at_least("total_contacts", 0, 1);

    assert_eq!(validator.error_count(), 1);
    let err = validator.finalize().expect_err("first check failed");
    assert_eq!(err.errors[0].field, "campaign_name");
}

/// Scenario: merging per-step errors into one submission report
#[test]
fn test_merge_step_errors() {
    let mut step_one = Validator::new();
    step_one.require("file", "");
    let mut first = step_one.finalize().expect_err("step one invalid");

    let mut step_three = Validator::new();
    step_three.require("campaign_name", "");
    let second = step_three.finalize().expect_err("step three invalid");

    first.merge(second);
    assert_eq!(first.error_count(), 2);
}
