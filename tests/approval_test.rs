//! Approval page rules: submit preconditions, remarks trails, action sets
//! and the amounts each detail type reports for the status-list lookup.

mod common;

use erpdesk::models::ApprovalDetail;
use erpdesk::models::ctc::{group_heads, net_annual};
use erpdesk::models::inbox::without_return_actions;
use erpdesk::models::pay_revision;
use erpdesk::models::remarks::{RemarkEntry, parse_trail, update_remarks_history};
use erpdesk::store::approval::validate_submission;

// ============================================================================
// SUBMIT PRECONDITIONS
// ============================================================================

#[test]
fn submission_requires_a_selected_record() {
    let result = validate_submission(false, "looks fine", false, false);
    assert_eq!(result, Err("Select a record before submitting".to_string()));
}

#[test]
fn submission_requires_remarks() {
    let result = validate_submission(true, "   ", false, false);
    assert_eq!(result, Err("Remarks are mandatory".to_string()));
}

#[test]
fn submission_requires_the_verification_tick_when_configured() {
    let result = validate_submission(true, "verified the breakup", true, false);
    assert_eq!(
        result,
        Err("Tick the verification checkbox to proceed".to_string())
    );
}

#[test]
fn verification_tick_is_not_demanded_when_not_configured() {
    assert_eq!(validate_submission(true, "ok to pay", false, false), Ok(()));
}

#[test]
fn a_complete_submission_passes() {
    assert_eq!(validate_submission(true, "approved", true, true), Ok(()));
}

// ============================================================================
// REMARKS TRAIL
// ============================================================================

#[test]
fn first_remark_has_no_leading_delimiter() {
    let trail = update_remarks_history("", "Manager", "asharma", "Verified");
    assert_eq!(trail, "Manager : asharma : Verified");
}

#[test]
fn later_remarks_append_with_the_delimiter() {
    let trail = update_remarks_history(
        "Manager : asharma : Verified",
        "Director",
        "bverma",
        "Approved",
    );
    assert_eq!(
        trail,
        "Manager : asharma : Verified||Director : bverma : Approved"
    );
}

#[test]
fn a_trail_parses_back_into_entries() {
    let entries = parse_trail("Manager : asharma : Verified||Director : bverma : Approved");
    assert_eq!(
        entries,
        vec![
            RemarkEntry {
                role: "Manager".to_string(),
                user: "asharma".to_string(),
                comment: "Verified".to_string(),
            },
            RemarkEntry {
                role: "Director".to_string(),
                user: "bverma".to_string(),
                comment: "Approved".to_string(),
            },
        ]
    );
}

#[test]
fn the_comment_may_itself_contain_the_field_delimiter() {
    let entries = parse_trail("Manager : asharma : Ratio is 3 : 1, acceptable");
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].comment, "Ratio is 3 : 1, acceptable");
}

#[test]
fn malformed_segments_become_comment_only_entries() {
    let entries = parse_trail("just a bare note||Manager : asharma : Verified");
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].role, "");
    assert_eq!(entries[0].comment, "just a bare note");
    assert_eq!(entries[1].role, "Manager");
}

#[test]
fn an_empty_trail_parses_to_nothing() {
    assert!(parse_trail("").is_empty());
}

// ============================================================================
// ACTION SETS
// ============================================================================

#[test]
fn return_actions_are_filtered_out() {
    let actions = vec![
        common::action("approve", "Approve", 5),
        common::action("Return", "Send Back", 2),
        common::action("reject", "Reject", 9),
        common::action("SENDBACK", "Send Back", 3),
    ];
    let kept = without_return_actions(actions);
    let labels: Vec<&str> = kept.iter().map(|a| a.label.as_str()).collect();
    assert_eq!(labels, vec!["Approve", "Reject"]);
}

// ============================================================================
// DETAIL AMOUNTS
// ============================================================================

#[test]
fn ctc_sections_keep_first_seen_order() {
    let heads = vec![
        common::ctc_head("Basic", "Earnings", 50000.0, 600000.0),
        common::ctc_head("PF", "Deductions", 6000.0, 72000.0),
        common::ctc_head("HRA", "Earnings", 20000.0, 240000.0),
    ];
    let sections = group_heads(&heads);
    assert_eq!(sections.len(), 2);
    assert_eq!(sections[0].label, "Earnings");
    assert_eq!(sections[0].rows.len(), 2);
    assert_eq!(sections[0].annual_total, 840000.0);
    assert_eq!(sections[1].label, "Deductions");
}

#[test]
fn net_annual_subtracts_deductions() {
    let heads = vec![
        common::ctc_head("Basic", "Earnings", 50000.0, 600000.0),
        common::ctc_head("Medical", "Benefits", 2000.0, 24000.0),
        common::ctc_head("PF", "Deductions", 6000.0, 72000.0),
    ];
    let net = net_annual(&group_heads(&heads));
    assert_eq!(net, 600000.0 + 24000.0 - 72000.0);
}

#[test]
fn ctc_amount_is_the_net_annual_figure() {
    let detail = common::ctc_detail(
        "CTC/2026/0001",
        vec![
            common::ctc_head("Basic", "Earnings", 50000.0, 600000.0),
            common::ctc_head("PF", "Deductions", 6000.0, 72000.0),
        ],
    );
    assert_eq!(detail.amount(), 528000.0);
}

#[test]
fn pay_revision_totals_cover_both_columns() {
    let components = vec![
        common::pay_component("Basic Wage", 18000.0, 19500.0),
        common::pay_component("Skill Allowance", 2000.0, 2600.0),
    ];
    let t = pay_revision::totals(&components);
    assert_eq!(t.current, 20000.0);
    assert_eq!(t.revised, 22100.0);
    assert_eq!(t.difference, 2100.0);

    let detail = common::pay_revision_detail(components);
    assert_eq!(detail.amount(), 22100.0);
}

#[test]
fn vendor_payment_nets_deductions_off_the_gross() {
    let detail = common::vendor_payment_detail(
        vec![
            common::payment_line("Supply of spares", 118000.0),
            common::payment_line("Freight", 2000.0),
        ],
        vec![
            common::payment_line("TDS", 2360.0),
            common::payment_line("Retention", 5900.0),
        ],
    );
    assert_eq!(detail.gross(), 120000.0);
    assert_eq!(detail.total_deductions(), 8260.0);
    assert_eq!(detail.net_payable(), 111740.0);
    assert_eq!(detail.amount(), detail.net_payable());
}
