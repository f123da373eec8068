use assert_cmd::cargo::cargo_bin_cmd;
use serde_json::Value;
use std::fs;
use std::process::Output;
use tempfile::TempDir;

fn run(args: &[&str], stdin: Option<&str>) -> Output {
    let mut cmd = cargo_bin_cmd!("adkit");
    cmd.args(args);
    if let Some(stdin) = stdin {
        cmd.write_stdin(stdin);
    }
    cmd.output().expect("run command")
}

fn run_ok(args: &[&str], stdin: Option<&str>) -> String {
    let output = run(args, stdin);
    assert!(output.status.success(), "command failed: {:?}", output);
    String::from_utf8(output.stdout).expect("utf8")
}

fn run_json(args: &[&str], stdin: Option<&str>) -> Value {
    let mut full = vec!["--json"];
    full.extend_from_slice(args);
    let output = run(&full, stdin);
    assert!(output.status.success(), "command failed: {:?}", output);
    serde_json::from_slice(&output.stdout).expect("parse json")
}

const NAME_INPUT: &str = "นาย สมชาย ใจดี\nนางสาว สวย มาก\nMr. John\n";

#[test]
fn parse_names_prints_first_column() {
    let out = run_ok(&["parse-names", "--part", "first"], Some(NAME_INPUT));
    assert_eq!(out, "สมชาย\nสวย\nJohn\n");
}

#[test]
fn parse_names_keeps_empty_last_name_slot() {
    let out = run_ok(&["parse-names", "--part", "last"], Some(NAME_INPUT));
    assert_eq!(out, "ใจดี\nมาก\n\n");
}

#[test]
fn parse_names_json_carries_both_columns() {
    let value = run_json(&["parse-names"], Some(NAME_INPUT));
    assert_eq!(value["first_names"], "สมชาย\nสวย\nJohn");
    assert_eq!(value["last_names"], "ใจดี\nมาก\n");
}

#[test]
fn normalize_phones_batch_flow() {
    let out = run_ok(
        &["normalize-phones"],
        Some("081-111-1111\n+66891234567\nabc\n"),
    );
    assert_eq!(out, "0811111111\n0891234567\n");
}

#[test]
fn normalize_phones_keeps_invalid_marker() {
    let out = run_ok(&["normalize-phones"], Some("12345\n"));
    assert_eq!(out, "เบอร์ไม่ถูกต้อง\n");
}

#[test]
fn name_campaign_builds_with_placeholders() {
    let out = run_ok(
        &[
            "name",
            "campaign",
            "--objective",
            "CONVERSIONS",
            "--brand",
            "THAILIFE",
            "--product",
            "HAPPY",
            "--audience",
            "BROAD",
            "--date",
            "2026-01-02",
        ],
        None,
    );
    assert_eq!(out, "CONVERSIONS_THAILIFE_CAT_HAPPY_BROAD_02JAN\n");
}

#[test]
fn name_campaign_requires_product() {
    let output = run(
        &[
            "name",
            "campaign",
            "--objective",
            "CONVERSIONS",
            "--brand",
            "THAILIFE",
        ],
        None,
    );
    assert_eq!(output.status.code(), Some(3));
    let stderr = String::from_utf8(output.stderr).expect("utf8");
    assert!(stderr.contains("product is required"), "stderr: {}", stderr);
}

#[test]
fn name_campaign_rejects_unlisted_product() {
    let output = run(
        &[
            "name",
            "campaign",
            "--objective",
            "CONVERSIONS",
            "--brand",
            "THAILIFE",
            "--product",
            "NOPE",
        ],
        None,
    );
    assert_eq!(output.status.code(), Some(3));
    let stderr = String::from_utf8(output.stderr).expect("utf8");
    assert!(stderr.contains("not listed"), "stderr: {}", stderr);
}

#[test]
fn name_campaign_draft_skips_validation() {
    let out = run_ok(&["name", "campaign", "--draft"], None);
    assert_eq!(out, "OBJ_BRAND_CAT_PROD_AUD_DATE\n");
}

#[test]
fn name_ad_compounds_brand_and_product() {
    let out = run_ok(
        &[
            "name",
            "ad",
            "--brand",
            "FWD",
            "--product",
            "BIG3",
            "--creative",
            "clip01",
            "--format",
            "VDO",
            "--date",
            "2026-07-09",
        ],
        None,
    );
    assert_eq!(out, "PAGE_FWD-BIG3_CLIP01_VDO_09JUL\n");
}

#[test]
fn name_adset_requires_target_type() {
    let output = run(&["name", "adset", "--category", "Finance"], None);
    assert_eq!(output.status.code(), Some(3));
}

#[test]
fn link_tracker_resolves_configured_labels() {
    let out = run_ok(
        &[
            "link",
            "tracker",
            "--channel",
            "Facebook ads",
            "--type",
            "Lead Agency",
            "--post",
            "Summer Sale",
        ],
        None,
    );
    assert_eq!(out, "ads-fb-life-summer-sale\n");
}

#[test]
fn link_tag_builds_dash_convention() {
    let out = run_ok(
        &[
            "link",
            "tag",
            "--source",
            "fb",
            "--method",
            "ads",
            "--platform",
            "mobile",
            "--creative",
            "vdo",
            "--date",
            "2026-01-15",
            "--brand",
            "THAILIFE",
            "--product-code",
            "happy",
        ],
        None,
    );
    assert_eq!(out, "fb-ads-mobile-vdo-d20260115-s1-thailife-happy\n");
}

#[test]
fn link_url_appends_params_and_banner() {
    let out = run_ok(
        &[
            "link",
            "url",
            "--base",
            "https://example.com/page",
            "--params",
            "pnlid=1",
            "--banner-id",
            "99",
        ],
        None,
    );
    assert_eq!(out, "https://example.com/page?pnlid=1&bannerid=99\n");
}

#[test]
fn link_url_resolves_catalog_product() {
    let value = run_json(&["link", "url", "--product", "BIG3"], None);
    assert_eq!(value["url"], "https://www.silkspan.com/fwd/big-3/");
}

#[test]
fn link_url_unknown_product_is_not_found() {
    let output = run(&["link", "url", "--product", "nope"], None);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn catalog_override_replaces_only_configured_lists() {
    let temp = TempDir::new().expect("temp dir");
    let path = temp.path().join("config.toml");
    fs::write(&path, "objectives = [\"AWARENESS\"]\n").expect("write config");

    let value = run_json(
        &["catalog", "--config", path.to_str().expect("path")],
        None,
    );
    let objectives = value["objectives"].as_array().expect("array");
    assert_eq!(objectives.len(), 1);
    assert_eq!(objectives[0], "AWARENESS");

    let brandings = value["brandings"].as_array().expect("array");
    assert!(brandings.iter().any(|b| b == "FWD"));
}
