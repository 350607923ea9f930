//! Tests for workload weight aggregation across resources and days.

use slotbits::workload::{workload_weights, WorkloadWeight};
use slotbits::{BitsetInput, DayRecord, ResourceBitset, TimeUnit};

// ── Helpers ─────────────────────────────────────────────────────────────────

/// Wire text whose chronological prefix is `chrono`, padded busy to `bits`.
fn wire(chrono: &str, bits: usize) -> String {
    let mut s = chrono.to_string();
    s.push_str(&"0".repeat(bits - chrono.len()));
    s.chars().rev().collect()
}

fn resource(id: &str, bitset: impl Into<BitsetInput>) -> ResourceBitset {
    ResourceBitset {
        resource_id: id.to_string(),
        bitset: bitset.into(),
    }
}

fn day(date: &str, resources: Vec<ResourceBitset>) -> DayRecord {
    DayRecord {
        date: Some(date.to_string()),
        resources,
        excluded_resources: Vec::new(),
    }
}

fn find<'a>(weights: &'a [WorkloadWeight], id: &str) -> &'a WorkloadWeight {
    weights
        .iter()
        .find(|w| w.resource_id == id)
        .unwrap_or_else(|| panic!("no weight for {id}"))
}

fn five() -> TimeUnit {
    TimeUnit::FIVE_MINUTES
}

// ── Weights ─────────────────────────────────────────────────────────────────

#[test]
fn busy_vector_has_zero_weight() {
    let days = [day("2017-09-03", vec![resource("a", wire("", 288))])];
    let weights = workload_weights(&days, five());
    assert_eq!(find(&weights, "a").weight, 0);
    assert_eq!(find(&weights, "a").first_free_date, None);
    assert_eq!(find(&weights, "a").first_free_minute, None);
}

#[test]
fn hundred_free_bits_weigh_hundred() {
    let days = [day("2017-09-03", vec![resource("a", wire(&"1".repeat(100), 288))])];
    assert_eq!(find(&workload_weights(&days, five()), "a").weight, 100);
}

#[test]
fn resources_on_one_day_are_separate() {
    let days = [day(
        "2017-09-03",
        vec![
            resource("a", wire(&"1".repeat(50), 288)),
            resource("b", wire(&"1".repeat(20), 288)),
        ],
    )];
    let weights = workload_weights(&days, five());
    assert_eq!(weights.len(), 2);
    assert_eq!(find(&weights, "a").weight, 50);
    assert_eq!(find(&weights, "b").weight, 20);
}

#[test]
fn days_are_summed_per_resource() {
    let days = [
        day("2017-09-03", vec![resource("a", wire(&"1".repeat(50), 288))]),
        day("2017-09-04", vec![resource("a", wire(&"1".repeat(50), 288))]),
    ];
    let weights = workload_weights(&days, five());
    assert_eq!(weights.len(), 1);
    assert_eq!(find(&weights, "a").weight, 100);
}

#[test]
fn first_free_date_is_first_day_with_free_time() {
    let days = [
        day("2017-09-03", vec![resource("a", wire("", 288))]),
        day("2017-09-04", vec![resource("a", wire("0001", 288))]),
        day("2017-09-05", vec![resource("a", wire("1", 288))]),
    ];
    let weights = workload_weights(&days, five());
    let a = find(&weights, "a");
    assert_eq!(a.first_free_date.as_deref(), Some("2017-09-04"));
    assert_eq!(a.first_free_minute, Some(15));
    assert_eq!(a.weight, 2);
}

#[test]
fn first_free_minute_of_seventh_unit() {
    let chrono = format!("{}1", "0".repeat(6));
    let days = [day("2018-06-28", vec![resource("a", wire(&chrono, 288))])];
    assert_eq!(find(&workload_weights(&days, five()), "a").first_free_minute, Some(30));
}

#[test]
fn first_wire_char_is_last_minute_of_day() {
    let mut text = "0".repeat(1440);
    text.replace_range(0..1, "1");
    let days = [
        day("2018-06-28", vec![resource("r", "0".repeat(1440))]),
        day("2018-06-29", vec![resource("r", text)]),
    ];
    let weights = workload_weights(&days, TimeUnit::ONE_MINUTE);
    let r = find(&weights, "r");
    assert_eq!(r.first_free_date.as_deref(), Some("2018-06-29"));
    assert_eq!(r.first_free_minute, Some(1439));
    assert_eq!(r.weight, 1);
}

#[test]
fn excluded_resources_are_skipped() {
    let mut record = day(
        "2017-09-03",
        vec![
            resource("a", wire(&"1".repeat(10), 288)),
            resource("b", wire(&"1".repeat(10), 288)),
        ],
    );
    record.excluded_resources = vec!["b".to_string()];
    let weights = workload_weights(&[record], five());
    assert_eq!(weights.len(), 1);
    assert_eq!(weights[0].resource_id, "a");
}

#[test]
fn malformed_bitset_counts_as_busy() {
    let days = [day("2017-09-03", vec![resource("a", "0101")])];
    let weights = workload_weights(&days, five());
    let a = find(&weights, "a");
    assert_eq!(a.weight, 0);
    assert_eq!(a.first_free_date, None);
}

#[test]
fn malformed_day_does_not_spoil_other_days() {
    let days = [
        day("2017-09-03", vec![resource("a", "garbage"), resource("b", wire("11", 288))]),
        day("2017-09-04", vec![resource("a", wire("011", 288))]),
    ];
    let weights = workload_weights(&days, five());
    let a = find(&weights, "a");
    assert_eq!(a.weight, 2);
    assert_eq!(a.first_free_date.as_deref(), Some("2017-09-04"));
    assert_eq!(a.first_free_minute, Some(5));
    assert_eq!(find(&weights, "b").weight, 2);
}

#[test]
fn packed_words_are_accepted() {
    let words = vec![u32::MAX, 0, 0, 0, 0, 0, 0, 0, 1];
    let days = [day("2017-09-03", vec![resource("a", words)])];
    let weights = workload_weights(&days, five());
    assert_eq!(find(&weights, "a").weight, 33);
    assert_eq!(find(&weights, "a").first_free_minute, Some(0));
}

#[test]
fn results_follow_first_appearance() {
    let days = [
        day("2017-09-03", vec![resource("z", wire("", 288))]),
        day(
            "2017-09-04",
            vec![resource("a", wire("", 288)), resource("z", wire("", 288))],
        ),
    ];
    let ids: Vec<String> = workload_weights(&days, five())
        .into_iter()
        .map(|w| w.resource_id)
        .collect();
    assert_eq!(ids, vec!["z", "a"]);
}

#[test]
fn weights_serialize_camel_case() {
    let days = [day("2017-09-03", vec![resource("a", wire("1", 288))])];
    let json = serde_json::to_string(&workload_weights(&days, five())).unwrap();
    assert!(json.contains("\"resourceId\":\"a\""));
    assert!(json.contains("\"firstFreeDate\":\"2017-09-03\""));
    assert!(json.contains("\"firstFreeMinute\":0"));
}
