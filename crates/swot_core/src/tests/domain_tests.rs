use crate::domain::{Category, CommittedEntry, Totals, Verdict};

#[test]
fn category_order_matches_chart_axis() {
    let shorts: Vec<&str> = Category::ALL.iter().map(|c| c.short_label()).collect();
    assert_eq!(shorts, ["S", "W", "O", "T"]);
}

#[test]
fn totals_accumulate_per_category() {
    let mut totals = Totals::default();
    totals.add(Category::Strengths, 3.0);
    totals.add(Category::Strengths, 2.0);
    totals.add(Category::Threats, 1.5);

    assert_eq!(totals.get(Category::Strengths), 5.0);
    assert_eq!(totals.get(Category::Weaknesses), 0.0);
    assert_eq!(totals.get(Category::Threats), 1.5);
    assert_eq!(totals.as_array(), [5.0, 0.0, 0.0, 1.5]);
    assert_eq!(totals.sum(), 6.5);
}

#[test]
fn category_and_verdict_serialize_as_snake_case() {
    let category = serde_json::to_string(&Category::Opportunities).expect("serialize category");
    assert_eq!(category, "\"opportunities\"");

    let verdict = serde_json::to_string(&Verdict::NeedsAdjustment).expect("serialize verdict");
    assert_eq!(verdict, "\"needs_adjustment\"");
}

#[test]
fn committed_entry_projection_uses_snake_case_category() {
    let entry = CommittedEntry {
        category: Category::Weaknesses,
        description: "thin margins".to_string(),
        score: 4.0,
    };
    let json = serde_json::to_value(&entry).expect("serialize entry");
    assert_eq!(json["category"], "weaknesses");
    assert_eq!(json["score"], 4.0);
}

#[test]
fn verdict_labels_are_presentation_ready() {
    assert_eq!(Verdict::Favorable.label(), "favorable");
    assert_eq!(Verdict::NeedsAdjustment.label(), "needs adjustment");
}
