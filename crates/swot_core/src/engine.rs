//! The SWOT entry/aggregation state machine.

use tracing::debug;

use crate::domain::{Category, CommittedEntry, DraftEntry, FieldEdit, Totals, Verdict};

/// Owned state for the SWOT screen: the draft rows under edit, the
/// committed record, the per-category totals, and the results-view flag.
///
/// Single writer, fully synchronous. The draft list is never empty: the
/// engine starts with one blank row and rows are only ever appended. Row
/// indices passed to the mutation methods must be in range; the exposed
/// UI actions cannot produce an out-of-range index, so a bad index is a
/// caller bug and panics.
#[derive(Debug, Clone)]
pub struct SwotEngine {
    drafts: Vec<DraftEntry>,
    committed: Vec<CommittedEntry>,
    totals: Totals,
    results_visible: bool,
}

impl Default for SwotEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl SwotEngine {
    /// Fresh engine: one blank draft row, empty record, zero totals,
    /// results hidden.
    pub fn new() -> Self {
        Self {
            drafts: vec![DraftEntry::blank()],
            committed: Vec::new(),
            totals: Totals::default(),
            results_visible: false,
        }
    }

    pub fn drafts(&self) -> &[DraftEntry] {
        &self.drafts
    }

    /// Committed entries in submission order.
    pub fn committed(&self) -> &[CommittedEntry] {
        &self.committed
    }

    pub fn totals(&self) -> &Totals {
        &self.totals
    }

    pub fn results_visible(&self) -> bool {
        self.results_visible
    }

    /// Appends one blank row to the end of the draft list. Existing rows
    /// are untouched; there is no upper bound on row count.
    pub fn add_row(&mut self) {
        self.drafts.push(DraftEntry::blank());
    }

    /// Updates exactly the named field of row `row`, leaving every other
    /// field and row alone.
    pub fn set_field(&mut self, row: usize, edit: FieldEdit) {
        let draft = &mut self.drafts[row];
        match edit {
            FieldEdit::Description(text) => draft.description = text,
            FieldEdit::ScoreText(text) => draft.score_text = text,
            FieldEdit::Category(category) => draft.category = Some(category),
        }
    }

    /// Shows or hides the category picker for row `row`.
    pub fn toggle_dropdown(&mut self, row: usize) {
        let draft = &mut self.drafts[row];
        draft.dropdown_open = !draft.dropdown_open;
    }

    /// Picking a category from the open dropdown sets it and closes the
    /// picker in one step; callers never observe an intermediate state.
    pub fn select_category(&mut self, row: usize, category: Category) {
        let draft = &mut self.drafts[row];
        draft.category = Some(category);
        draft.dropdown_open = false;
    }

    /// Commits every qualifying draft row, in draft order, and marks the
    /// results view ready.
    ///
    /// A row qualifies when a category is chosen and both the description
    /// and the score text are non-empty. Numeric validity of the score is
    /// deliberately not part of the predicate: [`parse_score`] absorbs
    /// malformed input as NaN, which then flows into the category total.
    /// Non-qualifying rows are skipped silently and stay in the draft
    /// list, and the list is not cleared afterwards, so submitting again
    /// re-commits the same rows on top of the existing totals.
    pub fn submit_entries(&mut self) {
        let mut accepted = 0usize;
        for draft in &self.drafts {
            let Some(category) = draft.category else {
                continue;
            };
            if draft.description.is_empty() || draft.score_text.is_empty() {
                continue;
            }
            let score = parse_score(&draft.score_text);
            self.committed.push(CommittedEntry {
                category,
                description: draft.description.clone(),
                score,
            });
            self.totals.add(category, score);
            accepted += 1;
        }
        debug!(accepted, totals = ?self.totals, "submitted draft entries");
        self.results_visible = true;
    }

    /// Hides the results view; all other state stays put.
    pub fn dismiss_results(&mut self) {
        self.results_visible = false;
    }

    /// Arithmetic mean of the four totals, recomputed on every call.
    pub fn overall_score(&self) -> f64 {
        self.totals.sum() / 4.0
    }

    /// Favorable iff strengths + opportunities strictly exceed weaknesses
    /// + threats. Ties resolve to needs-adjustment, and so does any NaN
    /// reaching the comparison.
    pub fn verdict(&self) -> Verdict {
        if self.totals.strengths + self.totals.opportunities
            > self.totals.weaknesses + self.totals.threats
        {
            Verdict::Favorable
        } else {
            Verdict::NeedsAdjustment
        }
    }
}

/// Permissive score parsing: skip leading whitespace, take the longest
/// prefix that reads as an optionally signed decimal literal (or signed
/// `Infinity`), ignore any trailing garbage, and fall back to NaN when no
/// prefix parses at all.
pub fn parse_score(text: &str) -> f64 {
    let s = text.trim_start();
    let b = s.as_bytes();
    let mut i = 0;
    if matches!(b.first(), Some(b'+' | b'-')) {
        i = 1;
    }
    if s[i..].starts_with("Infinity") {
        return if s.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }
    let mut saw_digit = false;
    while i < b.len() && b[i].is_ascii_digit() {
        saw_digit = true;
        i += 1;
    }
    if i < b.len() && b[i] == b'.' {
        i += 1;
        while i < b.len() && b[i].is_ascii_digit() {
            saw_digit = true;
            i += 1;
        }
    }
    if !saw_digit {
        return f64::NAN;
    }
    let mut end = i;
    if i < b.len() && (b[i] == b'e' || b[i] == b'E') {
        let mut j = i + 1;
        if j < b.len() && (b[j] == b'+' || b[j] == b'-') {
            j += 1;
        }
        let exp_digits = j;
        while j < b.len() && b[j].is_ascii_digit() {
            j += 1;
        }
        // an exponent marker without digits is trailing garbage
        if j > exp_digits {
            end = j;
        }
    }
    s[..end].parse().unwrap_or(f64::NAN)
}
