use serde::{Deserialize, Serialize};

/// One of the four fixed SWOT classifications. Closed set; never extended
/// at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Strengths,
    Weaknesses,
    Opportunities,
    Threats,
}

impl Category {
    /// Fixed presentation order consumed by the chart and totals views.
    pub const ALL: [Category; 4] = [
        Category::Strengths,
        Category::Weaknesses,
        Category::Opportunities,
        Category::Threats,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Strengths => "Strengths",
            Self::Weaknesses => "Weaknesses",
            Self::Opportunities => "Opportunities",
            Self::Threats => "Threats",
        }
    }

    /// Chart axis label.
    pub fn short_label(self) -> &'static str {
        match self {
            Self::Strengths => "S",
            Self::Weaknesses => "W",
            Self::Opportunities => "O",
            Self::Threats => "T",
        }
    }
}

/// A row being edited. `score_text` holds the raw user input, which may
/// not be a valid number until submission parses it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DraftEntry {
    pub category: Option<Category>,
    pub description: String,
    pub score_text: String,
    pub dropdown_open: bool,
}

impl DraftEntry {
    pub fn blank() -> Self {
        Self::default()
    }
}

/// The closed set of editable draft fields. An exhaustive match replaces
/// the string-keyed field dispatch a dynamic UI layer would use.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldEdit {
    Description(String),
    ScoreText(String),
    Category(Category),
}

/// An accepted row contributing to the totals. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommittedEntry {
    pub category: Category,
    pub description: String,
    pub score: f64,
}

/// Per-category running sums. Only ever accumulated, never decremented.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Totals {
    pub strengths: f64,
    pub weaknesses: f64,
    pub opportunities: f64,
    pub threats: f64,
}

impl Totals {
    pub fn get(&self, category: Category) -> f64 {
        match category {
            Category::Strengths => self.strengths,
            Category::Weaknesses => self.weaknesses,
            Category::Opportunities => self.opportunities,
            Category::Threats => self.threats,
        }
    }

    pub fn add(&mut self, category: Category, score: f64) {
        match category {
            Category::Strengths => self.strengths += score,
            Category::Weaknesses => self.weaknesses += score,
            Category::Opportunities => self.opportunities += score,
            Category::Threats => self.threats += score,
        }
    }

    /// Chart dataset in the fixed S/W/O/T order.
    pub fn as_array(&self) -> [f64; 4] {
        [self.strengths, self.weaknesses, self.opportunities, self.threats]
    }

    pub fn sum(&self) -> f64 {
        self.strengths + self.weaknesses + self.opportunities + self.threats
    }
}

/// Binary qualitative label derived from the totals. User-facing copy and
/// localization belong to the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Favorable,
    NeedsAdjustment,
}

impl Verdict {
    pub fn label(self) -> &'static str {
        match self {
            Self::Favorable => "favorable",
            Self::NeedsAdjustment => "needs adjustment",
        }
    }
}
