//! Vimshottari dasha period construction.
//!
//! One generic recursive subdivision serves every level: a parent span is
//! split into 9 children proportional to the lords' weight-years, cycling
//! from the parent's own lord, and the final child's end is snapped to
//! the parent's end so each level partitions its parent exactly.
//!
//! Three construction modes:
//! - eager subtree for one mahadasha (depth 1..=5)
//! - lazy single level inside an arbitrary [start, end) window
//! - flat 9-mahadasha list covering the 120-year horizon

use serde::{Serialize, Serializer};

use graha_time::UtcInstant;

use crate::error::VedicError;
use crate::lord::{Lord, TOTAL_VIMSHOTTARI_YEARS};

/// Year length used for period spans, in days.
pub const DAYS_PER_YEAR: f64 = 365.2425;

/// Maximum subdivision depth (mahadasha through prana).
pub const MAX_LEVELS: u8 = 5;

/// The 5 hierarchical period levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DashaLevel {
    Mahadasha,
    Bhukti,
    Antara,
    Sukshma,
    Prana,
}

impl DashaLevel {
    /// Level label, as emitted in results.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Mahadasha => "mahadasha",
            Self::Bhukti => "bhukti",
            Self::Antara => "antara",
            Self::Sukshma => "sukshma",
            Self::Prana => "prana",
        }
    }

    /// Next deeper level, if any.
    pub const fn child_level(self) -> Option<Self> {
        match self {
            Self::Mahadasha => Some(Self::Bhukti),
            Self::Bhukti => Some(Self::Antara),
            Self::Antara => Some(Self::Sukshma),
            Self::Sukshma => Some(Self::Prana),
            Self::Prana => None,
        }
    }

    /// Parse a level label.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "mahadasha" => Some(Self::Mahadasha),
            "bhukti" => Some(Self::Bhukti),
            "antara" => Some(Self::Antara),
            "sukshma" => Some(Self::Sukshma),
            "prana" => Some(Self::Prana),
            _ => None,
        }
    }
}

/// A labeled period: one lord's reign at one level, with optional
/// children one level down that exactly partition it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PeriodNode {
    pub level: DashaLevel,
    pub lord: Lord,
    /// JD (UT), inclusive.
    #[serde(rename = "start", serialize_with = "jd_as_iso")]
    pub start_jd: f64,
    /// JD (UT), exclusive — the next sibling starts here.
    #[serde(rename = "end", serialize_with = "jd_as_iso")]
    pub end_jd: f64,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<PeriodNode>,
}

fn jd_as_iso<S: Serializer>(jd: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(&UtcInstant::from_jd(*jd))
}

impl PeriodNode {
    /// Duration of the period in days.
    pub fn duration_days(&self) -> f64 {
        self.end_jd - self.start_jd
    }
}

/// Convert weight-years to days.
pub fn days_of_years(years: f64) -> f64 {
    years * DAYS_PER_YEAR
}

/// Resolve a lord name, failing fast on anything outside the alphabet.
pub fn lord_from_name(name: &str) -> Result<Lord, VedicError> {
    Lord::from_name(name).ok_or_else(|| VedicError::InvalidLord(name.to_string()))
}

/// Clamp an optional balance into [0, full period] years.
fn effective_years(lord: Lord, balance_years: Option<f64>) -> f64 {
    match balance_years {
        None => lord.years(),
        Some(b) => b.clamp(0.0, lord.years()),
    }
}

/// Subdivide `parent` into 9 proportional children, recursing `remaining`
/// more levels. The last child absorbs accumulated rounding by ending
/// exactly at the parent's end.
fn subdivide(parent: &mut PeriodNode, remaining: u8) {
    if remaining == 0 {
        return;
    }
    let Some(child_level) = parent.level.child_level() else {
        return;
    };

    let parent_days = parent.duration_days();
    let mut children = Vec::with_capacity(9);
    let mut cursor = parent.start_jd;
    let mut lord = parent.lord;

    for idx in 0..9 {
        let span_days = parent_days * (lord.years() / TOTAL_VIMSHOTTARI_YEARS);
        let end = if idx == 8 {
            parent.end_jd
        } else {
            cursor + span_days
        };

        let mut child = PeriodNode {
            level: child_level,
            lord,
            start_jd: cursor,
            end_jd: end,
            children: Vec::new(),
        };
        subdivide(&mut child, remaining - 1);
        children.push(child);

        cursor = end;
        lord = lord.next();
    }

    parent.children = children;
}

/// Build one mahadasha's subtree.
///
/// `balance_years = None` means the lord's full period; otherwise the
/// remaining balance, clamped into [0, full]. `max_levels` 1..=5 selects
/// how deep the tree goes (1 = the mahadasha node alone).
pub fn build_period_tree(
    start_jd: f64,
    lord: Lord,
    balance_years: Option<f64>,
    max_levels: u8,
) -> PeriodNode {
    let years = effective_years(lord, balance_years);
    let mut node = PeriodNode {
        level: DashaLevel::Mahadasha,
        lord,
        start_jd,
        end_jd: start_jd + days_of_years(years),
        children: Vec::new(),
    };
    subdivide(&mut node, max_levels.clamp(1, MAX_LEVELS) - 1);
    node
}

/// Build exactly one level's nodes inside an arbitrary [start, end) window.
///
/// The window need not be a full period: a child whose computed end would
/// overshoot is clamped to the window end, and construction stops there.
/// A degenerate window (`end <= start`) yields an empty list.
pub fn build_level_nodes(
    level: DashaLevel,
    start_jd: f64,
    end_jd: f64,
    start_lord: Lord,
) -> Vec<PeriodNode> {
    if end_jd <= start_jd {
        return Vec::new();
    }

    let window_days = end_jd - start_jd;
    let mut nodes = Vec::with_capacity(9);
    let mut cursor = start_jd;
    let mut lord = start_lord;

    for idx in 0..9 {
        let span_days = window_days * (lord.years() / TOTAL_VIMSHOTTARI_YEARS);
        let mut end = cursor + span_days;
        if idx == 8 || end > end_jd {
            end = end_jd;
        }

        nodes.push(PeriodNode {
            level,
            lord,
            start_jd: cursor,
            end_jd: end,
            children: Vec::new(),
        });

        cursor = end;
        lord = lord.next();
        if cursor >= end_jd {
            break;
        }
    }

    nodes
}

/// Flat list of 9 mahadashas covering the 120-year horizon.
///
/// The first entry runs for the (clamped) balance; the remaining 8 lords
/// get their full periods in cyclic order. No children are built — this
/// is the cheap top-level timeline.
pub fn build_mahadasha_list(
    start_jd: f64,
    entry_lord: Lord,
    balance_years: Option<f64>,
) -> Vec<PeriodNode> {
    let mut out = Vec::with_capacity(9);
    let mut cursor = start_jd;

    let first_years = effective_years(entry_lord, balance_years);
    let first_end = cursor + days_of_years(first_years);
    out.push(PeriodNode {
        level: DashaLevel::Mahadasha,
        lord: entry_lord,
        start_jd: cursor,
        end_jd: first_end,
        children: Vec::new(),
    });
    cursor = first_end;

    let mut lord = entry_lord.next();
    for _ in 0..8 {
        let end = cursor + days_of_years(lord.years());
        out.push(PeriodNode {
            level: DashaLevel::Mahadasha,
            lord,
            start_jd: cursor,
            end_jd: end,
            children: Vec::new(),
        });
        cursor = end;
        lord = lord.next();
    }

    out
}

/// Mahadasha subtrees covering exactly 120 years from `start_jd`.
///
/// The first tree runs for the entry balance; subsequent lords get full
/// periods until the horizon is spent, the final one clamped to whatever
/// remains (the elapsed part of the entry lord's own period).
pub fn build_timeline(
    start_jd: f64,
    entry_lord: Lord,
    balance_years: Option<f64>,
    max_levels: u8,
) -> Vec<PeriodNode> {
    let mut out = Vec::new();
    let mut cursor = start_jd;
    let mut used_years = 0.0;

    let first_years = effective_years(entry_lord, balance_years);
    if first_years > 0.0 {
        let tree = build_period_tree(cursor, entry_lord, Some(first_years), max_levels);
        cursor = tree.end_jd;
        used_years += first_years;
        out.push(tree);
    }

    let mut lord = entry_lord.next();
    while used_years < TOTAL_VIMSHOTTARI_YEARS - 1e-9 {
        let years = lord.years().min(TOTAL_VIMSHOTTARI_YEARS - used_years);
        if years > 0.0 {
            let tree = build_period_tree(cursor, lord, Some(years), max_levels);
            cursor = tree.end_jd;
            used_years += years;
            out.push(tree);
        }
        lord = lord.next();
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const T0: f64 = 2_451_545.0; // J2000

    fn assert_partitions(parent: &PeriodNode) {
        let children = &parent.children;
        if children.is_empty() {
            return;
        }
        assert_eq!(children.len(), 9);
        assert_eq!(children[0].start_jd, parent.start_jd);
        assert_eq!(children[8].end_jd, parent.end_jd);
        for pair in children.windows(2) {
            assert_eq!(pair[0].end_jd, pair[1].start_jd);
        }
        for child in children {
            assert_partitions(child);
        }
    }

    #[test]
    fn tree_depth_one_has_no_children() {
        let tree = build_period_tree(T0, Lord::Ketu, None, 1);
        assert!(tree.children.is_empty());
        assert!((tree.duration_days() - 7.0 * DAYS_PER_YEAR).abs() < 1e-9);
    }

    #[test]
    fn tree_children_partition_exactly_at_all_depths() {
        let tree = build_period_tree(T0, Lord::Saturn, None, 4);
        assert_partitions(&tree);
    }

    #[test]
    fn tree_first_child_shares_parent_lord() {
        let tree = build_period_tree(T0, Lord::Rahu, None, 2);
        assert_eq!(tree.children[0].lord, Lord::Rahu);
        assert_eq!(tree.children[1].lord, Lord::Jupiter);
        assert_eq!(tree.children[0].level, DashaLevel::Bhukti);
    }

    #[test]
    fn tree_balance_is_clamped() {
        let over = build_period_tree(T0, Lord::Sun, Some(99.0), 1);
        assert!((over.duration_days() - 6.0 * DAYS_PER_YEAR).abs() < 1e-9);
        let under = build_period_tree(T0, Lord::Sun, Some(-3.0), 1);
        assert_eq!(under.duration_days(), 0.0);
    }

    #[test]
    fn tree_depth_clamped_to_five() {
        let tree = build_period_tree(T0, Lord::Ketu, None, 9);
        let mut node = &tree;
        let mut depth = 1;
        while let Some(first) = node.children.first() {
            node = first;
            depth += 1;
        }
        assert_eq!(depth, 5);
        assert_eq!(node.level, DashaLevel::Prana);
    }

    #[test]
    fn level_nodes_proportional_and_exact() {
        // A 120-day window starting at Ketu: each lord's node spans
        // exactly its weight in days.
        let nodes = build_level_nodes(DashaLevel::Bhukti, T0, T0 + 120.0, Lord::Ketu);
        assert_eq!(nodes.len(), 9);
        assert!((nodes[0].duration_days() - 7.0).abs() < 1e-9);
        assert!((nodes[1].duration_days() - 20.0).abs() < 1e-9);
        assert!((nodes[8].duration_days() - 17.0).abs() < 1e-9);
        assert_eq!(nodes[8].end_jd, T0 + 120.0);
        for pair in nodes.windows(2) {
            assert_eq!(pair[0].end_jd, pair[1].start_jd);
        }
    }

    #[test]
    fn level_nodes_empty_window() {
        assert!(build_level_nodes(DashaLevel::Antara, T0, T0, Lord::Ketu).is_empty());
        assert!(build_level_nodes(DashaLevel::Antara, T0, T0 - 5.0, Lord::Ketu).is_empty());
    }

    #[test]
    fn level_nodes_start_from_given_lord() {
        let nodes = build_level_nodes(DashaLevel::Sukshma, T0, T0 + 9.0, Lord::Saturn);
        assert_eq!(nodes[0].lord, Lord::Saturn);
        assert_eq!(nodes[1].lord, Lord::Mercury);
        assert_eq!(nodes[2].lord, Lord::Ketu);
    }

    #[test]
    fn mahadasha_list_covers_120_years() {
        let list = build_mahadasha_list(T0, Lord::Ketu, None);
        assert_eq!(list.len(), 9);
        let total: f64 = list.iter().map(|n| n.duration_days()).sum();
        assert!((total - 120.0 * DAYS_PER_YEAR).abs() < 1e-6);
        for pair in list.windows(2) {
            assert_eq!(pair[0].end_jd, pair[1].start_jd);
        }
    }

    #[test]
    fn mahadasha_list_first_entry_partial() {
        let list = build_mahadasha_list(T0, Lord::Moon, Some(2.5));
        assert_eq!(list[0].lord, Lord::Moon);
        assert!((list[0].duration_days() - 2.5 * DAYS_PER_YEAR).abs() < 1e-9);
        assert_eq!(list[1].lord, Lord::Mars);
        assert!((list[1].duration_days() - 7.0 * DAYS_PER_YEAR).abs() < 1e-9);
    }

    #[test]
    fn timeline_spans_exactly_120_years() {
        let timeline = build_timeline(T0, Lord::Venus, Some(12.0), 2);
        let total: f64 = timeline.iter().map(|n| n.duration_days()).sum();
        assert!((total - 120.0 * DAYS_PER_YEAR).abs() < 1e-6);
        // Partial entry (12 of 20) → 10 mahadashas, last being Venus's
        // leftover 8 years.
        assert_eq!(timeline.len(), 10);
        let last = timeline.last().unwrap();
        assert_eq!(last.lord, Lord::Venus);
        assert!((last.duration_days() - 8.0 * DAYS_PER_YEAR).abs() < 1e-6);
    }

    #[test]
    fn timeline_full_balance_gives_nine() {
        let timeline = build_timeline(T0, Lord::Ketu, None, 1);
        assert_eq!(timeline.len(), 9);
    }

    #[test]
    fn invalid_lord_name_fails_fast() {
        let err = lord_from_name("Neptune").unwrap_err();
        assert_eq!(err, VedicError::InvalidLord("Neptune".into()));
        assert!(lord_from_name("ketu").is_err()); // names are case-sensitive
    }

    #[test]
    fn level_labels_round_trip() {
        for level in [
            DashaLevel::Mahadasha,
            DashaLevel::Bhukti,
            DashaLevel::Antara,
            DashaLevel::Sukshma,
            DashaLevel::Prana,
        ] {
            assert_eq!(DashaLevel::from_label(level.label()), Some(level));
        }
        assert_eq!(DashaLevel::from_label("dasha"), None);
    }

    #[test]
    fn serializes_with_iso_instants() {
        let tree = build_period_tree(T0, Lord::Ketu, None, 1);
        let json = serde_json::to_string(&tree).unwrap();
        assert!(json.contains("\"level\":\"mahadasha\""), "{json}");
        assert!(json.contains("\"lord\":\"Ketu\""), "{json}");
        assert!(json.contains("\"start\":\"2000-01-01T12:00:00Z\""), "{json}");
        assert!(!json.contains("children"), "{json}");
    }
}
