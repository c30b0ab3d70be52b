//! Crawl units and the built-in query worklist.
//!
//! A [`CrawlUnit`] is one (query, category, bound) triple; the pipeline
//! consumes a sequence of them and has no opinion about where the sequence
//! came from. The built-in lists below carry the dataset taxonomy: two
//! labeled classes per gender, one query per celebrity, with the category
//! doubling as the directory name under the dataset root.

use serde::{Deserialize, Serialize};

/// One unit of work: harvest up to `max_count` images for `query` into the
/// `category` directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrawlUnit {
    /// Search query text, e.g. "차은우 얼굴".
    pub query: String,
    /// Category directory name under the dataset root.
    pub category: String,
    /// Upper bound on images saved for this unit.
    pub max_count: usize,
}

impl CrawlUnit {
    pub fn new(query: impl Into<String>, category: impl Into<String>, max_count: usize) -> Self {
        Self {
            query: query.into(),
            category: category.into(),
            max_count,
        }
    }
}

/// Result of running one unit to completion (or abandoning it at the unit
/// boundary).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrawlReport {
    /// The unit this report describes.
    pub unit: CrawlUnit,
    /// Number of images actually written; never exceeds `unit.max_count`.
    pub saved_count: usize,
}

impl CrawlReport {
    /// Report for a unit that produced nothing.
    #[must_use]
    pub fn empty(unit: CrawlUnit) -> Self {
        Self {
            unit,
            saved_count: 0,
        }
    }
}

/// Which half of the built-in worklist to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupSelection {
    Female,
    Male,
    All,
}

const FEMALE_FREEPASS: &[&str] = &[
    "박보영 얼굴",
    "박은빈 얼굴",
    "김민주 아이즈원 얼굴",
    "미나 트와이스 얼굴",
    "카즈하 르세라핌 얼굴",
    "효정 오마이걸 얼굴",
];

const FEMALE_MOONJEONBAKDAE: &[&str] = &[
    "이채영 프로미스나인 얼굴",
    "미미 오마이걸 얼굴",
    "닝닝 에스파 얼굴",
    "채영 트와이스 얼굴",
    "제니 블랙핑크 얼굴",
];

const MALE_FREEPASS: &[&str] = &[
    "진 BTS 얼굴",
    "임시완 얼굴",
    "송중기 얼굴",
    "박보검 얼굴",
    "차은우 얼굴",
];

const MALE_MOONJEONBAKDAE: &[&str] = &[
    "덱스 얼굴",
    "산 에이티즈 얼굴",
    "창균 몬스타엑스 얼굴",
    "연준 투바투 얼굴",
    "뷔 BTS 얼굴",
];

fn units_for(queries: &[&str], category: &str, max_count: usize) -> Vec<CrawlUnit> {
    queries
        .iter()
        .map(|query| CrawlUnit::new(*query, category, max_count))
        .collect()
}

/// Build the built-in worklist for the selected group, `max_count` images
/// per query.
#[must_use]
pub fn builtin_worklist(selection: GroupSelection, max_count: usize) -> Vec<CrawlUnit> {
    let mut units = Vec::new();
    if matches!(selection, GroupSelection::Female | GroupSelection::All) {
        units.extend(units_for(FEMALE_FREEPASS, "female_freepass", max_count));
        units.extend(units_for(
            FEMALE_MOONJEONBAKDAE,
            "female_moonjeonbakdae",
            max_count,
        ));
    }
    if matches!(selection, GroupSelection::Male | GroupSelection::All) {
        units.extend(units_for(MALE_FREEPASS, "male_freepass", max_count));
        units.extend(units_for(
            MALE_MOONJEONBAKDAE,
            "male_moonjeonbakdae",
            max_count,
        ));
    }
    units
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_worklist_covers_all_groups() {
        let all = builtin_worklist(GroupSelection::All, 50);
        assert_eq!(all.len(), 21);
        assert!(all.iter().all(|u| u.max_count == 50));

        let categories: std::collections::HashSet<_> =
            all.iter().map(|u| u.category.as_str()).collect();
        assert_eq!(categories.len(), 4);
    }

    #[test]
    fn builtin_worklist_respects_selection() {
        let female = builtin_worklist(GroupSelection::Female, 10);
        assert_eq!(female.len(), 11);
        assert!(female.iter().all(|u| u.category.starts_with("female_")));

        let male = builtin_worklist(GroupSelection::Male, 10);
        assert_eq!(male.len(), 10);
        assert!(male.iter().all(|u| u.category.starts_with("male_")));
    }
}
