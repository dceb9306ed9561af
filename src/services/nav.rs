//! Pure resolution of navigation parameters into view states.
//!
//! A request path names a chapter and optionally a verse; this module
//! turns those raw parameters plus the store into exactly one of the
//! mutually exclusive page views. Non-numeric parameters resolve the same
//! way as numbers outside the table. Previous/next targets are computed
//! by clamping; a boundary chapter or verse simply has no affordance.

use crate::models::{Chapter, Shloka};
use crate::services::store::{ContentStore, VerseLookup, CHAPTER_COUNT};

/// The view a chapter/verse request resolves to.
#[derive(Debug)]
pub enum PageView<'a> {
    ChapterOverview {
        chapter: &'a Chapter,
        prev: Option<u32>,
        next: Option<u32>,
    },
    VerseDetail {
        chapter: &'a Chapter,
        shloka: &'a Shloka,
        prev: Option<u32>,
        next: Option<u32>,
    },
    /// Verse number inside the declared range but not authored yet.
    VerseNotYetAuthored { chapter: &'a Chapter, verse: u32 },
    /// Verse parameter outside the declared range (or non-numeric).
    VerseOutOfRange { chapter: &'a Chapter },
    ChapterNotFound,
}

/// Parses a 1-based path segment; anything non-numeric (or zero) is `None`.
pub fn parse_number(raw: &str) -> Option<u32> {
    match raw.trim().parse::<u32>() {
        Ok(n) if n >= 1 => Some(n),
        _ => None,
    }
}

/// Previous/next chapter numbers, clamped to 1..=18.
pub fn chapter_nav(number: u32) -> (Option<u32>, Option<u32>) {
    let prev = (number > 1).then(|| number - 1);
    let next = (number < CHAPTER_COUNT).then(|| number + 1);
    (prev, next)
}

/// Previous/next verse numbers within the chapter's declared range.
pub fn verse_nav(chapter: &Chapter, verse: u32) -> (Option<u32>, Option<u32>) {
    let prev = (verse > 1).then(|| verse - 1);
    let next = (verse < chapter.verses).then(|| verse + 1);
    (prev, next)
}

/// Resolves raw path parameters into a page view. Recomputed from scratch
/// on every request; there is no incremental state.
pub fn resolve_view<'a>(
    store: &'a ContentStore,
    chapter_param: &str,
    verse_param: Option<&str>,
) -> PageView<'a> {
    let Some(chapter_number) = parse_number(chapter_param) else {
        return PageView::ChapterNotFound;
    };
    let Some(chapter) = store.chapter(chapter_number) else {
        return PageView::ChapterNotFound;
    };

    let Some(raw_verse) = verse_param else {
        let (prev, next) = chapter_nav(chapter.number);
        return PageView::ChapterOverview { chapter, prev, next };
    };

    let Some(verse_number) = parse_number(raw_verse) else {
        return PageView::VerseOutOfRange { chapter };
    };
    match store.verse(chapter.number, verse_number) {
        VerseLookup::Found(shloka) => {
            let (prev, next) = verse_nav(chapter, verse_number);
            PageView::VerseDetail {
                chapter,
                shloka,
                prev,
                next,
            }
        }
        VerseLookup::NotYetAuthored => PageView::VerseNotYetAuthored {
            chapter,
            verse: verse_number,
        },
        VerseLookup::OutOfRange { .. } => PageView::VerseOutOfRange { chapter },
        // chapter() above already succeeded for this number
        VerseLookup::ChapterNotFound => PageView::ChapterNotFound,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> ContentStore {
        ContentStore::new().expect("seed table is valid")
    }

    #[test]
    fn first_chapter_has_no_previous_affordance() {
        assert_eq!(chapter_nav(1), (None, Some(2)));
    }

    #[test]
    fn last_chapter_has_no_next_affordance() {
        assert_eq!(chapter_nav(18), (Some(17), None));
    }

    #[test]
    fn interior_chapter_has_both_affordances() {
        assert_eq!(chapter_nav(9), (Some(8), Some(10)));
    }

    #[test]
    fn verse_navigation_clamps_to_declared_range() {
        let store = store();
        let chapter = store.chapter(2).unwrap();
        assert_eq!(verse_nav(chapter, 1), (None, Some(2)));
        assert_eq!(verse_nav(chapter, 72), (Some(71), None));
        assert_eq!(verse_nav(chapter, 47), (Some(46), Some(48)));
    }

    #[test]
    fn non_numeric_chapter_resolves_to_not_found() {
        let store = store();
        assert!(matches!(
            resolve_view(&store, "abc", None),
            PageView::ChapterNotFound
        ));
        assert!(matches!(
            resolve_view(&store, "", None),
            PageView::ChapterNotFound
        ));
        assert!(matches!(
            resolve_view(&store, "0", None),
            PageView::ChapterNotFound
        ));
    }

    #[test]
    fn chapter_out_of_table_resolves_to_not_found() {
        let store = store();
        assert!(matches!(
            resolve_view(&store, "25", Some("1")),
            PageView::ChapterNotFound
        ));
    }

    #[test]
    fn valid_chapter_without_verse_is_an_overview() {
        let store = store();
        match resolve_view(&store, "2", None) {
            PageView::ChapterOverview { chapter, prev, next } => {
                assert_eq!(chapter.number, 2);
                assert_eq!(prev, Some(1));
                assert_eq!(next, Some(3));
            }
            other => panic!("expected overview, got {:?}", other),
        }
    }

    #[test]
    fn seeded_verse_resolves_to_detail() {
        let store = store();
        match resolve_view(&store, "2", Some("47")) {
            PageView::VerseDetail { shloka, prev, next, .. } => {
                assert_eq!(shloka.number, 47);
                assert_eq!(prev, Some(46));
                assert_eq!(next, Some(48));
            }
            other => panic!("expected verse detail, got {:?}", other),
        }
    }

    #[test]
    fn unseeded_in_range_verse_is_not_yet_authored() {
        let store = store();
        assert!(matches!(
            resolve_view(&store, "2", Some("5")),
            PageView::VerseNotYetAuthored { verse: 5, .. }
        ));
    }

    #[test]
    fn out_of_range_verse_is_distinct_from_unauthored() {
        let store = store();
        assert!(matches!(
            resolve_view(&store, "2", Some("73")),
            PageView::VerseOutOfRange { .. }
        ));
        assert!(matches!(
            resolve_view(&store, "2", Some("not-a-number")),
            PageView::VerseOutOfRange { .. }
        ));
    }
}
