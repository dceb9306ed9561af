//! In-memory content store over the embedded chapter table.
//!
//! Lookups distinguish three whole-site outcomes: chapter not found
//! (number outside 1..=18), verse number outside the chapter's declared
//! range, and verse number in range but not yet authored. The last two
//! are deliberately separate states; "in range but absent" is valid,
//! permanent-until-edited content.

use anyhow::Result;

use crate::data;
use crate::models::{Chapter, GalleryImage, Shloka};

pub const CHAPTER_COUNT: u32 = 18;

/// Outcome of a verse lookup.
#[derive(Debug, PartialEq)]
pub enum VerseLookup<'a> {
    Found(&'a Shloka),
    /// In the chapter's declared range, but no record authored yet.
    NotYetAuthored,
    /// Outside 1..=Chapter.verses; `declared` is the chapter's verse count.
    OutOfRange { declared: u32 },
    ChapterNotFound,
}

/// Immutable, ordered store of the eighteen chapters plus gallery records.
/// Built once at startup; chapter `n` lives at index `n - 1`.
pub struct ContentStore {
    chapters: Vec<Chapter>,
    gallery: Vec<GalleryImage>,
}

impl ContentStore {
    pub fn new() -> Result<Self> {
        let store = ContentStore {
            chapters: data::chapters(),
            gallery: data::gallery_images(),
        };
        store.validate()?;
        Ok(store)
    }

    /// Checks the seed table's structural invariants: numbers ascend from 1
    /// so direct indexing works, and every authored shloka falls inside its
    /// chapter's declared range.
    fn validate(&self) -> Result<()> {
        anyhow::ensure!(
            self.chapters.len() == CHAPTER_COUNT as usize,
            "expected {} chapters, found {}",
            CHAPTER_COUNT,
            self.chapters.len()
        );
        for (i, chapter) in self.chapters.iter().enumerate() {
            anyhow::ensure!(
                chapter.number == i as u32 + 1,
                "chapter at index {} has number {}",
                i,
                chapter.number
            );
            for shloka in &chapter.shlokas {
                anyhow::ensure!(
                    shloka.number >= 1 && shloka.number <= chapter.verses,
                    "chapter {} shloka {} outside declared range 1..={}",
                    chapter.number,
                    shloka.number,
                    chapter.verses
                );
            }
        }
        Ok(())
    }

    pub fn chapters(&self) -> &[Chapter] {
        &self.chapters
    }

    /// Chapter by 1-based number; `None` outside 1..=18.
    pub fn chapter(&self, number: u32) -> Option<&Chapter> {
        if number == 0 {
            return None;
        }
        self.chapters.get(number as usize - 1)
    }

    pub fn verse(&self, chapter_number: u32, verse_number: u32) -> VerseLookup<'_> {
        let Some(chapter) = self.chapter(chapter_number) else {
            return VerseLookup::ChapterNotFound;
        };
        if verse_number < 1 || verse_number > chapter.verses {
            return VerseLookup::OutOfRange {
                declared: chapter.verses,
            };
        }
        match chapter.shloka(verse_number) {
            Some(shloka) => VerseLookup::Found(shloka),
            None => VerseLookup::NotYetAuthored,
        }
    }

    pub fn gallery(&self) -> &[GalleryImage] {
        &self.gallery
    }

    /// Sum of the declared verse counts across all chapters.
    pub fn total_declared_verses(&self) -> u32 {
        self.chapters.iter().map(|c| c.verses).sum()
    }

    /// Shlokas actually authored so far, across all chapters.
    pub fn total_authored_verses(&self) -> usize {
        self.chapters.iter().map(|c| c.shlokas.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> ContentStore {
        ContentStore::new().expect("seed table is valid")
    }

    #[test]
    fn every_chapter_number_matches_its_lookup_key() {
        let store = store();
        for c in 1..=CHAPTER_COUNT {
            let chapter = store.chapter(c).expect("chapter in range");
            assert_eq!(chapter.number, c);
        }
    }

    #[test]
    fn chapters_outside_range_are_not_found() {
        let store = store();
        assert!(store.chapter(0).is_none());
        assert!(store.chapter(19).is_none());
        assert!(store.chapter(25).is_none());
        assert!(store.chapter(u32::MAX).is_none());
    }

    #[test]
    fn in_range_verses_are_never_not_found() {
        let store = store();
        for chapter in store.chapters() {
            for v in 1..=chapter.verses {
                match store.verse(chapter.number, v) {
                    VerseLookup::Found(shloka) => assert_eq!(shloka.number, v),
                    VerseLookup::NotYetAuthored => {}
                    other => panic!(
                        "chapter {} verse {} yielded {:?}",
                        chapter.number, v, other
                    ),
                }
            }
        }
    }

    #[test]
    fn out_of_range_is_distinct_from_not_yet_authored() {
        let store = store();
        // Chapter 2 declares 72 verses.
        assert!(matches!(
            store.verse(2, 0),
            VerseLookup::OutOfRange { declared: 72 }
        ));
        assert!(matches!(
            store.verse(2, 73),
            VerseLookup::OutOfRange { declared: 72 }
        ));
        assert!(matches!(store.verse(2, 5), VerseLookup::NotYetAuthored));
    }

    #[test]
    fn seeded_verse_two_forty_seven_is_present() {
        let store = store();
        match store.verse(2, 47) {
            VerseLookup::Found(shloka) => {
                assert!(
                    shloka
                        .translation
                        .en
                        .starts_with("You have a right to perform your prescribed duty")
                );
            }
            other => panic!("expected seeded verse, got {:?}", other),
        }
    }

    #[test]
    fn missing_chapter_wins_over_any_verse_parameter() {
        let store = store();
        assert_eq!(store.verse(25, 1), VerseLookup::ChapterNotFound);
        assert_eq!(store.verse(25, 9999), VerseLookup::ChapterNotFound);
    }

    #[test]
    fn declared_totals_cover_the_whole_text() {
        let store = store();
        assert_eq!(store.total_declared_verses(), 701);
        assert_eq!(store.total_authored_verses(), 2);
    }
}
