use std::borrow::Cow;
use std::iter::Peekable;
use std::num::ParseIntError;
use std::sync::LazyLock;

use regex::{CaptureMatches, Regex};

use crate::digits::normalize_digits;

/// `ماده` + whitespace + number, plus any trailing dash/dot/space run.
static ARTICLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"ماده\s+(\d+)[\s\-—–.]*").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Article<'a> {
    pub id: i64,
    pub body: &'a str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// Captured digits do not fit an `i64` (or are not ASCII digits).
    MalformedNumber(ParseIntError),
    NotPositive,
    EmptyBody,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Skipped<'a> {
    pub raw_id: &'a str,
    pub reason: SkipReason,
}

/// Outcome of one marker-delimited segment.
pub type Segment<'a> = Result<Article<'a>, Skipped<'a>>;

/// Lazy walk over the marker-delimited segments of a normalized text.
///
/// Text ahead of the first marker is preamble and never reported. A segment's
/// body runs from the end of its marker to the start of the next one.
pub struct Segments<'a> {
    text: &'a str,
    markers: Peekable<CaptureMatches<'static, 'a>>,
}

impl<'a> Iterator for Segments<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let caps = self.markers.next()?;
        let marker = caps.get(0)?;
        let number = caps.get(1)?;
        let body_end = self
            .markers
            .peek()
            .and_then(|next| next.get(0))
            .map_or(self.text.len(), |m| m.start());
        let body = self.text[marker.end()..body_end].trim();
        Some(classify(number.as_str(), body))
    }
}

fn classify<'a>(raw_id: &'a str, body: &'a str) -> Segment<'a> {
    let skip = |reason| -> Segment<'a> { Err(Skipped { raw_id, reason }) };
    let id = match raw_id.parse::<i64>() {
        Ok(id) => id,
        Err(e) => return skip(SkipReason::MalformedNumber(e)),
    };
    if id <= 0 {
        return skip(SkipReason::NotPositive);
    }
    if body.is_empty() {
        return skip(SkipReason::EmptyBody);
    }
    Ok(Article { id, body })
}

/// Split already digit-normalized text into per-article outcomes.
pub fn segments(text: &str) -> Segments<'_> {
    Segments {
        text,
        markers: ARTICLE_RE.captures_iter(text).peekable(),
    }
}

/// Articles of an already digit-normalized text, in document order.
/// Duplicate ids are passed through; callers decide which one wins.
pub fn articles(text: &str) -> impl Iterator<Item = Article<'_>> {
    segments(text).filter_map(Result::ok)
}

/// A law document with its digits normalized, ready for extraction.
pub struct LawDocument<'a> {
    text: Cow<'a, str>,
}

impl<'a> LawDocument<'a> {
    pub fn new(raw: &'a str) -> Self {
        LawDocument {
            text: normalize_digits(raw),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn segments(&self) -> Segments<'_> {
        segments(&self.text)
    }

    pub fn articles(&self) -> impl Iterator<Item = Article<'_>> {
        articles(&self.text)
    }
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn pairs(text: &str) -> Vec<(i64, String)> {
        LawDocument::new(text)
            .articles()
            .map(|a| (a.id, a.body.to_string()))
            .collect()
    }

    #[test]
    fn two_articles() {
        let got = pairs("مقدمه ماده 5 Body text here. ماده 12 Second body.");
        assert_eq!(
            got,
            vec![(5, "Body text here.".to_string()), (12, "Second body.".to_string())]
        );
    }

    #[test]
    fn document_order_not_sorted() {
        let got = pairs("ماده 3 سوم\nماده 1 اول\nماده 2 دوم");
        let ids: Vec<i64> = got.iter().map(|(id, _)| *id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
        assert_eq!(got[1].1, "اول");
    }

    #[test]
    fn persian_digits_normalized_before_matching() {
        let got = pairs("ماده ۱۲ - متن ماده دوازده");
        assert_eq!(got, vec![(12, "متن ماده دوازده".to_string())]);
    }

    #[test]
    fn dash_and_dot_separators_consumed() {
        let got = pairs("ماده 1 – الف\nماده 2. ب\nماده 3 —ج");
        let bodies: Vec<&str> = got.iter().map(|(_, b)| b.as_str()).collect();
        assert_eq!(bodies, vec!["الف", "ب", "ج"]);
    }

    #[test]
    fn no_markers_yields_nothing() {
        assert!(pairs("متنی بدون هیچ شماره‌ای").is_empty());
        assert!(pairs("").is_empty());
    }

    #[test]
    fn preamble_is_dropped() {
        let got = pairs("قانون مدنی\nکتاب اول\nماده 1 متن");
        assert_eq!(got, vec![(1, "متن".to_string())]);
    }

    #[test]
    fn marker_at_end_is_skipped() {
        let doc = LawDocument::new("ماده 1 متن\nماده 2 - ");
        let outcomes: Vec<_> = doc.segments().collect();
        assert_eq!(outcomes.len(), 2);
        assert!(outcomes[0].is_ok());
        assert!(matches!(
            &outcomes[1],
            Err(Skipped { raw_id: "2", reason: SkipReason::EmptyBody })
        ));
    }

    #[test]
    fn non_numeric_marker_is_not_an_article() {
        // "ماده abc" never matches, so its text stays in the previous body.
        let got = pairs("ماده 1 اول ماده abc چیزی");
        assert_eq!(got, vec![(1, "اول ماده abc چیزی".to_string())]);
    }

    #[test]
    fn overflow_skips_only_that_segment() {
        let doc = LawDocument::new("ماده 99999999999999999999 بزرگ ماده 7 کوچک");
        let outcomes: Vec<_> = doc.segments().collect();
        assert!(matches!(
            &outcomes[0],
            Err(Skipped { reason: SkipReason::MalformedNumber(_), .. })
        ));
        assert_eq!(outcomes[1], Ok(Article { id: 7, body: "کوچک" }));
    }

    #[test]
    fn non_latin_digits_outside_persian_are_malformed() {
        // Devanagari digits match \d but do not parse.
        let doc = LawDocument::new("ماده १२ متن");
        let outcomes: Vec<_> = doc.segments().collect();
        assert!(matches!(
            &outcomes[0],
            Err(Skipped { raw_id: "१२", reason: SkipReason::MalformedNumber(_) })
        ));
        assert_eq!(doc.articles().count(), 0);
    }

    #[test]
    fn zero_is_not_positive() {
        let doc = LawDocument::new("ماده 0 صفر ماده 1 یک");
        let outcomes: Vec<_> = doc.segments().collect();
        assert!(matches!(&outcomes[0], Err(Skipped { reason: SkipReason::NotPositive, .. })));
        assert_eq!(doc.articles().map(|a| a.id).collect::<Vec<_>>(), vec![1]);
    }

    #[test]
    fn duplicates_are_passed_through() {
        let ids: Vec<i64> = LawDocument::new("ماده 1 الف ماده 1 ب")
            .articles()
            .map(|a| a.id)
            .collect();
        assert_eq!(ids, vec![1, 1]);
    }

    #[test]
    fn free_functions_expect_normalized_text() {
        assert_eq!(articles("ماده ۱ متن").count(), 0);
        assert_eq!(articles("ماده 1 متن").count(), 1);
    }

    #[test]
    fn fixture_segments() {
        let text = std::fs::read_to_string("tests/fixtures/criminal_law.txt").unwrap();
        let doc = LawDocument::new(&text);
        let ids: Vec<i64> = doc.articles().map(|a| a.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 2, 5]);
        let skipped = doc.segments().filter(|s| s.is_err()).count();
        assert_eq!(skipped, 1);
    }
}
