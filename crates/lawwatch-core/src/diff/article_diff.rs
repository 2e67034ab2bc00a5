//! Full outer join of old and new articles keyed by article number.
//!
//! Pairing never depends on input order: each side is walked in creation
//! order and an old article takes the first unclaimed new article with the same
//! number. Repeated numbers on one side therefore pair by occurrence.

use std::cmp::Ordering;
use std::collections::{HashMap, VecDeque};

use crate::entities::{Article, ArticleDiffItem};
use crate::value_objects::{ArticleNo, ChangeId};

/// One row of the outer join before it becomes a diff item
struct Pairing<'a> {
    old: Option<&'a Article>,
    new: Option<&'a Article>,
    occurrence: usize,
}

impl Pairing<'_> {
    /// Identical matched pairs and content-less singletons carry no difference
    fn is_substantive(&self) -> bool {
        match (self.old, self.new) {
            (Some(old), Some(new)) => !contents_equal(old.content.as_deref(), new.content.as_deref()),
            (Some(only), None) | (None, Some(only)) => only.content.is_some(),
            (None, None) => false,
        }
    }

    fn key(&self) -> String {
        fn label(article: Option<&Article>) -> String {
            match article {
                Some(a) => a
                    .article_no
                    .as_ref()
                    .map_or_else(|| format!("@{}", a.ordinal), |no| no.as_str().to_string()),
                None => "-".to_string(),
            }
        }
        format!("{}|{}|{}", label(self.old), label(self.new), self.occurrence)
    }

    fn sort_no(&self) -> Option<&ArticleNo> {
        self.new
            .and_then(|a| a.article_no.as_ref())
            .or_else(|| self.old.and_then(|a| a.article_no.as_ref()))
    }

    fn ordinal(&self) -> (i32, i32) {
        (
            self.new.map_or(i32::MAX, |a| a.ordinal),
            self.old.map_or(i32::MAX, |a| a.ordinal),
        )
    }

    fn cmp_order(&self, other: &Self) -> Ordering {
        match (self.sort_no(), other.sort_no()) {
            (Some(a), Some(b)) => a.cmp(b),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
        .then_with(|| self.ordinal().cmp(&other.ordinal()))
    }

    fn into_item(self, change_id: &ChangeId) -> ArticleDiffItem {
        let diff_id = change_id.derive(&self.key());
        ArticleDiffItem {
            diff_id,
            old_no: self.old.and_then(|a| a.article_no.clone()),
            old_content: self.old.and_then(|a| a.content.clone()),
            new_no: self.new.and_then(|a| a.article_no.clone()),
            new_content: self.new.and_then(|a| a.content.clone()),
        }
    }
}

/// Compare article text ignoring line endings and trailing whitespace.
///
/// A missing body equals a blank one.
pub fn contents_equal(old: Option<&str>, new: Option<&str>) -> bool {
    let old = old.unwrap_or_default().trim_end();
    let new = new.unwrap_or_default().trim_end();
    old.lines().map(str::trim_end).eq(new.lines().map(str::trim_end))
}

fn in_creation_order(articles: &[Article]) -> Vec<&Article> {
    let mut sorted: Vec<&Article> = articles.iter().collect();
    sorted.sort_by_key(|a| a.ordinal);
    sorted
}

/// Diff the old and new article sets of a change.
///
/// - matched numbers with differing text yield one item with both sides
/// - matched numbers with equal text are left out
/// - old-only articles yield removals (`new_*` absent)
/// - new-only articles yield additions (`old_*` absent)
///
/// Items are ordered by new number, else old number, else creation order.
pub fn diff_articles(change_id: &ChangeId, old: &[Article], new: &[Article]) -> Vec<ArticleDiffItem> {
    let old = in_creation_order(old);
    let new = in_creation_order(new);

    let mut unclaimed: HashMap<&ArticleNo, VecDeque<usize>> = HashMap::new();
    for (idx, article) in new.iter().copied().enumerate() {
        if let Some(no) = &article.article_no {
            unclaimed.entry(no).or_default().push_back(idx);
        }
    }

    let mut claimed = vec![false; new.len()];
    let mut seen: HashMap<&ArticleNo, usize> = HashMap::new();
    let mut pairings = Vec::with_capacity(old.len().max(new.len()));

    for article in old.iter().copied() {
        let Some(no) = &article.article_no else {
            pairings.push(Pairing { old: Some(article), new: None, occurrence: 0 });
            continue;
        };

        let occurrence = seen.entry(no).or_insert(0);
        let partner = unclaimed.get_mut(no).and_then(VecDeque::pop_front);
        if let Some(idx) = partner {
            claimed[idx] = true;
        }
        pairings.push(Pairing {
            old: Some(article),
            new: partner.map(|idx| new[idx]),
            occurrence: *occurrence,
        });
        *occurrence += 1;
    }

    let mut added_seen: HashMap<&ArticleNo, usize> = HashMap::new();
    for (idx, article) in new.iter().copied().enumerate() {
        if claimed[idx] {
            continue;
        }
        let occurrence = match &article.article_no {
            Some(no) => {
                let n = added_seen.entry(no).or_insert(0);
                *n += 1;
                *n - 1
            }
            None => 0,
        };
        pairings.push(Pairing { old: None, new: Some(article), occurrence });
    }

    pairings.retain(Pairing::is_substantive);
    pairings.sort_by(Pairing::cmp_order);

    pairings
        .into_iter()
        .map(|p| p.into_item(change_id))
        .collect()
}
