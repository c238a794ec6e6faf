//! Qualifier tokenization and well-known Maven qualifier ranking.
//!
//! A qualifier such as `alpha-1`, `RC2` or `SNAPSHOT` is split into
//! alternating text and numeric items. Text items are ranked by their
//! [`QualifierKind`]; numeric items compare as numbers.

use regex::Regex;
use std::cmp::Ordering;
use std::sync::LazyLock;

static TIMESTAMPED_SNAPSHOT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{8})\.(\d{6})-(\d+)$").expect("static regex is valid"));

/// Well-known qualifiers, in Maven precedence order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum QualifierKind {
    Alpha,
    Beta,
    Milestone,
    ReleaseCandidate,
    Snapshot,
    Release,
    ServicePack,
    Other,
}

impl QualifierKind {
    pub fn classify(text: &str) -> Self {
        match text.to_lowercase().as_str() {
            "alpha" | "a" => Self::Alpha,
            "beta" | "b" => Self::Beta,
            "milestone" | "m" => Self::Milestone,
            "rc" | "cr" => Self::ReleaseCandidate,
            "snapshot" => Self::Snapshot,
            "" | "ga" | "final" | "release" => Self::Release,
            "sp" => Self::ServicePack,
            _ => Self::Other,
        }
    }

    pub const fn is_prerelease(self) -> bool {
        matches!(
            self,
            Self::Alpha | Self::Beta | Self::Milestone | Self::ReleaseCandidate | Self::Snapshot
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QualifierItem {
    Number(u64),
    /// Lowercased text run.
    Text(String),
}

/// Position of a qualifier item on Maven's qualifier line.
///
/// Absent items, zero and release words (`ga`, `final`, `release`) share the
/// `Release` rank, so every pair of items compares the same way whether they
/// are present or padded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) enum MavenRank<'a> {
    PreRelease(QualifierKind),
    Release,
    ServicePack,
    Other(&'a str),
    Number(u64),
}

/// Rank of `item`; an absent item ranks as the plain release.
pub(crate) fn maven_rank(item: Option<&QualifierItem>) -> MavenRank<'_> {
    match item {
        None | Some(QualifierItem::Number(0)) => MavenRank::Release,
        Some(QualifierItem::Number(n)) => MavenRank::Number(*n),
        Some(QualifierItem::Text(text)) => match QualifierKind::classify(text) {
            QualifierKind::Release => MavenRank::Release,
            QualifierKind::ServicePack => MavenRank::ServicePack,
            QualifierKind::Other => MavenRank::Other(text),
            kind => MavenRank::PreRelease(kind),
        },
    }
}

impl QualifierItem {
    /// Plain ordering: numbers numerically, text lexically, numbers above text.
    pub(crate) fn lexical_cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Number(a), Self::Number(b)) => a.cmp(b),
            (Self::Number(_), Self::Text(_)) => Ordering::Greater,
            (Self::Text(_), Self::Number(_)) => Ordering::Less,
            (Self::Text(a), Self::Text(b)) => a.cmp(b),
        }
    }
}

/// Returns true for the `YYYYMMDD.HHMMSS-N` form of a deployed snapshot.
pub fn is_timestamped_snapshot(qualifier: &str) -> bool {
    TIMESTAMPED_SNAPSHOT.is_match(qualifier)
}

/// Splits a qualifier into comparable items.
///
/// Timestamped snapshots tokenize as `snapshot` followed by their timestamp
/// numbers so they rank with `-SNAPSHOT` rather than above the release.
pub fn tokenize(qualifier: &str) -> Vec<QualifierItem> {
    if let Some(caps) = TIMESTAMPED_SNAPSHOT.captures(qualifier) {
        let mut items = vec![QualifierItem::Text("snapshot".into())];
        items.extend(
            caps.iter()
                .skip(1)
                .flatten()
                .filter_map(|m| m.as_str().parse().ok())
                .map(QualifierItem::Number),
        );
        return items;
    }

    let mut items = Vec::new();
    let mut current = String::new();
    let mut in_digits = false;

    let flush = |current: &mut String, in_digits: bool, items: &mut Vec<QualifierItem>| {
        if current.is_empty() {
            return;
        }
        let item = if in_digits {
            current
                .parse::<u64>()
                .map_or_else(|_| QualifierItem::Text(current.clone()), QualifierItem::Number)
        } else {
            QualifierItem::Text(current.to_lowercase())
        };
        items.push(item);
        current.clear();
    };

    for ch in qualifier.chars() {
        if matches!(ch, '.' | '-' | '_' | '+') {
            flush(&mut current, in_digits, &mut items);
            continue;
        }
        let digit = ch.is_ascii_digit();
        if !current.is_empty() && digit != in_digits {
            flush(&mut current, in_digits, &mut items);
        }
        in_digits = digit;
        current.push(ch);
    }
    flush(&mut current, in_digits, &mut items);

    items
}

/// Kind of the leading word of a tokenized qualifier.
pub fn leading_kind(items: &[QualifierItem]) -> QualifierKind {
    match items.first() {
        Some(QualifierItem::Text(text)) => QualifierKind::classify(text),
        Some(QualifierItem::Number(_)) => QualifierKind::Other,
        None => QualifierKind::Release,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use QualifierItem::{Number, Text};

    #[rstest]
    #[case("alpha", QualifierKind::Alpha)]
    #[case("BETA", QualifierKind::Beta)]
    #[case("m", QualifierKind::Milestone)]
    #[case("cr", QualifierKind::ReleaseCandidate)]
    #[case("RC", QualifierKind::ReleaseCandidate)]
    #[case("SNAPSHOT", QualifierKind::Snapshot)]
    #[case("Final", QualifierKind::Release)]
    #[case("ga", QualifierKind::Release)]
    #[case("sp", QualifierKind::ServicePack)]
    #[case("jre", QualifierKind::Other)]
    fn test_classify(#[case] text: &str, #[case] expected: QualifierKind) {
        assert_eq!(QualifierKind::classify(text), expected);
    }

    #[test]
    fn test_kind_precedence() {
        assert!(QualifierKind::Alpha < QualifierKind::Beta);
        assert!(QualifierKind::Milestone < QualifierKind::ReleaseCandidate);
        assert!(QualifierKind::Snapshot < QualifierKind::Release);
        assert!(QualifierKind::Release < QualifierKind::ServicePack);
    }

    #[test]
    fn test_tokenize() {
        assert_eq!(tokenize("alpha-1"), vec![Text("alpha".into()), Number(1)]);
        assert_eq!(tokenize("RC2"), vec![Text("rc".into()), Number(2)]);
        assert_eq!(tokenize("SNAPSHOT"), vec![Text("snapshot".into())]);
        assert_eq!(
            tokenize("beta.10_b"),
            vec![Text("beta".into()), Number(10), Text("b".into())]
        );
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn test_tokenize_timestamped_snapshot() {
        assert!(is_timestamped_snapshot("20240101.123456-7"));
        assert!(!is_timestamped_snapshot("2024.1-7"));
        assert_eq!(
            tokenize("20240101.123456-7"),
            vec![
                Text("snapshot".into()),
                Number(20_240_101),
                Number(123_456),
                Number(7)
            ]
        );
    }

    #[rstest]
    #[case(None, Some(Number(0)), Ordering::Equal)]
    #[case(None, Some(Text("ga".into())), Ordering::Equal)]
    #[case(Some(Number(0)), Some(Text("final".into())), Ordering::Equal)]
    #[case(Some(Number(2)), None, Ordering::Greater)]
    #[case(Some(Text("snapshot".into())), None, Ordering::Less)]
    #[case(Some(Text("sp".into())), None, Ordering::Greater)]
    #[case(Some(Text("alpha".into())), Some(Text("beta".into())), Ordering::Less)]
    #[case(Some(Text("jre".into())), Some(Text("android".into())), Ordering::Greater)]
    #[case(Some(Number(1)), Some(Text("jre".into())), Ordering::Greater)]
    #[case(Some(Number(0)), Some(Text("jre".into())), Ordering::Less)]
    #[case(Some(Number(0)), Some(Text("rc".into())), Ordering::Greater)]
    fn test_maven_rank(
        #[case] a: Option<QualifierItem>,
        #[case] b: Option<QualifierItem>,
        #[case] expected: Ordering,
    ) {
        assert_eq!(maven_rank(a.as_ref()).cmp(&maven_rank(b.as_ref())), expected);
    }

    #[test]
    fn test_lexical_ordering() {
        assert_eq!(
            Text("alpha".into()).lexical_cmp(&Text("beta".into())),
            Ordering::Less
        );
        assert_eq!(Number(0).lexical_cmp(&Text("zz".into())), Ordering::Greater);
    }

    #[test]
    fn test_leading_kind() {
        assert_eq!(leading_kind(&tokenize("M1")), QualifierKind::Milestone);
        assert_eq!(leading_kind(&tokenize("1-jdk")), QualifierKind::Other);
        assert_eq!(leading_kind(&[]), QualifierKind::Release);
    }
}
