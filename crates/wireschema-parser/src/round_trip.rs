//! Comparison of imported text with its re-export.

use wireschema_core::schema::RoundTripMode;

/// The first line where the two texts disagree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Mismatch {
    /// 1-based line number within the compared form of the texts.
    pub line: usize,
    pub expected: Option<String>,
    pub actual: Option<String>,
}

/// Compare `source` with `exported` under `mode`.
///
/// Returns `None` when they agree, or when the check is off.
pub(crate) fn compare(mode: RoundTripMode, source: &str, exported: &str) -> Option<Mismatch> {
    match mode {
        RoundTripMode::Off => None,
        RoundTripMode::Exact => {
            if source == exported {
                return None;
            }
            first_difference(source.split('\n'), exported.split('\n'))
        }
        RoundTripMode::Normalized => {
            let expected = normalize(source);
            let actual = normalize(exported);
            first_difference(
                expected.iter().map(String::as_str),
                actual.iter().map(String::as_str),
            )
        }
    }
}

/// Trimmed lines with inner whitespace collapsed, keeping the first line and
/// dropping blank and comment lines after it.
fn normalize(text: &str) -> Vec<String> {
    text.lines()
        .enumerate()
        .filter_map(|(index, line)| {
            let line = line.trim();
            let skip = index > 0 && (line.is_empty() || line.starts_with('#'));
            (!skip).then(|| line.split_whitespace().collect::<Vec<_>>().join(" "))
        })
        .collect()
}

fn first_difference<'a>(
    mut expected: impl Iterator<Item = &'a str>,
    mut actual: impl Iterator<Item = &'a str>,
) -> Option<Mismatch> {
    let mut line = 1;
    loop {
        match (expected.next(), actual.next()) {
            (None, None) => return None,
            (left, right) if left == right => line += 1,
            (left, right) => {
                return Some(Mismatch {
                    line,
                    expected: left.map(str::to_string),
                    actual: right.map(str::to_string),
                });
            }
        }
    }
}
