//! The payoff table: a total lookup from three simultaneous moves to the
//! three players' round scores.
use std::path::Path;

use tracing::warn;

use crate::moves::Move;

/// An 8-row table indexed by one bit per player (Cooperate = 0, Defect = 1).
///
/// Immutable once constructed. Built either from [`PayoffTable::default`] or
/// from a text override via [`PayoffTable::from_source`] /
/// [`PayoffTable::from_file`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PayoffTable {
    rows: [[i64; 3]; 8],
}

fn row_index(a: Move, b: Move, c: Move) -> usize {
    (a.bit() << 2) | (b.bit() << 1) | c.bit()
}

impl Default for PayoffTable {
    /// The canonical three-player dilemma: full cooperation pays best for
    /// everyone, full defection worst, and intermediate rows reward
    /// defecting against cooperators.
    fn default() -> Self {
        use Move::{Cooperate as C, Defect as D};
        let mut table = PayoffTable { rows: [[0; 3]; 8] };
        let mut set = |a, b, c, scores| table.rows[row_index(a, b, c)] = scores;
        set(C, C, C, [7, 7, 7]);
        set(C, C, D, [3, 3, 9]);
        set(C, D, C, [3, 9, 3]);
        set(C, D, D, [0, 5, 5]);
        set(D, C, C, [9, 3, 3]);
        set(D, C, D, [5, 0, 5]);
        set(D, D, C, [5, 5, 0]);
        set(D, D, D, [1, 1, 1]);
        table
    }
}

impl PayoffTable {
    /// Look up the three players' scores for one simultaneous move triple.
    pub fn scores(&self, a: Move, b: Move, c: Move) -> [i64; 3] {
        self.rows[row_index(a, b, c)]
    }

    /// Start from the default table and override any subset of the 8 rows
    /// from a text source.
    ///
    /// Row syntax is `KEY s0 s1 s2` where KEY is three letters from
    /// `{C,c,D,d}`. A `#` starts a trailing comment; blank lines and
    /// malformed lines are skipped. Supplying fewer than 8 valid rows is
    /// allowed; the remaining rows keep their defaults (with a warning).
    pub fn from_source(source: &str) -> Self {
        let mut table = PayoffTable::default();
        let mut applied = 0;
        for line in source.lines() {
            if let Some((moves, scores)) = parse_line(line) {
                table.rows[row_index(moves[0], moves[1], moves[2])] = scores;
                applied += 1;
            }
        }
        if applied < 8 {
            warn!(applied, "payoff override supplied fewer than 8 valid rows, keeping defaults for the rest");
        }
        table
    }

    /// Load an override file. An unreadable file is a recoverable
    /// condition: the full default table is returned and a warning logged.
    pub fn from_file(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(source) => Self::from_source(&source),
            Err(err) => {
                warn!(path = %path.display(), %err, "failed to read payoff override, using defaults");
                PayoffTable::default()
            }
        }
    }
}

/// Parse one override row into its move triple and score triple.
///
/// Returns `None` for blank, comment-only, or malformed lines.
pub(crate) fn parse_line(line: &str) -> Option<([Move; 3], [i64; 3])> {
    let line = line.split('#').next().unwrap_or("").trim();
    if line.is_empty() {
        return None;
    }

    let mut parts = line.split_whitespace();
    let key = parts.next()?;
    let mut chars = key.chars();
    let moves = [
        Move::from_char(chars.next()?)?,
        Move::from_char(chars.next()?)?,
        Move::from_char(chars.next()?)?,
    ];
    if chars.next().is_some() {
        return None;
    }

    let mut scores = [0_i64; 3];
    for slot in scores.iter_mut() {
        *slot = parts.next()?.parse().ok()?;
    }
    if parts.next().is_some() {
        return None;
    }
    Some((moves, scores))
}
