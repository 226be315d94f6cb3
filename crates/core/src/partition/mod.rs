#![forbid(unsafe_code)]

//! Slices a ranked roster into contiguous groups of three or four.
//!
//! Input is expected in descending score order with ties broken by roll
//! number; the engine never reorders it. The first group therefore holds the
//! strongest students and the last group the weakest.

use crate::ids::RollNo;

pub const MIN_PARTICIPANTS: usize = 3;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RankedStudent {
    pub roll_no: RollNo,
    pub sgpa: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FormedGroup {
    pub members: Vec<RollNo>,
    pub avg_sgpa: f64,
}

impl FormedGroup {
    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PartitionError {
    NotEnoughParticipants { found: usize },
}

impl PartitionError {
    pub fn message(&self) -> &'static str {
        match self {
            Self::NotEnoughParticipants { .. } => "Not enough students.",
        }
    }
}

/// Group sizes for a roster of `total` students, in slicing order.
///
/// Remainders 1 and 2 share a rule: one group of four is traded for two
/// groups of three. For remainder 1 that allocates one seat more than
/// `total`, which [`form_groups`] absorbs by shortening the final slice.
pub fn size_pattern(total: usize) -> Vec<usize> {
    let fours = total / 4;
    let mut pattern = match total % 4 {
        0 => vec![4; fours],
        1 | 2 => vec![4; fours.saturating_sub(1)],
        _ => vec![4; fours],
    };
    match total % 4 {
        1 | 2 => pattern.extend([3, 3]),
        3 => pattern.push(3),
        _ => {}
    }
    pattern
}

/// Seats allocated by the pattern beyond the roster size (zero when exact).
pub fn pattern_overrun(total: usize) -> usize {
    size_pattern(total).iter().sum::<usize>().saturating_sub(total)
}

pub fn form_groups(ranked: &[RankedStudent]) -> Result<Vec<FormedGroup>, PartitionError> {
    let total = ranked.len();
    if total < MIN_PARTICIPANTS {
        return Err(PartitionError::NotEnoughParticipants { found: total });
    }

    let mut groups = Vec::new();
    let mut index = 0usize;
    for size in size_pattern(total) {
        if index >= total {
            break;
        }
        let end = (index + size).min(total);
        let slice = &ranked[index..end];
        index = end;

        let sum: f64 = slice.iter().map(|student| student.sgpa).sum();
        groups.push(FormedGroup {
            members: slice.iter().map(|student| student.roll_no).collect(),
            avg_sgpa: sum / slice.len() as f64,
        });
    }

    Ok(groups)
}
