//! Basic strategy charts.
//!
//! Columns are dealer up cards 2 through 9, ten and ace.

use super::Action;
use super::Action::{DoubleOrHit as D, DoubleOrStand as Ds, Hit as H, NoSplit as N};
use super::Action::{Split as Y, SplitIfDas as YN, Stand as S};

pub(super) const HARD_MIN: u8 = 8;
pub(super) const HARD_MAX: u8 = 17;

/// Hard totals 8 through 17.
pub(super) const HARD: [[Action; 10]; 10] = [
    [H, H, H, H, H, H, H, H, H, H],      // 8
    [H, D, D, D, D, H, H, H, H, H],      // 9
    [D, D, D, D, D, D, D, D, H, H],      // 10
    [D, D, D, D, D, D, D, D, D, D],      // 11
    [H, H, S, S, S, H, H, H, H, H],      // 12
    [S, S, S, S, S, H, H, H, H, H],      // 13
    [S, S, S, S, S, H, H, H, H, H],      // 14
    [S, S, S, S, S, H, H, H, H, H],      // 15
    [S, S, S, S, S, H, H, H, H, H],      // 16
    [S, S, S, S, S, S, S, S, S, S],      // 17
];

/// Soft hands A,2 through A,9.
pub(super) const SOFT: [[Action; 10]; 8] = [
    [H, H, H, D, D, H, H, H, H, H],      // A,2
    [H, H, H, D, D, H, H, H, H, H],      // A,3
    [H, H, D, D, D, H, H, H, H, H],      // A,4
    [H, H, D, D, D, H, H, H, H, H],      // A,5
    [H, D, D, D, D, H, H, H, H, H],      // A,6
    [Ds, Ds, Ds, Ds, Ds, S, S, H, H, H], // A,7
    [S, S, S, S, S, S, S, S, S, S],      // A,8
    [S, S, S, S, S, S, S, S, S, S],      // A,9
];

/// Pairs 2,2 through 10,10 then A,A.
pub(super) const PAIRS: [[Action; 10]; 10] = [
    [YN, YN, Y, Y, Y, Y, N, N, N, N],    // 2,2
    [YN, YN, Y, Y, Y, Y, N, N, N, N],    // 3,3
    [N, N, N, YN, YN, N, N, N, N, N],    // 4,4
    [N, N, N, N, N, N, N, N, N, N],      // 5,5
    [YN, Y, Y, Y, Y, N, N, N, N, N],     // 6,6
    [Y, Y, Y, Y, Y, Y, N, N, N, N],      // 7,7
    [Y, Y, Y, Y, Y, Y, Y, Y, Y, Y],      // 8,8
    [Y, Y, Y, Y, Y, N, Y, Y, N, N],      // 9,9
    [N, N, N, N, N, N, N, N, N, N],      // 10,10
    [Y, Y, Y, Y, Y, Y, Y, Y, Y, Y],      // A,A
];
