use std::convert::Infallible;
use std::fmt;

/// A single move of the Towers of Hanoi puzzle: `disk` travels from peg `from` to peg `to`.
/// Disks are numbered from 1 (the smallest).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub disk: u32,
    pub from: char,
    pub to: char,
}

impl Move {
    pub fn new(disk: u32, from: char, to: char) -> Self {
        Move { disk, from, to }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move disk {} from peg {} to peg {}", self.disk, self.from, self.to)
    }
}

/// Solves the Towers of Hanoi for `disks` disks stacked on peg `from`, moving them to peg `to`
/// with the help of peg `via`. `report` is invoked once per move, in the order the moves have to
/// be played: first the `disks - 1` smaller disks go from `from` to `via`, then the largest disk
/// goes to `to`, then the smaller disks follow from `via` to `to`.
///
/// This produces the minimal solution of `2^disks - 1` moves. Zero disks produce no moves.
/// Recursion depth is `disks`.
///
/// # Parameters
/// - `disks` number of disks
/// - `from` label of the source peg
/// - `to` label of the destination peg
/// - `via` label of the auxiliary peg
/// - `report` receives every move
pub fn solve<F>(disks: u32, from: char, to: char, via: char, mut report: F)
where
    F: FnMut(Move),
{
    let result = try_solve(disks, from, to, via, |m| {
        report(m);
        Ok::<(), Infallible>(())
    });
    match result {
        Ok(()) => {}
        Err(never) => match never {},
    }
}

/// Like [`solve`], but `report` may fail. The first error stops the solver and is returned, no
/// further moves are generated.
pub fn try_solve<F, E>(
    disks: u32,
    from: char,
    to: char,
    via: char,
    mut report: F,
) -> Result<(), E>
where
    F: FnMut(Move) -> Result<(), E>,
{
    try_solve_into(disks, from, to, via, &mut report)
}

fn try_solve_into<F, E>(
    disks: u32,
    from: char,
    to: char,
    via: char,
    report: &mut F,
) -> Result<(), E>
where
    F: FnMut(Move) -> Result<(), E>,
{
    match disks {
        0 => Ok(()),
        1 => report(Move::new(1, from, to)),
        n => {
            try_solve_into(n - 1, from, via, to, report)?;
            report(Move::new(n, from, to))?;
            try_solve_into(n - 1, via, to, from, report)
        }
    }
}

/// Collects the moves of [`solve`] into a vector.
pub fn moves(disks: u32, from: char, to: char, via: char) -> Vec<Move> {
    let capacity = move_count(disks).unwrap_or(u128::MAX).min(1 << 16);
    let mut result = Vec::with_capacity(capacity as usize);
    solve(disks, from, to, via, |m| result.push(m));
    result
}

/// Number of moves in the minimal solution, `2^disks - 1`. `None` if it does not fit into a
/// `u128`, that is for 128 disks or more.
pub fn move_count(disks: u32) -> Option<u128> {
    1u128.checked_shl(disks).map(|power| power - 1)
}
