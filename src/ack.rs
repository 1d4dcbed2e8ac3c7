use std::collections::HashMap;
use std::ops::Range;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use log::{debug, trace};
use rayon::prelude::*;

use crate::error::{PuzzleError, Result};
use crate::mod_arith::{mod_dec, mod_inc, MODULUS};

/// Deepest nesting `pure_ack` will attempt before giving up.
pub const PURE_DEPTH_LIMIT: usize = 2_000;

/// How the teleporter function steps its arguments.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Variant {
    /// Every increment and decrement is taken mod 32768, as the VM computes it.
    Wrapping,
    /// Plain `+ 1` / `- 1`. Agrees with `Wrapping` only while every intermediate
    /// value stays below 32768: `(4, 1)` with `r7 = 1` gives 65533 here but
    /// 32765 wrapped.
    Minus,
}

impl Variant {
    fn succ(self, b: u32) -> Result<u32> {
        let next = match self {
            Variant::Wrapping => mod_inc(b, MODULUS),
            Variant::Minus => b.checked_add(1),
        };
        next.ok_or(PuzzleError::Overflow("successor"))
    }

    // only reached with x > 0, so Minus never underflows in practice
    fn pred(self, x: u32) -> Result<u32> {
        let prev = match self {
            Variant::Wrapping => mod_dec(x, MODULUS),
            Variant::Minus => x.checked_sub(1),
        };
        prev.ok_or(PuzzleError::Overflow("predecessor"))
    }
}

fn in_range(name: &'static str, value: u16) -> Result<u32> {
    let value = u32::from(value);
    if value < MODULUS {
        Ok(value)
    } else {
        Err(PuzzleError::OutOfRange { name, value })
    }
}

/// Straight recursion with no cache. Exponential in `a` and `b`, and refuses
/// to nest deeper than [`PURE_DEPTH_LIMIT`].
pub fn pure_ack(variant: Variant, a: u16, b: u16, r7: u16) -> Result<u32> {
    let (a, b, r7) = (in_range("a", a)?, in_range("b", b)?, in_range("r7", r7)?);
    pure_step(variant, a, b, r7, 0)
}

fn pure_step(variant: Variant, a: u32, b: u32, r7: u32, depth: usize) -> Result<u32> {
    if depth >= PURE_DEPTH_LIMIT {
        return Err(PuzzleError::DepthExceeded(PURE_DEPTH_LIMIT));
    }
    if a == 0 {
        return variant.succ(b);
    }
    if b == 0 {
        return pure_step(variant, variant.pred(a)?, r7, r7, depth + 1);
    }
    let intermediate = pure_step(variant, a, variant.pred(b)?, r7, depth + 1)?;
    pure_step(variant, variant.pred(a)?, intermediate, r7, depth + 1)
}

enum Task {
    Call(u32, u32),
    /// The inner call `f(a, b - 1)` has finished; feed its result to `f(a - 1, _)`.
    Outer(u32),
    Store(u32, u32),
}

/// Memoizing evaluator for one `(variant, r7)` pair.
///
/// Nested calls are kept on a heap-allocated work list rather than the native
/// stack, so `(4, 1)` evaluates even though its call chain is tens of
/// thousands of frames deep. The cache is keyed on `(a, b)` and lives as long
/// as the evaluator.
#[derive(Debug)]
pub struct Ackermann {
    variant: Variant,
    r7: u32,
    memo: HashMap<(u32, u32), u32>,
}

impl Ackermann {
    pub fn new(variant: Variant, r7: u16) -> Result<Self> {
        Ok(Ackermann {
            variant,
            r7: in_range("r7", r7)?,
            memo: HashMap::new(),
        })
    }

    pub fn cache_len(&self) -> usize {
        self.memo.len()
    }

    pub fn eval(&mut self, a: u16, b: u16) -> Result<u32> {
        let (a, b) = (in_range("a", a)?, in_range("b", b)?);
        let variant = self.variant;
        let mut tasks = vec![Task::Call(a, b)];
        let mut ret = 0;
        let mut peak = 0;
        while let Some(task) = tasks.pop() {
            match task {
                Task::Call(a, b) => {
                    if let Some(&v) = self.memo.get(&(a, b)) {
                        ret = v;
                    } else if a == 0 {
                        ret = variant.succ(b)?;
                    } else if b == 0 {
                        tasks.push(Task::Store(a, b));
                        tasks.push(Task::Call(variant.pred(a)?, self.r7));
                    } else {
                        tasks.push(Task::Store(a, b));
                        tasks.push(Task::Outer(a));
                        tasks.push(Task::Call(a, variant.pred(b)?));
                    }
                }
                Task::Outer(a) => tasks.push(Task::Call(variant.pred(a)?, ret)),
                Task::Store(a, b) => {
                    self.memo.insert((a, b), ret);
                }
            }
            peak = peak.max(tasks.len());
        }
        trace!("{:?} r7={} ({}, {}) = {}; {} cached, peak work list {}",
               variant, self.r7, a, b, ret, self.memo.len(), peak);
        Ok(ret)
    }
}

/// The function exactly as the VM computes it.
pub fn f_orig(a: u16, b: u16, r7: u16) -> Result<u32> {
    Ackermann::new(Variant::Wrapping, r7)?.eval(a, b)
}

/// The hand-simplified function without wraparound.
pub fn f_minus(a: u16, b: u16, r7: u16) -> Result<u32> {
    Ackermann::new(Variant::Minus, r7)?.eval(a, b)
}

/// Finds the lowest `r7` in `candidates` for which the wrapping function
/// returns `target` at `(a, b)`. Candidates are tried in parallel, each with
/// its own cache. Raising `cancel` aborts with [`PuzzleError::Cancelled`].
pub fn search(a: u16, b: u16, target: u32, candidates: Range<u16>, cancel: &AtomicBool) -> Result<Option<u16>> {
    in_range("a", a)?;
    in_range("b", b)?;
    if candidates.is_empty() {
        return Ok(None);
    }
    in_range("r7", candidates.end - 1)?;
    let total = candidates.len();
    let checked = AtomicUsize::new(0);
    let found = candidates.into_par_iter()
        .find_map_first(|r7| {
            if cancel.load(Ordering::Relaxed) {
                return None;
            }
            let n = checked.fetch_add(1, Ordering::Relaxed) + 1;
            if n % 1024 == 0 {
                debug!("checked {}/{} candidates", n, total);
            }
            match Ackermann::new(Variant::Wrapping, r7).and_then(|mut ack| ack.eval(a, b)) {
                Ok(v) if v == target => Some(Ok(r7)),
                Ok(_) => None,
                Err(e) => Some(Err(e)),
            }
        })
        .transpose()?;
    settle(found, cancel.load(Ordering::Relaxed))
}

// A match found before the flag went up still counts.
fn settle(found: Option<u16>, cancelled: bool) -> Result<Option<u16>> {
    match found {
        None if cancelled => Err(PuzzleError::Cancelled),
        found => Ok(found),
    }
}
