//! Cooldown-constrained task scheduling.
//!
//! Computes the minimum number of time slots needed to execute a multiset of
//! task types when identical types must be separated by at least `cooldown`
//! slots. Two forms are provided: a heap-driven simulation ([`schedule`])
//! that also reports busy/idle breakdowns, and a closed-form computation
//! ([`min_slots`]) that returns the same total without simulating.

use std::cmp::Ordering;

use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::config::ScheduleConfig;
use crate::heap::{BinaryHeap, HeapError};
use crate::interner::{TaskIdInt, TaskInterner};
use crate::models::ScheduleReport;
use crate::{log_changes, log_checks};

/// Errors that can occur during scheduling. The argument errors are caller
/// errors and are rejected before any heap work begins; no partial schedule
/// is computed. `SlotOverflow` is reported when the answer itself does not
/// fit in a `u64`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("cooldown must be non-negative, got {0}")]
    NegativeCooldown(i64),
    #[error("task {0:?} has negative count {1}")]
    NegativeCount(String, i64),
    #[error("total slot count overflows u64")]
    SlotOverflow,
}

/// One task type's remaining execution count. Kept `Copy` by holding an
/// interned id rather than the task-id string.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct TaskBucket {
    task: TaskIdInt,
    remaining: u64,
}

/// Max-heap order for buckets: the largest remaining count sits at the root.
/// Ties between equal counts are left to the heap (no guarantee).
fn bucket_priority(a: &TaskBucket, b: &TaskBucket) -> Ordering {
    a.remaining.cmp(&b.remaining)
}

/// Count task-type frequencies from a stream of task ids.
pub fn count_tasks<'a, I>(tasks: I) -> FxHashMap<String, i64>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut counts: FxHashMap<String, i64> = FxHashMap::default();
    for id in tasks {
        if let Some(count) = counts.get_mut(id) {
            *count += 1;
        } else {
            counts.insert(id.to_string(), 1);
        }
    }
    counts
}

fn validate_cooldown(cooldown: i64) -> Result<u64, ScheduleError> {
    if cooldown < 0 {
        return Err(ScheduleError::NegativeCooldown(cooldown));
    }
    Ok(cooldown as u64)
}

/// Minimum total slots via simulation.
///
/// Processes tasks in cycles of `cooldown + 1` slots. Within a cycle the
/// bucket with the largest remaining count is executed first; executed
/// buckets are held aside and reinserted at cycle end if still positive.
/// When the heap drains mid-cycle but work remains, the unused slots of the
/// cycle are idle time. Trailing slots after the last task are never
/// counted.
///
/// Zero-count entries are ignored. `cooldown = 0` degenerates to the total
/// task count with no idle time.
pub fn schedule(
    counts: &FxHashMap<String, i64>,
    cooldown: i64,
    config: &ScheduleConfig,
) -> Result<ScheduleReport, ScheduleError> {
    let cooldown = validate_cooldown(cooldown)?;

    let mut interner = TaskInterner::with_capacity(counts.len());
    let mut buckets = Vec::with_capacity(counts.len());
    for (id, &count) in counts {
        if count < 0 {
            return Err(ScheduleError::NegativeCount(id.clone(), count));
        }
        if count == 0 {
            continue;
        }
        buckets.push(TaskBucket {
            task: interner.intern(id),
            remaining: count as u64,
        });
    }

    // Bottom-up heapify: O(n) over the bucket set vs O(n log n) pushes.
    let mut heap = BinaryHeap::from_vec(buckets, bucket_priority);

    let cycle_len = cooldown + 1;
    let mut busy: u64 = 0;
    let mut idle: u64 = 0;
    // At most one bucket per task type can be held aside in a cycle.
    let mut held: Vec<TaskBucket> = Vec::with_capacity(counts.len());

    while !heap.is_empty() {
        held.clear();
        let mut used: u64 = 0;
        while used < cycle_len {
            match heap.pop() {
                Ok(mut bucket) => {
                    bucket.remaining -= 1;
                    busy += 1;
                    used += 1;
                    log_checks!(
                        config.verbosity,
                        "slot {}: run {} ({} remaining)",
                        busy + idle,
                        interner.resolve(bucket.task).unwrap_or("?"),
                        bucket.remaining
                    );
                    if bucket.remaining > 0 {
                        held.push(bucket);
                    }
                }
                Err(HeapError::Empty) => break,
            }
        }

        if held.is_empty() && heap.is_empty() {
            // All tasks finished; the tail of the final cycle is not idle
            // time.
            break;
        }

        if used < cycle_len {
            // Work remains but nothing is runnable: the rest of the cycle
            // waits out the cooldown.
            idle += cycle_len - used;
        }

        for bucket in held.drain(..) {
            heap.push(bucket);
        }
        log_changes!(
            config.verbosity,
            "cycle complete: busy={} idle={} pending={}",
            busy,
            idle,
            heap.len()
        );
    }

    Ok(ScheduleReport {
        total_slots: busy + idle,
        busy_slots: busy,
        idle_slots: idle,
    })
}

/// Minimum total slots via the closed-form formula:
/// `max(total, (max_freq - 1) * (cooldown + 1) + n_max)` where `max_freq` is
/// the highest per-task count and `n_max` the number of tasks tied at it.
///
/// Agrees with [`schedule`] for every valid input. Counts arrive unbounded
/// from the Python boundary, so the arithmetic is checked: an answer that
/// does not fit in a `u64` is `SlotOverflow`, never a wrapped result.
pub fn min_slots(counts: &FxHashMap<String, i64>, cooldown: i64) -> Result<u64, ScheduleError> {
    let cooldown = validate_cooldown(cooldown)?;

    let mut total: u64 = 0;
    let mut max_freq: u64 = 0;
    let mut n_max: u64 = 0;
    for (id, &count) in counts {
        if count < 0 {
            return Err(ScheduleError::NegativeCount(id.clone(), count));
        }
        let count = count as u64;
        if count == 0 {
            continue;
        }
        total = total
            .checked_add(count)
            .ok_or(ScheduleError::SlotOverflow)?;
        match count.cmp(&max_freq) {
            Ordering::Greater => {
                max_freq = count;
                n_max = 1;
            }
            Ordering::Equal => n_max += 1,
            Ordering::Less => {}
        }
    }

    if max_freq == 0 {
        return Ok(0);
    }
    // cooldown came through i64 validation, so cooldown + 1 cannot overflow.
    let spaced = (max_freq - 1)
        .checked_mul(cooldown + 1)
        .and_then(|slots| slots.checked_add(n_max))
        .ok_or(ScheduleError::SlotOverflow)?;
    Ok(total.max(spaced))
}
