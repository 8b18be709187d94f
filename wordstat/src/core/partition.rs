// src/core/partition.rs
use std::io;

use crate::models::BatchInfo;

/// Splits `items` into consecutive batches of at most `batch_size`,
/// preserving order. A `batch_size` of zero is treated as one.
#[inline]
pub fn batches<T>(items: &[T], batch_size: usize) -> impl Iterator<Item = (BatchInfo, &[T])> {
    let total_files = items.len();
    items
        .chunks(batch_size.max(1))
        .enumerate()
        .scan(0_usize, move |offset, (index, batch)| {
            let first = offset.saturating_add(1);
            *offset = offset.saturating_add(batch.len());
            let info = BatchInfo {
                index: index.saturating_add(1),
                first,
                last: *offset,
                total_files,
            };
            Some((info, batch))
        })
}

/// Number of batches needed for `total` items.
#[inline]
#[must_use]
pub const fn batch_count(total: usize, batch_size: usize) -> usize {
    let size = if batch_size == 0 { 1 } else { batch_size };
    total.div_ceil(size)
}

/// Groups a stream of lines into chunks of `chunk_size` lines.
///
/// The final chunk may be shorter; an empty stream yields no chunks. The
/// first read error is yielded in place of a chunk and ends the stream.
#[derive(Debug)]
pub struct Chunks<I> {
    lines: I,
    chunk_size: usize,
    done: bool,
}

impl<I> Chunks<I>
where
    I: Iterator<Item = io::Result<String>>,
{
    #[inline]
    pub fn new(lines: I, chunk_size: usize) -> Self {
        Self {
            lines,
            chunk_size: chunk_size.max(1),
            done: false,
        }
    }
}

impl<I> Iterator for Chunks<I>
where
    I: Iterator<Item = io::Result<String>>,
{
    type Item = io::Result<Vec<String>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let mut chunk = Vec::with_capacity(self.chunk_size);
        while chunk.len() < self.chunk_size {
            match self.lines.next() {
                Some(Ok(line)) => chunk.push(line),
                Some(Err(err)) => {
                    self.done = true;
                    return Some(Err(err));
                }
                None => {
                    self.done = true;
                    break;
                }
            }
        }

        if chunk.is_empty() {
            None
        } else {
            Some(Ok(chunk))
        }
    }
}
