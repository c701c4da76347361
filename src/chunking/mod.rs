pub mod chunker;

pub use chunker::{ChunkOptions, Chunker};

use crate::error::{PrompterError, Result};
use std::ops::Range;

/// Extension of the chunk files written by [`Chunker`] and read by the merger.
pub const CHUNK_EXTENSION: &str = "csv";

/// `chunk_<index>.csv`, with `index` starting at 1.
pub fn chunk_file_name(index: usize) -> String {
    format!("chunk_{}.{}", index, CHUNK_EXTENSION)
}

/// Row ranges for splitting `total_rows` rows into at most `n_chunks` chunks
/// of `ceil(total_rows / n_chunks)` rows each. Stops early once the rows are
/// exhausted, so the result may hold fewer than `n_chunks` ranges.
pub fn plan(total_rows: usize, n_chunks: usize) -> Result<Vec<Range<usize>>> {
    if n_chunks == 0 {
        return Err(PrompterError::invalid("n_chunks must be a positive integer"));
    }

    let chunk_size = total_rows.div_ceil(n_chunks);
    let mut ranges = Vec::new();

    for i in 0..n_chunks {
        let start = i * chunk_size;
        if start >= total_rows {
            break;
        }
        let end = ((i + 1) * chunk_size).min(total_rows);
        ranges.push(start..end);
    }

    Ok(ranges)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn five_rows_two_chunks() {
        assert_eq!(plan(5, 2).unwrap(), vec![0..3, 3..5]);
    }

    #[test]
    fn zero_chunks_is_invalid() {
        let err = plan(10, 0).unwrap_err();
        assert!(matches!(err, PrompterError::InvalidArgument(_)));
    }

    #[test]
    fn empty_table_yields_no_ranges() {
        assert!(plan(0, 3).unwrap().is_empty());
    }

    #[test]
    fn more_chunks_than_rows_gives_single_row_chunks() {
        let ranges = plan(3, 10).unwrap();
        assert_eq!(ranges, vec![0..1, 1..2, 2..3]);
    }

    #[test]
    fn early_stop_can_produce_fewer_chunks() {
        // ceil(10 / 4) = 3 -> 3 + 3 + 3 + 1
        assert_eq!(plan(10, 4).unwrap(), vec![0..3, 3..6, 6..9, 9..10]);
        // ceil(6 / 4) = 2 -> only three chunks are needed
        assert_eq!(plan(6, 4).unwrap(), vec![0..2, 2..4, 4..6]);
    }

    #[test]
    fn ranges_cover_every_row_once() {
        for total in 0..40usize {
            for n in 1..12usize {
                let ranges = plan(total, n).unwrap();
                let size = if total == 0 { 0 } else { total.div_ceil(n) };
                let expected = if total == 0 { 0 } else { n.min(total.div_ceil(size)) };
                assert_eq!(ranges.len(), expected, "total={} n={}", total, n);

                let mut next = 0;
                for (i, r) in ranges.iter().enumerate() {
                    assert_eq!(r.start, next);
                    if i + 1 < ranges.len() {
                        assert_eq!(r.len(), size);
                    } else {
                        assert!(r.len() >= 1);
                    }
                    next = r.end;
                }
                assert_eq!(next, total);
            }
        }
    }

    #[test]
    fn chunk_names_are_one_based() {
        assert_eq!(chunk_file_name(1), "chunk_1.csv");
        assert_eq!(chunk_file_name(12), "chunk_12.csv");
    }
}
