//! Brute-force search for common nets of several boxes.
//!
//! Orchestration around the core: candidate polyominoes are synthesized from
//! row-offset sequences (a column of fixed-width strip rows, each shifted
//! relative to the previous one, with a single cap cell above and below),
//! then validated with [`check_net`] against every target box. Workers share
//! the target face arrays read-only; `check_net` clones them internally, so
//! no face state crosses threads.
//!
//! A candidate matching every target ends the search; candidates matching
//! only some targets are still reported, since a net shared by two of three
//! boxes is worth logging.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use itertools::Itertools;
use parking_lot::Mutex;
use rayon::iter::{ParallelBridge, ParallelIterator};

use crate::box_net_error::BoxNetError;
use crate::net::bitmap::Net;
use crate::net::validator::check_net;
use crate::topology::box_builder::{BoxDims, BoxGraph};
use crate::topology::face::Face;

/// Shape of the synthesized candidates.
#[derive(Debug, Clone, Copy)]
pub struct OffsetSearchConfig {
    /// Cells per full strip row. 4 is the girth of a 1x1xN box.
    pub strip_width: usize,
    /// Row offsets are drawn from `[-offset_range, offset_range]`.
    pub offset_range: i32,
}

impl Default for OffsetSearchConfig {
    fn default() -> Self {
        Self {
            strip_width: 4,
            offset_range: 3,
        }
    }
}

impl OffsetSearchConfig {
    /// Synthesize the candidate for one offset sequence: one strip row per
    /// offset, each shifted by its offset relative to the previous row, a
    /// cap cell above the first row and below the last. Trimmed.
    pub fn strip_net(&self, offsets: &[i32]) -> Net {
        let mut cursor: i64 = 0;
        let mut spans: Vec<(i64, i64)> = Vec::with_capacity(offsets.len() + 2);

        // Top cap sits one cell in from the first strip's left edge.
        spans.push((1, 2));
        for &offset in offsets {
            cursor += i64::from(offset);
            spans.push((cursor, cursor + self.strip_width as i64));
        }
        // Bottom cap under the last strip's left edge.
        spans.push((cursor, cursor + 1));

        let min_col = spans.iter().map(|&(a, _)| a).min().unwrap_or(0);
        let width = spans
            .iter()
            .map(|&(_, b)| (b - min_col) as usize)
            .max()
            .unwrap_or(0);

        let rows = spans
            .iter()
            .map(|&(a, b)| {
                let mut row = vec![0u8; width];
                for col in a..b {
                    row[(col - min_col) as usize] = 1;
                }
                row
            })
            .collect();
        // Spans are built non-ragged by construction.
        Net::from_rows(rows).unwrap_or_else(|_| Net::empty()).trimmed()
    }
}

struct Target {
    dims: BoxDims,
    faces: Vec<Face>,
}

/// A configured search for a net common to every target box.
pub struct CommonNetSearch {
    targets: Vec<Target>,
    config: OffsetSearchConfig,
    /// Strip rows per candidate, fixed by the shared face count.
    offset_rows: usize,
}

impl CommonNetSearch {
    /// Build the target face graphs and derive the candidate shape.
    ///
    /// All targets must share one surface area, and that area minus the two
    /// cap cells must split evenly into strip rows.
    pub fn new(targets: &[BoxDims], config: OffsetSearchConfig) -> Result<Self, BoxNetError> {
        let Some(&first) = targets.first() else {
            return Err(BoxNetError::NoTargets);
        };
        let faces = first.total_faces();
        for &dims in &targets[1..] {
            if dims.total_faces() != faces {
                return Err(BoxNetError::MismatchedTargetAreas {
                    first: faces,
                    other: dims.total_faces(),
                });
            }
        }
        if config.strip_width == 0 || faces < 2 + config.strip_width
            || (faces - 2) % config.strip_width != 0
        {
            return Err(BoxNetError::UnevenStripPartition {
                faces,
                strip_width: config.strip_width,
            });
        }

        let targets = targets
            .iter()
            .map(|&dims| {
                BoxGraph::build(dims).map(|graph| Target {
                    dims,
                    faces: graph.faces().to_vec(),
                })
            })
            .collect::<Result<_, _>>()?;

        Ok(Self {
            targets,
            config,
            offset_rows: (faces - 2) / config.strip_width,
        })
    }

    /// Strip rows in every candidate.
    pub fn offset_rows(&self) -> usize {
        self.offset_rows
    }

    /// Offset sequences the search will try.
    pub fn candidate_count(&self) -> u64 {
        let choices = 2 * self.config.offset_range as u64 + 1;
        choices.pow(self.offset_rows.saturating_sub(1) as u32)
    }

    /// Run the search over all offset sequences, in parallel.
    ///
    /// `on_match` fires for every candidate matching at least one target,
    /// with the boxes it matched. The first candidate matching *all* targets
    /// stops the search and is returned. The first row's offset is pinned to
    /// zero; varying it would only translate the candidate.
    pub fn run<F>(&self, on_match: F) -> Option<Net>
    where
        F: Fn(&Net, &[BoxDims]) + Sync,
    {
        log::info!(
            "searching {} candidates of {} strip rows against {} boxes",
            self.candidate_count(),
            self.offset_rows,
            self.targets.len(),
        );

        let found: Mutex<Option<Net>> = Mutex::new(None);
        let done = AtomicBool::new(false);
        let checked = AtomicU64::new(0);

        let free_rows = self.offset_rows - 1;
        let range = -self.config.offset_range..=self.config.offset_range;
        let try_offsets = |tail: Vec<i32>| {
            if done.load(Ordering::Relaxed) {
                return;
            }
            let mut offsets = Vec::with_capacity(self.offset_rows);
            offsets.push(0);
            offsets.extend(tail);
            let candidate = self.config.strip_net(&offsets);

            let matches: Vec<BoxDims> = self
                .targets
                .iter()
                .filter(|target| check_net(&candidate, &target.faces))
                .map(|target| target.dims)
                .collect();
            if !matches.is_empty() {
                on_match(&candidate, &matches);
                if matches.len() == self.targets.len() {
                    *found.lock() = Some(candidate);
                    done.store(true, Ordering::Relaxed);
                }
            }

            let n = checked.fetch_add(1, Ordering::Relaxed) + 1;
            if n % 1_000_000 == 0 {
                log::debug!("checked {n} candidates");
            }
        };

        if free_rows == 0 {
            try_offsets(Vec::new());
        } else {
            itertools::repeat_n(range, free_rows)
                .multi_cartesian_product()
                .par_bridge()
                .for_each(try_offsets);
        }

        found.into_inner()
    }
}

/// Appends matching nets to a results log, original driver format.
pub struct Reporter {
    out: Mutex<File>,
}

impl Reporter {
    /// Open `path` for appending, creating it if needed.
    pub fn append_to<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            out: Mutex::new(file),
        })
    }

    /// Record one matching net and the boxes it folds into.
    pub fn record(&self, net: &Net, matches: &[BoxDims]) -> io::Result<()> {
        let mut out = self.out.lock();
        writeln!(out, "\n--------------------")?;
        write!(out, "{}", net.render())?;
        for dims in matches {
            writeln!(out, "\nCommon development with {dims}")?;
        }
        out.flush()
    }
}
