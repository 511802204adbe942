//! Sample I/O-bound and CPU-bound workers.
//!
//! These exist to exercise [`ParallelWorkProcessor`](super::ParallelWorkProcessor)
//! and to compare it against serial execution.

use std::fs::{self, File, OpenOptions};
use std::hint::black_box;
use std::io::{self, Write};
use std::ops::Range;
use std::path::{Path, PathBuf};

/// Every printable ASCII character, in the order digits, letters,
/// punctuation, whitespace.
pub const PRINTABLE: &str = concat!(
    "0123456789",
    "abcdefghijklmnopqrstuvwxyz",
    "ABCDEFGHIJKLMNOPQRSTUVWXYZ",
    "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~",
    " \t\n\r\x0b\x0c",
);

/// Default number of times [`PRINTABLE`] is written to each file.
pub const DEFAULT_PAYLOAD_REPEAT: usize = 100_000;

/// File name prefix for files created by [`FileWorkload`].
pub const FILE_PREFIX: &str = "utilkit_workload_file";

/// An I/O-bound worker: creates files, writes to them, deletes them.
///
/// # Examples
///
/// ```rust
/// use utilkit::parallel::FileWorkload;
///
/// let workload = FileWorkload::new(std::env::temp_dir()).with_payload_repeat(1);
/// let files = workload.write_and_delete(0..3).unwrap();
/// assert_eq!(files, 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileWorkload {
    directory: PathBuf,
    payload: String,
}

impl FileWorkload {
    /// A workload writing [`DEFAULT_PAYLOAD_REPEAT`] copies of [`PRINTABLE`]
    /// per file inside `directory`.
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            payload: PRINTABLE.repeat(DEFAULT_PAYLOAD_REPEAT),
        }
    }

    /// Returns a copy writing `repeat` copies of [`PRINTABLE`] per file.
    #[must_use]
    pub fn with_payload_repeat(mut self, repeat: usize) -> Self {
        self.payload = PRINTABLE.repeat(repeat);
        self
    }

    /// Directory the files are created in.
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Bytes written to each file.
    pub fn payload_len(&self) -> usize {
        self.payload.len()
    }

    /// Path of the file for `suffix`.
    pub fn file_path(&self, suffix: usize) -> PathBuf {
        self.directory.join(format!("{FILE_PREFIX}{suffix}"))
    }

    /// For every suffix: opens `{FILE_PREFIX}{suffix}` for appending, writes
    /// the payload, closes it and removes it. Returns the number of files
    /// processed.
    ///
    /// # Errors
    ///
    /// The first I/O error encountered. A file that was created is removed
    /// even when writing to it failed, and files already processed stay
    /// deleted.
    pub fn write_and_delete<I>(&self, suffixes: I) -> io::Result<usize>
    where
        I: IntoIterator<Item = usize>,
    {
        let mut count = 0;
        for suffix in suffixes {
            write_then_remove(&self.file_path(suffix), |file| {
                file.write_all(self.payload.as_bytes())
            })?;
            count += 1;
        }
        tracing::info!(files = count, "created, wrote, and deleted files");
        Ok(count)
    }
}

/// Creates `path`, hands it to `write`, closes it and removes it.
///
/// The file is removed whether or not `write` succeeded. A write error is
/// returned ahead of a remove error.
fn write_then_remove<W>(path: &Path, write: W) -> io::Result<()>
where
    W: FnOnce(&mut File) -> io::Result<()>,
{
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    let written = write(&mut file);
    drop(file);
    let removed = fs::remove_file(path);
    written.and(removed)
}

/// Splits `workers * files_per_worker` suffixes into one contiguous range per
/// worker, or `None` if the last suffix does not fit in a `usize`.
///
/// # Examples
///
/// ```rust
/// use utilkit::parallel::suffix_ranges;
///
/// assert_eq!(suffix_ranges(3, 2), Some(vec![0..2, 2..4, 4..6]));
/// assert_eq!(suffix_ranges(usize::MAX, 2), None);
/// ```
pub fn suffix_ranges(workers: usize, files_per_worker: usize) -> Option<Vec<Range<usize>>> {
    (0..workers)
        .map(|worker| {
            let start = worker.checked_mul(files_per_worker)?;
            let end = start.checked_add(files_per_worker)?;
            Some(start..end)
        })
        .collect()
}

/// A CPU-bound worker: builds two lists of `size` elements and walks every
/// pair, O(N²). Returns the number of inner iterations.
///
/// # Examples
///
/// ```rust
/// use utilkit::parallel::generate_and_iterate;
///
/// assert_eq!(generate_and_iterate(100), 10_000);
/// ```
pub fn generate_and_iterate(size: usize) -> u64 {
    let outer: Vec<usize> = (0..size).collect();
    let inner: Vec<usize> = (0..size).collect();

    let mut iterations = 0_u64;
    for left in &outer {
        for right in &inner {
            black_box((left, right));
            iterations += 1;
        }
    }

    tracing::info!(size, "generated list of size");
    iterations
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn printable_has_one_hundred_characters() {
        assert_eq!(PRINTABLE.len(), 100);
        assert!(PRINTABLE.is_ascii());
    }

    #[rstest]
    fn payload_repeat_controls_size() {
        let workload = FileWorkload::new(".").with_payload_repeat(3);
        assert_eq!(workload.payload_len(), 300);
    }

    #[rstest]
    fn file_path_appends_suffix() {
        let workload = FileWorkload::new("/tmp/somewhere");
        assert_eq!(
            workload.file_path(42),
            Path::new("/tmp/somewhere").join("utilkit_workload_file42")
        );
    }

    #[rstest]
    fn write_and_delete_leaves_nothing_behind() {
        let directory = std::env::temp_dir().join(format!(
            "utilkit-workload-test-{}",
            std::process::id()
        ));
        fs::create_dir_all(&directory).unwrap();

        let workload = FileWorkload::new(&directory).with_payload_repeat(2);
        assert_eq!(workload.write_and_delete(10..15).unwrap(), 5);
        assert_eq!(fs::read_dir(&directory).unwrap().count(), 0);

        fs::remove_dir(&directory).unwrap();
    }

    #[rstest]
    fn failed_write_still_removes_file() {
        let directory = std::env::temp_dir().join(format!(
            "utilkit-workload-failed-write-{}",
            std::process::id()
        ));
        fs::create_dir_all(&directory).unwrap();
        let path = directory.join(format!("{FILE_PREFIX}0"));

        let result = write_then_remove(&path, |file| {
            file.write_all(b"partial")?;
            Err(io::Error::other("disk full"))
        });

        assert_eq!(result.unwrap_err().to_string(), "disk full");
        assert!(!path.exists());
        assert_eq!(fs::read_dir(&directory).unwrap().count(), 0);

        fs::remove_dir(&directory).unwrap();
    }

    #[rstest]
    fn write_and_delete_fails_for_missing_directory() {
        let workload = FileWorkload::new("/nonexistent/utilkit/directory").with_payload_repeat(1);
        assert!(workload.write_and_delete(0..1).is_err());
    }

    #[rstest]
    #[case(0, 5, vec![])]
    #[case(2, 0, vec![0..0, 0..0])]
    #[case(3, 4, vec![0..4, 4..8, 8..12])]
    fn suffix_ranges_are_contiguous(
        #[case] workers: usize,
        #[case] files_per_worker: usize,
        #[case] expected: Vec<Range<usize>>,
    ) {
        assert_eq!(suffix_ranges(workers, files_per_worker), Some(expected));
    }

    #[rstest]
    #[case(usize::MAX, 2)]
    #[case(2, usize::MAX)]
    #[case(usize::MAX / 2 + 1, 2)]
    fn suffix_ranges_reject_overflow(#[case] workers: usize, #[case] files_per_worker: usize) {
        assert_eq!(suffix_ranges(workers, files_per_worker), None);
    }

    #[rstest]
    #[case(0, 0)]
    #[case(1, 1)]
    #[case(30, 900)]
    fn generate_and_iterate_is_quadratic(#[case] size: usize, #[case] expected: u64) {
        assert_eq!(generate_and_iterate(size), expected);
    }
}
