/*!
 * Recursive walk that turns a source tree into an ordered list of tracks
 *
 * The walk is strictly sequential. A single [`Counter`] is threaded through
 * the recursion by mutable reference and yields each track's position; the
 * sink is called once per file, in album order, before the walk moves on.
 */

use std::fs;
use std::path::Path;

use crate::ensure;
use crate::error::{PcgError, Result};
use crate::lister::{DirContents, TreeLister};
use crate::naming::{decorate_dir, decorate_file, digit_count};
use crate::types::{Track, TraversalMode};
use crate::utils::base_name;

impl TraversalMode {
    /// Select the traversal policy; a tree destination cannot be reversed
    pub fn from_flags(tree_destination: bool, reverse_order: bool) -> Result<Self> {
        ensure!(
            !(tree_destination && reverse_order),
            Config,
            "a tree destination cannot be copied in reverse order, remove either --tree-dst or --reverse"
        );
        Ok(match (tree_destination, reverse_order) {
            (true, _) => Self::TreeForward,
            (false, true) => Self::FlatReverse,
            (false, false) => Self::FlatForward,
        })
    }
}

/// Running track position shared by the whole walk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Counter {
    next: usize,
}

impl Counter {
    pub fn starting_at(next: usize) -> Self {
        Self { next }
    }

    /// Position for the next emitted track
    pub fn current(&self) -> usize {
        self.next
    }

    pub fn advance(&mut self) {
        self.next += 1;
    }

    pub fn retreat(&mut self) {
        self.next = self.next.saturating_sub(1);
    }
}

/// Walks a source tree and emits one [`Track`] per qualifying file
pub struct Traversal<'a, F> {
    lister: &'a TreeLister<F>,
    mode: TraversalMode,
    total: usize,
    width: usize,
    unified_name: Option<String>,
}

impl<'a, F> Traversal<'a, F>
where
    F: Fn(&Path) -> bool,
{
    /// `total` is the number of qualifying files in the whole source tree
    pub fn new(lister: &'a TreeLister<F>, mode: TraversalMode, total: usize) -> Self {
        Self {
            lister,
            mode,
            total,
            width: digit_count(total),
            unified_name: None,
        }
    }

    /// Replace every destination base name with `name` (extensions are kept)
    pub fn with_unified_name(mut self, name: Option<String>) -> Self {
        self.unified_name = name.filter(|n| !n.is_empty());
        self
    }

    pub fn mode(&self) -> TraversalMode {
        self.mode
    }

    /// Walk `src`, emitting tracks destined for `dst` to `sink` in album order.
    ///
    /// The first error returned by the sink stops the walk.
    pub fn run<S>(&self, src: &Path, dst: &Path, sink: &mut S) -> Result<()>
    where
        S: FnMut(Track) -> Result<()>,
    {
        match self.mode {
            TraversalMode::FlatForward => {
                let mut counter = Counter::starting_at(1);
                self.flat_forward(src, dst, &mut counter, sink)
            }
            TraversalMode::FlatReverse => {
                let mut counter = Counter::starting_at(self.total);
                self.flat_reverse(src, dst, &mut counter, sink)
            }
            TraversalMode::TreeForward => {
                let mut counter = Counter::starting_at(1);
                self.tree_forward(src, dst, &mut counter, sink)
            }
        }
    }

    fn file_name(&self, index: usize, file: &Path) -> String {
        decorate_file(
            self.width,
            index,
            &base_name(file),
            self.unified_name.as_deref(),
        )
    }

    fn emit<S>(&self, position: usize, file: &Path, destination: &Path, sink: &mut S) -> Result<()>
    where
        S: FnMut(Track) -> Result<()>,
    {
        sink(Track {
            position,
            total: self.total,
            source: file.to_path_buf(),
            destination: destination.to_path_buf(),
        })
    }

    // Subdirectories first, then the level's own files.
    fn flat_forward<S>(&self, dir: &Path, dst: &Path, counter: &mut Counter, sink: &mut S) -> Result<()>
    where
        S: FnMut(Track) -> Result<()>,
    {
        let DirContents { dirs, files } = self.lister.list(dir);

        for sub in &dirs {
            self.flat_forward(sub, dst, counter, sink)?;
        }
        for file in &files {
            let position = counter.current();
            let target = dst.join(self.file_name(position, file));
            self.emit(position, file, &target, sink)?;
            counter.advance();
        }
        Ok(())
    }

    // Mirror of flat_forward: the level's files first, then subdirectories,
    // with the counter running down from the total.
    fn flat_reverse<S>(&self, dir: &Path, dst: &Path, counter: &mut Counter, sink: &mut S) -> Result<()>
    where
        S: FnMut(Track) -> Result<()>,
    {
        let DirContents { dirs, files } = self.lister.list(dir);

        for file in &files {
            let position = counter.current();
            let target = dst.join(self.file_name(position, file));
            self.emit(position, file, &target, sink)?;
            counter.retreat();
        }
        for sub in &dirs {
            self.flat_reverse(sub, dst, counter, sink)?;
        }
        Ok(())
    }

    // Every visited source directory gets a decorated counterpart, even when
    // it holds no audio. Names use sibling indices; the counter only feeds
    // track positions.
    fn tree_forward<S>(&self, dir: &Path, dst: &Path, counter: &mut Counter, sink: &mut S) -> Result<()>
    where
        S: FnMut(Track) -> Result<()>,
    {
        let DirContents { dirs, files } = self.lister.list(dir);

        for (index, sub) in dirs.iter().enumerate() {
            let target = dst.join(decorate_dir(index, &base_name(sub)));
            fs::create_dir_all(&target).map_err(|source| PcgError::CreateDir {
                path: target.clone(),
                source,
            })?;
            self.tree_forward(sub, &target, counter, sink)?;
        }
        for (index, file) in files.iter().enumerate() {
            let target = dst.join(self.file_name(index, file));
            self.emit(counter.current(), file, &target, sink)?;
            counter.advance();
        }
        Ok(())
    }
}
