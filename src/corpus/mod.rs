//! Immutable in-memory comment corpus.
//!
//! A `Corpus` is built once at startup and only ever read afterwards. Each
//! instance gets a process-unique [`CorpusId`] so derived results can be
//! memoized against corpus identity.

use crate::integration;
use crate::model::{Comment, CommentId};
use std::collections::{BTreeSet, HashMap};
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::warn;

/// Built-in sample corpus: twelve comments from one match day.
const SEED_JSONL: &str = include_str!("seed.jsonl");

static NEXT_CORPUS_ID: AtomicU64 = AtomicU64::new(1);

/// Identity of a corpus instance. Two corpora never share an id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CorpusId(u64);

/// Read-only collection of comments in their original order.
#[derive(Debug)]
pub struct Corpus {
    id: CorpusId,
    comments: Vec<Comment>,
    by_id: HashMap<CommentId, usize>,
}

impl Corpus {
    /// Build a corpus from comments.
    ///
    /// Ids are expected to be unique; if one repeats, lookup by id resolves to
    /// the first occurrence.
    pub fn new(comments: Vec<Comment>) -> Self {
        let mut by_id = HashMap::with_capacity(comments.len());
        for (index, comment) in comments.iter().enumerate() {
            by_id.entry(comment.id().clone()).or_insert(index);
        }
        Self {
            id: CorpusId(NEXT_CORPUS_ID.fetch_add(1, Ordering::Relaxed)),
            comments,
            by_id,
        }
    }

    /// The built-in twelve-comment sample corpus.
    pub fn seed() -> Self {
        let (comments, errors) = integration::process_lines(SEED_JSONL.lines(), 1);
        for error in &errors {
            warn!(%error, "Skipping malformed seed record");
        }
        Self::new(comments)
    }

    /// Process-unique identity of this corpus.
    pub fn id(&self) -> CorpusId {
        self.id
    }

    /// All comments in original order.
    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    /// Number of comments.
    pub fn len(&self) -> usize {
        self.comments.len()
    }

    /// True when the corpus holds no comments.
    pub fn is_empty(&self) -> bool {
        self.comments.is_empty()
    }

    /// Comment at a position in corpus order.
    pub fn get(&self, index: usize) -> Option<&Comment> {
        self.comments.get(index)
    }

    /// Look a comment up by id.
    pub fn find(&self, id: &CommentId) -> Option<&Comment> {
        self.by_id.get(id).map(|&index| &self.comments[index])
    }

    /// Distinct team names, sorted ascending. Comments without a team are
    /// skipped.
    pub fn teams(&self) -> Vec<String> {
        self.comments
            .iter()
            .filter_map(Comment::team)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_string)
            .collect()
    }
}
