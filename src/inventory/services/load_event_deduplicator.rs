use crate::inventory::domain::SeenSet;
use crate::ports::inbound::LoadEventHook;
use crate::ports::outbound::{ArchiveResolver, RecordSink};
use tracing::{debug, error, trace};

/// What happened to one load notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The host could not say where the code unit came from
    NoOrigin,
    /// The origin was handled by an earlier notification
    SeenOrigin,
    /// The origin is not an inspectable archive
    NotAnArchive,
    /// The archive could not be read
    Unreadable,
    /// Identical content was already emitted through another origin
    DuplicateContent,
    /// A new record was handed to the delivery queue
    Enqueued,
    /// A new record was rejected by the delivery queue
    Dropped,
}

/// LoadEventDeduplicator emits at most one record per distinct archive content
///
/// Safe to call from any number of host threads at once. Origins are
/// checked first so repeated loads from the same archive never re-hash it;
/// content hashes catch the same bytes reached through different origins.
pub struct LoadEventDeduplicator<R: ArchiveResolver, S: RecordSink> {
    resolver: R,
    sink: S,
    seen: SeenSet,
}

impl<R: ArchiveResolver, S: RecordSink> LoadEventDeduplicator<R, S> {
    pub fn new(resolver: R, sink: S) -> Self {
        Self {
            resolver,
            sink,
            seen: SeenSet::new(),
        }
    }

    /// Handles one code-unit load. Never fails and never blocks on the queue.
    pub fn on_code_unit_loaded(&self, origin: Option<&str>) -> LoadOutcome {
        let origin = match origin.map(str::trim) {
            Some(origin) if !origin.is_empty() => origin,
            _ => return LoadOutcome::NoOrigin,
        };

        if !self.seen.mark_origin(origin) {
            return LoadOutcome::SeenOrigin;
        }

        let record = match self.resolver.resolve(origin) {
            Ok(record) => record,
            Err(e) if e.is_not_an_archive() => {
                trace!(origin = %origin, "origin is not an archive");
                return LoadOutcome::NotAnArchive;
            }
            Err(e) => {
                debug!(origin = %origin, error = %e, "archive could not be resolved");
                return LoadOutcome::Unreadable;
            }
        };

        if !self.seen.mark_hash(record.content_hash()) {
            debug!(origin = %origin, "content already reported through another origin");
            return LoadOutcome::DuplicateContent;
        }

        match self.sink.offer(record) {
            Ok(()) => {
                debug!(origin = %origin, "archive record enqueued");
                LoadOutcome::Enqueued
            }
            Err(e) => {
                error!(origin = %origin, error = %e, "archive record dropped");
                LoadOutcome::Dropped
            }
        }
    }

    pub fn seen(&self) -> &SeenSet {
        &self.seen
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }
}

impl<R: ArchiveResolver, S: RecordSink> LoadEventHook for LoadEventDeduplicator<R, S> {
    fn notify<'a>(&self, origin: Option<&str>, content: &'a [u8]) -> &'a [u8] {
        self.on_code_unit_loaded(origin);
        content
    }
}
