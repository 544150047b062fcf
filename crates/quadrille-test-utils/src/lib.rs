//! Test utilities for Quadrille development.
//!
//! Provides [`RecordingStorage`], a backend wrapper that logs every call it
//! forwards, text [`fixtures`], a test-writer [`init_tracing`] helper, and
//! the panicking [`must`] convenience for tests and demos.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use std::cell::RefCell;
use std::fmt::Debug;
use std::rc::Rc;

use quadrille_core::{Point, Scalar};
use quadrille_storage::{BoardStorage, StorageError};
use tracing::Level;

/// Install a fmt subscriber that writes through the test harness.
///
/// Safe to call from every test; only the first call installs.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(Level::TRACE)
        .try_init();
}

/// Unwrap a result, panicking with the error's message.
#[track_caller]
pub fn must<R, E: std::fmt::Display>(result: Result<R, E>) -> R {
    match result {
        Ok(v) => v,
        Err(e) => panic!("{e}"),
    }
}

// ── RecordingStorage ──────────────────────────────────────────────

/// One forwarded storage call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StorageOp<T> {
    Allocate,
    Set(Point<T>),
    Delete(Point<T>),
    IterateBegin,
    IterateEnd,
}

/// Shared handle onto a [`RecordingStorage`]'s call log.
///
/// Grab it with [`RecordingStorage::log`] before handing the storage to a
/// board; the handle keeps observing after the move.
#[derive(Debug)]
pub struct OpLog<T>(Rc<RefCell<Vec<StorageOp<T>>>>);

// Handles share one log whatever `T` is, so no `T: Clone` bound.
impl<T> Clone for OpLog<T> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl<T> OpLog<T> {
    fn push(&self, op: StorageOp<T>) {
        self.0.borrow_mut().push(op);
    }

    /// Drain and return everything recorded so far.
    pub fn take(&self) -> Vec<StorageOp<T>> {
        std::mem::take(&mut *self.0.borrow_mut())
    }

    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }
}

/// A backend wrapper that records every mutating call and iteration
/// boundary before forwarding to the wrapped backend.
///
/// Lets tests check ordering contracts such as "no write happens between
/// the start and end of an iteration".
pub struct RecordingStorage<T, S> {
    inner: S,
    log: OpLog<T>,
}

impl<T, S> RecordingStorage<T, S> {
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            log: OpLog(Rc::new(RefCell::new(Vec::new()))),
        }
    }

    pub fn log(&self) -> OpLog<T> {
        self.log.clone()
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }
}

impl<T, V, S> BoardStorage<T, V> for RecordingStorage<T, S>
where
    T: Scalar,
    V: Clone + 'static,
    S: BoardStorage<T, V>,
{
    fn backend_name(&self) -> &'static str {
        self.inner.backend_name()
    }

    fn allocate(&mut self, width: T, height: T, empty: V) -> Result<(), StorageError> {
        self.log.push(StorageOp::Allocate);
        self.inner.allocate(width, height, empty)
    }

    fn set(&mut self, p: Point<T>, v: V) {
        self.log.push(StorageOp::Set(p));
        self.inner.set(p, v);
    }

    fn try_set(&mut self, p: Point<T>, v: V) -> Result<(), StorageError> {
        self.log.push(StorageOp::Set(p));
        self.inner.try_set(p, v)
    }

    fn get(&self, p: Point<T>) -> Option<&V> {
        self.inner.get(p)
    }

    fn delete(&mut self, p: Point<T>) {
        self.log.push(StorageOp::Delete(p));
        self.inner.delete(p);
    }

    fn iterate<'s>(&'s self, visit: &mut dyn FnMut(Point<T>, &'s V) -> bool) -> bool {
        self.log.push(StorageOp::IterateBegin);
        let done = self.inner.iterate(visit);
        self.log.push(StorageOp::IterateEnd);
        done
    }

    fn iterate_ordered<'s>(&'s self, visit: &mut dyn FnMut(Point<T>, &'s V) -> bool) -> bool {
        self.log.push(StorageOp::IterateBegin);
        let done = self.inner.iterate_ordered(visit);
        self.log.push(StorageOp::IterateEnd);
        done
    }

    fn copy_to_storage(&self) -> Box<dyn BoardStorage<T, V>> {
        self.inner.copy_to_storage()
    }

    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T, S> Debug for RecordingStorage<T, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecordingStorage")
            .field("recorded", &self.log.len())
            .finish_non_exhaustive()
    }
}
