// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Link Saver store — persistence for the link collection.  The collection is
// one JSON array blob: read whole, mutated in memory, rewritten whole.  A
// `LinkStore` backend is chosen once at startup (file system when a home
// directory exists, in-memory otherwise) and injected into the service.

pub mod backend;
pub mod file;
pub mod memory;
pub mod service;

pub use backend::{LinkStore, select_backend};
pub use file::FileStore;
pub use memory::MemoryStore;
pub use service::LinkService;
