//! Mechmine Storage Layer
//!
//! Read-only access to the external papers database plus JSON artifact
//! I/O for the pipeline's inputs and outputs (ranked candidates,
//! reviewed samples, precision reports).
//!
//! The papers schema is owned by the fetching pipeline; this crate
//! never creates or migrates it.
//!
//! # Examples
//!
//! ```no_run
//! use mechmine_store::PaperStore;
//!
//! let store = PaperStore::open("database/papers.db").unwrap();
//! let papers = store.papers_with_abstracts().unwrap();
//! ```

#![warn(missing_docs)]

pub mod artifacts;

use mechmine_domain::traits::PaperSource;
use mechmine_domain::Paper;
use rusqlite::Connection;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub use artifacts::{FileReportSink, FileSampleSource};

/// Errors that can occur during storage operations
#[derive(Error, Debug)]
pub enum StoreError {
    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// Input file or database missing
    #[error("Source not found: {0}")]
    NotFound(PathBuf),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Read-only view over the external papers database.
///
/// # Thread Safety
///
/// SQLite connections are not thread-safe. Each thread should open its
/// own PaperStore.
pub struct PaperStore {
    conn: Connection,
}

impl PaperStore {
    /// Open the papers database at the given path.
    ///
    /// Fails with [`StoreError::NotFound`] when the file does not
    /// exist; this tool never creates the papers database.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(StoreError::NotFound(path.to_path_buf()));
        }
        let conn = Connection::open(path)?;
        Ok(Self { conn })
    }

    /// Open an in-memory database (testing only; the caller seeds the
    /// papers table itself).
    pub fn open_in_memory() -> Result<Self, StoreError> {
        Ok(Self {
            conn: Connection::open_in_memory()?,
        })
    }

    /// Direct connection access for test seeding
    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    /// All papers with a non-empty abstract, ordered by id.
    pub fn papers_with_abstracts(&self) -> Result<Vec<Paper>, StoreError> {
        let mut stmt = self.conn.prepare(
            "SELECT id, arxiv_id, title, abstract, domain, subdomain
             FROM papers
             WHERE abstract IS NOT NULL AND abstract != ''
             ORDER BY id",
        )?;

        let rows = stmt.query_map([], |row| {
            Ok(Paper {
                id: row.get(0)?,
                arxiv_id: row.get(1)?,
                title: row.get(2)?,
                abstract_text: row.get(3)?,
                domain: row.get(4)?,
                subdomain: row.get(5)?,
            })
        })?;

        let mut papers = Vec::new();
        for row in rows {
            papers.push(row?);
        }
        tracing::debug!(count = papers.len(), "Loaded papers with abstracts");
        Ok(papers)
    }

    /// Total number of papers in the store
    pub fn paper_count(&self) -> Result<u64, StoreError> {
        let count: u64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM papers", [], |row| row.get(0))?;
        Ok(count)
    }
}

impl PaperSource for PaperStore {
    type Error = StoreError;

    fn papers_with_abstracts(&self) -> Result<Vec<Paper>, Self::Error> {
        PaperStore::papers_with_abstracts(self)
    }
}
