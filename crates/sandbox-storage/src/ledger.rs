//! Hash-chained append-only ledger
//!
//! Every entry stores the SHA-256 of its predecessor, so rewriting or
//! dropping an earlier record breaks the chain and is caught by
//! [`Ledger::verify_integrity`].

use crate::error::StoreError;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Hash that precedes the first entry
pub const GENESIS_HASH: [u8; 32] = [0u8; 32];

/// One chained record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry<T> {
    /// Position in the ledger, from 0
    pub seq: u64,
    /// The stored record
    pub record: T,
    /// Hex SHA-256 of the previous entry
    pub prev_hash: String,
    /// Hex SHA-256 of this entry
    pub hash: String,
}

/// Append-only, hash-chained record log
#[derive(Debug)]
pub struct Ledger<T> {
    name: String,
    inner: Mutex<Vec<Entry<T>>>,
}

impl<T> Ledger<T>
where
    T: Serialize + Clone,
{
    /// Create new empty ledger
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            inner: Mutex::new(Vec::new()),
        }
    }

    /// Rebuild a ledger from stored entries, verifying the chain
    ///
    /// # Errors
    /// `StoreError::IntegrityViolation` at the first entry that does not
    /// match its chain
    pub fn from_entries(name: impl Into<String>, entries: Vec<Entry<T>>) -> Result<Self, StoreError> {
        let ledger = Self {
            name: name.into(),
            inner: Mutex::new(entries),
        };
        ledger.verify_integrity()?;
        Ok(ledger)
    }

    /// Ledger name
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Append a record
    ///
    /// # Errors
    /// `StoreError::Serialize` when the record cannot be hashed
    pub fn append(&self, record: T) -> Result<u64, StoreError> {
        self.append_then(record, |_| Ok(()))
    }

    /// Append a record, committing it only if `persist` accepts the
    /// resulting entry list
    ///
    /// The lock is held across `persist`, so concurrent appends are
    /// written in chain order.
    ///
    /// # Errors
    /// Serialization errors, or whatever `persist` returns; on error the
    /// ledger is unchanged
    pub fn append_then<F>(&self, record: T, persist: F) -> Result<u64, StoreError>
    where
        F: FnOnce(&[Entry<T>]) -> Result<(), StoreError>,
    {
        let mut guard = self.inner.lock();
        let seq = guard.len() as u64;
        let prev = match guard.last() {
            Some(last) => decode_hash(&self.name, guard.len() - 1, &last.hash)?,
            None => GENESIS_HASH,
        };
        let hash = compute_hash(seq, &record, &prev)?;

        guard.push(Entry {
            seq,
            record,
            prev_hash: hex::encode(prev),
            hash: hex::encode(hash),
        });
        if let Err(e) = persist(&guard) {
            guard.pop();
            return Err(e);
        }
        Ok(seq)
    }

    /// Records in append order
    pub fn records(&self) -> Vec<T> {
        self.inner.lock().iter().map(|e| e.record.clone()).collect()
    }

    /// Entries in append order
    pub fn entries(&self) -> Vec<Entry<T>> {
        self.inner.lock().clone()
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    /// Hash of the newest entry, or the genesis hash
    pub fn head(&self) -> String {
        self.inner
            .lock()
            .last()
            .map_or_else(|| hex::encode(GENESIS_HASH), |e| e.hash.clone())
    }

    /// Walk the chain and recompute every hash
    ///
    /// # Errors
    /// `StoreError::IntegrityViolation` naming the first bad entry
    pub fn verify_integrity(&self) -> Result<(), StoreError> {
        let guard = self.inner.lock();
        let mut prev = GENESIS_HASH;
        for (index, entry) in guard.iter().enumerate() {
            let violation = || StoreError::IntegrityViolation {
                log: self.name.clone(),
                index,
            };
            if entry.seq != index as u64 || decode_hash(&self.name, index, &entry.prev_hash)? != prev {
                return Err(violation());
            }
            let expected = compute_hash(entry.seq, &entry.record, &prev)?;
            if decode_hash(&self.name, index, &entry.hash)? != expected {
                return Err(violation());
            }
            prev = expected;
        }
        Ok(())
    }
}

fn compute_hash<T: Serialize>(seq: u64, record: &T, prev: &[u8; 32]) -> Result<[u8; 32], StoreError> {
    let mut hasher = Sha256::new();
    hasher.update(seq.to_le_bytes());
    hasher.update(serde_json::to_vec(record)?);
    hasher.update([0]);
    hasher.update(prev);
    Ok(hasher.finalize().into())
}

fn decode_hash(log: &str, index: usize, hash: &str) -> Result<[u8; 32], StoreError> {
    let violation = || StoreError::IntegrityViolation {
        log: log.to_string(),
        index,
    };
    let bytes = hex::decode(hash).map_err(|_| violation())?;
    bytes.try_into().map_err(|_| violation())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ledger() -> Ledger<String> {
        let ledger = Ledger::new("notes");
        for text in ["first", "second", "third"] {
            ledger.append(text.to_string()).unwrap();
        }
        ledger
    }

    #[test]
    fn chain_links_entries() {
        let ledger = ledger();
        let entries = ledger.entries();
        assert_eq!(entries[0].prev_hash, hex::encode(GENESIS_HASH));
        assert_eq!(entries[1].prev_hash, entries[0].hash);
        assert_eq!(entries[2].prev_hash, entries[1].hash);
        assert_eq!(ledger.head(), entries[2].hash);
        assert!(ledger.verify_integrity().is_ok());
    }

    #[test]
    fn rewritten_record_is_detected() {
        let mut entries = ledger().entries();
        entries[1].record = "edited".to_string();
        let err = Ledger::from_entries("notes", entries).unwrap_err();
        assert!(matches!(
            err,
            StoreError::IntegrityViolation { index: 1, .. }
        ));
    }

    #[test]
    fn dropped_record_is_detected() {
        let mut entries = ledger().entries();
        entries.remove(0);
        let err = Ledger::from_entries("notes", entries).unwrap_err();
        assert!(matches!(
            err,
            StoreError::IntegrityViolation { index: 0, .. }
        ));
    }

    #[test]
    fn malformed_hash_is_violation() {
        let mut entries = ledger().entries();
        entries[2].hash = "not-hex".to_string();
        assert!(Ledger::from_entries("notes", entries)
            .unwrap_err()
            .is_integrity_violation());
    }

    #[test]
    fn failed_persist_leaves_ledger_unchanged() {
        let ledger = ledger();
        let head = ledger.head();
        let err = ledger
            .append_then("fourth".to_string(), |_| {
                Err(StoreError::io_error(
                    "notes.json",
                    std::io::Error::new(std::io::ErrorKind::Other, "disk full"),
                ))
            })
            .unwrap_err();
        assert!(matches!(err, StoreError::Io { .. }));
        assert_eq!(ledger.len(), 3);
        assert_eq!(ledger.head(), head);
    }

    #[test]
    fn persist_sees_new_entry() {
        let ledger = ledger();
        ledger
            .append_then("fourth".to_string(), |entries| {
                assert_eq!(entries.len(), 4);
                assert_eq!(entries[3].record, "fourth");
                Ok(())
            })
            .unwrap();
        assert_eq!(ledger.records().last().map(String::as_str), Some("fourth"));
    }
}
