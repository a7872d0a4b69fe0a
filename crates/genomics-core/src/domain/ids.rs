//! Domain identifiers (strongly-typed IDs).
//!
//! ULID ベースの ID を Phantom type でラップし、
//! ExecutionId と RunId を型レベルで区別します。
//!
//! ## ULID の特性
//! - **時刻でソート可能**: 生成順で並ぶので execution 履歴の順序と一致する
//! - **調整不要**: カウンタを共有しなくても一意

use serde::{Deserialize, Serialize};
use std::fmt;
use std::marker::PhantomData;
use ulid::Ulid;

/// IdMarker は各 ID 型のマーカー trait
///
/// Display で使うプレフィックス（"exec-", "run-"）を提供します。
pub trait IdMarker: Send + Sync + 'static {
    fn prefix() -> &'static str;
}

/// ジェネリック ID 型
///
/// `T` は PhantomData なので実行時のサイズは Ulid と同じです。
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Id<T: IdMarker> {
    ulid: Ulid,
    #[serde(skip)]
    _marker: PhantomData<T>,
}

impl<T: IdMarker> Id<T> {
    pub fn from_ulid(ulid: Ulid) -> Self {
        Self {
            ulid,
            _marker: PhantomData,
        }
    }

    pub fn as_ulid(&self) -> Ulid {
        self.ulid
    }
}

impl<T: IdMarker> From<Ulid> for Id<T> {
    fn from(ulid: Ulid) -> Self {
        Self::from_ulid(ulid)
    }
}

impl<T: IdMarker> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", T::prefix(), self.ulid)
    }
}

/// Workflow execution のマーカー型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Execution {}

impl IdMarker for Execution {
    fn prefix() -> &'static str {
        "exec-"
    }
}

/// Pipeline run のマーカー型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Run {}

impl IdMarker for Run {
    fn prefix() -> &'static str {
        "run-"
    }
}

/// Identifier of one simulated workflow execution.
pub type ExecutionId = Id<Execution>;

/// Identifier of one pipeline run (one pass over the input files).
pub type RunId = Id<Run>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_carry_their_prefix() {
        let ulid = Ulid::new();

        let exec = ExecutionId::from_ulid(ulid);
        let run = RunId::from_ulid(ulid);

        assert_eq!(exec.as_ulid(), run.as_ulid());
        assert_eq!(exec.to_string(), format!("exec-{ulid}"));
        assert_eq!(run.to_string(), format!("run-{ulid}"));

        // let _: RunId = exec; // <- does not compile
    }

    #[test]
    fn ids_can_be_serialized() {
        let exec: ExecutionId = Ulid::new().into();

        let serialized = serde_json::to_string(&exec).unwrap();
        let deserialized: ExecutionId = serde_json::from_str(&serialized).unwrap();

        assert_eq!(exec, deserialized);
    }

    #[test]
    fn phantom_data_does_not_consume_memory() {
        use std::mem::size_of;

        assert_eq!(size_of::<ExecutionId>(), size_of::<Ulid>());
        assert_eq!(size_of::<RunId>(), 16);
    }
}
