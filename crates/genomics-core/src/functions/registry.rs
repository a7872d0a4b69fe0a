//! FunctionRegistry - 検証関数の登録と呼び出し
//!
//! 初期化時に可変で組み立て、実行時は `Arc<FunctionRegistry>` として
//! 読み取り専用で使います（ロック不要）。

use std::collections::HashMap;
use std::sync::Arc;

use super::handler::Validator;
use crate::domain::{ValidationEvent, ValidationResult};
use crate::error::GenomicsError;

#[derive(Default)]
pub struct FunctionRegistry {
    functions: HashMap<String, Arc<dyn Validator>>,
}

impl FunctionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// `name` に `validator` を登録（同じ名前の再登録は後勝ち）
    pub fn register<V: Validator + 'static>(&mut self, name: impl Into<String>, validator: V) {
        let name = name.into();
        if self
            .functions
            .insert(name.clone(), Arc::new(validator))
            .is_some()
        {
            tracing::debug!(function = %name, "replaced function");
        } else {
            tracing::debug!(function = %name, "created function");
        }
    }

    /// `name` の関数を同期的に呼び出す
    pub fn invoke(
        &self,
        name: &str,
        event: &ValidationEvent,
    ) -> Result<ValidationResult, GenomicsError> {
        let validator = self
            .functions
            .get(name)
            .ok_or_else(|| GenomicsError::FunctionNotFound(name.to_string()))?;
        tracing::debug!(function = name, file = %event.file, "invoking function");
        Ok(validator.validate(event))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    /// 登録済みの名前（ソート済み）
    pub fn registered_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.functions.keys().cloned().collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }
}
