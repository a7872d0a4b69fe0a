//! Functions - 名前で呼び出す検証関数
//!
//! 文字列名による動的ディスパッチを、名前 → `Validator` trait object の
//! 明示的なマップで置き換えます。未登録の名前は panic ではなく
//! `GenomicsError::FunctionNotFound` になります。

pub mod handler;
pub mod registry;

pub use self::handler::{SuffixValidator, Validator};
pub use self::registry::FunctionRegistry;
