//! App - アプリケーション層
//!
//! ports と function registry を組み合わせてパイプラインを動かします。
//!
//! # 主要コンポーネント
//! - **AppBuilder**: サービスのワイヤリングと起動時検証（fail-fast）
//! - **PipelineDriver**: ファイルごとに stage → validate → record → execute
//! - **samples**: ローカル実行用のサンプルファイル

pub mod builder;
pub mod driver;
pub mod samples;

pub use self::builder::AppBuilder;
pub use self::driver::PipelineDriver;
