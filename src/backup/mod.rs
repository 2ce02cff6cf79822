//! バックアップコアモジュール
//! タイムスタンプ生成、再帰コピー、バックアップ実行を担当

mod copier;
mod executor;
mod timestamp;

pub use copier::*;
pub use executor::*;
pub use timestamp::*;
