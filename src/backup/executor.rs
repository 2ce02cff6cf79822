//! バックアップ実行エンジン

use std::fs;
use std::path::PathBuf;

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{backup_dir_name, copy_dir_recursive};
use crate::location::{resolve_save_location, LocationError};
use crate::store::{ConfigStore, DestinationStore};

/// バックアップエラー
///
/// いずれもエンジン境界で[`BackupRecord`]に変換され、外へは伝播しない。
#[derive(Error, Debug)]
pub enum BackupError {
    #[error("Could not determine Elden Ring save location: {0}")]
    Location(#[from] LocationError),

    #[error("No backup location selected.")]
    DestinationNotSet,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// バックアップ結果レコード
///
/// 1回のバックアップ試行の結果。永続化はせず、呼び出し側が表示のためだけに
/// 保持する。`message`はそのままUIに表示できる文言。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackupRecord {
    /// 成功したか
    pub success: bool,

    /// 表示用メッセージ
    pub message: String,

    /// 作成したバックアップディレクトリ（成功時のみ）
    pub backup_path: Option<PathBuf>,

    /// 試行時刻
    pub timestamp: DateTime<Local>,
}

impl BackupRecord {
    /// 成功レコードを作成
    fn succeeded(message: String, backup_path: PathBuf, timestamp: DateTime<Local>) -> Self {
        Self {
            success: true,
            message,
            backup_path: Some(backup_path),
            timestamp,
        }
    }

    /// 失敗レコードを作成
    fn failed(message: String, timestamp: DateTime<Local>) -> Self {
        Self {
            success: false,
            message,
            backup_path: None,
            timestamp,
        }
    }
}

/// 時刻源（テストで固定時刻を注入する）
type Clock = Box<dyn Fn() -> DateTime<Local> + Send + Sync>;

/// バックアップ実行エンジン
///
/// 1回の`backup()`呼び出しで1回のバックアップを実行する。並行呼び出しは
/// 対象外（単一プロセス・単一ウィンドウ前提）。
pub struct BackupExecutor<'a, S: ConfigStore> {
    /// バックアップ先ストア（読み出しのみ）
    destinations: &'a DestinationStore<S>,

    /// セーブディレクトリの上書き（未指定ならプラットフォーム解決）
    source_dir: Option<PathBuf>,

    /// 時刻源
    clock: Clock,
}

impl<'a, S: ConfigStore> BackupExecutor<'a, S> {
    /// 新しいエグゼキューターを作成
    pub fn new(destinations: &'a DestinationStore<S>) -> Self {
        Self {
            destinations,
            source_dir: None,
            clock: Box::new(Local::now),
        }
    }

    /// セーブディレクトリを明示指定
    pub fn with_source_dir(mut self, source_dir: impl Into<PathBuf>) -> Self {
        self.source_dir = Some(source_dir.into());
        self
    }

    /// 時刻源を差し替え
    pub fn with_clock<F>(mut self, clock: F) -> Self
    where
        F: Fn() -> DateTime<Local> + Send + Sync + 'static,
    {
        self.clock = Box::new(clock);
        self
    }

    /// バックアップを実行
    ///
    /// あらゆる失敗は失敗レコードとして返り、パニックもエラー伝播もしない。
    /// コピー途中のI/Oエラーで残った部分的なコピー先は削除しない。
    pub fn backup(&self) -> BackupRecord {
        let started_at = (self.clock)();

        match self.run(started_at) {
            Ok(backup_path) => BackupRecord::succeeded(
                format!("Backup completed successfully to {}!", backup_path.display()),
                backup_path,
                started_at,
            ),
            Err(e) => {
                log::error!("Backup failed: {}", e);
                BackupRecord::failed(e.to_string(), started_at)
            }
        }
    }

    fn run(&self, started_at: DateTime<Local>) -> Result<PathBuf, BackupError> {
        // セーブディレクトリの解決が先。失敗時はバックアップ先の読み出しも
        // ファイルシステムへの書き込みも行わない。
        let source = self.resolve_source()?;

        let destination = self
            .destinations
            .get_destination()
            .ok_or(BackupError::DestinationNotSet)?;

        let backup_path = destination.join(backup_dir_name(started_at));

        fs::create_dir_all(&backup_path)?;
        let stats = copy_dir_recursive(&source, &backup_path)?;

        log::info!(
            "Backed up {} files ({} bytes) to {}",
            stats.files,
            stats.bytes,
            backup_path.display()
        );

        Ok(backup_path)
    }

    fn resolve_source(&self) -> Result<PathBuf, LocationError> {
        match &self.source_dir {
            Some(dir) => {
                if !dir.exists() {
                    return Err(LocationError::NotFound(dir.clone()));
                }
                Ok(dir.clone())
            }
            None => resolve_save_location(),
        }
    }
}
