//! 呼び出し側API - UIシェルとのインターフェース
//!
//! シェルが使う3操作のみを公開する。ディレクトリ選択ダイアログの表示は
//! シェルの責務で、ここは選択済みパスを受け取って永続化するだけ。
//! 返り値はそのまま表示できるプレーンな結果構造体。

use std::path::Path;

use serde::Serialize;

use crate::backup::BackupExecutor;
use crate::store::{ConfigStore, DestinationStore, JsonFileStore, StoreError};

/// バックアップ先操作のレスポンス
#[derive(Debug, Serialize)]
pub struct LocationResponse {
    pub success: bool,
    pub message: String,
    pub location: Option<String>,
}

/// バックアップ実行のレスポンス
#[derive(Debug, Serialize)]
pub struct BackupResponse {
    pub success: bool,
    pub message: String,
    pub backup_path: Option<String>,
}

/// バックアップエンジンのファサード
///
/// ストア実装は注入式（本番はJSONファイル、テストはインメモリ）。
pub struct BackupApi<S: ConfigStore> {
    destinations: DestinationStore<S>,
}

impl BackupApi<JsonFileStore> {
    /// 既定のJSONファイルストアでAPIを開く
    pub fn open_default() -> Result<Self, StoreError> {
        Ok(Self::new(JsonFileStore::open_default()?))
    }
}

impl<S: ConfigStore> BackupApi<S> {
    /// 設定ストアを指定してAPIを作成
    pub fn new(store: S) -> Self {
        Self {
            destinations: DestinationStore::new(store),
        }
    }

    /// 選択済みのバックアップ先を永続化
    pub fn set_backup_location(&mut self, path: &Path) -> LocationResponse {
        match self.destinations.set_destination(path) {
            Ok(()) => LocationResponse {
                success: true,
                message: format!("Backup location set to {}.", path.display()),
                location: Some(path.to_string_lossy().into_owned()),
            },
            Err(e) => {
                log::error!("Error setting backup location: {}", e);
                LocationResponse {
                    success: false,
                    message: e.to_string(),
                    location: None,
                }
            }
        }
    }

    /// 永続化済みのバックアップ先を取得（未設定・読み出し失敗はNone）
    pub fn get_backup_location(&self) -> Option<String> {
        self.destinations
            .get_destination()
            .map(|p| p.to_string_lossy().into_owned())
    }

    /// バックアップを1回実行
    pub fn run_backup(&self) -> BackupResponse {
        let record = BackupExecutor::new(&self.destinations).backup();

        BackupResponse {
            success: record.success,
            message: record.message,
            backup_path: record
                .backup_path
                .map(|p| p.to_string_lossy().into_owned()),
        }
    }
}
