//! 設定ストア - バックアップ先の永続化
//!
//! エンジンが使うキーは`backupLocation`の1つだけ。ストア本体は
//! [`ConfigStore`]トレイトとして注入されるため、テストではインメモリ実装、
//! 本番ではJSONファイル実装を差し替えられる。

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// バックアップ先を保持するキー
const BACKUP_LOCATION_KEY: &str = "backupLocation";

/// 設定ストアのエラー
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("config store IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config store serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// キーバリュー設定ストア
///
/// プロセス再起動をまたいで文字列キー・文字列値を保持する外部コラボレーター。
pub trait ConfigStore {
    /// キーに対応する値を取得（未設定ならNone）
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// キーに値を設定（既存値は上書き）
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// インメモリストア（テスト・組み込み用）
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    /// 空のストアを作成
    pub fn new() -> Self {
        Self::default()
    }
}

impl ConfigStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// JSONファイルストア
///
/// 1つのJSONオブジェクト（文字列→文字列）をファイルに保持する。
pub struct JsonFileStore {
    /// ストアファイルのパス
    path: PathBuf,
}

impl JsonFileStore {
    /// 指定パスのストアを開く（ファイルは初回書き込み時に作成される）
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// ユーザー設定ディレクトリ配下の既定パスでストアを開く
    pub fn open_default() -> Result<Self, StoreError> {
        let base = config_base().ok_or_else(|| {
            std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "config directory could not be determined",
            )
        })?;

        Ok(Self::new(base.join("EldenRingBackup").join("config.json")))
    }

    /// ファイルから全エントリを読み込み
    fn load(&self) -> Result<HashMap<String, String>, StoreError> {
        if !self.path.exists() {
            return Ok(HashMap::new());
        }

        let data = fs::read_to_string(&self.path)?;
        let values: HashMap<String, String> = serde_json::from_str(&data)?;
        Ok(values)
    }
}

impl ConfigStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let values = self.load()?;
        Ok(values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        // 壊れたストアは書き込み時に作り直す（読み出し失敗で書き込みを妨げない）
        let mut values = self.load().unwrap_or_default();
        values.insert(key.to_string(), value.to_string());

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let data = serde_json::to_string_pretty(&values)?;
        fs::write(&self.path, data)?;
        Ok(())
    }
}

/// プラットフォーム別の設定ベースディレクトリを取得
fn config_base() -> Option<PathBuf> {
    dirs::config_dir().or_else(|| {
        dirs::home_dir().map(|home| home.join("AppData").join("Roaming"))
    })
}

/// バックアップ先ストア
///
/// 設定ストア上の`backupLocation`キー1つを読み書きするアクセサー。
/// パスの存在検証は行わない（ディレクトリ選択は呼び出し側の責務）。
pub struct DestinationStore<S: ConfigStore> {
    store: S,
}

impl<S: ConfigStore> DestinationStore<S> {
    /// 設定ストアを包んで作成
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// 永続化されたバックアップ先を取得
    ///
    /// 未設定、またはストアの読み出しに失敗した場合はNone。
    pub fn get_destination(&self) -> Option<PathBuf> {
        match self.store.get(BACKUP_LOCATION_KEY) {
            Ok(value) => value.map(PathBuf::from),
            Err(e) => {
                log::warn!("Error getting backup location: {}", e);
                None
            }
        }
    }

    /// バックアップ先を永続化（既存値は上書き）
    pub fn set_destination(&mut self, path: &Path) -> Result<(), StoreError> {
        self.store
            .set(BACKUP_LOCATION_KEY, &path.to_string_lossy())
    }
}
