//! セーブデータ位置リゾルバー - Elden Ringのセーブディレクトリを特定
//!
//! Windowsのみ対応（`<home>/AppData/Roaming/EldenRing`）。
//! 読み取り専用の存在チェックのみ行い、ファイルシステムは一切変更しない。

use std::path::{Path, PathBuf};
use thiserror::Error;

/// セーブディレクトリ名（Elden Ringの固定フォルダ名）
const SAVE_DIR_NAME: &str = "EldenRing";

/// セーブデータ位置の解決エラー
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LocationError {
    #[error("Elden Ring save location is only supported on Windows")]
    Unsupported,

    #[error("home directory could not be determined")]
    HomeNotFound,

    #[error("Elden Ring save directory not found: {0}")]
    NotFound(PathBuf),
}

/// ホームディレクトリ配下のセーブデータパスを構築
///
/// 純関数。存在チェックは行わないため、どのプラットフォームでもテスト可能。
pub fn save_dir_under(home: &Path) -> PathBuf {
    home.join("AppData").join("Roaming").join(SAVE_DIR_NAME)
}

/// Elden Ringのセーブデータディレクトリを解決
///
/// 毎回再計算され、永続化はしない。失敗は常に型付きの結果として返す。
pub fn resolve_save_location() -> Result<PathBuf, LocationError> {
    if !cfg!(windows) {
        log::warn!("Elden Ring save location is only supported on Windows");
        return Err(LocationError::Unsupported);
    }

    let home = dirs::home_dir().ok_or(LocationError::HomeNotFound)?;
    let save_dir = save_dir_under(&home);

    if !save_dir.exists() {
        log::warn!("Elden Ring save directory not found: {}", save_dir.display());
        return Err(LocationError::NotFound(save_dir));
    }

    Ok(save_dir)
}
