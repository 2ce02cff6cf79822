//! 再帰コピー - セーブディレクトリ全体のコピー
//!
//! ソースは一切変更しない。コピーはツリー全体でアトミックではなく、
//! 途中でI/Oエラーが起きた場合は部分的なコピー先が残る（呼び出し側が
//! 確認・破棄できるよう、削除はしない）。

use std::fs;
use std::io;
use std::path::Path;

use walkdir::WalkDir;

/// コピー統計
#[derive(Debug, Clone, Copy, Default)]
pub struct CopyStats {
    /// コピーしたファイル数
    pub files: usize,

    /// コピーしたバイト数
    pub bytes: u64,
}

/// ディレクトリを再帰的にコピー
///
/// `source`配下の全ファイル・サブディレクトリを`dest`配下へ同じ相対パスで
/// コピーする。シンボリックリンクは辿らない。
pub fn copy_dir_recursive(source: &Path, dest: &Path) -> io::Result<CopyStats> {
    let mut stats = CopyStats::default();

    for entry in WalkDir::new(source).follow_links(false) {
        let entry = entry.map_err(io::Error::from)?;
        let relative = entry.path().strip_prefix(source).unwrap_or(entry.path());
        let target = dest.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)?;
        } else if entry.file_type().is_file() {
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)?;
            }
            stats.bytes += fs::copy(entry.path(), &target)?;
            stats.files += 1;
        }
    }

    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_copy_flat_directory() {
        let source = TempDir::new().unwrap();
        let dest = TempDir::new().unwrap();

        fs::write(source.path().join("a.sl2"), b"save slot data").unwrap();
        fs::write(source.path().join("b.co2"), b"seamless coop data").unwrap();

        let stats = copy_dir_recursive(source.path(), dest.path()).unwrap();

        assert_eq!(stats.files, 2);
        assert_eq!(
            fs::read(dest.path().join("a.sl2")).unwrap(),
            b"save slot data"
        );
        assert_eq!(
            fs::read(dest.path().join("b.co2")).unwrap(),
            b"seamless coop data"
        );
    }

    #[test]
    fn test_copy_nested_directories() {
        let source = TempDir::new().unwrap();
        let dest = TempDir::new().unwrap();

        let steam_id = source.path().join("76561198000000000");
        fs::create_dir_all(&steam_id).unwrap();
        fs::write(steam_id.join("ER0000.sl2"), b"main save").unwrap();
        fs::write(steam_id.join("ER0000.sl2.bak"), b"game's own backup").unwrap();
        fs::create_dir_all(source.path().join("empty")).unwrap();

        let stats = copy_dir_recursive(source.path(), dest.path()).unwrap();

        assert_eq!(stats.files, 2);
        assert_eq!(stats.bytes, 9 + 17);
        assert_eq!(
            fs::read(dest.path().join("76561198000000000").join("ER0000.sl2")).unwrap(),
            b"main save"
        );
        assert!(dest.path().join("empty").is_dir());
    }

    #[test]
    fn test_copy_missing_source_fails() {
        let dest = TempDir::new().unwrap();

        let result = copy_dir_recursive(Path::new("/no/such/save/dir"), dest.path());

        assert!(result.is_err());
    }

    #[test]
    fn test_copy_does_not_mutate_source() {
        let source = TempDir::new().unwrap();
        let dest = TempDir::new().unwrap();

        let file_path = source.path().join("ER0000.sl2");
        let mut file = File::create(&file_path).unwrap();
        writeln!(file, "original bytes").unwrap();
        let before = fs::read(&file_path).unwrap();

        copy_dir_recursive(source.path(), dest.path()).unwrap();

        assert_eq!(fs::read(&file_path).unwrap(), before);
    }
}
