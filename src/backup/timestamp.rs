//! タイムスタンプ生成 - バックアップディレクトリ名の整形
//!
//! 現在時刻からの純関数として切り出してあり、固定時刻を渡せば
//! 決定的にテストできる。

use chrono::{DateTime, Local};

/// タイムスタンプからバックアップディレクトリ名を生成
///
/// 形式: `backup-YYYY-MM-DD hh-mm-ss AM/PM`（12時間表記、ゼロ埋め）。
/// `:`や`/`を含まないため全対応プラットフォームでファイル名として安全で、
/// 辞書順がそのまま時刻順になる。
pub fn backup_dir_name(now: DateTime<Local>) -> String {
    format!("backup-{}", now.format("%Y-%m-%d %I-%M-%S %p"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_backup_dir_name_format() {
        let instant = Local.with_ymd_and_hms(2025, 1, 2, 15, 4, 5).unwrap();

        assert_eq!(backup_dir_name(instant), "backup-2025-01-02 03-04-05 PM");
    }

    #[test]
    fn test_backup_dir_name_morning() {
        let instant = Local.with_ymd_and_hms(2025, 11, 30, 9, 59, 0).unwrap();

        assert_eq!(backup_dir_name(instant), "backup-2025-11-30 09-59-00 AM");
    }

    #[test]
    fn test_backup_dir_name_is_filesystem_safe() {
        let instant = Local.with_ymd_and_hms(2025, 6, 15, 23, 0, 59).unwrap();
        let name = backup_dir_name(instant);

        assert!(!name.contains(':'));
        assert!(!name.contains('/'));
        assert!(!name.contains('\\'));
    }

    #[test]
    fn test_backup_dir_names_sort_chronologically() {
        let earlier = Local.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).unwrap();
        let later = Local.with_ymd_and_hms(2025, 1, 2, 3, 4, 6).unwrap();

        assert!(backup_dir_name(earlier) < backup_dir_name(later));
    }
}
