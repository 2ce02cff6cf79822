//! EldenRingBackup - Elden Ringセーブデータバックアップエンジン
//!
//! Elden Ringのセーブデータをユーザー指定の保存先へ安全にバックアップする
//! ライブラリクレート。
//! - プラットフォーム固有のセーブデータパス解決
//! - バックアップ先の永続化（キーバリューストア経由）
//! - タイムスタンプ付きディレクトリへの再帰コピー
//!
//! GUIシェル（ウィンドウ生成、ディレクトリ選択ダイアログ）は本クレートの
//! 対象外。シェルは[`api`]モジュールの3操作のみを呼び出す。

pub mod api;
pub mod backup;
pub mod location;
pub mod store;
