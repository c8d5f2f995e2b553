use crate::common::error::WorkspaceError;

/// ansible-workspace全体で使用するResult型のエイリアス
///
/// # Examples
///
/// ```
/// use ansible_workspace::common::result::WorkspaceResult;
/// use ansible_workspace::common::error::WorkspaceError;
///
/// fn example_function() -> WorkspaceResult<String> {
///     Ok("success".to_string())
/// }
///
/// fn example_with_error() -> WorkspaceResult<()> {
///     Err(WorkspaceError::config_error("Something went wrong"))
/// }
/// ```
pub type WorkspaceResult<T> = Result<T, WorkspaceError>;

/// Optionのエラー変換ヘルパー
pub trait OptionExt<T> {
    /// Optionを設定エラー付きでWorkspaceResultに変換する
    ///
    /// # Examples
    ///
    /// ```
    /// use ansible_workspace::common::result::{WorkspaceResult, OptionExt};
    ///
    /// let none_value: Option<String> = None;
    /// let result: WorkspaceResult<String> = none_value.ok_or_config_error("missing value");
    /// assert!(result.is_err());
    /// ```
    fn ok_or_config_error(self, message: impl Into<String>) -> WorkspaceResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_config_error(self, message: impl Into<String>) -> WorkspaceResult<T> {
        self.ok_or_else(|| WorkspaceError::config_error(message))
    }
}

/// Resultのエラー変換ヘルパー
pub trait ResultExt<T> {
    /// ファイルシステムエラーとしてWorkspaceResultに変換
    fn with_filesystem_error(
        self,
        message: impl Into<String>,
        path: Option<std::path::PathBuf>,
    ) -> WorkspaceResult<T>;
}

impl<T> ResultExt<T> for Result<T, std::io::Error> {
    fn with_filesystem_error(
        self,
        message: impl Into<String>,
        path: Option<std::path::PathBuf>,
    ) -> WorkspaceResult<T> {
        self.map_err(|e| WorkspaceError::filesystem_error_with_source(message, path, e))
    }
}
