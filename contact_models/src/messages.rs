//! Fixed user-visible strings. The contact form only ships a single locale.

pub const SUBMIT_SUCCESS: &str = "お問い合わせありがとうございます。正常に送信されました。";
pub const INPUT_HAS_ERRORS: &str = "入力内容に誤りがあります。";
pub const SERVER_ERROR: &str = "サーバーエラーが発生しました。";

/// Shown by the form when the server rejected a submission without a message.
pub const SERVER_ERROR_FALLBACK: &str = "サーバーでエラーが発生しました。";
/// Shown by the form when the request never produced a response.
pub const TRANSPORT_ERROR: &str = "通信エラーが発生しました。時間をおいて再度お試しください。";
