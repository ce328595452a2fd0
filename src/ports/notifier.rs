use crate::domain::value_objects::MemberId;

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// 通知ポート
///
/// 会員への通知配信メカニズムを抽象化する。
/// 実装はメール、SMS、プッシュ通知などが考えられる。
pub trait Notifier: Send + Sync {
    /// 会員に通知を送信する
    ///
    /// 送信後の配信保証や再送は実装側の責務。
    fn send_notification(&self, message: &str, member_id: MemberId) -> Result<()>;
}
