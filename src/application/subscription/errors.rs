use thiserror::Error;

/// サブスクリプション管理アプリケーション層のエラー
///
/// 支払の拒否はエラーではない（`Ok(false)` で表す）。
#[derive(Debug, Error)]
pub enum SubscriptionApplicationError {
    /// 会員が存在しない
    #[error("Member not found")]
    MemberNotFound,

    /// 更新日数から終了日を計算できない（日時の表現範囲外）
    #[error("Invalid renewal period: {days} days")]
    InvalidRenewalPeriod { days: i64 },

    /// MemberStoreのエラー
    #[error("Member store error")]
    MemberStoreError(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// PaymentVerifierのエラー
    #[error("Payment verifier error")]
    PaymentVerifierError(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Notifierのエラー
    #[error("Notifier error")]
    NotifierError(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// アプリケーション層の Result型
pub type Result<T> = std::result::Result<T, SubscriptionApplicationError>;
