/// サブスクリプション更新のエラー
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenewSubscriptionError {
    /// 終了日が表現可能な日時の範囲を超える
    InvalidRenewalPeriod { days: i64 },
}
