use crate::domain::value_objects::{MemberId, Money};

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// 支払検証ポート
///
/// 決済ゲートウェイとの境界を維持する。
/// 金額の妥当性（符号など）の判断もこのポートの実装に委ねられる。
pub trait PaymentVerifier: Send + Sync {
    /// 会員の支払を検証する
    ///
    /// 拒否は `Ok(false)`。検証自体が行えなかった場合のみエラーを返す。
    fn verify_payment(&self, member_id: MemberId, amount: Money) -> Result<bool>;
}
