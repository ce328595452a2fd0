use serde::{Deserialize, Serialize};

use super::{MemberId, Money};

/// コマンド：サブスクリプションを更新する
///
/// days は 0 や負の値も受け付ける（負の場合は即座に過去の終了日になる）。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenewSubscription {
    pub member_id: MemberId,
    pub payment_amount: Money,
    pub days: i64,
}
