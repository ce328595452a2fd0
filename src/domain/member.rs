use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use super::{
    MemberId, MemberStatus, MembershipExpired, RenewSubscriptionError, SubscriptionRenewed,
};

/// Member集約 - サブスクリプション会員
///
/// 会員の作成・削除は外部ストアの責務。
/// このコンテキストは is_active と subscription_end のみを変更する。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    // 識別子（作成後不変）
    pub id: MemberId,

    #[serde(default)]
    pub name: String,

    pub is_active: bool,

    /// None はサブスクリプションが一度も確立されていないことを表す。
    /// 失効扱いにはならず、自動無効化の対象外。
    #[serde(default)]
    pub subscription_end: Option<DateTime<Utc>>,
}

impl Member {
    pub fn new(id: MemberId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            is_active: false,
            subscription_end: None,
        }
    }

    pub fn status(&self) -> MemberStatus {
        MemberStatus::from_flag(self.is_active)
    }
}

/// 純粋関数：サブスクリプションを更新する
///
/// ビジネスルール：
/// - 終了日 = 更新日時 + days（0なら更新日時そのもの）
/// - days の符号は検証しない。負の値は過去の終了日になる
/// - 以前の状態にかかわらず有効にする
/// - 終了日が日時の表現範囲を超える場合は InvalidRenewalPeriod
///
/// 副作用なし。更新後のMemberとイベントを返す。
pub fn renew_subscription(
    member: Member,
    renewed_at: DateTime<Utc>,
    days: i64,
) -> Result<(Member, SubscriptionRenewed), RenewSubscriptionError> {
    let subscription_end = Duration::try_days(days)
        .and_then(|period| renewed_at.checked_add_signed(period))
        .ok_or(RenewSubscriptionError::InvalidRenewalPeriod { days })?;
    let was_active = member.is_active;

    let renewed = Member {
        is_active: true,
        subscription_end: Some(subscription_end),
        ..member
    };

    let event = SubscriptionRenewed {
        member_id: renewed.id,
        subscription_end,
        renewed_at,
        was_active,
    };

    Ok((renewed, event))
}

/// 純粋関数：失効判定
///
/// 終了日が存在し、かつ now より厳密に前の場合のみ失効。
/// is_active の値は判定に影響しない。
pub fn is_expired(member: &Member, now: DateTime<Utc>) -> bool {
    member.subscription_end.is_some_and(|end| end < now)
}

/// 純粋関数：会員資格を失効させる
///
/// 既に無効な会員でも無効化とイベント生成を行う（副作用の重複排除はしない）。
/// 呼び出し側は is_expired で対象を絞り込むこと。
/// イベントの終了日は会員の値をそのまま写す（終了日がなければ None）。
pub fn expire_membership(
    member: Member,
    expired_at: DateTime<Utc>,
) -> (Member, MembershipExpired) {
    let was_active = member.is_active;
    let subscription_end = member.subscription_end;

    let expired = Member {
        is_active: false,
        ..member
    };

    let event = MembershipExpired {
        member_id: expired.id,
        subscription_end,
        expired_at,
        was_active,
    };

    (expired, event)
}
