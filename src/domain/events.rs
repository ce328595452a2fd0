use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::MemberId;

/// 更新通知の固定メッセージ
pub const SUBSCRIPTION_RENEWED_MESSAGE: &str = "Subscription renewed!";

/// 失効通知の固定メッセージ
pub const MEMBERSHIP_EXPIRED_MESSAGE: &str = "Membership expired";

/// イベント：サブスクリプションが更新された
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscriptionRenewed {
    pub member_id: MemberId,
    pub subscription_end: DateTime<Utc>,
    pub renewed_at: DateTime<Utc>,
    /// 更新前に既に有効だったか（active -> active 遷移）
    pub was_active: bool,
}

/// イベント：会員資格が失効した
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MembershipExpired {
    pub member_id: MemberId,
    pub subscription_end: Option<DateTime<Utc>>,
    pub expired_at: DateTime<Utc>,
    /// 失効前に有効だったか（false なら inactive -> inactive 遷移）
    pub was_active: bool,
}

/// ドメインイベント統合型
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DomainEvent {
    SubscriptionRenewed(SubscriptionRenewed),
    MembershipExpired(MembershipExpired),
}

impl DomainEvent {
    pub fn member_id(&self) -> MemberId {
        match self {
            DomainEvent::SubscriptionRenewed(e) => e.member_id,
            DomainEvent::MembershipExpired(e) => e.member_id,
        }
    }

    /// 会員に送る通知メッセージ
    pub fn notification_message(&self) -> &'static str {
        match self {
            DomainEvent::SubscriptionRenewed(_) => SUBSCRIPTION_RENEWED_MESSAGE,
            DomainEvent::MembershipExpired(_) => MEMBERSHIP_EXPIRED_MESSAGE,
        }
    }
}

impl From<SubscriptionRenewed> for DomainEvent {
    fn from(event: SubscriptionRenewed) -> Self {
        DomainEvent::SubscriptionRenewed(event)
    }
}

impl From<MembershipExpired> for DomainEvent {
    fn from(event: MembershipExpired) -> Self {
        DomainEvent::MembershipExpired(event)
    }
}
