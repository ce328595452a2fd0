use crate::domain::{
    self, DomainEvent, Member, RenewSubscriptionError, commands::RenewSubscription,
};
use crate::ports::*;
use chrono::Utc;
use std::sync::Arc;

use super::errors::{Result, SubscriptionApplicationError};

/// サービスの依存関係
///
/// 関数型DDDの原則に従い、データ構造として定義。
/// 振る舞いは持たず、各ユースケース関数に明示的に渡す。
#[derive(Clone)]
pub struct ServiceDependencies {
    pub member_store: Arc<dyn MemberStore>,
    pub payment_verifier: Arc<dyn PaymentVerifier>,
    pub notifier: Arc<dyn Notifier>,
}

/// 変更済みの会員を保存し、イベントに対応する通知を送るヘルパー関数
///
/// renew_subscription と deactivate_expired_members で共通利用される。
/// 保存に失敗した場合は通知しない。
pub(super) fn persist_and_notify(
    deps: &ServiceDependencies,
    member: Member,
    event: &DomainEvent,
) -> Result<()> {
    deps.member_store
        .update(member)
        .map_err(SubscriptionApplicationError::MemberStoreError)?;

    deps.notifier
        .send_notification(event.notification_message(), event.member_id())
        .map_err(SubscriptionApplicationError::NotifierError)?;

    Ok(())
}

/// サブスクリプションを更新する
///
/// ビジネスルール：
/// - 会員が存在すること（存在しなければ MemberNotFound、支払検証は行わない）
/// - 支払が検証されること（拒否なら false を返し、何も変更しない）
/// - 終了日は現在時刻 + days、状態は以前の値にかかわらず有効
///
/// 金額と日数の符号は検証しない。金額の妥当性は PaymentVerifier の責務。
///
/// # 戻り値
/// 更新した場合は true、支払が拒否された場合は false
///
/// # エラー
/// - MemberNotFound: 会員が存在しない
/// - InvalidRenewalPeriod: 終了日が日時の表現範囲外（支払検証後でも保存・通知しない）
/// - MemberStoreError / PaymentVerifierError / NotifierError: 依存先の障害（再試行なし）
pub fn renew_subscription(deps: &ServiceDependencies, cmd: RenewSubscription) -> Result<bool> {
    // 1. 会員の取得
    let member = deps
        .member_store
        .get_by_id(cmd.member_id)
        .map_err(SubscriptionApplicationError::MemberStoreError)?
        .ok_or_else(|| {
            tracing::warn!(
                member_id = cmd.member_id.value(),
                "renewal requested for unknown member"
            );
            SubscriptionApplicationError::MemberNotFound
        })?;

    // 2. 支払の検証
    let payment_verified = deps
        .payment_verifier
        .verify_payment(cmd.member_id, cmd.payment_amount)
        .map_err(SubscriptionApplicationError::PaymentVerifierError)?;

    if !payment_verified {
        tracing::debug!(
            member_id = cmd.member_id.value(),
            amount = %cmd.payment_amount,
            "payment declined, subscription not renewed"
        );
        return Ok(false);
    }

    // 3. ドメイン層の純粋関数を呼び出し
    let (renewed, event) = domain::member::renew_subscription(member, Utc::now(), cmd.days)
        .map_err(|e| match e {
            RenewSubscriptionError::InvalidRenewalPeriod { days } => {
                tracing::warn!(
                    member_id = cmd.member_id.value(),
                    days,
                    "renewal period out of range, subscription not renewed"
                );
                SubscriptionApplicationError::InvalidRenewalPeriod { days }
            }
        })?;

    tracing::info!(
        member_id = event.member_id.value(),
        subscription_end = %event.subscription_end,
        was_active = event.was_active,
        "subscription renewed"
    );

    // 4. 保存と通知
    persist_and_notify(deps, renewed, &DomainEvent::from(event))?;

    Ok(true)
}
