use crate::domain::{self, DomainEvent};
use chrono::Utc;

use super::errors::{Result, SubscriptionApplicationError};
use super::subscription_service::{ServiceDependencies, persist_and_notify};

/// 失効会員の一括無効化バッチ
///
/// 定期的に実行され、終了日を過ぎた会員を無効化して通知する。
///
/// ビジネスルール：
/// - 終了日が存在し、現在時刻より前の会員のみ対象
/// - 既に無効な会員も対象（保存と通知は毎回行う）
/// - 終了日がない会員、終了日が現在時刻以降の会員は一切変更しない
///
/// 処理フロー：
/// 1. ストアから全会員を取得
/// 2. 各会員について失効判定し、対象なら無効化・保存・通知
/// 3. 無効化した件数を返す
///
/// # 障害時の扱い
///
/// トランザクションはない。最初の障害で残りの処理を中断してエラーを返す。
/// 既に保存・通知済みの会員はロールバックしない。
///
/// # 戻り値
/// 無効化した会員の件数
pub fn deactivate_expired_members(deps: &ServiceDependencies) -> Result<usize> {
    let now = Utc::now();
    let mut deactivated_count = 0;

    // 1. 全会員を取得
    let members = deps
        .member_store
        .get_all()
        .map_err(SubscriptionApplicationError::MemberStoreError)?;

    // 2. 各会員について失効判定
    for member in members {
        if !domain::member::is_expired(&member, now) {
            continue;
        }

        let member_id = member.id;
        let (expired, event) = domain::member::expire_membership(member, now);

        tracing::info!(
            member_id = member_id.value(),
            subscription_end = ?event.subscription_end,
            was_active = event.was_active,
            "membership expired"
        );

        if let Err(e) = persist_and_notify(deps, expired, &DomainEvent::from(event)) {
            tracing::error!(
                member_id = member_id.value(),
                deactivated_count,
                "expiration sweep aborted: {}",
                e
            );
            return Err(e);
        }

        deactivated_count += 1;
    }

    Ok(deactivated_count)
}
