use crate::domain::{Member, value_objects::MemberId};
use crate::ports::MemberStore;
use std::sync::Arc;

use super::errors::{MemberApplicationError, Result};

/// 会員照会の依存関係
#[derive(Clone)]
pub struct MemberDependencies {
    pub member_store: Arc<dyn MemberStore>,
}

/// 会員を取得する（読み取り専用）
///
/// ストアの結果をそのまま返す。存在しない場合は None。
pub fn get_member(deps: &MemberDependencies, member_id: MemberId) -> Result<Option<Member>> {
    let member = deps
        .member_store
        .get_by_id(member_id)
        .map_err(MemberApplicationError::MemberStoreError)?;

    tracing::debug!(
        member_id = member_id.value(),
        found = member.is_some(),
        "member lookup"
    );

    Ok(member)
}

/// 会員が有効か確認する
///
/// 存在しない会員は無効な会員と同じく false を返す。
/// 呼び出し側は「存在しない」と「無効」を区別できない。
pub fn is_active(deps: &MemberDependencies, member_id: MemberId) -> Result<bool> {
    let member = get_member(deps, member_id)?;
    Ok(member.is_some_and(|m| m.is_active))
}
