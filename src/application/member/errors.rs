use thiserror::Error;

/// 会員照会アプリケーション層のエラー
///
/// 照会自体は独自のエラーを持たない。ストアの障害のみをそのまま伝播する。
#[derive(Debug, Error)]
pub enum MemberApplicationError {
    /// MemberStoreのエラー
    #[error("Member store error")]
    MemberStoreError(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// アプリケーション層の Result型
pub type Result<T> = std::result::Result<T, MemberApplicationError>;
