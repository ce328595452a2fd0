use crate::domain::{Member, value_objects::MemberId};

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// 会員ストアポート
///
/// 会員データの永続化を抽象化する。会員の作成と削除はストア側の責務で、
/// このコンテキストは読み取りと更新のみを行う。
/// 同一会員への並行更新の扱い（後勝ち・楽観ロック等）も実装側が決める。
pub trait MemberStore: Send + Sync {
    /// IDで会員を取得する
    ///
    /// 呼び出し側は所有権を持つコピーを受け取り、自由に変更できる。
    fn get_by_id(&self, member_id: MemberId) -> Result<Option<Member>>;

    /// すべての会員を取得する
    ///
    /// 順序は規定しない。失効会員の一括無効化に使用される。
    fn get_all(&self) -> Result<Vec<Member>>;

    /// 会員を保存する
    ///
    /// 変更済みの会員の所有権をストアに移す。
    fn update(&self, member: Member) -> Result<()>;
}
