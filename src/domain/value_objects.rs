use serde::{Deserialize, Serialize};
use std::fmt;

/// 会員ID - 会員管理コンテキストの集約ID
///
/// 会員の作成は外部ストアの責務であり、このクレートはIDを発行しない。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MemberId(i64);

impl MemberId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 支払金額（最小通貨単位、例: セント）
///
/// 符号は検証しない。金額の妥当性は支払検証側の責務であり、
/// 負の金額もそのまま PaymentVerifier に渡される。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    const MINOR_UNITS_PER_MAJOR: i64 = 100;

    pub fn from_minor_units(minor_units: i64) -> Self {
        Self(minor_units)
    }

    /// 主通貨単位から作成する
    ///
    /// 最小通貨単位に換算して i64 に収まらない場合は None。
    pub fn from_major_units(major_units: i64) -> Option<Self> {
        major_units
            .checked_mul(Self::MINOR_UNITS_PER_MAJOR)
            .map(Self)
    }

    pub fn minor_units(&self) -> i64 {
        self.0
    }

    pub fn is_negative(&self) -> bool {
        self.0 < 0
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.is_negative() { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let per_major = Self::MINOR_UNITS_PER_MAJOR as u64;
        write!(f, "{}{}.{:02}", sign, abs / per_major, abs % per_major)
    }
}

/// 会員の活動状態
///
/// is_active フラグから導出される。subscription_end との整合性は
/// ライフサイクル操作の実行時にのみ保証される。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberStatus {
    /// 有効
    Active,
    /// 無効
    Inactive,
}

impl MemberStatus {
    pub fn from_flag(is_active: bool) -> Self {
        if is_active {
            MemberStatus::Active
        } else {
            MemberStatus::Inactive
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, MemberStatus::Active)
    }

    /// 文字列表現を取得する
    pub fn as_str(&self) -> &'static str {
        match self {
            MemberStatus::Active => "active",
            MemberStatus::Inactive => "inactive",
        }
    }
}

impl std::str::FromStr for MemberStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(MemberStatus::Active),
            "inactive" => Ok(MemberStatus::Inactive),
            _ => Err(format!("Invalid member status: {}", s)),
        }
    }
}
