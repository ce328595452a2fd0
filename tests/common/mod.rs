#![allow(dead_code)]

use rusty_membership_ddd::application::member::MemberDependencies;
use rusty_membership_ddd::application::subscription::ServiceDependencies;
use rusty_membership_ddd::domain::{Member, value_objects::*};
use rusty_membership_ddd::ports::*;
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

// ============================================================================
// 呼び出しを記録するテストダブル
// ============================================================================

/// 呼び出しを記録するMemberStore実装
///
/// get_all は id 昇順で返すため、一括処理の順序に依存するテストが書ける。
#[derive(Default)]
pub struct RecordingMemberStore {
    members: Mutex<BTreeMap<MemberId, Member>>,
    get_by_id_calls: Mutex<Vec<MemberId>>,
    updates: Mutex<Vec<Member>>,
    fail_update_for: Mutex<Option<MemberId>>,
}

impl RecordingMemberStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_members(members: impl IntoIterator<Item = Member>) -> Self {
        let store = Self::new();
        for member in members {
            store.add_member(member);
        }
        store
    }

    pub fn add_member(&self, member: Member) {
        self.members.lock().unwrap().insert(member.id, member);
    }

    /// 指定した会員の update を失敗させる
    pub fn fail_update_for(&self, member_id: MemberId) {
        *self.fail_update_for.lock().unwrap() = Some(member_id);
    }

    pub fn stored(&self, member_id: MemberId) -> Option<Member> {
        self.members.lock().unwrap().get(&member_id).cloned()
    }

    pub fn updates(&self) -> Vec<Member> {
        self.updates.lock().unwrap().clone()
    }

    pub fn updates_for(&self, member_id: MemberId) -> usize {
        self.updates
            .lock()
            .unwrap()
            .iter()
            .filter(|m| m.id == member_id)
            .count()
    }

    pub fn get_by_id_calls(&self) -> Vec<MemberId> {
        self.get_by_id_calls.lock().unwrap().clone()
    }
}

impl MemberStore for RecordingMemberStore {
    fn get_by_id(&self, member_id: MemberId) -> member_store::Result<Option<Member>> {
        self.get_by_id_calls.lock().unwrap().push(member_id);
        Ok(self.members.lock().unwrap().get(&member_id).cloned())
    }

    fn get_all(&self) -> member_store::Result<Vec<Member>> {
        Ok(self.members.lock().unwrap().values().cloned().collect())
    }

    fn update(&self, member: Member) -> member_store::Result<()> {
        if *self.fail_update_for.lock().unwrap() == Some(member.id) {
            return Err(format!("update failed for member {}", member.id).into());
        }
        self.updates.lock().unwrap().push(member.clone());
        self.members.lock().unwrap().insert(member.id, member);
        Ok(())
    }
}

/// 常に失敗するMemberStore実装
pub struct UnavailableMemberStore;

impl MemberStore for UnavailableMemberStore {
    fn get_by_id(&self, _member_id: MemberId) -> member_store::Result<Option<Member>> {
        Err("store unavailable".into())
    }

    fn get_all(&self) -> member_store::Result<Vec<Member>> {
        Err("store unavailable".into())
    }

    fn update(&self, _member: Member) -> member_store::Result<()> {
        Err("store unavailable".into())
    }
}

/// 決められた結果を返すPaymentVerifier実装
pub struct ScriptedPaymentVerifier {
    outcome: std::result::Result<bool, String>,
    calls: Mutex<Vec<(MemberId, Money)>>,
}

impl ScriptedPaymentVerifier {
    pub fn accepting() -> Self {
        Self::with_outcome(Ok(true))
    }

    pub fn declining() -> Self {
        Self::with_outcome(Ok(false))
    }

    pub fn failing() -> Self {
        Self::with_outcome(Err("gateway timeout".to_string()))
    }

    fn with_outcome(outcome: std::result::Result<bool, String>) -> Self {
        Self {
            outcome,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<(MemberId, Money)> {
        self.calls.lock().unwrap().clone()
    }
}

impl PaymentVerifier for ScriptedPaymentVerifier {
    fn verify_payment(&self, member_id: MemberId, amount: Money) -> payment_verifier::Result<bool> {
        self.calls.lock().unwrap().push((member_id, amount));
        self.outcome.clone().map_err(Into::into)
    }
}

/// 送信内容を記録するNotifier実装
#[derive(Default)]
pub struct RecordingNotifier {
    sent: Mutex<Vec<(String, MemberId)>>,
    fail: bool,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub fn sent(&self) -> Vec<(String, MemberId)> {
        self.sent.lock().unwrap().clone()
    }

    pub fn sent_to(&self, member_id: MemberId) -> Vec<String> {
        self.sent
            .lock()
            .unwrap()
            .iter()
            .filter(|(_, id)| *id == member_id)
            .map(|(message, _)| message.clone())
            .collect()
    }
}

impl Notifier for RecordingNotifier {
    fn send_notification(&self, message: &str, member_id: MemberId) -> notifier::Result<()> {
        if self.fail {
            return Err("notification channel closed".into());
        }
        self.sent
            .lock()
            .unwrap()
            .push((message.to_string(), member_id));
        Ok(())
    }
}

// ============================================================================
// セットアップヘルパー
// ============================================================================

pub struct Harness {
    pub store: Arc<RecordingMemberStore>,
    pub payment: Arc<ScriptedPaymentVerifier>,
    pub notifier: Arc<RecordingNotifier>,
    pub deps: ServiceDependencies,
}

pub fn harness(
    store: RecordingMemberStore,
    payment: ScriptedPaymentVerifier,
    notifier: RecordingNotifier,
) -> Harness {
    let store = Arc::new(store);
    let payment = Arc::new(payment);
    let notifier = Arc::new(notifier);

    let deps = ServiceDependencies {
        member_store: store.clone(),
        payment_verifier: payment.clone(),
        notifier: notifier.clone(),
    };

    Harness {
        store,
        payment,
        notifier,
        deps,
    }
}

pub fn lookup_deps(store: Arc<RecordingMemberStore>) -> MemberDependencies {
    MemberDependencies {
        member_store: store,
    }
}

pub fn member(
    id: i64,
    name: &str,
    is_active: bool,
    subscription_end: Option<chrono::DateTime<chrono::Utc>>,
) -> Member {
    Member {
        id: MemberId::new(id),
        name: name.to_string(),
        is_active,
        subscription_end,
    }
}
