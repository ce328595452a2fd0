use crate::domain::{Member, value_objects::MemberId};
use crate::ports::member_store::{MemberStore as MemberStoreTrait, Result};
use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// In-memory implementation of MemberStore
///
/// Members are keyed by id and handed out as owned clones,
/// so callers never alias the stored instance. A poisoned lock is
/// recovered; every write replaces a whole entry.
pub struct MemberStore {
    members: Mutex<BTreeMap<MemberId, Member>>,
}

impl MemberStore {
    pub fn new() -> Self {
        Self {
            members: Mutex::new(BTreeMap::new()),
        }
    }

    /// Build a store pre-populated with the given members
    pub fn with_members(members: impl IntoIterator<Item = Member>) -> Self {
        let store = Self::new();
        for member in members {
            store.add_member(member);
        }
        store
    }

    /// Add or replace a member (stands in for creation in the external store)
    pub fn add_member(&self, member: Member) {
        self.lock().insert(member.id, member);
    }

    /// Snapshot of all stored members ordered by id
    pub fn members(&self) -> Vec<Member> {
        self.lock().values().cloned().collect()
    }

    fn lock(&self) -> MutexGuard<'_, BTreeMap<MemberId, Member>> {
        self.members.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for MemberStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemberStoreTrait for MemberStore {
    fn get_by_id(&self, member_id: MemberId) -> Result<Option<Member>> {
        Ok(self.lock().get(&member_id).cloned())
    }

    fn get_all(&self) -> Result<Vec<Member>> {
        Ok(self.lock().values().cloned().collect())
    }

    /// Last write wins; updating an unknown id is a persistence failure
    fn update(&self, member: Member) -> Result<()> {
        let mut members = self.lock();
        match members.get_mut(&member.id) {
            Some(stored) => {
                *stored = member;
                Ok(())
            }
            None => Err(format!("member {} does not exist in store", member.id).into()),
        }
    }
}
