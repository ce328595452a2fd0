use rusty_membership_ddd::{
    adapters::mock::{
        member_store::MemberStore as InMemoryMemberStore,
        notifier::Notifier as MockNotifier,
        payment_verifier::PaymentVerifier as MockPaymentVerifier,
    },
    application::subscription::{ServiceDependencies, deactivate_expired_members},
    domain::Member,
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// 失効会員の一括無効化ジョブ
///
/// MEMBERS_FILE のJSONから会員を読み込み、インメモリストア上で
/// deactivate_expired_members を一度実行する。
fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rusty_membership_ddd=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let members_file =
        std::env::var("MEMBERS_FILE").unwrap_or_else(|_| "members.example.json".into());

    tracing::info!("Members file: {}", members_file);

    let contents = std::fs::read_to_string(&members_file).expect("Failed to read members file");
    let members: Vec<Member> =
        serde_json::from_str(&contents).expect("Failed to parse members file");

    tracing::info!("Loaded {} members", members.len());

    // Initialize adapters
    let member_store = Arc::new(InMemoryMemberStore::with_members(members));
    let notifier = Arc::new(MockNotifier::new());
    let payment_verifier = Arc::new(MockPaymentVerifier::decline_all());

    let deps = ServiceDependencies {
        member_store: member_store.clone(),
        payment_verifier,
        notifier: notifier.clone(),
    };

    let deactivated = deactivate_expired_members(&deps).expect("Expiration sweep failed");

    tracing::info!(
        "Expiration sweep finished: {} deactivated, {} notifications sent",
        deactivated,
        notifier.sent().len()
    );

    for member in member_store.members() {
        tracing::debug!(
            member_id = member.id.value(),
            status = member.status().as_str(),
            subscription_end = ?member.subscription_end,
            "member state after sweep"
        );
    }
}
