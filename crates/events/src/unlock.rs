//! Unlock event publication (PRD-25).
//!
//! Adapts the engine's [`UnlockEvent`]s into [`DomainEvent`]s and fans
//! them out on the bus. The engine emits each unlock exactly once, so a
//! consumer sees at most one `achievement.unlocked` per user per
//! achievement; the embedded `event_id` lets downstream delivery
//! deduplicate replays on its side.

use serde_json::json;
use tipjar_core::evaluation::UnlockEvent;

use crate::bus::{DomainEvent, EventBus, EVENT_ACHIEVEMENT_UNLOCKED};

/// Build the bus envelope for one unlock.
pub fn unlock_event(unlock: &UnlockEvent) -> DomainEvent {
    DomainEvent::new(EVENT_ACHIEVEMENT_UNLOCKED)
        .with_subject("achievement", unlock.achievement_id.clone())
        .with_user(unlock.user_id)
        .with_payload(json!({
            "event_id": unlock.event_id,
            "tier": unlock.tier,
            "xp_awarded": unlock.xp_awarded,
            "unlocked_at": unlock.unlocked_at,
        }))
}

/// Publish every unlock from an evaluation pass.
pub fn publish_unlocks(bus: &EventBus, unlocks: &[UnlockEvent]) {
    for unlock in unlocks {
        tracing::debug!(
            achievement_id = %unlock.achievement_id,
            user_id = unlock.user_id,
            xp = unlock.xp_awarded,
            "Publishing unlock event"
        );
        bus.publish(unlock_event(unlock));
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
