//! Tests for the access context

use core_kernel::{Identity, Timestamp};
use domain_access::{AccessContext, AccessError, AccessEvent, Role};

const AT: Timestamp = Timestamp::from_secs(1_700_000_000);

struct Roles {
    owner: Identity,
    insurer: Identity,
    stranger: Identity,
}

fn setup() -> (AccessContext, Roles) {
    let roles = Roles {
        owner: Identity::new(),
        insurer: Identity::new(),
        stranger: Identity::new(),
    };
    let ctx = AccessContext::new(roles.owner, roles.insurer).unwrap();
    (ctx, roles)
}

mod insurer_rotation {
    use super::*;

    #[test]
    fn test_owner_can_rotate_insurer() {
        let (mut ctx, roles) = setup();
        let replacement = Identity::new();

        let event = ctx.set_insurer(roles.owner, replacement, AT).unwrap();

        assert_eq!(ctx.insurer(), replacement);
        assert_eq!(
            event,
            AccessEvent::InsurerChanged {
                previous_insurer: roles.insurer,
                new_insurer: replacement,
                timestamp: AT,
            }
        );
    }

    #[test]
    fn test_rotation_takes_effect_immediately() {
        let (mut ctx, roles) = setup();
        let replacement = Identity::new();

        assert!(ctx.ensure_insurer(roles.insurer).is_ok());
        ctx.set_insurer(roles.owner, replacement, AT).unwrap();

        assert!(ctx.ensure_insurer(roles.insurer).is_err());
        assert!(ctx.ensure_insurer(replacement).is_ok());
    }

    #[test]
    fn test_insurer_cannot_rotate_itself() {
        let (mut ctx, roles) = setup();
        let result = ctx.set_insurer(roles.insurer, Identity::new(), AT);

        assert_eq!(
            result,
            Err(AccessError::Unauthorized {
                caller: roles.insurer,
                required: Role::Owner,
            })
        );
    }

    #[test]
    fn test_null_insurer_rejected() {
        let (mut ctx, roles) = setup();
        assert_eq!(
            ctx.set_insurer(roles.owner, Identity::NULL, AT),
            Err(AccessError::NullIdentity("insurer"))
        );
        assert_eq!(ctx.insurer(), roles.insurer);
    }
}

mod ownership {
    use super::*;

    #[test]
    fn test_transfer_ownership() {
        let (mut ctx, roles) = setup();
        let heir = Identity::new();

        ctx.transfer_ownership(roles.owner, heir, AT).unwrap();

        assert_eq!(ctx.owner(), heir);
        assert!(ctx.ensure_owner(roles.owner).is_err());
        assert!(ctx.set_insurer(heir, Identity::new(), AT).is_ok());
    }

    #[test]
    fn test_only_owner_transfers() {
        let (mut ctx, roles) = setup();
        assert!(matches!(
            ctx.transfer_ownership(roles.stranger, roles.stranger, AT),
            Err(AccessError::Unauthorized { required: Role::Owner, .. })
        ));
    }

    #[test]
    fn test_null_owner_rejected() {
        let (mut ctx, roles) = setup();
        assert_eq!(
            ctx.transfer_ownership(roles.owner, Identity::NULL, AT),
            Err(AccessError::NullIdentity("owner"))
        );
    }
}

mod circuit_breaker {
    use super::*;

    #[test]
    fn test_defaults_to_unpaused() {
        let (ctx, _) = setup();
        assert!(!ctx.is_paused());
        assert!(ctx.ensure_not_paused().is_ok());
    }

    #[test]
    fn test_pause_and_unpause() {
        let (mut ctx, roles) = setup();

        let event = ctx.pause(roles.owner, AT).unwrap();
        assert_eq!(event.event_type(), "Paused");
        assert_eq!(ctx.ensure_not_paused(), Err(AccessError::Paused));

        let event = ctx.unpause(roles.owner, AT).unwrap();
        assert_eq!(event.event_type(), "Unpaused");
        assert!(ctx.ensure_not_paused().is_ok());
    }

    #[test]
    fn test_insurer_cannot_pause() {
        let (mut ctx, roles) = setup();
        assert!(ctx.pause(roles.insurer, AT).is_err());
        assert!(!ctx.is_paused());
    }

    #[test]
    fn test_unpause_when_running_fails() {
        let (mut ctx, roles) = setup();
        assert_eq!(ctx.unpause(roles.owner, AT), Err(AccessError::NotPaused));
    }

    #[test]
    fn test_events_serialize() {
        let (mut ctx, roles) = setup();
        let event = ctx.pause(roles.owner, AT).unwrap();

        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("Paused"));
        assert_eq!(event.timestamp(), AT);
    }
}
