use alloy_primitives::{Address, U256};
use nexus_event_gate::{
    types::events::{AccessLevelRegistered, EventRegistered, TransferSingle},
    AccessLevelInfo, AccessLevelSpec, EventKind, GateError,
};

use test_utils::*;

#[cfg(test)]
mod registry_tests {
    use super::*;

    #[test]
    fn test_live_event_registration() {
        let mut context = TestContext::new();
        context.register_live_event(1).expect("Live event registration failed");

        let event = context.gate.event(1).expect("Event lookup failed");
        assert_eq!(event.manager, context.manager());
        assert_eq!(event.gating_token, context.fan_token);
        assert_eq!(event.end_timestamp, context.end_timestamp());
        assert_eq!(event.kind, EventKind::Live.as_u8());
        assert_eq!(event.manager_token_id, context.token_id(1, "EVENT_MANAGER"));

        assert!(context.gate.check_if_caller_is_event_manager(1, context.manager()));
        assert!(!context.gate.check_if_caller_is_event_manager(1, context.buyer()));
        assert_eq!(
            context.gate.get_event_end_timestamp(1),
            Ok(context.end_timestamp())
        );
    }

    #[test]
    fn test_parallel_getters_are_index_aligned() {
        let mut context = TestContext::new();
        context.register_live_event(7).expect("Live event registration failed");

        let names = context.gate.get_access_levels_from_event_id(7);
        let prices = context.gate.get_ticket_prices_from_event_id(7);
        let token_ids = context.gate.get_token_ids_from_event_id(7);

        assert_eq!(names, vec!["GA".to_string(), "VIP".to_string()]);
        assert_eq!(prices, vec![U256::from(10), U256::from(50)]);
        assert_eq!(
            token_ids,
            vec![context.token_id(7, "GA"), context.token_id(7, "VIP")]
        );

        // The structured read carries the same data per record.
        let levels = context.gate.access_levels(7).expect("Access levels lookup failed");
        for (i, level) in levels.iter().enumerate() {
            assert_eq!(level.name, names[i]);
            assert_eq!(level.price, prices[i]);
            assert_eq!(level.token_id, token_ids[i]);
            assert_eq!(level.minted, 0);
        }
    }

    #[test]
    fn test_unknown_event_reads() {
        let context = TestContext::new();

        assert!(context.gate.get_access_levels_from_event_id(404).is_empty());
        assert!(context.gate.get_token_ids_from_event_id(404).is_empty());
        assert!(!context.gate.check_access_level_exists(404, "GA"));
        expect_error(context.gate.access_levels(404), "NotFound");
        expect_error(context.gate.event(404), "NotFound");
        expect_error(context.gate.get_token_id_of_an_event_manager(404), "NotFound");
    }

    #[test]
    fn test_duplicate_event_id_rejected() {
        let mut context = TestContext::new();
        context.register_live_event(1).expect("Live event registration failed");

        let err = context.register_live_event(1).unwrap_err();
        assert!(matches!(err, GateError::Duplicate(_)));
        let err = context.register_community_event(1, 10).unwrap_err();
        assert!(matches!(err, GateError::Duplicate(_)));

        // The first registration is untouched.
        assert_eq!(context.gate.get_access_levels_from_event_id(1).len(), 2);
        assert_eq!(context.gate.event_count(), 1);
    }

    #[test]
    fn test_invalid_registrations_leave_no_trace() {
        let mut context = TestContext::new();
        let ctx = context.call_from(context.manager());
        let (fan_token, manager, end) = (context.fan_token, context.manager(), context.end_timestamp());
        let logged_before = context.gate.logs().len();

        let repeated = vec![
            AccessLevelSpec::new("GA", U256::from(10), 2),
            AccessLevelSpec::new("GA", U256::from(20), 2),
        ];
        expect_error(
            context.gate.register_live_event(&ctx, 2, fan_token, manager, end, &repeated),
            "Duplicate",
        );

        let reserved = vec![AccessLevelSpec::new("EVENT_MANAGER", U256::ZERO, 2)];
        expect_error(
            context.gate.register_live_event(&ctx, 2, fan_token, manager, end, &reserved),
            "Duplicate",
        );

        let zero_limit = vec![
            AccessLevelSpec::new("GA", U256::from(10), 2),
            AccessLevelSpec::new("VIP", U256::from(50), 0),
        ];
        expect_error(
            context.gate.register_live_event(&ctx, 2, fan_token, manager, end, &zero_limit),
            "InvalidInput",
        );

        expect_error(
            context.gate.register_live_event(&ctx, 2, fan_token, manager, end, &[]),
            "InvalidInput",
        );
        expect_error(
            context.gate.register_live_event(
                &ctx,
                2,
                Address::from([0xcdu8; 20]),
                manager,
                end,
                &TestContext::ga_vip(),
            ),
            "Gating token is not a supported fan token",
        );
        expect_error(
            context.gate.register_live_event(
                &ctx,
                2,
                fan_token,
                Address::ZERO,
                end,
                &TestContext::ga_vip(),
            ),
            "Invalid manager address",
        );
        expect_error(
            context.gate.register_community_event(&ctx, 2, fan_token, manager, START, 10),
            "End timestamp must be in the future",
        );
        expect_error(
            context.gate.register_community_event(&ctx, 2, fan_token, manager, end, 0),
            "Ticket limit must be positive",
        );

        assert!(context.gate.event(2).is_err());
        assert!(!context.gate.check_access_level_exists(2, "GA"));
        assert_eq!(context.gate.total_supply(), U256::ZERO);
        assert_eq!(context.gate.logs().len(), logged_before);
    }

    #[test]
    fn test_array_registration_requires_matching_lengths() {
        let mut context = TestContext::new();
        let ctx = context.call_from(context.manager());
        let (fan_token, manager, end) = (context.fan_token, context.manager(), context.end_timestamp());
        let names = vec!["GA".to_string(), "VIP".to_string()];

        expect_error(
            context.gate.register_live_event_from_arrays(
                &ctx,
                3,
                fan_token,
                manager,
                end,
                &names,
                &[U256::from(10)],
                &[2, 1],
            ),
            "Unmatched array length",
        );

        context
            .gate
            .register_live_event_from_arrays(
                &ctx,
                3,
                fan_token,
                manager,
                end,
                &names,
                &[U256::from(10), U256::from(50)],
                &[2, 1],
            )
            .expect("Array registration failed");
        assert_eq!(context.gate.get_access_levels_from_event_id(3), names);
    }

    #[test]
    fn test_registration_logs() {
        let mut context = TestContext::new();
        context.register_live_event(5).expect("Live event registration failed");

        let registered = context.gate.logs().decode::<EventRegistered>();
        assert_event_emitted(
            EventRegistered {
                event_id: 5,
                manager: context.manager(),
                end_timestamp: context.end_timestamp(),
            },
            &registered,
        );

        let levels = context.gate.logs().decode::<AccessLevelRegistered>();
        assert_eq!(levels.len(), 2);
        assert_eq!(levels[1].access_level, "VIP");
        assert_eq!(levels[1].token_id, context.token_id(5, "VIP"));

        // Manager badge
        let badge = context.gate.logs().decode::<TransferSingle>();
        assert_eq!(badge.len(), 1);
        assert_eq!(badge[0].to, context.manager());
        assert_eq!(badge[0].id, context.token_id(5, "EVENT_MANAGER"));
        assert_eq!(
            context
                .gate
                .balance_of(context.manager(), context.token_id(5, "EVENT_MANAGER")),
            U256::from(1)
        );
    }

    #[test]
    fn test_community_event_single_free_tier() {
        let mut context = TestContext::new();
        context
            .register_community_event(9, 25)
            .expect("Community event registration failed");

        let manager_token = context
            .gate
            .get_token_id_of_an_event_manager(9)
            .expect("Manager token lookup failed");
        assert_eq!(manager_token, context.token_id(9, "EVENT_MANAGER"));

        let levels = context.gate.access_levels(9).expect("Access levels lookup failed");
        assert_eq!(
            levels,
            vec![AccessLevelInfo {
                name: "EVENT_MANAGER".to_string(),
                token_id: manager_token,
                price: U256::ZERO,
                ticket_limit: 25,
                minted: 0,
            }]
        );
        assert_eq!(context.gate.get_ticket_limit(manager_token), Ok(25));
        assert_eq!(context.gate.get_remaining_tickets(manager_token), Ok(25));
    }

    #[test]
    fn test_register_new_access_level() {
        let mut context = TestContext::new();
        context.register_live_event(1).expect("Live event registration failed");
        let manager = context.call_from(context.manager());

        let token_id = context
            .gate
            .register_new_access_level(&manager, 1, "Backstage", U256::from(200), 5)
            .expect("New access level failed");
        assert_eq!(token_id, context.token_id(1, "Backstage"));
        assert_eq!(
            context.gate.get_access_levels_from_event_id(1),
            vec!["GA", "VIP", "Backstage"]
        );
        assert_eq!(
            context.gate.get_ticket_price_from_token_id(token_id),
            Ok(U256::from(200))
        );
        assert_eq!(
            context.gate.get_token_id_of_access_level(1, "Backstage"),
            Ok(token_id)
        );

        expect_error(
            context
                .gate
                .register_new_access_level(&manager, 1, "VIP", U256::from(1), 1),
            "Duplicate",
        );
        expect_error(
            context
                .gate
                .register_new_access_level(&manager, 99, "Floor", U256::from(1), 1),
            "NotFound",
        );

        let stranger = context.call_from(context.stranger());
        expect_error(
            context
                .gate
                .register_new_access_level(&stranger, 1, "Floor", U256::from(1), 1),
            "User is not an event manager",
        );

        context.advance_time(8 * DAY);
        let late = context.call_from(context.manager());
        expect_error(
            context
                .gate
                .register_new_access_level(&late, 1, "Floor", U256::from(1), 1),
            "Expired",
        );
    }

    #[test]
    fn test_community_event_rejects_extra_tiers() {
        let mut context = TestContext::new();
        context
            .register_community_event(4, 10)
            .expect("Community event registration failed");
        let manager = context.call_from(context.manager());

        expect_error(
            context
                .gate
                .register_new_access_level(&manager, 4, "VIP", U256::from(1), 1),
            "Community events have a single access level",
        );
    }

    #[test]
    fn test_events_managed_by() {
        let mut context = TestContext::new();
        context.register_live_event(3).expect("Live event registration failed");
        context
            .register_community_event(1, 10)
            .expect("Community event registration failed");

        assert_eq!(context.gate.events_managed_by(context.manager()), vec![3, 1]);
        assert!(context.gate.events_managed_by(context.buyer()).is_empty());
    }
}
