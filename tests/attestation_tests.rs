use alloy_primitives::U256;
use eyre::Result;
use nexus_event_gate::{
    attestation::AttestationId, EventDraft, GateConfig, GateError, RegistrationWorkflow,
    SharedEventGate, WorkflowState,
};

use test_utils::*;

fn live_draft(context: &TestContext) -> EventDraft {
    EventDraft::live(
        "Matchday Live",
        context.fan_token,
        context.manager(),
        context.end_timestamp(),
        TestContext::ga_vip(),
    )
    .with_location("Camp Nou, Barcelona")
    .with_start_timestamp(context.current_timestamp + DAY)
    .with_metadata("Season opener")
}

#[cfg(test)]
mod attestation_tests {
    use super::*;

    #[tokio::test]
    async fn test_attest_then_register() -> Result<()> {
        let mut context = TestContext::new();
        let service = MockAttestationService::returning("0x1d");
        let mut workflow = RegistrationWorkflow::new(live_draft(&context));

        assert!(!workflow.can_register());
        let attestation_id = workflow.attest(&service, &GateConfig::default()).await?;
        assert_eq!(attestation_id, AttestationId(0x1d));
        assert!(workflow.can_register());

        let ctx = context.call_from(context.manager());
        let event_id = workflow.register(&mut context.gate, &ctx)?;
        assert_eq!(event_id, 0x1d);
        assert_eq!(workflow.state(), &WorkflowState::Registered { event_id: 0x1d });
        assert_eq!(
            context.gate.get_ticket_prices_from_event_id(0x1d),
            vec![U256::from(10), U256::from(50)]
        );

        let requests = service.requests.lock().await;
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].schema_id, "onchain_evm_88882_0x1d");
        let body: serde_json::Value = serde_json::from_str(&requests[0].data)?;
        assert_eq!(body["name"], "Matchday Live");
        assert_eq!(body["eventType"], "live");
        assert_eq!(body["ticketLimit"], 3);
        Ok(())
    }

    #[tokio::test]
    async fn test_failed_attestation_keeps_registration_disabled() {
        let mut context = TestContext::new();
        let service = MockAttestationService::failing("network unreachable");
        let mut workflow = RegistrationWorkflow::new(live_draft(&context));

        let err = workflow
            .attest(&service, &GateConfig::default())
            .await
            .unwrap_err();
        assert!(matches!(err, GateError::ExternalDependencyFailure(_)));
        assert_eq!(workflow.state(), &WorkflowState::Draft);
        assert!(!workflow.can_register());

        let ctx = context.call_from(context.manager());
        expect_error(
            workflow.register(&mut context.gate, &ctx),
            "Event must be attested before registration",
        );
        assert_eq!(context.gate.event_count(), 0);
    }

    #[tokio::test]
    async fn test_empty_attestation_id_is_a_failure() {
        let context = TestContext::new();
        let service = MockAttestationService::returning("");
        let mut workflow = RegistrationWorkflow::new(live_draft(&context));

        expect_error(
            workflow.attest(&service, &GateConfig::default()).await,
            "Attestation service returned no id",
        );
        assert!(!workflow.can_register());
    }

    #[tokio::test]
    async fn test_failed_registration_orphans_attestation() -> Result<()> {
        let mut context = TestContext::new();
        context.register_community_event(0x2a, 10)?;

        let service = MockAttestationService::returning("0x2a");
        let mut workflow = RegistrationWorkflow::new(live_draft(&context));
        workflow.attest(&service, &GateConfig::default()).await?;

        let ctx = context.call_from(context.manager());
        let err = workflow.register(&mut context.gate, &ctx).unwrap_err();
        assert!(matches!(err, GateError::Duplicate(_)));
        match workflow.state() {
            WorkflowState::Orphaned {
                attestation_id,
                reason,
            } => {
                assert_eq!(*attestation_id, AttestationId(0x2a));
                assert_eq!(reason, &err);
            }
            other => panic!("Expected orphaned workflow, got {:?}", other),
        }

        // No automatic retry, and no second registration attempt.
        expect_error(workflow.register(&mut context.gate, &ctx), "must be attested");
        assert_eq!(service.call_count(), 1);

        // Manual recovery: restart and re-attest under a fresh id.
        workflow.restart()?;
        assert_eq!(workflow.state(), &WorkflowState::Draft);
        let fresh = MockAttestationService::returning("0x2b");
        workflow.attest(&fresh, &GateConfig::default()).await?;
        assert_eq!(workflow.register(&mut context.gate, &ctx)?, 0x2b);
        Ok(())
    }

    #[tokio::test]
    async fn test_attested_workflow_cannot_be_reattested() -> Result<()> {
        let context = TestContext::new();
        let service = MockAttestationService::returning("0x01");
        let mut workflow = RegistrationWorkflow::new(live_draft(&context));
        workflow.attest(&service, &GateConfig::default()).await?;

        expect_error(
            workflow.attest(&service, &GateConfig::default()).await,
            "Only a draft can be attested",
        );
        expect_error(workflow.restart(), "Only an orphaned workflow can be restarted");
        assert_eq!(service.call_count(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn test_invalid_draft_never_reaches_service() {
        let context = TestContext::new();
        let service = MockAttestationService::returning("0x01");
        let draft = EventDraft::live(
            "   ",
            context.fan_token,
            context.manager(),
            context.end_timestamp(),
            TestContext::ga_vip(),
        );
        let mut workflow = RegistrationWorkflow::new(draft);

        expect_error(
            workflow.attest(&service, &GateConfig::default()).await,
            "Event name is required",
        );
        assert_eq!(service.call_count(), 0);
    }

    #[tokio::test]
    async fn test_location_is_bounded_by_config() -> Result<()> {
        let context = TestContext::new();
        let service = MockAttestationService::returning("0x05");
        let config = GateConfig::from_json(r#"{ "maxLocationLen": 8 }"#)?;
        let mut workflow = RegistrationWorkflow::new(live_draft(&context));
        workflow.attest(&service, &config).await?;

        let requests = service.requests.lock().await;
        let body: serde_json::Value = serde_json::from_str(&requests[0].data)?;
        assert_eq!(body["location"], "Camp Nou");
        Ok(())
    }

    #[tokio::test]
    async fn test_register_through_shared_gate() -> Result<()> {
        let context = TestContext::new();
        let draft = EventDraft::community(
            "Supporters Meetup",
            context.fan_token,
            context.manager(),
            context.end_timestamp(),
            40,
        );
        let ctx = context.call_from(context.manager());
        let shared = SharedEventGate::new(context.gate);

        let service = MockAttestationService::returning("0xbeef");
        let mut workflow = RegistrationWorkflow::new(draft);
        workflow.attest(&service, &GateConfig::default()).await?;
        let event_id = workflow.register_shared(&shared, &ctx).await?;

        assert_eq!(event_id, 0xbeef);
        let limit = shared
            .read(|gate| {
                gate.get_token_id_of_an_event_manager(event_id)
                    .and_then(|token_id| gate.get_ticket_limit(token_id))
            })
            .await?;
        assert_eq!(limit, 40);
        Ok(())
    }

    #[tokio::test]
    async fn test_publish_links_document_to_parent() -> Result<()> {
        let mut context = TestContext::new();
        let service = MockAttestationService::returning("0x77");
        let store = MockCmsStore::default();
        let mut workflow = RegistrationWorkflow::new(live_draft(&context));

        expect_error(workflow.publish(&store, "club-1").await, "registered");

        workflow.attest(&service, &GateConfig::default()).await?;
        let ctx = context.call_from(context.manager());
        workflow.register(&mut context.gate, &ctx)?;
        let document_id = workflow.publish(&store, "club-1").await?;

        let documents = store.documents.lock().await;
        assert_eq!(documents.len(), 1);
        assert_eq!(documents[0]["_type"], "events");
        assert_eq!(documents[0]["eventId"], 0x77);

        let references = store.references.lock().await;
        let (parent, field, reference) = &references[0];
        assert_eq!(parent, "club-1");
        assert_eq!(field, "events");
        assert_eq!(reference.kind, "reference");
        assert_eq!(reference.target, document_id);
        assert!(!reference.key.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_publish_failure_is_external() -> Result<()> {
        let mut context = TestContext::new();
        let service = MockAttestationService::returning("0x78");
        let store = MockCmsStore {
            fail_writes: true,
            ..Default::default()
        };
        let mut workflow = RegistrationWorkflow::new(live_draft(&context));
        workflow.attest(&service, &GateConfig::default()).await?;
        let ctx = context.call_from(context.manager());
        workflow.register(&mut context.gate, &ctx)?;

        expect_error(workflow.publish(&store, "club-1").await, "CMS write failed");
        // The on-chain registration stands.
        assert!(context.gate.event(0x78).is_ok());
        Ok(())
    }
}
