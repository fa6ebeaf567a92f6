//! # teamgate-core
//!
//! The authorization decision engine for teamgate.
//!
//! This crate provides:
//! - The two core traits (`Authorizer`, `DecisionSink`)
//! - `AuthorizationEngine`, the registry-backed `Authorizer`
//! - `Guard`, which enforces and records decisions for route handlers
//!
//! ## Usage
//!
//! ```rust,ignore
//! use teamgate_contracts::Capability;
//! use teamgate_core::{AuthorizationEngine, traits::Authorizer};
//!
//! let engine = AuthorizationEngine::builtin();
//! if engine.has_capability(user.as_ref(), Capability::AddPlayer) {
//!     // render the "Add player" button
//! }
//! ```

pub mod engine;
pub mod guard;
pub mod traits;

pub use engine::{has_role, AuthorizationEngine};
pub use guard::{Guard, GuardError};
pub use traits::{Authorizer, DecisionSink};

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use teamgate_contracts::{
        AuthzError, AuthzResult, Capability, Decision, DecisionRecord, ErrorKind,
        OrganizationId, ResolvedUser, Role, Scope, TeamId, UserId,
    };
    use teamgate_registry::Registry;

    use crate::{has_role, AuthorizationEngine, Authorizer, DecisionSink, Guard, GuardError};

    // ── Helpers ──────────────────────────────────────────────────────────────

    fn user(role: Role) -> ResolvedUser {
        ResolvedUser::new(UserId::new(), role, OrganizationId::new())
    }

    fn admin() -> ResolvedUser {
        user(Role::Coach).with_admin(true)
    }

    fn superadmin() -> ResolvedUser {
        user(Role::Player).with_superadmin(true)
    }

    /// A sink that keeps every record for later inspection.
    #[derive(Clone, Default)]
    struct MockSink {
        records: Arc<Mutex<Vec<DecisionRecord>>>,
    }

    impl DecisionSink for MockSink {
        fn record(&self, record: &DecisionRecord) -> AuthzResult<()> {
            self.records.lock().unwrap().push(record.clone());
            Ok(())
        }
    }

    /// A sink whose writes always fail.
    struct BrokenSink;

    impl DecisionSink for BrokenSink {
        fn record(&self, _record: &DecisionRecord) -> AuthzResult<()> {
            Err(AuthzError::AuditWriteFailed {
                reason: "disk full".to_string(),
            })
        }
    }

    fn guard_with(sink: MockSink) -> Guard {
        Guard::new(Box::new(AuthorizationEngine::builtin()), Box::new(sink))
    }

    // ── Fail-closed default ──────────────────────────────────────────────────

    #[test]
    fn anonymous_is_denied_every_capability() {
        let engine = AuthorizationEngine::builtin();
        for capability in Capability::ALL {
            assert!(!engine.has_capability(None, capability));
            assert!(matches!(
                engine.require_capability(None, capability),
                Err(AuthzError::Unauthorized)
            ));
        }
        assert!(engine.effective_capabilities(None).is_empty());
    }

    // ── Elevated precedence ──────────────────────────────────────────────────

    #[test]
    fn superadmin_holds_every_capability() {
        let engine = AuthorizationEngine::builtin();
        let superadmin = superadmin();
        for capability in Capability::ALL {
            assert!(engine.has_capability(Some(&superadmin), capability));
        }
    }

    /// The superadmin flag bypasses the registry entirely, even an empty one.
    #[test]
    fn superadmin_bypasses_empty_registry() {
        let engine = AuthorizationEngine::new(Arc::new(Registry::from_toml_str("").unwrap()));
        let superadmin = superadmin();
        for capability in Capability::ALL {
            assert!(engine.has_capability(Some(&superadmin), capability));
        }
        assert!(!engine.has_capability(Some(&user(Role::Coach)), Capability::AddPlayer));
    }

    #[test]
    fn admin_holds_everything_but_superadmin_exclusives() {
        let engine = AuthorizationEngine::builtin();
        let admin = admin();
        for capability in Capability::ALL {
            assert_eq!(
                engine.has_capability(Some(&admin), capability),
                !capability.is_superadmin_exclusive(),
                "admin check for {capability}"
            );
        }
    }

    #[test]
    fn admin_flag_wins_over_primary_role() {
        let engine = AuthorizationEngine::builtin();
        let player_admin = user(Role::Player).with_admin(true);
        assert!(engine.has_capability(Some(&player_admin), Capability::ManageCoaches));
        assert!(!engine.has_capability(Some(&player_admin), Capability::ManageSubscription));
    }

    #[test]
    fn admin_exclusive_denial_is_forbidden() {
        let engine = AuthorizationEngine::builtin();
        match engine.require_capability(Some(&admin()), Capability::ManagePhilosophyPack) {
            Err(AuthzError::Forbidden { capability, reason }) => {
                assert_eq!(capability, "manage_philosophy_pack");
                assert!(reason.contains("superadmins"));
            }
            other => panic!("expected Forbidden, got {:?}", other),
        }
    }

    #[test]
    fn superadmin_is_superset_of_admin_is_superset_of_roles() {
        let engine = AuthorizationEngine::builtin();
        let super_caps = engine.effective_capabilities(Some(&superadmin()));
        let admin_caps = engine.effective_capabilities(Some(&admin()));
        assert!(admin_caps.is_subset(&super_caps));
        for role in Role::ALL.into_iter().filter(|r| !r.is_elevated()) {
            let caps = engine.effective_capabilities(Some(&user(role)));
            assert!(caps.is_subset(&admin_caps), "admin must cover {role}");
        }
    }

    // ── Role-scoped grants ───────────────────────────────────────────────────

    #[test]
    fn role_scoped_grants() {
        let engine = AuthorizationEngine::builtin();
        let coach = user(Role::Coach);
        let player = user(Role::Player);

        assert!(engine.has_capability(Some(&coach), Capability::AddPlayer));
        assert!(!engine.has_capability(Some(&coach), Capability::ManageCoaches));
        assert!(engine.has_capability(Some(&player), Capability::ViewOwnDevelopmentPlans));
        assert!(!engine.has_capability(Some(&player), Capability::AddPlayer));
    }

    #[test]
    fn non_elevated_users_follow_the_registry_exactly() {
        let engine = AuthorizationEngine::builtin();
        let registry = Registry::builtin();
        for role in Role::ALL {
            let someone = user(role);
            for capability in Capability::ALL {
                assert_eq!(
                    engine.has_capability(Some(&someone), capability),
                    registry.grants(role, capability),
                    "{role} / {capability}"
                );
            }
        }
    }

    // ── require_capability ───────────────────────────────────────────────────

    #[test]
    fn require_capability_allows_and_denies() {
        let engine = AuthorizationEngine::builtin();
        let coach = user(Role::Coach);
        assert!(engine.require_capability(Some(&coach), Capability::AddObservation).is_ok());

        let err = engine
            .require_capability(Some(&coach), Capability::ManageOrganizations)
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Forbidden);
        assert_eq!(err.status_code(), 403);
    }

    // ── Named (wire value) checks ────────────────────────────────────────────

    #[test]
    fn unknown_capability_name_is_false_not_error() {
        let engine = AuthorizationEngine::builtin();
        assert!(!engine.has_capability_named(Some(&superadmin()), "player:write"));
        assert!(engine.has_capability_named(Some(&user(Role::Coach)), "add_player"));
    }

    #[test]
    fn require_unknown_capability_name_is_capability_not_found() {
        let engine = AuthorizationEngine::builtin();
        // Reported even for anonymous callers: the request itself is malformed.
        match engine.require_capability_named(None, "delete_everything") {
            Err(AuthzError::CapabilityNotFound { value }) => {
                assert_eq!(value, "delete_everything")
            }
            other => panic!("expected CapabilityNotFound, got {:?}", other),
        }
        assert_eq!(
            engine
                .require_capability_named(Some(&user(Role::Coach)), "add_player")
                .unwrap(),
            Capability::AddPlayer
        );
    }

    // ── has_role ─────────────────────────────────────────────────────────────

    #[test]
    fn has_role_escape_hatches() {
        let superadmin = superadmin();
        assert!(has_role(Some(&superadmin), Role::Admin));
        assert!(has_role(Some(&superadmin), Role::Superadmin));
        assert!(has_role(Some(&superadmin), Role::Player));
        assert!(!has_role(Some(&superadmin), Role::Coach));

        let admin = admin();
        assert!(has_role(Some(&admin), Role::Admin));
        assert!(has_role(Some(&admin), Role::Coach));
        assert!(!has_role(Some(&admin), Role::Superadmin));

        assert!(has_role(Some(&user(Role::Superadmin)), Role::Admin));
        assert!(!has_role(None, Role::Player));
    }

    #[test]
    fn has_role_via_trait_matches_free_function() {
        let engine = AuthorizationEngine::builtin();
        let parent = user(Role::Parent);
        for role in Role::ALL {
            assert_eq!(engine.has_role(Some(&parent), role), has_role(Some(&parent), role));
        }
    }

    // ── Scope enforcement ────────────────────────────────────────────────────

    #[test]
    fn scoped_check_rejects_other_organizations() {
        let engine = AuthorizationEngine::builtin();
        let coach = user(Role::Coach);
        let home = Scope::organization(coach.organization_id);
        let foreign = Scope::organization(OrganizationId::new());

        assert!(engine.has_capability_in(Some(&coach), Capability::AddPlayer, &home));
        assert!(!engine.has_capability_in(Some(&coach), Capability::AddPlayer, &foreign));

        // Admins are bound to their organization too.
        let admin = admin();
        assert!(!engine.has_capability_in(
            Some(&admin),
            Capability::ManageCoaches,
            &Scope::organization(OrganizationId::new())
        ));

        // Superadmins are not.
        assert!(engine.has_capability_in(Some(&superadmin()), Capability::AddPlayer, &foreign));
    }

    #[test]
    fn scoped_check_rejects_other_teams() {
        let engine = AuthorizationEngine::builtin();
        let team = TeamId::new();
        let coach = user(Role::Coach).with_team(team);
        let own_team = Scope::organization(coach.organization_id).with_team(team);
        let other_team = Scope::organization(coach.organization_id).with_team(TeamId::new());

        assert!(engine.has_capability_in(Some(&coach), Capability::AddObservation, &own_team));
        let err = engine
            .require_capability_in(Some(&coach), Capability::AddObservation, &other_team)
            .unwrap_err();
        assert!(err.to_string().contains("outside the user's team"));

        // A coach without a team binding is organization-wide.
        let club_coach = user(Role::Coach);
        let scope = Scope::organization(club_coach.organization_id).with_team(TeamId::new());
        assert!(engine.has_capability_in(Some(&club_coach), Capability::AddObservation, &scope));

        // Admins ignore team bindings.
        let team_admin = admin().with_team(team);
        let scope = Scope::organization(team_admin.organization_id).with_team(TeamId::new());
        assert!(engine.has_capability_in(Some(&team_admin), Capability::AddObservation, &scope));
    }

    #[test]
    fn own_capabilities_bind_to_the_acting_user() {
        let engine = AuthorizationEngine::builtin();
        let player = user(Role::Player);
        let org = Scope::organization(player.organization_id);

        assert!(engine.has_capability_in(
            Some(&player),
            Capability::ViewOwnDevelopmentPlans,
            &org.with_person(player.id)
        ));
        assert!(!engine.has_capability_in(
            Some(&player),
            Capability::ViewOwnDevelopmentPlans,
            &org.with_person(UserId::new())
        ));
    }

    #[test]
    fn child_capabilities_bind_to_dependents() {
        let engine = AuthorizationEngine::builtin();
        let child = UserId::new();
        let parent = user(Role::Parent).with_dependent(child);
        let org = Scope::organization(parent.organization_id);

        assert!(engine.has_capability_in(
            Some(&parent),
            Capability::ViewChildObservations,
            &org.with_person(child)
        ));
        assert!(!engine.has_capability_in(
            Some(&parent),
            Capability::ViewChildObservations,
            &org.with_person(UserId::new())
        ));
    }

    #[test]
    fn scope_never_widens_a_missing_grant() {
        let engine = AuthorizationEngine::builtin();
        let player = user(Role::Player);
        let scope = Scope::organization(player.organization_id).with_person(player.id);
        assert!(!engine.has_capability_in(Some(&player), Capability::AddPlayer, &scope));
        assert!(matches!(
            engine.require_capability_in(None, Capability::AddPlayer, &scope),
            Err(AuthzError::Unauthorized)
        ));
    }

    /// Elevated primary roles get the same scope treatment as the flags.
    #[test]
    fn elevated_primary_roles_scope_like_their_flags() {
        let engine = AuthorizationEngine::builtin();
        let foreign = Scope::organization(OrganizationId::new());

        for operator in [user(Role::Superadmin), user(Role::Coach).with_superadmin(true)] {
            assert!(has_role(Some(&operator), Role::Superadmin));
            assert!(engine
                .require_capability_in(Some(&operator), Capability::ManageOrganizations, &foreign)
                .is_ok());
        }

        let team = TeamId::new();
        for admin in [
            user(Role::Admin).with_team(team),
            user(Role::Coach).with_admin(true).with_team(team),
        ] {
            let other_team = Scope::organization(admin.organization_id)
                .with_team(TeamId::new())
                .with_person(UserId::new());
            assert!(engine
                .require_capability_in(Some(&admin), Capability::ViewChildObservations, &other_team)
                .is_ok());
            assert!(!engine.has_capability_in(Some(&admin), Capability::ManageTeams, &foreign));
        }
    }

    /// Capabilities no role entry grants stay reachable through the flags.
    #[test]
    fn shortcut_only_capabilities_reach_elevated_flags() {
        let registry = Registry::from_toml_str(
            r#"
            [roles.coach]
            capabilities = ["add_player"]

            [roles.admin]
            capabilities = ["add_player"]

            [roles.superadmin]
            capabilities = ["add_player"]
            "#,
        )
        .unwrap();
        let shortcut_only = registry.coverage().shortcut_only;
        let engine = AuthorizationEngine::new(Arc::new(registry));

        for capability in shortcut_only.iter() {
            assert!(engine.has_capability(Some(&superadmin()), capability));
            assert_eq!(
                engine.has_capability(Some(&admin()), capability),
                !capability.is_superadmin_exclusive(),
                "{capability}"
            );
        }
    }

    // ── Guard ────────────────────────────────────────────────────────────────

    #[test]
    fn guard_coach_adds_observation_then_is_refused_organizations() {
        let sink = MockSink::default();
        let guard = guard_with(sink.clone());
        let coach = user(Role::Coach);

        assert_eq!(
            guard.enforce(Some(&coach), "add_observation", None).unwrap(),
            Capability::AddObservation
        );
        let err = guard
            .enforce(Some(&coach), "manage_organizations", None)
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Forbidden);

        let records = sink.records.lock().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].decision, Decision::Allow);
        assert!(matches!(
            records[1].decision,
            Decision::Deny { kind: ErrorKind::Forbidden, .. }
        ));
    }

    #[test]
    fn guard_anonymous_request_is_unauthorized_not_forbidden() {
        let sink = MockSink::default();
        let guard = guard_with(sink.clone());

        for capability in Capability::ALL {
            let err = guard.enforce(None, capability.as_str(), None).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Unauthorized, "{capability}");
        }
        assert_eq!(sink.records.lock().unwrap().len(), Capability::ALL.len());
    }

    #[test]
    fn guard_records_unknown_capability_verbatim() {
        let sink = MockSink::default();
        let guard = guard_with(sink.clone());
        let err = guard
            .enforce(Some(&superadmin()), "player:write", None)
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::CapabilityNotFound);

        let records = sink.records.lock().unwrap();
        assert_eq!(records[0].capability, "player:write");
        assert!(matches!(
            records[0].decision,
            Decision::Deny { kind: ErrorKind::CapabilityNotFound, .. }
        ));
    }

    #[test]
    fn guard_denied_action_never_runs() {
        let guard = guard_with(MockSink::default());
        let mut ran = false;
        let result: Result<(), GuardError<String>> =
            guard.run(Some(&user(Role::Player)), "add_player", None, |_| {
                ran = true;
                Ok(())
            });

        assert!(!ran, "gated action must not run after a denial");
        match result {
            Err(GuardError::Denied(err)) => assert_eq!(err.kind(), ErrorKind::Forbidden),
            other => panic!("expected Denied, got {:?}", other),
        }
    }

    #[test]
    fn guard_allowed_action_runs_and_surfaces_its_error() {
        let guard = guard_with(MockSink::default());
        let coach = user(Role::Coach);

        let created = guard
            .run(Some(&coach), "add_player", None, |cap| {
                Ok::<_, String>(format!("{cap} done"))
            })
            .unwrap();
        assert_eq!(created, "add_player done");

        let failed = guard.run(Some(&coach), "add_player", None, |_| {
            Err::<(), _>("duplicate shirt number".to_string())
        });
        match failed {
            Err(GuardError::Action(msg)) => assert_eq!(msg, "duplicate shirt number"),
            other => panic!("expected Action error, got {:?}", other),
        }
    }

    #[test]
    fn guard_sink_failure_denies_even_allowed_requests() {
        let guard = Guard::new(Box::new(AuthorizationEngine::builtin()), Box::new(BrokenSink));
        let mut ran = false;
        let result: Result<(), GuardError<String>> =
            guard.run(Some(&superadmin()), "view_dashboard", None, |_| {
                ran = true;
                Ok(())
            });

        assert!(!ran);
        match result {
            Err(GuardError::Denied(AuthzError::AuditWriteFailed { reason })) => {
                assert!(reason.contains("disk full"))
            }
            other => panic!("expected AuditWriteFailed, got {:?}", other),
        }
    }

    #[test]
    fn guard_records_scope() {
        let sink = MockSink::default();
        let guard = guard_with(sink.clone());
        let coach = user(Role::Coach);
        let scope = Scope::organization(OrganizationId::new());

        let err = guard
            .enforce(Some(&coach), "add_player", Some(&scope))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Forbidden);

        let records = sink.records.lock().unwrap();
        assert_eq!(records[0].scope, Some(scope));
        assert_eq!(records[0].primary_role, Some(Role::Coach));
        let json = serde_json::to_value(&records[0]).unwrap();
        assert_eq!(json["decision"]["outcome"], "deny");
    }
}
