use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use database_provisioner::provisioner::interfaces::rest::{
    controllers::provisioner_rest_controller::{
        ProvisionerRestControllerState, provision_database, teardown_database,
    },
    resources::provision_database_request_resource::ProvisionDatabaseRequestResource,
};

use crate::support::{
    already_exists, create_harness, failed,
    fakes::{ASSIGN_PASSWORD, CREATE_DATABASE_USER, FakeDatabaseAdministrationRepository},
    harness::ProvisioningTestHarness,
};

fn state_for(harness: ProvisioningTestHarness) -> ProvisionerRestControllerState {
    ProvisionerRestControllerState {
        command_service: Arc::new(harness.service),
    }
}

fn request(name: &str, password: &str) -> Json<ProvisionDatabaseRequestResource> {
    Json(ProvisionDatabaseRequestResource {
        name: name.to_string(),
        password: password.to_string(),
    })
}

#[tokio::test]
async fn provision_endpoint_returns_created_report() {
    let repository = FakeDatabaseAdministrationRepository::new()
        .respond(CREATE_DATABASE_USER, already_exists("user already exists"));
    let harness = create_harness(repository.clone(), false);

    let result = provision_database(
        State(state_for(harness)),
        request("tenant_alpha", "supersecret"),
    )
    .await;

    let (status, Json(body)) = result.expect("provisioning should succeed");
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body.database_name, "tenant_alpha");
    assert!(!body.user_created);
    assert_eq!(
        body.steps
            .iter()
            .map(|step| (step.step.as_str(), step.disposition.as_str()))
            .collect::<Vec<_>>(),
        vec![
            ("create_database", "applied"),
            ("create_user", "already_existed"),
            ("assign_password", "skipped"),
            ("grant_privileges", "applied"),
        ]
    );
    assert_eq!(repository.call_count(ASSIGN_PASSWORD), 0);
}

#[tokio::test]
async fn provision_endpoint_rejects_invalid_name_before_touching_cluster() {
    let repository = FakeDatabaseAdministrationRepository::new();
    let harness = create_harness(repository.clone(), false);

    let result = provision_database(
        State(state_for(harness)),
        request("bad-name; DROP ROLE postgres", "supersecret"),
    )
    .await;

    assert!(matches!(result, Err((StatusCode::BAD_REQUEST, _))));
    assert!(repository.calls().is_empty());
}

#[tokio::test]
async fn provision_and_teardown_normalize_names_the_same_way() {
    let repository = FakeDatabaseAdministrationRepository::new();
    let harness = create_harness(repository.clone(), false);
    let state = state_for(harness);

    let provisioned = provision_database(
        State(state.clone()),
        request(" Tenant_Alpha ", "supersecret"),
    )
    .await;
    let torn_down = teardown_database(State(state), Path("Tenant_Alpha".to_string())).await;

    let (status, Json(body)) = provisioned.expect("provisioning should succeed");
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body.database_name, "tenant_alpha");
    assert!(matches!(torn_down, Ok(StatusCode::NO_CONTENT)));
    assert!(
        repository
            .calls()
            .iter()
            .all(|call| call.arguments[0] == "tenant_alpha")
    );
}

#[tokio::test]
async fn provision_endpoint_still_requires_eight_character_passwords() {
    let repository = FakeDatabaseAdministrationRepository::new();
    let harness = create_harness(repository.clone(), false);

    let result = provision_database(State(state_for(harness)), request("db", "pw")).await;

    assert!(matches!(result, Err((StatusCode::BAD_REQUEST, _))));
    assert!(repository.calls().is_empty());
}

#[tokio::test]
async fn provision_endpoint_maps_step_failure_to_bad_gateway() {
    let repository =
        FakeDatabaseAdministrationRepository::new().respond(ASSIGN_PASSWORD, failed("boom"));
    let harness = create_harness(repository, false);

    let result = provision_database(
        State(state_for(harness)),
        request("tenant_alpha", "supersecret"),
    )
    .await;

    let Err((status, Json(body))) = result else {
        panic!("provisioning should fail");
    };
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body.message, "provisioning failed at assign_password: boom");
}

#[tokio::test]
async fn provision_endpoint_maps_connection_failure_to_service_unavailable() {
    let harness = create_harness(FakeDatabaseAdministrationRepository::new(), true);

    let result = provision_database(
        State(state_for(harness)),
        request("tenant_alpha", "supersecret"),
    )
    .await;

    assert!(matches!(result, Err((StatusCode::SERVICE_UNAVAILABLE, _))));
}

#[tokio::test]
async fn teardown_endpoint_returns_no_content() {
    let repository = FakeDatabaseAdministrationRepository::new();
    let harness = create_harness(repository.clone(), false);

    let result = teardown_database(
        State(state_for(harness)),
        Path("tenant_alpha".to_string()),
    )
    .await;

    assert!(matches!(result, Ok(StatusCode::NO_CONTENT)));
    assert_eq!(repository.close_calls(), 1);
}

#[tokio::test]
async fn teardown_endpoint_rejects_invalid_name() {
    let harness = create_harness(FakeDatabaseAdministrationRepository::new(), false);

    let result = teardown_database(State(state_for(harness)), Path("1x".to_string())).await;

    assert!(matches!(result, Err((StatusCode::BAD_REQUEST, _))));
}
