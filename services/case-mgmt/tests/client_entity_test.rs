//! 委托人实体与 DTO 集成测试

use chrono::Utc;
use lexcm_common::ClientId;

use case_mgmt::application::dto::{ClientCreate, ClientRead, ClientUpdate};
use case_mgmt::domain::client::{Client, ClientPatch, NewClient};

/// 测试辅助：创建已持久化形态的委托人
fn stored_client() -> Client {
    let now = Utc::now();
    Client {
        id: ClientId(1),
        name: "Ada Lovelace".to_string(),
        email: "ada@example.com".to_string(),
        created_at: now,
        updated_at: now,
    }
}

#[test]
fn test_client_create_maps_to_new_client() {
    let input: ClientCreate =
        serde_json::from_str(r#"{"name":"Ada Lovelace","email":"ada@example.com"}"#)
            .expect("valid payload");
    let new_client = NewClient::from(input);

    assert_eq!(new_client.name, "Ada Lovelace");
    assert_eq!(new_client.email, "ada@example.com");
}

#[test]
fn test_client_update_omitted_fields_stay_untouched() {
    let mut client = stored_client();

    let patch: ClientPatch = serde_json::from_str::<ClientUpdate>(r#"{"name":"Grace Hopper"}"#)
        .expect("valid payload")
        .into();
    client.apply_patch(patch);

    assert_eq!(client.name, "Grace Hopper");
    assert_eq!(client.email, "ada@example.com");
}

#[test]
fn test_client_update_both_fields() {
    let mut client = stored_client();

    let patch: ClientPatch =
        serde_json::from_str::<ClientUpdate>(r#"{"name":"Grace","email":"grace@example.com"}"#)
            .expect("valid payload")
            .into();
    client.apply_patch(patch);

    assert_eq!(client.name, "Grace");
    assert_eq!(client.email, "grace@example.com");
}

#[test]
fn test_client_read_serializes_full_entity() {
    let read = ClientRead::from(stored_client());
    let json = serde_json::to_value(&read).expect("serializable");

    assert_eq!(json["id"], 1);
    assert_eq!(json["name"], "Ada Lovelace");
    assert_eq!(json["email"], "ada@example.com");
    assert!(json["created_at"].is_string());
    assert!(json["updated_at"].is_string());
}
