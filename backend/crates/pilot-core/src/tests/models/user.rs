use crate::{NewUser, User};

use uuid::Uuid;

#[test]
fn test_user_from_new() {
    let id = Uuid::new_v4();
    let user = User::from_new(NewUser::new("admin", "hunter2"), id);

    assert_eq!(user.id, id);
    assert_eq!(user.username, "admin");
    assert_eq!(user.password, "hunter2");
}

#[test]
fn test_user_password_not_serialized() {
    let user = User::from_new(NewUser::new("admin", "hunter2"), Uuid::new_v4());

    let json = serde_json::to_value(&user).unwrap();

    assert_eq!(json["username"], "admin");
    assert!(json.get("password").is_none());
}
