use crate::Profile;

#[test]
fn test_profile_new() {
    let profile = Profile::new("alice".to_string());

    assert_eq!(profile.username, "alice");
    assert_eq!(profile.bio, "");
    assert!(!profile.has_bio());
    assert_eq!(profile.created_at, profile.updated_at);
}

#[test]
fn test_profile_has_bio() {
    let mut profile = Profile::new("alice".to_string());

    assert!(!profile.has_bio());

    profile.bio = "hello".to_string();
    assert!(profile.has_bio());
}
