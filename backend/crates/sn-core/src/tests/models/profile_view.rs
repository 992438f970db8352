use crate::ProfileView;

#[test]
fn test_profile_view_is_own() {
    assert!(ProfileView::OwnProfile.is_own());
    assert!(!ProfileView::OtherProfile { is_following: true }.is_own());
    assert!(
        !ProfileView::OtherProfile {
            is_following: false
        }
        .is_own()
    );
}

#[test]
fn test_profile_view_serializes_with_kind_tag() {
    let own = serde_json::to_value(ProfileView::OwnProfile).unwrap();
    assert_eq!(own["kind"], "own_profile");

    let other = serde_json::to_value(ProfileView::OtherProfile { is_following: true }).unwrap();
    assert_eq!(other["kind"], "other_profile");
    assert_eq!(other["is_following"], true);
}
