use crate::FollowEdge;

use uuid::Uuid;

#[test]
fn test_follow_edge_new() {
    let follower = Uuid::new_v4();
    let followee = Uuid::new_v4();
    let edge = FollowEdge::new(follower, followee);

    assert_eq!(edge.follower_id, follower);
    assert_eq!(edge.followee_id, followee);
    assert!(!edge.is_self_edge());
}

#[test]
fn test_follow_edge_self_edge() {
    let id = Uuid::new_v4();
    let edge = FollowEdge::new(id, id);

    assert!(edge.is_self_edge());
}
