use crate::common::client_with_token;
use instagram_client::model::endpoints;
use instagram_client::prelude::*;
use reqwest::Method;

#[test]
fn media_by_tag_path_is_independent_of_token_source() {
    let (with_default, _) = client_with_token(Some("DEFAULT"));
    let (without_default, _) = client_with_token(None);

    let from_default = with_default
        .prepare(endpoints::media_by_tag("sunset"), None)
        .unwrap();
    let from_override = with_default
        .prepare(endpoints::media_by_tag("sunset"), Some("EXPLICIT"))
        .unwrap();
    let from_explicit_only = without_default
        .prepare(endpoints::media_by_tag("sunset"), Some("EXPLICIT"))
        .unwrap();

    for request in [&from_default, &from_override, &from_explicit_only] {
        assert_eq!(request.path, "/tags/sunset/media/recent");
        assert_eq!(
            request.url(&with_default.config().api_url()),
            "https://api.instagram.com/v1/tags/sunset/media/recent"
        );
    }
    assert_eq!(from_default.access_token(), Some("DEFAULT"));
    assert_eq!(from_override.access_token(), Some("EXPLICIT"));
    assert_eq!(from_explicit_only.access_token(), Some("EXPLICIT"));
}

#[test]
fn every_endpoint_matches_provider_paths() {
    let point = Coordinates::new(1.5, 2.5);
    let cases = vec![
        (endpoints::self_profile(), Method::GET, "/users/self/"),
        (endpoints::self_media(), Method::GET, "/users/self/media/recent/"),
        (endpoints::self_media_liked(), Method::GET, "/users/self/media/liked"),
        (endpoints::user("7"), Method::GET, "/users/7/"),
        (endpoints::user_media("7"), Method::GET, "/users/7/media/recent/"),
        (endpoints::search_users("jack", None), Method::GET, "/users/search"),
        (endpoints::user_relationship("7"), Method::GET, "/users/7/relationship"),
        (
            endpoints::update_relationship("7", RelationshipAction::Approve),
            Method::POST,
            "/users/7/relationship",
        ),
        (endpoints::self_follows(), Method::GET, "/users/self/follows"),
        (endpoints::self_followers(), Method::GET, "/users/self/followed-by"),
        (endpoints::self_pending(), Method::GET, "/users/self/requested-by"),
        (endpoints::media("9"), Method::GET, "/media/9"),
        (endpoints::search_media(point), Method::GET, "/media/search"),
        (endpoints::media_comments("9"), Method::GET, "/media/9/comments"),
        (endpoints::add_comment("9", "hi"), Method::POST, "/media/9/comments"),
        (endpoints::remove_comment("9", "3"), Method::DELETE, "/media/9/comments/3"),
        (endpoints::media_likes("9"), Method::GET, "/media/9/likes"),
        (endpoints::add_like("9"), Method::POST, "/media/9/likes"),
        (endpoints::remove_like("9"), Method::DELETE, "/media/9/likes"),
        (endpoints::tag("rust"), Method::GET, "/tags/rust"),
        (endpoints::media_by_tag("rust"), Method::GET, "/tags/rust/media/recent"),
        (endpoints::search_tags("ru"), Method::GET, "/tags/search"),
        (endpoints::location("5"), Method::GET, "/locations/5"),
        (endpoints::media_by_location("5"), Method::GET, "/locations/5/media/recent"),
        (endpoints::search_locations(point), Method::GET, "/locations/search"),
    ];

    assert_eq!(cases.len(), 25);
    for (request, method, path) in cases {
        assert_eq!(request.method, method, "{path}");
        assert_eq!(request.path, path);
        assert_eq!(request.access_token(), None, "{path}");
    }
}
