/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/

//! Request builders for every resource endpoint
//!
//! Paths are relative to the versioned API root (`https://api.instagram.com/v1`)
//! and match the provider byte for byte, trailing slashes included.
//! Identifiers are substituted verbatim. None of these builders adds the
//! access token; the client appends it right before dispatch.

use crate::model::requests::{Coordinates, EndpointRequest, RelationshipAction};

// users

/// `GET /users/self/`
pub fn self_profile() -> EndpointRequest {
    EndpointRequest::get("/users/self/")
}

/// `GET /users/self/media/recent/`
pub fn self_media() -> EndpointRequest {
    EndpointRequest::get("/users/self/media/recent/")
}

/// `GET /users/self/media/liked`
pub fn self_media_liked() -> EndpointRequest {
    EndpointRequest::get("/users/self/media/liked")
}

/// `GET /users/{user_id}/`
pub fn user(user_id: &str) -> EndpointRequest {
    EndpointRequest::get(format!("/users/{user_id}/"))
}

/// `GET /users/{user_id}/media/recent/`
pub fn user_media(user_id: &str) -> EndpointRequest {
    EndpointRequest::get(format!("/users/{user_id}/media/recent/"))
}

/// `GET /users/search?q=..&count=..`, `count` omitted when `None`
pub fn search_users(query: &str, count: Option<u32>) -> EndpointRequest {
    let request = EndpointRequest::get("/users/search").with_query("q", query);
    match count {
        Some(count) => request.with_query("count", count),
        None => request,
    }
}

// relationships

/// `GET /users/{user_id}/relationship`
pub fn user_relationship(user_id: &str) -> EndpointRequest {
    EndpointRequest::get(format!("/users/{user_id}/relationship"))
}

/// `POST /users/{user_id}/relationship` with `action`
pub fn update_relationship(user_id: &str, action: RelationshipAction) -> EndpointRequest {
    EndpointRequest::post(format!("/users/{user_id}/relationship")).with_form("action", action)
}

/// `GET /users/self/follows`
pub fn self_follows() -> EndpointRequest {
    EndpointRequest::get("/users/self/follows")
}

/// `GET /users/self/followed-by`
pub fn self_followers() -> EndpointRequest {
    EndpointRequest::get("/users/self/followed-by")
}

/// `GET /users/self/requested-by`
pub fn self_pending() -> EndpointRequest {
    EndpointRequest::get("/users/self/requested-by")
}

// media

/// `GET /media/{media_id}`
pub fn media(media_id: &str) -> EndpointRequest {
    EndpointRequest::get(format!("/media/{media_id}"))
}

/// `GET /media/search?lat=..&lng=..`
pub fn search_media(location: Coordinates) -> EndpointRequest {
    EndpointRequest::get("/media/search")
        .with_query("lat", location.lat)
        .with_query("lng", location.lng)
}

// comments

/// `GET /media/{media_id}/comments`
pub fn media_comments(media_id: &str) -> EndpointRequest {
    EndpointRequest::get(format!("/media/{media_id}/comments"))
}

/// `POST /media/{media_id}/comments` with `text`
pub fn add_comment(media_id: &str, text: &str) -> EndpointRequest {
    EndpointRequest::post(format!("/media/{media_id}/comments")).with_form("text", text)
}

/// `DELETE /media/{media_id}/comments/{comment_id}`
pub fn remove_comment(media_id: &str, comment_id: &str) -> EndpointRequest {
    EndpointRequest::delete(format!("/media/{media_id}/comments/{comment_id}"))
}

// likes

/// `GET /media/{media_id}/likes`
pub fn media_likes(media_id: &str) -> EndpointRequest {
    EndpointRequest::get(format!("/media/{media_id}/likes"))
}

/// `POST /media/{media_id}/likes`
pub fn add_like(media_id: &str) -> EndpointRequest {
    EndpointRequest::post(format!("/media/{media_id}/likes"))
}

/// `DELETE /media/{media_id}/likes`
pub fn remove_like(media_id: &str) -> EndpointRequest {
    EndpointRequest::delete(format!("/media/{media_id}/likes"))
}

// tags

/// `GET /tags/{tag}`
pub fn tag(tag: &str) -> EndpointRequest {
    EndpointRequest::get(format!("/tags/{tag}"))
}

/// `GET /tags/{tag}/media/recent`
pub fn media_by_tag(tag: &str) -> EndpointRequest {
    EndpointRequest::get(format!("/tags/{tag}/media/recent"))
}

/// `GET /tags/search?q=..`
pub fn search_tags(query: &str) -> EndpointRequest {
    EndpointRequest::get("/tags/search").with_query("q", query)
}

// locations

/// `GET /locations/{location_id}`
pub fn location(location_id: &str) -> EndpointRequest {
    EndpointRequest::get(format!("/locations/{location_id}"))
}

/// `GET /locations/{location_id}/media/recent`
pub fn media_by_location(location_id: &str) -> EndpointRequest {
    EndpointRequest::get(format!("/locations/{location_id}/media/recent"))
}

/// `GET /locations/search?lat=..&lng=..`
pub fn search_locations(location: Coordinates) -> EndpointRequest {
    EndpointRequest::get("/locations/search")
        .with_query("lat", location.lat)
        .with_query("lng", location.lng)
}
