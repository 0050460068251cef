// state containers and shared logic for the site
//
// nothing in here touches the browser directly: durable storage, the document
// root and the network are reached through the traits in preference and
// contact, so every invariant can be checked on the host
pub mod config;
pub mod contact;
pub mod feedback;
pub mod notice;
pub mod preference;
pub mod tween;

// date stamp used on feedback entries
pub const DATE_FORMAT: &str = "%Y-%m-%d";
