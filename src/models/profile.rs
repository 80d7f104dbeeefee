//! Minimal model of the page document served at `/<account>/?__a=1`.
//!
//! Only the path down to the timeline media is decoded; anything else in the
//! document is ignored. A document missing any link of this path fails the
//! decode, there is no lenient fallback.

use serde::Deserialize;
use url::Url;

#[derive(Debug, Deserialize)]
pub struct PageDocument {
    pub graphql: Graphql,
}

#[derive(Debug, Deserialize)]
pub struct Graphql {
    pub user: User,
}

#[derive(Debug, Deserialize)]
pub struct User {
    pub edge_owner_to_timeline_media: TimelineMedia,
}

#[derive(Debug, Deserialize)]
pub struct TimelineMedia {
    pub edges: Vec<Edge>,
}

#[derive(Debug, Deserialize)]
pub struct Edge {
    pub node: Node,
}

#[derive(Debug, Deserialize)]
pub struct Node {
    // Renderable image asset.
    pub display_url: Url,
    // Post shortcode, handy for naming the saved file.
    #[serde(default)]
    pub shortcode: Option<String>,
}
