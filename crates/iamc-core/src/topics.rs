//! Well-known Events topics the console reads from.

/// Topic on which chats are announced as `{id, name}` events.
pub const CHATS: &str = "491dc4c5-9734-4156-8ee4-b0cd855d23cc";

/// Topic receiving page-view analytics events.
pub const ANALYTICS: &str = "95e990d4-e445-4649-a28b-bfa3834c1408";
