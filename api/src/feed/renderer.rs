//! RSS renderer
//!
//! Serializes the normalized feed model to an RSS 2.0 document via the
//! `rss` crate. Serialization failures surface as `RenderError` rather
//! than a truncated document.

use rss::{Channel, ChannelBuilder, Guid, Item, ItemBuilder};

use crate::error::RenderError;
use crate::feed::{Feed, FeedItem};

/// Render a feed as an RSS 2.0 document.
pub fn render_rss(feed: &Feed) -> Result<String, RenderError> {
    let items: Vec<Item> = feed.items.iter().map(render_item).collect();

    let channel: Channel = ChannelBuilder::default()
        .title(feed.title.clone())
        .link(feed.link.clone())
        .description(feed.description.clone())
        .managing_editor(Some(feed.author.clone()))
        .pub_date(Some(feed.created.to_rfc2822()))
        .items(items)
        .build();

    let mut buf = Vec::new();
    channel.write_to(&mut buf)?;

    Ok(String::from_utf8(buf)?)
}

fn render_item(item: &FeedItem) -> Item {
    // The guid is an upstream post id, not a resolvable URL.
    let mut guid = Guid::default();
    guid.set_value(item.id.clone());
    guid.set_permalink(false);

    ItemBuilder::default()
        .guid(Some(guid))
        .title(Some(item.title.clone()))
        .link(Some(item.link.clone()))
        .description(Some(item.description.clone()))
        .pub_date(item.created.map(|t| t.to_rfc2822()))
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::build_feed;
    use crate::test_utils::{test_post, test_post_created_at};

    fn parse(document: &str) -> Channel {
        Channel::read_from(document.as_bytes()).unwrap()
    }

    #[test]
    fn channel_carries_feed_metadata() {
        let feed = build_feed("alice", "/feed/alice.xml", vec![test_post("1001")]);

        let channel = parse(&render_rss(&feed).unwrap());

        assert_eq!(channel.title(), "alice tweets");
        assert_eq!(channel.link(), "/feed/alice.xml");
        assert_eq!(channel.description(), "alice tweets");
        assert_eq!(channel.managing_editor(), Some("birdfeed"));
        assert!(channel.pub_date().is_some());
    }

    #[test]
    fn one_item_per_post_in_order() {
        let posts = vec![test_post("30"), test_post("10"), test_post("20")];
        let feed = build_feed("alice", "/feed/alice.xml", posts);

        let channel = parse(&render_rss(&feed).unwrap());

        let guids: Vec<&str> = channel
            .items()
            .iter()
            .map(|i| i.guid().unwrap().value())
            .collect();
        assert_eq!(guids, ["30", "10", "20"]);
    }

    #[test]
    fn item_guid_is_not_a_permalink() {
        let feed = build_feed("alice", "/feed/alice.xml", vec![test_post("1001")]);

        let channel = parse(&render_rss(&feed).unwrap());

        let guid = channel.items()[0].guid().unwrap();
        assert_eq!(guid.value(), "1001");
        assert!(!guid.is_permalink());
    }

    #[test]
    fn item_fields_come_from_the_post() {
        let post = test_post("1001");
        let source = post.source.clone();
        let text = post.text.clone();
        let feed = build_feed("alice", "/feed/alice.xml", vec![post]);

        let channel = parse(&render_rss(&feed).unwrap());

        let item = &channel.items()[0];
        assert_eq!(item.title(), Some("1001"));
        assert_eq!(item.link(), Some(source.as_str()));
        assert_eq!(item.description(), Some(text.as_str()));
        assert!(item.pub_date().is_some());
    }

    #[test]
    fn empty_feed_renders_zero_items() {
        let feed = build_feed("alice", "/feed/alice.xml", vec![]);

        let channel = parse(&render_rss(&feed).unwrap());

        assert!(channel.items().is_empty());
    }

    #[test]
    fn item_without_creation_time_has_no_pub_date() {
        let feed = build_feed(
            "alice",
            "/feed/alice.xml",
            vec![test_post_created_at("1", "garbage")],
        );

        let channel = parse(&render_rss(&feed).unwrap());

        assert!(channel.items()[0].pub_date().is_none());
    }
}
