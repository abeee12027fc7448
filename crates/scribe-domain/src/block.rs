//! Block module - the document store's content tree, as this service sees it

use serde::{Deserialize, Serialize};

/// The type tag of a content block
///
/// The store's block vocabulary is open-ended; this service only reads
/// text out of the four types below. Everything else round-trips through
/// `Other` and contributes nothing to extraction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum BlockType {
    /// Plain paragraph
    Paragraph,
    /// Top-level heading
    Heading1,
    /// Second-level heading
    Heading2,
    /// Third-level heading
    Heading3,
    /// Any block type this service does not interpret
    Other(String),
}

impl BlockType {
    /// Get the store's wire tag for this type
    pub fn as_str(&self) -> &str {
        match self {
            BlockType::Paragraph => "paragraph",
            BlockType::Heading1 => "heading_1",
            BlockType::Heading2 => "heading_2",
            BlockType::Heading3 => "heading_3",
            BlockType::Other(tag) => tag,
        }
    }
}

impl From<String> for BlockType {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "paragraph" => BlockType::Paragraph,
            "heading_1" => BlockType::Heading1,
            "heading_2" => BlockType::Heading2,
            "heading_3" => BlockType::Heading3,
            _ => BlockType::Other(tag),
        }
    }
}

impl From<BlockType> for String {
    fn from(block_type: BlockType) -> Self {
        block_type.as_str().to_string()
    }
}

/// One inline text span inside a block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RichText {
    /// The span's text with all formatting stripped
    pub plain_text: String,
}

impl RichText {
    /// Create a span from plain text
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            plain_text: text.into(),
        }
    }
}

/// One node of a page's content tree
///
/// Owned by the external document store; this service reads and writes
/// blocks transiently and never mutates one in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentBlock {
    /// Store-assigned identifier; absent on blocks built for appending
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// The block's type tag
    #[serde(rename = "type")]
    pub block_type: BlockType,

    /// Ordered inline text spans
    #[serde(default)]
    pub rich_text: Vec<RichText>,
}

impl ContentBlock {
    /// Build a paragraph block for appending
    pub fn paragraph(text: impl Into<String>) -> Self {
        Self {
            id: None,
            block_type: BlockType::Paragraph,
            rich_text: vec![RichText::new(text)],
        }
    }

    /// Build a heading block (level clamped to 1..=3) for appending
    pub fn heading(level: u8, text: impl Into<String>) -> Self {
        let block_type = match level {
            0 | 1 => BlockType::Heading1,
            2 => BlockType::Heading2,
            _ => BlockType::Heading3,
        };
        Self {
            id: None,
            block_type,
            rich_text: vec![RichText::new(text)],
        }
    }

    /// Concatenate this block's spans into plain text
    pub fn plain_text(&self) -> String {
        self.rich_text
            .iter()
            .map(|span| span.plain_text.as_str())
            .collect()
    }
}

/// One page of a paginated child listing
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BlockPage {
    /// Blocks in retrieval order
    pub results: Vec<ContentBlock>,

    /// Continuation token; `None` signals end of sequence
    pub next_cursor: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_type_tags_round_trip() {
        for tag in ["paragraph", "heading_1", "heading_2", "heading_3"] {
            let block_type = BlockType::from(tag.to_string());
            assert_eq!(block_type.as_str(), tag);
            assert!(!matches!(block_type, BlockType::Other(_)));
        }
    }

    #[test]
    fn test_unknown_tag_preserved() {
        let block_type = BlockType::from("to_do".to_string());
        assert_eq!(block_type, BlockType::Other("to_do".to_string()));
        assert_eq!(block_type.as_str(), "to_do");
    }

    #[test]
    fn test_plain_text_concatenates_spans() {
        let block = ContentBlock {
            id: Some("b1".to_string()),
            block_type: BlockType::Paragraph,
            rich_text: vec![RichText::new("Hello, "), RichText::new("world")],
        };
        assert_eq!(block.plain_text(), "Hello, world");
    }

    #[test]
    fn test_plain_text_empty_block() {
        let block = ContentBlock {
            id: None,
            block_type: BlockType::Paragraph,
            rich_text: vec![],
        };
        assert_eq!(block.plain_text(), "");
    }

    #[test]
    fn test_heading_levels() {
        assert_eq!(ContentBlock::heading(1, "t").block_type, BlockType::Heading1);
        assert_eq!(ContentBlock::heading(2, "t").block_type, BlockType::Heading2);
        assert_eq!(ContentBlock::heading(3, "t").block_type, BlockType::Heading3);
        assert_eq!(ContentBlock::heading(9, "t").block_type, BlockType::Heading3);
    }

    #[test]
    fn test_serde_type_tag() {
        let block = ContentBlock::paragraph("hi");
        let json = serde_json::to_value(&block).unwrap();
        assert_eq!(json["type"], "paragraph");
        assert_eq!(json["rich_text"][0]["plain_text"], "hi");

        let parsed: ContentBlock = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, block);
    }

    #[test]
    fn test_serde_unknown_type() {
        let json = serde_json::json!({
            "id": "b2",
            "type": "bulleted_list_item",
            "rich_text": [{"plain_text": "item"}]
        });
        let block: ContentBlock = serde_json::from_value(json).unwrap();
        assert_eq!(
            block.block_type,
            BlockType::Other("bulleted_list_item".to_string())
        );
    }
}
