/// One segment of a user message sent to the reasoning service.
#[derive(Debug, Clone, PartialEq)]
pub enum ContentBlock {
    Text(String),
    InputAudio { data: String, format: String },
}

impl ContentBlock {
    pub fn text(text: impl Into<String>) -> Self {
        ContentBlock::Text(text.into())
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            ContentBlock::Text(text) => Some(text),
            ContentBlock::InputAudio { .. } => None,
        }
    }

    pub fn is_audio(&self) -> bool {
        matches!(self, ContentBlock::InputAudio { .. })
    }
}
