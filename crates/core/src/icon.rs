//! Named icons shared by skills, highlights, and links.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    Brain,
    Robot,
    Code,
    ChartLine,
    Github,
    Linkedin,
    Envelope,
    FilePdf,
    OpenAi,
    TensorFlow,
    Python,
    Docker,
    Cloud,
    Table,
    Database,
    Git,
    ArrowRight,
    Moon,
    Sun,
    Chat,
    Close,
}

impl Icon {
    /// Stable identifier, matching the serialized form
    pub fn name(&self) -> &'static str {
        match self {
            Icon::Brain => "brain",
            Icon::Robot => "robot",
            Icon::Code => "code",
            Icon::ChartLine => "chart-line",
            Icon::Github => "github",
            Icon::Linkedin => "linkedin",
            Icon::Envelope => "envelope",
            Icon::FilePdf => "file-pdf",
            Icon::OpenAi => "open-ai",
            Icon::TensorFlow => "tensor-flow",
            Icon::Python => "python",
            Icon::Docker => "docker",
            Icon::Cloud => "cloud",
            Icon::Table => "table",
            Icon::Database => "database",
            Icon::Git => "git",
            Icon::ArrowRight => "arrow-right",
            Icon::Moon => "moon",
            Icon::Sun => "sun",
            Icon::Chat => "chat",
            Icon::Close => "close",
        }
    }

    /// Text glyph used when rendering without an icon font
    pub fn glyph(&self) -> &'static str {
        match self {
            Icon::Brain => "🧠",
            Icon::Robot => "🤖",
            Icon::Code => "💻",
            Icon::ChartLine => "📈",
            Icon::Github => "🐙",
            Icon::Linkedin => "💼",
            Icon::Envelope => "✉️",
            Icon::FilePdf => "📄",
            Icon::OpenAi => "✨",
            Icon::TensorFlow => "🔶",
            Icon::Python => "🐍",
            Icon::Docker => "🧰",
            Icon::Cloud => "☁️",
            Icon::Table => "📊",
            Icon::Database => "🗄️",
            Icon::Git => "🔀",
            Icon::ArrowRight => "→",
            Icon::Moon => "🌙",
            Icon::Sun => "☀️",
            Icon::Chat => "💬",
            Icon::Close => "✕",
        }
    }
}
