use dotdocs_commons::capitalize;

use crate::error::CheckError;
use crate::shortcuts::ShortcutExtractor;

/// Shortcut count of one tool page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolStats {
    pub tool: String,
    pub display_name: String,
    pub count: usize,
}

/// Per-tool counts in report order plus their sum.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ShortcutStats {
    pub tools: Vec<ToolStats>,
    pub total: usize,
}

impl ShortcutStats {
    /// Extract every tool's page, in the order given.
    pub fn collect<S: AsRef<str>>(
        extractor: &ShortcutExtractor,
        tools: &[S],
    ) -> Result<Self, CheckError> {
        let mut stats = Self::default();
        for tool in tools {
            let tool = tool.as_ref();
            let count = extractor.extract(tool)?.len();
            stats.total += count;
            stats.tools.push(ToolStats {
                tool: tool.to_string(),
                display_name: capitalize(tool),
                count,
            });
        }
        Ok(stats)
    }
}
